#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Failure of a whole lookup batch
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Remote lookup failed for {symbol}: {source}")]
    Remote {
        symbol: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
