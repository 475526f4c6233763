#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse font {path}: {message}")]
    FontParse { path: String, message: String },

    #[error("Unsupported font {path}: {reason}")]
    UnsupportedFont { path: String, reason: String },
}
