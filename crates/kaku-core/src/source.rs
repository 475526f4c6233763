use crate::error::SourceError;
use crate::types::KanjiRecord;

/// Resolves kanji symbols into full records
#[async_trait::async_trait]
pub trait KanjiSource: Send + Sync {
    /// Look up every symbol in order. Symbols the source does not know are
    /// skipped with a warning; only source-wide failures are errors.
    async fn lookup(&self, symbols: &[String]) -> Result<Vec<KanjiRecord>, SourceError>;

    /// Human readable name for logs
    fn name(&self) -> &str;
}
