pub mod error;
pub mod language;
pub mod overrides;
pub mod source;
pub mod types;

pub use error::{LoadError, SourceError};
pub use language::Romanizer;
pub use overrides::{Override, apply_overrides};
pub use source::KanjiSource;
pub use types::{DictionaryEntry, KanjiRecord};
