pub mod api;
pub mod dictionary;
pub mod loader;
pub mod overrides;
pub mod romaji;

pub use api::{ApiError, KanjiApiClient};
pub use dictionary::DictionaryFile;
pub use loader::KanjiLoader;
pub use overrides::curated_overrides;
pub use romaji::JapaneseRomanizer;
