use std::path::Path;

use kaku_core::LoadError;
use unicode_normalization::UnicodeNormalization;

use crate::dictionary::DictionaryFile;

pub struct KanjiLoader;

impl KanjiLoader {
    /// Load a kanji dictionary file
    pub fn load_dictionary(path: &Path) -> Result<DictionaryFile, LoadError> {
        tracing::info!("Loading kanji dictionary from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let dict = DictionaryFile::from_json(&json)?;
        tracing::info!(
            "Loaded {} kanji ({} skipped) from dictionary file",
            dict.entry_count(),
            dict.skipped_count()
        );
        Ok(dict)
    }

    /// Load the list of kanji to practise from a JSON array of strings
    pub fn load_symbols(path: &Path) -> Result<Vec<String>, LoadError> {
        tracing::info!("Fetching kanjis from file {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::parse_symbols(&json)
    }

    /// Normalize a symbol list: NFC, trimmed, blanks dropped
    pub fn parse_symbols(json: &str) -> Result<Vec<String>, LoadError> {
        let raw: Vec<String> = serde_json::from_str(json)?;

        let symbols = raw
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw)| {
                let symbol: String = raw.trim().nfc().collect();
                if symbol.is_empty() {
                    tracing::warn!("Blank symbol at position {}, skipping", index);
                    return None;
                }
                if symbol.chars().count() > 1 {
                    tracing::warn!("Symbol {:?} is more than one character", symbol);
                }
                Some(symbol)
            })
            .collect();

        Ok(symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols_normalizes() {
        // U+F9DC is a compatibility ideograph that NFC maps to 隆
        let symbols = KanjiLoader::parse_symbols(r#"["日", " 月 ", "", "\uF9DC"]"#).unwrap();
        assert_eq!(symbols, vec!["日", "月", "\u{9686}"]);
    }

    #[test]
    fn test_parse_symbols_rejects_non_strings() {
        let err = KanjiLoader::parse_symbols(r#"["日", 1]"#).unwrap_err();
        assert!(matches!(err, LoadError::ParseError(_)));
    }

    #[test]
    fn test_load_files_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("kanji.json");
        let dict = dir.path().join("dict.json");
        std::fs::write(&list, r#"["日", "木"]"#).unwrap();
        std::fs::write(&dict, r#"[["日", ["day"], ["ひ"], ["ニチ"]]]"#).unwrap();

        let symbols = KanjiLoader::load_symbols(&list).unwrap();
        let dictionary = KanjiLoader::load_dictionary(&dict).unwrap();
        let records = dictionary.resolve(&symbols);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].symbol, "日");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = KanjiLoader::load_dictionary(Path::new("no/such/dict.json")).unwrap_err();
        assert!(matches!(err, LoadError::IoError(_)));
    }
}
