use std::collections::HashMap;

use kaku_core::{DictionaryEntry, KanjiRecord, KanjiSource, LoadError, SourceError};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Kanji data loaded from a bulk JSON dictionary file
///
/// The file is an array of `[symbol, meanings, kun, on]` or
/// `[symbol, meanings, kun, on, [[word, [translations]], ...]]` tuples.
#[derive(Debug, Default)]
pub struct DictionaryFile {
    records: HashMap<String, KanjiRecord>,
    skipped: usize,
}

impl DictionaryFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dictionary. Individual malformed entries are skipped with a
    /// warning; only a document that is not a JSON array fails.
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let raw: Vec<Value> = serde_json::from_str(json_str)?;

        let mut dict = Self::new();
        for (index, value) in raw.into_iter().enumerate() {
            match parse_record(value) {
                Ok(record) => {
                    dict.records.insert(record.symbol.clone(), record);
                }
                Err(e) => {
                    tracing::warn!("Failed to read kanji entry {}, ignoring: {}", index, e);
                    dict.skipped += 1;
                }
            }
        }

        Ok(dict)
    }

    pub fn entry_count(&self) -> usize {
        self.records.len()
    }

    /// Entries dropped while parsing
    pub fn skipped_count(&self) -> usize {
        self.skipped
    }

    pub fn get(&self, symbol: &str) -> Option<&KanjiRecord> {
        self.records.get(symbol)
    }

    /// Records for the requested symbols in request order; unknown symbols
    /// are reported and left out
    pub fn resolve(&self, symbols: &[String]) -> Vec<KanjiRecord> {
        symbols
            .iter()
            .filter_map(|symbol| {
                let record = self.records.get(symbol).cloned();
                if record.is_none() {
                    tracing::warn!("Kanji {} not present in dictionary, ignoring", symbol);
                }
                record
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl KanjiSource for DictionaryFile {
    async fn lookup(&self, symbols: &[String]) -> Result<Vec<KanjiRecord>, SourceError> {
        Ok(self.resolve(symbols))
    }

    fn name(&self) -> &str {
        "dictionary file"
    }
}

fn parse_record(value: Value) -> Result<KanjiRecord, LoadError> {
    let Value::Array(fields) = value else {
        return Err(LoadError::InvalidFormat("entry is not an array".to_string()));
    };

    if !matches!(fields.len(), 4 | 5) {
        return Err(LoadError::InvalidFormat(format!(
            "expected 4 or 5 fields, found {}",
            fields.len()
        )));
    }

    let mut fields = fields.into_iter();
    let symbol: String = next_field(&mut fields, "symbol")?;
    if symbol.trim().is_empty() {
        return Err(LoadError::InvalidFormat("empty symbol".to_string()));
    }

    let meanings = next_field(&mut fields, "meanings")?;
    let kun_readings = next_field(&mut fields, "kun readings")?;
    let on_readings = next_field(&mut fields, "on readings")?;
    let dictionary_entries = match fields.next() {
        Some(Value::Array(raw)) => parse_dictionary_entries(&symbol, raw),
        Some(Value::Null) => {
            return Err(LoadError::InvalidFormat(
                "dictionary entries are null".to_string(),
            ));
        }
        Some(other) => {
            tracing::warn!(
                "Dictionary entries for {} are not a list, ignoring: {}",
                symbol,
                other
            );
            Vec::new()
        }
        None => Vec::new(),
    };

    Ok(KanjiRecord {
        symbol,
        on_readings,
        kun_readings,
        meanings,
        dictionary_entries,
    })
}

fn next_field<T: DeserializeOwned>(
    fields: &mut impl Iterator<Item = Value>,
    name: &str,
) -> Result<T, LoadError> {
    let value = fields
        .next()
        .ok_or_else(|| LoadError::InvalidFormat(format!("missing {name}")))?;
    from_field(value, name)
}

fn from_field<T: DeserializeOwned>(value: Value, name: &str) -> Result<T, LoadError> {
    serde_json::from_value(value).map_err(|e| LoadError::InvalidFormat(format!("bad {name}: {e}")))
}

/// Keep well-formed `[word, [translations]]` pairs with at least one translation
pub fn parse_dictionary_entries(symbol: &str, raw: Vec<Value>) -> Vec<DictionaryEntry> {
    raw.into_iter()
        .filter_map(
            |value| match serde_json::from_value::<(String, Vec<String>)>(value) {
                Ok((_, translations)) if translations.is_empty() => None,
                Ok((word, translations)) => Some(DictionaryEntry::new(word, translations)),
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse dictionary entry for {}, skipping: {}",
                        symbol,
                        e
                    );
                    None
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        ["日", ["day", "sun", "Japan"], ["ひ", "か"], ["ニチ", "ジツ"],
            [["日本", ["Japan"]], ["毎日", ["every day", "daily"]], ["休日", []], ["bad"]]],
        ["月", ["month", "moon"], ["つき"], ["ゲツ", "ガツ"]],
        ["水", ["water"]],
        ["火", "fire", [], []],
        42,
        ["", [], [], []]
    ]"#;

    fn symbols(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parses_good_entries_and_skips_bad() {
        let dict = DictionaryFile::from_json(SAMPLE).unwrap();

        assert_eq!(dict.entry_count(), 2);
        assert_eq!(dict.skipped_count(), 4);

        let nichi = dict.get("日").unwrap();
        assert_eq!(nichi.meanings, vec!["day", "sun", "Japan"]);
        assert_eq!(nichi.kun_readings, vec!["ひ", "か"]);
        assert_eq!(nichi.on_readings, vec!["ニチ", "ジツ"]);
    }

    #[test]
    fn test_invalid_dictionary_entries_dropped() {
        let dict = DictionaryFile::from_json(SAMPLE).unwrap();
        let entries = &dict.get("日").unwrap().dictionary_entries;

        assert_eq!(
            entries,
            &vec![
                DictionaryEntry::new("日本", vec!["Japan".to_string()]),
                DictionaryEntry::new("毎日", vec!["every day".to_string(), "daily".to_string()]),
            ]
        );
        assert!(dict.get("月").unwrap().dictionary_entries.is_empty());
    }

    #[test]
    fn test_missing_symbols_are_omitted() {
        let dict = DictionaryFile::from_json(SAMPLE).unwrap();
        let records = dict.resolve(&symbols(&["月", "木", "日"]));

        let found: Vec<_> = records.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(found, vec!["月", "日"]);
    }

    #[test]
    fn test_non_list_dictionary_entries_keep_record() {
        let json = r#"[
            ["木", ["tree"], ["き"], ["モク"], "oops"],
            ["金", ["gold"], ["かね"], ["キン"], {"金曜日": ["Friday"]}],
            ["土", ["soil"], ["つち"], ["ド"], null]
        ]"#;
        let dict = DictionaryFile::from_json(json).unwrap();

        assert_eq!(dict.entry_count(), 2);
        assert_eq!(dict.skipped_count(), 1);
        let moku = dict.get("木").unwrap();
        assert_eq!(moku.meanings, vec!["tree"]);
        assert!(moku.dictionary_entries.is_empty());
        assert!(dict.get("金").unwrap().dictionary_entries.is_empty());
        assert!(dict.get("土").is_none());
    }

    #[test]
    fn test_later_duplicates_win() {
        let json = r#"[["日", ["sun"], [], []], ["日", ["day"], [], []]]"#;
        let dict = DictionaryFile::from_json(json).unwrap();
        assert_eq!(dict.get("日").unwrap().meanings, vec!["day"]);
    }

    #[test]
    fn test_non_array_document_fails() {
        assert!(DictionaryFile::from_json(r#"{"日": []}"#).is_err());
    }

    #[tokio::test]
    async fn test_lookup_through_source_trait() {
        let dict = DictionaryFile::from_json(SAMPLE).unwrap();
        let source: &dyn KanjiSource = &dict;

        let records = source.lookup(&symbols(&["木"])).await.unwrap();
        assert!(records.is_empty());
        assert_eq!(source.name(), "dictionary file");
    }
}
