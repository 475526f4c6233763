use serde::{Deserialize, Serialize};

/// Compound word using a kanji, with its English glosses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub translations: Vec<String>,
}

impl DictionaryEntry {
    pub fn new(word: impl Into<String>, translations: Vec<String>) -> Self {
        Self {
            word: word.into(),
            translations,
        }
    }
}

/// Everything rendered for a single kanji
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiRecord {
    pub symbol: String,
    pub on_readings: Vec<String>,
    pub kun_readings: Vec<String>,
    pub meanings: Vec<String>,
    pub dictionary_entries: Vec<DictionaryEntry>,
}

impl KanjiRecord {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    /// Stroke diagram file name without extension: code point as 5-digit lowercase hex
    pub fn stroke_diagram_file(&self) -> String {
        match self.symbol.chars().next() {
            Some(c) => format!("{:05x}", c as u32),
            None => String::new(),
        }
    }

    pub fn has_dictionary(&self) -> bool {
        !self.dictionary_entries.is_empty()
    }
}
