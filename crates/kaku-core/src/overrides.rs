use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::KanjiRecord;

/// Hand-curated replacement for poorly translated data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Override {
    pub meanings: Option<Vec<String>>,
    pub on: Option<Vec<String>>,
    pub kun: Option<Vec<String>>,
}

impl Override {
    pub fn meanings<I, S>(meanings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            meanings: Some(meanings.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    /// Replace the fields this override sets; empty lists count as unset
    pub fn apply(&self, record: &mut KanjiRecord) {
        if let Some(meanings) = non_empty(&self.meanings) {
            record.meanings = meanings.to_vec();
        }
        if let Some(on) = non_empty(&self.on) {
            record.on_readings = on.to_vec();
        }
        if let Some(kun) = non_empty(&self.kun) {
            record.kun_readings = kun.to_vec();
        }
    }
}

fn non_empty(field: &Option<Vec<String>>) -> Option<&[String]> {
    field.as_deref().filter(|v| !v.is_empty())
}

/// Apply overrides keyed by symbol, returning how many records changed
pub fn apply_overrides(records: &mut [KanjiRecord], table: &HashMap<String, Override>) -> usize {
    let mut applied = 0;

    for record in records.iter_mut() {
        if let Some(entry) = table.get(&record.symbol) {
            tracing::debug!("Applying override for {}", record.symbol);
            entry.apply(record);
            applied += 1;
        }
    }

    applied
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> KanjiRecord {
        KanjiRecord {
            symbol: "本".to_string(),
            on_readings: vec!["ホン".to_string()],
            kun_readings: vec!["もと".to_string()],
            meanings: vec!["main".to_string(), "counter for long things".to_string()],
            dictionary_entries: vec![],
        }
    }

    #[test]
    fn test_meanings_only_override_keeps_readings() {
        let mut table = HashMap::new();
        table.insert("本".to_string(), Override::meanings(["book"]));

        let mut records = vec![record()];
        let applied = apply_overrides(&mut records, &table);

        assert_eq!(applied, 1);
        assert_eq!(records[0].meanings, vec!["book"]);
        assert_eq!(records[0].on_readings, vec!["ホン"]);
        assert_eq!(records[0].kun_readings, vec!["もと"]);
    }

    #[test]
    fn test_empty_override_field_is_ignored() {
        let entry = Override {
            meanings: Some(vec![]),
            on: None,
            kun: Some(vec!["ほん".to_string()]),
        };

        let mut r = record();
        entry.apply(&mut r);

        assert_eq!(r.meanings.len(), 2);
        assert_eq!(r.kun_readings, vec!["ほん"]);
    }

    #[test]
    fn test_unlisted_symbols_untouched() {
        let mut table = HashMap::new();
        table.insert("年".to_string(), Override::meanings(["year"]));

        let mut records = vec![record()];
        assert_eq!(apply_overrides(&mut records, &table), 0);
        assert_eq!(records[0], record());
    }
}
