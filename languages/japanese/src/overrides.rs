use std::collections::HashMap;

use kaku_core::Override;

/// Hand-picked meanings for kanji whose looked-up glosses read poorly on a worksheet
pub fn curated_overrides() -> HashMap<String, Override> {
    let entries = [
        ("本", Override::meanings(["book"])),
        ("年", Override::meanings(["year"])),
        ("日", Override::meanings(["day", "japan"])),
        ("見", Override::meanings(["see", "show"])),
        ("行", Override::meanings(["going", "journey"])),
    ];

    entries
        .into_iter()
        .map(|(symbol, entry)| (symbol.to_string(), entry))
        .collect()
}
