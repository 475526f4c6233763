use std::collections::HashMap;
use std::sync::LazyLock;

use kaku_core::Romanizer;

/// Hepburn romanization for hiragana and katakana; other characters pass through
#[derive(Debug, Clone, Copy, Default)]
pub struct JapaneseRomanizer;

impl Romanizer for JapaneseRomanizer {
    fn to_romaji(&self, text: &str) -> String {
        to_romaji(text)
    }
}

const MONOGRAPHS: &[(char, &str)] = &[
    ('あ', "a"), ('い', "i"), ('う', "u"), ('え', "e"), ('お', "o"),
    ('か', "ka"), ('き', "ki"), ('く', "ku"), ('け', "ke"), ('こ', "ko"),
    ('が', "ga"), ('ぎ', "gi"), ('ぐ', "gu"), ('げ', "ge"), ('ご', "go"),
    ('さ', "sa"), ('し', "shi"), ('す', "su"), ('せ', "se"), ('そ', "so"),
    ('ざ', "za"), ('じ', "ji"), ('ず', "zu"), ('ぜ', "ze"), ('ぞ', "zo"),
    ('た', "ta"), ('ち', "chi"), ('つ', "tsu"), ('て', "te"), ('と', "to"),
    ('だ', "da"), ('ぢ', "ji"), ('づ', "zu"), ('で', "de"), ('ど', "do"),
    ('な', "na"), ('に', "ni"), ('ぬ', "nu"), ('ね', "ne"), ('の', "no"),
    ('は', "ha"), ('ひ', "hi"), ('ふ', "fu"), ('へ', "he"), ('ほ', "ho"),
    ('ば', "ba"), ('び', "bi"), ('ぶ', "bu"), ('べ', "be"), ('ぼ', "bo"),
    ('ぱ', "pa"), ('ぴ', "pi"), ('ぷ', "pu"), ('ぺ', "pe"), ('ぽ', "po"),
    ('ま', "ma"), ('み', "mi"), ('む', "mu"), ('め', "me"), ('も', "mo"),
    ('や', "ya"), ('ゆ', "yu"), ('よ', "yo"),
    ('ら', "ra"), ('り', "ri"), ('る', "ru"), ('れ', "re"), ('ろ', "ro"),
    ('わ', "wa"), ('ゐ', "wi"), ('ゑ', "we"), ('を', "wo"),
    ('ゔ', "vu"),
    ('ぁ', "xa"), ('ぃ', "xi"), ('ぅ', "xu"), ('ぇ', "xe"), ('ぉ', "xo"),
    ('ゃ', "xya"), ('ゅ', "xyu"), ('ょ', "xyo"), ('ゎ', "xwa"),
    ('ゕ', "xka"), ('ゖ', "xke"),
];

/// Consonant prefix used when the kana combines with a small ya/yu/yo
const YOON_PREFIXES: &[(char, &str)] = &[
    ('き', "ky"), ('ぎ', "gy"), ('し', "sh"), ('じ', "j"), ('ち', "ch"),
    ('ぢ', "j"), ('に', "ny"), ('ひ', "hy"), ('び', "by"), ('ぴ', "py"),
    ('み', "my"), ('り', "ry"),
];

/// Foreign-sound combinations with small vowels
const EXTENDED: &[(&str, &str)] = &[
    ("しぇ", "she"), ("じぇ", "je"), ("ちぇ", "che"),
    ("ふぁ", "fa"), ("ふぃ", "fi"), ("ふぇ", "fe"), ("ふぉ", "fo"),
    ("てぃ", "ti"), ("でぃ", "di"), ("とぅ", "tu"), ("どぅ", "du"),
    ("うぃ", "wi"), ("うぇ", "we"), ("うぉ", "wo"),
    ("ゔぁ", "va"), ("ゔぃ", "vi"), ("ゔぇ", "ve"), ("ゔぉ", "vo"),
    ("つぁ", "tsa"), ("つぃ", "tsi"), ("つぇ", "tse"), ("つぉ", "tso"),
];

static SINGLE: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| MONOGRAPHS.iter().copied().collect());

static DOUBLE: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
    let mut table = HashMap::new();

    for (kana, prefix) in YOON_PREFIXES {
        for (small, vowel) in [('ゃ', 'a'), ('ゅ', 'u'), ('ょ', 'o')] {
            table.insert(format!("{kana}{small}"), format!("{prefix}{vowel}"));
        }
    }

    for (kana, romaji) in EXTENDED {
        table.insert(kana.to_string(), romaji.to_string());
    }

    table
});

/// Fold katakana onto the matching hiragana
fn to_hiragana(c: char) -> char {
    match c {
        'ァ'..='ヶ' => char::from_u32(c as u32 - 0x60).unwrap_or(c),
        _ => c,
    }
}

/// Romaji for the syllable starting at `chars[0]`, with the kana consumed
fn syllable(chars: &[char]) -> Option<(String, usize)> {
    if let [first, second, ..] = chars {
        let pair: String = [*first, *second].iter().collect();
        if let Some(romaji) = DOUBLE.get(&pair) {
            return Some((romaji.clone(), 2));
        }
    }

    let first = chars.first()?;
    SINGLE.get(first).map(|romaji| (romaji.to_string(), 1))
}

fn starts_with_vowel(romaji: &str) -> bool {
    matches!(romaji.chars().next(), Some('a' | 'i' | 'u' | 'e' | 'o'))
}

pub fn to_romaji(text: &str) -> String {
    let chars: Vec<char> = text.chars().map(to_hiragana).collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            // Sokuon doubles the next consonant
            'っ' => match syllable(&chars[i + 1..]) {
                Some((next, used)) if !starts_with_vowel(&next) => {
                    if next.starts_with("ch") {
                        out.push('t');
                    } else if let Some(c) = next.chars().next() {
                        out.push(c);
                    }
                    out.push_str(&next);
                    i += 1 + used;
                }
                _ => {
                    out.push_str("xtsu");
                    i += 1;
                }
            },
            'ん' => {
                out.push('n');
                if let Some((next, _)) = syllable(&chars[i + 1..]) {
                    if starts_with_vowel(&next) || next.starts_with('y') {
                        out.push('\'');
                    }
                }
                i += 1;
            }
            'ー' => {
                out.push('-');
                i += 1;
            }
            c => match syllable(&chars[i..]) {
                Some((romaji, used)) => {
                    out.push_str(&romaji);
                    i += used;
                }
                None => {
                    out.push(c);
                    i += 1;
                }
            },
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_katakana_on_readings() {
        assert_eq!(to_romaji("ニチ"), "nichi");
        assert_eq!(to_romaji("ジツ"), "jitsu");
        assert_eq!(to_romaji("ギョウ"), "gyou");
        assert_eq!(to_romaji("シャ"), "sha");
    }

    #[test]
    fn test_hiragana_kun_readings() {
        assert_eq!(to_romaji("ひ"), "hi");
        assert_eq!(to_romaji("きょう"), "kyou");
        assert_eq!(to_romaji("ちゃ"), "cha");
    }

    #[test]
    fn test_okurigana_markers_pass_through() {
        assert_eq!(to_romaji("ひと.つ"), "hito.tsu");
        assert_eq!(to_romaji("あ.ける"), "a.keru");
        assert_eq!(to_romaji("-つ"), "-tsu");
    }

    #[test]
    fn test_sokuon() {
        assert_eq!(to_romaji("がっこう"), "gakkou");
        assert_eq!(to_romaji("マッチ"), "matchi");
        assert_eq!(to_romaji("っ"), "xtsu");
    }

    #[test]
    fn test_syllabic_n() {
        assert_eq!(to_romaji("しんいち"), "shin'ichi");
        assert_eq!(to_romaji("こんや"), "kon'ya");
        assert_eq!(to_romaji("ほん"), "hon");
        assert_eq!(to_romaji("ニン"), "nin");
    }

    #[test]
    fn test_long_vowel_and_extended() {
        assert_eq!(to_romaji("コーヒー"), "ko-hi-");
        assert_eq!(to_romaji("ファイル"), "fairu");
    }

    #[test]
    fn test_romanize_all_keeps_order() {
        let readings = vec!["ニチ".to_string(), "ひ".to_string()];
        assert_eq!(JapaneseRomanizer.romanize_all(&readings), vec!["nichi", "hi"]);
    }
}
