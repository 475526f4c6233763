use std::fs;
use std::path::Path;

use clap::Parser;
use kaku_config::Config;
use kaku_config::assets::AssetConfig;

use crate::cli::Cli;
use crate::profile::load_config;
use crate::worksheet;

const DICTIONARY: &str = r#"[
    ["日", ["day", "sun", "Japan"], ["ひ", "か"], ["ニチ", "ジツ"],
        [["日本", ["Japan"]], ["毎日", ["every day"]]]],
    ["本", ["book", "origin", "counter for long objects"], ["もと"], ["ホン"]],
    ["月", ["month", "moon"], ["つき"], ["ゲツ", "ガツ"]]
]"#;

/// Config whose font and stroke paths all point into `dir`, where nothing exists
fn offline_config(dir: &Path) -> Config {
    Config {
        assets: AssetConfig {
            stroke_dir: dir.join("kanji"),
            font_regular: dir.join("missing-regular.ttf"),
            font_bold: dir.join("missing-bold.ttf"),
            ..AssetConfig::default()
        },
        ..Config::default()
    }
}

fn page_count(pdf: &[u8]) -> usize {
    let needle = b"/Type /Page\n";
    pdf.windows(needle.len()).filter(|w| *w == needle).count()
}

#[tokio::test]
async fn test_dictionary_worksheet_written() {
    let dir = tempfile::tempdir().unwrap();
    let list = dir.path().join("list.json");
    let dict = dir.path().join("dict.json");
    let output = dir.path().join("out.pdf");
    fs::write(&list, r#"["日", "本", "火", "月"]"#).unwrap();
    fs::write(&dict, DICTIONARY).unwrap();

    let cli = Cli::try_parse_from([
        "kaku",
        output.to_str().unwrap(),
        "--file",
        list.to_str().unwrap(),
        "--dictionary-file",
        dict.to_str().unwrap(),
        "-D",
        "--apply-overrides",
    ])
    .unwrap();

    let summary = worksheet::run(&cli, &offline_config(dir.path()))
        .await
        .unwrap();

    // 火 is not in the dictionary
    let symbols: Vec<_> = summary.placements.iter().map(|p| p.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["日", "本", "月"]);

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(page_count(&bytes), summary.pages);
}

#[tokio::test]
async fn test_missing_list_fails_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let dict = dir.path().join("dict.json");
    fs::write(&dict, DICTIONARY).unwrap();

    let cli = Cli::try_parse_from([
        "kaku",
        dir.path().join("out.pdf").to_str().unwrap(),
        "--file",
        dir.path().join("absent.json").to_str().unwrap(),
        "--dictionary-file",
        dict.to_str().unwrap(),
    ])
    .unwrap();

    let err = worksheet::run(&cli, &offline_config(dir.path()))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Failed to read kanji list"));
    assert!(!dir.path().join("out.pdf").exists());
}

#[test]
fn test_config_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kaku.json");
    fs::write(&path, r#"{ "page": { "width_mm": 148.0, "height_mm": 210.0 } }"#).unwrap();

    let config = load_config(Some(&path)).unwrap();

    assert_eq!(config.page.width_mm, 148.0);
    assert_eq!(config.api.max_items, 3);
    assert_eq!(config.assets.stroke_extension, "png");
}

#[test]
fn test_invalid_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kaku.json");
    fs::write(&path, "[1, 2]").unwrap();

    assert!(load_config(Some(&path)).is_err());
}
