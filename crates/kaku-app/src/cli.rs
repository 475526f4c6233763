use std::path::PathBuf;

use clap::{Args, Parser};
use kaku_config::StyleOptions;

/// Generate kanji practice worksheets as PDF
#[derive(Debug, Parser)]
#[command(name = "kaku", version)]
pub struct Cli {
    /// Where to write the PDF
    pub output: PathBuf,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub style: StyleArgs,

    /// Apply curated corrections to meanings and readings
    #[arg(long)]
    pub apply_overrides: bool,

    /// JSON configuration file; environment variables are used otherwise
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Which kanji to put on the worksheet
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// School grade whose kanji list is fetched from the API
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
    pub grade: Option<u8>,

    /// JSON array of kanji
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Where kanji details come from
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Local kanji dictionary (JSON)
    #[arg(long, value_name = "PATH")]
    pub dictionary_file: Option<PathBuf>,

    /// Query kanjiapi.dev
    #[arg(long)]
    pub api: bool,
}

#[derive(Debug, Args)]
pub struct StyleArgs {
    /// Larger stroke diagram with three rows of practice cells
    #[arg(short = 'B', long)]
    pub big_kanji: bool,

    /// Show the kanji itself next to its meanings
    #[arg(short = 'K', long)]
    pub show_kanji: bool,

    /// Draw guide crosses in practice cells
    #[arg(short = 'C', long)]
    pub cross_guide: bool,

    /// List compound words from the dictionary file
    #[arg(short = 'D', long)]
    pub show_dictionary: bool,

    /// Leave out the romaji line under readings
    #[arg(short = 'R', long)]
    pub no_romaji: bool,
}

impl StyleArgs {
    pub fn options(&self) -> StyleOptions {
        StyleOptions {
            big_kanji: self.big_kanji,
            show_romaji: !self.no_romaji,
            show_kanji: self.show_kanji,
            cross_guide: self.cross_guide,
            show_dictionary: self.show_dictionary,
        }
    }
}
