use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_stroke_dir() -> PathBuf {
    PathBuf::from("kanji")
}

fn default_stroke_extension() -> String {
    "png".to_string()
}

fn default_font_regular() -> PathBuf {
    PathBuf::from("fonts/NotoSansJP-Regular.ttf")
}

fn default_font_bold() -> PathBuf {
    PathBuf::from("fonts/NotoSansJP-Bold.ttf")
}

/// On-disk assets used while rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Folder holding stroke-order diagrams named by code point
    #[serde(default = "default_stroke_dir")]
    pub stroke_dir: PathBuf,
    #[serde(default = "default_stroke_extension")]
    pub stroke_extension: String,
    #[serde(default = "default_font_regular")]
    pub font_regular: PathBuf,
    #[serde(default = "default_font_bold")]
    pub font_bold: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            stroke_dir: default_stroke_dir(),
            stroke_extension: default_stroke_extension(),
            font_regular: default_font_regular(),
            font_bold: default_font_bold(),
        }
    }
}

impl AssetConfig {
    pub fn new() -> Self {
        let stroke_dir = env::var("KAKU_STROKE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_stroke_dir());

        let font_regular = env::var("KAKU_FONT_REGULAR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_font_regular());

        let font_bold = env::var("KAKU_FONT_BOLD")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_font_bold());

        Self {
            stroke_dir,
            stroke_extension: default_stroke_extension(),
            font_regular,
            font_bold,
        }
    }

    /// Path of the stroke diagram with the given file id
    pub fn stroke_path(&self, file_id: &str) -> PathBuf {
        self.stroke_dir
            .join(format!("{}.{}", file_id, self.stroke_extension))
    }
}
