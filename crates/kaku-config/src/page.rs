use serde::{Deserialize, Serialize};

use crate::env_parse;

fn default_width() -> f32 {
    210.0
}

fn default_height() -> f32 {
    297.0
}

/// Page size in millimetres, A4 portrait by default
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    #[serde(default = "default_width")]
    pub width_mm: f32,
    #[serde(default = "default_height")]
    pub height_mm: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width_mm: default_width(),
            height_mm: default_height(),
        }
    }
}

impl PageConfig {
    pub fn new() -> Self {
        Self {
            width_mm: env_parse("KAKU_PAGE_WIDTH_MM").unwrap_or_else(default_width),
            height_mm: env_parse("KAKU_PAGE_HEIGHT_MM").unwrap_or_else(default_height),
        }
    }
}
