use std::env;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://kanjiapi.dev/v1";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_max_items() -> usize {
    3
}

/// Remote kanji lookup service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL, without trailing slash
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Readings and meanings kept per kanji
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            max_items: default_max_items(),
        }
    }
}

impl ApiConfig {
    pub fn new() -> Self {
        let api_url = env::var("KAKU_API_URL").unwrap_or_else(|_| default_api_url());

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            max_items: default_max_items(),
        }
    }

    pub fn kanji_url(&self, symbol: &str) -> String {
        format!("{}/kanji/{}", self.api_url, symbol)
    }

    pub fn grade_url(&self, grade: u8) -> String {
        format!("{}/kanji/grade-{}", self.api_url, grade)
    }
}
