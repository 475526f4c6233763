use std::env;

use serde::{Deserialize, Serialize};

pub mod api;
pub mod assets;
pub mod page;
pub mod style;

pub use api::ApiConfig;
pub use assets::AssetConfig;
pub use page::PageConfig;
pub use style::StyleOptions;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub assets: AssetConfig,
    pub page: PageConfig,
}

impl Config {
    /// Build config from environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            api: ApiConfig::new(),
            assets: AssetConfig::new(),
            page: PageConfig::new(),
        }
    }
}

/// Read a numeric env var, ignoring unparsable values
pub(crate) fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
