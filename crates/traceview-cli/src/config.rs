use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Render defaults loaded from `traceview.toml`. CLI flags win over
/// config values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Always compute-and-prepend a metrics banner.
    pub metrics: bool,
    /// Emit full standalone pages by default.
    pub page: bool,
    /// Default payload truncation, in chars.
    pub truncate: Option<usize>,
    /// Default display region id.
    pub region: Option<String>,
}

impl Config {
    /// Load config, looking at `./traceview.toml` unless an explicit path
    /// was given. A missing file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Self::load_from(Path::new("traceview.toml")),
        }
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // Return default config if file doesn't exist
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
