use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level leafpack configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LeafpackConfig {
    /// Layout defaults for the addressing subcommands.
    #[serde(default)]
    pub layout: LayoutToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutToml {
    #[serde(default)]
    pub n: Option<usize>,
    #[serde(default = "default_convention")]
    pub convention: String,
}

impl Default for LayoutToml {
    fn default() -> Self {
        Self {
            n: None,
            convention: default_convention(),
        }
    }
}

fn default_convention() -> String {
    "origin".to_string()
}

/// Reads the config file at `path`, or returns defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<LeafpackConfig> {
    let Some(path) = path else {
        return Ok(LeafpackConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
