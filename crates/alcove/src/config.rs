use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::admonition::ParseOptions;

/// Configuration loaded from `alcove.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// End a block at the first of two consecutive blank lines.
    #[serde(default = "default_end_on_double_blank")]
    pub end_on_double_blank: bool,

    /// Gates the live range computation. When false,
    /// [`compute_live_ranges`](crate::live::compute_live_ranges) returns no
    /// ranges and all admonition source stays visible as plain text.
    #[serde(default = "default_live_preview")]
    pub live_preview: bool,
}

impl Config {
    /// Load configuration from `alcove.toml` in the given root directory.
    ///
    /// Falls back to defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join("alcove.toml");
        if path.exists() {
            let contents = fs::read_to_string(&path).context("failed to read alcove.toml")?;
            toml::from_str(&contents).context("failed to parse alcove.toml")
        } else {
            toml::from_str("").context("failed to construct default config")
        }
    }

    /// The options consumed by the parsing core.
    #[must_use]
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            end_on_double_blank: self.end_on_double_blank,
        }
    }
}

fn default_end_on_double_blank() -> bool {
    true
}

fn default_live_preview() -> bool {
    true
}
