use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::render::markdown::CmarkRenderer;
use crate::render::pipeline::render_document;

/// Renders a markdown file to an HTML fragment.
///
/// Configuration is loaded from `alcove.toml` next to the file (defaults when
/// absent).
///
/// # Errors
///
/// Returns an error if configuration loading or reading the file fails.
pub fn convert(path: &Path) -> Result<String> {
    let root = path.parent().unwrap_or_else(|| Path::new("."));
    let config = Config::load(root).context("failed to load config")?;

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let html = render_document(&content, &config.parse_options(), &CmarkRenderer);
    info!(path = %path.display(), bytes = html.len(), "rendered");
    Ok(html)
}
