//! First-run setup.
//!
//! Writes the embedded default configuration when no config file exists yet.

use anyhow::anyhow;
use std::path::Path;

/// Embedded default configuration template.
const DEFAULT_CONFIG: &str = include_str!("../../environments/yastt.toml");

/// Writes the default config to `config_path` unless a file is already there.
///
/// Returns `true` when a new file was created.
///
/// # Errors
/// Returns an error if the directory or file cannot be written.
pub fn ensure_config(config_path: &Path) -> anyhow::Result<bool> {
    if config_path.exists() {
        tracing::debug!("Config file present: {}", config_path.display());
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| anyhow!("Failed to create config directory: {e}"))?;
    }
    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| anyhow!("Failed to write default config: {e}"))?;

    tracing::info!("Default configuration written to {}", config_path.display());
    Ok(true)
}
