// src/config/io.rs
//! Reading `routeguard.toml`.

use std::path::Path;

use super::types::{Config, RouteGuardToml};
use crate::error::{Result, RouteGuardError};

pub const CONFIG_FILE: &str = "routeguard.toml";

/// Loads `routeguard.toml` from `dir` into `config`. A missing file leaves
/// the defaults in place.
pub fn load_toml_config(config: &mut Config, dir: &Path) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(());
    }
    let content = std::fs::read_to_string(&path).map_err(|e| RouteGuardError::io(e, &path))?;
    parse_toml(config, &content)
}

/// Applies TOML text to `config`.
pub fn parse_toml(config: &mut Config, content: &str) -> Result<()> {
    let parsed: RouteGuardToml =
        toml::from_str(content).map_err(|e| RouteGuardError::Config(e.to_string()))?;
    config.rules = parsed.rules;
    config.preferences = parsed.preferences;
    Ok(())
}
