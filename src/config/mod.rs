// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, Preferences, RouteGuardToml, RulesConfig, DEFAULT_RULES_PATH};

use std::path::{Path, PathBuf};

use crate::error::Result;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `routeguard.toml` from the current directory.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Loads `routeguard.toml` from `dir`, resolving relative paths against it.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let mut config = Self {
            root: dir.to_path_buf(),
            ..Self::default()
        };
        io::load_toml_config(&mut config, dir)?;
        Ok(config)
    }

    /// Applies TOML text on top of the current settings.
    ///
    /// # Errors
    /// Returns `Config` error on invalid TOML or unknown sections.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        io::parse_toml(self, content)
    }

    #[must_use]
    pub fn rules_path(&self) -> PathBuf {
        let path = self.rules.path.as_deref().unwrap_or(Path::new(DEFAULT_RULES_PATH));
        self.resolve(path)
    }

    #[must_use]
    pub fn event_log_path(&self) -> PathBuf {
        self.resolve(&self.preferences.event_log_path)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteGuardError;

    #[test]
    fn test_defaults() {
        let c = Config::new();
        assert_eq!(c.rules.path, None);
        assert_eq!(c.rules_path(), PathBuf::from(".").join(DEFAULT_RULES_PATH));
        assert!(!c.preferences.event_log);
        assert!(c.preferences.color);
    }

    #[test]
    fn test_parse_overrides() {
        let mut c = Config::new();
        c.parse_toml("[rules]\npath = \"custom.toml\"\n[preferences]\nevent_log = true")
            .unwrap();
        assert_eq!(c.rules.path, Some(PathBuf::from("custom.toml")));
        assert!(c.preferences.event_log);
        assert_eq!(c.preferences.event_log_path, PathBuf::from(".routeguard/events.jsonl"));
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let mut c = Config::new();
        let err = c.parse_toml("[nonsense]\nx = 1").unwrap_err();
        assert!(matches!(err, RouteGuardError::Config(_)));
    }

    #[test]
    fn test_relative_paths_resolve_against_root() {
        let c = Config {
            root: PathBuf::from("/srv/routes"),
            ..Config::default()
        };
        assert_eq!(
            c.rules_path(),
            PathBuf::from("/srv/routes/rules/blockedRoutes.json")
        );
    }
}
