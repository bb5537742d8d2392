use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Rule document used when `[rules] path` is not set.
pub const DEFAULT_RULES_PATH: &str = "rules/blockedRoutes.json";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Rule document, relative to the config file's directory. `None` until
    /// `routeguard.toml` names one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub event_log: bool,
    #[serde(default = "default_event_log_path")]
    pub event_log_path: PathBuf,
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            event_log: false,
            event_log_path: default_event_log_path(),
            color: default_color(),
        }
    }
}

fn default_event_log_path() -> PathBuf { PathBuf::from(".routeguard/events.jsonl") }
const fn default_color() -> bool { true }

/// On-disk shape of `routeguard.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RouteGuardToml {
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory relative paths are resolved against.
    pub root: PathBuf,
    pub rules: RulesConfig,
    pub preferences: Preferences,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            rules: RulesConfig::default(),
            preferences: Preferences::default(),
        }
    }
}
