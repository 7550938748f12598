use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Optional user configuration.
///
/// Everything here has a working default; a missing config file is not
/// an error.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default payload path when --data and QUESTDASH_DATA are absent
    #[serde(default)]
    pub data_path: Option<PathBuf>,

    /// Force colored output on or off (default: on when stdout is a tty)
    #[serde(default)]
    pub color: Option<bool>,
}

impl Config {
    /// Resolve and load the config file based on priority:
    /// 1. Explicit path (with tilde expansion)
    /// 2. QUESTDASH_CONFIG environment variable (with tilde expansion)
    /// 3. XDG config directory
    /// 4. Defaults (no file read)
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::load_from(&expand_tilde(path));
        }

        if let Ok(env_path) = std::env::var("QUESTDASH_CONFIG") {
            return Self::load_from(&expand_tilde(&env_path));
        }

        if let Some(config_dir) = dirs::config_dir() {
            return Self::load_from(&config_dir.join("questdash").join("config.toml"));
        }

        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Resolve the payload path: --data > QUESTDASH_DATA > config >
    /// ./dashboard-data.json, fetched relative to the working directory
    /// the same way the generated page fetches it relative to itself.
    pub fn resolve_data_path(&self, explicit: Option<&str>) -> PathBuf {
        if let Some(path) = explicit {
            return expand_tilde(path);
        }

        if let Ok(env_path) = std::env::var("QUESTDASH_DATA") {
            return expand_tilde(&env_path);
        }

        if let Some(path) = &self.data_path {
            return path.clone();
        }

        PathBuf::from("dashboard-data.json")
    }
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_file_yields_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/questdash.toml")).unwrap();
        assert!(config.data_path.is_none());
        assert!(config.color.is_none());
    }

    #[test]
    fn test_explicit_data_path_wins() {
        let config = Config {
            data_path: Some(PathBuf::from("/etc/quests.json")),
            color: None,
        };
        assert_eq!(
            config.resolve_data_path(Some("./local.json")),
            PathBuf::from("./local.json")
        );
    }

    #[test]
    fn test_default_data_path() {
        let config = Config::default();
        // Guard against an ambient QUESTDASH_DATA leaking into the test
        if std::env::var("QUESTDASH_DATA").is_err() {
            assert_eq!(
                config.resolve_data_path(None),
                PathBuf::from("dashboard-data.json")
            );
        }
    }
}
