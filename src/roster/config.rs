use crate::error::{Result, RosterError};
use crate::roster::FIRST_ID;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILENAME: &str = "config.json";

/// What happens to persisted ids when the data file is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdPolicy {
    /// Keep the ids from the file and move the counter past the highest one.
    #[default]
    Preserve,
    /// Give every loaded record a fresh id from the roster's counter.
    Reassign,
}

/// Configuration for roster, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Path of the data file. Overridden by `--data-file` / `ROSTER_DATA_FILE`.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Seed for the id counter of a fresh roster.
    #[serde(default = "default_first_id")]
    pub first_id: u32,

    #[serde(default)]
    pub id_policy: IdPolicy,
}

fn default_first_id() -> u32 {
    FIRST_ID
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            first_id: FIRST_ID,
            id_policy: IdPolicy::default(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Writes the config where [`RosterConfig::load`] looks for it. The app
    /// itself never writes config; this sets up config directories in tests.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RosterError::Serialization)?;
        fs::write(config_path, content).map_err(RosterError::Io)?;
        Ok(())
    }

    /// Picks the data file: an explicit override wins, then the config value.
    /// Having neither is a fatal configuration error.
    pub fn resolve_data_file(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.data_file.clone())
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| {
                RosterError::Config(
                    "no data file configured (use --data-file or ROSTER_DATA_FILE)".to_string(),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.first_id, 1000);
        assert_eq!(config.id_policy, IdPolicy::Preserve);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = RosterConfig::load(dir.path().join("nowhere")).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config = RosterConfig {
            data_file: Some(PathBuf::from("/tmp/students.csv")),
            first_id: 1,
            id_policy: IdPolicy::Reassign,
        };
        config.save(dir.path()).unwrap();

        let loaded = RosterConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: RosterConfig = serde_json::from_str(r#"{"data_file": "x.csv"}"#).unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("x.csv")));
        assert_eq!(config.first_id, 1000);
        assert_eq!(config.id_policy, IdPolicy::Preserve);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        assert!(matches!(
            RosterConfig::load(dir.path()),
            Err(RosterError::Serialization(_))
        ));
    }

    #[test]
    fn test_override_wins() {
        let config = RosterConfig {
            data_file: Some(PathBuf::from("from-config.csv")),
            ..Default::default()
        };
        let path = config
            .resolve_data_file(Some(Path::new("from-flag.csv")))
            .unwrap();
        assert_eq!(path, PathBuf::from("from-flag.csv"));
        assert_eq!(
            config.resolve_data_file(None).unwrap(),
            PathBuf::from("from-config.csv")
        );
    }

    #[test]
    fn test_missing_data_file_is_fatal() {
        let config = RosterConfig::default();
        assert!(matches!(
            config.resolve_data_file(None),
            Err(RosterError::Config(_))
        ));
        assert!(matches!(
            config.resolve_data_file(Some(Path::new(""))),
            Err(RosterError::Config(_))
        ));
    }
}
