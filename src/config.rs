//! Application configuration.

use crate::consts::cli_consts::polling;
use crate::environment::Environment;
use crate::poller::{OverlapPolicy, PauseBehavior};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Server to poll.
    pub environment: Environment,
    /// Steps advanced per successful poll.
    pub step_size: u64,
    /// Milliseconds between poll ticks.
    pub poll_interval_ms: u64,
    /// Whether the poller starts paused.
    pub start_paused: bool,
    pub pause_behavior: PauseBehavior,
    pub overlap_policy: OverlapPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            step_size: polling::DEFAULT_STEP_SIZE,
            poll_interval_ms: polling::DEFAULT_INTERVAL_MS,
            start_paused: false,
            pause_behavior: PauseBehavior::default(),
            overlap_policy: OverlapPolicy::default(),
        }
    }
}

impl Config {
    /// Create Config for the given environment with default polling settings.
    pub fn new(environment: Environment) -> Self {
        Config {
            environment,
            ..Config::default()
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Deletes the configuration file, if present.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Checks the polling settings.
    pub fn validate(&self) -> Result<(), std::io::Error> {
        if self.step_size == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "step_size must be at least 1",
            ));
        }
        if self.poll_interval_ms < polling::MIN_INTERVAL_MS {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!(
                    "poll_interval_ms must be at least {}",
                    polling::MIN_INTERVAL_MS
                ),
            ));
        }
        Ok(())
    }
}

/// Location of the configuration file: `~/.simoc/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Failed to determine home directory",
        )
    })?;
    Ok(home_path.join(".simoc").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::new(Environment::Custom {
            base_url: "http://127.0.0.1:8000".to_string(),
        });
        config.step_size = 4;
        config.pause_behavior = PauseBehavior::CancelInFlight;
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let result = Config::default().save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(path.exists());
    }

    #[test]
    // Saving a configuration should overwrite an existing file.
    fn test_save_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        Config::new(Environment::Local).save(&path).unwrap();
        let config2 = Config::new(Environment::Production);
        config2.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config2, loaded_config);
    }

    #[test]
    // Fields missing from the file take their defaults.
    fn test_load_fills_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"environment": "Local", "overlap_policy": "allow"}"#,
        )
        .unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.environment, Environment::Local);
        assert_eq!(config.overlap_policy, OverlapPolicy::Allow);
        assert_eq!(config.step_size, 1);
        assert_eq!(config.poll_interval_ms, 1000);
        assert_eq!(config.pause_behavior, PauseBehavior::SkipTicks);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::default().save(&path).unwrap();

        Config::clear(&path).unwrap();
        assert!(!path.exists());
        // Clearing twice is fine
        assert!(Config::clear(&path).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_polling_settings() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.step_size = 0;
        assert!(config.validate().is_err());

        config.step_size = 1;
        config.poll_interval_ms = 10;
        assert!(config.validate().is_err());
    }
}
