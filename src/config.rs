//! Configuration management for fsflow
//!
//! Layers built-in defaults, an optional `fsflow.toml` and `FSFLOW_*`
//! environment variables, in that order of precedence (lowest first).

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Name of the optional config file, looked up in the working directory
pub const CONFIG_FILE: &str = "fsflow";

/// Prefix for environment overrides, e.g. `FSFLOW_BASE_DIR`
pub const ENV_PREFIX: &str = "FSFLOW";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Runtime configuration for a single invocation
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    /// Directory relative request paths are resolved against
    /// Environment: FSFLOW_BASE_DIR
    pub base_dir: String,

    /// Default log filter when RUST_LOG is unset
    /// Environment: FSFLOW_LOG_LEVEL
    pub log_level: String,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            base_dir: ".".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl FlowConfig {
    /// Load configuration from fsflow.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(File::with_name(CONFIG_FILE).required(false))
    }

    /// Load configuration from an explicit file source
    pub fn load_from(
        file: File<config::FileSourceFile, config::FileFormat>,
    ) -> Result<Self, config::ConfigError> {
        let defaults = FlowConfig::default();

        let settings = Config::builder()
            .set_default("base_dir", defaults.base_dir)?
            .set_default("log_level", defaults.log_level)?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: FlowConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.base_dir.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "base_dir cannot be empty".into(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(config::ConfigError::Message(format!(
                "log_level must be one of {:?}, got {:?}",
                LOG_LEVELS, self.log_level
            )));
        }

        Ok(())
    }

    /// Get base directory as PathBuf
    pub fn base_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.base_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn write_toml(body: &str) -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fsflow.toml");
        std::fs::write(&path, body).unwrap();
        let path = path.to_string_lossy().to_string();
        (dir, path)
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.toml");
        let config = FlowConfig::load_from(
            File::from(absent.as_path()).format(FileFormat::Toml).required(false),
        )
        .unwrap();

        assert_eq!(config.base_dir_path(), PathBuf::from("."));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_file_values_override_defaults() {
        let (_dir, path) = write_toml("base_dir = \"/srv/files\"\nlog_level = \"debug\"\n");
        let config =
            FlowConfig::load_from(File::with_name(&path).format(FileFormat::Toml)).unwrap();

        assert_eq!(config.base_dir, "/srv/files");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_empty_base_dir_is_rejected() {
        let (_dir, path) = write_toml("base_dir = \"\"\n");
        let err =
            FlowConfig::load_from(File::with_name(&path).format(FileFormat::Toml)).unwrap_err();
        assert!(err.to_string().contains("base_dir cannot be empty"));
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let (_dir, path) = write_toml("log_level = \"loud\"\n");
        let err =
            FlowConfig::load_from(File::with_name(&path).format(FileFormat::Toml)).unwrap_err();
        assert!(err.to_string().contains("log_level"));
    }
}
