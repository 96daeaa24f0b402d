//! Configuration file handling
//!
//! The config file is optional; every section falls back to a sensible
//! default so a fresh install works with no file at all.

use serde::Deserialize;
use std::path::PathBuf;

use super::paths::config_path;
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Engine (newman) settings
    #[serde(default)]
    pub engine: EngineConfig,

    /// Default values for flags left off the command line
    #[serde(default)]
    pub defaults: Defaults,

    /// Run behavior settings
    #[serde(default)]
    pub run: RunConfig,
}

/// Settings for the newman executable
#[derive(Debug, Deserialize, Default)]
pub struct EngineConfig {
    /// Path to the newman executable; looked up on PATH when unset
    pub path: Option<PathBuf>,
}

/// Defaults for optional CLI flags
#[derive(Debug, Deserialize, Default)]
pub struct Defaults {
    /// School name used when `--school-name` is not given
    pub school_name: Option<String>,
}

/// Run behavior settings
#[derive(Debug, Deserialize, Default)]
pub struct RunConfig {
    /// Stop at the first step whose assertions fail
    #[serde(default)]
    pub halt_on_failure: bool,
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                let content =
                    std::fs::read_to_string(&path).map_err(|e| super::Error::FileRead {
                        path: path.display().to_string(),
                        error: e.to_string(),
                    })?;
                return toml::from_str(&content)
                    .map_err(|e| super::Error::ConfigParse(e.to_string()));
            }
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.engine.path.is_none());
        assert!(config.defaults.school_name.is_none());
        assert!(!config.run.halt_on_failure);
    }

    #[test]
    fn test_partial_config_defaults_missing_sections() {
        let config: Config = toml::from_str(
            r#"
            [run]
            halt_on_failure = true
            "#,
        )
        .unwrap();
        assert!(config.run.halt_on_failure);
        assert!(config.engine.path.is_none());
    }

    #[test]
    fn test_full_config_parses() {
        let config: Config = toml::from_str(
            r#"
            [engine]
            path = "/usr/local/bin/newman"

            [defaults]
            school_name = "springfield elementary"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.engine.path.as_deref(),
            Some(std::path::Path::new("/usr/local/bin/newman"))
        );
        assert_eq!(
            config.defaults.school_name.as_deref(),
            Some("springfield elementary")
        );
    }
}
