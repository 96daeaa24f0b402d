//! Configuration file locations
//!
//! Uses the directories crate for platform-appropriate locations:
//! - Linux: `~/.config/newman-runner/`
//! - macOS: `~/Library/Application Support/newman-runner/`
//! - Windows: `%APPDATA%\newman-runner\`

use std::path::PathBuf;

const APP_NAME: &str = "newman-runner";

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_is_valid() {
        let dir = config_dir();
        assert!(dir.is_some());
    }

    #[test]
    fn test_config_path_ends_with_toml() {
        let path = config_path().unwrap();
        assert!(path.ends_with("config.toml"));
    }
}
