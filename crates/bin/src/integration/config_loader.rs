//! Config file discovery.
//!
//! An explicit `--config` path wins; otherwise the platform config
//! directory is checked, and defaults are used when nothing is found.

use fundsynth::{AppConfig, ConfigError};
use std::path::{Path, PathBuf};

/// Get the default config directory path.
///
/// Uses platform-specific config directories:
/// - Linux: `~/.config/fundsynth/`
/// - macOS: `~/Library/Application Support/fundsynth/`
/// - Windows: `%APPDATA%\fundsynth\`
pub(crate) fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fundsynth")
}

/// Get the default config file path.
pub(crate) fn default_config_path() -> PathBuf {
    default_config_dir().join("config.toml")
}

/// Load the configuration for this invocation.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = explicit {
        return AppConfig::from_file(path);
    }

    let path = default_config_path();
    if path.is_file() {
        tracing::info!(path = %path.display(), "using config file");
        AppConfig::from_file(&path)
    } else {
        tracing::debug!("no config file found, using defaults");
        Ok(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_layout() {
        let path = default_config_path();
        assert!(path.ends_with("fundsynth/config.toml"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let missing = Path::new("/nonexistent/fundsynth/config.toml");
        assert!(matches!(load_config(Some(missing)), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_explicit_file_is_used() {
        let path = std::env::temp_dir().join("fundsynth_bin_config_test.toml");
        std::fs::write(&path, "[synth]\nseed = 77\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.synth.seed, 77);
        std::fs::remove_file(&path).ok();
    }
}
