//! Settings for nibblehide.
//!
//! Stored in `~/.nibblehide/config.toml`. A missing file means defaults, and
//! any key left out of the file takes its default.
//!
//! ```toml
//! chunks = 100
//! verbose = false
//! inspect_symbols = 16
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::stego::DEFAULT_CHUNKS;

/// Default number of symbols `inspect` dumps.
pub const DEFAULT_INSPECT_SYMBOLS: usize = 16;

/// Errors that can occur when loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config directory not found. Unable to determine home directory.")]
    NoConfigDir,

    #[error("Invalid setting: {0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// User settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Chunk count for the bulk text-file writer.
    pub chunks: usize,

    /// Debug-level logging without passing `-v`.
    pub verbose: bool,

    /// Symbols shown by `inspect` after the header.
    pub inspect_symbols: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            chunks: DEFAULT_CHUNKS,
            verbose: false,
            inspect_symbols: DEFAULT_INSPECT_SYMBOLS,
        }
    }
}

impl Settings {
    /// Load settings from the default location.
    ///
    /// Without a home directory there is nowhere to look, so defaults apply.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(ConfigError::NoConfigDir) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Load settings from `path`, falling back to defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse settings from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content)?;
        if settings.chunks == 0 {
            return Err(ConfigError::Invalid("chunks must be at least 1".to_string()));
        }
        Ok(settings)
    }

    /// Save settings to `path`, creating its directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Get the path to the settings file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(get_config_dir()?.join("config.toml"))
    }
}

/// Get the nibblehide config directory (`~/.nibblehide`).
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".nibblehide"))
        .ok_or(ConfigError::NoConfigDir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_for_missing_keys() {
        let settings = Settings::parse("verbose = true").unwrap();
        assert!(settings.verbose);
        assert_eq!(settings.chunks, DEFAULT_CHUNKS);
        assert_eq!(settings.inspect_symbols, DEFAULT_INSPECT_SYMBOLS);
    }

    #[test]
    fn test_rejects_zero_chunks() {
        assert!(matches!(
            Settings::parse("chunks = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_bad_toml() {
        assert!(matches!(
            Settings::parse("chunks = \"many\""),
            Err(ConfigError::TomlParseError(_))
        ));
    }

    #[test]
    fn test_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let settings = Settings {
            chunks: 25,
            verbose: true,
            inspect_symbols: 4,
        };
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }
}
