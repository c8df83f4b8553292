//! Configuration management for healthcalc
//!
//! TOML-based configuration with defaults and validation.
//! Location: ~/.healthcalc/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{HealthError, Result};
use crate::types::HealthLimits;

/// Largest number of decimals the CLI will print
pub const MAX_PRECISION: usize = 10;

/// Complete configuration for healthcalc
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub limits: HealthLimits,
    pub output: OutputConfig,
}

/// Output formatting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub precision: usize,
    pub json: bool,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: 2,
            json: false,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load from `path`, using defaults when the file does not exist yet
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse and validate configuration text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the standard location, falling back to built-in defaults
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(config_path) if config_path.exists() => Self::load_from_file(&config_path),
            _ => Ok(Config::default()),
        }
    }

    /// Standard config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".healthcalc").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.limits.validate()?;

        if self.output.precision > MAX_PRECISION {
            return Err(HealthError::Config(format!(
                "precision must be at most {}",
                MAX_PRECISION
            )));
        }

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| HealthError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;
        Ok(())
    }
}
