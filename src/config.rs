use crate::ui::formatter::Formatter;
use crate::utils::input::DEFAULT_MAX_INPUT_BYTES;
use crate::{Result, SmapError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".smap-verify.toml";

/// Extension treated as a class file when none is configured
pub const DEFAULT_CLASS_EXTENSION: &str = "class";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InputConfig {
    /// Largest input file accepted, in bytes
    #[serde(default)]
    pub max_bytes: Option<u64>,
    /// File extensions verified as class files in `auto` mode
    #[serde(default)]
    pub class_extensions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Default output format ("text" or "json")
    #[serde(default)]
    pub format: Option<String>,
    /// Colorize console output
    #[serde(default)]
    pub color: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DebugConfig {
    /// Default verbosity level (0-3)
    #[serde(default)]
    pub verbosity: Option<u8>,
}

impl Config {
    /// Load configuration from a file in the project root
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from `config_path`; a missing file yields defaults
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let artifact = config_path.display().to_string();
        let content = fs::read_to_string(config_path).map_err(|e| {
            SmapError::configuration(&artifact, format!("Failed to read config file: {}", e))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            SmapError::configuration(&artifact, format!("Failed to parse TOML config: {}", e))
        })?;

        Ok(config)
    }

    /// Load the config file, falling back to defaults with a warning on
    /// stderr when it cannot be read or parsed.
    ///
    /// Runs before tracing is installed, so the warning is printed directly.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "{}",
                    Formatter::warning(format!("Failed to load config: {}. Using defaults.", e))
                );
                Config::default()
            }
        }
    }

    pub fn max_input_bytes(&self) -> u64 {
        self.input.max_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES)
    }

    pub fn class_extensions(&self) -> Vec<String> {
        if self.input.class_extensions.is_empty() {
            vec![DEFAULT_CLASS_EXTENSION.to_string()]
        } else {
            self.input.class_extensions.clone()
        }
    }
}
