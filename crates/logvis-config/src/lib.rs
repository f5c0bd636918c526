//! logvis configuration system
//!
//! This crate provides centralized configuration for the reordering shim,
//! loading settings from `logvis.toml` with environment variable overrides.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Default configuration file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "logvis.toml";

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`LogvisConfig`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LogvisConfig {
    /// Reordering settings
    pub bidi: BidiConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Reordering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BidiConfig {
    /// Paragraph direction hint used when the caller does not supply one
    pub base_direction: DirectionSetting,
    /// Replace mirrored characters (brackets, comparison operators) in RTL runs
    pub mirroring: bool,
    /// Reject inputs longer than this many bytes before allocating scratch space
    pub max_input_bytes: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `env_logger` style filter, e.g. `"logvis_text=debug"`
    pub filter: Option<String>,
}

impl Default for BidiConfig {
    fn default() -> Self {
        Self {
            base_direction: DirectionSetting::Auto,
            mirroring: true,
            max_input_bytes: None,
        }
    }
}

/// Paragraph direction hint as written in configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DirectionSetting {
    #[default]
    Auto,
    Ltr,
    Rtl,
    WeakLtr,
    WeakRtl,
}

/// Error returned when a direction string is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown base direction {0:?} (expected auto, ltr, rtl, weak-ltr or weak-rtl)")]
pub struct ParseDirectionError(pub String);

impl FromStr for DirectionSetting {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "auto" | "on" => Ok(Self::Auto),
            "ltr" => Ok(Self::Ltr),
            "rtl" => Ok(Self::Rtl),
            "weak-ltr" | "wltr" => Ok(Self::WeakLtr),
            "weak-rtl" | "wrtl" => Ok(Self::WeakRtl),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

impl fmt::Display for DirectionSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
            Self::WeakLtr => "weak-ltr",
            Self::WeakRtl => "weak-rtl",
        };
        f.write_str(name)
    }
}

fn parse_flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

impl LogvisConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from `logvis.toml` in the current directory,
    /// or return the default configuration if it is missing or invalid.
    pub fn load_or_default() -> Self {
        match Self::load_from_file(CONFIG_FILE) {
            Ok(config) => config,
            Err(ConfigError::Read { .. }) => Self::default(),
            Err(err) => {
                log::warn!("{err}; using default configuration");
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// Unparseable values are ignored with a warning.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("LOGVIS_BASE_DIRECTION") {
            match val.parse::<DirectionSetting>() {
                Ok(direction) => self.bidi.base_direction = direction,
                Err(err) => log::warn!("ignoring LOGVIS_BASE_DIRECTION: {err}"),
            }
        }
        if let Ok(val) = std::env::var("LOGVIS_MIRRORING") {
            self.bidi.mirroring = parse_flag(&val);
        }
        if let Ok(val) = std::env::var("LOGVIS_MAX_INPUT_BYTES") {
            match val.parse::<usize>() {
                Ok(0) => self.bidi.max_input_bytes = None,
                Ok(limit) => self.bidi.max_input_bytes = Some(limit),
                Err(err) => log::warn!("ignoring LOGVIS_MAX_INPUT_BYTES={val:?}: {err}"),
            }
        }
        if let Ok(filter) = std::env::var("LOGVIS_LOG") {
            self.logging.filter = Some(filter);
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from `logvis.toml` (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
