//! Configuration loading for the Folio TUI.
//!
//! A config file is optional: `--config <path>` or `FOLIO_CONFIG` names one,
//! otherwise the compiled defaults apply. Every loaded value still passes
//! `validate()`.

use folio_core::TypedTiming;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TuiConfig {
    /// Event-loop tick interval.
    pub tick_rate_ms: u64,
    pub type_interval_ms: u64,
    pub delete_interval_ms: u64,
    pub hold_full_ms: u64,
    pub hold_empty_ms: u64,
    /// CV file copied by the download action. Existence is not checked here;
    /// a missing file surfaces when the download is attempted.
    pub cv_source: PathBuf,
    pub download_dir: PathBuf,
    /// Optional profile TOML overriding the compiled-in page content.
    pub profile_path: Option<PathBuf>,
    pub log_path: PathBuf,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 25,
            type_interval_ms: 80,
            delete_interval_ms: 60,
            hold_full_ms: 1000,
            hold_empty_ms: 500,
            cv_source: PathBuf::from("cv.pdf"),
            download_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
            profile_path: None,
            log_path: PathBuf::from("folio-tui.log"),
            theme: ThemeConfig {
                name: "midnight".to_string(),
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config = match config_path_from_args().or_else(config_path_from_env) {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: TuiConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_rate_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.type_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "type_interval_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.delete_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "delete_interval_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.cv_source.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "cv_source",
                reason: "must not be empty".to_string(),
            });
        }
        if self.download_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "download_dir",
                reason: "must not be empty".to_string(),
            });
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.theme.name.to_ascii_lowercase() != "midnight" {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "only 'midnight' is supported".to_string(),
            });
        }
        Ok(())
    }

    /// Typing-effect intervals as core timing.
    pub fn typed_timing(&self) -> TypedTiming {
        TypedTiming {
            type_interval: Duration::from_millis(self.type_interval_ms),
            delete_interval: Duration::from_millis(self.delete_interval_ms),
            hold_full: Duration::from_millis(self.hold_full_ms),
            hold_empty: Duration::from_millis(self.hold_empty_ms),
        }
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("FOLIO_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}
