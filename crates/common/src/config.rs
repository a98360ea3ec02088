//! Application configuration.
//!
//! NearGuard is deliberately close to configuration-free: the only tunable
//! numbers are the two thresholds below. Everything else (distance sentinel,
//! color ramp, pulse clamp) is a fixed constant in the estimator crate.

use crate::error::{NearguardError, NearguardResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Decision thresholds.
    pub thresholds: ThresholdConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// The two decision thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Per-axis user acceleration (in g) above which tracking is re-acquired.
    pub reset_accel: f64,

    /// Distance (cm) below which the face counts as too close.
    pub warn_near_cm: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "nearguard=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            thresholds: ThresholdConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            reset_accel: 0.2,
            warn_near_cm: 20.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> NearguardResult<()> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, json)?;
        Ok(())
    }

    /// Write a default config file, refusing to clobber an existing one.
    /// Returns the path written.
    pub fn init_default() -> NearguardResult<PathBuf> {
        let config_path = config_file_path();
        if config_path.exists() {
            return Err(NearguardError::config(format!(
                "config already exists at {}",
                config_path.display()
            )));
        }
        Self::default().save()?;
        Ok(config_path)
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("nearguard").join("config.json")
}
