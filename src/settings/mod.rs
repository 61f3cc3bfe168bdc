use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::amp::processor::GAIN_RAMP_SECONDS;

const SETTINGS_FILENAME: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Time the trim stages take to reach a new gain, in milliseconds.
    pub gain_ramp_ms: f64,
    /// Log filter used by the command line tools when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl std::fmt::Display for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Gain Ramp: {} ms", self.gain_ramp_ms)?;
        writeln!(f, "Log Filter: {}", self.log_filter)?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gain_ramp_ms: GAIN_RAMP_SECONDS * 1000.0,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_settings_path())
    }

    /// Like [`Settings::load`], but never writes to disk.
    pub fn read() -> Result<Self> {
        Self::read_from(&Self::get_settings_path())
    }

    /// Load, falling back to defaults on failure. The error is handed back so it can
    /// be reported once logging is up.
    pub fn load_or_default() -> (Self, Option<anyhow::Error>) {
        Self::load_or_default_from(&Self::get_settings_path())
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_settings_path())
    }

    /// Read settings from `path`. A missing file gives defaults, which are then written
    /// out on a best effort basis.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::read_from(path)
        } else {
            info!("No settings file found, using defaults");
            let settings = Self::default();
            // Try to save defaults, but don't fail if we can't
            let _ = settings.save_to(path);
            Ok(settings)
        }
    }

    /// Read settings from `path`. A missing file gives defaults and nothing is written.
    pub fn read_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings file at {path:?}, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).context("Failed to read settings file")?;
        let settings: Self = serde_json::from_str(&contents).context("Failed to parse settings")?;
        debug!("Loaded settings from {path:?}");
        Ok(settings)
    }

    pub fn load_or_default_from(path: &Path) -> (Self, Option<anyhow::Error>) {
        match Self::load_from(path) {
            Ok(settings) => (settings, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;

        fs::write(path, json).context("Failed to write settings file")?;

        debug!("Saved settings to {path:?}");
        Ok(())
    }

    /// Ramp time in seconds. Unusable values fall back to the default.
    pub fn gain_ramp_seconds(&self) -> f64 {
        if self.gain_ramp_ms.is_finite() && self.gain_ramp_ms >= 0.0 {
            self.gain_ramp_ms / 1000.0
        } else {
            warn!(
                "Ignoring invalid gain ramp of {} ms, using {} ms",
                self.gain_ramp_ms,
                GAIN_RAMP_SECONDS * 1000.0
            );
            GAIN_RAMP_SECONDS
        }
    }

    fn get_settings_path() -> PathBuf {
        // Try to use XDG config directory on Linux
        if let Ok(config_dir) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(config_dir)
                .join("ampsim")
                .join(SETTINGS_FILENAME)
        } else if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("ampsim")
                .join(SETTINGS_FILENAME)
        } else {
            // Fallback to current directory
            PathBuf::from(".").join(SETTINGS_FILENAME)
        }
    }
}
