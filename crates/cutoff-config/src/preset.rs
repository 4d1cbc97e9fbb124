//! Preset file format and operations.

use cutoff_core::{
    DEFAULT_STEEPNESS, DEFAULT_STOPBAND_ATTENUATION_DB, Direction, FilterOptions, ImpulseResponse,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, FileOp};
use crate::validation::{parse_direction, parse_impulse_response, validate_preset};

/// A named lowpass or highpass filter setting.
///
/// # TOML Format
///
/// ```toml
/// name = "Rumble"
/// description = "Remove turntable and handling rumble"
/// direction = "highpass"
/// passband_hz = 40.0
/// steepness = 0.9
/// stopband_attenuation_db = 60.0
/// impulse_response = "auto"
/// ```
///
/// Only `name`, `direction` and `passband_hz` are required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterPreset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `lowpass` or `highpass`.
    pub direction: String,

    /// Passband edge in Hz.
    pub passband_hz: f64,

    /// Transition steepness in `[0.5, 1)`.
    #[serde(default = "default_steepness")]
    pub steepness: f64,

    /// Stopband attenuation target in dB.
    #[serde(default = "default_attenuation")]
    pub stopband_attenuation_db: f64,

    /// `auto`, `fir` or `iir`.
    #[serde(default = "default_impulse_response")]
    pub impulse_response: String,
}

fn default_steepness() -> f64 {
    DEFAULT_STEEPNESS
}

fn default_attenuation() -> f64 {
    DEFAULT_STOPBAND_ATTENUATION_DB
}

fn default_impulse_response() -> String {
    ImpulseResponse::Auto.as_str().to_string()
}

impl FilterPreset {
    /// Create a preset with default steepness, attenuation and mode.
    pub fn new(name: impl Into<String>, direction: impl Into<String>, passband_hz: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            direction: direction.into(),
            passband_hz,
            steepness: DEFAULT_STEEPNESS,
            stopband_attenuation_db: DEFAULT_STOPBAND_ATTENUATION_DB,
            impulse_response: default_impulse_response(),
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the transition steepness.
    pub fn with_steepness(mut self, steepness: f64) -> Self {
        self.steepness = steepness;
        self
    }

    /// Set the stopband attenuation target.
    pub fn with_stopband_attenuation_db(mut self, attenuation_db: f64) -> Self {
        self.stopband_attenuation_db = attenuation_db;
        self
    }

    /// Set the impulse response mode.
    pub fn with_impulse_response(mut self, mode: ImpulseResponse) -> Self {
        self.impulse_response = mode.as_str().to_string();
        self
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io(FileOp::Read, path, e))?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|source| ConfigError::Parse { path: None, source })
    }

    /// Save the preset to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::io(FileOp::CreateDir, parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::io(FileOp::Write, path, e))?;
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|source| ConfigError::Encode {
            name: self.name.clone(),
            source,
        })
    }

    /// Parsed filter direction.
    pub fn direction(&self) -> Result<Direction, ConfigError> {
        parse_direction(&self.direction).map_err(|e| ConfigError::invalid(&self.name, e))
    }

    /// Parsed impulse response mode.
    pub fn impulse_response(&self) -> Result<ImpulseResponse, ConfigError> {
        parse_impulse_response(&self.impulse_response)
            .map_err(|e| ConfigError::invalid(&self.name, e))
    }

    /// Validate the preset and convert it to filter options.
    pub fn to_options(&self) -> Result<FilterOptions, ConfigError> {
        validate_preset(self).map_err(|e| ConfigError::invalid(&self.name, e))?;
        Ok(FilterOptions::default()
            .with_steepness(self.steepness)
            .with_stopband_attenuation_db(self.stopband_attenuation_db)
            .with_impulse_response(self.impulse_response()?))
    }
}
