//! Preset validation.
//!
//! Every field is checked and all problems are reported together, so a
//! hand-edited preset file can be fixed in one pass.
//!
//! # Example
//!
//! ```rust
//! use cutoff_config::{FilterPreset, validate_preset};
//!
//! let mut preset = FilterPreset::new("broken", "lowpass", 1000.0);
//! preset.steepness = 1.5;
//! preset.direction = "sideways".into();
//! let err = validate_preset(&preset).unwrap_err();
//! assert_eq!(err.errors().len(), 2);
//! ```

use cutoff_core::{Direction, ImpulseResponse, MAX_STEEPNESS, MIN_STEEPNESS, PASSBAND_RIPPLE_DB};
use thiserror::Error;

use crate::preset::FilterPreset;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Direction is not `lowpass` or `highpass`.
    #[error("unknown filter direction: {0}")]
    UnknownDirection(String),

    /// Impulse response mode is not `auto`, `fir` or `iir`.
    #[error("unknown impulse response: {0}")]
    UnknownImpulseResponse(String),

    /// Numeric field out of range.
    #[error("{field} value {value} out of range {range}")]
    OutOfRange {
        /// Name of the field.
        field: &'static str,
        /// The value that was out of range.
        value: f64,
        /// Allowed range, for display.
        range: &'static str,
    },

    /// Preset has an empty name.
    #[error("preset name is empty")]
    EmptyName,

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

impl ValidationError {
    /// Individual errors, flattening [`ValidationError::Multiple`].
    pub fn errors(&self) -> Vec<&ValidationError> {
        match self {
            ValidationError::Multiple(errors) => errors.iter().collect(),
            single => vec![single],
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parse a direction name.
pub fn parse_direction(value: &str) -> ValidationResult<Direction> {
    value
        .parse()
        .map_err(|_| ValidationError::UnknownDirection(value.to_string()))
}

/// Parse an impulse response mode name.
pub fn parse_impulse_response(value: &str) -> ValidationResult<ImpulseResponse> {
    value
        .parse()
        .map_err(|_| ValidationError::UnknownImpulseResponse(value.to_string()))
}

/// Check every field of a preset.
///
/// The passband is only checked for being a positive frequency; whether it
/// lies below Nyquist depends on the file it is applied to.
pub fn validate_preset(preset: &FilterPreset) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if preset.name.trim().is_empty() {
        errors.push(ValidationError::EmptyName);
    }
    if let Err(e) = parse_direction(&preset.direction) {
        errors.push(e);
    }
    if let Err(e) = parse_impulse_response(&preset.impulse_response) {
        errors.push(e);
    }
    if !(preset.passband_hz.is_finite() && preset.passband_hz > 0.0) {
        errors.push(ValidationError::OutOfRange {
            field: "passband_hz",
            value: preset.passband_hz,
            range: "(0, inf)",
        });
    }
    if !(MIN_STEEPNESS..MAX_STEEPNESS).contains(&preset.steepness) {
        errors.push(ValidationError::OutOfRange {
            field: "steepness",
            value: preset.steepness,
            range: "[0.5, 1)",
        });
    }
    let attenuation = preset.stopband_attenuation_db;
    if !(attenuation.is_finite() && attenuation > PASSBAND_RIPPLE_DB) {
        errors.push(ValidationError::OutOfRange {
            field: "stopband_attenuation_db",
            value: attenuation,
            range: "(0.1, inf)",
        });
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}
