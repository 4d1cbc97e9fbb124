//! Preset loading and storage errors.
//!
//! Every variant names the preset file or preset it concerns, so callers can
//! surface the error as-is.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::validation::ValidationError;

/// Filesystem step that failed on a preset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    /// Reading an existing preset.
    Read,
    /// Writing a preset.
    Write,
    /// Creating the directory a preset is saved into.
    CreateDir,
}

impl fmt::Display for FileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FileOp::Read => "read",
            FileOp::Write => "write",
            FileOp::CreateDir => "create directory for",
        })
    }
}

/// Errors from preset lookup, parsing, validation and storage.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Filesystem access to a preset file failed.
    #[error("could not {op} preset file {}: {source}", .path.display())]
    Io {
        /// What was being done.
        op: FileOp,
        /// Preset file (or its directory for [`FileOp::CreateDir`]).
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Text is not a well-formed preset.
    #[error("{} is not a filter preset: {source}", origin(.path.as_deref()))]
    Parse {
        /// File the text came from, if any.
        path: Option<PathBuf>,
        /// TOML decoding error, with line and column.
        #[source]
        source: toml::de::Error,
    },

    /// A preset could not be encoded as TOML.
    #[error("could not encode preset '{name}': {source}")]
    Encode {
        /// Preset name.
        name: String,
        /// TOML encoding error.
        #[source]
        source: toml::ser::Error,
    },

    /// No factory preset, preset file, or user preset matched.
    #[error("no preset '{name}' among factory presets or in {}", .searched.display())]
    PresetNotFound {
        /// Name or path as given.
        name: String,
        /// User preset directory that was searched.
        searched: PathBuf,
    },

    /// Preset fields are out of range or unrecognized.
    #[error("preset '{name}' is invalid: {source}")]
    Invalid {
        /// Preset name.
        name: String,
        /// Every problem found.
        #[source]
        source: ValidationError,
    },
}

fn origin(path: Option<&Path>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "input".to_string(),
    }
}

impl ConfigError {
    /// I/O failure on `path`.
    pub fn io(op: FileOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// Validation failure on the named preset.
    pub fn invalid(name: impl Into<String>, source: ValidationError) -> Self {
        ConfigError::Invalid {
            name: name.into(),
            source,
        }
    }

    /// The validation problems, if this is an [`ConfigError::Invalid`].
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            ConfigError::Invalid { source, .. } => Some(source),
            _ => None,
        }
    }
}
