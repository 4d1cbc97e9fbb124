//! Filter presets for the cutoff toolkit.
//!
//! A preset names a direction, a passband edge in Hz and the optional
//! design settings (steepness, stopband attenuation, impulse response
//! mode), stored as TOML.
//!
//! # Features
//!
//! - **Presets**: load and save [`FilterPreset`] TOML files
//! - **Validation**: check every field and report all problems at once
//! - **Factory presets**: `rumble`, `subsonic`, `telephone`, `hiss`, `anti_alias`
//! - **Paths**: user preset directory and name-or-path resolution
//!
//! # Example
//!
//! ```rust
//! use cutoff_config::{FilterPreset, get_factory_preset};
//!
//! let rumble = get_factory_preset("rumble").unwrap();
//! let options = rumble.to_options().unwrap();
//! assert_eq!(options.steepness, rumble.steepness);
//!
//! let custom = FilterPreset::new("Voice", "highpass", 100.0).with_description("Voice cleanup");
//! let toml = custom.to_toml().unwrap();
//! assert_eq!(FilterPreset::from_toml(&toml).unwrap(), custom);
//! ```

mod error;
mod preset;

/// Preset lookup on disk.
pub mod paths;

/// Preset validation.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::{ConfigError, FileOp};
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, get_factory_preset,
    is_factory_preset,
};
pub use paths::{
    find_preset, list_presets_in, resolve_preset, resolve_preset_in, user_presets_dir,
};
pub use preset::FilterPreset;
pub use validation::{ValidationError, ValidationResult, validate_preset};
