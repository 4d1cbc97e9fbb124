//! Factory presets bundled with the cutoff library.
//!
//! These are embedded at compile time and are always available without
//! external files.

use crate::FilterPreset;

/// Array of factory preset names for external access.
pub static FACTORY_PRESET_NAMES: &[&str] =
    &["rumble", "subsonic", "telephone", "hiss", "anti_alias"];

static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("rumble", RUMBLE_PRESET),
    ("subsonic", SUBSONIC_PRESET),
    ("telephone", TELEPHONE_PRESET),
    ("hiss", HISS_PRESET),
    ("anti_alias", ANTI_ALIAS_PRESET),
];

const RUMBLE_PRESET: &str = r#"
name = "Rumble"
description = "Remove turntable, wind and handling rumble below 40 Hz"
direction = "highpass"
passband_hz = 40.0
steepness = 0.85
stopband_attenuation_db = 60.0
impulse_response = "auto"
"#;

const SUBSONIC_PRESET: &str = r#"
name = "Subsonic"
description = "Strip DC and infrasonic content while keeping the full audio band"
direction = "highpass"
passband_hz = 20.0
steepness = 0.9
stopband_attenuation_db = 80.0
impulse_response = "iir"
"#;

const TELEPHONE_PRESET: &str = r#"
name = "Telephone"
description = "Narrowband voice: keep content below 3.4 kHz"
direction = "lowpass"
passband_hz = 3400.0
steepness = 0.85
stopband_attenuation_db = 60.0
impulse_response = "auto"
"#;

const HISS_PRESET: &str = r#"
name = "Hiss"
description = "Gentle tape hiss reduction above 10 kHz"
direction = "lowpass"
passband_hz = 10000.0
steepness = 0.7
stopband_attenuation_db = 40.0
impulse_response = "fir"
"#;

const ANTI_ALIAS_PRESET: &str = r#"
name = "Anti-alias"
description = "Band-limit to 20 kHz before decimation from high sample rates"
direction = "lowpass"
passband_hz = 20000.0
steepness = 0.95
stopband_attenuation_db = 96.0
impulse_response = "auto"
"#;

/// Returns all factory presets.
pub fn factory_presets() -> Vec<FilterPreset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| FilterPreset::from_toml(toml).ok())
        .collect()
}

/// Get a factory preset by key or display name, case-insensitively.
pub fn get_factory_preset(name: &str) -> Option<FilterPreset> {
    let wanted = name.to_lowercase();
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(key, toml)| FilterPreset::from_toml(toml).ok().map(|p| (key, p)))
        .find(|(key, p)| **key == wanted || p.name.to_lowercase() == wanted)
        .map(|(_, p)| p)
}

/// Keys of all factory presets.
pub fn factory_preset_names() -> &'static [&'static str] {
    FACTORY_PRESET_NAMES
}

/// `true` when `name` refers to a factory preset.
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}
