//! Shared CLI helpers used across multiple commands.

use clap::Args;
use cutoff_analysis::{DesignMeasurement, response::DEFAULT_FFT_SIZE};
use cutoff_config::{ConfigError, FilterPreset, resolve_preset};
use cutoff_core::{Diagnostic, FilterDesign, FilterOptions, ImpulseResponse, SampleRate};
use serde_json::json;

/// Design settings shared by the filtering and design commands.
///
/// Flags override the matching preset fields.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OptionFlags {
    /// Transition steepness in [0.5, 1); higher is a narrower transition band
    #[arg(short, long)]
    pub steepness: Option<f64>,

    /// Stopband attenuation in dB
    #[arg(short, long)]
    pub attenuation: Option<f64>,

    /// Impulse response family: auto, fir or iir
    #[arg(short = 'r', long, value_name = "MODE")]
    pub impulse_response: Option<ImpulseResponse>,
}

impl OptionFlags {
    /// Apply the flags that were given on top of `base`.
    pub fn apply(self, base: FilterOptions) -> FilterOptions {
        let mut options = base;
        if let Some(s) = self.steepness {
            options = options.with_steepness(s);
        }
        if let Some(a) = self.attenuation {
            options = options.with_stopband_attenuation_db(a);
        }
        if let Some(mode) = self.impulse_response {
            options = options.with_impulse_response(mode);
        }
        options
    }
}

/// Load a preset by factory name, file path, or user preset name.
pub fn load_preset(name: &str) -> anyhow::Result<FilterPreset> {
    match resolve_preset(name) {
        Ok(preset) => Ok(preset),
        Err(ConfigError::PresetNotFound { .. }) => anyhow::bail!(
            "Preset '{}' not found. Use 'cutoff presets list' to see available presets.",
            name
        ),
        Err(e) => Err(e.into()),
    }
}

/// Print a human-readable design summary.
pub fn print_design(design: &FilterDesign, diagnostic: Option<&Diagnostic>) {
    let unit = if design.frequency.is_normalized() {
        ""
    } else {
        " Hz"
    };

    println!("Design:");
    println!("  Direction:   {}", design.direction);
    println!("  Filter:      {}", design.params.label());
    println!(
        "  Order:       {} (minimum for target: {})",
        design.order, design.minimum_order
    );
    println!("  Passband:    {:.4}{unit}", design.passband());
    match design.stopband() {
        Some(ws) => println!("  Stopband:    {ws:.4}{unit}"),
        None => println!("  Stopband:    -"),
    }
    println!(
        "  Targets:     {:.2} dB ripple, {:.1} dB attenuation, steepness {}",
        design.passband_ripple_db, design.stopband_attenuation_db, design.steepness
    );
    if let Some(d) = diagnostic {
        println!("  Warning:     {d}");
    }
}

/// Print measured single-pass performance.
pub fn print_measurement(m: &DesignMeasurement) {
    println!("Measured ({DEFAULT_FFT_SIZE}-point FFT, single pass):");
    println!("  Passband ripple:      {:.3} dB", m.passband_ripple_db);
    match m.stopband_attenuation_db {
        Some(a) => println!("  Stopband attenuation: {a:.1} dB"),
        None => println!("  Stopband attenuation: -"),
    }
}

/// Machine-readable design report.
pub fn design_json(
    design: &FilterDesign,
    diagnostic: Option<&Diagnostic>,
    measurement: &DesignMeasurement,
) -> serde_json::Value {
    let sample_rate = match design.frequency.sample_rate {
        SampleRate::Hz(fs) => Some(fs),
        SampleRate::Normalized => None,
    };
    json!({
        "direction": design.direction.as_str(),
        "family": design.family.as_str(),
        "synthesis": design.params.label(),
        "impulse_response": design.impulse_response.as_str(),
        "order": design.order,
        "minimum_order": design.minimum_order,
        "length_limited": design.is_length_limited(),
        "passband": design.passband(),
        "stopband": design.stopband(),
        "passband_normalized": design.passband_normalized,
        "stopband_normalized": design.stopband_normalized,
        "sample_rate": sample_rate,
        "steepness": design.steepness,
        "passband_ripple_db": design.passband_ripple_db,
        "stopband_attenuation_db": design.stopband_attenuation_db,
        "diagnostic": diagnostic.map(|d| json!({
            "code": d.code.as_str(),
            "message": d.message,
        })),
        "measured": {
            "passband_ripple_db": measurement.passband_ripple_db,
            "stopband_attenuation_db": measurement.stopband_attenuation_db,
            "meets_attenuation": measurement.meets_attenuation,
        },
    })
}
