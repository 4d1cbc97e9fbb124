//! Design a filter for a hypothetical signal and report it.

use super::common::{OptionFlags, design_json, load_preset, print_design, print_measurement};
use clap::Args;
use cutoff_analysis::{measure_design, response::DEFAULT_FFT_SIZE};
use cutoff_core::{
    Designed, Direction, FilterOptions, Precision, SampleRate, design,
    validate::build_spec_for_length,
};

/// Tolerance for the measured-versus-target attenuation check.
const MEASUREMENT_TOLERANCE_DB: f64 = 0.5;

/// Report the filter that would be used for a signal.
#[derive(Args)]
pub struct DesignArgs {
    /// lowpass or highpass
    #[arg(short, long, default_value = "lowpass")]
    direction: Direction,

    /// Passband edge in Hz, or normalized (1.0 = Nyquist) without --sample-rate
    #[arg(short, long)]
    passband: Option<f64>,

    /// Sample rate in Hz
    #[arg(long)]
    sample_rate: Option<f64>,

    /// Signal length in samples
    #[arg(short = 'n', long)]
    length: usize,

    #[command(flatten)]
    options: OptionFlags,

    /// Preset name or TOML file supplying direction, passband and settings
    #[arg(long)]
    preset: Option<String>,

    /// Round coefficients to single precision
    #[arg(long)]
    single: bool,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,
}

/// Run the design command.
pub fn run(args: DesignArgs) -> anyhow::Result<()> {
    let (direction, base, preset_passband) = match &args.preset {
        Some(name) => {
            let preset = load_preset(name)?;
            if args.sample_rate.is_none() {
                anyhow::bail!(
                    "Preset '{}' gives its passband in Hz; add --sample-rate HZ",
                    preset.name
                );
            }
            (
                preset.direction()?,
                preset.to_options()?,
                Some(preset.passband_hz),
            )
        }
        None => (args.direction, FilterOptions::default(), None),
    };
    let options = args.options.apply(base);
    let Some(passband) = args.passband.or(preset_passband) else {
        anyhow::bail!("No passband given. Use --passband or --preset NAME");
    };

    let sample_rate = args.sample_rate.map_or(SampleRate::Normalized, SampleRate::Hz);
    let precision = if args.single {
        Precision::Single
    } else {
        Precision::Double
    };

    let spec = build_spec_for_length(
        direction,
        args.length,
        passband,
        sample_rate,
        precision,
        &options,
    )?;
    let Designed { design, diagnostic } = design(&spec)?;
    let measurement = measure_design(&design, DEFAULT_FFT_SIZE, MEASUREMENT_TOLERANCE_DB);

    if args.json {
        let report = design_json(&design, diagnostic.as_ref(), &measurement);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_design(&design, diagnostic.as_ref());
        print_measurement(&measurement);
    }
    Ok(())
}
