//! File-based lowpass/highpass filtering command.

use super::common::{OptionFlags, load_preset, print_design};
use clap::Args;
use cutoff_analysis::spectrum::rms;
use cutoff_core::{Direction, FilterOptions, SampleRate, filter_signal};
use cutoff_io::{WavSpec, read_wav, write_wav};
use std::path::PathBuf;

/// Filter a WAV file with zero phase.
#[derive(Args)]
pub struct FilterArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Passband edge in Hz (taken from the preset when omitted)
    #[arg(short, long)]
    passband: Option<f64>,

    #[command(flatten)]
    options: OptionFlags,

    /// Preset name or TOML file supplying passband and design settings
    #[arg(long)]
    preset: Option<String>,

    /// Output bit depth (16, 24, or 32); defaults to the input's
    #[arg(long)]
    bit_depth: Option<u16>,
}

/// Run the lowpass or highpass command.
pub fn run(direction: Direction, args: FilterArgs) -> anyhow::Result<()> {
    let (base, preset_passband) = match &args.preset {
        Some(name) => {
            let preset = load_preset(name)?;
            let preset_direction = preset.direction()?;
            if preset_direction != direction {
                anyhow::bail!(
                    "Preset '{}' is a {} preset; use 'cutoff {}' instead",
                    preset.name,
                    preset_direction,
                    preset_direction
                );
            }
            println!("Using preset: {}", preset.name);
            (preset.to_options()?, Some(preset.passband_hz))
        }
        None => (FilterOptions::default(), None),
    };
    let options = args.options.apply(base);
    let Some(passband) = args.passband.or(preset_passband) else {
        anyhow::bail!("No passband given. Use --passband HZ or --preset NAME");
    };

    println!("Reading {}...", args.input.display());
    let (audio, spec) = read_wav(&args.input)?;
    let sample_rate = f64::from(spec.sample_rate);
    println!(
        "  {} frames x {} channel(s), {} Hz, {:.2}s",
        audio.rows(),
        audio.cols(),
        spec.sample_rate,
        audio.rows() as f64 / sample_rate
    );

    let filtered = filter_signal(
        direction,
        &audio,
        passband,
        SampleRate::Hz(sample_rate),
        &options,
    )?;
    print_design(&filtered.design, filtered.diagnostic.as_ref());

    let out_spec = WavSpec {
        bits_per_sample: args.bit_depth.unwrap_or(spec.bits_per_sample),
        ..spec
    };
    write_wav(&args.output, &filtered.signal, out_spec)?;

    println!("\nStats:");
    for (c, (before, after)) in audio.columns().zip(filtered.signal.columns()).enumerate() {
        println!(
            "  Channel {c}: RMS {:.1} dB -> {:.1} dB",
            linear_to_db(rms(before)),
            linear_to_db(rms(after))
        );
    }
    println!("Wrote {}", args.output.display());
    Ok(())
}

fn linear_to_db(x: f64) -> f64 {
    20.0 * x.max(1e-10).log10()
}
