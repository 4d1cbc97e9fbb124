//! Display WAV file metadata.

use clap::Args;
use cutoff_core::AUTO_FIR_LENGTH_FACTOR;
use cutoff_io::{WavFormat, read_wav_info};

/// Display WAV file information.
#[derive(Args)]
pub struct InfoArgs {
    /// Path to the WAV file
    pub file: std::path::PathBuf,
}

/// Run the info command.
pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let info = read_wav_info(&args.file)?;

    let format_str = match info.format {
        WavFormat::Pcm => "PCM",
        WavFormat::IeeeFloat => "IEEE Float",
    };

    println!("File:        {}", args.file.display());
    println!("Format:      {} {}-bit", format_str, info.bits_per_sample);
    println!("Channels:    {}", info.channels);
    println!("Sample Rate: {} Hz", info.sample_rate);
    println!("Nyquist:     {} Hz", f64::from(info.sample_rate) / 2.0);
    println!(
        "Duration:    {:.3}s ({} frames)",
        info.duration_secs, info.num_frames
    );
    // Auto mode picks FIR only below this order
    println!(
        "FIR limit:   order < {} (auto mode)",
        info.num_frames.div_ceil(AUTO_FIR_LENGTH_FACTOR as u64)
    );
    Ok(())
}
