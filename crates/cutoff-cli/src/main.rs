//! Cutoff CLI - zero-phase lowpass/highpass filtering of WAV files.

mod commands;

use clap::{Parser, Subcommand};
use cutoff_core::Direction;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cutoff")]
#[command(author, version, about = "Minimum-order zero-phase lowpass/highpass filtering", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lowpass filter a WAV file
    Lowpass(commands::filter::FilterArgs),

    /// Highpass filter a WAV file
    Highpass(commands::filter::FilterArgs),

    /// Design a filter without data and report it
    Design(commands::design::DesignArgs),

    /// List, show and save filter presets
    Presets(commands::presets::PresetsArgs),

    /// Show WAV file information
    Info(commands::info::InfoArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `design --json` output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
    tracing_log::LogTracer::init().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lowpass(args) => commands::filter::run(Direction::Lowpass, args),
        Commands::Highpass(args) => commands::filter::run(Direction::Highpass, args),
        Commands::Design(args) => commands::design::run(args),
        Commands::Presets(args) => commands::presets::run(args),
        Commands::Info(args) => commands::info::run(args),
    }
}
