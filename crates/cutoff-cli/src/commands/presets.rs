//! Preset management commands.

use super::common::{OptionFlags, load_preset};
use clap::{Args, Subcommand};
use cutoff_config::{
    FilterPreset, factory_presets, list_presets_in, user_presets_dir, validate_preset,
};
use cutoff_core::{Direction, FilterOptions};
use std::path::PathBuf;

/// List, show and save filter presets.
#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: Option<PresetsCommand>,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List available presets (factory and user)
    List,

    /// Show details of a preset
    Show {
        /// Preset name or path
        name: String,
    },

    /// Save a new preset
    Save {
        /// Name for the new preset
        name: String,

        /// lowpass or highpass
        #[arg(short, long)]
        direction: Direction,

        /// Passband edge in Hz
        #[arg(short, long)]
        passband: f64,

        #[command(flatten)]
        options: OptionFlags,

        /// Description of the preset
        #[arg(long)]
        description: Option<String>,

        /// Write to this file instead of the user presets directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite if the file already exists
        #[arg(long)]
        force: bool,
    },

    /// Show the user preset directory
    Paths,
}

/// Run the presets command.
pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command.unwrap_or(PresetsCommand::List) {
        PresetsCommand::List => list(),
        PresetsCommand::Show { name } => show(&name),
        PresetsCommand::Save {
            name,
            direction,
            passband,
            options,
            description,
            output,
            force,
        } => {
            let opts = options.apply(FilterOptions::default());
            let mut preset = FilterPreset::new(&name, direction.as_str(), passband)
                .with_steepness(opts.steepness)
                .with_stopband_attenuation_db(opts.stopband_attenuation_db)
                .with_impulse_response(opts.impulse_response);
            preset.description = description;
            let path = output.unwrap_or_else(|| user_presets_dir().join(format!("{name}.toml")));
            save(&preset, path, force)
        }
        PresetsCommand::Paths => {
            println!("User presets: {}", user_presets_dir().display());
            Ok(())
        }
    }
}

fn list() -> anyhow::Result<()> {
    println!("Factory presets:");
    for preset in factory_presets() {
        println!(
            "  {:<12} {:<8} {:>8.1} Hz  {}",
            preset.name,
            preset.direction,
            preset.passband_hz,
            preset.description.as_deref().unwrap_or("")
        );
    }

    let dir = user_presets_dir();
    let user = list_presets_in(&dir);
    if !user.is_empty() {
        println!("\nUser presets ({}):", dir.display());
        for name in user {
            println!("  {name}");
        }
    }
    Ok(())
}

fn show(name: &str) -> anyhow::Result<()> {
    let preset = load_preset(name)?;
    println!("Name:         {}", preset.name);
    if let Some(desc) = &preset.description {
        println!("Description:  {desc}");
    }
    println!("Direction:    {}", preset.direction);
    println!("Passband:     {} Hz", preset.passband_hz);
    println!("Steepness:    {}", preset.steepness);
    println!("Attenuation:  {} dB", preset.stopband_attenuation_db);
    println!("Response:     {}", preset.impulse_response);
    if let Err(e) = validate_preset(&preset) {
        println!("Invalid:      {e}");
    }
    Ok(())
}

fn save(preset: &FilterPreset, path: PathBuf, force: bool) -> anyhow::Result<()> {
    validate_preset(preset)?;
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }
    preset.save(&path)?;
    tracing::info!(path = %path.display(), "saved preset");
    println!("Saved preset '{}' to {}", preset.name, path.display());
    Ok(())
}
