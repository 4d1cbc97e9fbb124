//! Preset lookup on disk.
//!
//! User presets live in `<config dir>/cutoff/presets/` (for example
//! `~/.config/cutoff/presets/` on Linux).

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::factory_presets::get_factory_preset;
use crate::preset::FilterPreset;

/// Application name used for directory paths.
const APP_NAME: &str = "cutoff";

/// Subdirectory name for presets.
const PRESETS_SUBDIR: &str = "presets";

/// Returns the user-specific presets directory.
///
/// Falls back to `./cutoff/presets` when the platform config directory
/// cannot be determined.
pub fn user_presets_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join(PRESETS_SUBDIR)
}

/// Find a preset file by path or by name in `dir`.
///
/// `name` may be a path to an existing file, or a preset name with or
/// without the `.toml` extension.
pub fn find_preset_in(name: &str, dir: &Path) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }

    let filename = if name.ends_with(".toml") {
        name.to_string()
    } else {
        format!("{name}.toml")
    };
    let candidate = dir.join(filename);
    candidate.is_file().then_some(candidate)
}

/// Find a preset file by path or by name in the user presets directory.
pub fn find_preset(name: &str) -> Option<PathBuf> {
    find_preset_in(name, &user_presets_dir())
}

/// Preset names (file stems) of every `.toml` file in `dir`, sorted.
pub fn list_presets_in(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "toml"))
        .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .collect();
    names.sort();
    names
}

/// Resolve a preset: an existing file path first, then a factory preset,
/// then a file in `dir`.
pub fn resolve_preset_in(name: &str, dir: &Path) -> Result<FilterPreset, ConfigError> {
    if Path::new(name).is_file() {
        return FilterPreset::load(name);
    }
    if let Some(preset) = get_factory_preset(name) {
        return Ok(preset);
    }
    match find_preset_in(name, dir) {
        Some(path) => FilterPreset::load(path),
        None => Err(ConfigError::PresetNotFound {
            name: name.to_string(),
            searched: dir.to_path_buf(),
        }),
    }
}

/// Resolve a preset against the user presets directory.
pub fn resolve_preset(name: &str) -> Result<FilterPreset, ConfigError> {
    resolve_preset_in(name, &user_presets_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn user_dir_ends_with_app_presets() {
        let dir = user_presets_dir();
        assert!(dir.ends_with("cutoff/presets"));
    }

    #[test]
    fn find_by_name_with_and_without_extension() {
        let dir = TempDir::new().unwrap();
        FilterPreset::new("Mine", "lowpass", 500.0)
            .save(dir.path().join("mine.toml"))
            .unwrap();

        assert!(find_preset_in("mine", dir.path()).is_some());
        assert!(find_preset_in("mine.toml", dir.path()).is_some());
        assert!(find_preset_in("theirs", dir.path()).is_none());
    }

    #[test]
    fn list_skips_non_toml() {
        let dir = TempDir::new().unwrap();
        FilterPreset::new("B", "lowpass", 500.0)
            .save(dir.path().join("b.toml"))
            .unwrap();
        FilterPreset::new("A", "lowpass", 500.0)
            .save(dir.path().join("a.toml"))
            .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();

        assert_eq!(list_presets_in(dir.path()), vec!["a", "b"]);
        assert!(list_presets_in(&dir.path().join("missing")).is_empty());
    }

    #[test]
    fn resolve_order() {
        let dir = TempDir::new().unwrap();
        // A user file named like a factory preset does not shadow it
        FilterPreset::new("Fake rumble", "lowpass", 1.0)
            .save(dir.path().join("rumble.toml"))
            .unwrap();
        FilterPreset::new("Voice", "highpass", 100.0)
            .save(dir.path().join("voice.toml"))
            .unwrap();

        assert_eq!(resolve_preset_in("rumble", dir.path()).unwrap().name, "Rumble");
        assert_eq!(resolve_preset_in("voice", dir.path()).unwrap().name, "Voice");

        let explicit = dir.path().join("rumble.toml");
        let explicit = explicit.to_str().unwrap();
        assert_eq!(
            resolve_preset_in(explicit, dir.path()).unwrap().name,
            "Fake rumble"
        );

        assert!(matches!(
            resolve_preset_in("nothing", dir.path()),
            Err(ConfigError::PresetNotFound { ref searched, .. }) if searched == dir.path()
        ));
    }
}
