//! Integration tests for cutoff-cli.
//!
//! Runs the `cutoff` binary against generated WAV files and checks exit
//! status, printed reports and written output.

use std::path::Path;
use std::process::{Command, Output};

use cutoff_core::SampleMatrix;
use cutoff_io::{WavSpec, read_wav, read_wav_info, write_wav};
use tempfile::TempDir;

/// Helper to get the path to the `cutoff` binary built by cargo.
fn cutoff_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cutoff"))
}

fn run(args: &[&str]) -> Output {
    cutoff_bin()
        .args(args)
        .output()
        .expect("failed to run cutoff")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Two-channel 48 kHz test file: 500 Hz + 12 kHz on the left, 500 Hz on the right.
fn write_test_wav(path: &Path, frames: usize) {
    let fs = 48_000.0_f32;
    let tone = |f: f32, n: usize| (2.0 * std::f32::consts::PI * f * n as f32 / fs).sin();
    let left: Vec<f32> = (0..frames)
        .map(|n| 0.4 * tone(500.0, n) + 0.4 * tone(12_000.0, n))
        .collect();
    let right: Vec<f32> = (0..frames).map(|n| 0.4 * tone(500.0, n)).collect();
    let audio = SampleMatrix::from_columns(vec![left, right]).unwrap();
    write_wav(path, &audio, WavSpec::default()).unwrap();
}

// ---------------------------------------------------------------------------
// `cutoff lowpass` / `cutoff highpass`
// ---------------------------------------------------------------------------

#[test]
fn lowpass_writes_filtered_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");
    write_test_wav(&input, 9600);

    let out = run(&[
        "lowpass",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--passband",
        "2000",
    ]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).contains("Design:"));

    let (filtered, spec) = read_wav(&output).unwrap();
    assert_eq!(spec.channels, 2);
    assert_eq!(filtered.rows(), 9600);

    // 12 kHz is gone: left now matches right away from the edges
    let left = filtered.column(0).unwrap();
    let right = filtered.column(1).unwrap();
    for i in 1000..8600 {
        assert!((left[i] - right[i]).abs() < 1e-2, "frame {i}");
    }
}

#[test]
fn highpass_with_factory_preset() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");
    write_test_wav(&input, 4800);

    let out = run(&[
        "highpass",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--preset",
        "rumble",
        "--bit-depth",
        "16",
    ]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).contains("Using preset: Rumble"));

    let info = read_wav_info(&output).unwrap();
    assert_eq!(info.bits_per_sample, 16);
    assert_eq!(info.num_frames, 4800);
}

#[test]
fn preset_direction_must_match_command() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    write_test_wav(&input, 480);

    let out = run(&[
        "lowpass",
        input.to_str().unwrap(),
        dir.path().join("out.wav").to_str().unwrap(),
        "--preset",
        "rumble",
    ]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("cutoff highpass"), "{}", stderr(&out));
}

#[test]
fn missing_passband_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    write_test_wav(&input, 480);

    let out = run(&[
        "lowpass",
        input.to_str().unwrap(),
        dir.path().join("out.wav").to_str().unwrap(),
    ]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("No passband given"));
}

#[test]
fn invalid_steepness_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");
    write_test_wav(&input, 480);

    let out = run(&[
        "lowpass",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--passband",
        "2000",
        "--steepness",
        "1.2",
    ]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("steepness"), "{}", stderr(&out));
    assert!(!output.exists());
}

// ---------------------------------------------------------------------------
// `cutoff design`
// ---------------------------------------------------------------------------

#[test]
fn design_json_reports_fir_order() {
    let out = run(&["design", "--passband", "0.3", "--length", "1000", "--json"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let report: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(report["direction"], "lowpass");
    assert_eq!(report["family"], "FIR");
    assert_eq!(report["order"], 70);
    assert_eq!(report["length_limited"], false);
    assert!(report["diagnostic"].is_null());
    assert_eq!(report["measured"]["meets_attenuation"], true);
}

#[test]
fn design_json_reports_length_limit() {
    let out = run(&[
        "design",
        "--passband",
        "0.3",
        "--length",
        "10",
        "--json",
    ]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let report: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(report["family"], "IIR");
    assert_eq!(report["order"], 3);
    assert_eq!(report["length_limited"], true);
    assert_eq!(
        report["diagnostic"]["code"],
        "order-limited-by-signal-length"
    );
}

#[test]
fn design_text_in_hz() {
    let out = run(&[
        "design",
        "--direction",
        "highpass",
        "--passband",
        "120",
        "--sample-rate",
        "8000",
        "--length",
        "100000",
    ]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("highpass"));
    assert!(text.contains("102.0000 Hz"), "{text}");
    assert!(text.contains("Measured"));
}

#[test]
fn design_preset_requires_sample_rate() {
    let out = run(&["design", "--preset", "rumble", "--length", "48000"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("--sample-rate"), "{}", stderr(&out));
    assert!(!stdout(&out).contains("all-stop"));
}

#[test]
fn design_preset_in_hz() {
    let out = run(&[
        "design",
        "--preset",
        "rumble",
        "--sample-rate",
        "48000",
        "--length",
        "48000",
        "--json",
    ]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let report: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(report["direction"], "highpass");
    assert!((report["passband"].as_f64().unwrap() - 40.0).abs() < 1e-9);
    assert_eq!(report["sample_rate"], 48000.0);
    assert!(report["diagnostic"].is_null());
}

// ---------------------------------------------------------------------------
// `cutoff presets` / `cutoff info`
// ---------------------------------------------------------------------------

#[test]
fn presets_lists_factory_presets() {
    let out = run(&["presets", "list"]);
    assert!(out.status.success());
    let text = stdout(&out);
    for name in ["Rumble", "Subsonic", "Telephone", "Hiss", "Anti-alias"] {
        assert!(text.contains(name), "missing {name}");
    }
}

#[test]
fn presets_save_then_show() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("voice.toml");
    let path_str = path.to_str().unwrap();

    let out = run(&[
        "presets",
        "save",
        "Voice",
        "--direction",
        "highpass",
        "--passband",
        "100",
        "--steepness",
        "0.9",
        "--output",
        path_str,
    ]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(path.is_file());

    // Refuses to overwrite without --force
    let again = run(&[
        "presets",
        "save",
        "Voice",
        "-d",
        "highpass",
        "-p",
        "100",
        "--output",
        path_str,
    ]);
    assert!(!again.status.success());

    let show = run(&["presets", "show", path_str]);
    assert!(show.status.success());
    let text = stdout(&show);
    assert!(text.contains("Voice"));
    assert!(text.contains("Steepness:    0.9"));
}

#[test]
fn presets_show_unknown_fails() {
    let out = run(&["presets", "show", "no-such-preset"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("not found"));
}

#[test]
fn info_prints_header() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    write_test_wav(&input, 4800);

    let out = run(&["info", input.to_str().unwrap()]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Channels:    2"));
    assert!(text.contains("4800 frames"));
    assert!(text.contains("order < 2400"));
}
