//! Integration tests for cutoff-analysis.
//!
//! Measures designs produced by cutoff-core against their own ripple and
//! attenuation targets, and checks band energy of filtered noise.

use cutoff_analysis::response::{DEFAULT_FFT_SIZE, FrequencyResponse, measure_design};
use cutoff_analysis::spectrum::{band_reduction_db, rms};
use cutoff_core::{
    Direction, FilterOptions, FilterSpec, ImpulseResponse, Precision, SampleRate, design, lowpass,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Deterministic uniform noise in [-1, 1).
fn noise(len: usize, seed: u64) -> Vec<f64> {
    let mut state = seed.wrapping_add(0x9E3779B97F4A7C15);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
        })
        .collect()
}

fn spec(direction: Direction, mode: ImpulseResponse, length: usize) -> FilterSpec {
    FilterSpec::new(direction, 0.3, SampleRate::Normalized, length).with_impulse_response(mode)
}

// ===========================================================================
// 1. Designs meet their targets
// ===========================================================================

#[test]
fn fir_lowpass_meets_targets() {
    let d = design(&spec(Direction::Lowpass, ImpulseResponse::Fir, 1000))
        .unwrap()
        .design;
    let m = measure_design(&d, DEFAULT_FFT_SIZE, 0.5);
    assert!(m.meets_attenuation, "{m:?}");
    assert!(m.passband_ripple_db < 0.1, "{m:?}");
}

#[test]
fn fir_highpass_meets_targets() {
    let d = design(&spec(Direction::Highpass, ImpulseResponse::Fir, 20_000))
        .unwrap()
        .design;
    let m = measure_design(&d, DEFAULT_FFT_SIZE, 0.5);
    assert!(m.meets_attenuation, "{m:?}");
    assert!(m.passband_ripple_db < 0.1, "{m:?}");
}

#[test]
fn elliptic_lowpass_meets_targets() {
    let d = design(&spec(Direction::Lowpass, ImpulseResponse::Iir, 100_000))
        .unwrap()
        .design;
    let m = measure_design(&d, DEFAULT_FFT_SIZE, 0.5);
    assert!(m.meets_attenuation, "{m:?}");
    assert!(m.passband_ripple_db < 0.12, "{m:?}");
}

#[test]
fn elliptic_highpass_meets_targets() {
    let d = design(&spec(Direction::Highpass, ImpulseResponse::Iir, 100_000))
        .unwrap()
        .design;
    let m = measure_design(&d, DEFAULT_FFT_SIZE, 0.5);
    assert!(m.meets_attenuation, "{m:?}");
    assert!(m.passband_ripple_db < 0.12, "{m:?}");
}

#[test]
fn single_precision_fir_still_meets_attenuation() {
    let s = spec(Direction::Lowpass, ImpulseResponse::Fir, 1000).with_precision(Precision::Single);
    let d = design(&s).unwrap().design;
    assert_eq!(d.precision, Precision::Single);
    assert!(measure_design(&d, DEFAULT_FFT_SIZE, 1.0).meets_attenuation);
}

// ===========================================================================
// 2. Degraded designs
// ===========================================================================

#[test]
fn length_limited_design_misses_attenuation() {
    let d = design(&spec(Direction::Lowpass, ImpulseResponse::Auto, 10))
        .unwrap()
        .design;
    assert!(d.is_length_limited());
    let m = measure_design(&d, DEFAULT_FFT_SIZE, 0.0);
    assert!(!m.meets_attenuation, "{m:?}");
    assert!(m.stopband_attenuation_db.is_some());
}

#[test]
fn trivial_design_has_no_stopband() {
    let d = design(&spec(Direction::Lowpass, ImpulseResponse::Auto, 3))
        .unwrap()
        .design;
    let m = measure_design(&d, 256, 0.0);
    assert_eq!(m.stopband_attenuation_db, None);
    assert!(!m.meets_attenuation);
    assert!(m.passband_ripple_db < 1e-9);
}

// ===========================================================================
// 3. Filtered signals
// ===========================================================================

#[test]
fn zero_phase_lowpass_removes_stopband_energy() {
    let x = noise(4096, 11);
    let out = lowpass(&x, 0.3, SampleRate::Normalized, &FilterOptions::default()).unwrap();
    assert!(out.design.is_fir());

    // Normalized units: sample rate 2 puts Nyquist at 1.0
    let stop = band_reduction_db(&x, &out.signal, 2.0, 0.45, 1.0);
    let pass = band_reduction_db(&x, &out.signal, 2.0, 0.0, 0.25);
    assert!(stop > 60.0, "stopband reduction {stop} dB");
    assert!(pass.abs() < 0.5, "passband change {pass} dB");
}

#[test]
fn zero_phase_response_is_squared() {
    let d = design(&spec(Direction::Lowpass, ImpulseResponse::Fir, 1000))
        .unwrap()
        .design;
    let single = FrequencyResponse::measure(&d.filter, 4096);
    let zp = single.zero_phase();
    let a = single.attenuation_db(0.405, 1.0).unwrap();
    let b = zp.attenuation_db(0.405, 1.0).unwrap();
    assert!((b - 2.0 * a).abs() < 1e-9);
}

#[test]
fn lowpass_reduces_noise_rms() {
    let x = noise(2048, 12);
    let out = lowpass(&x, 0.2, SampleRate::Normalized, &FilterOptions::default()).unwrap();
    // Uniform white noise keeps roughly the passband share of its power
    let ratio = rms(&out.signal) / rms(&x);
    assert!(ratio > 0.35 && ratio < 0.6, "rms ratio {ratio}");
}
