//! Spectral energy of signals

use cutoff_core::Sample;

use crate::fft::{Fft, Window};

/// Compute power spectrum of a signal, one bin per FFT frequency from DC
/// to Nyquist.
///
/// The FFT size is the next power of two at or above the signal length.
/// Power is normalized by the window energy so a full-band white signal
/// has the same total regardless of window choice.
pub fn power_spectrum<T: Sample>(signal: &[T], window: Window) -> Vec<f64> {
    if signal.is_empty() {
        return Vec::new();
    }
    let mut windowed: Vec<f64> = signal.iter().map(|x| x.to_f64()).collect();
    window.apply(&mut windowed);
    let norm = window.energy(signal.len());

    let fft = Fft::new(signal.len().next_power_of_two());
    fft.forward(&windowed)
        .iter()
        .map(|c| c.norm_sqr() / norm)
        .collect()
}

/// Energy of `signal` between `low_hz` and `high_hz` inclusive.
///
/// Pass `sample_rate = 2.0` to give the band in normalized units.
pub fn band_energy<T: Sample>(
    signal: &[T],
    sample_rate: f64,
    low_hz: f64,
    high_hz: f64,
    window: Window,
) -> f64 {
    let power = power_spectrum(signal, window);
    if power.is_empty() {
        return 0.0;
    }
    let fft_size = (power.len() - 1) * 2;
    let bin_width = sample_rate / fft_size.max(1) as f64;

    power
        .iter()
        .enumerate()
        .filter(|(k, _)| {
            let f = *k as f64 * bin_width;
            f >= low_hz && f <= high_hz
        })
        .map(|(_, p)| p)
        .sum()
}

/// Reduction in dB of the energy in a band between `before` and `after`.
///
/// Positive means the band lost energy.
pub fn band_reduction_db<T: Sample>(
    before: &[T],
    after: &[T],
    sample_rate: f64,
    low_hz: f64,
    high_hz: f64,
) -> f64 {
    let e_before = band_energy(before, sample_rate, low_hz, high_hz, Window::Hann);
    let e_after = band_energy(after, sample_rate, low_hz, high_hz, Window::Hann);
    10.0 * (e_before.max(1e-300) / e_after.max(1e-300)).log10()
}

/// RMS level of a signal; zero for empty input.
pub fn rms<T: Sample>(signal: &[T]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    let sum: f64 = signal.iter().map(|x| x.to_f64() * x.to_f64()).sum();
    (sum / signal.len() as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn tone(freq: f64, fs: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * PI * freq * i as f64 / fs).sin())
            .collect()
    }

    #[test]
    fn tone_energy_lands_in_its_band() {
        let x = tone(1000.0, 8000.0, 4096);
        let inside = band_energy(&x, 8000.0, 900.0, 1100.0, Window::Hann);
        let outside = band_energy(&x, 8000.0, 2000.0, 4000.0, Window::Hann);
        assert!(inside > 1e6 * outside, "inside {inside} outside {outside}");
    }

    #[test]
    fn empty_signal_has_no_energy() {
        let x: Vec<f32> = Vec::new();
        assert!(power_spectrum(&x, Window::Hann).is_empty());
        assert_eq!(band_energy(&x, 2.0, 0.0, 1.0, Window::Hann), 0.0);
        assert_eq!(rms(&x), 0.0);
    }

    #[test]
    fn reduction_is_zero_for_identical_signals() {
        let x = tone(50.0, 1000.0, 1000);
        assert!(band_reduction_db(&x, &x, 1000.0, 0.0, 500.0).abs() < 1e-9);
    }

    #[test]
    fn rms_of_unit_sine() {
        let x = tone(10.0, 1000.0, 1000);
        assert!((rms(&x) - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-9);
    }
}
