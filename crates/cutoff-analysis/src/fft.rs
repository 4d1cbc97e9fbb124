//! FFT wrapper with windowing functions

use rustfft::{FftPlanner, num_complex::Complex};
use std::f64::consts::PI;
use std::sync::Arc;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Window {
    /// Rectangular (no windowing)
    Rectangular,
    /// Hann window (raised cosine)
    #[default]
    Hann,
    /// Hamming window
    Hamming,
    /// Blackman window
    Blackman,
}

impl Window {
    /// Apply window to a buffer
    pub fn apply(&self, buffer: &mut [f64]) {
        let n = buffer.len() as f64;
        let weight: fn(f64) -> f64 = match self {
            Window::Rectangular => return,
            Window::Hann => |x| 0.5 * (1.0 - x.cos()),
            Window::Hamming => |x| 0.54 - 0.46 * x.cos(),
            Window::Blackman => |x| 0.42 - 0.5 * x.cos() + 0.08 * (2.0 * x).cos(),
        };
        for (i, sample) in buffer.iter_mut().enumerate() {
            *sample *= weight(2.0 * PI * i as f64 / n);
        }
    }

    /// Get window coefficients
    pub fn coefficients(&self, size: usize) -> Vec<f64> {
        let mut coeffs = vec![1.0; size];
        self.apply(&mut coeffs);
        coeffs
    }

    /// Sum of squared coefficients, for power normalization.
    pub fn energy(&self, size: usize) -> f64 {
        self.coefficients(size).iter().map(|w| w * w).sum()
    }
}

/// Forward real FFT of a fixed size.
pub struct Fft {
    fft: Arc<dyn rustfft::Fft<f64>>,
    size: usize,
}

impl Fft {
    /// Plan a transform of `size` points.
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        Self {
            fft: planner.plan_fft_forward(size),
            size,
        }
    }

    /// Get FFT size
    pub fn size(&self) -> usize {
        self.size
    }

    /// Perform forward FFT on real input
    ///
    /// Input is zero-padded or truncated to the FFT size. Returns
    /// `size/2 + 1` bins from DC to Nyquist.
    pub fn forward(&self, input: &[f64]) -> Vec<Complex<f64>> {
        let mut buffer: Vec<Complex<f64>> = input
            .iter()
            .take(self.size)
            .map(|&x| Complex::new(x, 0.0))
            .collect();
        buffer.resize(self.size, Complex::new(0.0, 0.0));

        self.fft.process(&mut buffer);

        buffer.truncate(self.size / 2 + 1);
        buffer
    }
}

/// Normalized frequency (1.0 = Nyquist) of bin `k` in an `fft_size` transform.
pub fn bin_frequency(k: usize, fft_size: usize) -> f64 {
    2.0 * k as f64 / fft_size as f64
}

/// Compute magnitude spectrum in dB
pub fn magnitude_db(spectrum: &[Complex<f64>]) -> Vec<f64> {
    spectrum
        .iter()
        .map(|c| 20.0 * c.norm().max(1e-15).log10())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_hann() {
        let mut buffer = vec![1.0; 100];
        Window::Hann.apply(&mut buffer);

        assert!(buffer[0] < 0.01);
        assert!((buffer[50] - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_rectangular_is_identity() {
        assert_eq!(Window::Rectangular.coefficients(8), vec![1.0; 8]);
        assert_eq!(Window::Rectangular.energy(8), 8.0);
    }

    #[test]
    fn test_dc_detection() {
        let fft = Fft::new(256);
        let spectrum = fft.forward(&vec![1.0; 256]);

        assert_eq!(spectrum.len(), 129);
        assert!((spectrum[0].norm() - 256.0).abs() < 1e-9);
        let other: f64 = spectrum[1..].iter().map(|c| c.norm()).sum();
        assert!(other < 1e-6);
    }

    #[test]
    fn test_short_input_is_padded() {
        let fft = Fft::new(16);
        let spectrum = fft.forward(&[1.0]);
        // Unit impulse: flat spectrum
        for c in &spectrum {
            assert!((c.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_bin_frequency_edges() {
        assert_eq!(bin_frequency(0, 1024), 0.0);
        assert_eq!(bin_frequency(512, 1024), 1.0);
    }
}
