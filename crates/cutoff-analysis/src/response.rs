//! Sampled frequency response of synthesized filters.
//!
//! The response is taken from a zero-padded FFT of the filter's impulse
//! response, so it measures the coefficients that were actually produced
//! (including single-precision rounding) rather than the design targets.

use cutoff_core::{Direction, Filter, FilterDesign};

use crate::fft::{Fft, bin_frequency, magnitude_db};

/// Default FFT size for response measurements.
pub const DEFAULT_FFT_SIZE: usize = 8192;

/// Magnitude response sampled on an FFT grid.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyResponse {
    /// Normalized bin frequencies, 0 to 1 (Nyquist) inclusive.
    pub frequencies: Vec<f64>,
    /// Single-pass magnitude in dB.
    pub magnitude_db: Vec<f64>,
}

impl FrequencyResponse {
    /// Measure `filter` with an `fft_size`-point transform.
    ///
    /// IIR impulse responses are truncated at `fft_size` samples.
    pub fn measure(filter: &Filter, fft_size: usize) -> Self {
        let fft = Fft::new(fft_size);
        let spectrum = fft.forward(&filter.impulse_response(fft_size));
        let frequencies = (0..spectrum.len())
            .map(|k| bin_frequency(k, fft_size))
            .collect();

        Self {
            frequencies,
            magnitude_db: magnitude_db(&spectrum),
        }
    }

    /// Response of the forward-backward (zero-phase) application, which
    /// squares the magnitude.
    pub fn zero_phase(&self) -> Self {
        Self {
            frequencies: self.frequencies.clone(),
            magnitude_db: self.magnitude_db.iter().map(|db| 2.0 * db).collect(),
        }
    }

    /// Magnitudes of bins with normalized frequency in `[low, high]`.
    pub fn band(&self, low: f64, high: f64) -> impl Iterator<Item = f64> + '_ {
        self.frequencies
            .iter()
            .zip(&self.magnitude_db)
            .filter(move |(w, _)| **w >= low && **w <= high)
            .map(|(_, db)| *db)
    }

    /// Peak-to-peak variation in dB over `[low, high]`.
    pub fn ripple_db(&self, low: f64, high: f64) -> Option<f64> {
        let (min, max) = self.band(low, high).fold(None, |acc, db| match acc {
            None => Some((db, db)),
            Some((lo, hi)) => Some((f64::min(lo, db), f64::max(hi, db))),
        })?;
        Some(max - min)
    }

    /// Smallest attenuation (negated peak gain) in dB over `[low, high]`.
    pub fn attenuation_db(&self, low: f64, high: f64) -> Option<f64> {
        self.band(low, high).reduce(f64::max).map(|peak| -peak)
    }

    /// First normalized frequency where the response crosses `level_db`
    /// relative to its value at the first bin (lowpass) or last bin
    /// (highpass).
    pub fn crossing(&self, direction: Direction, level_db: f64) -> Option<f64> {
        let pairs: Vec<(f64, f64)> = self
            .frequencies
            .iter()
            .copied()
            .zip(self.magnitude_db.iter().copied())
            .collect();
        let ordered: Box<dyn Iterator<Item = &(f64, f64)>> = match direction {
            Direction::Lowpass => Box::new(pairs.iter()),
            Direction::Highpass => Box::new(pairs.iter().rev()),
        };
        let mut ordered = ordered.peekable();
        let reference = ordered.peek()?.1;
        ordered
            .find(|(_, db)| *db - reference <= level_db)
            .map(|(w, _)| *w)
    }
}

/// Measured performance of a design against its own targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignMeasurement {
    /// Peak-to-peak passband variation in dB (single pass).
    pub passband_ripple_db: f64,
    /// Worst-case stopband attenuation in dB (single pass); `None` when
    /// the design has no stopband (trivial filters).
    pub stopband_attenuation_db: Option<f64>,
    /// `true` when the measured attenuation reaches the design target
    /// within `tolerance_db`.
    pub meets_attenuation: bool,
}

/// Measure a finished design.
///
/// `tolerance_db` absorbs FFT-grid and truncation effects when checking
/// [`DesignMeasurement::meets_attenuation`].
pub fn measure_design(
    design: &FilterDesign,
    fft_size: usize,
    tolerance_db: f64,
) -> DesignMeasurement {
    let response = FrequencyResponse::measure(&design.filter, fft_size);
    let wp = design.passband_normalized;

    let (pass_lo, pass_hi) = match design.direction {
        Direction::Lowpass => (0.0, wp),
        Direction::Highpass => (wp, 1.0),
    };
    let passband_ripple_db = response.ripple_db(pass_lo, pass_hi).unwrap_or(0.0);

    let stopband_attenuation_db = design.stopband_normalized.and_then(|ws| {
        let (lo, hi) = match design.direction {
            Direction::Lowpass => (ws, 1.0),
            Direction::Highpass => (0.0, ws),
        };
        response.attenuation_db(lo, hi)
    });

    let meets_attenuation = stopband_attenuation_db
        .is_some_and(|a| a + tolerance_db >= design.stopband_attenuation_db);

    DesignMeasurement {
        passband_ripple_db,
        stopband_attenuation_db,
        meets_attenuation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_pass_is_flat() {
        let r = FrequencyResponse::measure(&Filter::all_pass(), 256);
        assert_eq!(r.frequencies.len(), 129);
        assert!(r.magnitude_db.iter().all(|db| db.abs() < 1e-12));
        assert!(r.ripple_db(0.0, 1.0).unwrap() < 1e-12);
    }

    #[test]
    fn all_stop_is_at_floor() {
        let r = FrequencyResponse::measure(&Filter::all_stop(), 64);
        assert!(r.attenuation_db(0.0, 1.0).unwrap() > 200.0);
    }

    #[test]
    fn empty_band_has_no_measurement() {
        let r = FrequencyResponse::measure(&Filter::all_pass(), 8);
        assert_eq!(r.ripple_db(0.3, 0.4), None);
        assert_eq!(r.attenuation_db(0.3, 0.4), None);
    }

    #[test]
    fn zero_phase_doubles_db() {
        let f = Filter::Fir {
            taps: vec![0.25, 0.5, 0.25],
        };
        let r = FrequencyResponse::measure(&f, 64);
        let zp = r.zero_phase();
        for (a, b) in r.magnitude_db.iter().zip(&zp.magnitude_db) {
            assert!((2.0 * a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn crossing_of_smoother() {
        // |H(w)| = cos^2(pi w / 2), -6.02 dB at w = 0.5
        let f = Filter::Fir {
            taps: vec![0.25, 0.5, 0.25],
        };
        let r = FrequencyResponse::measure(&f, 1024);
        let w = r.crossing(Direction::Lowpass, -6.0206).unwrap();
        assert!((w - 0.5).abs() < 0.01, "crossing at {w}");
    }
}
