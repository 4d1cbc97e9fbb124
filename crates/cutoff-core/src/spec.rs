//! Filter specification record and frequency bookkeeping.
//!
//! A [`FilterSpec`] is produced once per call by [`crate::validate`] and is
//! read-only afterwards. All design arithmetic works on normalized
//! frequencies (1.0 = Nyquist); [`FrequencySpec`] converts to and from Hz
//! for reporting.

use core::fmt;
use core::str::FromStr;

/// Allowed passband ripple in dB.
pub const PASSBAND_RIPPLE_DB: f64 = 0.1;

/// Default stopband attenuation in dB.
pub const DEFAULT_STOPBAND_ATTENUATION_DB: f64 = 60.0;

/// Default transition steepness.
pub const DEFAULT_STEEPNESS: f64 = 0.85;

/// Smallest accepted steepness (inclusive).
pub const MIN_STEEPNESS: f64 = 0.5;

/// Largest accepted steepness (exclusive).
pub const MAX_STEEPNESS: f64 = 1.0;

/// Which side of the passband edge the stopband lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Pass frequencies below the passband edge.
    Lowpass,
    /// Pass frequencies above the passband edge.
    Highpass,
}

impl Direction {
    /// Lowercase name used in presets and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Lowpass => "lowpass",
            Direction::Highpass => "highpass",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lowpass" | "lp" => Ok(Direction::Lowpass),
            "highpass" | "hp" => Ok(Direction::Highpass),
            other => Err(format!("unknown filter direction '{other}'")),
        }
    }
}

/// Impulse response family requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImpulseResponse {
    /// Pick FIR when the signal is long enough, IIR otherwise.
    #[default]
    Auto,
    /// Always design an FIR filter.
    Fir,
    /// Always design an IIR (elliptic) filter.
    Iir,
}

impl ImpulseResponse {
    /// Lowercase name used in presets and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpulseResponse::Auto => "auto",
            ImpulseResponse::Fir => "fir",
            ImpulseResponse::Iir => "iir",
        }
    }
}

impl fmt::Display for ImpulseResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImpulseResponse {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ImpulseResponse::Auto),
            "fir" => Ok(ImpulseResponse::Fir),
            "iir" => Ok(ImpulseResponse::Iir),
            other => Err(format!(
                "unknown impulse response '{other}' (expected auto, fir or iir)"
            )),
        }
    }
}

/// Arithmetic precision of the designed filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Precision {
    /// 64-bit coefficients.
    #[default]
    Double,
    /// Coefficients rounded to 32-bit floats.
    Single,
}

/// Sample rate of the data, or the normalized-frequency sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SampleRate {
    /// Frequencies are given on a 0..1 scale where 1 is Nyquist.
    #[default]
    Normalized,
    /// Frequencies are given in Hz at this sampling rate.
    Hz(f64),
}

/// Normalized/denormalized frequency bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrequencySpec {
    /// Sampling rate the frequencies refer to.
    pub sample_rate: SampleRate,
}

impl FrequencySpec {
    /// Bookkeeping for the given sampling rate.
    pub fn new(sample_rate: SampleRate) -> Self {
        Self { sample_rate }
    }

    /// `true` when frequencies are already normalized.
    pub fn is_normalized(&self) -> bool {
        matches!(self.sample_rate, SampleRate::Normalized)
    }

    /// Nyquist frequency in caller units (1.0 when normalized).
    pub fn nyquist(&self) -> f64 {
        match self.sample_rate {
            SampleRate::Normalized => 1.0,
            SampleRate::Hz(fs) => fs / 2.0,
        }
    }

    /// Full sampling bandwidth in caller units (2.0 when normalized).
    pub fn full_band(&self) -> f64 {
        2.0 * self.nyquist()
    }

    /// Caller units to normalized (1.0 = Nyquist).
    pub fn normalize(&self, frequency: f64) -> f64 {
        frequency / self.nyquist()
    }

    /// Normalized to caller units.
    pub fn denormalize(&self, normalized: f64) -> f64 {
        normalized * self.nyquist()
    }
}

/// Validated filter request.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    /// Lowpass or highpass.
    pub direction: Direction,
    /// Passband edge, normalized. May be `>= 1.0` (degenerate request).
    pub passband_normalized: f64,
    /// Units bookkeeping.
    pub frequency: FrequencySpec,
    /// Number of samples per column.
    pub signal_length: usize,
    /// Transition steepness in `[0.5, 1)`.
    pub steepness: f64,
    /// Passband ripple in dB.
    pub passband_ripple_db: f64,
    /// Stopband attenuation in dB.
    pub stopband_attenuation_db: f64,
    /// Requested impulse response family.
    pub impulse_response: ImpulseResponse,
    /// Precision of the caller's data.
    pub precision: Precision,
}

impl FilterSpec {
    /// A spec with default steepness, attenuation and auto family.
    ///
    /// Performs no range checks; use [`crate::validate::build_spec`] for
    /// caller-supplied values.
    pub fn new(
        direction: Direction,
        passband_normalized: f64,
        sample_rate: SampleRate,
        signal_length: usize,
    ) -> Self {
        Self {
            direction,
            passband_normalized,
            frequency: FrequencySpec::new(sample_rate),
            signal_length,
            steepness: DEFAULT_STEEPNESS,
            passband_ripple_db: PASSBAND_RIPPLE_DB,
            stopband_attenuation_db: DEFAULT_STOPBAND_ATTENUATION_DB,
            impulse_response: ImpulseResponse::Auto,
            precision: Precision::Double,
        }
    }

    /// Override steepness.
    pub fn with_steepness(mut self, steepness: f64) -> Self {
        self.steepness = steepness;
        self
    }

    /// Override stopband attenuation.
    pub fn with_stopband_attenuation_db(mut self, attenuation_db: f64) -> Self {
        self.stopband_attenuation_db = attenuation_db;
        self
    }

    /// Override the impulse response family.
    pub fn with_impulse_response(mut self, mode: ImpulseResponse) -> Self {
        self.impulse_response = mode;
        self
    }

    /// Override precision.
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Fraction of the available band given to the transition.
    pub fn transition_fraction(&self) -> f64 {
        crate::transition::transition_fraction(self.steepness)
    }

    /// Passband edge in caller units.
    pub fn passband(&self) -> f64 {
        self.frequency.denormalize(self.passband_normalized)
    }

    /// `true` when the data is single precision.
    pub fn is_single_precision(&self) -> bool {
        self.precision == Precision::Single
    }

    /// `true` when frequencies are normalized rather than in Hz.
    pub fn is_normalized_frequency(&self) -> bool {
        self.frequency.is_normalized()
    }
}
