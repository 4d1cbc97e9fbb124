//! Caller input validation.
//!
//! Turns a passband, an optional sampling rate, [`FilterOptions`] and the
//! data into a [`FilterSpec`]. Everything downstream assumes a spec built
//! here and does not re-check ranges.

use thiserror::Error;

use crate::sample::Sample;
use crate::signal::Signal;
use crate::spec::{
    DEFAULT_STEEPNESS, DEFAULT_STOPBAND_ATTENUATION_DB, Direction, FilterSpec, FrequencySpec,
    ImpulseResponse, MAX_STEEPNESS, MIN_STEEPNESS, PASSBAND_RIPPLE_DB, Precision, SampleRate,
};

/// Rejected caller input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Passband edge is not a finite positive number
    #[error("passband frequency must be finite and positive, got {0}")]
    Passband(f64),

    /// Sampling rate is not a finite positive number
    #[error("sample rate must be finite and positive, got {0}")]
    SampleRate(f64),

    /// Steepness outside `[0.5, 1)`
    #[error("steepness must be in [0.5, 1), got {0}")]
    Steepness(f64),

    /// Attenuation not finite or not above the passband ripple
    #[error(
        "stopband attenuation must be finite and greater than the 0.1 dB passband ripple, \
         got {0}"
    )]
    StopbandAttenuation(f64),

    /// Sampling rate passed alongside a time series
    #[error("a sample rate cannot be given for a time series; it is implied by the sample times")]
    SampleRateWithTimeSeries,

    /// Matrix columns of different lengths
    #[error("column {column} has {found} samples, expected {expected}")]
    RaggedColumns {
        /// Offending column.
        column: usize,
        /// Length of the first column.
        expected: usize,
        /// Length of the offending column.
        found: usize,
    },

    /// Time series with fewer than two sample times
    #[error("a time series needs at least 2 sample times, got {0}")]
    TooFewTimes(usize),

    /// Sample times not strictly increasing (or not finite)
    #[error("sample times must be strictly increasing (at index {index})")]
    NonIncreasingTimes {
        /// First offending time index.
        index: usize,
    },

    /// Sample times with a varying step
    #[error("sample times must be uniformly spaced (at index {index})")]
    NonUniformTimes {
        /// First offending time index.
        index: usize,
    },

    /// Variable length differs from the time vector
    #[error("variable '{variable}' has {samples} samples but there are {times} sample times")]
    TimeLengthMismatch {
        /// Variable name.
        variable: String,
        /// Number of sample times.
        times: usize,
        /// Number of samples in the variable.
        samples: usize,
    },
}

/// Optional design settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterOptions {
    /// Transition steepness in `[0.5, 1)`.
    pub steepness: f64,
    /// Stopband attenuation in dB.
    pub stopband_attenuation_db: f64,
    /// Requested impulse response family.
    pub impulse_response: ImpulseResponse,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            steepness: DEFAULT_STEEPNESS,
            stopband_attenuation_db: DEFAULT_STOPBAND_ATTENUATION_DB,
            impulse_response: ImpulseResponse::Auto,
        }
    }
}

impl FilterOptions {
    /// Set the transition steepness.
    pub fn with_steepness(mut self, steepness: f64) -> Self {
        self.steepness = steepness;
        self
    }

    /// Set the stopband attenuation in dB.
    pub fn with_stopband_attenuation_db(mut self, attenuation_db: f64) -> Self {
        self.stopband_attenuation_db = attenuation_db;
        self
    }

    /// Set the impulse response family.
    pub fn with_impulse_response(mut self, mode: ImpulseResponse) -> Self {
        self.impulse_response = mode;
        self
    }

    /// Check option ranges.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_STEEPNESS..MAX_STEEPNESS).contains(&self.steepness) {
            return Err(ValidationError::Steepness(self.steepness));
        }
        let atten = self.stopband_attenuation_db;
        if !(atten.is_finite() && atten > PASSBAND_RIPPLE_DB) {
            return Err(ValidationError::StopbandAttenuation(atten));
        }
        Ok(())
    }
}

/// Resolve the sampling rate for `signal`.
///
/// Time series carry their own rate and reject an explicit one.
pub fn resolve_sample_rate<S: Signal>(
    signal: &S,
    sample_rate: SampleRate,
) -> Result<SampleRate, ValidationError> {
    match (signal.implied_sample_rate(), sample_rate) {
        (Some(_), SampleRate::Hz(_)) => Err(ValidationError::SampleRateWithTimeSeries),
        (Some(fs), SampleRate::Normalized) => check_rate(fs),
        (None, SampleRate::Hz(fs)) => check_rate(fs),
        (None, SampleRate::Normalized) => Ok(SampleRate::Normalized),
    }
}

fn check_rate(fs: f64) -> Result<SampleRate, ValidationError> {
    if fs.is_finite() && fs > 0.0 {
        Ok(SampleRate::Hz(fs))
    } else {
        Err(ValidationError::SampleRate(fs))
    }
}

/// Build a validated spec for filtering `signal`.
///
/// The passband edge is in Hz when a sampling rate is given or implied,
/// normalized (1.0 = Nyquist) otherwise. Precision follows the signal's
/// sample type.
pub fn build_spec<S: Signal>(
    direction: Direction,
    signal: &S,
    passband: f64,
    sample_rate: SampleRate,
    options: &FilterOptions,
) -> Result<FilterSpec, ValidationError> {
    let sample_rate = resolve_sample_rate(signal, sample_rate)?;
    let precision = if S::Sample::SINGLE_PRECISION {
        Precision::Single
    } else {
        Precision::Double
    };
    build_spec_for_length(
        direction,
        signal.signal_length(),
        passband,
        sample_rate,
        precision,
        options,
    )
}

/// Build a validated spec for a signal of `signal_length` samples without
/// the data at hand.
pub fn build_spec_for_length(
    direction: Direction,
    signal_length: usize,
    passband: f64,
    sample_rate: SampleRate,
    precision: Precision,
    options: &FilterOptions,
) -> Result<FilterSpec, ValidationError> {
    if !(passband.is_finite() && passband > 0.0) {
        return Err(ValidationError::Passband(passband));
    }
    if let SampleRate::Hz(fs) = sample_rate {
        check_rate(fs)?;
    }
    options.validate()?;

    let frequency = FrequencySpec::new(sample_rate);
    Ok(FilterSpec {
        direction,
        passband_normalized: frequency.normalize(passband),
        frequency,
        signal_length,
        steepness: options.steepness,
        passband_ripple_db: PASSBAND_RIPPLE_DB,
        stopband_attenuation_db: options.stopband_attenuation_db,
        impulse_response: options.impulse_response,
        precision,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::TimeSeries;

    fn noise(len: usize) -> Vec<f64> {
        vec![0.0; len]
    }

    #[test]
    fn normalized_spec() {
        let spec = build_spec(
            Direction::Lowpass,
            &noise(100),
            0.3,
            SampleRate::Normalized,
            &FilterOptions::default(),
        )
        .unwrap();
        assert_eq!(spec.passband_normalized, 0.3);
        assert_eq!(spec.signal_length, 100);
        assert!(spec.is_normalized_frequency());
        assert!(!spec.is_single_precision());
    }

    #[test]
    fn hz_spec_is_normalized_by_nyquist() {
        let spec = build_spec(
            Direction::Highpass,
            &vec![0.0_f32; 64],
            12000.0,
            SampleRate::Hz(48000.0),
            &FilterOptions::default(),
        )
        .unwrap();
        assert_eq!(spec.passband_normalized, 0.5);
        assert!(spec.is_single_precision());
        assert_eq!(spec.passband(), 12000.0);
    }

    #[test]
    fn passband_at_or_above_nyquist_is_accepted() {
        let spec = build_spec(
            Direction::Lowpass,
            &noise(10),
            1.5,
            SampleRate::Normalized,
            &FilterOptions::default(),
        )
        .unwrap();
        assert_eq!(spec.passband_normalized, 1.5);
    }

    #[test]
    fn bad_scalars_rejected() {
        let opts = FilterOptions::default();
        let sig = noise(10);
        for wp in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                build_spec(Direction::Lowpass, &sig, wp, SampleRate::Normalized, &opts),
                Err(ValidationError::Passband(_))
            ));
        }
        assert!(matches!(
            build_spec(Direction::Lowpass, &sig, 100.0, SampleRate::Hz(0.0), &opts),
            Err(ValidationError::SampleRate(_))
        ));
        assert!(matches!(
            build_spec_for_length(
                Direction::Lowpass,
                10,
                100.0,
                SampleRate::Hz(f64::NAN),
                Precision::Double,
                &opts
            ),
            Err(ValidationError::SampleRate(_))
        ));
    }

    #[test]
    fn steepness_range_is_half_open() {
        assert!(FilterOptions::default().with_steepness(0.5).validate().is_ok());
        assert!(FilterOptions::default().with_steepness(0.999).validate().is_ok());
        assert_eq!(
            FilterOptions::default().with_steepness(1.0).validate(),
            Err(ValidationError::Steepness(1.0))
        );
        assert_eq!(
            FilterOptions::default().with_steepness(0.49).validate(),
            Err(ValidationError::Steepness(0.49))
        );
    }

    #[test]
    fn attenuation_must_exceed_ripple() {
        let opts = FilterOptions::default().with_stopband_attenuation_db(0.05);
        assert_eq!(opts.validate(), Err(ValidationError::StopbandAttenuation(0.05)));
        let opts = FilterOptions::default().with_stopband_attenuation_db(f64::NAN);
        assert!(opts.validate().is_err());
    }

    #[test]
    fn time_series_rate_is_implied() {
        let times: Vec<f64> = (0..20).map(|i| f64::from(i) / 100.0).collect();
        let ts = TimeSeries::from_times(times, vec![("a".into(), vec![0.0_f64; 20])]).unwrap();

        let spec = build_spec(
            Direction::Lowpass,
            &ts,
            10.0,
            SampleRate::Normalized,
            &FilterOptions::default(),
        )
        .unwrap();
        assert!((spec.passband_normalized - 0.2).abs() < 1e-9);

        assert_eq!(
            build_spec(
                Direction::Lowpass,
                &ts,
                10.0,
                SampleRate::Hz(100.0),
                &FilterOptions::default()
            ),
            Err(ValidationError::SampleRateWithTimeSeries)
        );
    }
}
