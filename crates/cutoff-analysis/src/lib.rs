//! Cutoff Analysis - spectral measurements of filter designs
//!
//! - [`fft`] - FFT wrapper with windowing functions
//! - [`response`] - sampled frequency response of a [`Filter`](cutoff_core::Filter),
//!   passband ripple and stopband attenuation of a [`FilterDesign`](cutoff_core::FilterDesign)
//! - [`spectrum`] - band energy of signals before and after filtering
//!
//! ## Example
//!
//! ```rust
//! use cutoff_analysis::response::{DEFAULT_FFT_SIZE, measure_design};
//! use cutoff_core::{Direction, FilterSpec, SampleRate, design};
//!
//! let spec = FilterSpec::new(Direction::Lowpass, 0.3, SampleRate::Normalized, 1000);
//! let designed = design(&spec).unwrap();
//! let m = measure_design(&designed.design, DEFAULT_FFT_SIZE, 0.5);
//! assert!(m.meets_attenuation);
//! ```

pub mod fft;
pub mod response;
pub mod spectrum;

pub use fft::{Fft, Window};
pub use response::{DesignMeasurement, FrequencyResponse, measure_design};
pub use spectrum::{band_energy, band_reduction_db, power_spectrum, rms};
