//! Cutoff Core - minimum-order lowpass/highpass design and zero-phase filtering
//!
//! Given a passband edge, a transition steepness, a stopband attenuation
//! target and the data to filter, this crate decides where the stopband
//! edge falls, whether an FIR or an elliptic IIR filter fits the signal,
//! which order meets the target, and how to degrade when the request cannot
//! be met. It then applies the filter with zero net phase shift.
//!
//! # Pipeline
//!
//! - [`validate`] - caller input to [`FilterSpec`]
//! - [`edge_case`] - too-short signals and edges at Nyquist become trivial filters
//! - [`transition`] - stopband edge from passband edge and steepness
//! - [`order`] - Kaiser FIR and elliptic IIR minimum-order estimates
//! - [`select`] - FIR versus IIR policy
//! - [`design`] - orchestration, IIR order clamping, [`FilterDesign`]
//! - [`synthesis`] - Kaiser-window FIR ([`fir`]) and elliptic IIR ([`iir`]) coefficients
//! - [`zero_phase`] - delay-compensated FIR and forward-backward IIR filtering
//!
//! # Data shapes
//!
//! Anything implementing [`Signal`]: `Vec<f32>`/`Vec<f64>`, [`SampleMatrix`]
//! (filtered per column) and [`TimeSeries`] (filtered per variable, sample
//! rate implied by the time step). Output keeps the input's shape and
//! precision.
//!
//! # Diagnostics
//!
//! Degraded requests are not errors. They come back as a [`Diagnostic`]
//! next to the design so callers can log, ignore, or escalate them. With
//! the `tracing` feature enabled, design decisions are also logged.
//!
//! # Example
//!
//! ```rust
//! use cutoff_core::{FilterOptions, ImpulseResponse, SampleRate, highpass};
//!
//! let x: Vec<f32> = (0..48_000).map(|n| (n as f32 * 0.01).sin()).collect();
//! let options = FilterOptions::default()
//!     .with_steepness(0.9)
//!     .with_impulse_response(ImpulseResponse::Iir);
//!
//! let out = highpass(&x, 1000.0, SampleRate::Hz(48_000.0), &options).unwrap();
//! assert_eq!(out.signal.len(), x.len());
//! assert!(!out.design.is_fir());
//! ```
//!
//! # Features
//!
//! - `tracing` - log design decisions and diagnostics through `tracing`
//! - `parallel` - filter matrix and time-series columns on the rayon pool

pub mod design;
pub mod diagnostic;
pub mod edge_case;
pub mod engine;
pub mod error;
pub mod filter;
pub mod fir;
pub mod iir;
pub mod order;
pub mod sample;
pub mod select;
pub mod signal;
pub mod spec;
pub mod special;
pub mod synthesis;
pub mod transition;
pub mod validate;
pub mod zero_phase;

pub use design::{
    DesignPlan, Designed, FilterDesign, HIGHPASS_MIN_CLAMPED_ORDER, IIR_LENGTH_FACTOR,
    LOWPASS_MIN_CLAMPED_ORDER, clamp_iir_order, design, plan,
};
pub use diagnostic::{Diagnostic, DiagnosticCode};
pub use edge_case::{EdgeCase, MAX_UNFILTERABLE_LENGTH, TrivialFilter};
pub use engine::{Filtered, filter_signal, highpass, lowpass};
pub use error::{Error, Result};
pub use filter::{Filter, Section};
pub use sample::Sample;
pub use select::{AUTO_FIR_LENGTH_FACTOR, FilterFamily};
pub use signal::{SampleMatrix, Signal, TimeSeries};
pub use spec::{
    DEFAULT_STEEPNESS, DEFAULT_STOPBAND_ATTENUATION_DB, Direction, FilterSpec, FrequencySpec,
    ImpulseResponse, MAX_STEEPNESS, MIN_STEEPNESS, PASSBAND_RIPPLE_DB, Precision, SampleRate,
};
pub use synthesis::SynthesisParams;
pub use validate::{FilterOptions, ValidationError};
