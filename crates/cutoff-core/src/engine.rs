//! Public filtering entry points.

use crate::design::{Designed, FilterDesign, design};
use crate::diagnostic::Diagnostic;
use crate::error::Result;
use crate::signal::Signal;
use crate::spec::{Direction, SampleRate};
use crate::validate::{FilterOptions, build_spec};
use crate::zero_phase;

/// Filtered data with the design that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Filtered<S> {
    /// Output, same shape and precision as the input.
    pub signal: S,
    /// Design applied to every column.
    pub design: FilterDesign,
    /// Set when the request was degraded.
    pub diagnostic: Option<Diagnostic>,
}

/// Design a filter for `signal` and apply it with zero phase.
///
/// `passband` is in Hz when `sample_rate` is [`SampleRate::Hz`] or the
/// signal carries its own rate, otherwise normalized (1.0 = Nyquist).
/// Either the whole signal is filtered or an error is returned.
pub fn filter_signal<S: Signal>(
    direction: Direction,
    signal: &S,
    passband: f64,
    sample_rate: SampleRate,
    options: &FilterOptions,
) -> Result<Filtered<S>> {
    let spec = build_spec(direction, signal, passband, sample_rate, options)?;
    let Designed { design, diagnostic } = design(&spec)?;

    let filter = &design.filter;
    let output = signal.try_map_columns(|column| zero_phase::apply(filter, column))?;

    Ok(Filtered {
        signal: output,
        design,
        diagnostic,
    })
}

/// Zero-phase lowpass.
///
/// # Example
///
/// ```rust
/// use cutoff_core::{FilterOptions, SampleRate, lowpass};
///
/// let x: Vec<f64> = (0..1000).map(|n| (0.05 * n as f64).sin()).collect();
/// let out = lowpass(&x, 0.3, SampleRate::Normalized, &FilterOptions::default()).unwrap();
/// assert_eq!(out.signal.len(), x.len());
/// assert!(out.design.is_fir());
/// ```
pub fn lowpass<S: Signal>(
    signal: &S,
    passband: f64,
    sample_rate: SampleRate,
    options: &FilterOptions,
) -> Result<Filtered<S>> {
    filter_signal(Direction::Lowpass, signal, passband, sample_rate, options)
}

/// Zero-phase highpass.
pub fn highpass<S: Signal>(
    signal: &S,
    passband: f64,
    sample_rate: SampleRate,
    options: &FilterOptions,
) -> Result<Filtered<S>> {
    filter_signal(Direction::Highpass, signal, passband, sample_rate, options)
}
