//! Stopband edge placement.
//!
//! The transition band takes a steepness-controlled fraction of the band on
//! the stopband side of the passband edge:
//!
//! ```text
//! lowpass:   ws = wp + t * (1 - wp)
//! highpass:  ws = wp - t * wp
//! ```
//!
//! where `t = 1 - steepness`, so steepness approaching 1 narrows the
//! transition toward zero width.

use crate::spec::Direction;

/// Transition fraction for a steepness value.
#[inline]
pub fn transition_fraction(steepness: f64) -> f64 {
    1.0 - steepness
}

/// Normalized stopband edge for a normalized passband edge in `(0, 1)`.
///
/// # Example
///
/// ```rust
/// use cutoff_core::{Direction, transition::stopband_edge};
///
/// let ws = stopband_edge(0.4, 0.5, Direction::Lowpass);
/// assert!((ws - 0.7).abs() < 1e-12);
///
/// let ws = stopband_edge(0.4, 0.5, Direction::Highpass);
/// assert!((ws - 0.2).abs() < 1e-12);
/// ```
#[inline]
pub fn stopband_edge(passband: f64, fraction: f64, direction: Direction) -> f64 {
    match direction {
        Direction::Lowpass => passband + fraction * (1.0 - passband),
        Direction::Highpass => passband - fraction * passband,
    }
}
