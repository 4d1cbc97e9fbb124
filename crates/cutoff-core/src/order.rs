//! Minimum-order estimation for FIR (Kaiser window) and IIR (elliptic) designs.
//!
//! # FIR
//!
//! Kaiser's empirical formula. With `δ = min(δp, δs)` and `A = -20 log10 δ`,
//!
//! ```text
//! N = ceil((A - 7.95) / (2.285 · 2π · Δf))     A > 21
//! N = ceil(5.79 / (2π · Δf))                  A <= 21
//! ```
//!
//! where `Δf` is the transition width as a fraction of the full sampling
//! bandwidth. The estimate can be off by one in either direction; it is
//! rounded up to an even order so the filter has an integer group delay.
//!
//! # IIR
//!
//! Edges are prewarped to the analog prototype (`tan(πf/2)` for lowpass,
//! `cot(πf/2)` for highpass) and the elliptic degree equation is solved for
//! the smallest integer order:
//!
//! ```text
//! N >= K(k) K'(k1) / (K'(k) K(k1))
//! k  = Ωp / Ωs
//! k1 = sqrt((10^(Ap/10) - 1) / (10^(As/10) - 1))
//! ```
//!
//! Reference: J. F. Kaiser, "Nonrecursive digital filter design using the
//! I0-sinh window function", Proc. IEEE ISCAS, 1974; A. Antoniou, *Digital
//! Signal Processing*, McGraw-Hill, 2006, Section 10.6.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::special::{ellipk, ellipk_complement};
use crate::spec::Direction;

/// Ceiling on the Kaiser estimate. Even, and exact as an `f64`.
///
/// Vanishing transition widths push the closed-form estimate past `usize`.
pub const MAX_FIR_ORDER: usize = 1 << (usize::BITS - 2);

/// Passband ripple in dB to a linear peak deviation.
pub fn passband_deviation(ripple_db: f64) -> f64 {
    let g = 10f64.powf(ripple_db / 20.0);
    (g - 1.0) / (g + 1.0)
}

/// Stopband attenuation in dB to a linear deviation.
pub fn stopband_deviation(attenuation_db: f64) -> f64 {
    10f64.powf(-attenuation_db / 20.0)
}

/// Kaiser window shape parameter for an attenuation in dB.
pub fn kaiser_beta(attenuation_db: f64) -> f64 {
    let a = attenuation_db;
    if a > 50.0 {
        0.1102 * (a - 8.7)
    } else if a >= 21.0 {
        0.5842 * (a - 21.0).powf(0.4) + 0.07886 * (a - 21.0)
    } else {
        0.0
    }
}

/// Result of the Kaiser order estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirEstimate {
    /// Even filter order (taps - 1).
    pub order: usize,
    /// Kaiser window shape parameter.
    pub beta: f64,
    /// Windowed-sinc cutoff, normalized (midpoint of the transition band).
    pub cutoff: f64,
}

/// Kaiser minimum-order estimate.
///
/// # Arguments
///
/// * `passband`, `stopband` - Band edges in any common unit
/// * `passband_deviation`, `stopband_deviation` - Linear deviations
/// * `full_band` - Sampling rate in the same unit as the edges (2.0 for
///   normalized edges)
pub fn estimate_fir_order(
    passband: f64,
    stopband: f64,
    passband_deviation: f64,
    stopband_deviation: f64,
    full_band: f64,
) -> FirEstimate {
    let delta = passband_deviation.min(stopband_deviation);
    let attenuation = -20.0 * delta.log10();
    let width = (stopband - passband).abs() / full_band;

    let raw = if attenuation > 21.0 {
        (attenuation - 7.95) / (2.285 * 2.0 * PI * width)
    } else {
        5.79 / (2.0 * PI * width)
    };
    // NaN and infinite estimates (zero width) land on the ceiling too
    let order = if raw.is_finite() {
        raw.ceil().clamp(0.0, MAX_FIR_ORDER as f64) as usize
    } else {
        MAX_FIR_ORDER
    };

    FirEstimate {
        order: order + order % 2,
        beta: kaiser_beta(attenuation),
        cutoff: (passband + stopband) / full_band,
    }
}

/// Map a normalized digital frequency to the lowpass analog prototype axis.
pub fn prewarp(normalized: f64, direction: Direction) -> f64 {
    let t = (FRAC_PI_2 * normalized).tan();
    match direction {
        Direction::Lowpass => t,
        Direction::Highpass => 1.0 / t,
    }
}

/// Minimum elliptic order meeting the edges and ripple/attenuation pair.
///
/// Edges are normalized (1.0 = Nyquist). Always returns at least 1.
pub fn estimate_iir_order(
    passband: f64,
    stopband: f64,
    passband_ripple_db: f64,
    stopband_attenuation_db: f64,
    direction: Direction,
) -> usize {
    let k = prewarp(passband, direction) / prewarp(stopband, direction);
    let k1_sq = (10f64.powf(passband_ripple_db / 10.0) - 1.0)
        / (10f64.powf(stopband_attenuation_db / 10.0) - 1.0);

    let m = k * k;
    let ratio = ellipk(m) * ellipk_complement(k1_sq) / (ellipk_complement(m) * ellipk(k1_sq));

    // Absorb rounding noise when the ratio lands on an integer.
    let order = (ratio - 1e-9).ceil();
    if order.is_finite() && order >= 1.0 {
        order as usize
    } else {
        1
    }
}
