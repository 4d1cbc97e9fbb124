//! Kaiser-windowed sinc FIR synthesis.
//!
//! Designs a Type I linear-phase filter of even order `M`:
//!
//! ```text
//! lowpass:   h[n] = wc · sinc(wc · (n - M/2)) · w[n]
//! highpass:  h[n] = (δ[n - M/2] - wc · sinc(wc · (n - M/2))) · w[n]
//! ```
//!
//! with `sinc(x) = sin(πx)/(πx)`, `wc` the cutoff normalized to Nyquist and
//! `w[n] = I0(β·sqrt(1 - (2n/M - 1)²)) / I0(β)` the Kaiser window. The
//! lowpass is scaled to unity gain at DC and the highpass to unity gain at
//! Nyquist.
//!
//! Reference: A. V. Oppenheim and R. W. Schafer, *Discrete-Time Signal
//! Processing*, 3rd ed., Prentice Hall, 2009, Section 7.6.

use std::f64::consts::PI;

use crate::special::bessel_i0;
use crate::spec::Direction;

/// Kaiser window of `len` points with shape parameter `beta`.
pub fn kaiser_window(len: usize, beta: f64) -> Vec<f64> {
    if len <= 1 {
        return vec![1.0; len];
    }
    let m = (len - 1) as f64;
    let denom = bessel_i0(beta);
    (0..len)
        .map(|n| {
            let r = 2.0 * n as f64 / m - 1.0;
            bessel_i0(beta * (1.0 - r * r).max(0.0).sqrt()) / denom
        })
        .collect()
}

fn sinc(x: f64) -> f64 {
    if x.abs() < 1e-12 {
        1.0
    } else {
        (PI * x).sin() / (PI * x)
    }
}

/// Windowed-sinc coefficients of the given even `order`.
///
/// `cutoff` is normalized to Nyquist and must lie in `(0, 1)`.
pub fn design_fir(direction: Direction, order: usize, cutoff: f64, beta: f64) -> Vec<f64> {
    let len = order + 1;
    let center = order as f64 / 2.0;
    let window = kaiser_window(len, beta);

    let mut taps: Vec<f64> = window
        .iter()
        .enumerate()
        .map(|(n, &w)| {
            let x = n as f64 - center;
            let lowpass = cutoff * sinc(cutoff * x);
            let ideal = match direction {
                Direction::Lowpass => lowpass,
                Direction::Highpass => {
                    let delta = if x.abs() < 1e-12 { 1.0 } else { 0.0 };
                    delta - lowpass
                }
            };
            ideal * w
        })
        .collect();

    // DC gain for lowpass, Nyquist gain for highpass
    let gain: f64 = match direction {
        Direction::Lowpass => taps.iter().sum(),
        Direction::Highpass => taps
            .iter()
            .enumerate()
            .map(|(n, &h)| if n % 2 == 0 { h } else { -h })
            .sum(),
    };
    if gain.abs() > 1e-12 {
        let scale = 1.0 / gain.abs();
        for h in &mut taps {
            *h *= scale;
        }
    }

    taps
}
