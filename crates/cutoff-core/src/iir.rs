//! Elliptic (Cauer) IIR synthesis.
//!
//! 1. Build the normalized analog lowpass prototype (passband edge 1 rad/s)
//!    from Jacobi elliptic functions.
//! 2. Move the passband edge to the prewarped digital edge with a
//!    lowpass-to-lowpass or lowpass-to-highpass transform.
//! 3. Map to the z-plane with the bilinear transform.
//! 4. Pair conjugate poles and zeros into second-order sections.
//!
//! Reference: A. Antoniou, *Digital Signal Processing*, McGraw-Hill, 2006,
//! Sections 10.6 and 11.3; H. J. Orchard and A. N. Willson, "Elliptic
//! functions for filter design", IEEE Trans. CAS-I, 1997.

use std::f64::consts::FRAC_PI_2;

use num_complex::Complex64;

use crate::error::{Error, Result};
use crate::filter::{Filter, Section};
use crate::special::{arc_sc, ellipdeg, ellipj, ellipk};
use crate::spec::Direction;

/// Bilinear transform sampling rate (normalized frequencies, Nyquist = 1).
const BILINEAR_FS: f64 = 2.0;

/// Imaginary parts below this are treated as real.
const REAL_TOLERANCE: f64 = 1e-10;

/// Zeros, poles and gain of a continuous- or discrete-time system.
#[derive(Debug, Clone, PartialEq)]
pub struct Zpk {
    /// System zeros.
    pub zeros: Vec<Complex64>,
    /// System poles.
    pub poles: Vec<Complex64>,
    /// Overall gain.
    pub gain: f64,
}

fn product(values: &[Complex64], f: impl Fn(Complex64) -> Complex64) -> Complex64 {
    values
        .iter()
        .fold(Complex64::new(1.0, 0.0), |acc, &v| acc * f(v))
}

/// Elliptic analog lowpass prototype of the given order.
///
/// `ripple_db` is the peak-to-peak passband ripple and `attenuation_db`
/// the minimum stopband attenuation.
pub fn elliptic_prototype(order: usize, ripple_db: f64, attenuation_db: f64) -> Result<Zpk> {
    if order == 0 {
        return Err(Error::Synthesis("elliptic order must be at least 1".into()));
    }

    let eps_sq = 10f64.powf(0.1 * ripple_db) - 1.0;
    let eps = eps_sq.sqrt();

    if order == 1 {
        let p = -(1.0 / eps_sq).sqrt();
        return Ok(Zpk {
            zeros: Vec::new(),
            poles: vec![Complex64::new(p, 0.0)],
            gain: -p,
        });
    }

    let ck1_sq = eps_sq / (10f64.powf(0.1 * attenuation_db) - 1.0);
    if !(ck1_sq > 0.0 && ck1_sq < 1.0) {
        return Err(Error::Synthesis(format!(
            "cannot design an elliptic filter with {ripple_db} dB ripple and \
             {attenuation_db} dB attenuation"
        )));
    }

    let k1_integral = ellipk(ck1_sq);

    let m = ellipdeg(order, ck1_sq);
    let capk = ellipk(m);

    let start = 1 - order % 2;
    let jacobi: Vec<(f64, f64, f64)> = (start..order)
        .step_by(2)
        .map(|j| ellipj(j as f64 * capk / order as f64, m))
        .collect();

    let sqrt_m = m.sqrt();
    let mut zeros = Vec::with_capacity(order);
    for &(s, _, _) in &jacobi {
        if s.abs() > f64::EPSILON {
            let z = Complex64::new(0.0, 1.0 / (sqrt_m * s));
            zeros.push(z);
            zeros.push(z.conj());
        }
    }

    // sc(r | 1 - k1²) = 1/ε
    let r = arc_sc(1.0 / eps, ck1_sq);
    let v0 = capk * r / (order as f64 * k1_integral);
    let (sv, cv, dv) = ellipj(v0, 1.0 - m);

    let mut poles = Vec::with_capacity(order);
    for &(s, c, d) in &jacobi {
        let den = 1.0 - (d * sv) * (d * sv);
        let p = -Complex64::new(c * d * sv * cv, s * dv) / den;
        poles.push(p);
        if p.im.abs() > REAL_TOLERANCE * p.norm() {
            poles.push(p.conj());
        }
    }

    let mut gain = (product(&poles, |p| -p) / product(&zeros, |z| -z)).re;
    if order % 2 == 0 {
        gain /= (1.0 + eps_sq).sqrt();
    }

    Ok(Zpk { zeros, poles, gain })
}

/// Scale a lowpass prototype to cutoff `wo` rad/s.
pub fn lowpass_to_lowpass(proto: &Zpk, wo: f64) -> Zpk {
    let degree = proto.poles.len() - proto.zeros.len();
    Zpk {
        zeros: proto.zeros.iter().map(|&z| z * wo).collect(),
        poles: proto.poles.iter().map(|&p| p * wo).collect(),
        gain: proto.gain * wo.powi(degree as i32),
    }
}

/// Transform a lowpass prototype into a highpass with cutoff `wo` rad/s.
pub fn lowpass_to_highpass(proto: &Zpk, wo: f64) -> Zpk {
    let degree = proto.poles.len() - proto.zeros.len();
    let mut zeros: Vec<Complex64> = proto.zeros.iter().map(|&z| wo / z).collect();
    zeros.extend(std::iter::repeat_n(Complex64::new(0.0, 0.0), degree));
    let gain = proto.gain * (product(&proto.zeros, |z| -z) / product(&proto.poles, |p| -p)).re;
    Zpk {
        zeros,
        poles: proto.poles.iter().map(|&p| wo / p).collect(),
        gain,
    }
}

/// Bilinear transform at sampling rate `fs`.
pub fn bilinear(analog: &Zpk, fs: f64) -> Zpk {
    let fs2 = 2.0 * fs;
    let degree = analog.poles.len() - analog.zeros.len();
    let map = |s: Complex64| (fs2 + s) / (fs2 - s);

    let mut zeros: Vec<Complex64> = analog.zeros.iter().map(|&z| map(z)).collect();
    zeros.extend(std::iter::repeat_n(Complex64::new(-1.0, 0.0), degree));
    let gain = analog.gain
        * (product(&analog.zeros, |z| fs2 - z) / product(&analog.poles, |p| fs2 - p)).re;

    Zpk {
        zeros,
        poles: analog.poles.iter().map(|&p| map(p)).collect(),
        gain,
    }
}

/// Split roots into upper-half-plane representatives of conjugate pairs and
/// real roots.
fn split_roots(roots: &[Complex64]) -> (Vec<Complex64>, Vec<f64>) {
    let mut complex = Vec::new();
    let mut real = Vec::new();
    for &r in roots {
        if r.im.abs() <= REAL_TOLERANCE * r.norm().max(1.0) {
            real.push(r.re);
        } else if r.im > 0.0 {
            complex.push(r);
        }
    }
    (complex, real)
}

fn take_nearest<T: Copy>(pool: &mut Vec<T>, dist: impl Fn(T) -> f64) -> Option<T> {
    let idx = pool
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| dist(**a).total_cmp(&dist(**b)))
        .map(|(i, _)| i)?;
    Some(pool.swap_remove(idx))
}

/// Group a digital zpk system into second-order sections.
///
/// Poles closest to the unit circle are paired first with their nearest
/// zeros; the resulting list is reversed so the highest-Q section runs last.
/// The overall gain is folded into the first section.
pub fn zpk_to_sections(digital: &Zpk) -> Vec<Section> {
    let (mut cpoles, mut rpoles) = split_roots(&digital.poles);
    let (mut czeros, mut rzeros) = split_roots(&digital.zeros);

    cpoles.sort_by(|a, b| (1.0 - a.norm()).abs().total_cmp(&(1.0 - b.norm()).abs()));
    rpoles.sort_by(|a, b| (1.0 - a.abs()).abs().total_cmp(&(1.0 - b.abs()).abs()));

    let mut sections = Vec::with_capacity(cpoles.len() + rpoles.len().div_ceil(2));

    for p in cpoles {
        let a = [1.0, -2.0 * p.re, p.norm_sqr()];
        let b = if let Some(z) = take_nearest(&mut czeros, |z: Complex64| (z - p).norm()) {
            [1.0, -2.0 * z.re, z.norm_sqr()]
        } else {
            let z1 = take_nearest(&mut rzeros, |z: f64| (Complex64::new(z, 0.0) - p).norm());
            let z2 = take_nearest(&mut rzeros, |z: f64| (Complex64::new(z, 0.0) - p).norm());
            real_pair(z1, z2)
        };
        sections.push(Section { b, a });
    }

    let mut rpoles = rpoles.into_iter();
    while let Some(p1) = rpoles.next() {
        let p2 = rpoles.next();
        let a = real_pair(Some(p1), p2);
        let z1 = take_nearest(&mut rzeros, |z: f64| (z - p1).abs());
        let z2 = if p2.is_some() {
            take_nearest(&mut rzeros, |z: f64| (z - p1).abs())
        } else {
            None
        };
        sections.push(Section {
            b: real_pair(z1, z2),
            a,
        });
    }

    // Leftover zeros (more zeros than poles cannot occur for proper systems)
    for z in czeros {
        sections.push(Section {
            b: [1.0, -2.0 * z.re, z.norm_sqr()],
            a: Section::IDENTITY.a,
        });
    }

    sections.reverse();
    match sections.first_mut() {
        Some(first) => {
            for b in &mut first.b {
                *b *= digital.gain;
            }
        }
        None => {
            let mut gain_only = Section::IDENTITY;
            gain_only.b[0] = digital.gain;
            sections.push(gain_only);
        }
    }
    sections
}

fn real_pair(r1: Option<f64>, r2: Option<f64>) -> [f64; 3] {
    match (r1, r2) {
        (Some(x), Some(y)) => [1.0, -(x + y), x * y],
        (Some(x), None) | (None, Some(x)) => [1.0, -x, 0.0],
        (None, None) => [1.0, 0.0, 0.0],
    }
}

/// Elliptic lowpass/highpass of the given order with its passband edge at
/// `passband` (normalized, 1.0 = Nyquist).
///
/// The passband edge is matched exactly; the stopband edge follows from the
/// order and the ripple/attenuation pair.
pub fn design_elliptic(
    direction: Direction,
    order: usize,
    passband: f64,
    ripple_db: f64,
    attenuation_db: f64,
) -> Result<Filter> {
    if !(passband > 0.0 && passband < 1.0) {
        return Err(Error::Synthesis(format!(
            "elliptic passband edge {passband} must lie strictly between 0 and Nyquist"
        )));
    }

    let proto = elliptic_prototype(order, ripple_db, attenuation_db)?;
    let warped = 2.0 * BILINEAR_FS * (FRAC_PI_2 * passband).tan();
    let analog = match direction {
        Direction::Lowpass => lowpass_to_lowpass(&proto, warped),
        Direction::Highpass => lowpass_to_highpass(&proto, warped),
    };
    let digital = bilinear(&analog, BILINEAR_FS);

    let filter = Filter::Iir {
        sections: zpk_to_sections(&digital),
        order,
    };
    if !filter.is_stable() {
        return Err(Error::Synthesis(format!(
            "elliptic design of order {order} is numerically unstable"
        )));
    }
    Ok(filter)
}
