//! Special functions used by filter design.
//!
//! - Complete elliptic integral of the first kind via the arithmetic-geometric
//!   mean, in parameter form `K(m)` with `m = k²`
//! - Incomplete elliptic integral via Carlson's symmetric `R_F`
//! - Jacobi elliptic functions `sn`, `cn`, `dn` via descending Landen
//!   transformation
//! - The elliptic degree equation (nome series)
//! - Zeroth-order modified Bessel function `I0` for the Kaiser window
//!
//! Reference: M. Abramowitz and I. A. Stegun, *Handbook of Mathematical
//! Functions*, Chapters 16-17; W. H. Press et al., *Numerical Recipes*,
//! 3rd ed., Section 6.12.

use std::f64::consts::{FRAC_PI_2, PI};

/// Arithmetic-geometric mean of `a` and `b`.
pub fn agm(mut a: f64, mut b: f64) -> f64 {
    for _ in 0..64 {
        if (a - b).abs() <= 1e-15 * a.abs() {
            break;
        }
        let next_a = 0.5 * (a + b);
        b = (a * b).sqrt();
        a = next_a;
    }
    a
}

/// Complete elliptic integral of the first kind, `K(m)`, for `0 <= m < 1`.
///
/// Returns `+inf` at `m = 1`.
pub fn ellipk(m: f64) -> f64 {
    if m >= 1.0 {
        return f64::INFINITY;
    }
    FRAC_PI_2 / agm(1.0, (1.0 - m).sqrt())
}

/// `K(1 - m)`, accurate for tiny `m` where forming `1 - m` would lose digits.
pub fn ellipk_complement(m: f64) -> f64 {
    if m <= 0.0 {
        return f64::INFINITY;
    }
    FRAC_PI_2 / agm(1.0, m.sqrt())
}

/// Carlson's symmetric elliptic integral of the first kind `R_F(x, y, z)`.
///
/// At most one argument may be zero.
pub fn carlson_rf(x: f64, y: f64, z: f64) -> f64 {
    const ERRTOL: f64 = 0.0025;
    const C1: f64 = 1.0 / 24.0;
    const C2: f64 = 0.1;
    const C3: f64 = 3.0 / 44.0;
    const C4: f64 = 1.0 / 14.0;

    let (mut xt, mut yt, mut zt) = (x, y, z);
    let mut ave;
    let (mut dx, mut dy, mut dz);
    loop {
        let (sx, sy, sz) = (xt.sqrt(), yt.sqrt(), zt.sqrt());
        let lambda = sx * (sy + sz) + sy * sz;
        xt = 0.25 * (xt + lambda);
        yt = 0.25 * (yt + lambda);
        zt = 0.25 * (zt + lambda);
        ave = (xt + yt + zt) / 3.0;
        dx = (ave - xt) / ave;
        dy = (ave - yt) / ave;
        dz = (ave - zt) / ave;
        if dx.abs().max(dy.abs()).max(dz.abs()) <= ERRTOL {
            break;
        }
    }
    let e2 = dx * dy - dz * dz;
    let e3 = dx * dy * dz;
    (1.0 + (C1 * e2 - C2 - C3 * e3) * e2 + C4 * e3) / ave.sqrt()
}

/// Inverse of the Jacobi `sc` function: the `u` with `sc(u | m) = w`, `w >= 0`.
///
/// Takes the complementary parameter `mc = 1 - m` so that parameters close
/// to one stay accurate.
pub fn arc_sc(w: f64, mc: f64) -> f64 {
    // sc = tan(am), so u = F(atan w | m) = sin φ · R_F(cos²φ, 1 - m sin²φ, 1)
    let phi = w.atan();
    let (s, c) = phi.sin_cos();
    let c2 = c * c;
    s * carlson_rf(c2, c2 + mc * s * s, 1.0)
}

/// Jacobi elliptic functions `(sn, cn, dn)` of argument `u` and parameter `m`.
pub fn ellipj(u: f64, m: f64) -> (f64, f64, f64) {
    if m < 1e-9 {
        let (t, b) = u.sin_cos();
        let ai = 0.25 * m * (u - t * b);
        return (t - ai * b, b + ai * t, 1.0 - 0.5 * m * t * t);
    }

    if m >= 0.9999999999 {
        let ai = 0.25 * (1.0 - m);
        let b = u.cosh();
        let t = u.tanh();
        let phi = 1.0 / b;
        let twon = b * u.sinh();
        let sn = t + ai * (twon - u) / (b * b);
        let ai = ai * t * phi;
        return (sn, phi - ai * (twon - u), phi + ai * (twon + u));
    }

    let mut a = [0.0_f64; 9];
    let mut c = [0.0_f64; 9];
    a[0] = 1.0;
    c[0] = m.sqrt();
    let mut b = (1.0 - m).sqrt();
    let mut twon = 1.0;
    let mut i = 0;

    while (c[i] / a[i]).abs() > f64::EPSILON && i < 8 {
        let ai = a[i];
        i += 1;
        c[i] = 0.5 * (ai - b);
        let t = (ai * b).sqrt();
        a[i] = 0.5 * (ai + b);
        b = t;
        twon *= 2.0;
    }

    let mut phi = twon * a[i] * u;
    let mut prev = phi;
    while i > 0 {
        let t = (c[i] * phi.sin() / a[i]).clamp(-1.0, 1.0);
        prev = phi;
        phi = 0.5 * (t.asin() + phi);
        i -= 1;
    }

    let (sn, cn) = phi.sin_cos();
    (sn, cn, cn / (phi - prev).cos())
}

/// Solve the degree equation for the selectivity parameter.
///
/// Given filter order `n` and discrimination parameter `m1 = k1²`, returns
/// the parameter `m = k²` with `n = K(m) K'(m1) / (K'(m) K(m1))`.
pub fn ellipdeg(n: usize, m1: f64) -> f64 {
    const TERMS: i32 = 7;

    let k1 = ellipk(m1);
    let k1p = ellipk_complement(m1);
    let q1 = (-PI * k1p / k1).exp();
    let q = q1.powf(1.0 / n as f64);

    let num: f64 = (0..=TERMS).map(|k| q.powi(k * (k + 1))).sum();
    let den: f64 = 1.0 + 2.0 * (1..=TERMS + 1).map(|k| q.powi(k * k)).sum::<f64>();
    16.0 * q * (num / den).powi(4)
}

/// Zeroth-order modified Bessel function of the first kind (series expansion).
pub fn bessel_i0(x: f64) -> f64 {
    let mut sum = 1.0;
    let mut term = 1.0;
    let half = 0.5 * x;
    for k in 1..200 {
        let r = half / k as f64;
        term *= r * r;
        sum += term;
        if term < 1e-17 * sum {
            break;
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ellipk_known_values() {
        assert!((ellipk(0.0) - FRAC_PI_2).abs() < 1e-14);
        // K(0.5) = 1.8540746773013719
        assert!((ellipk(0.5) - 1.8540746773013719).abs() < 1e-13);
        // K(0.9) = 2.5780921133481733
        assert!((ellipk(0.9) - 2.5780921133481733).abs() < 1e-12);
        assert!(ellipk(1.0).is_infinite());
    }

    #[test]
    fn complement_matches_direct_form() {
        for &m in &[0.1, 0.3, 0.5, 0.7] {
            assert!((ellipk_complement(m) - ellipk(1.0 - m)).abs() < 1e-12);
        }
    }

    #[test]
    fn carlson_rf_gives_complete_integral() {
        // K(m) = R_F(0, 1 - m, 1)
        for &m in &[0.0, 0.25, 0.5, 0.8] {
            let rf = carlson_rf(0.0, 1.0 - m, 1.0);
            assert!((rf - ellipk(m)).abs() < 1e-12, "m={m}: {rf} vs {}", ellipk(m));
        }
    }

    #[test]
    fn ellipj_limits() {
        // m = 0: circular functions
        let (sn, cn, dn) = ellipj(0.7, 0.0);
        assert!((sn - 0.7_f64.sin()).abs() < 1e-14);
        assert!((cn - 0.7_f64.cos()).abs() < 1e-14);
        assert!((dn - 1.0).abs() < 1e-14);

        // m = 1: hyperbolic functions
        let (sn, cn, dn) = ellipj(0.7, 1.0);
        assert!((sn - 0.7_f64.tanh()).abs() < 1e-12);
        assert!((cn - 1.0 / 0.7_f64.cosh()).abs() < 1e-12);
        assert!((dn - 1.0 / 0.7_f64.cosh()).abs() < 1e-12);
    }

    #[test]
    fn ellipj_identities() {
        for &m in &[0.1, 0.5, 0.9, 0.999] {
            for &u in &[0.1, 0.5, 1.0, 1.7] {
                let (sn, cn, dn) = ellipj(u, m);
                assert!((sn * sn + cn * cn - 1.0).abs() < 1e-12);
                assert!((dn * dn + m * sn * sn - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn ellipj_quarter_period() {
        // sn(K(m) | m) = 1
        for &m in &[0.2, 0.6, 0.95] {
            let (sn, _, _) = ellipj(ellipk(m), m);
            assert!((sn - 1.0).abs() < 1e-10, "m={m}: sn={sn}");
        }
    }

    #[test]
    fn arc_sc_inverts_sc() {
        for &m in &[0.2, 0.7, 0.999_999] {
            for &w in &[0.1, 1.0, 12.0] {
                let u = arc_sc(w, 1.0 - m);
                let (sn, cn, _) = ellipj(u, m);
                assert!((sn / cn - w).abs() < 1e-8 * w.max(1.0), "m={m} w={w}");
            }
        }
    }

    #[test]
    fn ellipdeg_satisfies_degree_equation() {
        let m1 = 1e-5;
        for n in 2..8 {
            let m = ellipdeg(n, m1);
            let ratio = ellipk(m) * ellipk_complement(m1) / (ellipk_complement(m) * ellipk(m1));
            assert!((ratio - n as f64).abs() < 1e-6, "n={n}: ratio={ratio}");
        }
    }

    #[test]
    fn bessel_i0_known_values() {
        assert!((bessel_i0(0.0) - 1.0).abs() < 1e-15);
        // I0(1) = 1.2660658777520082
        assert!((bessel_i0(1.0) - 1.2660658777520082).abs() < 1e-13);
        // I0(5) = 27.239871823604442
        assert!((bessel_i0(5.0) - 27.239871823604442).abs() < 1e-10);
    }
}
