//! Immutable synthesized filter value.
//!
//! A [`Filter`] is either a tapped delay line (FIR) or a cascade of
//! second-order sections (IIR). The engine hands it to the caller and keeps
//! no reference to it.

use std::f64::consts::PI;

use num_complex::Complex64;

/// Second-order section, `a[0]` normalized to 1.
///
/// ```text
/// H(z) = (b0 + b1 z⁻¹ + b2 z⁻²) / (1 + a1 z⁻¹ + a2 z⁻²)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    /// Numerator coefficients.
    pub b: [f64; 3],
    /// Denominator coefficients (`a[0] == 1`).
    pub a: [f64; 3],
}

impl Section {
    /// Pass-through section.
    pub const IDENTITY: Section = Section {
        b: [1.0, 0.0, 0.0],
        a: [1.0, 0.0, 0.0],
    };

    /// Steady-state gain for a constant input (`H(1)`).
    pub fn dc_gain(&self) -> f64 {
        (self.b[0] + self.b[1] + self.b[2]) / (self.a[0] + self.a[1] + self.a[2])
    }

    /// Complex response at `z`.
    pub fn response_at(&self, z: Complex64) -> Complex64 {
        let zi = z.inv();
        let zi2 = zi * zi;
        let num = self.b[0] + zi * self.b[1] + zi2 * self.b[2];
        let den = self.a[0] + zi * self.a[1] + zi2 * self.a[2];
        num / den
    }

    /// `true` when both poles lie strictly inside the unit circle.
    pub fn is_stable(&self) -> bool {
        // Jury conditions for 1 + a1 z^-1 + a2 z^-2
        let (a1, a2) = (self.a[1], self.a[2]);
        a2.abs() < 1.0 && a1.abs() < 1.0 + a2
    }

    fn narrowed(&self) -> Section {
        Section {
            b: self.b.map(round_to_single),
            a: self.a.map(round_to_single),
        }
    }
}

fn round_to_single(x: f64) -> f64 {
    f64::from(x as f32)
}

/// Synthesized filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Tapped delay line.
    Fir {
        /// Impulse response, `order + 1` taps.
        taps: Vec<f64>,
    },
    /// Cascade of second-order sections.
    Iir {
        /// Sections applied in order.
        sections: Vec<Section>,
        /// Design order (number of poles).
        order: usize,
    },
}

impl Filter {
    /// Identity filter of order 0.
    pub fn all_pass() -> Self {
        Filter::Fir { taps: vec![1.0] }
    }

    /// Zero-gain filter of order 0.
    pub fn all_stop() -> Self {
        Filter::Fir { taps: vec![0.0] }
    }

    /// `true` for FIR filters.
    pub fn is_fir(&self) -> bool {
        matches!(self, Filter::Fir { .. })
    }

    /// Filter order.
    pub fn order(&self) -> usize {
        match self {
            Filter::Fir { taps } => taps.len().saturating_sub(1),
            Filter::Iir { order, .. } => *order,
        }
    }

    /// FIR taps, if any.
    pub fn taps(&self) -> Option<&[f64]> {
        match self {
            Filter::Fir { taps } => Some(taps),
            Filter::Iir { .. } => None,
        }
    }

    /// IIR sections, if any.
    pub fn sections(&self) -> Option<&[Section]> {
        match self {
            Filter::Fir { .. } => None,
            Filter::Iir { sections, .. } => Some(sections),
        }
    }

    /// Constant group delay in samples for linear-phase FIR filters.
    pub fn group_delay(&self) -> Option<f64> {
        match self {
            Filter::Fir { taps } => Some(taps.len().saturating_sub(1) as f64 / 2.0),
            Filter::Iir { .. } => None,
        }
    }

    /// `true` for FIR filters and for IIR filters with all poles inside
    /// the unit circle.
    pub fn is_stable(&self) -> bool {
        match self {
            Filter::Fir { .. } => true,
            Filter::Iir { sections, .. } => sections.iter().all(Section::is_stable),
        }
    }

    /// Copy with every coefficient rounded to single precision.
    pub fn narrowed_to_single(&self) -> Self {
        match self {
            Filter::Fir { taps } => Filter::Fir {
                taps: taps.iter().map(|&h| round_to_single(h)).collect(),
            },
            Filter::Iir { sections, order } => Filter::Iir {
                sections: sections.iter().map(Section::narrowed).collect(),
                order: *order,
            },
        }
    }

    /// Complex response at normalized frequency `w` (1.0 = Nyquist).
    pub fn frequency_response(&self, w: f64) -> Complex64 {
        let z = Complex64::from_polar(1.0, PI * w);
        match self {
            Filter::Fir { taps } => {
                let zi = z.inv();
                // Horner in z^-1
                taps.iter()
                    .rev()
                    .fold(Complex64::new(0.0, 0.0), |acc, &h| acc * zi + h)
            }
            Filter::Iir { sections, .. } => sections
                .iter()
                .fold(Complex64::new(1.0, 0.0), |acc, s| acc * s.response_at(z)),
        }
    }

    /// Magnitude response in dB at normalized frequency `w`.
    pub fn magnitude_db(&self, w: f64) -> f64 {
        20.0 * self.frequency_response(w).norm().max(1e-300).log10()
    }

    /// First `len` samples of the causal impulse response.
    pub fn impulse_response(&self, len: usize) -> Vec<f64> {
        match self {
            Filter::Fir { taps } => {
                let mut h = taps.clone();
                h.resize(len, 0.0);
                h
            }
            Filter::Iir { sections, .. } => {
                let mut buf = vec![0.0; len];
                if let Some(first) = buf.first_mut() {
                    *first = 1.0;
                }
                for s in sections {
                    let (mut z1, mut z2) = (0.0, 0.0);
                    for x in &mut buf {
                        let y = s.b[0] * *x + z1;
                        z1 = s.b[1] * *x - s.a[1] * y + z2;
                        z2 = s.b[2] * *x - s.a[2] * y;
                        *x = y;
                    }
                }
                buf
            }
        }
    }
}
