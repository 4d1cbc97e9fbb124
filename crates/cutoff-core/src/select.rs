//! FIR-versus-IIR family selection.

use crate::spec::ImpulseResponse;

/// In auto mode FIR needs `signal_length > AUTO_FIR_LENGTH_FACTOR * fir_order`.
pub const AUTO_FIR_LENGTH_FACTOR: usize = 2;

/// Impulse response family of a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterFamily {
    /// Finite impulse response (Kaiser-windowed sinc).
    Fir,
    /// Infinite impulse response (elliptic).
    Iir,
}

impl FilterFamily {
    /// Uppercase name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterFamily::Fir => "FIR",
            FilterFamily::Iir => "IIR",
        }
    }
}

/// Decide the filter family.
///
/// Forced modes are honored regardless of feasibility; an infeasible forced
/// FIR surfaces later as a synthesis error rather than a silent downgrade.
///
/// ```rust
/// use cutoff_core::{ImpulseResponse, select::{select_family, FilterFamily}};
///
/// assert_eq!(select_family(70, 141, ImpulseResponse::Auto), FilterFamily::Fir);
/// assert_eq!(select_family(70, 140, ImpulseResponse::Auto), FilterFamily::Iir);
/// assert_eq!(select_family(70, 10, ImpulseResponse::Fir), FilterFamily::Fir);
/// ```
pub fn select_family(
    fir_order: usize,
    signal_length: usize,
    mode: ImpulseResponse,
) -> FilterFamily {
    match mode {
        ImpulseResponse::Fir => FilterFamily::Fir,
        ImpulseResponse::Iir => FilterFamily::Iir,
        ImpulseResponse::Auto => {
            if signal_length > AUTO_FIR_LENGTH_FACTOR.saturating_mul(fir_order) {
                FilterFamily::Fir
            } else {
                FilterFamily::Iir
            }
        }
    }
}
