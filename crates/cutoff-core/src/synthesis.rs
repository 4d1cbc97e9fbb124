//! Coefficient synthesis from a design plan.

use crate::edge_case::TrivialFilter;
use crate::error::{Error, Result};
use crate::filter::Filter;
use crate::fir::design_fir;
use crate::iir::design_elliptic;
use crate::order::FirEstimate;
use crate::spec::Direction;

/// Everything synthesis needs, one variant per design path.
#[derive(Debug, Clone, PartialEq)]
pub enum SynthesisParams {
    /// Degenerate request; no design.
    Trivial(TrivialFilter),
    /// Minimum-order Kaiser-window FIR between the two edges.
    FirMinimumOrder {
        /// Lowpass or highpass.
        direction: Direction,
        /// Normalized passband edge.
        passband: f64,
        /// Normalized stopband edge.
        stopband: f64,
        /// Kaiser order, window and cutoff.
        estimate: FirEstimate,
        /// Samples per column; the FIR must be shorter.
        signal_length: usize,
    },
    /// Minimum-order elliptic design meeting both edges.
    EllipticMinimumOrder {
        /// Lowpass or highpass.
        direction: Direction,
        /// Minimum elliptic order.
        order: usize,
        /// Normalized passband edge.
        passband: f64,
        /// Normalized stopband edge.
        stopband: f64,
        /// Passband ripple in dB.
        ripple_db: f64,
        /// Stopband attenuation in dB.
        attenuation_db: f64,
    },
    /// Length-limited elliptic design anchored at the passband edge only.
    EllipticFixedOrder {
        /// Lowpass or highpass.
        direction: Direction,
        /// Clamped order.
        order: usize,
        /// Normalized passband edge.
        passband: f64,
        /// Passband ripple in dB.
        ripple_db: f64,
        /// Stopband attenuation in dB.
        attenuation_db: f64,
    },
}

impl SynthesisParams {
    /// Order the synthesized filter will have.
    pub fn order(&self) -> usize {
        match self {
            SynthesisParams::Trivial(_) => 0,
            SynthesisParams::FirMinimumOrder { estimate, .. } => estimate.order,
            SynthesisParams::EllipticMinimumOrder { order, .. }
            | SynthesisParams::EllipticFixedOrder { order, .. } => *order,
        }
    }

    /// Short label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            SynthesisParams::Trivial(TrivialFilter::AllPass) => "all-pass",
            SynthesisParams::Trivial(TrivialFilter::AllStop) => "all-stop",
            SynthesisParams::FirMinimumOrder { .. } => "kaiser-window FIR, minimum order",
            SynthesisParams::EllipticMinimumOrder { .. } => "elliptic IIR, minimum order",
            SynthesisParams::EllipticFixedOrder { .. } => "elliptic IIR, length-limited order",
        }
    }
}

/// Turn synthesis parameters into a filter.
///
/// A forced FIR whose order reaches the signal length fails with
/// [`Error::FirOrderTooLarge`] instead of falling back to IIR.
pub fn synthesize(params: &SynthesisParams) -> Result<Filter> {
    match params {
        SynthesisParams::Trivial(TrivialFilter::AllPass) => Ok(Filter::all_pass()),
        SynthesisParams::Trivial(TrivialFilter::AllStop) => Ok(Filter::all_stop()),
        SynthesisParams::FirMinimumOrder {
            direction,
            estimate,
            signal_length,
            ..
        } => {
            if estimate.order >= *signal_length {
                return Err(Error::FirOrderTooLarge {
                    order: estimate.order,
                    signal_length: *signal_length,
                });
            }
            let taps = design_fir(*direction, estimate.order, estimate.cutoff, estimate.beta);
            Ok(Filter::Fir { taps })
        }
        SynthesisParams::EllipticMinimumOrder {
            direction,
            order,
            passband,
            ripple_db,
            attenuation_db,
            ..
        }
        | SynthesisParams::EllipticFixedOrder {
            direction,
            order,
            passband,
            ripple_db,
            attenuation_db,
        } => design_elliptic(*direction, *order, *passband, *ripple_db, *attenuation_db),
    }
}
