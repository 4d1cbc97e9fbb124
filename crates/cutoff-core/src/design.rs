//! Filter design orchestration.
//!
//! ```text
//! FilterSpec
//!   └─ edge case? ──yes──▶ trivial filter + diagnostic
//!        │ no
//!   stopband edge ─▶ Kaiser order ─▶ family selection
//!                                     ├─ FIR ─▶ minimum-order FIR
//!                                     └─ IIR ─▶ elliptic order ─▶ length clamp?
//!                                                 ├─ no  ─▶ minimum-order elliptic
//!                                                 └─ yes ─▶ fixed-order elliptic + diagnostic
//! ```
//!
//! [`plan`] makes every decision without synthesizing; [`design`] runs the
//! plan through synthesis and precision narrowing.

use crate::diagnostic::Diagnostic;
use crate::edge_case::{EdgeCase, classify};
use crate::error::Result;
use crate::filter::Filter;
use crate::order::{estimate_fir_order, estimate_iir_order, passband_deviation, stopband_deviation};
use crate::select::{FilterFamily, select_family};
use crate::spec::{Direction, FilterSpec, FrequencySpec, ImpulseResponse, Precision};
use crate::synthesis::{SynthesisParams, synthesize};
use crate::transition::stopband_edge;

/// The IIR order is clamped when `signal_length <= IIR_LENGTH_FACTOR * order`.
pub const IIR_LENGTH_FACTOR: usize = 3;

/// Smallest clamped lowpass order.
pub const LOWPASS_MIN_CLAMPED_ORDER: usize = 1;

/// Smallest clamped highpass order.
pub const HIGHPASS_MIN_CLAMPED_ORDER: usize = 2;

/// Length-driven IIR order, or `None` when the signal supports
/// `minimum_order`.
///
/// Lowpass floors at [`LOWPASS_MIN_CLAMPED_ORDER`] and steps down once more
/// when `3·N` would equal the length exactly. Highpass floors at
/// [`HIGHPASS_MIN_CLAMPED_ORDER`] without the extra step.
///
/// ```rust
/// use cutoff_core::{Direction, design::clamp_iir_order};
///
/// assert_eq!(clamp_iir_order(Direction::Lowpass, 7, 100), None);
/// assert_eq!(clamp_iir_order(Direction::Lowpass, 7, 12), Some(3));
/// assert_eq!(clamp_iir_order(Direction::Lowpass, 7, 9), Some(2));
/// assert_eq!(clamp_iir_order(Direction::Highpass, 7, 9), Some(3));
/// assert_eq!(clamp_iir_order(Direction::Highpass, 7, 4), Some(2));
/// ```
pub fn clamp_iir_order(
    direction: Direction,
    minimum_order: usize,
    signal_length: usize,
) -> Option<usize> {
    if signal_length > IIR_LENGTH_FACTOR.saturating_mul(minimum_order) {
        return None;
    }
    let supported = signal_length / IIR_LENGTH_FACTOR;
    let order = match direction {
        Direction::Lowpass => {
            let n = supported.max(LOWPASS_MIN_CLAMPED_ORDER);
            if IIR_LENGTH_FACTOR * n == signal_length && n > LOWPASS_MIN_CLAMPED_ORDER {
                n - 1
            } else {
                n
            }
        }
        Direction::Highpass => supported.max(HIGHPASS_MIN_CLAMPED_ORDER),
    };
    Some(order)
}

/// Decisions made for a spec, before synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignPlan {
    /// Impulse response family.
    pub family: FilterFamily,
    /// Order that will be synthesized.
    pub order: usize,
    /// Minimum order meeting the attenuation target (before any clamp).
    pub minimum_order: usize,
    /// Normalized stopband edge; `None` for trivial filters.
    pub stopband_normalized: Option<f64>,
    /// Synthesis request.
    pub params: SynthesisParams,
    /// Degradation notice, if any.
    pub diagnostic: Option<Diagnostic>,
}

/// Decide family, order and synthesis parameters for `spec`.
pub fn plan(spec: &FilterSpec) -> DesignPlan {
    if let Some(case) = classify(spec) {
        return trivial_plan(spec, case);
    }

    let wp = spec.passband_normalized;
    let ws = stopband_edge(wp, spec.transition_fraction(), spec.direction);

    let freq = spec.frequency;
    let estimate = estimate_fir_order(
        freq.denormalize(wp),
        freq.denormalize(ws),
        passband_deviation(spec.passband_ripple_db),
        stopband_deviation(spec.stopband_attenuation_db),
        freq.full_band(),
    );
    let family = select_family(estimate.order, spec.signal_length, spec.impulse_response);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        direction = %spec.direction,
        passband = wp,
        stopband = ws,
        fir_order = estimate.order,
        family = family.as_str(),
        "design plan"
    );

    match family {
        FilterFamily::Fir => DesignPlan {
            family,
            order: estimate.order,
            minimum_order: estimate.order,
            stopband_normalized: Some(ws),
            params: SynthesisParams::FirMinimumOrder {
                direction: spec.direction,
                passband: wp,
                stopband: ws,
                estimate,
                signal_length: spec.signal_length,
            },
            diagnostic: None,
        },
        FilterFamily::Iir => iir_plan(spec, wp, ws),
    }
}

fn trivial_plan(spec: &FilterSpec, case: EdgeCase) -> DesignPlan {
    DesignPlan {
        family: FilterFamily::Fir,
        order: 0,
        minimum_order: 0,
        stopband_normalized: None,
        params: SynthesisParams::Trivial(case.trivial_filter()),
        diagnostic: Some(case.diagnostic(spec.signal_length)),
    }
}

fn iir_plan(spec: &FilterSpec, wp: f64, ws: f64) -> DesignPlan {
    let minimum_order = estimate_iir_order(
        wp,
        ws,
        spec.passband_ripple_db,
        spec.stopband_attenuation_db,
        spec.direction,
    );

    match clamp_iir_order(spec.direction, minimum_order, spec.signal_length) {
        None => DesignPlan {
            family: FilterFamily::Iir,
            order: minimum_order,
            minimum_order,
            stopband_normalized: Some(ws),
            params: SynthesisParams::EllipticMinimumOrder {
                direction: spec.direction,
                order: minimum_order,
                passband: wp,
                stopband: ws,
                ripple_db: spec.passband_ripple_db,
                attenuation_db: spec.stopband_attenuation_db,
            },
            diagnostic: None,
        },
        Some(order) => DesignPlan {
            family: FilterFamily::Iir,
            order,
            minimum_order,
            stopband_normalized: Some(ws),
            params: SynthesisParams::EllipticFixedOrder {
                direction: spec.direction,
                order,
                passband: wp,
                ripple_db: spec.passband_ripple_db,
                attenuation_db: spec.stopband_attenuation_db,
            },
            diagnostic: Some(Diagnostic::order_limited(
                minimum_order,
                order,
                spec.signal_length,
            )),
        },
    }
}

/// A finished design, owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDesign {
    /// Lowpass or highpass.
    pub direction: Direction,
    /// Impulse response family (trivial filters report FIR).
    pub family: FilterFamily,
    /// Requested family mode.
    pub impulse_response: ImpulseResponse,
    /// Filter order.
    pub order: usize,
    /// Minimum order meeting the attenuation target.
    pub minimum_order: usize,
    /// Normalized passband edge.
    pub passband_normalized: f64,
    /// Normalized stopband edge; `None` for trivial filters.
    pub stopband_normalized: Option<f64>,
    /// Units bookkeeping.
    pub frequency: FrequencySpec,
    /// Transition steepness used.
    pub steepness: f64,
    /// Passband ripple in dB.
    pub passband_ripple_db: f64,
    /// Stopband attenuation target in dB.
    pub stopband_attenuation_db: f64,
    /// Parameters handed to synthesis.
    pub params: SynthesisParams,
    /// Synthesized coefficients.
    pub filter: Filter,
    /// Coefficient precision.
    pub precision: Precision,
}

impl FilterDesign {
    /// `true` for FIR (including trivial) designs.
    pub fn is_fir(&self) -> bool {
        self.family == FilterFamily::Fir
    }

    /// `true` when the design is the identity.
    pub fn is_all_pass(&self) -> bool {
        matches!(
            self.params,
            SynthesisParams::Trivial(crate::edge_case::TrivialFilter::AllPass)
        )
    }

    /// `true` when the design blocks everything.
    pub fn is_all_stop(&self) -> bool {
        matches!(
            self.params,
            SynthesisParams::Trivial(crate::edge_case::TrivialFilter::AllStop)
        )
    }

    /// `true` when the order was reduced to fit the signal.
    pub fn is_length_limited(&self) -> bool {
        matches!(self.params, SynthesisParams::EllipticFixedOrder { .. })
    }

    /// Passband edge in caller units (Hz, or normalized).
    pub fn passband(&self) -> f64 {
        self.frequency.denormalize(self.passband_normalized)
    }

    /// Stopband edge in caller units.
    pub fn stopband(&self) -> Option<f64> {
        self.stopband_normalized
            .map(|ws| self.frequency.denormalize(ws))
    }
}

/// A design with its degradation notice.
#[derive(Debug, Clone, PartialEq)]
pub struct Designed {
    /// The design.
    pub design: FilterDesign,
    /// Set when the request was degraded.
    pub diagnostic: Option<Diagnostic>,
}

/// Plan, synthesize and (for single precision) narrow a filter.
///
/// # Example
///
/// ```rust
/// use cutoff_core::{Direction, FilterSpec, SampleRate, design::design};
///
/// let spec = FilterSpec::new(Direction::Lowpass, 0.3, SampleRate::Normalized, 1000);
/// let designed = design(&spec).unwrap();
/// assert!(designed.design.is_fir());
/// assert_eq!(designed.design.order, 70);
/// assert!(designed.diagnostic.is_none());
/// ```
pub fn design(spec: &FilterSpec) -> Result<Designed> {
    let plan = plan(spec);
    let filter = synthesize(&plan.params)?;
    let filter = match spec.precision {
        Precision::Single => filter.narrowed_to_single(),
        Precision::Double => filter,
    };

    #[cfg(feature = "tracing")]
    {
        tracing::debug!(
            order = plan.order,
            synthesis = plan.params.label(),
            "filter synthesized"
        );
        if let Some(d) = &plan.diagnostic {
            tracing::warn!(code = d.code.as_str(), "{}", d.message);
        }
    }

    Ok(Designed {
        design: FilterDesign {
            direction: spec.direction,
            family: plan.family,
            impulse_response: spec.impulse_response,
            order: plan.order,
            minimum_order: plan.minimum_order,
            passband_normalized: spec.passband_normalized,
            stopband_normalized: plan.stopband_normalized,
            frequency: spec.frequency,
            steepness: spec.steepness,
            passband_ripple_db: spec.passband_ripple_db,
            stopband_attenuation_db: spec.stopband_attenuation_db,
            params: plan.params,
            filter,
            precision: spec.precision,
        },
        diagnostic: plan.diagnostic,
    })
}
