//! Degenerate request detection.
//!
//! Two checks decide whether a request collapses to a trivial filter:
//! the signal length check and the passband-at-Nyquist check. They run in
//! a direction-specific order, and the first hit wins:
//!
//! | Direction | First check | Second check |
//! |-----------|-------------|--------------|
//! | lowpass   | length ≤ 3 → all-pass | wp ≥ 1 → all-pass |
//! | highpass  | wp ≥ 1 → all-stop | length ≤ 3 → all-pass |
//!
//! A highpass request whose edge reaches Nyquist is therefore always
//! all-stop, whatever the signal length.

use crate::diagnostic::Diagnostic;
use crate::spec::{Direction, FilterSpec};

/// Signals this short or shorter are returned unfiltered.
pub const MAX_UNFILTERABLE_LENGTH: usize = 3;

/// A single degenerate-request test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// `signal_length <= MAX_UNFILTERABLE_LENGTH`.
    SignalLength,
    /// `passband_normalized >= 1`.
    PassbandAtNyquist,
}

/// Evaluation order for lowpass requests.
pub const LOWPASS_CHECK_ORDER: [Check; 2] = [Check::SignalLength, Check::PassbandAtNyquist];

/// Evaluation order for highpass requests.
pub const HIGHPASS_CHECK_ORDER: [Check; 2] = [Check::PassbandAtNyquist, Check::SignalLength];

/// Trivial filter substituted for a degenerate request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrivialFilter {
    /// Identity (unit gain at every frequency).
    AllPass,
    /// Zero gain at every frequency.
    AllStop,
}

/// Reason a request was classified as degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeCase {
    /// Too few samples to filter.
    SignalTooShort,
    /// Lowpass edge at or beyond Nyquist.
    ForcedAllPass,
    /// Highpass edge at or beyond Nyquist.
    ForcedAllStop,
}

impl EdgeCase {
    /// Filter substituted for this case.
    pub fn trivial_filter(&self) -> TrivialFilter {
        match self {
            EdgeCase::SignalTooShort | EdgeCase::ForcedAllPass => TrivialFilter::AllPass,
            EdgeCase::ForcedAllStop => TrivialFilter::AllStop,
        }
    }

    /// Diagnostic reported for this case.
    pub fn diagnostic(&self, signal_length: usize) -> Diagnostic {
        match self {
            EdgeCase::SignalTooShort => Diagnostic::signal_too_short(signal_length),
            EdgeCase::ForcedAllPass => Diagnostic::forced_all_pass(),
            EdgeCase::ForcedAllStop => Diagnostic::forced_all_stop(),
        }
    }
}

/// Check order for a direction.
pub fn check_order(direction: Direction) -> &'static [Check; 2] {
    match direction {
        Direction::Lowpass => &LOWPASS_CHECK_ORDER,
        Direction::Highpass => &HIGHPASS_CHECK_ORDER,
    }
}

/// Classify a request, or `None` when it needs a real design.
pub fn classify(spec: &FilterSpec) -> Option<EdgeCase> {
    check_order(spec.direction).iter().find_map(|check| match check {
        Check::SignalLength if spec.signal_length <= MAX_UNFILTERABLE_LENGTH => {
            Some(EdgeCase::SignalTooShort)
        }
        Check::PassbandAtNyquist if spec.passband_normalized >= 1.0 => {
            Some(match spec.direction {
                Direction::Lowpass => EdgeCase::ForcedAllPass,
                Direction::Highpass => EdgeCase::ForcedAllStop,
            })
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::SampleRate;

    fn spec(direction: Direction, wp: f64, len: usize) -> FilterSpec {
        FilterSpec::new(direction, wp, SampleRate::Normalized, len)
    }

    #[test]
    fn check_orders_are_pinned() {
        assert_eq!(LOWPASS_CHECK_ORDER, [Check::SignalLength, Check::PassbandAtNyquist]);
        assert_eq!(HIGHPASS_CHECK_ORDER, [Check::PassbandAtNyquist, Check::SignalLength]);
    }

    #[test]
    fn normal_request_is_not_degenerate() {
        assert_eq!(classify(&spec(Direction::Lowpass, 0.3, 100)), None);
        assert_eq!(classify(&spec(Direction::Highpass, 0.3, 100)), None);
        assert_eq!(classify(&spec(Direction::Lowpass, 0.3, 4)), None);
    }

    #[test]
    fn lowpass_short_signal_wins_over_nyquist() {
        assert_eq!(
            classify(&spec(Direction::Lowpass, 1.5, 3)),
            Some(EdgeCase::SignalTooShort)
        );
        assert_eq!(
            classify(&spec(Direction::Lowpass, 1.0, 100)),
            Some(EdgeCase::ForcedAllPass)
        );
    }

    #[test]
    fn highpass_nyquist_wins_over_short_signal() {
        assert_eq!(
            classify(&spec(Direction::Highpass, 1.0, 2)),
            Some(EdgeCase::ForcedAllStop)
        );
        assert_eq!(
            classify(&spec(Direction::Highpass, 0.5, 2)),
            Some(EdgeCase::SignalTooShort)
        );
    }

    #[test]
    fn trivial_filters() {
        assert_eq!(EdgeCase::SignalTooShort.trivial_filter(), TrivialFilter::AllPass);
        assert_eq!(EdgeCase::ForcedAllPass.trivial_filter(), TrivialFilter::AllPass);
        assert_eq!(EdgeCase::ForcedAllStop.trivial_filter(), TrivialFilter::AllStop);
    }

    #[test]
    fn zero_length_is_too_short() {
        assert_eq!(
            classify(&spec(Direction::Lowpass, 0.3, 0)),
            Some(EdgeCase::SignalTooShort)
        );
    }
}
