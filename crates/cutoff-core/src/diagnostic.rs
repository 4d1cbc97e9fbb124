//! Advisory diagnostics returned alongside a design.
//!
//! Every degradation path (trivial filter substitution, length-driven order
//! reduction) yields exactly one [`Diagnostic`]. Callers decide whether to
//! log, ignore, or escalate it.

use core::fmt;

/// Stable identifier of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// Signal has too few samples to filter; an all-pass filter was used.
    SignalTooShort,
    /// Lowpass edge at or beyond Nyquist; an all-pass filter was used.
    ForcedAllPass,
    /// Highpass edge at or beyond Nyquist; an all-stop filter was used.
    ForcedAllStop,
    /// IIR order was reduced to fit the signal length.
    OrderLimitedBySignalLength,
}

impl DiagnosticCode {
    /// Machine-readable code.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::SignalTooShort => "signal-too-short",
            DiagnosticCode::ForcedAllPass => "forced-all-pass",
            DiagnosticCode::ForcedAllStop => "forced-all-stop",
            DiagnosticCode::OrderLimitedBySignalLength => "order-limited-by-signal-length",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A diagnostic code with its human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Stable identifier.
    pub code: DiagnosticCode,
    /// Explanation for people.
    pub message: String,
}

impl Diagnostic {
    /// Signal too short to filter.
    pub fn signal_too_short(signal_length: usize) -> Self {
        Self {
            code: DiagnosticCode::SignalTooShort,
            message: format!(
                "signal too short ({signal_length} samples); returning the input unfiltered"
            ),
        }
    }

    /// Lowpass request covering the whole band.
    pub fn forced_all_pass() -> Self {
        Self {
            code: DiagnosticCode::ForcedAllPass,
            message: "forced all-pass: passband frequency is at or above Nyquist".to_string(),
        }
    }

    /// Highpass request covering nothing.
    pub fn forced_all_stop() -> Self {
        Self {
            code: DiagnosticCode::ForcedAllStop,
            message: "forced all-stop: passband frequency is at or above Nyquist".to_string(),
        }
    }

    /// IIR order reduced from `minimum_order` to `order`.
    pub fn order_limited(minimum_order: usize, order: usize, signal_length: usize) -> Self {
        Self {
            code: DiagnosticCode::OrderLimitedBySignalLength,
            message: format!(
                "filter order limited by signal length: {signal_length} samples support order \
                 {order}, below the minimum order {minimum_order} that meets the attenuation target"
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}
