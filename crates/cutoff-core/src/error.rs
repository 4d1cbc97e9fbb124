//! Error types for design and filtering.

use thiserror::Error;

use crate::validate::ValidationError;

/// Errors that can occur while designing or applying a filter.
///
/// Degenerate requests and length-limited orders are not errors; they are
/// reported through [`crate::Diagnostic`].
#[derive(Debug, Error)]
pub enum Error {
    /// Caller input was rejected before design
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// A forced FIR design needs more taps than the signal has samples
    #[error(
        "FIR order {order} is too large for a signal of {signal_length} samples; \
         use a shorter transition band or impulse response 'auto'/'iir'"
    )]
    FirOrderTooLarge {
        /// Estimated minimum FIR order.
        order: usize,
        /// Samples per column.
        signal_length: usize,
    },

    /// Zero-phase IIR filtering needs more samples for its edge padding
    #[error("signal of {length} samples is too short for zero-phase filtering; need more than {required}")]
    SignalTooShortForFilter {
        /// Samples per column.
        length: usize,
        /// Edge padding length; the signal must be strictly longer.
        required: usize,
    },

    /// Coefficient synthesis failed
    #[error("filter synthesis failed: {0}")]
    Synthesis(String),
}

/// Convenience result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fir_order_display_names_both_numbers() {
        let err = Error::FirOrderTooLarge {
            order: 70,
            signal_length: 50,
        };
        let msg = err.to_string();
        assert!(msg.contains("70"), "got: {msg}");
        assert!(msg.contains("50"), "got: {msg}");
    }

    #[test]
    fn validation_converts() {
        let err: Error = ValidationError::Steepness(1.2).into();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().starts_with("invalid input"));
    }
}
