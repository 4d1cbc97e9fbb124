//! WAV file I/O for the cutoff filtering toolkit.
//!
//! Audio is loaded into a [`SampleMatrix`](cutoff_core::SampleMatrix) with one
//! column per channel, so every channel is filtered independently and the
//! result can be written back with the original layout.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cutoff_core::{FilterOptions, SampleRate, lowpass};
//! use cutoff_io::{read_wav, write_wav};
//!
//! let (audio, spec) = read_wav("input.wav")?;
//! let rate = SampleRate::Hz(f64::from(spec.sample_rate));
//! let out = lowpass(&audio, 8_000.0, rate, &FilterOptions::default())?;
//! write_wav("output.wav", &out.signal, spec)?;
//! ```

mod wav;

pub use wav::{WavFormat, WavInfo, WavSpec, read_wav, read_wav_info, write_wav};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The requested sample format is not supported.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Sample data does not fit the channel layout.
    #[error("Invalid channel layout: {0}")]
    Layout(#[from] cutoff_core::ValidationError),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
