//! WAV file reading and writing.

use crate::{Error, Result};
use cutoff_core::SampleMatrix;
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let num_frames = u64::from(reader.duration());
    let duration_secs = num_frames as f64 / f64::from(spec.sample_rate);

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        format: WavFormat::from(spec.sample_format),
    })
}

impl From<SampleFormat> for WavFormat {
    fn from(format: SampleFormat) -> Self {
        match format {
            SampleFormat::Float => WavFormat::IeeeFloat,
            SampleFormat::Int => WavFormat::Pcm,
        }
    }
}

/// WAV file specification.
///
/// 32-bit files are written as IEEE float, 16- and 24-bit as PCM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Bit depth per sample (16, 24 or 32).
    pub bits_per_sample: u16,
}

impl Default for WavSpec {
    fn default() -> Self {
        Self {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 32,
        }
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: if spec.bits_per_sample == 32 {
                SampleFormat::Float
            } else {
                SampleFormat::Int
            },
        }
    }
}

/// Full-scale value of a signed PCM sample with `bits` bits.
fn full_scale(bits: u16) -> f32 {
    2f32.powi(i32::from(bits) - 1)
}

/// Read a WAV file into a matrix with one column per channel.
///
/// Integer PCM is scaled to `[-1, 1)`.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(SampleMatrix<f32>, WavSpec)> {
    let reader = WavReader::open(path)?;
    let hound_spec = reader.spec();
    let spec = WavSpec::from(hound_spec);

    let interleaved: Vec<f32> = match hound_spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let scale = full_scale(spec.bits_per_sample);
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let audio = SampleMatrix::from_interleaved(&interleaved, usize::from(spec.channels))?;
    tracing::debug!(
        channels = spec.channels,
        frames = audio.rows(),
        sample_rate = spec.sample_rate,
        "read wav"
    );
    Ok((audio, spec))
}

/// Write a matrix to a WAV file, one channel per column.
///
/// The channel count comes from the matrix; `spec.channels` is ignored.
/// Integer output is clipped to full scale.
pub fn write_wav<P: AsRef<Path>>(
    path: P,
    audio: &SampleMatrix<f32>,
    spec: WavSpec,
) -> Result<()> {
    if !matches!(spec.bits_per_sample, 16 | 24 | 32) {
        return Err(Error::UnsupportedFormat(format!(
            "{}-bit output (expected 16, 24 or 32)",
            spec.bits_per_sample
        )));
    }
    let channels = u16::try_from(audio.cols())
        .ok()
        .filter(|&c| c > 0)
        .ok_or_else(|| Error::UnsupportedFormat(format!("{} channels", audio.cols())))?;

    let spec = WavSpec { channels, ..spec };
    let mut writer = WavWriter::create(path, hound::WavSpec::from(spec))?;
    let frames = audio.to_interleaved();

    if spec.bits_per_sample == 32 {
        for &sample in &frames {
            writer.write_sample(sample)?;
        }
    } else {
        let max_val = full_scale(spec.bits_per_sample);
        for &sample in &frames {
            let int_sample = (sample * max_val).clamp(-max_val, max_val - 1.0) as i32;
            writer.write_sample(int_sample)?;
        }
    }

    writer.finalize()?;
    tracing::debug!(channels, frames = audio.rows(), "wrote wav");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn mono(samples: Vec<f32>) -> SampleMatrix<f32> {
        SampleMatrix::from_columns(vec![samples]).unwrap()
    }

    #[test]
    fn test_roundtrip_f32() {
        let samples: Vec<f32> = (0..1000).map(|i| (i as f32 / 1000.0).sin()).collect();
        let spec = WavSpec {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 32,
        };

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &mono(samples.clone()), spec).unwrap();

        let (loaded, loaded_spec) = read_wav(file.path()).unwrap();
        assert_eq!(loaded_spec.sample_rate, 48000);
        assert_eq!(loaded.column(0).unwrap(), samples.as_slice());
    }

    #[test]
    fn test_roundtrip_i16() {
        let samples: Vec<f32> = (0..1000).map(|i| (i as f32 / 1000.0).sin() * 0.9).collect();
        let spec = WavSpec {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 16,
        };

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &mono(samples.clone()), spec).unwrap();

        let (loaded, _) = read_wav(file.path()).unwrap();
        assert_eq!(loaded.rows(), samples.len());
        for (a, b) in samples.iter().zip(loaded.column(0).unwrap()) {
            assert!((a - b).abs() < 0.001);
        }
    }

    #[test]
    fn test_clips_out_of_range_pcm() {
        let spec = WavSpec {
            bits_per_sample: 16,
            ..WavSpec::default()
        };
        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &mono(vec![2.0, -2.0]), spec).unwrap();

        let (loaded, _) = read_wav(file.path()).unwrap();
        let col = loaded.column(0).unwrap();
        assert!((col[0] - 32767.0 / 32768.0).abs() < 1e-6);
        assert_eq!(col[1], -1.0);
    }

    #[test]
    fn test_rejects_8_bit_output() {
        let spec = WavSpec {
            bits_per_sample: 8,
            ..WavSpec::default()
        };
        let file = NamedTempFile::new().unwrap();
        let err = write_wav(file.path(), &mono(vec![0.0]), spec).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_rejects_zero_channels() {
        let empty = SampleMatrix::<f32>::from_columns(Vec::new()).unwrap();
        let file = NamedTempFile::new().unwrap();
        let err = write_wav(file.path(), &empty, WavSpec::default()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }
}
