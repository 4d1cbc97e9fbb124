//! Data shapes accepted by the zero-phase filtering path.
//!
//! Every shape is a set of independent columns of equal length:
//!
//! - `Vec<T>`: a single column
//! - [`SampleMatrix`]: column-major matrix, one column per channel
//! - [`TimeSeries`]: uniformly sampled time vector plus named variables
//!
//! Columns never interact, so with the `parallel` feature enabled they are
//! filtered on the rayon thread pool. The arithmetic inside one column is
//! unchanged, so results are bit-identical to the sequential path.

use crate::error::Result;
use crate::sample::Sample;
use crate::validate::ValidationError;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Relative tolerance on the time step when checking uniform sampling.
pub const TIME_STEP_TOLERANCE: f64 = 1e-6;

/// A filterable data shape.
pub trait Signal: Sized {
    /// Element type.
    type Sample: Sample;

    /// Samples per column.
    fn signal_length(&self) -> usize;

    /// Sampling rate carried by the data itself, if any.
    fn implied_sample_rate(&self) -> Option<f64> {
        None
    }

    /// Apply `f` to every column, producing a value of the same shape.
    ///
    /// Fails with the first column error; no partial output is returned.
    fn try_map_columns<F>(&self, f: F) -> Result<Self>
    where
        F: Fn(&[Self::Sample]) -> Result<Vec<Self::Sample>> + Sync + Send;
}

impl<T: Sample> Signal for Vec<T> {
    type Sample = T;

    fn signal_length(&self) -> usize {
        self.len()
    }

    fn try_map_columns<F>(&self, f: F) -> Result<Self>
    where
        F: Fn(&[T]) -> Result<Vec<T>> + Sync + Send,
    {
        f(self)
    }
}

/// Column-major matrix of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Sample> SampleMatrix<T> {
    /// Matrix from equal-length columns.
    pub fn from_columns(columns: Vec<Vec<T>>) -> std::result::Result<Self, ValidationError> {
        let rows = columns.first().map_or(0, Vec::len);
        if let Some((column, c)) = columns.iter().enumerate().find(|(_, c)| c.len() != rows) {
            return Err(ValidationError::RaggedColumns {
                column,
                expected: rows,
                found: c.len(),
            });
        }
        let cols = columns.len();
        Ok(Self {
            rows,
            cols,
            data: columns.into_iter().flatten().collect(),
        })
    }

    /// Matrix from interleaved frames (`[c0, c1, c0, c1, ...]`).
    pub fn from_interleaved(
        samples: &[T],
        cols: usize,
    ) -> std::result::Result<Self, ValidationError> {
        if cols == 0 {
            return Ok(Self {
                rows: 0,
                cols: 0,
                data: Vec::new(),
            });
        }
        if samples.len() % cols != 0 {
            return Err(ValidationError::RaggedColumns {
                column: samples.len() % cols,
                expected: samples.len().div_ceil(cols),
                found: samples.len() / cols,
            });
        }
        let rows = samples.len() / cols;
        let mut data = Vec::with_capacity(samples.len());
        for c in 0..cols {
            data.extend(samples.iter().skip(c).step_by(cols).copied());
        }
        Ok(Self { rows, cols, data })
    }

    /// Samples per column.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Column `index`, or `None` when out of range.
    pub fn column(&self, index: usize) -> Option<&[T]> {
        (index < self.cols).then(|| &self.data[index * self.rows..(index + 1) * self.rows])
    }

    /// Iterate over columns.
    pub fn columns(&self) -> impl Iterator<Item = &[T]> {
        (0..self.cols).map(move |c| &self.data[c * self.rows..(c + 1) * self.rows])
    }

    /// Interleaved frames (`[c0, c1, c0, c1, ...]`).
    pub fn to_interleaved(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        for r in 0..self.rows {
            for c in 0..self.cols {
                out.push(self.data[c * self.rows + r]);
            }
        }
        out
    }

    /// Consume into owned columns.
    pub fn into_columns(self) -> Vec<Vec<T>> {
        if self.rows == 0 {
            return vec![Vec::new(); self.cols];
        }
        self.data.chunks(self.rows).map(<[T]>::to_vec).collect()
    }

    fn map_columns<F>(&self, f: F) -> Result<Self>
    where
        F: Fn(&[T]) -> Result<Vec<T>> + Sync + Send,
    {
        if self.rows == 0 || self.cols == 0 {
            return Ok(self.clone());
        }

        #[cfg(feature = "parallel")]
        let columns: Vec<Vec<T>> = self
            .data
            .par_chunks(self.rows)
            .map(&f)
            .collect::<Result<_>>()?;

        #[cfg(not(feature = "parallel"))]
        let columns: Vec<Vec<T>> = self
            .data
            .chunks(self.rows)
            .map(&f)
            .collect::<Result<_>>()?;

        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data: columns.into_iter().flatten().collect(),
        })
    }
}

impl<T: Sample> Signal for SampleMatrix<T> {
    type Sample = T;

    fn signal_length(&self) -> usize {
        self.rows
    }

    fn try_map_columns<F>(&self, f: F) -> Result<Self>
    where
        F: Fn(&[T]) -> Result<Vec<T>> + Sync + Send,
    {
        self.map_columns(f)
    }
}

/// Uniformly sampled time series with named variables.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries<T> {
    times: Vec<f64>,
    names: Vec<String>,
    values: SampleMatrix<T>,
}

impl<T: Sample> TimeSeries<T> {
    /// Build from sample times (seconds) and `(name, values)` pairs.
    ///
    /// Times must be strictly increasing with a constant step.
    pub fn from_times(
        times: Vec<f64>,
        variables: Vec<(String, Vec<T>)>,
    ) -> std::result::Result<Self, ValidationError> {
        check_uniform(&times)?;
        if let Some((name, v)) = variables.iter().find(|(_, v)| v.len() != times.len()) {
            return Err(ValidationError::TimeLengthMismatch {
                variable: name.clone(),
                times: times.len(),
                samples: v.len(),
            });
        }
        let (names, columns): (Vec<_>, Vec<_>) = variables.into_iter().unzip();
        let values = SampleMatrix::from_columns(columns)?;
        let values = if values.cols() == 0 {
            SampleMatrix {
                rows: times.len(),
                cols: 0,
                data: Vec::new(),
            }
        } else {
            values
        };
        Ok(Self {
            times,
            names,
            values,
        })
    }

    /// Sample times in seconds.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Variable names in column order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Values of the named variable.
    pub fn variable(&self, name: &str) -> Option<&[T]> {
        let index = self.names.iter().position(|n| n == name)?;
        self.values.column(index)
    }

    /// Underlying value matrix.
    pub fn values(&self) -> &SampleMatrix<T> {
        &self.values
    }

    /// Sampling rate implied by the time step.
    pub fn sample_rate(&self) -> f64 {
        let step = (self.times[self.times.len() - 1] - self.times[0]) / (self.times.len() - 1) as f64;
        1.0 / step
    }
}

fn check_uniform(times: &[f64]) -> std::result::Result<(), ValidationError> {
    if times.len() < 2 {
        return Err(ValidationError::TooFewTimes(times.len()));
    }
    if let Some(index) = times
        .windows(2)
        .position(|w| !(w[1].is_finite() && w[0].is_finite() && w[1] > w[0]))
    {
        return Err(ValidationError::NonIncreasingTimes { index: index + 1 });
    }
    let step = (times[times.len() - 1] - times[0]) / (times.len() - 1) as f64;
    if let Some(index) = times
        .windows(2)
        .position(|w| ((w[1] - w[0]) - step).abs() > TIME_STEP_TOLERANCE * step)
    {
        return Err(ValidationError::NonUniformTimes { index: index + 1 });
    }
    Ok(())
}

impl<T: Sample> Signal for TimeSeries<T> {
    type Sample = T;

    fn signal_length(&self) -> usize {
        self.times.len()
    }

    fn implied_sample_rate(&self) -> Option<f64> {
        Some(self.sample_rate())
    }

    fn try_map_columns<F>(&self, f: F) -> Result<Self>
    where
        F: Fn(&[T]) -> Result<Vec<T>> + Sync + Send,
    {
        Ok(Self {
            times: self.times.clone(),
            names: self.names.clone(),
            values: self.values.map_columns(f)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_from_columns() {
        let m = SampleMatrix::from_columns(vec![vec![1.0_f64, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
            .unwrap();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.column(1), Some(&[4.0, 5.0, 6.0][..]));
        assert_eq!(m.column(2), None);
        assert_eq!(m.to_interleaved(), vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn ragged_columns_rejected() {
        let err = SampleMatrix::from_columns(vec![vec![1.0_f32, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::RaggedColumns {
                column: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn interleaved_round_trip() {
        let frames = [0.1_f32, -0.1, 0.2, -0.2, 0.3, -0.3];
        let m = SampleMatrix::from_interleaved(&frames, 2).unwrap();
        assert_eq!(m.column(0), Some(&[0.1, 0.2, 0.3][..]));
        assert_eq!(m.to_interleaved(), frames.to_vec());
        assert!(SampleMatrix::from_interleaved(&frames[..5], 2).is_err());
    }

    #[test]
    fn map_columns_preserves_shape() {
        let m = SampleMatrix::from_columns(vec![vec![1.0_f64, 2.0], vec![3.0, 4.0]]).unwrap();
        let doubled = m
            .try_map_columns(|c| Ok(c.iter().map(|x| x * 2.0).collect()))
            .unwrap();
        assert_eq!(doubled.into_columns(), vec![vec![2.0, 4.0], vec![6.0, 8.0]]);
    }

    #[test]
    fn time_series_rate_and_lookup() {
        let times: Vec<f64> = (0..5).map(|i| i as f64 * 0.001).collect();
        let ts = TimeSeries::from_times(times, vec![("x".into(), vec![0.0_f64; 5])]).unwrap();
        assert!((ts.sample_rate() - 1000.0).abs() < 1e-9);
        assert_eq!(ts.implied_sample_rate().map(f64::round), Some(1000.0));
        assert_eq!(ts.variable("x").map(<[f64]>::len), Some(5));
        assert!(ts.variable("y").is_none());
    }

    #[test]
    fn irregular_times_rejected() {
        let err = TimeSeries::<f64>::from_times(vec![0.0, 1.0, 1.0, 2.0], vec![]).unwrap_err();
        assert_eq!(err, ValidationError::NonIncreasingTimes { index: 2 });

        let err = TimeSeries::<f64>::from_times(vec![0.0, 1.0, 2.5, 3.0], vec![]).unwrap_err();
        assert_eq!(err, ValidationError::NonUniformTimes { index: 2 });

        let err = TimeSeries::<f64>::from_times(vec![0.0], vec![]).unwrap_err();
        assert_eq!(err, ValidationError::TooFewTimes(1));
    }

    #[test]
    fn variable_length_must_match_times() {
        let err = TimeSeries::from_times(vec![0.0, 1.0, 2.0], vec![("v".into(), vec![1.0_f32])])
            .unwrap_err();
        assert!(matches!(err, ValidationError::TimeLengthMismatch { .. }));
    }
}
