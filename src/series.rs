//! Series data snapshot and boundary validation.
//!
//! A [`SeriesData`] value is the immutable per-render snapshot of the shared
//! time axis and every value series drawn over it. Validation happens once,
//! at construction; the rest of the crate assumes the invariants hold.

use thiserror::Error;

use crate::render::Color;

/// Errors rejected at the data-ingestion boundary.
///
/// The chart never partially ingests data: any of these leaves the previous
/// snapshot untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeriesDataError {
    /// Fewer than two timestamps were provided.
    #[error("invalid series data: at least 2 samples required, got {0}")]
    TooFewSamples(usize),
    /// Timestamps are not strictly increasing.
    #[error("invalid series data: timestamps must be strictly increasing")]
    NonMonotonicTimestamps,
    /// A series length differs from the timestamp length.
    #[error("invalid series data: series {index} has {got} values, expected {expected}")]
    MismatchedSeriesLength {
        /// Index of the offending series.
        index: usize,
        /// Number of values in the series.
        got: usize,
        /// Expected number of values (timestamp count).
        expected: usize,
    },
}

/// One named, colored sequence of counts sharing the chart's time axis.
#[derive(Debug, Clone)]
pub struct Series {
    name: String,
    color: Color,
    values: Vec<u64>,
}

impl Series {
    /// Create a series from a name, color, and values.
    pub fn new(name: impl Into<String>, color: Color, values: Vec<u64>) -> Self {
        Self {
            name: name.into(),
            color,
            values,
        }
    }

    /// Access the series name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Access the series color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Access the sample values.
    pub fn values(&self) -> &[u64] {
        &self.values
    }
}

/// Immutable snapshot of the time axis and all value series.
///
/// Index `i` in every series refers to the instant `timestamps[i]`.
#[derive(Debug, Clone)]
pub struct SeriesData {
    timestamps: Vec<i64>,
    series: Vec<Series>,
}

impl SeriesData {
    /// Validate and construct a snapshot.
    ///
    /// Rejects fewer than two timestamps, non-increasing timestamps, and any
    /// series whose length differs from the timestamp length.
    pub fn new(timestamps: Vec<i64>, series: Vec<Series>) -> Result<Self, SeriesDataError> {
        let len = timestamps.len();
        if len < 2 {
            return Err(SeriesDataError::TooFewSamples(len));
        }
        if timestamps.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(SeriesDataError::NonMonotonicTimestamps);
        }
        for (index, entry) in series.iter().enumerate() {
            if entry.values().len() != len {
                return Err(SeriesDataError::MismatchedSeriesLength {
                    index,
                    got: entry.values().len(),
                    expected: len,
                });
            }
        }
        Ok(Self { timestamps, series })
    }

    /// Number of samples on the time axis.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Always false: construction requires at least two samples.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Access the shared timestamp axis (epoch milliseconds).
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// Access all series.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Maximum sample value across every series.
    pub fn global_max(&self) -> u64 {
        self.series
            .iter()
            .flat_map(|entry| entry.values().iter().copied())
            .max()
            .unwrap_or(0)
    }
}
