//! # Descriptive statistics for threshold-aware rendering
//!
//! Pure functions computing, for a chosen series across the dataset, the
//! extrema, arithmetic mean, population standard deviation, and the derived
//! breaking point (mean + standard deviation) together with the gradient
//! stop position of that threshold within the value range.
//!
//! ## Quick Start
//!
//! ```rust
//! use breakline::{Series, sample_page_metrics};
//! use breakline::stats::compute_breaking_point;
//!
//! let data = sample_page_metrics();
//! let result = compute_breaking_point(&data, Series::UniqueVisitors)?;
//! let breaking_point = result.unwrap();
//! assert!(breaking_point.value > 3490.0);
//! # Ok::<(), breakline::ChartError>(())
//! ```

pub mod breaking_point;
pub mod validation;

use itertools::Itertools;
use itertools::MinMaxResult;

use crate::data::{DataPoint, Series};
use crate::types::{Validate, ValidationResult};

pub use breaking_point::{BreakingPoint, compute_breaking_point};

/// Projects the chosen series field from every point, preserving order.
///
/// No filtering is applied; an empty dataset yields an empty vector and is
/// rejected downstream by [`compute_breaking_point`].
pub fn extract_values(data: &[DataPoint], series: Series) -> Vec<f64> {
    data.iter().map(|point| point.value(series)).collect()
}

/// Arithmetic mean. Defined for non-empty sequences only.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation: the square root of the average squared
/// deviation from the mean (denominator is the count, not count - 1).
pub fn std_deviation(values: &[f64], mean: f64) -> f64 {
    let sum = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>();

    (sum / values.len() as f64).sqrt()
}

/// The (min, max) range of a series' values.
///
/// Used to position the gradient color stop within the rendered value axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    /// The smallest value in the series.
    pub min: f64,
    /// The largest value in the series.
    pub max: f64,
}

impl ValueRange {
    /// Creates a new range with the given min and max values.
    pub fn new(min: f64, max: f64) -> Self {
        ValueRange { min, max }
    }

    /// Computes the range of a non-empty value sequence.
    ///
    /// # Returns
    /// `None` if the sequence is empty.
    pub fn of(values: &[f64]) -> Option<Self> {
        match values.iter().copied().minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(value) => Some(ValueRange::new(value, value)),
            MinMaxResult::MinMax(min, max) => Some(ValueRange::new(min, max)),
        }
    }

    /// Returns the difference between max and min values.
    pub fn delta(&self) -> f64 {
        self.max - self.min
    }

    /// True when all values in the range are equal (zero delta).
    pub fn is_degenerate(&self) -> bool {
        self.delta() == 0.0
    }
}

impl From<(f64, f64)> for ValueRange {
    /// Converts a tuple (min, max) into a range.
    fn from(range: (f64, f64)) -> Self {
        ValueRange {
            min: range.0,
            max: range.1,
        }
    }
}

impl Validate for ValueRange {
    /// Validates the range bounds.
    ///
    /// # Returns
    /// - `Valid(())` if the range is well-formed.
    /// - `Invalid(warnings, errors)` if there are validation issues.
    fn validate(&self) -> ValidationResult {
        validation::validate_range(self)
    }
}
