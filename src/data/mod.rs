//! # Chart dataset model
//!
//! The dataset is a fixed, immutable sequence of named samples. Each sample
//! carries two tracked series values (unique visitors and page views) and an
//! auxiliary amount that is recorded but not charted.
//!
//! ## Quick Start
//!
//! ```rust
//! use breakline::{DataPoint, Series, sample_page_metrics};
//!
//! let data = sample_page_metrics();
//! assert_eq!(data.len(), 7);
//! assert_eq!(data[0].value(Series::UniqueVisitors), 4000.0);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single named sample in the chart dataset.
///
/// Immutable once constructed; the chart composition never mutates points,
/// it only projects values out of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Category label rendered on the x-axis (e.g., "Page A").
    pub name: String,
    /// Unique visitors series value.
    pub uv: f64,
    /// Page views series value.
    pub pv: f64,
    /// Auxiliary amount; recorded in the dataset but not charted.
    pub amt: f64,
}

impl DataPoint {
    /// Creates a new data point.
    pub fn new<S: Into<String>>(name: S, uv: f64, pv: f64, amt: f64) -> Self {
        DataPoint {
            name: name.into(),
            uv,
            pv,
            amt,
        }
    }

    /// Projects the value for the chosen series.
    pub fn value(&self, series: Series) -> f64 {
        match series {
            Series::UniqueVisitors => self.uv,
            Series::PageViews => self.pv,
        }
    }
}

/// Selector for one of the two tracked series.
///
/// Not a stored entity: it identifies which field of [`DataPoint`] the
/// statistics and gradients operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Series {
    /// The `uv` field.
    UniqueVisitors,
    /// The `pv` field.
    PageViews,
}

impl Series {
    /// Short key for the series, matching the dataset field name. Used as
    /// the data key in axis bindings and in gradient identifiers.
    pub fn key(&self) -> &'static str {
        match self {
            Series::UniqueVisitors => "uv",
            Series::PageViews => "pv",
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Error)]
pub enum SeriesParseError {
    /// Error when parsing an invalid series key.
    #[error("Invalid series key: {0}")]
    InvalidValue(String),
}

impl FromStr for Series {
    type Err = SeriesParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uv" => Ok(Series::UniqueVisitors),
            "pv" => Ok(Series::PageViews),
            _ => Err(SeriesParseError::InvalidValue(s.to_string())),
        }
    }
}

/// The reference dataset: seven page-analytics samples.
///
/// This is the fixed instance the crate was built around; tests and the
/// bench harness use it as the canonical input.
pub fn sample_page_metrics() -> Vec<DataPoint> {
    vec![
        DataPoint::new("Page A", 4000.0, 2400.0, 2400.0),
        DataPoint::new("Page B", 3000.0, 1398.0, 2210.0),
        DataPoint::new("Page C", 2000.0, 9800.0, 2290.0),
        DataPoint::new("Page D", 2780.0, 3908.0, 2000.0),
        DataPoint::new("Page E", 1890.0, 4800.0, 2181.0),
        DataPoint::new("Page F", 2390.0, 3800.0, 2500.0),
        DataPoint::new("Page G", 3490.0, 4300.0, 2100.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_projection() {
        let point = DataPoint::new("Page A", 4000.0, 2400.0, 2400.0);
        assert_eq!(point.value(Series::UniqueVisitors), 4000.0);
        assert_eq!(point.value(Series::PageViews), 2400.0);
    }

    #[test]
    fn test_sample_dataset_shape() {
        let data = sample_page_metrics();
        assert_eq!(data.len(), 7);
        assert_eq!(data[2].name, "Page C");
        assert_eq!(data[2].pv, 9800.0);
    }

    #[test]
    fn test_series_key_round_trip() {
        assert_eq!(Series::UniqueVisitors.key(), "uv");
        assert_eq!("pv".parse::<Series>().unwrap(), Series::PageViews);
        assert!("amt".parse::<Series>().is_err());
    }

    #[test]
    fn test_series_display() {
        assert_eq!(format!("{}", Series::UniqueVisitors), "uv");
        assert_eq!(format!("{}", Series::PageViews), "pv");
    }
}
