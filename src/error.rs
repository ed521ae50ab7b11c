//! Error types for chart composition and SVG serialization.

use thiserror::Error;

use crate::data::Series;

/// Errors surfaced before anything reaches the rendering collaborator.
///
/// The statistics are undefined for an empty dataset, and a constant series
/// has no meaningful threshold split, so both are rejected up front rather
/// than letting a non-finite gradient stop leak into the output.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The dataset contains no points; no statistics can be computed.
    #[error("dataset is empty: statistics are undefined for series {0}")]
    EmptyDataset(Series),

    /// All values in the series are equal, so the value range is zero and
    /// no gradient stop position exists.
    #[error("series {series} is degenerate: all {count} values equal {value}")]
    DegenerateSeries {
        series: Series,
        value: f64,
        count: usize,
    },

    /// The composed chart failed validation.
    #[error("chart validation failed: {}", errors.join("; "))]
    Validation {
        warnings: Vec<String>,
        errors: Vec<String>,
    },

    /// IO error while writing SVG output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The serialized SVG buffer was not valid UTF-8.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// XML-level serialization error from the SVG writer.
    #[error("SVG serialization error: {0}")]
    Xml(#[from] quick_xml::Error),
}

impl ChartError {
    /// Builds a validation error from collected warnings and errors.
    pub fn from_validation(warnings: Vec<String>, errors: Vec<String>) -> Self {
        ChartError::Validation { warnings, errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset_display() {
        let err = ChartError::EmptyDataset(Series::PageViews);
        assert!(err.to_string().contains("dataset is empty"));
        assert!(err.to_string().contains("pv"));
    }

    #[test]
    fn test_degenerate_series_display() {
        let err = ChartError::DegenerateSeries {
            series: Series::UniqueVisitors,
            value: 5.0,
            count: 3,
        };
        let message = err.to_string();
        assert!(message.contains("degenerate"));
        assert!(message.contains("5"));
    }

    #[test]
    fn test_validation_display_joins_errors() {
        let err = ChartError::from_validation(
            Vec::new(),
            vec!["first".to_string(), "second".to_string()],
        );
        assert_eq!(
            err.to_string(),
            "chart validation failed: first; second"
        );
    }
}
