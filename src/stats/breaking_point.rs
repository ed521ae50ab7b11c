//! Breaking-point derivation: the threshold above which points render red.

use log::{debug, warn};

use crate::chart::gradient::StopOffset;
use crate::data::{DataPoint, Series};
use crate::error::ChartError;
use crate::types::WithWarnings;

use super::{ValueRange, extract_values, mean, std_deviation};

/// The derived threshold for one series.
///
/// Computed fresh from the dataset on every composition; never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakingPoint {
    /// The threshold value: mean + population standard deviation.
    pub value: f64,
    /// Position of the gradient color stop within the series value range.
    pub stop: StopOffset,
}

impl BreakingPoint {
    /// True when the given value would render in the over-threshold color.
    ///
    /// The comparison is strict: a point exactly at the threshold keeps the
    /// series base color.
    pub fn exceeded_by(&self, value: f64) -> bool {
        value > self.value
    }
}

/// Computes the breaking point for one series of the dataset.
///
/// The threshold is mean + population standard deviation. The gradient stop
/// offset is `(1 - (threshold - min) / (max - min)) * 100`, expressed in
/// percent from the top of the vertical ramp; offsets falling outside
/// [0, 100] are clamped and reported as a warning.
///
/// # Errors
/// - [`ChartError::EmptyDataset`] if the dataset has no points.
/// - [`ChartError::DegenerateSeries`] if every value in the series is equal,
///   leaving no range to position the stop in.
pub fn compute_breaking_point(
    data: &[DataPoint],
    series: Series,
) -> Result<WithWarnings<BreakingPoint>, ChartError> {
    let values = extract_values(data, series);

    let range = ValueRange::of(&values).ok_or(ChartError::EmptyDataset(series))?;
    if range.is_degenerate() {
        return Err(ChartError::DegenerateSeries {
            series,
            value: range.min,
            count: values.len(),
        });
    }

    let average = mean(&values);
    let deviation = std_deviation(&values, average);
    let value = average + deviation;

    let raw_offset = (1.0 - (value - range.min) / range.delta()) * 100.0;
    let stop = StopOffset::new(raw_offset);

    debug!(
        "series {series}: mean={average}, deviation={deviation}, breaking point={value}, stop={stop}"
    );

    let mut warnings = Vec::new();
    if stop.percent() != raw_offset {
        warn!(
            "series {series}: breaking point {value} lies outside the value range \
             [{}, {}]; stop offset clamped from {raw_offset}% to {stop}",
            range.min, range.max
        );
        warnings.push(format!(
            "Stop offset {}% for series {} clamped to {}.",
            raw_offset, series, stop
        ));
    }

    Ok(WithWarnings::new(BreakingPoint { value, stop }, warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_page_metrics;
    use crate::test_utils::{assert_float_eq, uv_dataset};

    #[test]
    fn test_reference_uv_breaking_point() {
        let data = sample_page_metrics();
        let result = compute_breaking_point(&data, Series::UniqueVisitors).unwrap();
        assert!(result.is_ok());

        // mean 2792.857142857143 + population deviation 716.374095
        let breaking_point = result.unwrap();
        assert_float_eq(breaking_point.value, 3509.231238, 1e-4);
        // (1 - (3509.231238 - 1890) / 2110) * 100
        assert_float_eq(breaking_point.stop.percent(), 23.259182, 1e-4);
    }

    #[test]
    fn test_reference_pv_breaking_point() {
        let data = sample_page_metrics();
        let result = compute_breaking_point(&data, Series::PageViews).unwrap();
        assert!(result.is_ok());

        // mean 4343.714285714286 + population deviation 2476.226716
        let breaking_point = result.unwrap();
        assert_float_eq(breaking_point.value, 6819.941002, 1e-4);
        // (1 - (6819.941002 - 1398) / 8402) * 100
        assert_float_eq(breaking_point.stop.percent(), 35.468460, 1e-4);
    }

    #[test]
    fn test_threshold_comparison_is_strict() {
        let data = sample_page_metrics();
        let breaking_point = compute_breaking_point(&data, Series::PageViews)
            .unwrap()
            .unwrap();

        assert!(breaking_point.exceeded_by(breaking_point.value + 1.0));
        assert!(!breaking_point.exceeded_by(breaking_point.value));
        assert!(!breaking_point.exceeded_by(breaking_point.value - 1.0));
    }

    #[test]
    fn test_idempotence() {
        let data = sample_page_metrics();
        let first = compute_breaking_point(&data, Series::UniqueVisitors).unwrap();
        let second = compute_breaking_point(&data, Series::UniqueVisitors).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let result = compute_breaking_point(&[], Series::UniqueVisitors);
        assert!(matches!(result, Err(ChartError::EmptyDataset(_))));
    }

    #[test]
    fn test_degenerate_series_rejected() {
        let data = uv_dataset(&[5.0, 5.0, 5.0]);
        let result = compute_breaking_point(&data, Series::UniqueVisitors);
        match result {
            Err(ChartError::DegenerateSeries {
                series,
                value,
                count,
            }) => {
                assert_eq!(series, Series::UniqueVisitors);
                assert_eq!(value, 5.0);
                assert_eq!(count, 3);
            }
            other => panic!("Expected DegenerateSeries, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_high_variance_series_clamps_with_warning() {
        // A single low outlier pushes mean + deviation past the maximum
        // (750 + 433 > 1000), placing the raw stop offset below 0%.
        let data = uv_dataset(&[0.0, 1000.0, 1000.0, 1000.0]);
        let result = compute_breaking_point(&data, Series::UniqueVisitors).unwrap();
        assert!(result.is_warning());

        let (breaking_point, warnings) = result.into();
        assert!(breaking_point.value > 1000.0);
        assert_eq!(breaking_point.stop.percent(), 0.0);
        assert!(warnings.iter().any(|w| w.contains("clamped")));
    }
}
