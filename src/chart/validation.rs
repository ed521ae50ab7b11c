//! Validation of composed charts.

use crate::stats::validation::{_chain, _return, validate_values};
use crate::stats::extract_values;
use crate::types::ValidationResult;

use super::LineChart;

pub fn validate_chart(chart: &LineChart) -> ValidationResult {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    let w = &mut warnings;
    let e = &mut errors;

    _chain(validate_dimensions(chart.width, chart.height), w, e);

    if chart.data.is_empty() {
        e.push("Chart has no data points.".to_string());
    }

    if chart.series.is_empty() {
        e.push("Chart has no series lines.".to_string());
    }

    for line in &chart.series {
        let values = extract_values(&chart.data, line.series);
        _chain(validate_values(&values), w, e);

        if line.gradient.stops.len() != 4 {
            e.push(format!(
                "Series {} gradient must have exactly 4 stops, found {}.",
                line.series,
                line.gradient.stops.len()
            ));
        }

        if !line.breaking_point.value.is_finite() {
            e.push(format!(
                "Series {} breaking point is not a valid number: {}",
                line.series, line.breaking_point.value
            ));
        }
    }

    _return(warnings, errors)
}

fn validate_dimensions(width: f64, height: f64) -> ValidationResult {
    let warnings = Vec::new();
    let mut errors = Vec::new();

    if !(width.is_finite() && width > 0.0) {
        errors.push(format!("Chart width must be positive, found {}.", width));
    }

    if !(height.is_finite() && height > 0.0) {
        errors.push(format!("Chart height must be positive, found {}.", height));
    }

    _return(warnings, errors)
}
