#![cfg(test)]

use crate::data::DataPoint;

// Helper function to assert floating point equality with tolerance
pub fn assert_float_eq(a: f64, b: f64, tolerance: f64) {
    assert!(
        (a - b).abs() < tolerance,
        "Expected {} to be approximately equal to {} (tolerance: {})",
        a,
        b,
        tolerance
    );
}

/// Build a dataset where only the uv series carries the given values; the
/// other fields stay benign so tests can target one series at a time.
pub fn uv_dataset(values: &[f64]) -> Vec<DataPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &uv)| DataPoint::new(format!("Page {}", i), uv, (i + 1) as f64, 0.0))
        .collect()
}
