//! # Chart composition
//!
//! Wires the per-series statistics into the structures the rendering
//! collaborator consumes: axis bindings, gradient definitions, marker
//! resolvers, enablement flags and fixed pixel dimensions. Composition is a
//! pure, stateless render computed fresh from the dataset on every call.
//!
//! ## Quick Start
//!
//! ```rust
//! use breakline::{LineChart, sample_page_metrics};
//!
//! let chart = LineChart::compose(sample_page_metrics())?.unwrap();
//! assert_eq!(chart.series.len(), 2);
//! assert_eq!(chart.width, 730.0);
//! # Ok::<(), breakline::ChartError>(())
//! ```

pub mod gradient;
pub mod marker;
pub mod style;
pub mod svg;
pub mod validation;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::data::{DataPoint, Series};
use crate::error::ChartError;
use crate::stats::{BreakingPoint, compute_breaking_point};
use crate::types::{Validate, ValidationResult, WithWarnings};

use gradient::Gradient;
use style::Color;

/// Default chart width in pixels.
pub const DEFAULT_WIDTH: f64 = 730.0;
/// Default chart height in pixels.
pub const DEFAULT_HEIGHT: f64 = 250.0;

/// Fixed margins around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for ChartMargin {
    /// The reference margins: top 5, right 30, left 20, bottom 5.
    fn default() -> Self {
        ChartMargin {
            top: 5.0,
            right: 30.0,
            bottom: 5.0,
            left: 20.0,
        }
    }
}

/// How a line interpolates between points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineType {
    /// Monotone cubic interpolation, the reference line shape.
    Monotone,
    /// Straight segments between points.
    Linear,
}

/// Category axis bound to a field of the data points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAxis {
    /// The data point field supplying the tick labels.
    pub data_key: String,
}

impl Default for CategoryAxis {
    /// Bound to the point name.
    fn default() -> Self {
        CategoryAxis {
            data_key: "name".to_string(),
        }
    }
}

/// Linear value axis; the collaborator derives its domain from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValueAxis;

/// Background grid lines with the reference dash pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLines {
    /// SVG stroke dash pattern.
    pub stroke_dasharray: String,
}

impl Default for GridLines {
    fn default() -> Self {
        GridLines {
            stroke_dasharray: "3 3".to_string(),
        }
    }
}

/// One rendered series: the statistics outcome bound to its visual identity.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLine {
    /// Which data point field this line tracks.
    pub series: Series,
    /// The series base color, used below the breaking point.
    pub base_color: Color,
    /// Line interpolation.
    pub line_type: LineType,
    /// The threshold-split stroke gradient.
    pub gradient: Gradient,
    /// The derived threshold markers compare against.
    pub breaking_point: BreakingPoint,
}

impl SeriesLine {
    /// Composes one series: runs the statistics and builds its gradient.
    ///
    /// The gradient id is derived from the series key (`colorUv`, `colorPv`).
    fn compose(
        data: &[DataPoint],
        series: Series,
        base_color: Color,
    ) -> Result<WithWarnings<SeriesLine>, ChartError> {
        let result = compute_breaking_point(data, series)?;
        let (breaking_point, warnings) = result.into();

        let id = match series {
            Series::UniqueVisitors => "colorUv",
            Series::PageViews => "colorPv",
        };
        let gradient = Gradient::threshold_split(
            id,
            breaking_point.stop,
            Color::over_threshold(),
            base_color.clone(),
        );

        Ok(WithWarnings::new(
            SeriesLine {
                series,
                base_color,
                line_type: LineType::Monotone,
                gradient,
                breaking_point,
            },
            warnings,
        ))
    }

    /// The stroke attribute value referencing this series' gradient.
    pub fn stroke(&self) -> String {
        self.gradient.stroke_reference()
    }
}

/// The composed dual-series line chart handed to the rendering collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    /// Chart width in pixels.
    pub width: f64,
    /// Chart height in pixels.
    pub height: f64,
    /// Margins around the plot area.
    pub margin: ChartMargin,
    /// Category axis on the point name.
    pub category_axis: CategoryAxis,
    /// Linear value axis.
    pub value_axis: ValueAxis,
    /// Grid lines, when enabled.
    pub grid: Option<GridLines>,
    /// Tooltip enablement flag.
    pub tooltip: bool,
    /// Legend enablement flag.
    pub legend: bool,
    /// The dataset the chart was composed from.
    pub data: Vec<DataPoint>,
    /// The two composed series lines.
    pub series: Vec<SeriesLine>,
}

impl LineChart {
    /// Composes the chart from the dataset.
    ///
    /// Runs the statistics for both series and wires the gradients and
    /// breaking points; warnings from both series are merged. Pure and
    /// idempotent: composing the same dataset twice yields identical charts.
    ///
    /// # Errors
    /// - [`ChartError::EmptyDataset`] if the dataset has no points.
    /// - [`ChartError::DegenerateSeries`] if either series is constant.
    pub fn compose(data: Vec<DataPoint>) -> Result<WithWarnings<LineChart>, ChartError> {
        debug!("composing line chart from {} data points", data.len());

        let mut warnings = Vec::new();

        let (uv, uv_warnings) =
            SeriesLine::compose(&data, Series::UniqueVisitors, Color::unique_visitors_base())?
                .into();
        warnings.extend(uv_warnings);

        let (pv, pv_warnings) =
            SeriesLine::compose(&data, Series::PageViews, Color::page_views_base())?.into();
        warnings.extend(pv_warnings);

        let chart = LineChart {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin: ChartMargin::default(),
            category_axis: CategoryAxis::default(),
            value_axis: ValueAxis,
            grid: Some(GridLines::default()),
            tooltip: true,
            legend: true,
            data,
            series: vec![uv, pv],
        };

        Ok(WithWarnings::new(chart, warnings))
    }

    /// Looks up the composed line for a series.
    pub fn series_line(&self, series: Series) -> Option<&SeriesLine> {
        self.series.iter().find(|line| line.series == series)
    }
}

impl Validate for LineChart {
    /// Validates the composed chart before it is handed to the collaborator.
    ///
    /// # Returns
    /// - `Valid(())` if the chart is renderable.
    /// - `Invalid(warnings, errors)` if there are validation issues.
    fn validate(&self) -> ValidationResult {
        validation::validate_chart(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_page_metrics;

    #[test]
    fn test_compose_reference_dataset() {
        let chart = LineChart::compose(sample_page_metrics()).unwrap().unwrap();

        assert_eq!(chart.width, 730.0);
        assert_eq!(chart.height, 250.0);
        assert_eq!(chart.margin, ChartMargin::default());
        assert!(chart.grid.is_some());
        assert!(chart.tooltip);
        assert!(chart.legend);
        assert_eq!(chart.series.len(), 2);
    }

    #[test]
    fn test_series_gradient_ids() {
        let chart = LineChart::compose(sample_page_metrics()).unwrap().unwrap();

        let uv = chart.series_line(Series::UniqueVisitors).unwrap();
        assert_eq!(uv.gradient.id, "colorUv");
        assert_eq!(uv.stroke(), "url(#colorUv)");

        let pv = chart.series_line(Series::PageViews).unwrap();
        assert_eq!(pv.gradient.id, "colorPv");
        assert_eq!(pv.stroke(), "url(#colorPv)");
    }

    #[test]
    fn test_compose_is_idempotent() {
        let first = LineChart::compose(sample_page_metrics()).unwrap().unwrap();
        let second = LineChart::compose(sample_page_metrics()).unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_compose_empty_dataset() {
        let result = LineChart::compose(Vec::new());
        assert!(matches!(result, Err(ChartError::EmptyDataset(_))));
    }

    #[test]
    fn test_compose_reference_dataset_has_no_warnings() {
        let result = LineChart::compose(sample_page_metrics()).unwrap();
        assert!(result.is_ok());
    }

    #[test]
    fn test_composed_chart_validates() {
        let chart = LineChart::compose(sample_page_metrics()).unwrap().unwrap();
        assert!(chart.validate().is_valid());
    }

    #[test]
    fn test_default_margin_values() {
        let margin = ChartMargin::default();
        assert_eq!(margin.top, 5.0);
        assert_eq!(margin.right, 30.0);
        assert_eq!(margin.left, 20.0);
        assert_eq!(margin.bottom, 5.0);
    }
}
