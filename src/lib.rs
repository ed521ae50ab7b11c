//! # breakline — threshold-aware dual-series line chart composition
//!
//! Composes a dual-series line chart that flags data points exceeding a
//! statistically derived "breaking point" (mean + population standard
//! deviation) by rendering them red, via a hard-split gradient stroke and
//! custom point markers.
//!
//! Data flows one way: dataset -> statistics (per series) -> breaking point
//! and gradient stop -> chart composition (gradient definitions and marker
//! resolvers) -> the external rendering collaborator. The collaborator owns
//! the coordinate system; this crate only consumes the screen coordinates it
//! supplies.
//!
//! ## Quick Start
//!
//! ```rust
//! use breakline::{LineChart, Series, sample_page_metrics};
//!
//! let chart = LineChart::compose(sample_page_metrics())?.unwrap();
//!
//! let pv = chart.series_line(Series::PageViews).unwrap();
//! // Only "Page C" (pv = 9800) exceeds the page views breaking point.
//! assert!(pv.breaking_point.exceeded_by(9800.0));
//! assert!(!pv.breaking_point.exceeded_by(4800.0));
//! # Ok::<(), breakline::ChartError>(())
//! ```
//!
//! ## Error Handling
//!
//! Composition returns `Result<WithWarnings<LineChart>, ChartError>`: an
//! empty dataset or a constant series is rejected with a typed error before
//! anything reaches the rendering collaborator, and gradient stop offsets
//! clamped into [0, 100] are reported as warnings.

// Dataset model.
pub mod data;

// Descriptive statistics and breaking-point derivation.
pub mod stats;

// Chart composition, gradients, markers and SVG output.
pub mod chart;

// Error types.
pub mod error;

// Validation and warning carriers.
pub mod types;

// Shared test helpers.
#[cfg(test)]
mod test_utils;

pub use crate::chart::gradient::{Gradient, GradientStop, StopOffset};
pub use crate::chart::marker::{ActiveDotMarker, DotMarker, MarkerPoint};
pub use crate::chart::style::{Color, PredefinedColor};
pub use crate::chart::{ChartMargin, LineChart, LineType, SeriesLine};
pub use crate::data::{DataPoint, Series, sample_page_metrics};
pub use crate::error::ChartError;
pub use crate::stats::{BreakingPoint, compute_breaking_point};
