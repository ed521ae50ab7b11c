//! Gradient construction for threshold-aware series strokes.
//!
//! Each series is stroked with a vertical color ramp whose stops produce a
//! hard color split at the breaking-point offset: everything above the split
//! renders in the over-threshold color, everything below in the series base
//! color. There is no blending; the split is achieved by doubling the stop
//! at the breaking-point offset.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::style::Color;

/// Position of a color stop along the ramp, in percent from the top.
///
/// Construction clamps to [0, 100]: a breaking point outside the value range
/// must not produce an offset the collaborator cannot place. [`fmt::Display`]
/// yields the `"<value>%"` form SVG stop offsets use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StopOffset(f64);

impl StopOffset {
    /// Creates a stop offset, clamping the raw percentage into [0, 100].
    pub fn new(percent: f64) -> Self {
        StopOffset(percent.clamp(0.0, 100.0))
    }

    /// The ramp start (0%).
    pub fn start() -> Self {
        StopOffset(0.0)
    }

    /// The ramp end (100%).
    pub fn end() -> Self {
        StopOffset(100.0)
    }

    /// The clamped percentage value.
    pub fn percent(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for StopOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// One color stop of a linear gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the ramp.
    pub offset: StopOffset,
    /// Stop color.
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: StopOffset, color: Color) -> Self {
        GradientStop { offset, color }
    }
}

/// A vertical linear gradient referenced by a series stroke.
///
/// The ramp is rotated 90 degrees so offset 0% sits at the top of the chart
/// and 100% at the bottom, matching the value axis orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    /// Identifier the series stroke references (`url(#id)`).
    pub id: String,
    /// Ordered color stops.
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// Builds the four-stop hard split at the breaking-point offset.
    ///
    /// Stops at 0% and `split` carry the over-threshold color; stops at
    /// `split` and 100% carry the base color. Doubling the split offset
    /// makes the transition a hard edge instead of a blend.
    pub fn threshold_split<S: Into<String>>(
        id: S,
        split: StopOffset,
        over: Color,
        base: Color,
    ) -> Self {
        Gradient {
            id: id.into(),
            stops: vec![
                GradientStop::new(StopOffset::start(), over.clone()),
                GradientStop::new(split, over),
                GradientStop::new(split, base.clone()),
                GradientStop::new(StopOffset::end(), base),
            ],
        }
    }

    /// The `url(#id)` reference for stroke attributes.
    pub fn stroke_reference(&self) -> String {
        format!("url(#{})", self.id)
    }
}
