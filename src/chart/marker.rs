//! Point markers: the per-point circles drawn over the series line.
//!
//! The rendering collaborator owns the coordinate system and calls back with
//! each point's screen position and raw value; this module only decides how
//! the marker looks. Color selection is a pure function of the value and the
//! breaking point, decoupled from any callback signature.

use serde::{Deserialize, Serialize};

use crate::stats::BreakingPoint;

use super::style::Color;

/// A point as supplied by the rendering collaborator.
///
/// Screen coordinates are consumed verbatim; the component never computes
/// its own coordinate mapping and must not assume pixel positions are
/// stable between render passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPoint {
    /// Horizontal screen coordinate from the collaborator.
    pub screen_x: f64,
    /// Vertical screen coordinate from the collaborator.
    pub screen_y: f64,
    /// The point's raw series value, compared against the breaking point.
    pub value: f64,
}

impl MarkerPoint {
    pub fn new(screen_x: f64, screen_y: f64, value: f64) -> Self {
        MarkerPoint {
            screen_x,
            screen_y,
            value,
        }
    }
}

/// Selects the marker accent color for one point.
///
/// Red when the value strictly exceeds the breaking point, otherwise the
/// series base color. A value exactly at the threshold keeps the base color.
pub fn marker_color(value: f64, breaking_point: &BreakingPoint, base: &Color) -> Color {
    if breaking_point.exceeded_by(value) {
        Color::over_threshold()
    } else {
        base.clone()
    }
}

/// The standard dot: a small white-filled circle whose stroke carries the
/// threshold color decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotMarker {
    pub radius: f64,
    pub fill: Color,
    pub stroke: Color,
}

impl DotMarker {
    /// Radius of the standard dot variant.
    pub const RADIUS: f64 = 3.0;

    /// Resolves the dot appearance for one point.
    pub fn for_point(point: &MarkerPoint, breaking_point: &BreakingPoint, base: &Color) -> Self {
        DotMarker {
            radius: Self::RADIUS,
            fill: Color::marker_fill(),
            stroke: marker_color(point.value, breaking_point, base),
        }
    }
}

/// The active dot: the larger variant for the point under pointer focus.
/// The threshold color moves to the fill and the stroke becomes a white halo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveDotMarker {
    pub radius: f64,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl ActiveDotMarker {
    /// Radius of the active dot variant.
    pub const RADIUS: f64 = 4.0;
    /// Halo stroke width of the active dot variant.
    pub const STROKE_WIDTH: f64 = 2.0;

    /// Resolves the active dot appearance for one point.
    pub fn for_point(point: &MarkerPoint, breaking_point: &BreakingPoint, base: &Color) -> Self {
        ActiveDotMarker {
            radius: Self::RADIUS,
            fill: marker_color(point.value, breaking_point, base),
            stroke: Color::marker_fill(),
            stroke_width: Self::STROKE_WIDTH,
        }
    }
}
