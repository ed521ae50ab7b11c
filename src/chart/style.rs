//! Colors for gradients and point markers.
//!
//! Color values use standard CSS syntax: either a hex code or a predefined
//! color keyword, emitted verbatim into SVG attributes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A CSS color as the rendering collaborator consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    /// A `#RRGGBB` hex code.
    Hex(String),
    /// A predefined CSS color keyword.
    Predefined(PredefinedColor),
}

impl Color {
    /// Hex color constructor.
    pub fn hex<S: Into<String>>(code: S) -> Self {
        Color::Hex(code.into())
    }

    /// The over-threshold color: points beyond the breaking point render red.
    pub fn over_threshold() -> Self {
        Color::Predefined(PredefinedColor::Red)
    }

    /// Marker interior fill for the standard dot variant.
    pub fn marker_fill() -> Self {
        Color::Predefined(PredefinedColor::White)
    }

    /// Base color of the unique visitors series.
    pub fn unique_visitors_base() -> Self {
        Color::hex("#82ca9d")
    }

    /// Base color of the page views series.
    pub fn page_views_base() -> Self {
        Color::hex("#8884d8")
    }
}

impl fmt::Display for Color {
    /// Formats the color for SVG attribute emission.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Hex(code) => write!(f, "{}", code),
            Color::Predefined(color) => write!(f, "{}", color.keyword()),
        }
    }
}

/// Predefined CSS color keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredefinedColor {
    Black,
    Blue,
    Gray,
    Green,
    Red,
    Silver,
    White,
    Yellow,
}

impl PredefinedColor {
    /// The CSS keyword for this color.
    pub fn keyword(&self) -> &str {
        match self {
            PredefinedColor::Black => "black",
            PredefinedColor::Blue => "blue",
            PredefinedColor::Gray => "gray",
            PredefinedColor::Green => "green",
            PredefinedColor::Red => "red",
            PredefinedColor::Silver => "silver",
            PredefinedColor::White => "white",
            PredefinedColor::Yellow => "yellow",
        }
    }

    /// The hex value for this color.
    pub fn to_hex(&self) -> &str {
        match self {
            PredefinedColor::Black => "#000000",
            PredefinedColor::Blue => "#0000FF",
            PredefinedColor::Gray => "#808080",
            PredefinedColor::Green => "#008000",
            PredefinedColor::Red => "#FF0000",
            PredefinedColor::Silver => "#C0C0C0",
            PredefinedColor::White => "#FFFFFF",
            PredefinedColor::Yellow => "#FFFF00",
        }
    }
}
