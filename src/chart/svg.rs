//! SVG serialization using quick-xml.
//!
//! The rendering collaborator owns layout and coordinate mapping; this
//! module emits the SVG fragments the component itself owns: the gradient
//! definitions referenced by the series strokes, and the per-point circle
//! markers drawn at collaborator-supplied screen coordinates.

use std::io::Write;

use quick_xml::Writer;

use crate::data::Series;
use crate::error::ChartError;
use crate::stats::BreakingPoint;

use super::LineChart;
use super::gradient::Gradient;
use super::marker::{ActiveDotMarker, DotMarker, MarkerPoint};
use super::style::Color;

/// Helper type for SVG writer operations.
pub type SvgWriter = Writer<Vec<u8>>;

/// Marker placements for one series, as supplied by the collaborator.
///
/// Coordinates are consumed verbatim; no coordinate mapping happens here.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPlacement {
    pub series: Series,
    pub points: Vec<MarkerPoint>,
}

/// Format a number without unnecessary decimal places.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Write the `<defs>` block containing one vertical gradient per series.
pub fn write_gradient_defs<W: Write>(
    writer: &mut Writer<W>,
    gradients: &[&Gradient],
) -> Result<(), ChartError> {
    writer
        .create_element("defs")
        .write_inner_content(|writer| -> Result<(), ChartError> {
            for gradient in gradients {
                write_linear_gradient(writer, gradient)?;
            }
            Ok(())
        })?;
    Ok(())
}

/// Write one `<linearGradient>` with its four hard-split stops.
fn write_linear_gradient<W: Write>(
    writer: &mut Writer<W>,
    gradient: &Gradient,
) -> Result<(), ChartError> {
    writer
        .create_element("linearGradient")
        .with_attribute(("id", gradient.id.as_str()))
        .with_attribute(("gradientTransform", "rotate(90)"))
        .write_inner_content(|writer| -> Result<(), ChartError> {
            for stop in &gradient.stops {
                let offset = stop.offset.to_string();
                let color = stop.color.to_string();
                writer
                    .create_element("stop")
                    .with_attribute(("offset", offset.as_str()))
                    .with_attribute(("stop-color", color.as_str()))
                    .write_empty()?;
            }
            Ok(())
        })?;
    Ok(())
}

/// Write the standard dot marker for one point.
///
/// A small circle filled white, stroked red when the point's value strictly
/// exceeds the breaking point and in the series base color otherwise.
pub fn write_dot<W: Write>(
    writer: &mut Writer<W>,
    point: &MarkerPoint,
    breaking_point: &BreakingPoint,
    base: &Color,
) -> Result<(), ChartError> {
    let dot = DotMarker::for_point(point, breaking_point, base);

    let r = format_number(dot.radius);
    let cx = format_number(point.screen_x);
    let cy = format_number(point.screen_y);
    let fill = dot.fill.to_string();
    let stroke = dot.stroke.to_string();

    writer
        .create_element("circle")
        .with_attribute(("r", r.as_str()))
        .with_attribute(("cx", cx.as_str()))
        .with_attribute(("cy", cy.as_str()))
        .with_attribute(("fill", fill.as_str()))
        .with_attribute(("stroke", stroke.as_str()))
        .write_empty()?;
    Ok(())
}

/// Write the active dot marker for the point under pointer focus.
///
/// The larger variant: the threshold color moves to the fill and the stroke
/// becomes a white halo of width 2.
pub fn write_active_dot<W: Write>(
    writer: &mut Writer<W>,
    point: &MarkerPoint,
    breaking_point: &BreakingPoint,
    base: &Color,
) -> Result<(), ChartError> {
    let dot = ActiveDotMarker::for_point(point, breaking_point, base);

    let r = format_number(dot.radius);
    let cx = format_number(point.screen_x);
    let cy = format_number(point.screen_y);
    let fill = dot.fill.to_string();
    let stroke = dot.stroke.to_string();
    let stroke_width = format_number(dot.stroke_width);

    writer
        .create_element("circle")
        .with_attribute(("r", r.as_str()))
        .with_attribute(("cx", cx.as_str()))
        .with_attribute(("cy", cy.as_str()))
        .with_attribute(("fill", fill.as_str()))
        .with_attribute(("stroke", stroke.as_str()))
        .with_attribute(("stroke-width", stroke_width.as_str()))
        .write_empty()?;
    Ok(())
}

/// Write the complete rendering request for the composed chart.
///
/// An `<svg>` envelope with the chart dimensions, the gradient definitions,
/// and a dot marker for every collaborator-placed point of every series.
pub fn write_render_request<W: Write>(
    writer: &mut Writer<W>,
    chart: &LineChart,
    placements: &[SeriesPlacement],
) -> Result<(), ChartError> {
    let width = format_number(chart.width);
    let height = format_number(chart.height);

    writer
        .create_element("svg")
        .with_attribute(("xmlns", "http://www.w3.org/2000/svg"))
        .with_attribute(("width", width.as_str()))
        .with_attribute(("height", height.as_str()))
        .write_inner_content(|writer| -> Result<(), ChartError> {
            let gradients: Vec<&Gradient> =
                chart.series.iter().map(|line| &line.gradient).collect();
            write_gradient_defs(writer, &gradients)?;

            for placement in placements {
                let Some(line) = chart.series_line(placement.series) else {
                    continue;
                };
                for point in &placement.points {
                    write_dot(writer, point, &line.breaking_point, &line.base_color)?;
                }
            }

            Ok(())
        })?;
    Ok(())
}

/// Serialize the rendering request to a string.
pub fn render_request_to_string(
    chart: &LineChart,
    placements: &[SeriesPlacement],
) -> Result<String, ChartError> {
    let mut writer = SvgWriter::new(Vec::new());
    write_render_request(&mut writer, chart, placements)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::gradient::StopOffset;
    use crate::data::sample_page_metrics;

    fn to_string(writer: SvgWriter) -> String {
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_gradient_defs_markup() {
        let gradient = Gradient::threshold_split(
            "colorUv",
            StopOffset::new(40.0),
            Color::over_threshold(),
            Color::unique_visitors_base(),
        );

        let mut writer = SvgWriter::new(Vec::new());
        write_gradient_defs(&mut writer, &[&gradient]).unwrap();
        let svg = to_string(writer);

        assert!(svg.starts_with("<defs>"));
        assert!(svg.contains(r#"<linearGradient id="colorUv" gradientTransform="rotate(90)">"#));
        assert!(svg.contains(r#"<stop offset="0%" stop-color="red"/>"#));
        assert!(svg.contains(r#"<stop offset="40%" stop-color="red"/>"#));
        assert!(svg.contains(r##"<stop offset="40%" stop-color="#82ca9d"/>"##));
        assert!(svg.contains(r##"<stop offset="100%" stop-color="#82ca9d"/>"##));
    }

    #[test]
    fn test_dot_markup_above_threshold() {
        let breaking_point = BreakingPoint {
            value: 100.0,
            stop: StopOffset::new(50.0),
        };
        let point = MarkerPoint::new(12.0, 34.5, 150.0);

        let mut writer = SvgWriter::new(Vec::new());
        write_dot(
            &mut writer,
            &point,
            &breaking_point,
            &Color::unique_visitors_base(),
        )
        .unwrap();

        assert_eq!(
            to_string(writer),
            r#"<circle r="3" cx="12" cy="34.5" fill="white" stroke="red"/>"#
        );
    }

    #[test]
    fn test_dot_markup_below_threshold() {
        let breaking_point = BreakingPoint {
            value: 100.0,
            stop: StopOffset::new(50.0),
        };
        let point = MarkerPoint::new(12.0, 34.5, 99.0);

        let mut writer = SvgWriter::new(Vec::new());
        write_dot(
            &mut writer,
            &point,
            &breaking_point,
            &Color::unique_visitors_base(),
        )
        .unwrap();

        assert_eq!(
            to_string(writer),
            r##"<circle r="3" cx="12" cy="34.5" fill="white" stroke="#82ca9d"/>"##
        );
    }

    #[test]
    fn test_active_dot_markup() {
        let breaking_point = BreakingPoint {
            value: 100.0,
            stop: StopOffset::new(50.0),
        };
        let point = MarkerPoint::new(7.0, 8.0, 150.0);

        let mut writer = SvgWriter::new(Vec::new());
        write_active_dot(
            &mut writer,
            &point,
            &breaking_point,
            &Color::page_views_base(),
        )
        .unwrap();

        assert_eq!(
            to_string(writer),
            r#"<circle r="4" cx="7" cy="8" fill="red" stroke="white" stroke-width="2"/>"#
        );
    }

    #[test]
    fn test_render_request_envelope() {
        let chart = LineChart::compose(sample_page_metrics()).unwrap().unwrap();
        let placements = vec![SeriesPlacement {
            series: Series::PageViews,
            points: vec![MarkerPoint::new(100.0, 50.0, 9800.0)],
        }];

        let svg = render_request_to_string(&chart, &placements).unwrap();

        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="730" height="250">"#));
        assert!(svg.contains(r#"id="colorUv""#));
        assert!(svg.contains(r#"id="colorPv""#));
        // Page C exceeds the pv breaking point, so its marker stroke is red.
        assert!(svg.contains(r#"<circle r="3" cx="100" cy="50" fill="white" stroke="red"/>"#));
    }
}
