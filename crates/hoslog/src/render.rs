//! Renderers for the CLI: SVG charts and plain-text listings.
//!
//! These consume already-projected segments and collapsed remarks; they make
//! no decisions about clipping or collapsing.

use crate::config::{DisplayConfig, LayoutConfig};
use crate::grid::{hour_lines, lane_labels, quarter_ticks};
use crate::projector::Segment;
use crate::remarks::Remark;

const LINE_COLOR: &str = "#3b82f6";
const GRID_MAJOR: &str = "#e5e5e5";
const GRID_MINOR: &str = "#f0f0f0";

/// Render a full day chart as a standalone SVG document.
#[must_use]
pub fn render_svg(segments: &[Segment], layout: &LayoutConfig) -> String {
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\" preserveAspectRatio=\"none\">\n",
        layout.view_width, layout.view_height
    );

    for lane in lane_labels(layout) {
        svg.push_str(&format!(
            "  <text x=\"10\" y=\"{:.2}\" font-size=\"11\" font-weight=\"bold\" fill=\"#525252\">{}</text>\n",
            lane.y + 4.0,
            lane.label
        ));
        svg.push_str(&line(layout.x0, lane.y, layout.x_end(), lane.y, GRID_MINOR, 1.0, ""));
    }

    for x in quarter_ticks(layout) {
        svg.push_str(&line(
            x,
            layout.grid_top + 5.0,
            x,
            layout.grid_bottom - 5.0,
            GRID_MINOR,
            1.0,
            "",
        ));
    }

    for hour in hour_lines(layout) {
        let width = if hour.major { 2.0 } else { 1.0 };
        svg.push_str(&line(
            hour.x,
            layout.grid_top,
            hour.x,
            layout.grid_bottom,
            GRID_MAJOR,
            width,
            "",
        ));
        svg.push_str(&format!(
            "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"11\" fill=\"#a3a3a3\" text-anchor=\"middle\">{}</text>\n",
            hour.x, layout.label_y, hour.label
        ));
    }

    for segment in segments {
        match *segment {
            Segment::Duration {
                x_start, x_end, y, ..
            } => svg.push_str(&line(
                x_start,
                y,
                x_end,
                y,
                LINE_COLOR,
                4.0,
                " stroke-linecap=\"round\"",
            )),
            Segment::Transition { x, y_from, y_to } => svg.push_str(&line(
                x,
                y_from,
                x,
                y_to,
                LINE_COLOR,
                2.0,
                " stroke-opacity=\"0.4\"",
            )),
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn line(x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64, extra: &str) -> String {
    format!(
        "  <line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{stroke}\" stroke-width=\"{width}\"{extra}/>\n"
    )
}

/// One line per segment, for terminals and debugging.
#[must_use]
pub fn render_text(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Duration {
                status,
                x_start,
                x_end,
                y,
            } => format!("DURATION   {status:<20} x={x_start:>7.2}..{x_end:>7.2} y={y}\n"),
            Segment::Transition { x, y_from, y_to } => {
                format!("TRANSITION {:<20} x={x:>7.2}            y={y_from}->{y_to}\n", "")
            }
        })
        .collect()
}

/// The remarks list as aligned plain text: time, location, status label.
#[must_use]
pub fn render_remarks(remarks: &[Remark], display: &DisplayConfig) -> String {
    let width = remarks
        .iter()
        .map(|r| r.location.chars().count())
        .max()
        .unwrap_or(0);
    remarks
        .iter()
        .map(|r| {
            format!(
                "{}  {:<width$}  {}\n",
                r.formatted_time(display),
                r.location,
                r.status_label()
            )
        })
        .collect()
}
