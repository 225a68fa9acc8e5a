//! Radar chart rendering.
//!
//! This module turns a finished culture profile into an SVG image. It is a
//! pure presentation step: no domain logic, just geometry over the four
//! fixed category axes on a 0–100 percentage scale.

use crate::models::CultureScores;
use std::f64::consts::PI;
use std::fmt::Write as _;

/// Stroke/fill color of the current-profile series.
const CURRENT_COLOR: &str = "#2E86AB";

/// Stroke/fill color of the preferred-profile series.
const PREFERRED_COLOR: &str = "#E8A838";

/// Visual settings for the radar chart.
#[derive(Debug, Clone)]
pub struct RadarStyle {
    /// Width and height of the (square) image in pixels.
    pub size: u32,
    /// Series color for the current profile.
    pub current_color: String,
    /// Series color for the preferred profile.
    pub preferred_color: String,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            size: 480,
            current_color: CURRENT_COLOR.to_string(),
            preferred_color: PREFERRED_COLOR.to_string(),
        }
    }
}

impl From<&crate::config::ChartConfig> for RadarStyle {
    fn from(config: &crate::config::ChartConfig) -> Self {
        Self {
            size: config.size,
            current_color: config.current_color.clone(),
            preferred_color: config.preferred_color.clone(),
        }
    }
}

/// Render a radar chart of a culture profile as SVG bytes.
///
/// When a preferred profile is supplied it is overlaid as a second series
/// with its own color and legend entry. Values are clamped to the 0–100
/// ring scale; the categories of both profiles are the same fixed set, so
/// the two series always share axes.
pub fn render_radar_chart(
    current: &CultureScores,
    preferred: Option<&CultureScores>,
    style: &RadarStyle,
) -> Vec<u8> {
    let size = style.size as f64;
    let center = size / 2.0;
    let radius = center - 70.0;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{0}" viewBox="0 0 {0} {0}">"#,
        style.size
    );
    let _ = writeln!(svg, r#"<rect width="{0}" height="{0}" fill="white"/>"#, style.size);

    svg.push_str(&render_grid(center, radius));
    svg.push_str(&render_series(current, center, radius, &style.current_color, 0.15));
    if let Some(preferred) = preferred {
        svg.push_str(&render_series(preferred, center, radius, &style.preferred_color, 0.1));
    }
    svg.push_str(&render_axis_labels(current, center, radius));
    svg.push_str(&render_legend(style, preferred.is_some()));

    svg.push_str("</svg>\n");
    svg.into_bytes()
}

/// Angle of axis `index`, starting at the top and proceeding clockwise.
fn axis_angle(index: usize) -> f64 {
    -PI / 2.0 + index as f64 * PI / 2.0
}

/// Point on axis `index` at `fraction` of the chart radius.
fn axis_point(center: f64, radius: f64, index: usize, fraction: f64) -> (f64, f64) {
    let angle = axis_angle(index);
    (
        center + radius * fraction * angle.cos(),
        center + radius * fraction * angle.sin(),
    )
}

/// Concentric rings, ring value labels, and the four axis lines.
fn render_grid(center: f64, radius: f64) -> String {
    let mut grid = String::new();

    for ring in [25, 50, 75, 100] {
        let r = radius * ring as f64 / 100.0;
        let _ = writeln!(
            grid,
            r##"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="none" stroke="#dddddd"/>"##,
            center, center, r
        );
        let _ = writeln!(
            grid,
            r##"<text x="{:.1}" y="{:.1}" font-size="9" fill="#999999">{}</text>"##,
            center + 4.0,
            center - r - 2.0,
            ring
        );
    }

    for index in 0..4 {
        let (x, y) = axis_point(center, radius, index, 1.0);
        let _ = writeln!(
            grid,
            r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="#cccccc"/>"##,
            center, center, x, y
        );
    }

    grid
}

/// One profile series: filled polygon plus vertex markers.
fn render_series(
    scores: &CultureScores,
    center: f64,
    radius: f64,
    color: &str,
    fill_opacity: f64,
) -> String {
    let mut series = String::new();

    let vertices: Vec<(f64, f64)> = scores
        .entries()
        .iter()
        .enumerate()
        .map(|(index, (_, value))| {
            axis_point(center, radius, index, value.clamp(0.0, 100.0) / 100.0)
        })
        .collect();

    let points: Vec<String> = vertices
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect();

    let _ = writeln!(
        series,
        r#"<polygon points="{}" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="2"/>"#,
        points.join(" "),
        color,
        fill_opacity,
        color
    );

    for (x, y) in vertices {
        let _ = writeln!(
            series,
            r#"<circle cx="{:.1}" cy="{:.1}" r="3" fill="{}"/>"#,
            x, y, color
        );
    }

    series
}

/// Category name at the outer end of each axis.
fn render_axis_labels(scores: &CultureScores, center: f64, radius: f64) -> String {
    let mut labels = String::new();

    for (index, (category, _)) in scores.entries().iter().enumerate() {
        let (x, y) = axis_point(center, radius + 22.0, index, 1.0);
        let _ = writeln!(
            labels,
            r##"<text x="{:.1}" y="{:.1}" font-size="12" text-anchor="middle" fill="#333333">{}</text>"##,
            x,
            y + 4.0,
            category
        );
    }

    labels
}

/// Series legend in the top-left corner.
fn render_legend(style: &RadarStyle, has_preferred: bool) -> String {
    let mut legend = String::new();

    let _ = writeln!(
        legend,
        r#"<rect x="10" y="10" width="12" height="12" fill="{}"/>"#,
        style.current_color
    );
    let _ = writeln!(
        legend,
        r##"<text x="28" y="20" font-size="11" fill="#333333">Mevcut</text>"##
    );

    if has_preferred {
        let _ = writeln!(
            legend,
            r#"<rect x="10" y="28" width="12" height="12" fill="{}"/>"#,
            style.preferred_color
        );
        let _ = writeln!(
            legend,
            r##"<text x="28" y="38" font-size="11" fill="#333333">Tercih</text>"##
        );
    }

    legend
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores() -> CultureScores {
        CultureScores {
            clan: 40.0,
            adhocracy: 20.0,
            market: 20.0,
            hierarchy: 20.0,
        }
    }

    fn render_string(preferred: Option<&CultureScores>) -> String {
        let bytes = render_radar_chart(&scores(), preferred, &RadarStyle::default());
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_single_series_chart() {
        let svg = render_string(None);

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<polygon").count(), 1);
        assert!(svg.contains("Mevcut"));
        assert!(!svg.contains("Tercih"));
    }

    #[test]
    fn test_preferred_overlay_adds_second_series() {
        let preferred = CultureScores {
            clan: 25.0,
            adhocracy: 25.0,
            market: 25.0,
            hierarchy: 25.0,
        };

        let svg = render_string(Some(&preferred));

        assert_eq!(svg.matches("<polygon").count(), 2);
        assert!(svg.contains("#E8A838"));
        assert!(svg.contains("Tercih"));
    }

    #[test]
    fn test_axis_labels_cover_all_categories() {
        let svg = render_string(None);

        for label in ["clan", "adhocracy", "market", "hierarchy"] {
            assert!(svg.contains(label), "missing axis label {}", label);
        }
    }

    #[test]
    fn test_values_above_scale_are_clamped() {
        let oversized = CultureScores {
            clan: 250.0,
            adhocracy: 0.0,
            market: 0.0,
            hierarchy: 0.0,
        };

        let bytes = render_radar_chart(&oversized, None, &RadarStyle::default());
        let svg = String::from_utf8(bytes).unwrap();

        // Clamped clan vertex sits exactly on the outer ring: 240 - 170 = 70.
        assert!(svg.contains("240.0,70.0"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let style = RadarStyle::default();
        let first = render_radar_chart(&scores(), None, &style);
        let second = render_radar_chart(&scores(), None, &style);

        assert_eq!(first, second);
    }
}
