//! Chart adapter and surface lifecycle.
//!
//! `build_chart_spec` is a pure mapping from an analysis kind plus a chart
//! series to a renderable spec: single runs get a bar chart on a fixed [0, 1]
//! axis with no legend, batch runs get a pie with a legend. Colors key off
//! the semantic label, case-insensitively, so any reordering of the incoming
//! series maps identically. `ChartSurface` enforces the one-live-instance
//! rule for each pipeline's chart region.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::core::error::RenderError;
use crate::core::result::AnalysisKind;

pub const COLOR_POSITIVE: &str = "#28a745";
pub const COLOR_NEGATIVE: &str = "#dc3545";
pub const COLOR_NEUTRAL: &str = "#6c757d";
/// Aggregate/compound and any other unrecognized label.
pub const COLOR_FALLBACK: &str = "#007bff";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub slices: Vec<ChartSlice>,
    /// Fixed value-axis range for bar charts; pies carry no axis.
    pub value_axis: Option<(f64, f64)>,
    pub show_legend: bool,
}

pub fn color_for_label(label: &str) -> &'static str {
    match label.trim().to_lowercase().as_str() {
        "positive" => COLOR_POSITIVE,
        "negative" => COLOR_NEGATIVE,
        "neutral" => COLOR_NEUTRAL,
        _ => COLOR_FALLBACK,
    }
}

// Positive, negative, neutral, then everything else alphabetically. Keeps the
// drawn order deterministic under arbitrary series reordering.
fn canonical_rank(label: &str) -> (u8, String) {
    let lowered = label.trim().to_lowercase();
    let rank = match lowered.as_str() {
        "positive" => 0,
        "negative" => 1,
        "neutral" => 2,
        _ => 3,
    };
    (rank, lowered)
}

pub fn build_chart_spec(
    kind: AnalysisKind,
    series: &[(String, f64)],
) -> Result<ChartSpec, RenderError> {
    if series.is_empty() {
        return Err(RenderError::EmptySeries);
    }
    for (label, value) in series {
        if !value.is_finite() {
            return Err(RenderError::NonFiniteValue(label.clone()));
        }
    }

    let mut slices: Vec<ChartSlice> = series
        .iter()
        .map(|(label, value)| ChartSlice {
            label: label.clone(),
            value: *value,
            color: color_for_label(label),
        })
        .collect();
    slices.sort_by_key(|slice| canonical_rank(&slice.label));

    Ok(match kind {
        AnalysisKind::Single => ChartSpec {
            kind: ChartKind::Bar,
            slices,
            value_axis: Some((0.0, 1.0)),
            show_legend: false,
        },
        AnalysisKind::Batch => ChartSpec {
            kind: ChartKind::Pie,
            slices,
            value_axis: None,
            show_legend: true,
        },
    })
}

/// A drawn chart: the spec it was built from plus self-contained SVG markup.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    spec: ChartSpec,
    svg: String,
}

impl ChartInstance {
    fn new(spec: ChartSpec) -> Self {
        let svg = match spec.kind {
            ChartKind::Bar => bar_svg(&spec),
            ChartKind::Pie => pie_svg(&spec),
        };
        Self { spec, svg }
    }

    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    pub fn svg(&self) -> &str {
        &self.svg
    }
}

/// Exclusively owned chart region: at most one live instance per pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSurface {
    live: Option<ChartInstance>,
}

impl ChartSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws a new chart. The prior instance is released before the new one
    /// attaches.
    pub fn mount(&mut self, spec: ChartSpec) -> &ChartInstance {
        self.live = None;
        self.live.insert(ChartInstance::new(spec))
    }

    pub fn release(&mut self) {
        self.live = None;
    }

    pub fn live(&self) -> Option<&ChartInstance> {
        self.live.as_ref()
    }
}

const SVG_W: f64 = 360.0;
const SVG_H: f64 = 240.0;

fn bar_svg(spec: &ChartSpec) -> String {
    const LEFT: f64 = 40.0;
    const RIGHT: f64 = 12.0;
    const TOP: f64 = 14.0;
    const BOTTOM: f64 = 32.0;

    let plot_w = SVG_W - LEFT - RIGHT;
    let plot_h = SVG_H - TOP - BOTTOM;
    let (axis_min, axis_max) = spec.value_axis.unwrap_or_else(|| {
        let max = spec
            .slices
            .iter()
            .map(|slice| slice.value)
            .fold(0.0_f64, f64::max);
        (0.0, max.max(f64::EPSILON))
    });
    let span = (axis_max - axis_min).max(f64::EPSILON);

    let mut svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 {SVG_W} {SVG_H}' role='img'>"
    );

    for step in 0..=4 {
        let t = step as f64 / 4.0;
        let y = TOP + plot_h * (1.0 - t);
        let value = axis_min + span * t;
        svg.push_str(&format!(
            "<line x1='{LEFT}' y1='{y:.1}' x2='{:.1}' y2='{y:.1}' stroke='#e3e6ea' stroke-width='1'/>",
            LEFT + plot_w
        ));
        svg.push_str(&format!(
            "<text x='{:.1}' y='{:.1}' font-size='9' fill='#6c757d' text-anchor='end'>{value:.2}</text>",
            LEFT - 4.0,
            y + 3.0
        ));
    }

    let slot = plot_w / spec.slices.len() as f64;
    let bar_w = slot * 0.6;
    for (index, slice) in spec.slices.iter().enumerate() {
        let clamped = slice.value.clamp(axis_min, axis_max);
        let height = (clamped - axis_min) / span * plot_h;
        let x = LEFT + slot * index as f64 + (slot - bar_w) / 2.0;
        let y = TOP + plot_h - height;
        svg.push_str(&format!(
            "<rect x='{x:.1}' y='{y:.1}' width='{bar_w:.1}' height='{height:.1}' fill='{}' fill-opacity='0.7'/>",
            slice.color
        ));
        svg.push_str(&format!(
            "<text x='{:.1}' y='{:.1}' font-size='10' fill='#343a40' text-anchor='middle'>{}</text>",
            x + bar_w / 2.0,
            SVG_H - BOTTOM + 14.0,
            xml_escape(&slice.label)
        ));
        svg.push_str(&format!(
            "<text x='{:.1}' y='{:.1}' font-size='9' fill='#343a40' text-anchor='middle'>{}</text>",
            x + bar_w / 2.0,
            (y - 3.0).max(8.0),
            format_value(slice.value)
        ));
    }

    svg.push_str("</svg>");
    svg
}

fn pie_svg(spec: &ChartSpec) -> String {
    const CX: f64 = 110.0;
    const CY: f64 = 120.0;
    const R: f64 = 92.0;

    let total: f64 = spec.slices.iter().map(|slice| slice.value.max(0.0)).sum();

    let mut svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 {SVG_W} {SVG_H}' role='img'>"
    );

    if total <= 0.0 {
        svg.push_str(&format!(
            "<circle cx='{CX}' cy='{CY}' r='{R}' fill='none' stroke='#e3e6ea' stroke-width='2'/>"
        ));
    } else {
        let mut start = -FRAC_PI_2;
        for slice in &spec.slices {
            let fraction = slice.value.max(0.0) / total;
            if fraction <= 0.0 {
                continue;
            }
            if fraction >= 1.0 {
                svg.push_str(&format!(
                    "<circle cx='{CX}' cy='{CY}' r='{R}' fill='{}' fill-opacity='0.7'/>",
                    slice.color
                ));
                break;
            }
            let end = start + fraction * TAU;
            let (x1, y1) = (CX + R * start.cos(), CY + R * start.sin());
            let (x2, y2) = (CX + R * end.cos(), CY + R * end.sin());
            let large_arc = i32::from(fraction > 0.5);
            svg.push_str(&format!(
                "<path d='M {CX:.1} {CY:.1} L {x1:.1} {y1:.1} A {R:.1} {R:.1} 0 {large_arc} 1 {x2:.1} {y2:.1} Z' fill='{}' fill-opacity='0.7'/>",
                slice.color
            ));
            start = end;
        }
    }

    if spec.show_legend {
        for (index, slice) in spec.slices.iter().enumerate() {
            let y = 48.0 + index as f64 * 22.0;
            svg.push_str(&format!(
                "<rect x='228' y='{:.1}' width='12' height='12' fill='{}' fill-opacity='0.7'/>",
                y - 10.0,
                slice.color
            ));
            svg.push_str(&format!(
                "<text x='246' y='{y:.1}' font-size='11' fill='#343a40'>{} ({})</text>",
                xml_escape(&slice.label),
                format_value(slice.value)
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}

fn format_value(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
        pairs
            .iter()
            .map(|(label, value)| (label.to_string(), *value))
            .collect()
    }

    #[test]
    fn single_runs_get_a_fixed_axis_bar_chart() {
        let spec = build_chart_spec(
            AnalysisKind::Single,
            &series(&[("positive", 0.82), ("negative", 0.05), ("neutral", 0.13)]),
        )
        .unwrap();

        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.value_axis, Some((0.0, 1.0)));
        assert!(!spec.show_legend);
        let colors: Vec<_> = spec.slices.iter().map(|slice| slice.color).collect();
        assert_eq!(colors, vec![COLOR_POSITIVE, COLOR_NEGATIVE, COLOR_NEUTRAL]);
        let values: Vec<_> = spec.slices.iter().map(|slice| slice.value).collect();
        assert_eq!(values, vec![0.82, 0.05, 0.13]);
    }

    #[test]
    fn batch_runs_get_a_legend_pie() {
        let spec = build_chart_spec(
            AnalysisKind::Batch,
            &series(&[("Positive", 30.0), ("Negative", 12.0), ("Neutral", 8.0)]),
        )
        .unwrap();

        assert_eq!(spec.kind, ChartKind::Pie);
        assert_eq!(spec.value_axis, None);
        assert!(spec.show_legend);
    }

    #[test]
    fn colors_are_invariant_under_permutation_and_case() {
        let forwards = build_chart_spec(
            AnalysisKind::Single,
            &series(&[("Positive", 0.7), ("negative", 0.2), ("NEUTRAL", 0.1)]),
        )
        .unwrap();
        let shuffled = build_chart_spec(
            AnalysisKind::Single,
            &series(&[("neutral", 0.1), ("POSITIVE", 0.7), ("Negative", 0.2)]),
        )
        .unwrap();

        let colors = |spec: &ChartSpec| {
            spec.slices
                .iter()
                .map(|slice| (slice.label.to_lowercase(), slice.color))
                .collect::<Vec<_>>()
        };
        assert_eq!(colors(&forwards), colors(&shuffled));
    }

    #[test]
    fn compound_labels_use_the_fallback_color() {
        assert_eq!(color_for_label("Compound"), COLOR_FALLBACK);
        assert_eq!(color_for_label("positive"), COLOR_POSITIVE);
        assert_eq!(color_for_label("Positive"), COLOR_POSITIVE);
    }

    #[test]
    fn empty_or_non_finite_series_are_render_errors() {
        assert_eq!(
            build_chart_spec(AnalysisKind::Single, &[]),
            Err(RenderError::EmptySeries)
        );
        assert_eq!(
            build_chart_spec(AnalysisKind::Single, &series(&[("positive", f64::NAN)])),
            Err(RenderError::NonFiniteValue("positive".into()))
        );
    }

    #[test]
    fn surface_holds_at_most_one_live_instance() {
        let mut surface = ChartSurface::new();
        assert!(surface.live().is_none());

        let first = build_chart_spec(AnalysisKind::Single, &series(&[("positive", 0.9)])).unwrap();
        surface.mount(first);
        let first_svg = surface.live().unwrap().svg().to_string();

        let second = build_chart_spec(AnalysisKind::Batch, &series(&[("negative", 4.0)])).unwrap();
        surface.mount(second);
        let live = surface.live().unwrap();
        assert_eq!(live.spec().kind, ChartKind::Pie);
        assert_ne!(live.svg(), first_svg);

        surface.release();
        assert!(surface.live().is_none());
    }

    #[test]
    fn bar_svg_contains_a_rect_per_slice() {
        let spec = build_chart_spec(
            AnalysisKind::Single,
            &series(&[("positive", 0.82), ("negative", 0.05), ("neutral", 0.13)]),
        )
        .unwrap();
        let svg = ChartInstance::new(spec).svg.clone();
        assert_eq!(svg.matches("<rect").count(), 3);
        assert!(svg.contains(COLOR_POSITIVE));
        assert!(svg.contains(COLOR_NEGATIVE));
        assert!(svg.contains(COLOR_NEUTRAL));
    }

    #[test]
    fn zero_total_pie_draws_an_empty_outline() {
        let spec = build_chart_spec(
            AnalysisKind::Batch,
            &series(&[("positive", 0.0), ("negative", 0.0)]),
        )
        .unwrap();
        let svg = ChartInstance::new(spec).svg;
        assert!(svg.contains("fill='none'"));
        assert!(!svg.contains("<path"));
    }
}
