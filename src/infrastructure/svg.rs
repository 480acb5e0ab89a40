// Inline SVG charts: line, bar, gauge and waterfall
use crate::application::page_data::GaugeReading;
use crate::application::view_model::{ChartPoint, StepKind, WaterfallStep};
use crate::domain::dataset::CategoryValue;
use std::f64::consts::PI;
use std::fmt::Write;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 240.0;
const PAD: f64 = 32.0;

fn escape(s: &str) -> String {
    super::html::html_escape(s)
}

/// Map `value` from `[lo, hi]` onto the plot's vertical axis.
fn y_for(value: f64, lo: f64, hi: f64) -> f64 {
    let span = if (hi - lo).abs() < f64::EPSILON { 1.0 } else { hi - lo };
    HEIGHT - PAD - (value - lo) / span * (HEIGHT - 2.0 * PAD)
}

fn open_svg(label: &str) -> String {
    format!(
        r#"<svg class="chart" viewBox="0 0 {w} {h}" role="img" aria-label="{label}" xmlns="http://www.w3.org/2000/svg">"#,
        w = WIDTH,
        h = HEIGHT,
        label = escape(label),
    )
}

pub fn line_chart(label: &str, points: &[ChartPoint]) -> String {
    let mut svg = open_svg(label);
    if points.is_empty() {
        svg.push_str("</svg>");
        return svg;
    }

    let (lo, hi) = points.iter().fold((f64::MAX, f64::MIN), |(lo, hi), p| {
        (lo.min(p.value), hi.max(p.value))
    });
    let step = if points.len() > 1 {
        (WIDTH - 2.0 * PAD) / (points.len() - 1) as f64
    } else {
        0.0
    };

    let coords: Vec<String> = points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:.1},{:.1}", PAD + i as f64 * step, y_for(p.value, lo, hi)))
        .collect();

    let _ = write!(
        svg,
        r#"<polyline fill="none" stroke="steelblue" stroke-width="2" points="{}"/>"#,
        coords.join(" ")
    );
    let _ = write!(
        svg,
        r#"<text x="{pad}" y="{bottom}" font-size="11">{first}</text><text x="{right}" y="{bottom}" font-size="11" text-anchor="end">{last}</text>"#,
        pad = PAD,
        right = WIDTH - PAD,
        bottom = HEIGHT - 8.0,
        first = escape(&points[0].label),
        last = escape(&points[points.len() - 1].label),
    );
    let _ = write!(
        svg,
        r#"<text x="4" y="{top}" font-size="11">{hi:.1}</text><text x="4" y="{low}" font-size="11">{lo:.1}</text>"#,
        top = PAD,
        low = HEIGHT - PAD,
        hi = hi,
        lo = lo,
    );
    svg.push_str("</svg>");
    svg
}

pub fn bar_chart(label: &str, bars: &[CategoryValue]) -> String {
    let mut svg = open_svg(label);
    let hi = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
    let slot = (WIDTH - 2.0 * PAD) / bars.len().max(1) as f64;

    for (i, bar) in bars.iter().enumerate() {
        let top = y_for(bar.value.max(0.0), 0.0, hi);
        let x = PAD + i as f64 * slot + slot * 0.15;
        let _ = write!(
            svg,
            r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="steelblue"><title>{title}</title></rect><text x="{cx:.1}" y="{ty}" font-size="11" text-anchor="middle">{label}</text>"#,
            x = x,
            y = top,
            w = slot * 0.7,
            h = (HEIGHT - PAD) - top,
            title = escape(&format!("{}: {:.0}", bar.label, bar.value)),
            cx = x + slot * 0.35,
            ty = HEIGHT - 12.0,
            label = escape(&bar.label),
        );
    }
    svg.push_str("</svg>");
    svg
}

/// Half-circle gauge filled up to `value / max`.
pub fn gauge(reading: &GaugeReading) -> String {
    let (cx, cy, r) = (100.0, 100.0, 80.0);
    let fraction = if reading.max > 0.0 {
        (reading.value / reading.max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let angle = PI * (1.0 - fraction);
    let (ex, ey) = (cx + r * angle.cos(), cy - r * angle.sin());

    format!(
        r#"<svg class="gauge" viewBox="0 0 200 120" role="img" aria-label="{title}" xmlns="http://www.w3.org/2000/svg"><path d="M 20 100 A 80 80 0 0 1 180 100" fill="none" stroke="lightgray" stroke-width="16"/><path d="M 20 100 A 80 80 0 0 1 {ex:.1} {ey:.1}" fill="none" stroke="darkblue" stroke-width="16"/><text x="100" y="95" font-size="20" text-anchor="middle">{prefix}{value}{suffix}</text><text x="100" y="116" font-size="11" text-anchor="middle">{title}</text></svg>"#,
        title = escape(&reading.title),
        ex = ex,
        ey = ey,
        prefix = escape(&reading.prefix),
        value = reading.value,
        suffix = escape(&reading.suffix),
    )
}

pub fn waterfall(label: &str, steps: &[WaterfallStep]) -> String {
    let mut svg = open_svg(label);
    let hi = steps
        .iter()
        .flat_map(|s| [s.start, s.end])
        .fold(0.0_f64, f64::max);
    let lo = steps
        .iter()
        .flat_map(|s| [s.start, s.end])
        .fold(0.0_f64, f64::min);
    let slot = (WIDTH - 2.0 * PAD) / steps.len().max(1) as f64;

    for (i, step) in steps.iter().enumerate() {
        let (top, bottom) = (
            y_for(step.start.max(step.end), lo, hi),
            y_for(step.start.min(step.end), lo, hi),
        );
        let colour = match step.kind {
            StepKind::Increase => "seagreen",
            StepKind::Decrease => "indianred",
            StepKind::Total => "steelblue",
        };
        let x = PAD + i as f64 * slot + slot * 0.15;
        let _ = write!(
            svg,
            r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="{colour}"><title>{title}</title></rect><text x="{cx:.1}" y="{ty}" font-size="11" text-anchor="middle">{label}</text>"#,
            x = x,
            y = top,
            w = slot * 0.7,
            h = (bottom - top).max(1.0),
            colour = colour,
            title = escape(&format!("{}: {:.0}", step.label, step.end - step.start)),
            cx = x + slot * 0.35,
            ty = HEIGHT - 12.0,
            label = escape(&step.label),
        );
    }
    svg.push_str("</svg>");
    svg
}
