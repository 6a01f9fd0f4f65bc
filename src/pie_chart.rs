//! Pie chart geometry for the ingredient ratio view.
//!
//! Slices are plain SVG sector paths; [`render_svg`] wraps them into a
//! standalone document. Everything here is a pure function of the ordered
//! `(amount, colour)` sequence, no I/O.

use std::fmt::Write;

use serde::Serialize;

use crate::colors::color_map_for;
use crate::models::NormalizedIngredient;

/// Width/height of the chart in SVG user units.
pub const DEFAULT_CHART_SIZE: f64 = 120.0;

/// Angle of the first slice edge (12 o'clock).
pub const START_ANGLE_DEG: f64 = -90.0;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub color: &'static str,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
    pub path_data: String,
}

impl PieSlice {
    #[must_use]
    pub fn sweep_deg(&self) -> f64 {
        self.end_angle_deg - self.start_angle_deg
    }
}

#[derive(Clone, Copy, Debug)]
struct Geometry {
    cx: f64,
    cy: f64,
    r: f64,
}

impl Geometry {
    fn for_size(size: f64) -> Self {
        let half = size / 2.0;
        Self {
            cx: half,
            cy: half,
            r: half,
        }
    }

    fn point(self, deg: f64) -> (f64, f64) {
        let rad = deg.to_radians();
        (self.cx + self.r * rad.cos(), self.cy + self.r * rad.sin())
    }

    fn sector_path(self, start: f64, end: f64) -> String {
        let Self { cx, cy, r } = self;
        let (x1, y1) = self.point(start);
        let (x2, y2) = self.point(end);
        let sweep = end - start;

        let mut d = format!("M {cx} {cy} L {x1} {y1}");
        if sweep >= 360.0 - 1e-9 {
            // an arc whose endpoints coincide draws nothing; go via the far side
            let (xm, ym) = self.point(start + sweep / 2.0);
            let _ = write!(d, " A {r} {r} 0 0 1 {xm} {ym} A {r} {r} 0 0 1 {x2} {y2}");
        } else {
            let large_arc = u8::from(sweep > 180.0);
            let _ = write!(d, " A {r} {r} 0 {large_arc} 1 {x2} {y2}");
        }
        d.push_str(" Z");
        d
    }
}

/// Build sector descriptors for every ingredient with a positive amount.
///
/// Slices keep ingredient order, start at 12 o'clock and run clockwise. The
/// last slice always ends at exactly `START_ANGLE_DEG + 360`.
#[must_use]
pub fn build_slices(ingredients: &[NormalizedIngredient], size: f64) -> Vec<PieSlice> {
    let supported: Vec<(&str, f64)> = ingredients
        .iter()
        .filter_map(|i| match i.amount {
            Some(a) if a > 0.0 && a.is_finite() => Some((i.name.as_str(), a)),
            _ => None,
        })
        .collect();

    let total: f64 = supported.iter().map(|(_, a)| a).sum();
    if supported.is_empty() || total <= 0.0 {
        return Vec::new();
    }

    let colors = color_map_for(supported.iter().map(|(n, _)| *n));
    let geometry = Geometry::for_size(size);
    let last = supported.len() - 1;
    let mut current = START_ANGLE_DEG;

    supported
        .iter()
        .enumerate()
        .map(|(idx, (name, amount))| {
            let start = current;
            let end = if idx == last {
                START_ANGLE_DEG + 360.0
            } else {
                start + amount / total * 360.0
            };
            current = end;

            PieSlice {
                name: (*name).to_string(),
                color: colors.get(name).unwrap_or(crate::ingredients::UNSUPPORTED_COLOR),
                start_angle_deg: start,
                end_angle_deg: end,
                path_data: geometry.sector_path(start, end),
            }
        })
        .collect()
}

/// Standalone SVG document for a list of slices; `None` when there is nothing to draw.
#[must_use]
pub fn render_svg(slices: &[PieSlice], size: f64) -> Option<String> {
    if slices.is_empty() {
        return None;
    }
    let mut out = String::new();
    let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    for s in slices {
        let _ = writeln!(
            out,
            r##"  <path d="{}" fill="{}" stroke="#fff" stroke-width="1"><title>{}</title></path>"##,
            s.path_data,
            s.color,
            xml_escape(&s.name)
        );
    }
    out.push_str("</svg>\n");
    Some(out)
}

fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
