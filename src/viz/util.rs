//! Utility functions for visualization: color conversion, unit scaling, axis ranges.

use plotters::prelude::*;
use std::ops::Range;

use crate::geometry::{MAX_PIXELS, points_to_pixels};
use crate::palette::Rgba;
use crate::profile::{LegendLocation, LegendStyle};

use super::types::{Limits, MarkerShape};

/// Share of the data span added on each side of an auto-scaled axis.
pub const AXIS_MARGIN: f64 = 0.05;

/// Convert a palette color into a plotters color.
#[inline]
pub fn plotters_color(c: Rgba) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.alpha())
}

/// Stroke width in whole pixels for a width in points; hairlines stay visible.
pub fn stroke_px(width_pt: f64, dpi: u32) -> u32 {
    (points_to_pixels(width_pt, dpi).round() as u32).clamp(1, MAX_PIXELS)
}

/// Length in pixels for a length in points, rounded and clamped to
/// `±MAX_PIXELS` so sums of a few lengths stay in `i32`.
pub fn length_px(len_pt: f64, dpi: u32) -> i32 {
    let max = MAX_PIXELS as f64;
    points_to_pixels(len_pt, dpi).round().clamp(-max, max) as i32
}

/// Font size in pixels for a size in points, at most `MAX_PIXELS`.
pub fn font_px(size_pt: f64, dpi: u32) -> f64 {
    points_to_pixels(size_pt, dpi).clamp(1.0, MAX_PIXELS as f64)
}

/// Pixel count covering `fraction` of `total` pixels.
pub fn fraction_px(fraction: f64, total: u32) -> i32 {
    (fraction.clamp(0.0, 1.0) * total as f64).round() as i32
}

/// Axis range from data values and optional fixed bounds.
///
/// Free sides get [`AXIS_MARGIN`] padding. A collapsed range is widened
/// around its single value; no data at all yields `0..1`.
pub fn axis_range(values: impl IntoIterator<Item = f64>, limits: Limits) -> Range<f64> {
    let (mut lo, mut hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() {
        lo = limits.min.unwrap_or(0.0);
        hi = limits.max.unwrap_or(lo + 1.0);
    } else {
        let span = hi - lo;
        let pad = if span > 0.0 {
            span * AXIS_MARGIN
        } else {
            lo.abs().max(1.0) * AXIS_MARGIN
        };
        lo -= pad;
        hi += pad;
    }
    let lo = limits.min.unwrap_or(lo);
    let hi = limits.max.unwrap_or(hi);
    if hi > lo {
        lo..hi
    } else {
        lo..lo + 1.0
    }
}

/// Map a legend anchor onto the closest plotters label position.
/// `best` has no layout search here and anchors upper right.
pub fn legend_position(loc: LegendLocation) -> SeriesLabelPosition {
    match loc {
        LegendLocation::Best | LegendLocation::UpperRight => SeriesLabelPosition::UpperRight,
        LegendLocation::UpperLeft => SeriesLabelPosition::UpperLeft,
        LegendLocation::LowerLeft => SeriesLabelPosition::LowerLeft,
        LegendLocation::LowerRight => SeriesLabelPosition::LowerRight,
        LegendLocation::Right | LegendLocation::CenterRight => SeriesLabelPosition::MiddleRight,
        LegendLocation::CenterLeft => SeriesLabelPosition::MiddleLeft,
        LegendLocation::LowerCenter => SeriesLabelPosition::LowerMiddle,
        LegendLocation::UpperCenter => SeriesLabelPosition::UpperMiddle,
        LegendLocation::Center => SeriesLabelPosition::MiddleMiddle,
    }
}

/// Legend frame face and edge, both faded by the frame alpha.
pub fn legend_frame_colors(legend: &LegendStyle) -> (RGBAColor, RGBAColor) {
    let fade = |c: Rgba| plotters_color(c.with_alpha(legend.frame_alpha * c.alpha()));
    (fade(legend.face), fade(legend.edge))
}

/// Outline of a marker of radius `r` around the origin, in pixel offsets.
pub fn marker_outline(marker: MarkerShape, r: i32) -> Vec<(i32, i32)> {
    let r = r.max(1);
    // arm half-thickness for + and x
    let t = (r / 4).max(1);
    match marker {
        MarkerShape::Circle => (0..16)
            .map(|i| {
                let a = i as f64 * std::f64::consts::TAU / 16.0;
                (
                    (r as f64 * a.cos()).round() as i32,
                    (r as f64 * a.sin()).round() as i32,
                )
            })
            .collect(),
        MarkerShape::Square => vec![(-r, -r), (r, -r), (r, r), (-r, r)],
        MarkerShape::Triangle => vec![(0, -r), (r, r), (-r, r)],
        MarkerShape::Diamond => vec![(0, -r), (r, 0), (0, r), (-r, 0)],
        MarkerShape::Cross => vec![
            (-t, -r),
            (t, -r),
            (t, -t),
            (r, -t),
            (r, t),
            (t, t),
            (t, r),
            (-t, r),
            (-t, t),
            (-r, t),
            (-r, -t),
            (-t, -t),
        ],
        MarkerShape::X => {
            let d = (r as f64 / std::f64::consts::SQRT_2).round() as i32;
            vec![
                (-d, -d - t),
                (0, -t),
                (d, -d - t),
                (d + t, -d),
                (t, 0),
                (d + t, d),
                (d, d + t),
                (0, t),
                (-d, d + t),
                (-d - t, d),
                (-t, 0),
                (-d - t, -d),
            ]
        }
    }
}

/// Close a polygon outline so it can be stroked as a path.
pub fn closed(mut outline: Vec<(i32, i32)>) -> Vec<(i32, i32)> {
    if let Some(first) = outline.first().copied() {
        outline.push(first);
    }
    outline
}
