//! Visualization: render a styled [`Figure`] to **SVG** with plotters.
//!
//! - Figure size and dpi come from the profile (inches × dpi)
//! - Axes placed by the profile's subplot margins
//! - Major/minor grid, tick marks and axis strokes sized in points
//! - Line (solid/dashed/dotted) and scatter series with shaped markers
//! - Legend anchored per profile, overridable per figure

pub mod types;
pub mod util;

pub use types::{Figure, Limits, MarkerShape, Series, SeriesKind};

use anyhow::{Context, Result, anyhow};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::{DashedLineSeries, LineSeries};
use plotters_svg::SVGBackend;
use std::fs;
use std::path::Path;

use crate::profile::{GridAxis, GridWhich, LineStyle};

use util::{
    axis_range, closed, font_px, fraction_px, legend_frame_colors, legend_position, length_px, marker_outline,
    plotters_color, stroke_px,
};

/// Minor grid lines drawn between two major ticks.
const MINOR_LINES: usize = 4;

/// Render `figure` to an SVG document held in memory.
pub fn render_svg_string(figure: &Figure) -> Result<String> {
    let size = figure.profile().figure.size_px();
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, size).into_drawing_area();
        draw_figure(&root, figure)?;
        root.present().map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(buf)
}

/// Render `figure` to an SVG file at `out_path`.
pub fn render_svg<P: AsRef<Path>>(figure: &Figure, out_path: P) -> Result<()> {
    let out_path = out_path.as_ref();
    let svg = render_svg_string(figure)?;
    fs::write(out_path, svg).with_context(|| format!("writing {}", out_path.display()))?;
    Ok(())
}

/// Draw the whole figure onto any plotters backend.
fn draw_figure<DB>(root: &DrawingArea<DB, Shift>, figure: &Figure) -> Result<()>
where
    DB: DrawingBackend,
{
    let profile = figure.profile();
    let dpi = profile.figure.dpi;
    let typo = &profile.typography;
    let font = typo.primary_font();
    let text_px = |pt: f64| font_px(pt, dpi);

    root.fill(&plotters_color(profile.figure.face))
        .map_err(|e| anyhow!("{:?}", e))?;

    // ----------------------------
    // 1) Axes placement from subplot margins
    // ----------------------------
    let (w, h) = root.dim_in_pixel();
    let m = &profile.figure.margins;
    let left = fraction_px(m.left, w);
    let bottom = fraction_px(m.bottom, h);
    let right = fraction_px(1.0 - m.right, w);
    let top = fraction_px(1.0 - m.top, h);

    let x_range = axis_range(
        figure.series.iter().flat_map(|s| s.points.iter().map(|p| p.0)),
        figure.x_limits,
    );
    let y_range = axis_range(
        figure.series.iter().flat_map(|s| s.points.iter().map(|p| p.1)),
        figure.y_limits,
    );

    let mut chart = ChartBuilder::on(root)
        .margin_top(top)
        .margin_right(right)
        .set_label_area_size(LabelAreaPosition::Left, left)
        .set_label_area_size(LabelAreaPosition::Bottom, bottom)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| anyhow!("{:?}", e))?;

    chart
        .plotting_area()
        .fill(&plotters_color(profile.axes.face))
        .map_err(|e| anyhow!("{:?}", e))?;

    // ----------------------------
    // 2) Mesh: axis lines, ticks, grid
    // ----------------------------
    let tick_font = (font, text_px(typo.size_pt(typo.tick_label_size)))
        .into_font()
        .color(&plotters_color(profile.ticks.color));
    let label_font = (font, text_px(typo.size_pt(typo.axis_label_size)))
        .into_font()
        .color(&plotters_color(profile.axes.label_color));
    let axis_style = ShapeStyle {
        color: plotters_color(profile.axes.edge),
        filled: false,
        stroke_width: stroke_px(profile.axes.line_width_pt, dpi),
    };
    let grid = &profile.grid;
    let grid_style = ShapeStyle {
        color: plotters_color(grid.color.with_alpha(grid.alpha * grid.color.alpha())),
        filled: false,
        stroke_width: stroke_px(grid.line_width_pt, dpi),
    };
    let hidden = ShapeStyle {
        color: RGBAColor(0, 0, 0, 0.0),
        filled: false,
        stroke_width: 0,
    };

    let mut mesh = chart.configure_mesh();
    mesh.axis_style(axis_style)
        .label_style(tick_font)
        .axis_desc_style(label_font)
        .set_all_tick_mark_size(length_px(profile.ticks.major.size_pt, dpi));
    if let Some(x) = figure.x_label.as_deref() {
        mesh.x_desc(x);
    }
    if let Some(y) = figure.y_label.as_deref() {
        mesh.y_desc(y);
    }
    if grid.enabled {
        let major = matches!(grid.which, GridWhich::Major | GridWhich::Both);
        let minor = matches!(grid.which, GridWhich::Minor | GridWhich::Both)
            && profile.ticks.minor_visible;
        mesh.bold_line_style(if major { grid_style } else { hidden });
        if minor {
            mesh.light_line_style(grid_style).max_light_lines(MINOR_LINES);
        } else {
            mesh.light_line_style(hidden).max_light_lines(0);
        }
        match grid.axis {
            GridAxis::X => {
                mesh.disable_y_mesh();
            }
            GridAxis::Y => {
                mesh.disable_x_mesh();
            }
            GridAxis::Both => {}
        }
    } else {
        mesh.disable_mesh();
    }
    mesh.draw().map_err(|e| anyhow!("{:?}", e))?;

    // ----------------------------
    // 3) Series
    // ----------------------------
    let legend_font_tier = figure.effective_legend_font();
    let legend_font_pt = typo.size_pt(legend_font_tier);
    let handle_px = length_px(profile.legend.handle_length * legend_font_pt, dpi).max(4);
    let marker_scale = profile.legend.marker_scale;

    for series in &figure.series {
        let color = plotters_color(series.color);
        match &series.kind {
            SeriesKind::Line { style, width_pt } => {
                let stroke = ShapeStyle {
                    color,
                    filled: false,
                    stroke_width: stroke_px(*width_pt, dpi),
                };
                let pts = series.points.clone();
                let sw = stroke.stroke_width as i32;
                let anno = match style {
                    LineStyle::Solid => chart.draw_series(LineSeries::new(pts, stroke)),
                    LineStyle::Dashed => {
                        chart.draw_series(DashedLineSeries::new(pts, 4 * sw, 2 * sw, stroke))
                    }
                    LineStyle::Dotted => chart.draw_series(DashedLineSeries::new(pts, sw, sw, stroke)),
                    LineStyle::DashDot => {
                        chart.draw_series(DashedLineSeries::new(pts, 6 * sw, 2 * sw, stroke))
                    }
                }
                .map_err(|e| anyhow!("{:?}", e))?;
                if let Some(label) = &series.label {
                    anno.label(label.as_str()).legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x.saturating_add(handle_px), y)], stroke)
                    });
                }
            }
            SeriesKind::Scatter {
                marker,
                size_pt,
                edge,
            } => {
                let fill = color.filled();
                let edge_style = ShapeStyle {
                    color: plotters_color(edge.unwrap_or(series.color)),
                    filled: false,
                    stroke_width: 1,
                };
                let outline = marker_outline(*marker, length_px(*size_pt, dpi));
                let anno = chart
                    .draw_series(series.points.iter().map(|&c| {
                        EmptyElement::at(c)
                            + Polygon::new(outline.clone(), fill)
                            + PathElement::new(closed(outline.clone()), edge_style)
                    }))
                    .map_err(|e| anyhow!("{:?}", e))?;
                if let Some(label) = &series.label {
                    let r = length_px(*size_pt * marker_scale, dpi);
                    let glyph = marker_outline(*marker, r);
                    let cx = handle_px / 2;
                    anno.label(label.as_str()).legend(move |(x, y)| {
                        EmptyElement::at((x.saturating_add(cx), y))
                            + Polygon::new(glyph.clone(), fill)
                            + PathElement::new(closed(glyph.clone()), edge_style)
                    });
                }
            }
        }
    }

    // ----------------------------
    // 4) Legend
    // ----------------------------
    if figure.has_legend_entries() {
        let legend = &profile.legend;
        let (face, edge) = legend_frame_colors(legend);
        let legend_font = (font, text_px(legend_font_pt))
            .into_font()
            .color(&plotters_color(profile.axes.label_color));
        chart
            .configure_series_labels()
            .position(legend_position(figure.effective_legend_location()))
            .background_style(face)
            .border_style(edge)
            .label_font(legend_font)
            .margin(length_px(legend.label_spacing * legend_font_pt, dpi).max(1))
            .legend_area_size(
                handle_px
                    .saturating_add(length_px(legend.handle_text_pad * legend_font_pt, dpi)),
            )
            .draw()
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StyleRequest;
    use crate::palette::Rgba;
    use crate::profile::StyleProfile;

    fn demo_figure() -> Figure {
        let profile = StyleProfile::from_request(&StyleRequest::default()).unwrap();
        let mut fig = Figure::new(profile);
        let xs = [0.1, 0.2, 0.3, 0.4];
        fig.add(
            Series::line(xs.iter().map(|&x| (x, x)))
                .line_style(LineStyle::Dashed)
                .label("Line"),
        )
        .add(
            Series::scatter(xs.iter().map(|&x| (x, x)))
                .color(Rgba::rgb(0, 150, 130))
                .edge(Rgba::BLACK)
                .label("Scatter"),
        )
        .x_label("x")
        .y_label("y")
        .x_limits(Some(0.0), Some(0.5));
        fig
    }

    #[test]
    fn svg_has_profile_size() {
        let fig = demo_figure();
        let (w, h) = fig.profile().figure.size_px();
        let svg = render_svg_string(&fig).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(&format!("width=\"{w}\"")));
        assert!(svg.contains(&format!("height=\"{h}\"")));
    }

    #[test]
    fn svg_contains_labels_and_legend() {
        let svg = render_svg_string(&demo_figure()).unwrap();
        assert!(svg.contains("Scatter"));
        assert!(svg.contains("Line"));
        assert!(svg.contains("DejaVu Sans"));
    }

    #[test]
    fn empty_figure_still_renders() {
        let fig = Figure::new(StyleProfile::baseline());
        let svg = render_svg_string(&fig).unwrap();
        assert!(svg.contains("</svg>"));
    }
}
