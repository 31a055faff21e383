//! Public types for the visualization module.

use crate::palette::Rgba;
use crate::profile::{LegendLocation, LineStyle, RelativeSize, StyleProfile};

/// Marker shape for scatter points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Square,
    Triangle,
    Diamond,
    /// Upright `+`.
    Cross,
    /// Diagonal `x`.
    X,
}

/// How a series is drawn.
#[derive(Clone, Debug, PartialEq)]
pub enum SeriesKind {
    Line {
        style: LineStyle,
        width_pt: f64,
    },
    Scatter {
        marker: MarkerShape,
        /// Marker radius in points.
        size_pt: f64,
        /// Outline color; `None` draws the outline in the fill color.
        edge: Option<Rgba>,
    },
}

/// One data series with its appearance.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: Option<String>,
    pub points: Vec<(f64, f64)>,
    pub color: Rgba,
    pub kind: SeriesKind,
}

impl Series {
    /// Solid 1 pt black line.
    pub fn line(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self {
            label: None,
            points: points.into_iter().collect(),
            color: Rgba::BLACK,
            kind: SeriesKind::Line {
                style: LineStyle::Solid,
                width_pt: 1.0,
            },
        }
    }

    /// Circle markers of 3 pt radius.
    pub fn scatter(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self {
            label: None,
            points: points.into_iter().collect(),
            color: Rgba::BLACK,
            kind: SeriesKind::Scatter {
                marker: MarkerShape::Circle,
                size_pt: 3.0,
                edge: None,
            },
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Stroke pattern; ignored for scatter series.
    pub fn line_style(mut self, line_style: LineStyle) -> Self {
        if let SeriesKind::Line { style, .. } = &mut self.kind {
            *style = line_style;
        }
        self
    }

    /// Stroke width (lines) or marker radius (scatter), in points.
    pub fn width_pt(mut self, width: f64) -> Self {
        match &mut self.kind {
            SeriesKind::Line { width_pt, .. } => *width_pt = width,
            SeriesKind::Scatter { size_pt, .. } => *size_pt = width,
        }
        self
    }

    /// Marker shape; ignored for line series.
    pub fn marker(mut self, shape: MarkerShape) -> Self {
        if let SeriesKind::Scatter { marker, .. } = &mut self.kind {
            *marker = shape;
        }
        self
    }

    /// Marker outline color; ignored for line series.
    pub fn edge(mut self, color: Rgba) -> Self {
        if let SeriesKind::Scatter { edge, .. } = &mut self.kind {
            *edge = Some(color);
        }
        self
    }
}

/// Optional lower/upper bound of an axis; a missing side is derived from data.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Limits {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// A single-axes figure carrying its own copy of the style profile.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    profile: StyleProfile,
    pub series: Vec<Series>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub x_limits: Limits,
    pub y_limits: Limits,
    /// Per-figure override of the profile's legend anchor.
    pub legend_location: Option<LegendLocation>,
    /// Per-figure override of the profile's legend font tier.
    pub legend_font: Option<RelativeSize>,
}

impl Figure {
    pub fn new(profile: StyleProfile) -> Self {
        Self {
            profile,
            series: Vec::new(),
            x_label: None,
            y_label: None,
            x_limits: Limits::default(),
            y_limits: Limits::default(),
            legend_location: None,
            legend_font: None,
        }
    }

    pub fn profile(&self) -> &StyleProfile {
        &self.profile
    }

    pub fn add(&mut self, series: Series) -> &mut Self {
        self.series.push(series);
        self
    }

    pub fn x_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn y_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn x_limits(&mut self, min: Option<f64>, max: Option<f64>) -> &mut Self {
        self.x_limits = Limits { min, max };
        self
    }

    pub fn y_limits(&mut self, min: Option<f64>, max: Option<f64>) -> &mut Self {
        self.y_limits = Limits { min, max };
        self
    }

    pub fn legend(&mut self, location: LegendLocation, font: Option<RelativeSize>) -> &mut Self {
        self.legend_location = Some(location);
        self.legend_font = font;
        self
    }

    /// Legend anchor after applying the per-figure override.
    pub fn effective_legend_location(&self) -> LegendLocation {
        self.legend_location
            .unwrap_or(self.profile.legend.location)
    }

    pub fn effective_legend_font(&self) -> RelativeSize {
        self.legend_font.unwrap_or(self.profile.legend.font_size)
    }

    pub fn has_legend_entries(&self) -> bool {
        self.series.iter().any(|s| s.label.is_some())
    }
}
