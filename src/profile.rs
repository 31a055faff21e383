//! Derived rendering defaults.
//!
//! A [`StyleProfile`] is an immutable value computed from a
//! [`StyleRequest`]. Figures take a copy of it at construction, so two figures
//! styled differently never share mutable state.
//!
//! # Example
//!
//! ```rust
//! use pubstyle::models::{AspectRatio, StyleRequest};
//! use pubstyle::profile::StyleProfile;
//!
//! let req = StyleRequest {
//!     page_width_length: 16.0,
//!     aspect_ratio: AspectRatio::new(1.0, 1.0),
//!     ..StyleRequest::default()
//! };
//! let profile = StyleProfile::from_request(&req)?;
//! assert!((profile.figure.size.width_in - 16.0 / 2.54).abs() < 1e-9);
//! # Ok::<(), pubstyle::StyleError>(())
//! ```

use crate::error::{Result, StyleError};
use crate::geometry::{Columns, FigureSize, figure_size};
use crate::models::{FontChoice, FontFamily, StyleRequest};
use crate::palette::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named font size level that scales with the base font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelativeSize {
    XxSmall,
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
    XxLarge,
    Larger,
    Smaller,
}

impl RelativeSize {
    /// Multiplier applied to the base font size.
    pub fn scale(&self) -> f64 {
        match self {
            RelativeSize::XxSmall => 0.579,
            RelativeSize::XSmall => 0.694,
            RelativeSize::Small => 0.833,
            RelativeSize::Medium => 1.0,
            RelativeSize::Large => 1.2,
            RelativeSize::XLarge => 1.44,
            RelativeSize::XxLarge => 1.728,
            RelativeSize::Larger => 1.2,
            RelativeSize::Smaller => 0.833,
        }
    }

    /// Absolute size in points for a given base size.
    pub fn resolve(&self, base_pt: f64) -> f64 {
        base_pt * self.scale()
    }
}

/// Font set used for math text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MathFontset {
    ComputerModern,
    DejaVuSans,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub family: FontFamily,
    /// Candidate fonts in order of preference.
    pub fonts: Vec<String>,
    pub math_fontset: MathFontset,
    pub base_size_pt: f64,
    pub title_size: RelativeSize,
    pub axis_label_size: RelativeSize,
    pub legend_size: RelativeSize,
    pub tick_label_size: RelativeSize,
}

impl Typography {
    /// First preferred font, or the generic family name when the list is empty.
    pub fn primary_font(&self) -> &str {
        self.fonts
            .first()
            .map(String::as_str)
            .unwrap_or(self.family.as_str())
    }

    pub fn size_pt(&self, tier: RelativeSize) -> f64 {
        tier.resolve(self.base_size_pt)
    }
}

/// Axes placement inside the figure, as fractions of the figure size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub wspace: f64,
    pub hspace: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureStyle {
    pub size: FigureSize,
    pub dpi: u32,
    pub face: Rgba,
    pub edge: Rgba,
    pub margins: Margins,
}

impl FigureStyle {
    pub fn size_px(&self) -> (u32, u32) {
        self.size.to_pixels(self.dpi)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxesStyle {
    pub face: Rgba,
    pub edge: Rgba,
    pub label_color: Rgba,
    pub line_width_pt: f64,
    /// Gap between axis label and tick labels.
    pub label_pad_pt: f64,
    /// Draw grid and ticks below the data.
    pub axis_below: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickMarks {
    pub size_pt: f64,
    pub width_pt: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickSides {
    pub bottom: bool,
    pub top: bool,
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickStyle {
    pub sides: TickSides,
    pub minor_visible: bool,
    pub major: TickMarks,
    pub minor: TickMarks,
    pub color: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridAxis {
    X,
    Y,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridWhich {
    Major,
    Minor,
    Both,
}

/// Stroke pattern for grid lines and line series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridStyle {
    pub enabled: bool,
    pub axis: GridAxis,
    pub which: GridWhich,
    pub color: Rgba,
    pub line_style: LineStyle,
    pub line_width_pt: f64,
    pub alpha: f64,
}

/// Legend anchor inside the axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LegendLocation {
    Best,
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
    Right,
    CenterLeft,
    CenterRight,
    LowerCenter,
    UpperCenter,
    Center,
}

impl LegendLocation {
    pub const ALL: [LegendLocation; 11] = [
        LegendLocation::Best,
        LegendLocation::UpperRight,
        LegendLocation::UpperLeft,
        LegendLocation::LowerLeft,
        LegendLocation::LowerRight,
        LegendLocation::Right,
        LegendLocation::CenterLeft,
        LegendLocation::CenterRight,
        LegendLocation::LowerCenter,
        LegendLocation::UpperCenter,
        LegendLocation::Center,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LegendLocation::Best => "best",
            LegendLocation::UpperRight => "upper right",
            LegendLocation::UpperLeft => "upper left",
            LegendLocation::LowerLeft => "lower left",
            LegendLocation::LowerRight => "lower right",
            LegendLocation::Right => "right",
            LegendLocation::CenterLeft => "center left",
            LegendLocation::CenterRight => "center right",
            LegendLocation::LowerCenter => "lower center",
            LegendLocation::UpperCenter => "upper center",
            LegendLocation::Center => "center",
        }
    }
}

impl FromStr for LegendLocation {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        LegendLocation::ALL
            .into_iter()
            .find(|l| l.as_str() == wanted)
            .ok_or_else(|| StyleError::invalid(format!("unknown legend location {s:?}")))
    }
}

impl TryFrom<String> for LegendLocation {
    type Error = StyleError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<LegendLocation> for String {
    fn from(l: LegendLocation) -> Self {
        l.as_str().to_string()
    }
}

impl fmt::Display for LegendLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendStyle {
    pub location: LegendLocation,
    /// Rounded frame corners.
    pub fancy_box: bool,
    pub face: Rgba,
    pub edge: Rgba,
    pub frame_alpha: f64,
    /// Spacing constants are in units of the legend font size.
    pub column_spacing: f64,
    pub label_spacing: f64,
    pub handle_text_pad: f64,
    pub marker_scale: f64,
    pub handle_length: f64,
    pub handle_height: f64,
    pub font_size: RelativeSize,
}

/// Complete set of rendering defaults for a figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    pub typography: Typography,
    pub figure: FigureStyle,
    pub axes: AxesStyle,
    pub ticks: TickStyle,
    pub grid: GridStyle,
    pub legend: LegendStyle,
}

const AXIS_LINE_WIDTH_PT: f64 = 0.5;

impl StyleProfile {
    /// Library defaults, i.e. what a reset restores.
    pub fn baseline() -> Self {
        Self {
            typography: Typography {
                family: FontFamily::SansSerif,
                fonts: ["DejaVu Sans", "Bitstream Vera Sans", "Arial", "Helvetica"]
                    .map(String::from)
                    .to_vec(),
                math_fontset: MathFontset::DejaVuSans,
                base_size_pt: 10.0,
                title_size: RelativeSize::Large,
                axis_label_size: RelativeSize::Medium,
                legend_size: RelativeSize::Medium,
                tick_label_size: RelativeSize::Medium,
            },
            figure: FigureStyle {
                size: FigureSize::new(6.4, 4.8),
                dpi: 100,
                face: Rgba::WHITE,
                edge: Rgba::WHITE,
                margins: Margins {
                    left: 0.125,
                    right: 0.9,
                    bottom: 0.11,
                    top: 0.88,
                    wspace: 0.2,
                    hspace: 0.2,
                },
            },
            axes: AxesStyle {
                face: Rgba::WHITE,
                edge: Rgba::BLACK,
                label_color: Rgba::BLACK,
                line_width_pt: 0.8,
                label_pad_pt: 4.0,
                axis_below: false,
            },
            ticks: TickStyle {
                sides: TickSides {
                    bottom: true,
                    top: false,
                    left: true,
                    right: false,
                },
                minor_visible: false,
                major: TickMarks {
                    size_pt: 3.5,
                    width_pt: 0.8,
                },
                minor: TickMarks {
                    size_pt: 2.0,
                    width_pt: 0.6,
                },
                color: Rgba::BLACK,
            },
            grid: GridStyle {
                enabled: false,
                axis: GridAxis::Both,
                which: GridWhich::Major,
                color: Rgba::rgb(0xb0, 0xb0, 0xb0),
                line_style: LineStyle::Solid,
                line_width_pt: 0.8,
                alpha: 1.0,
            },
            legend: LegendStyle {
                location: LegendLocation::Best,
                fancy_box: true,
                face: Rgba::WHITE,
                edge: Rgba::rgb(204, 204, 204),
                frame_alpha: 0.8,
                column_spacing: 2.0,
                label_spacing: 0.5,
                handle_text_pad: 0.8,
                marker_scale: 1.0,
                handle_length: 2.0,
                handle_height: 0.7,
                font_size: RelativeSize::Medium,
            },
        }
    }

    /// Derive the publication profile for `req`.
    ///
    /// All checks run before anything is built, so an error carries no
    /// partially derived state.
    pub fn from_request(req: &StyleRequest) -> Result<Self> {
        let columns = Columns::try_from(req.columns_per_page)?;
        validate_positive("font size", req.font_size)?;
        validate_positive("page width", req.page_width_length)?;
        validate_positive("aspect ratio width", req.aspect_ratio.width)?;
        validate_positive("aspect ratio height", req.aspect_ratio.height)?;
        if req.dpi == 0 {
            return Err(StyleError::invalid("dpi must be positive"));
        }

        let fonts = match &req.font_name {
            FontChoice::Default => req
                .font_family
                .fallback_fonts()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            FontChoice::Named(name) => vec![name.clone()],
        };

        let size = figure_size(req.page_width_length, columns, req.aspect_ratio);
        log::debug!(
            "derived figure size {:.4}x{:.4} in ({} column(s), {} cm page)",
            size.width_in,
            size.height_in,
            columns.count(),
            req.page_width_length
        );

        let axis_w = AXIS_LINE_WIDTH_PT;
        Ok(Self {
            typography: Typography {
                family: req.font_family,
                fonts,
                math_fontset: MathFontset::ComputerModern,
                base_size_pt: req.font_size,
                title_size: RelativeSize::Medium,
                axis_label_size: RelativeSize::Medium,
                legend_size: RelativeSize::Medium,
                tick_label_size: RelativeSize::Small,
            },
            figure: FigureStyle {
                size,
                dpi: req.dpi,
                face: Rgba::TRANSPARENT,
                edge: Rgba::TRANSPARENT,
                margins: Margins {
                    left: 0.1,
                    right: 0.98,
                    bottom: 0.1,
                    top: 0.88,
                    wspace: 0.2,
                    hspace: 0.2,
                },
            },
            axes: AxesStyle {
                face: Rgba::TRANSPARENT,
                edge: Rgba::BLACK,
                label_color: Rgba::BLACK,
                line_width_pt: axis_w,
                label_pad_pt: 2.0,
                axis_below: true,
            },
            ticks: TickStyle {
                sides: TickSides {
                    bottom: true,
                    top: false,
                    left: true,
                    right: false,
                },
                minor_visible: true,
                major: TickMarks {
                    size_pt: 3.0,
                    width_pt: axis_w,
                },
                minor: TickMarks {
                    size_pt: 1.0,
                    width_pt: axis_w / 2.0,
                },
                color: Rgba::BLACK,
            },
            grid: GridStyle {
                enabled: true,
                axis: GridAxis::Both,
                which: GridWhich::Both,
                color: Rgba::LIGHT_GRAY,
                line_style: LineStyle::Solid,
                line_width_pt: axis_w / 2.0,
                alpha: 1.0,
            },
            legend: LegendStyle {
                location: LegendLocation::UpperLeft,
                fancy_box: true,
                face: Rgba::WHITE,
                edge: Rgba::BLACK,
                frame_alpha: 1.0,
                column_spacing: 1.0,
                label_spacing: 0.5,
                handle_text_pad: 0.4,
                marker_scale: 1.0,
                handle_length: 1.0,
                handle_height: 1.0,
                font_size: RelativeSize::Medium,
            },
        })
    }
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self::baseline()
    }
}

fn validate_positive(what: &str, v: f64) -> Result<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(StyleError::invalid(format!(
            "{what} must be a positive number, got {v}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AspectRatio;

    #[test]
    fn tiers_scale_with_base() {
        assert_eq!(RelativeSize::Medium.resolve(12.0), 12.0);
        assert!((RelativeSize::Small.resolve(12.0) - 9.996).abs() < 1e-9);
    }

    #[test]
    fn typography_from_request() {
        let p = StyleProfile::from_request(&StyleRequest::default()).unwrap();
        assert_eq!(p.typography.family, FontFamily::SansSerif);
        assert_eq!(p.typography.fonts, vec!["DejaVu Sans", "Arial"]);
        assert_eq!(p.typography.primary_font(), "DejaVu Sans");
        assert_eq!(p.typography.math_fontset, MathFontset::ComputerModern);
        assert_eq!(p.typography.tick_label_size, RelativeSize::Small);
        assert_eq!(p.typography.axis_label_size, RelativeSize::Medium);
    }

    #[test]
    fn derived_widths_follow_axis_width() {
        let p = StyleProfile::from_request(&StyleRequest::default()).unwrap();
        assert_eq!(p.axes.line_width_pt, 0.5);
        assert_eq!(p.ticks.major.width_pt, 0.5);
        assert_eq!(p.ticks.minor.width_pt, 0.25);
        assert_eq!(p.grid.line_width_pt, 0.25);
        assert_eq!(p.grid.color, Rgba::LIGHT_GRAY);
        assert_eq!(p.figure.face, Rgba::TRANSPARENT);
    }

    #[test]
    fn rejects_non_positive_numbers() {
        let bad = [
            StyleRequest {
                font_size: 0.0,
                ..StyleRequest::default()
            },
            StyleRequest {
                page_width_length: -3.0,
                ..StyleRequest::default()
            },
            StyleRequest {
                aspect_ratio: AspectRatio::new(f64::NAN, 1.0),
                ..StyleRequest::default()
            },
            StyleRequest {
                dpi: 0,
                ..StyleRequest::default()
            },
        ];
        for req in bad {
            assert!(matches!(
                StyleProfile::from_request(&req),
                Err(StyleError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn legend_location_parsing() {
        assert_eq!(
            "upper left".parse::<LegendLocation>().unwrap(),
            LegendLocation::UpperLeft
        );
        assert_eq!(
            "lower_right".parse::<LegendLocation>().unwrap(),
            LegendLocation::LowerRight
        );
        assert!("somewhere".parse::<LegendLocation>().is_err());
    }

    #[test]
    fn profile_serializes_to_json() {
        let p = StyleProfile::from_request(&StyleRequest::default()).unwrap();
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["legend"]["location"], "upper left");
        assert_eq!(v["typography"]["family"], "sans-serif");
        assert_eq!(v["typography"]["tick_label_size"], "small");
        let back: StyleProfile = serde_json::from_value(v).unwrap();
        assert_eq!(back.legend, p.legend);
        assert_eq!(back.typography, p.typography);
    }
}
