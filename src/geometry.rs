//! Figure sizing from document geometry.
//!
//! A figure is sized so that `columns` of them tile exactly across the usable
//! page width, whatever aspect ratio is requested.

use crate::error::{Result, StyleError};
use crate::models::AspectRatio;
use serde::{Deserialize, Serialize};

pub const CM_PER_INCH: f64 = 2.54;
pub const POINTS_PER_INCH: f64 = 72.0;
/// Upper bound for any pixel length handed to the renderer.
pub const MAX_PIXELS: u32 = 1 << 16;

/// Number of figures placed side by side across the page width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Columns {
    One,
    Two,
    Three,
}

impl Columns {
    pub fn count(self) -> u8 {
        match self {
            Columns::One => 1,
            Columns::Two => 2,
            Columns::Three => 3,
        }
    }
}

impl TryFrom<u8> for Columns {
    type Error = StyleError;

    fn try_from(n: u8) -> Result<Self> {
        match n {
            1 => Ok(Columns::One),
            2 => Ok(Columns::Two),
            3 => Ok(Columns::Three),
            _ => Err(StyleError::invalid("unsupported column count")),
        }
    }
}

impl From<Columns> for u8 {
    fn from(c: Columns) -> Self {
        c.count()
    }
}

/// Physical figure size in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width_in: f64,
    pub height_in: f64,
}

impl FigureSize {
    pub const fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width_in,
            height_in,
        }
    }

    /// Pixel dimensions at `dpi`, clamped to `1..=MAX_PIXELS` per side.
    pub fn to_pixels(&self, dpi: u32) -> (u32, u32) {
        let px = |inches: f64| ((inches * dpi as f64).round() as u32).clamp(1, MAX_PIXELS);
        (px(self.width_in), px(self.height_in))
    }
}

/// Compute the size of one figure for a page `page_width_cm` wide holding
/// `columns` figures side by side.
///
/// The width is always `page_width_cm / columns` (in inches); the height keeps
/// the requested `width:height` ratio.
pub fn figure_size(page_width_cm: f64, columns: Columns, aspect: AspectRatio) -> FigureSize {
    let scale = page_width_cm / (CM_PER_INCH * aspect.width * columns.count() as f64);
    FigureSize::new(aspect.width * scale, aspect.height * scale)
}

/// Convert a length in points to device pixels at `dpi`.
pub fn points_to_pixels(points: f64, dpi: u32) -> f64 {
    points * dpi as f64 / POINTS_PER_INCH
}
