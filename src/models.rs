use crate::error::StyleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generic font family the typography is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FontFamily {
    Serif,
    SansSerif,
}

impl FontFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontFamily::Serif => "serif",
            FontFamily::SansSerif => "sans-serif",
        }
    }

    /// Ordered fallback list used when the request asks for the `"default"` font.
    pub fn fallback_fonts(&self) -> &'static [&'static str] {
        match self {
            FontFamily::Serif => &["DejaVu Serif", "Times New Roman"],
            FontFamily::SansSerif => &["DejaVu Sans", "Arial"],
        }
    }
}

impl FromStr for FontFamily {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "serif" => Ok(FontFamily::Serif),
            "sans-serif" => Ok(FontFamily::SansSerif),
            _ => Err(StyleError::invalid("family must be serif or sans-serif")),
        }
    }
}

impl TryFrom<String> for FontFamily {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FontFamily> for String {
    fn from(f: FontFamily) -> Self {
        f.as_str().to_string()
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which concrete font to use inside the chosen family.
///
/// The literal string `"default"` selects the family's fallback list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FontChoice {
    #[default]
    Default,
    Named(String),
}

impl From<String> for FontChoice {
    fn from(s: String) -> Self {
        if s == "default" {
            FontChoice::Default
        } else {
            FontChoice::Named(s)
        }
    }
}

impl From<&str> for FontChoice {
    fn from(s: &str) -> Self {
        FontChoice::from(s.to_string())
    }
}

impl From<FontChoice> for String {
    fn from(c: FontChoice) -> Self {
        match c {
            FontChoice::Default => "default".to_string(),
            FontChoice::Named(name) => name,
        }
    }
}

/// Width-to-height ratio of a figure, e.g. `1.62:1` for the golden ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct AspectRatio {
    pub width: f64,
    pub height: f64,
}

impl AspectRatio {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::new(6.4, 4.8)
    }
}

impl From<[f64; 2]> for AspectRatio {
    fn from([width, height]: [f64; 2]) -> Self {
        Self { width, height }
    }
}

impl From<AspectRatio> for [f64; 2] {
    fn from(a: AspectRatio) -> Self {
        [a.width, a.height]
    }
}

impl FromStr for AspectRatio {
    type Err = StyleError;

    /// Parse `W:H` (also accepts `W/H` and `WxH`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once([':', '/', 'x'])
            .ok_or_else(|| StyleError::invalid(format!("aspect ratio must be W:H, got {s:?}")))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| StyleError::invalid(format!("aspect ratio must be W:H, got {s:?}")))
        };
        Ok(AspectRatio::new(parse(w)?, parse(h)?))
    }
}

/// Everything a caller specifies to style the next figures.
///
/// Missing fields in a JSON config fall back to [`StyleRequest::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleRequest {
    /// Discard previously opened figures before applying the new style.
    pub clear_previous: bool,
    /// Flag the next figure for export under `export_name`.
    pub mark_for_export: bool,
    pub export_name: String,
    /// Base font size in points; relative tiers scale from it.
    pub font_size: f64,
    pub font_family: FontFamily,
    pub font_name: FontChoice,
    /// How many figures of this size tile across the page width (1, 2 or 3).
    pub columns_per_page: u8,
    /// Usable page (text) width in centimeters.
    pub page_width_length: f64,
    pub aspect_ratio: AspectRatio,
    pub dpi: u32,
}

impl Default for StyleRequest {
    fn default() -> Self {
        Self {
            clear_previous: false,
            mark_for_export: false,
            export_name: "no_name".to_string(),
            font_size: 12.0,
            font_family: FontFamily::SansSerif,
            font_name: FontChoice::Default,
            columns_per_page: 1,
            page_width_length: 16.0,
            aspect_ratio: AspectRatio::default(),
            dpi: 96,
        }
    }
}
