//! Corporate color palette.
//!
//! Ten hues, each with a base color and thirteen tints blended towards white,
//! plus `white` and `transparent`. The gray hue is anchored on `black`; its
//! tints are named `gray90` down to `gray5`.
//!
//! ```rust
//! use pubstyle::palette::{Hue, Palette};
//!
//! let green = Palette::corporate().get("green").unwrap();
//! assert_eq!(green.to_hex(), "#009682");
//! assert_eq!(Palette::corporate().tint(Hue::Green, 50), Palette::corporate().get("green50"));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const LIGHT_GRAY: Rgba = Rgba::rgb(211, 211, 211);
    /// Fully transparent white.
    pub const TRANSPARENT: Rgba = Rgba::new(255, 255, 255, 0);

    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let h = hex.strip_prefix('#').unwrap_or(hex);
        if !h.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(h.get(i..i + 2)?, 16).ok();
        match h.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// `#RRGGBB` for opaque colors, `#RRGGBBAA` otherwise.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Opacity in `0.0..=1.0`.
    pub fn alpha(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// Same color with opacity `alpha` (clamped to `0.0..=1.0`).
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// The ten palette hues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Hue {
    Gray,
    Green,
    Blue,
    Red,
    Yellow,
    Orange,
    LightGreen,
    Purple,
    Brown,
    Cyan,
}

impl Hue {
    pub const ALL: [Hue; 10] = [
        Hue::Gray,
        Hue::Green,
        Hue::Blue,
        Hue::Red,
        Hue::Yellow,
        Hue::Orange,
        Hue::LightGreen,
        Hue::Purple,
        Hue::Brown,
        Hue::Cyan,
    ];

    /// Prefix used for tint names (`green80`, `gray25`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            Hue::Gray => "gray",
            Hue::Green => "green",
            Hue::Blue => "blue",
            Hue::Red => "red",
            Hue::Yellow => "yellow",
            Hue::Orange => "orange",
            Hue::LightGreen => "lightgreen",
            Hue::Purple => "purple",
            Hue::Brown => "brown",
            Hue::Cyan => "cyan",
        }
    }

    /// Name of the full-strength color; only gray differs from its prefix.
    pub fn base_name(&self) -> &'static str {
        match self {
            Hue::Gray => "black",
            other => other.name(),
        }
    }

    pub fn base(&self) -> Rgba {
        match self {
            Hue::Gray => Rgba::rgb(0x00, 0x00, 0x00),
            Hue::Green => Rgba::rgb(0x00, 0x96, 0x82),
            Hue::Blue => Rgba::rgb(0x46, 0x64, 0xaa),
            Hue::Red => Rgba::rgb(0xa2, 0x22, 0x23),
            Hue::Yellow => Rgba::rgb(0xfc, 0xe5, 0x00),
            Hue::Orange => Rgba::rgb(0xdf, 0x9b, 0x1b),
            Hue::LightGreen => Rgba::rgb(0x8c, 0xb6, 0x3c),
            Hue::Purple => Rgba::rgb(0xa3, 0x10, 0x7c),
            Hue::Brown => Rgba::rgb(0xa7, 0x82, 0x2e),
            Hue::Cyan => Rgba::rgb(0x23, 0xa1, 0xe0),
        }
    }

    /// RGB of each tint, in [`TINT_STEPS`] order.
    ///
    /// Values are the published corporate table, which was rounded in unit
    /// RGB first; a blend of [`Hue::base`] with white can be off by one.
    pub fn tints(&self) -> [[u8; 3]; 13] {
        match self {
            Hue::Gray => [
                [26, 26, 26],
                [51, 51, 51],
                [64, 64, 64],
                [76, 76, 76],
                [102, 102, 102],
                [128, 128, 128],
                [153, 153, 153],
                [178, 178, 178],
                [191, 191, 191],
                [204, 204, 204],
                [217, 217, 217],
                [230, 230, 230],
                [242, 242, 242],
            ],
            Hue::Green => [
                [26, 160, 142],
                [51, 171, 155],
                [64, 176, 161],
                [76, 182, 168],
                [102, 192, 180],
                [128, 202, 192],
                [153, 213, 205],
                [178, 224, 217],
                [191, 229, 224],
                [204, 234, 230],
                [217, 239, 236],
                [230, 244, 243],
                [242, 250, 249],
            ],
            Hue::Blue => [
                [89, 115, 178],
                [107, 131, 187],
                [116, 139, 191],
                [126, 146, 196],
                [144, 162, 204],
                [163, 178, 212],
                [181, 193, 221],
                [200, 208, 230],
                [209, 216, 234],
                [218, 224, 238],
                [227, 232, 242],
                [237, 239, 247],
                [246, 247, 251],
            ],
            Hue::Red => [
                [171, 56, 57],
                [181, 78, 79],
                [185, 89, 90],
                [190, 100, 101],
                [199, 122, 123],
                [208, 145, 145],
                [218, 167, 167],
                [227, 189, 189],
                [232, 200, 200],
                [236, 211, 211],
                [241, 222, 222],
                [246, 233, 233],
                [250, 244, 244],
            ],
            Hue::Yellow => [
                [252, 232, 26],
                [253, 234, 51],
                [253, 235, 64],
                [253, 237, 76],
                [253, 239, 102],
                [253, 242, 128],
                [254, 245, 153],
                [254, 247, 178],
                [254, 248, 191],
                [254, 250, 204],
                [255, 251, 217],
                [255, 252, 230],
                [255, 254, 242],
            ],
            Hue::Orange => [
                [226, 165, 50],
                [229, 175, 73],
                [231, 180, 84],
                [233, 185, 95],
                [236, 195, 118],
                [239, 205, 141],
                [242, 215, 164],
                [245, 225, 187],
                [247, 230, 198],
                [249, 235, 209],
                [250, 240, 221],
                [252, 245, 232],
                [253, 250, 244],
            ],
            Hue::LightGreen => [
                [151, 189, 80],
                [163, 197, 99],
                [169, 200, 109],
                [174, 204, 118],
                [186, 211, 138],
                [197, 219, 157],
                [209, 226, 177],
                [220, 233, 197],
                [226, 237, 206],
                [232, 240, 216],
                [238, 244, 226],
                [243, 248, 235],
                [249, 251, 245],
            ],
            Hue::Purple => [
                [172, 40, 137],
                [181, 64, 150],
                [186, 76, 157],
                [191, 88, 163],
                [200, 112, 176],
                [209, 136, 189],
                [218, 159, 203],
                [227, 183, 216],
                [232, 195, 222],
                [237, 207, 229],
                [241, 219, 235],
                [246, 231, 242],
                [250, 243, 248],
            ],
            Hue::Brown => [
                [176, 142, 67],
                [185, 155, 88],
                [189, 161, 98],
                [193, 168, 109],
                [202, 180, 130],
                [211, 192, 151],
                [220, 205, 171],
                [229, 217, 192],
                [233, 224, 203],
                [237, 230, 213],
                [242, 236, 224],
                [246, 243, 234],
                [251, 249, 245],
            ],
            Hue::Cyan => [
                [57, 170, 227],
                [79, 180, 230],
                [90, 184, 232],
                [101, 189, 233],
                [123, 199, 236],
                [145, 208, 239],
                [167, 217, 243],
                [189, 227, 246],
                [200, 231, 247],
                [211, 236, 249],
                [222, 241, 250],
                [233, 246, 252],
                [244, 250, 253],
            ],
        }
    }

    pub fn from_name(name: &str) -> Option<Hue> {
        Hue::ALL
            .into_iter()
            .find(|h| h.name() == name || h.base_name() == name)
    }
}

/// Tint steps in percent of the base color.
pub const TINT_STEPS: [u8; 13] = [90, 80, 75, 70, 60, 50, 40, 30, 25, 20, 15, 10, 5];

/// Immutable name -> color mapping.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: BTreeMap<String, Rgba>,
}

impl Palette {
    /// The corporate palette, built on first use.
    pub fn corporate() -> &'static Palette {
        static CORPORATE: OnceLock<Palette> = OnceLock::new();
        CORPORATE.get_or_init(Palette::build)
    }

    fn build() -> Palette {
        let mut colors = BTreeMap::new();
        colors.insert("white".to_string(), Rgba::WHITE);
        colors.insert("transparent".to_string(), Rgba::TRANSPARENT);
        for hue in Hue::ALL {
            let base = hue.base();
            colors.insert(hue.base_name().to_string(), base);
            for (step, [r, g, b]) in TINT_STEPS.into_iter().zip(hue.tints()) {
                colors.insert(format!("{}{}", hue.name(), step), Rgba::rgb(r, g, b));
            }
        }
        Palette { colors }
    }

    pub fn get(&self, name: &str) -> Option<Rgba> {
        self.colors.get(name).copied()
    }

    /// Tint `step` of `hue`; `100` returns the base color. Unknown steps yield `None`.
    pub fn tint(&self, hue: Hue, step: u8) -> Option<Rgba> {
        if step == 100 {
            return self.get(hue.base_name());
        }
        self.get(&format!("{}{}", hue.name(), step))
    }

    /// Base color followed by its tints, darkest first.
    pub fn shades(&self, hue: Hue) -> Vec<(String, Rgba)> {
        std::iter::once(hue.base_name().to_string())
            .chain(TINT_STEPS.iter().map(|s| format!("{}{}", hue.name(), s)))
            .filter_map(|name| self.get(&name).map(|c| (name, c)))
            .collect()
    }

    /// All entries sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgba)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_creation() {
        let color = Rgba::rgb(255, 128, 64);
        assert_eq!(color.r, 255);
        assert_eq!(color.g, 128);
        assert_eq!(color.b, 64);
        assert_eq!(color.a, 255);
    }

    #[test]
    fn hex_roundtrip_and_alpha() {
        assert_eq!(Rgba::from_hex("#4664aa"), Some(Rgba::rgb(0x46, 0x64, 0xaa)));
        assert_eq!(Rgba::TRANSPARENT.to_hex(), "#FFFFFF00");
        assert_eq!(Rgba::from_hex("#12345"), None);
        assert_eq!(Rgba::from_hex("zzzzzz"), None);
        assert_eq!(Rgba::BLACK.with_alpha(0.5).a, 128);
    }

    #[test]
    fn palette_size() {
        // 10 hues * (base + 13 tints) + white + transparent
        assert_eq!(Palette::corporate().len(), 142);
    }

    #[test]
    fn gray_tints_follow_black() {
        let p = Palette::corporate();
        assert_eq!(p.get("black"), Some(Rgba::BLACK));
        assert_eq!(p.get("gray50"), Some(Rgba::rgb(128, 128, 128)));
        assert_eq!(p.get("gray"), None);
    }

    #[test]
    fn green_tint_matches_corporate_table() {
        // green80 is (0.2, 0.6706, 0.6078) in unit RGB
        let c = Palette::corporate().get("green80").unwrap();
        assert_eq!((c.r, c.g, c.b), (51, 171, 155));
    }

    #[test]
    fn tints_keep_published_rounding() {
        // gray90 is 0.1 and green90 is (0.1, 0.6294, 0.5588) in unit RGB
        let p = Palette::corporate();
        assert_eq!(p.get("gray90"), Some(Rgba::rgb(26, 26, 26)));
        assert_eq!(p.get("gray70"), Some(Rgba::rgb(76, 76, 76)));
        assert_eq!(p.get("green90"), Some(Rgba::rgb(26, 160, 142)));
        assert_eq!(p.get("blue90"), Some(Rgba::rgb(89, 115, 178)));
        assert_eq!(p.get("yellow50"), Some(Rgba::rgb(253, 242, 128)));
    }

    #[test]
    fn hue_lookup() {
        assert_eq!(Hue::from_name("black"), Some(Hue::Gray));
        assert_eq!(Hue::from_name("lightgreen"), Some(Hue::LightGreen));
        assert_eq!(Hue::from_name("magenta"), None);
        assert_eq!(Palette::corporate().shades(Hue::Cyan).len(), 14);
    }
}
