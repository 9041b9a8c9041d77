//! Coarse hue/lightness classification of a single color.
//!
//! Thresholds operate on [`Hsv`] components in [0, 1]. Low-saturation colors
//! are split by value into black/white/gray; everything else is bucketed by
//! hue. The `dark` and `vibrant` flags are computed independently of the
//! category and are never reconciled with it.

use crate::color::{rgb_to_hsv, Hsv, Rgb};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Saturation below which a color is treated as neutral.
const NEUTRAL_SATURATION: f64 = 0.15;
/// Neutral colors with value below this are black.
const BLACK_VALUE: f64 = 0.15;
/// Neutral colors with value above this are white.
const WHITE_VALUE: f64 = 0.85;

/// Basic color category assigned by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Black,
    White,
    Gray,
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    /// No hue range matched. Only reachable at the exact `h == 0.95` seam.
    Unknown,
}

impl Category {
    /// Lowercase name, as printed in reports.
    pub fn name(self) -> &'static str {
        match self {
            Category::Black => "black",
            Category::White => "white",
            Category::Gray => "gray",
            Category::Red => "red",
            Category::Orange => "orange",
            Category::Yellow => "yellow",
            Category::Green => "green",
            Category::Cyan => "cyan",
            Category::Blue => "blue",
            Category::Purple => "purple",
            Category::Unknown => "unknown",
        }
    }

    /// True for black, white and gray.
    pub fn is_neutral(self) -> bool {
        matches!(self, Category::Black | Category::White | Category::Gray)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Assigns a category using fixed thresholds, checked in order.
pub fn classify(hsv: Hsv) -> Category {
    let Hsv { h, s, v } = hsv;
    if s < NEUTRAL_SATURATION {
        return if v < BLACK_VALUE {
            Category::Black
        } else if v > WHITE_VALUE {
            Category::White
        } else {
            Category::Gray
        };
    }

    if h < 0.05 || h > 0.95 {
        Category::Red
    } else if (0.05..0.15).contains(&h) {
        Category::Orange
    } else if (0.15..0.25).contains(&h) {
        Category::Yellow
    } else if (0.25..0.5).contains(&h) {
        Category::Green
    } else if (0.5..0.65).contains(&h) {
        Category::Cyan
    } else if (0.65..0.75).contains(&h) {
        Category::Blue
    } else if (0.75..0.95).contains(&h) {
        Category::Purple
    } else {
        Category::Unknown
    }
}

/// v < 0.5.
pub fn is_dark(hsv: Hsv) -> bool {
    hsv.v < 0.5
}

/// s > 0.5 and v > 0.5.
pub fn is_vibrant(hsv: Hsv) -> bool {
    hsv.s > 0.5 && hsv.v > 0.5
}

/// Everything the reports need to know about one color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStat {
    pub hex: String,
    pub rgb: (u8, u8, u8),
    /// Hue in degrees, saturation and value in percent.
    pub hsv: (f64, f64, f64),
    pub is_dark: bool,
    pub is_vibrant: bool,
    pub category: Category,
}

impl ColorStat {
    pub fn from_rgb(color: Rgb) -> Self {
        let hsv = rgb_to_hsv(color);
        ColorStat {
            hex: color.to_hex(),
            rgb: color.into(),
            hsv: hsv.to_degrees_percent(),
            is_dark: is_dark(hsv),
            is_vibrant: is_vibrant(hsv),
            category: classify(hsv),
        }
    }

    pub fn color(&self) -> Rgb {
        let (r, g, b) = self.rgb;
        Rgb::new(r, g, b)
    }
}

impl From<Rgb> for ColorStat {
    fn from(color: Rgb) -> Self {
        ColorStat::from_rgb(color)
    }
}
