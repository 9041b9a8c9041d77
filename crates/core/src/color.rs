//! Color types and conversion functions for asset-palette.
//!
//! [`Rgb`] is the exact 8-bit color sampled from an image. Two colors that
//! differ by a single unit in one channel are distinct; there is no tolerance
//! or clustering anywhere in the pipeline. [`Hsv`] is derived from it with a
//! pure conversion and is what the classifier works on.

use crate::error::PaletteError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 8-bit sRGB color, compared and hashed by exact channel value.
///
/// Serializes as a lowercase hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue, saturation and value, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `PaletteError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Rgb, PaletteError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(PaletteError::InvalidColor(format!(
                "expected 6 hex digits, got {hex:?}"
            )));
        }
        let r = u8::from_str_radix(&digits[0..2], 16)
            .map_err(|e| PaletteError::InvalidColor(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&digits[2..4], 16)
            .map_err(|e| PaletteError::InvalidColor(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&digits[4..6], 16)
            .map_err(|e| PaletteError::InvalidColor(format!("invalid blue component: {e}")))?;
        Ok(Rgb { r, g, b })
    }

    /// Canonical lowercase `"#rrggbb"` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb { r, g, b }
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        (c.r, c.g, c.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Hsv {
    /// Display units: hue in degrees [0, 360), saturation and value in percent.
    pub fn to_degrees_percent(self) -> (f64, f64, f64) {
        (self.h * 360.0, self.s * 100.0, self.v * 100.0)
    }
}

/// Converts an 8-bit color to HSV.
///
/// Value is the largest channel and saturation the channel range relative to
/// it. Hue comes from whichever channel is largest (red wins ties, then
/// green) and is wrapped into [0, 1). Achromatic colors get `h = s = 0`.
pub fn rgb_to_hsv(c: Rgb) -> Hsv {
    let r = f64::from(c.r) / 255.0;
    let g = f64::from(c.g) / 255.0;
    let b = f64::from(c.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let v = max;
    if max == min {
        return Hsv { h: 0.0, s: 0.0, v };
    }

    let range = max - min;
    let s = range / max;
    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;

    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    Hsv {
        h: (h / 6.0).rem_euclid(1.0),
        s,
        v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    // -- Hex parsing / formatting --

    #[test]
    fn from_hex_parses_red_with_hash() {
        assert_eq!(Rgb::from_hex("#ff0000").unwrap(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn from_hex_parses_green_without_hash() {
        assert_eq!(Rgb::from_hex("00ff00").unwrap(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn from_hex_is_case_insensitive() {
        assert_eq!(
            Rgb::from_hex("#FF00AA").unwrap(),
            Rgb::from_hex("#ff00aa").unwrap()
        );
    }

    #[test]
    fn from_hex_returns_error_for_invalid_hex() {
        assert!(Rgb::from_hex("#gggggg").is_err());
        assert!(Rgb::from_hex("#fff").is_err());
        assert!(Rgb::from_hex("").is_err());
        assert!(Rgb::from_hex("#ff00ff00").is_err());
        assert!(Rgb::from_hex("#ff00é").is_err());
    }

    #[test]
    fn to_hex_is_lowercase_and_zero_padded() {
        assert_eq!(Rgb::new(0x0a, 0xbc, 0x01).to_hex(), "#0abc01");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb::new(255, 255, 255).to_hex(), "#ffffff");
    }

    #[test]
    fn display_matches_to_hex() {
        let c = Rgb::new(0x80, 0x40, 0x20);
        assert_eq!(c.to_string(), c.to_hex());
    }

    #[test]
    fn hex_round_trip_every_channel_value() {
        for v in 0..=255u8 {
            for c in [Rgb::new(v, 0, 0), Rgb::new(0, v, 0), Rgb::new(0, 0, v), Rgb::new(v, v, v)] {
                assert_eq!(Rgb::from_hex(&c.to_hex()).unwrap(), c);
            }
        }
    }

    // -- Serde --

    #[test]
    fn rgb_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(255, 0, 0)).unwrap();
        assert_eq!(json, "\"#ff0000\"");
    }

    #[test]
    fn rgb_deserialize_rejects_invalid_hex() {
        let result: Result<Rgb, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
    }

    // -- HSV conversion --

    #[test]
    fn black_has_zero_value_and_saturation() {
        let hsv = rgb_to_hsv(Rgb::new(0, 0, 0));
        assert_eq!(hsv, Hsv { h: 0.0, s: 0.0, v: 0.0 });
    }

    #[test]
    fn white_has_full_value_zero_saturation() {
        let hsv = rgb_to_hsv(Rgb::new(255, 255, 255));
        assert_eq!(hsv, Hsv { h: 0.0, s: 0.0, v: 1.0 });
    }

    #[test]
    fn primaries_land_on_expected_hues() {
        let red = rgb_to_hsv(Rgb::new(255, 0, 0));
        assert!(approx_eq(red.h, 0.0) && approx_eq(red.s, 1.0) && approx_eq(red.v, 1.0));

        let green = rgb_to_hsv(Rgb::new(0, 255, 0));
        assert!(approx_eq(green.h, 1.0 / 3.0), "green h={}", green.h);

        let blue = rgb_to_hsv(Rgb::new(0, 0, 255));
        assert!(approx_eq(blue.h, 2.0 / 3.0), "blue h={}", blue.h);
    }

    #[test]
    fn magenta_wraps_into_upper_hue_range() {
        let magenta = rgb_to_hsv(Rgb::new(255, 0, 255));
        assert!(approx_eq(magenta.h, 5.0 / 6.0), "magenta h={}", magenta.h);
    }

    #[test]
    fn red_dominant_with_more_blue_wraps_below_one() {
        // r is max, b > g gives a negative raw hue that must wrap.
        let hsv = rgb_to_hsv(Rgb::new(255, 0, 51));
        assert!(hsv.h > 0.9 && hsv.h < 1.0, "h={}", hsv.h);
    }

    #[test]
    fn mid_gray_has_half_value() {
        let hsv = rgb_to_hsv(Rgb::new(128, 128, 128));
        assert_eq!(hsv.s, 0.0);
        assert!(approx_eq(hsv.v, 128.0 / 255.0));
    }

    #[test]
    fn display_units_scale_hue_and_percentages() {
        let (h, s, v) = rgb_to_hsv(Rgb::new(0, 0, 255)).to_degrees_percent();
        assert!((h - 240.0).abs() < 1e-6);
        assert!((s - 100.0).abs() < 1e-6);
        assert!((v - 100.0).abs() < 1e-6);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hex_round_trip_is_exact(r: u8, g: u8, b: u8) {
                let c = Rgb::new(r, g, b);
                prop_assert_eq!(Rgb::from_hex(&c.to_hex()).unwrap(), c);
            }

            #[test]
            fn hsv_components_stay_in_unit_range(r: u8, g: u8, b: u8) {
                let hsv = rgb_to_hsv(Rgb::new(r, g, b));
                prop_assert!((0.0..=1.0).contains(&hsv.h), "h={}", hsv.h);
                prop_assert!((0.0..=1.0).contains(&hsv.s), "s={}", hsv.s);
                prop_assert!((0.0..=1.0).contains(&hsv.v), "v={}", hsv.v);
            }
        }
    }
}
