//! Color space primitives for palette generation.
//!
//! Provides the canonical `Color` value type with:
//! - sRGB hex parsing and formatting (3- and 6-digit forms)
//! - HSL conversions for perceptual adjustments
//! - WCAG 2.1 relative luminance and contrast ratio
//! - Hue harmonies (complementary, analogous, triadic)

use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{TinctError, TinctResult};

/// An opaque sRGB color. The canonical external form is `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Create a color from RGB channels
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Get the RGB components
    pub const fn rgb_components(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Parse a hexadecimal color string.
    ///
    /// Accepts 3- or 6-digit hex, with or without a leading `#`. The 3-digit
    /// shorthand expands by digit duplication (`#fa0` → `#ffaa00`). Malformed
    /// input fails with a labelled [`TinctError::InvalidColorFormat`].
    pub fn from_hex(hex: &str) -> TinctResult<Self> {
        let digits = hex.trim_start_matches('#');
        let offset = hex.len() - digits.len();

        if !digits.is_ascii() {
            return Err(TinctError::color(
                hex.to_string(),
                (0, hex.len()),
                "expected ASCII hex digits".to_string(),
            )
            .into());
        }

        let channel = |span: std::ops::Range<usize>| -> TinctResult<u8> {
            u8::from_str_radix(&digits[span.clone()], 16).map_err(|_| {
                TinctError::color(
                    hex.to_string(),
                    (offset + span.start, span.len()),
                    format!("`{}` is not a hex digit pair", &digits[span]),
                )
                .into()
            })
        };

        match digits.len() {
            3 => {
                let nibble = |i: usize| -> TinctResult<u8> {
                    let d = u8::from_str_radix(&digits[i..=i], 16).map_err(|_| {
                        TinctError::color(
                            hex.to_string(),
                            (offset + i, 1),
                            format!("`{}` is not a hex digit", &digits[i..=i]),
                        )
                    })?;
                    Ok(d * 17)
                };
                Ok(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            len => Err(TinctError::color(
                hex.to_string(),
                (0, hex.len()),
                format!("expected 3 or 6 hex digits, found {}", len),
            )
            .into()),
        }
    }

    /// Format as a lowercase `#rrggbb` string
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Create a color from HSL values.
    ///
    /// Hue wraps modulo 360; saturation and lightness clamp to [0, 100].
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        let h = h.rem_euclid(360.0);
        let s = s.clamp(0.0, 100.0) / 100.0;
        let l = l.clamp(0.0, 100.0) / 100.0;

        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return Self::rgb(v, v, v);
        }

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h as u32 {
            0..=59 => (c, x, 0.0),
            60..=119 => (x, c, 0.0),
            120..=179 => (0.0, c, x),
            180..=239 => (0.0, x, c),
            240..=299 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self::rgb(
            ((r + m) * 255.0).round() as u8,
            ((g + m) * 255.0).round() as u8,
            ((b + m) * 255.0).round() as u8,
        )
    }

    /// Convert to HSL values: hue in degrees [0, 360), saturation and
    /// lightness as percentages [0, 100]
    pub fn to_hsl(&self) -> (f32, f32, f32) {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let mut h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        if h < 0.0 {
            h += 360.0;
        }

        let l = (max + min) / 2.0;
        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };

        (h, s * 100.0, l * 100.0)
    }

    /// WCAG 2.1 relative luminance in [0.0, 1.0].
    ///
    /// Linearizes each sRGB channel (threshold 0.03928, gamma 2.4) and
    /// weights by the sRGB primaries.
    pub fn luminance(&self) -> f64 {
        fn linearize(channel: u8) -> f64 {
            let c = channel as f64 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// WCAG 2.1 contrast ratio against another color.
    ///
    /// `(L_lighter + 0.05) / (L_darker + 0.05)`, in [1.0, 21.0], symmetric
    /// in its arguments.
    pub fn contrast_ratio(&self, other: Color) -> f64 {
        let la = self.luminance();
        let lb = other.luminance();
        let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Lightens the color by a percentage (0-100)
    pub fn lighten(&self, amount: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l + amount).min(100.0))
    }

    /// Darkens the color by a percentage (0-100)
    pub fn darken(&self, amount: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l - amount).max(0.0))
    }

    /// Shift lightness by a signed delta, clamped to [0, 100]
    pub fn adjust_lightness(&self, delta: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l + delta).clamp(0.0, 100.0))
    }

    /// Shift saturation by a signed delta, clamped to [0, 100]
    pub fn adjust_saturation(&self, delta: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, (s + delta).clamp(0.0, 100.0), l)
    }

    /// Rotate hue by a signed number of degrees, wrapping modulo 360
    pub fn rotate_hue(&self, degrees: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl((h + degrees).rem_euclid(360.0), s, l)
    }

    /// The complementary color (+180° hue)
    pub fn complementary(&self) -> Self {
        self.rotate_hue(180.0)
    }

    /// The two analogous colors (±30° hue)
    pub fn analogous(&self) -> (Self, Self) {
        (self.rotate_hue(-30.0), self.rotate_hue(30.0))
    }

    /// The two triadic colors (+120° and +240° hue)
    pub fn triadic(&self) -> (Self, Self) {
        (self.rotate_hue(120.0), self.rotate_hue(240.0))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = miette::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(|e| de::Error::custom(e.to_string()))
    }
}
