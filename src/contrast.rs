//! WCAG contrast checks and the contrast repair search.
//!
//! The resolver takes a foreground/background pair and a conformance level
//! and returns a foreground guaranteed to meet the level's normal-text
//! ratio, preserving the original hue wherever possible.

use serde::{Deserialize, Serialize};

use crate::colors::Color;

/// Lightness search: increments of 5, up to 50 away from the start.
const LIGHTNESS_STEP: f32 = 5.0;
const LIGHTNESS_RANGE: f32 = 50.0;

/// Saturation search: increments of 10, up to 40 toward neutral.
const SATURATION_STEP: f32 = 10.0;
const SATURATION_RANGE: f32 = 40.0;

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    AA,
    AAA,
}

impl Level {
    /// Required ratio for normal text
    pub const fn target(self) -> f64 {
        match self {
            Level::AA => 4.5,
            Level::AAA => 7.0,
        }
    }

    /// Required ratio for large text (≥18pt, or ≥14pt bold)
    pub const fn large_text_target(self) -> f64 {
        match self {
            Level::AA => 3.0,
            Level::AAA => 4.5,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::AA
    }
}

/// Whether `fg` on `bg` meets `level`'s required ratio.
pub fn is_accessible(fg: Color, bg: Color, level: Level, large_text: bool) -> bool {
    let target = if large_text {
        level.large_text_target()
    } else {
        level.target()
    };
    fg.contrast_ratio(bg) >= target
}

/// Adjust `color` until it meets `level`'s normal-text ratio against
/// `background`.
///
/// Deterministic priority order:
/// 1. Return the input unchanged if it already complies.
/// 2. Step lightness away from the background (toward white on dark
///    backgrounds, toward black on light ones) and return the first
///    compliant candidate.
/// 3. Step saturation toward neutral at the original lightness and return
///    the first compliant candidate.
/// 4. Fall back to whichever of pure white/black carries the higher
///    contrast. For AA this always complies; for AAA against a mid-tone
///    background no color can, and the maximum-contrast extreme is the
///    best available answer.
pub fn resolve(color: Color, background: Color, level: Level) -> Color {
    let target = level.target();
    if color.contrast_ratio(background) >= target {
        return color;
    }

    let toward_white = background.luminance() < 0.5;
    let (h, s, l) = color.to_hsl();

    let mut step = LIGHTNESS_STEP;
    while step <= LIGHTNESS_RANGE {
        let lightness = if toward_white {
            (l + step).min(100.0)
        } else {
            (l - step).max(0.0)
        };
        let candidate = Color::from_hsl(h, s, lightness);
        if candidate.contrast_ratio(background) >= target {
            return candidate;
        }
        step += LIGHTNESS_STEP;
    }

    let mut step = SATURATION_STEP;
    while step <= SATURATION_RANGE {
        let candidate = Color::from_hsl(h, (s - step).max(0.0), l);
        if candidate.contrast_ratio(background) >= target {
            return candidate;
        }
        step += SATURATION_STEP;
    }

    max_contrast_extreme(background)
}

/// The pure extreme with the higher contrast against `background`:
/// white on dark backgrounds, black on light ones.
pub fn max_contrast_extreme(background: Color) -> Color {
    if Color::WHITE.contrast_ratio(background) >= Color::BLACK.contrast_ratio(background) {
        Color::WHITE
    } else {
        Color::BLACK
    }
}
