//! Palette validation, scoring, and derived metadata.
//!
//! Runs a fixed battery of foreground/background checks per mode. Hard
//! pairs below AA are errors and below AAA are warnings; the inverse-text
//! and differentiation checks only ever warn. Accessibility shortfalls are
//! always surfaced as data, never raised as errors.

use serde::{Deserialize, Serialize};

use crate::colors::Color;
use crate::contrast::Level;
use crate::palette::{Palette, Role};
use crate::theme::{Accessibility, Theme, ThemeMetadata};

/// Hard checks: each pair must meet AA against its background.
const HARD_PAIRS: [(Role, Role); 4] = [
    (Role::Text, Role::Background),
    (Role::TextSecondary, Role::Background),
    (Role::Primary, Role::Background),
    (Role::Text, Role::Surface),
];

/// Soft checks: inverse text on filled surfaces, warning-only.
const FILLED_SURFACES: [Role; 4] = [Role::Primary, Role::Secondary, Role::Accent, Role::Error];

/// Above this similarity, primary and secondary draw a differentiation
/// warning (1.0 = identical).
const SIMILARITY_LIMIT: f64 = 0.9;

/// Outcome of validating a theme. `is_valid` holds iff `errors` is empty;
/// the score starts at 100 and loses 10 per error and 5 per warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub score: u8,
}

/// Run the full check battery on `theme.colors` and, when present,
/// `theme.dark`.
pub fn validate_theme(theme: &Theme) -> Validation {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    check_palette(&theme.colors, "light", &mut errors, &mut warnings);
    if let Some(dark) = &theme.dark {
        check_palette(dark, "dark", &mut errors, &mut warnings);
    }

    let score = (100i64 - 10 * errors.len() as i64 - 5 * warnings.len() as i64).clamp(0, 100) as u8;

    Validation {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        score,
    }
}

fn check_palette(palette: &Palette, mode: &str, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    for (fg, bg) in HARD_PAIRS {
        let ratio = palette.get(fg).contrast_ratio(palette.get(bg));
        if ratio < Level::AA.target() {
            errors.push(format!(
                "{mode}: {} on {} is {ratio:.2}:1, below the AA minimum {:.2}:1",
                fg.name(),
                bg.name(),
                Level::AA.target(),
            ));
        } else if ratio < Level::AAA.target() {
            warnings.push(format!(
                "{mode}: {} on {} is {ratio:.2}:1, meets AA but falls short of AAA {:.2}:1",
                fg.name(),
                bg.name(),
                Level::AAA.target(),
            ));
        }
    }

    for surface in FILLED_SURFACES {
        let ratio = palette.text_inverse.contrast_ratio(palette.get(surface));
        if ratio < Level::AA.target() {
            warnings.push(format!(
                "{mode}: textInverse on {} is {ratio:.2}:1, below the AA minimum {:.2}:1",
                surface.name(),
                Level::AA.target(),
            ));
        }
    }

    let similarity = similarity(palette.primary, palette.secondary);
    if similarity > SIMILARITY_LIMIT {
        warnings.push(format!(
            "{mode}: primary and secondary are nearly indistinguishable (similarity {similarity:.2})",
        ));
    }
}

/// Perceptual similarity of two colors on a 0–1 scale (1 = identical):
/// one minus the equal-weight mean of normalized hue, saturation, and
/// lightness distances.
pub fn similarity(a: Color, b: Color) -> f64 {
    let (h1, s1, l1) = a.to_hsl();
    let (h2, s2, l2) = b.to_hsl();

    let hue_delta = (h1 - h2).abs();
    let hue_distance = hue_delta.min(360.0 - hue_delta) as f64 / 180.0;
    let saturation_distance = (s1 - s2).abs() as f64 / 100.0;
    let lightness_distance = (l1 - l2).abs() as f64 / 100.0;

    1.0 - (hue_distance + saturation_distance + lightness_distance) / 3.0
}

/// Derive descriptive metadata for a theme.
///
/// `accessibility` is `AA` when validation reports no errors and `Fail`
/// otherwise; derivation never assigns `AAA`.
pub fn generate_metadata(theme: &Theme) -> ThemeMetadata {
    let accessibility = if validate_theme(theme).errors.is_empty() {
        Accessibility::AA
    } else {
        Accessibility::Fail
    };

    let ratio = theme.colors.text.contrast_ratio(theme.colors.background);
    let contrast_ratio = (ratio * 100.0).round() / 100.0;

    ThemeMetadata {
        accessibility,
        contrast_ratio,
        mood: mood_of(theme.colors.primary),
        tags: tags_of(theme),
    }
}

/// Hue-bucketed mood adjectives with saturation/lightness modifiers.
fn mood_of(primary: Color) -> Vec<String> {
    let (h, s, l) = primary.to_hsl();

    let base: [&str; 2] = match (h / 45.0) as u32 {
        0 => ["energetic", "passionate"],
        1 => ["warm", "cheerful"],
        2 => ["fresh", "optimistic"],
        3 => ["natural", "balanced"],
        4 => ["calm", "serene"],
        5 => ["confident", "professional"],
        6 => ["creative", "luxurious"],
        _ => ["bold", "romantic"],
    };

    let mut mood: Vec<String> = base.iter().map(|m| m.to_string()).collect();
    if s >= 70.0 {
        mood.push("vibrant".to_string());
    } else if s < 25.0 {
        mood.push("muted".to_string());
    }
    if l >= 65.0 {
        mood.push("airy".to_string());
    } else if l < 35.0 {
        mood.push("dramatic".to_string());
    }
    mood
}

fn tags_of(theme: &Theme) -> Vec<String> {
    let mut tags = vec![theme.category.clone(), hue_family(theme.colors.primary).to_string()];
    if theme.dark.is_some() {
        tags.push("dark-mode".to_string());
    }
    tags
}

/// The color-family word for a hue
fn hue_family(color: Color) -> &'static str {
    let (h, s, _) = color.to_hsl();
    if s < 10.0 {
        return "gray";
    }
    match h {
        h if h < 15.0 || h >= 345.0 => "red",
        h if h < 45.0 => "orange",
        h if h < 75.0 => "yellow",
        h if h < 165.0 => "green",
        h if h < 195.0 => "cyan",
        h if h < 255.0 => "blue",
        h if h < 315.0 => "purple",
        _ => "pink",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::Level;
    use crate::palette::{Mode, Palette};
    use pretty_assertions::assert_eq;

    fn example_theme(level: Level) -> Theme {
        let primary = Color::from_hex("#2563eb").unwrap();
        let secondary = Color::from_hex("#10b981").unwrap();
        let accent = Color::from_hex("#f59e0b").unwrap();
        let colors = Palette::generate(primary, Some(secondary), Some(accent), Mode::Light, level);
        let dark = colors.dark_variant(level);
        Theme {
            id: "example".to_string(),
            name: "Example".to_string(),
            category: "cool".to_string(),
            description: None,
            colors,
            dark: Some(dark),
            metadata: None,
        }
    }

    #[test]
    fn test_example_seed_passes_aa() {
        let theme = example_theme(Level::AA);
        let validation = validate_theme(&theme);
        assert_eq!(validation.errors, Vec::<String>::new());
        assert!(validation.is_valid);
        // Both modes carry one primary-on-background AAA shortfall.
        assert_eq!(validation.warnings.len(), 2);
        assert_eq!(validation.score, 90);
        for warning in &validation.warnings {
            assert!(warning.contains("primary on background"), "{warning}");
        }
    }

    #[test]
    fn test_example_seed_aaa_is_clean() {
        let theme = example_theme(Level::AAA);
        let validation = validate_theme(&theme);
        assert!(validation.is_valid);
        assert_eq!(validation.warnings, Vec::<String>::new());
        assert_eq!(validation.score, 100);
    }

    #[test]
    fn test_hard_failure_is_an_error() {
        let mut theme = example_theme(Level::AA);
        theme.colors.text = theme.colors.background;
        let validation = validate_theme(&theme);
        assert!(!validation.is_valid);
        assert!(validation
            .errors
            .iter()
            .any(|e| e.starts_with("light: text on background")));
    }

    #[test]
    fn test_inverse_text_only_warns() {
        let mut theme = example_theme(Level::AA);
        // Make inverse text unreadable on primary; must not become an error.
        theme.colors.text_inverse = theme.colors.primary;
        let validation = validate_theme(&theme);
        assert!(validation.is_valid);
        assert!(validation
            .warnings
            .iter()
            .any(|w| w.contains("textInverse on primary")));
    }

    #[test]
    fn test_similar_seeds_draw_warning() {
        let mut theme = example_theme(Level::AA);
        theme.dark = None;
        theme.colors.secondary = theme.colors.primary.adjust_lightness(2.0);
        let validation = validate_theme(&theme);
        assert!(validation
            .warnings
            .iter()
            .any(|w| w.contains("nearly indistinguishable")));
    }

    #[test]
    fn test_similarity_scale() {
        let blue = Color::from_hex("#2563eb").unwrap();
        assert!((similarity(blue, blue) - 1.0).abs() < 1e-9);
        assert!(similarity(blue, Color::from_hex("#10b981").unwrap()) < 0.9);
        let near = blue.adjust_lightness(2.0);
        assert!(similarity(blue, near) > 0.9);
    }

    #[test]
    fn test_validation_is_deterministic() {
        let theme = example_theme(Level::AA);
        let a = validate_theme(&theme);
        let b = validate_theme(&theme);
        assert_eq!(a, b);
    }

    #[test]
    fn test_score_clamps_at_zero() {
        let mut theme = example_theme(Level::AA);
        let bg = theme.colors.background;
        theme.colors.text = bg;
        theme.colors.text_secondary = bg;
        theme.colors.primary = bg;
        theme.colors.secondary = bg;
        theme.colors.accent = bg;
        theme.colors.error = bg;
        theme.colors.text_inverse = bg;
        if let Some(dark) = theme.dark.as_mut() {
            let bg = dark.background;
            dark.text = bg;
            dark.text_secondary = bg;
            dark.primary = bg;
            dark.secondary = bg;
            dark.accent = bg;
            dark.error = bg;
            dark.text_inverse = bg;
        }
        let validation = validate_theme(&theme);
        assert!(!validation.is_valid);
        assert_eq!(validation.score, 0);
    }

    #[test]
    fn test_metadata_accessibility_and_ratio() {
        let theme = example_theme(Level::AA);
        let metadata = generate_metadata(&theme);
        assert_eq!(metadata.accessibility, Accessibility::AA);
        assert!(metadata.contrast_ratio >= 4.5);

        let mut broken = theme;
        broken.colors.text = broken.colors.background;
        assert_eq!(generate_metadata(&broken).accessibility, Accessibility::Fail);
    }

    #[test]
    fn test_metadata_mood_and_tags() {
        let theme = example_theme(Level::AA);
        let metadata = generate_metadata(&theme);
        // Blue primary (hue ≈221°): calm/serene bucket, high saturation.
        assert!(metadata.mood.contains(&"calm".to_string()));
        assert!(metadata.mood.contains(&"vibrant".to_string()));
        assert!(metadata.tags.contains(&"cool".to_string()));
        assert!(metadata.tags.contains(&"blue".to_string()));
        assert!(metadata.tags.contains(&"dark-mode".to_string()));

        let mut light_only = example_theme(Level::AA);
        light_only.dark = None;
        assert!(!generate_metadata(&light_only)
            .tags
            .contains(&"dark-mode".to_string()));
    }

    #[test]
    fn test_hue_families() {
        assert_eq!(hue_family(Color::from_hex("#dc2626").unwrap()), "red");
        assert_eq!(hue_family(Color::from_hex("#16a34a").unwrap()), "green");
        assert_eq!(hue_family(Color::from_hex("#2563eb").unwrap()), "blue");
        assert_eq!(hue_family(Color::from_hex("#888888").unwrap()), "gray");
    }
}
