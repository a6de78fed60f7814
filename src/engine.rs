//! Orchestration: seed in, validated theme out.
//!
//! Composes the palette generator and validator. Both operations are pure
//! transforms; identical inputs produce bit-identical themes.

use crate::colors::Color;
use crate::contrast::Level;
use crate::error::{TinctError, TinctResult};
use crate::palette::{Mode, Palette};
use crate::theme::{Theme, ThemeInput};
use crate::validate::{generate_metadata, validate_theme, Validation};

/// Result of a [`validate_and_fix`] pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FixOutcome {
    pub theme: Theme,
    pub validation: Validation,
}

/// Build a theme from a seed.
///
/// Fails fast on empty `id`/`name`/`category` and on malformed hex, naming
/// the offending field. Generates `colors` for `input.mode`, a `dark`
/// palette when `input.generate_dark`, and attaches freshly derived
/// metadata.
pub fn create_theme(input: &ThemeInput) -> TinctResult<Theme> {
    for (field, value) in [
        ("id", &input.id),
        ("name", &input.name),
        ("category", &input.category),
    ] {
        if value.trim().is_empty() {
            return Err(TinctError::missing_field(field).into());
        }
    }

    let primary = seed_color("primary", &input.primary)?;
    let secondary = input
        .secondary
        .as_deref()
        .map(|hex| seed_color("secondary", hex))
        .transpose()?;
    let accent = input
        .accent
        .as_deref()
        .map(|hex| seed_color("accent", hex))
        .transpose()?;

    let colors = Palette::generate(primary, secondary, accent, input.mode, input.contrast_level);
    let dark = input
        .generate_dark
        .then(|| colors.dark_variant(input.contrast_level));

    let mut theme = Theme {
        id: input.id.clone(),
        name: input.name.clone(),
        category: input.category.clone(),
        description: input.description.clone(),
        colors,
        dark,
        metadata: None,
    };
    theme.metadata = Some(generate_metadata(&theme));
    Ok(theme)
}

/// Validate `theme`; when it fails, regenerate its palettes once from the
/// existing seed colors at `level` and re-validate.
///
/// A single repair pass, no convergence loop: the returned validation may
/// still be failing, and deciding whether to retry or reject is the
/// caller's call. Never mutates the input.
pub fn validate_and_fix(theme: &Theme, level: Level) -> FixOutcome {
    let validation = validate_theme(theme);
    if validation.is_valid {
        return FixOutcome {
            theme: theme.clone(),
            validation,
        };
    }

    // The palette doesn't record its mode; the background's luminance
    // recovers it.
    let mode = if theme.colors.background.luminance() < 0.5 {
        Mode::Dark
    } else {
        Mode::Light
    };

    let colors = Palette::generate(
        theme.colors.primary,
        Some(theme.colors.secondary),
        Some(theme.colors.accent),
        mode,
        level,
    );
    let dark = theme.dark.as_ref().map(|_| colors.dark_variant(level));

    let mut fixed = Theme {
        colors,
        dark,
        metadata: None,
        ..theme.clone()
    };
    fixed.metadata = Some(generate_metadata(&fixed));
    let validation = validate_theme(&fixed);

    FixOutcome {
        theme: fixed,
        validation,
    }
}

fn seed_color(field: &str, hex: &str) -> TinctResult<Color> {
    Color::from_hex(hex).map_err(|_| {
        TinctError::color(
            hex.to_string(),
            (0, hex.len()),
            format!("`{field}` is not a valid hex color: `{hex}`"),
        )
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Accessibility;
    use pretty_assertions::assert_eq;

    fn example_input() -> ThemeInput {
        ThemeInput::new("example", "Example", "cool", "#2563eb")
            .with_secondary("#10b981")
            .with_accent("#f59e0b")
    }

    #[test]
    fn test_create_theme_complete() {
        let theme = create_theme(&example_input()).unwrap();
        assert_eq!(theme.id, "example");
        assert!(theme.dark.is_some());
        let metadata = theme.metadata.as_ref().unwrap();
        assert_eq!(metadata.accessibility, Accessibility::AA);
        assert!(theme.colors.text.contrast_ratio(theme.colors.background) >= 4.5);
    }

    #[test]
    fn test_create_theme_without_dark() {
        let theme = create_theme(&example_input().without_dark()).unwrap();
        assert!(theme.dark.is_none());
    }

    #[test]
    fn test_create_theme_is_idempotent() {
        let input = example_input();
        assert_eq!(create_theme(&input).unwrap(), create_theme(&input).unwrap());
    }

    #[test]
    fn test_empty_fields_fail_fast() {
        let mut input = example_input();
        input.name = "  ".to_string();
        let err = create_theme(&input).unwrap_err();
        assert!(err.to_string().contains("`name`"));
    }

    #[test]
    fn test_malformed_hex_names_field() {
        let input = example_input().with_accent("#xyz");
        let err = create_theme(&input).unwrap_err();
        assert!(err.to_string().contains("`accent`"));
    }

    #[test]
    fn test_dark_mode_input() {
        let input = example_input().with_mode(Mode::Dark);
        let theme = create_theme(&input).unwrap();
        assert!(theme.colors.background.luminance() < 0.5);
        // generateDark is honored independently of the input mode.
        assert!(theme.dark.is_some());
    }

    #[test]
    fn test_valid_theme_passes_through_fix() {
        let theme = create_theme(&example_input()).unwrap();
        let outcome = validate_and_fix(&theme, Level::AA);
        assert!(outcome.validation.is_valid);
        assert_eq!(outcome.theme, theme);
    }

    #[test]
    fn test_fix_regenerates_broken_palette() {
        let mut theme = create_theme(&example_input()).unwrap();
        theme.colors.text = theme.colors.background;

        let outcome = validate_and_fix(&theme, Level::AA);
        assert!(outcome.validation.is_valid);
        assert!(outcome
            .theme
            .colors
            .text
            .contrast_ratio(outcome.theme.colors.background) >= 4.5);
        // Seeds survive the regeneration.
        assert_eq!(outcome.theme.colors.primary, theme.colors.primary);
        // Metadata was recomputed for the fixed palette.
        assert_eq!(
            outcome.theme.metadata.as_ref().unwrap().accessibility,
            Accessibility::AA
        );
    }

    #[test]
    fn test_fix_never_mutates_input() {
        let mut theme = create_theme(&example_input()).unwrap();
        theme.colors.text = theme.colors.background;
        let before = theme.clone();
        let _ = validate_and_fix(&theme, Level::AA);
        assert_eq!(theme, before);
    }

    #[test]
    fn test_fix_preserves_dark_presence() {
        let mut with_dark = create_theme(&example_input()).unwrap();
        with_dark.colors.text = with_dark.colors.background;
        assert!(validate_and_fix(&with_dark, Level::AA).theme.dark.is_some());

        let mut without_dark = create_theme(&example_input().without_dark()).unwrap();
        without_dark.colors.text = without_dark.colors.background;
        assert!(validate_and_fix(&without_dark, Level::AA).theme.dark.is_none());
    }
}
