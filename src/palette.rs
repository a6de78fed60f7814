//! Semantic palette generation.
//!
//! Expands a three-color seed into the full role→color mapping for one
//! mode. Neutral and text roles come from fixed per-mode ramps; seed and
//! status colors are contrast-repaired against the mode's background.

use serde::{Deserialize, Serialize};

use crate::colors::Color;
use crate::contrast::{self, Level};

/// Interaction variants shift lightness by these deltas, away from the
/// base: darker when the base is light, lighter when it is dark.
const HOVER_DELTA: f32 = 8.0;
const ACTIVE_DELTA: f32 = 15.0;

/// Palette mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub const fn opposite(self) -> Mode {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }

    fn ramp(self) -> &'static ModeRamp {
        match self {
            Mode::Light => &LIGHT_RAMP,
            Mode::Dark => &DARK_RAMP,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Light
    }
}

/// The semantic roles of a palette, in declaration order.
///
/// This order is the CSS emission order and is part of the output
/// contract; reordering or renaming a role is a breaking change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Primary,
    PrimaryHover,
    PrimaryActive,
    Secondary,
    SecondaryHover,
    SecondaryActive,
    Accent,
    AccentHover,
    AccentActive,
    Background,
    BackgroundAlt,
    Surface,
    SurfaceAlt,
    Text,
    TextSecondary,
    TextMuted,
    TextInverse,
    Border,
    BorderLight,
    BorderHover,
    Success,
    Warning,
    Error,
    Info,
}

impl Role {
    /// Every role, in declaration order
    pub const ALL: [Role; 24] = [
        Role::Primary,
        Role::PrimaryHover,
        Role::PrimaryActive,
        Role::Secondary,
        Role::SecondaryHover,
        Role::SecondaryActive,
        Role::Accent,
        Role::AccentHover,
        Role::AccentActive,
        Role::Background,
        Role::BackgroundAlt,
        Role::Surface,
        Role::SurfaceAlt,
        Role::Text,
        Role::TextSecondary,
        Role::TextMuted,
        Role::TextInverse,
        Role::Border,
        Role::BorderLight,
        Role::BorderHover,
        Role::Success,
        Role::Warning,
        Role::Error,
        Role::Info,
    ];

    /// The role's camelCase wire name, matching the JSON field names
    pub const fn name(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::PrimaryHover => "primaryHover",
            Role::PrimaryActive => "primaryActive",
            Role::Secondary => "secondary",
            Role::SecondaryHover => "secondaryHover",
            Role::SecondaryActive => "secondaryActive",
            Role::Accent => "accent",
            Role::AccentHover => "accentHover",
            Role::AccentActive => "accentActive",
            Role::Background => "background",
            Role::BackgroundAlt => "backgroundAlt",
            Role::Surface => "surface",
            Role::SurfaceAlt => "surfaceAlt",
            Role::Text => "text",
            Role::TextSecondary => "textSecondary",
            Role::TextMuted => "textMuted",
            Role::TextInverse => "textInverse",
            Role::Border => "border",
            Role::BorderLight => "borderLight",
            Role::BorderHover => "borderHover",
            Role::Success => "success",
            Role::Warning => "warning",
            Role::Error => "error",
            Role::Info => "info",
        }
    }
}

/// Fixed neutral/text/status bases for one mode. These are constant
/// lookup tables, not derived from the seed.
struct ModeRamp {
    background: Color,
    background_alt: Color,
    surface: Color,
    surface_alt: Color,
    border: Color,
    border_light: Color,
    border_hover: Color,
    text: Color,
    text_secondary: Color,
    text_muted: Color,
    success_base: Color,
    warning_base: Color,
    error_base: Color,
    info_base: Color,
}

const LIGHT_RAMP: ModeRamp = ModeRamp {
    background: Color::rgb(255, 255, 255),    // #ffffff
    background_alt: Color::rgb(248, 250, 252), // #f8fafc
    surface: Color::rgb(241, 245, 249),       // #f1f5f9
    surface_alt: Color::rgb(226, 232, 240),   // #e2e8f0
    border: Color::rgb(226, 232, 240),        // #e2e8f0
    border_light: Color::rgb(241, 245, 249),  // #f1f5f9
    border_hover: Color::rgb(203, 213, 225),  // #cbd5e1
    text: Color::rgb(15, 23, 42),             // #0f172a
    text_secondary: Color::rgb(51, 65, 85),   // #334155
    text_muted: Color::rgb(100, 116, 139),    // #64748b
    success_base: Color::rgb(22, 163, 74),    // #16a34a
    warning_base: Color::rgb(217, 119, 6),    // #d97706
    error_base: Color::rgb(220, 38, 38),      // #dc2626
    info_base: Color::rgb(37, 99, 235),       // #2563eb
};

const DARK_RAMP: ModeRamp = ModeRamp {
    background: Color::rgb(15, 23, 42),       // #0f172a
    background_alt: Color::rgb(30, 41, 59),   // #1e293b
    surface: Color::rgb(30, 41, 59),          // #1e293b
    surface_alt: Color::rgb(51, 65, 85),      // #334155
    border: Color::rgb(51, 65, 85),           // #334155
    border_light: Color::rgb(30, 41, 59),     // #1e293b
    border_hover: Color::rgb(71, 85, 105),    // #475569
    text: Color::rgb(248, 250, 252),          // #f8fafc
    text_secondary: Color::rgb(203, 213, 225), // #cbd5e1
    text_muted: Color::rgb(148, 163, 184),    // #94a3b8
    success_base: Color::rgb(74, 222, 128),   // #4ade80
    warning_base: Color::rgb(251, 191, 36),   // #fbbf24
    error_base: Color::rgb(248, 113, 113),    // #f87171
    info_base: Color::rgb(96, 165, 250),      // #60a5fa
};

/// A complete role→color assignment for one mode.
///
/// Structural completeness is enforced by the type: every role is a field,
/// and [`Palette::get`] matches exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_active: Color,
    pub secondary: Color,
    pub secondary_hover: Color,
    pub secondary_active: Color,
    pub accent: Color,
    pub accent_hover: Color,
    pub accent_active: Color,
    pub background: Color,
    pub background_alt: Color,
    pub surface: Color,
    pub surface_alt: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_inverse: Color,
    pub border: Color,
    pub border_light: Color,
    pub border_hover: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

impl Palette {
    /// Expand a seed into a full palette for `mode`.
    ///
    /// `secondary` and `accent` each default to the complementary hue of
    /// `primary` when omitted. Every seed-derived and status color is
    /// contrast-repaired against the mode's background at `level`.
    pub fn generate(
        primary: Color,
        secondary: Option<Color>,
        accent: Option<Color>,
        mode: Mode,
        level: Level,
    ) -> Self {
        let ramp = mode.ramp();
        let background = ramp.background;

        let secondary = secondary.unwrap_or_else(|| primary.complementary());
        let accent = accent.unwrap_or_else(|| primary.complementary());

        let primary = contrast::resolve(primary, background, level);
        let secondary = contrast::resolve(secondary, background, level);
        let accent = contrast::resolve(accent, background, level);

        Self {
            primary,
            primary_hover: interaction_variant(primary, HOVER_DELTA),
            primary_active: interaction_variant(primary, ACTIVE_DELTA),
            secondary,
            secondary_hover: interaction_variant(secondary, HOVER_DELTA),
            secondary_active: interaction_variant(secondary, ACTIVE_DELTA),
            accent,
            accent_hover: interaction_variant(accent, HOVER_DELTA),
            accent_active: interaction_variant(accent, ACTIVE_DELTA),
            background,
            background_alt: ramp.background_alt,
            surface: ramp.surface,
            surface_alt: ramp.surface_alt,
            text: contrast::resolve(ramp.text, background, level),
            text_secondary: contrast::resolve(ramp.text_secondary, background, level),
            text_muted: contrast::resolve(ramp.text_muted, background, level),
            // The opposite mode's text base, deliberately not repaired;
            // the validator covers it with warning-only checks.
            text_inverse: mode.opposite().ramp().text,
            border: ramp.border,
            border_light: ramp.border_light,
            border_hover: ramp.border_hover,
            success: contrast::resolve(ramp.success_base, background, level),
            warning: contrast::resolve(ramp.warning_base, background, level),
            error: contrast::resolve(ramp.error_base, background, level),
            info: contrast::resolve(ramp.info_base, background, level),
        }
    }

    /// Regenerate this palette under dark-mode ramps, reusing the resolved
    /// seed colors. A full regeneration, not an inversion.
    pub fn dark_variant(&self, level: Level) -> Self {
        Self::generate(
            self.primary,
            Some(self.secondary),
            Some(self.accent),
            Mode::Dark,
            level,
        )
    }

    /// The color assigned to `role`
    pub fn get(&self, role: Role) -> Color {
        match role {
            Role::Primary => self.primary,
            Role::PrimaryHover => self.primary_hover,
            Role::PrimaryActive => self.primary_active,
            Role::Secondary => self.secondary,
            Role::SecondaryHover => self.secondary_hover,
            Role::SecondaryActive => self.secondary_active,
            Role::Accent => self.accent,
            Role::AccentHover => self.accent_hover,
            Role::AccentActive => self.accent_active,
            Role::Background => self.background,
            Role::BackgroundAlt => self.background_alt,
            Role::Surface => self.surface,
            Role::SurfaceAlt => self.surface_alt,
            Role::Text => self.text,
            Role::TextSecondary => self.text_secondary,
            Role::TextMuted => self.text_muted,
            Role::TextInverse => self.text_inverse,
            Role::Border => self.border,
            Role::BorderLight => self.border_light,
            Role::BorderHover => self.border_hover,
            Role::Success => self.success,
            Role::Warning => self.warning,
            Role::Error => self.error,
            Role::Info => self.info,
        }
    }

    /// All role/color pairs in declaration order
    pub fn entries(&self) -> [(Role, Color); 24] {
        Role::ALL.map(|role| (role, self.get(role)))
    }
}

/// Hover/active variant: shift lightness away from the base, darker when
/// the base is light (L > 50), lighter when it is dark.
fn interaction_variant(base: Color, delta: f32) -> Color {
    let (_, _, l) = base.to_hsl();
    if l > 50.0 {
        base.darken(delta)
    } else {
        base.lighten(delta)
    }
}
