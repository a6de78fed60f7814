//! Theme data model — the engine's input and output contracts.

use serde::{Deserialize, Serialize};

use crate::contrast::Level;
use crate::palette::{Mode, Palette};

/// A complete generated theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub colors: Palette,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<Palette>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ThemeMetadata>,
}

/// Derived descriptive metadata, recomputed on every create/fix pass.
/// Never hand-edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeMetadata {
    pub accessibility: Accessibility,
    pub contrast_ratio: f64,
    pub mood: Vec<String>,
    pub tags: Vec<String>,
}

/// Accessibility grade attached to theme metadata.
///
/// Derivation only ever assigns `AA` or `Fail`; `AAA` exists for the wire
/// contract so externally tagged registries round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accessibility {
    AA,
    AAA,
    Fail,
}

/// Seed input for [`crate::engine::create_theme`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeInput {
    pub id: String,
    pub name: String,
    pub category: String,
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub generate_dark: bool,
    #[serde(default)]
    pub contrast_level: Level,
    #[serde(default)]
    pub mode: Mode,
}

fn default_true() -> bool {
    true
}

impl ThemeInput {
    /// A seed with the defaults: generate a dark palette, AA, light mode
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        primary: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            primary: primary.into(),
            secondary: None,
            accent: None,
            description: None,
            generate_dark: true,
            contrast_level: Level::AA,
            mode: Mode::Light,
        }
    }

    pub fn with_secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }

    pub fn with_accent(mut self, accent: impl Into<String>) -> Self {
        self.accent = Some(accent.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_contrast_level(mut self, level: Level) -> Self {
        self.contrast_level = level;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn without_dark(mut self) -> Self {
        self.generate_dark = false;
        self
    }
}
