//! Named presets and registry JSON handling.
//!
//! A registry is a static collection of themes, shipped as JSON. The
//! engine can parse, validate, and normalize one, but never fetches or
//! persists it — I/O belongs to the surrounding layers.

use serde::{Deserialize, Serialize};

use crate::colors::Color;
use crate::contrast::Level;
use crate::error::{TinctError, TinctResult};
use crate::palette::{Mode, Palette};
use crate::theme::Theme;
use crate::validate::generate_metadata;

struct Preset {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    primary: Color,
    secondary: Color,
    accent: Color,
}

const PRESETS: [Preset; 6] = [
    Preset {
        id: "ocean",
        name: "Ocean",
        category: "cool",
        primary: Color::rgb(14, 165, 233),   // #0ea5e9
        secondary: Color::rgb(20, 184, 166), // #14b8a6
        accent: Color::rgb(99, 102, 241),    // #6366f1
    },
    Preset {
        id: "forest",
        name: "Forest",
        category: "nature",
        primary: Color::rgb(22, 163, 74),     // #16a34a
        secondary: Color::rgb(101, 163, 13),  // #65a30d
        accent: Color::rgb(217, 119, 6),      // #d97706
    },
    Preset {
        id: "sunset",
        name: "Sunset",
        category: "warm",
        primary: Color::rgb(234, 88, 12),    // #ea580c
        secondary: Color::rgb(219, 39, 119), // #db2777
        accent: Color::rgb(250, 204, 21),    // #facc15
    },
    Preset {
        id: "grape",
        name: "Grape",
        category: "vivid",
        primary: Color::rgb(124, 58, 237),   // #7c3aed
        secondary: Color::rgb(192, 38, 211), // #c026d3
        accent: Color::rgb(45, 212, 191),    // #2dd4bf
    },
    Preset {
        id: "ember",
        name: "Ember",
        category: "warm",
        primary: Color::rgb(220, 38, 38),   // #dc2626
        secondary: Color::rgb(234, 88, 12), // #ea580c
        accent: Color::rgb(245, 158, 11),   // #f59e0b
    },
    Preset {
        id: "slate",
        name: "Slate",
        category: "neutral",
        primary: Color::rgb(71, 85, 105),    // #475569
        secondary: Color::rgb(100, 116, 139), // #64748b
        accent: Color::rgb(14, 165, 233),    // #0ea5e9
    },
];

/// Look up a builtin preset by name.
///
/// Returns `None` if the name is not recognized. `"default"` aliases
/// `"ocean"`.
pub fn builtin_theme(name: &str) -> Option<Theme> {
    let id = match name {
        "default" => "ocean",
        other => other,
    };
    PRESETS.iter().find(|p| p.id == id).map(build_preset)
}

/// List all available builtin theme names
pub const fn builtin_names() -> &'static [&'static str] {
    &["default", "ocean", "forest", "sunset", "grape", "ember", "slate"]
}

fn build_preset(preset: &Preset) -> Theme {
    let colors = Palette::generate(
        preset.primary,
        Some(preset.secondary),
        Some(preset.accent),
        Mode::Light,
        Level::AA,
    );
    let dark = colors.dark_variant(Level::AA);
    let mut theme = Theme {
        id: preset.id.to_string(),
        name: preset.name.to_string(),
        category: preset.category.to_string(),
        description: None,
        colors,
        dark: Some(dark),
        metadata: None,
    };
    theme.metadata = Some(generate_metadata(&theme));
    theme
}

/// A named collection of themes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    pub themes: Vec<Theme>,
}

impl Registry {
    /// Parse a registry from its JSON form.
    ///
    /// Parse failures become labelled diagnostics pointing at the
    /// offending line/column of the source text.
    pub fn from_json(src: &str) -> TinctResult<Self> {
        serde_json::from_str(src).map_err(|e| {
            let offset = byte_offset(src, e.line(), e.column());
            TinctError::registry(src.to_string(), (offset, 1), e.to_string()).into()
        })
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> TinctResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TinctError::registry(String::new(), (0, 0), e.to_string()).into())
    }

    /// The theme with the given id, if any
    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    /// Report registry-level invariant violations: duplicate ids,
    /// non-normalized ids, empty names or categories.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let mut seen = std::collections::HashSet::new();

        for theme in &self.themes {
            if !seen.insert(theme.id.as_str()) {
                problems.push(format!("duplicate theme id `{}`", theme.id));
            }
            let normalized = normalize_id(&theme.id);
            if theme.id != normalized {
                problems.push(format!(
                    "theme id `{}` is not normalized (expected `{}`)",
                    theme.id, normalized
                ));
            }
            if theme.name.trim().is_empty() {
                problems.push(format!("theme `{}` has an empty name", theme.id));
            }
            if theme.category.trim().is_empty() {
                problems.push(format!("theme `{}` has an empty category", theme.id));
            }
        }
        problems
    }

    /// A copy with every id slugified and metadata recomputed
    pub fn normalize(&self) -> Self {
        let themes = self
            .themes
            .iter()
            .map(|theme| {
                let mut theme = theme.clone();
                theme.id = normalize_id(&theme.id);
                theme.metadata = Some(generate_metadata(&theme));
                theme
            })
            .collect();
        Self { themes }
    }
}

/// Slugify an id: lowercase, runs of non-alphanumerics collapsed to
/// single hyphens, leading/trailing hyphens trimmed.
pub fn normalize_id(raw: &str) -> String {
    let mut id = String::with_capacity(raw.len());
    let mut pending_hyphen = false;

    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !id.is_empty() {
                id.push('-');
            }
            pending_hyphen = false;
            id.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    id
}

fn byte_offset(src: &str, line: usize, column: usize) -> usize {
    let preceding: usize = src
        .lines()
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();
    (preceding + column.saturating_sub(1)).min(src.len().saturating_sub(1))
}
