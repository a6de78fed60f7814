#![forbid(unsafe_code)]

//! # Tinct
//!
//! A WCAG-aware design token generation engine.
//!
//! ## Overview
//!
//! Given a small seed — a primary color, optional secondary/accent colors,
//! a mode, and a target conformance level — tinct derives a complete
//! semantic color palette, repairs every foreground/background pairing to
//! meet the requested contrast, derives a matching dark-mode palette,
//! scores the result, and serializes it to CSS custom properties.
//!
//! Every operation is a pure transform: no I/O, no caching, no ambient
//! state. Identical inputs yield bit-identical output, which makes the
//! engine safe to call from any number of threads with no coordination.
//!
//! ## Core Components
//!
//! - [`Color`]: sRGB color with hex/HSL conversions and WCAG contrast math
//! - [`contrast::resolve`]: the contrast repair search
//! - [`Palette`]: the full semantic role→color mapping for one mode
//! - [`validate_theme`] / [`generate_metadata`]: check battery, scoring,
//!   and derived descriptive metadata
//! - [`create_theme`] / [`validate_and_fix`]: orchestration
//! - [`to_css`]: `:root` / `.dark` custom-property emission
//! - [`Registry`]: preset lookup and registry JSON validation
//!
//! ## Example Usage
//!
//! ```rust
//! use tinct::{create_theme, to_css, validate_theme, ThemeInput};
//!
//! let input = ThemeInput::new("midnight", "Midnight", "cool", "#2563eb")
//!     .with_secondary("#10b981");
//!
//! let theme = create_theme(&input)?;
//! assert!(validate_theme(&theme).is_valid);
//!
//! let css = to_css(&theme);
//! assert!(css.starts_with(":root {"));
//! assert!(css.contains("--tinct-primary:"));
//! # Ok::<(), miette::Report>(())
//! ```

pub mod colors;
pub mod contrast;
pub mod css;
pub mod engine;
pub mod error;
pub mod palette;
pub mod registry;
pub mod theme;
pub mod validate;

pub use colors::Color;
pub use contrast::{is_accessible, Level};
pub use css::{to_css, CSS_PREFIX};
pub use engine::{create_theme, validate_and_fix, FixOutcome};
pub use error::{TinctError, TinctResult};
pub use palette::{Mode, Palette, Role};
pub use registry::{builtin_names, builtin_theme, normalize_id, Registry};
pub use theme::{Accessibility, Theme, ThemeInput, ThemeMetadata};
pub use validate::{generate_metadata, validate_theme, Validation};
