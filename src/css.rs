//! CSS custom-property serialization.
//!
//! Renders a theme as a `:root { ... }` block and, when a dark palette is
//! present, a `.dark { ... }` block. Property names are the fixed
//! `--tinct-<role>` kebab-case scheme in role declaration order; both the
//! prefix and the key list are a versioned contract.

use crate::palette::Palette;
use crate::theme::Theme;

/// Custom-property prefix: `--tinct-primary`, `--tinct-text-secondary`, ...
pub const CSS_PREFIX: &str = "tinct";

/// Render `theme` as CSS custom-property blocks.
pub fn to_css(theme: &Theme) -> String {
    let mut css = String::new();
    push_block(&mut css, ":root", &theme.colors);
    if let Some(dark) = &theme.dark {
        css.push('\n');
        push_block(&mut css, ".dark", dark);
    }
    css
}

fn push_block(css: &mut String, selector: &str, palette: &Palette) {
    css.push_str(&format!("{} {{\n", selector));
    for (role, color) in palette.entries() {
        css.push_str(&format!(
            "  --{}-{}: {};\n",
            CSS_PREFIX,
            camel_to_kebab(role.name()),
            color
        ));
    }
    css.push_str("}\n");
}

/// `textSecondary` → `text-secondary`
fn camel_to_kebab(name: &str) -> String {
    let mut kebab = String::with_capacity(name.len() + 2);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            kebab.push('-');
            kebab.push(ch.to_ascii_lowercase());
        } else {
            kebab.push(ch);
        }
    }
    kebab
}
