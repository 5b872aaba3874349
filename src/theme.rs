//! Code-block colour themes and their CSS selectors.
//!
//! Every code block on the site is styled by one or more bundled colour
//! themes. Each configured theme becomes a [`StyleVariant`], and each variant
//! gets a CSS selector from [`theme_css_selector`].
//!
//! ## Dark/Light Pairing
//!
//! The site's colour-mode switch sets `data-theme="dark"` or
//! `data-theme="light"` on the root element. When the config bundles at least
//! two themes, the first theme and the first theme of the *other* type are
//! selected by type, so the switch toggles between them:
//!
//! ```text
//! themes = ["github-dark", "github-light"]
//!
//! github-dark   → [data-theme='dark']
//! github-light  → [data-theme='light']
//! ```
//!
//! Any other theme, and every theme in a single-theme setup, is selected by
//! name: `[data-theme="dracula"]`.
//!
//! The two forms quote differently (single quotes for the type form, double
//! quotes for the name form). Generated stylesheets have always looked like
//! this, and the output is kept byte-for-byte stable.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThemeError {
    #[error("unknown theme {name:?}; available: {available}")]
    UnknownTheme { name: String, available: String },
    #[error("theme {name:?} is listed more than once")]
    DuplicateTheme { name: String },
}

/// Whether a theme is designed for a dark or a light background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    Dark,
    Light,
}

impl ThemeType {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeType::Dark => "dark",
            ThemeType::Light => "light",
        }
    }
}

impl fmt::Display for ThemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named colour theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ThemeType,
    /// Code block background colour.
    pub background: String,
    /// Default code text colour.
    pub foreground: String,
}

/// Name, type, background, foreground.
const BUNDLED_THEMES: &[(&str, ThemeType, &str, &str)] = &[
    ("github-dark", ThemeType::Dark, "#24292e", "#e1e4e8"),
    ("github-light", ThemeType::Light, "#ffffff", "#24292e"),
    ("dracula", ThemeType::Dark, "#282a36", "#f8f8f2"),
    ("nord", ThemeType::Dark, "#2e3440", "#d8dee9"),
    ("one-dark-pro", ThemeType::Dark, "#282c34", "#abb2bf"),
    ("night-owl", ThemeType::Dark, "#011627", "#d6deeb"),
    ("solarized-dark", ThemeType::Dark, "#002b36", "#839496"),
    ("solarized-light", ThemeType::Light, "#fdf6e3", "#657b83"),
    ("min-dark", ThemeType::Dark, "#1f1f1f", "#b392f0"),
    ("min-light", ThemeType::Light, "#ffffff", "#24292e"),
    ("catppuccin-mocha", ThemeType::Dark, "#1e1e2e", "#cdd6f4"),
    ("catppuccin-latte", ThemeType::Light, "#eff1f5", "#4c4f69"),
];

impl ThemeDescriptor {
    pub fn new(
        name: impl Into<String>,
        kind: ThemeType,
        background: impl Into<String>,
        foreground: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            background: background.into(),
            foreground: foreground.into(),
        }
    }

    /// Look up a bundled theme by name.
    pub fn bundled(name: &str) -> Option<Self> {
        BUNDLED_THEMES
            .iter()
            .find(|(n, ..)| *n == name)
            .map(|&(n, kind, bg, fg)| Self::new(n, kind, bg, fg))
    }
}

/// Names of every bundled theme, in catalog order.
pub fn bundled_theme_names() -> impl Iterator<Item = &'static str> {
    BUNDLED_THEMES.iter().map(|(name, ..)| *name)
}

/// One configured theme as it appears in generated CSS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleVariant {
    pub theme: ThemeDescriptor,
}

/// Resolve configured theme names into style variants, preserving order.
///
/// Each name may appear once. [`theme_css_selector`] compares themes by
/// value, so a repeated name would select the same block twice.
pub fn resolve_variants(names: &[String]) -> Result<Vec<StyleVariant>, ThemeError> {
    let mut variants: Vec<StyleVariant> = Vec::with_capacity(names.len());
    for name in names {
        if variants.iter().any(|v| v.theme.name == *name) {
            return Err(ThemeError::DuplicateTheme { name: name.clone() });
        }
        let theme = ThemeDescriptor::bundled(name).ok_or_else(|| ThemeError::UnknownTheme {
            name: name.clone(),
            available: bundled_theme_names().collect::<Vec<_>>().join(", "),
        })?;
        variants.push(StyleVariant { theme });
    }
    Ok(variants)
}

/// Pick the CSS selector that activates `theme`.
///
/// With fewer than two variants the selector is always the name form. With
/// two or more, the first variant's theme ("base") and the first theme whose
/// type differs from the base ("alternate") get the type form; everything
/// else falls back to the name form.
pub fn theme_css_selector(theme: &ThemeDescriptor, variants: &[StyleVariant]) -> String {
    if variants.len() >= 2 {
        let base = &variants[0].theme;
        let alternate = variants
            .iter()
            .map(|v| &v.theme)
            .find(|t| t.kind != base.kind);
        if theme == base || alternate == Some(theme) {
            return format!("[data-theme='{}']", theme.kind);
        }
    }
    format!("[data-theme=\"{}\"]", theme.name)
}
