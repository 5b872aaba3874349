//! Site configuration module.
//!
//! Holds everything the build pipeline needs to know about the site that is
//! not content: who wrote it, what the menu looks like, how dates read, and
//! how code blocks are themed. The stock values are the site's own settings;
//! a `config.toml` in the project root overrides any of them.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below (abridged)
//!
//! [site]
//! author = "Daniel Penedo Lázaro"          # meta author, OG image text
//! title = "Daniel Penedo Lázaro | Full-Stack Developer"
//! description = "I'm Daniel Penedo Lázaro, ..."
//! lang = "en-GB"                          # <html lang>
//! og_locale = "en_GB"                     # og:locale meta property
//!
//! [site.date]
//! locale = "en-GB"
//!
//! [site.date.options]
//! day = "numeric"
//! month = "short"
//! year = "numeric"
//!
//! [site.webmentions]
//! link = "https://dpenedo.com"
//!
//! [[menu]]
//! title = "Home"
//! path = "/"
//!
//! [code]
//! themes = ["github-dark"]
//! use_themed_scrollbars = false
//!
//! [code.style_overrides]
//! border_radius = "4px"
//!
//! [code.style_overrides.frames]
//! frame_box_shadow_css_value = "none"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Tables merge key by key, so this only changes the
//! title:
//!
//! ```toml
//! [site]
//! title = "Daniel's Notes"
//! ```
//!
//! Arrays replace rather than merge: a `[[menu]]` entry in `config.toml`
//! replaces the whole stock menu, and `themes = [...]` replaces the theme list.
//!
//! Unknown keys are rejected to catch typos early.

use crate::date::{self, DateConfig};
use crate::locale::{self, LanguageTag};
use crate::theme;
use crate::types::NavItem;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the project root.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// `SiteConfig::default()` is the complete stock configuration. User config
/// files need only specify the values they want to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity, date preference and webmention settings.
    pub site: SiteIdentity,
    /// Code-block syntax-highlighting options.
    pub code: CodeConfig,
    /// Header and footer menu, in display order.
    pub menu: Vec<NavItem>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteIdentity::default(),
            code: CodeConfig::default(),
            menu: default_menu(),
        }
    }
}

/// Global metadata describing the whole site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteIdentity {
    /// Used for the author meta property and the generated Open Graph image.
    pub author: String,
    /// Base for every page's `<title>` and `og:title`.
    pub title: String,
    /// Default `description` meta property.
    pub description: String,
    /// `<html lang>` attribute (BCP-47).
    pub lang: String,
    /// `og:locale` meta property (`en_GB` form).
    pub og_locale: String,
    /// How dates render site-wide.
    pub date: DateConfig,
    pub webmentions: WebmentionConfig,
}

const STOCK_DESCRIPTION: &str = "I'm Daniel Penedo Lázaro, a web developer specializing in building modern websites and applications using Django, React, Astro, and TypeScript. With a passion for Linux, open-source technologies, and efficient programming, I share insights and projects that combine innovation and best practices in web development.";

impl Default for SiteIdentity {
    fn default() -> Self {
        Self {
            author: "Daniel Penedo Lázaro".to_string(),
            title: "Daniel Penedo Lázaro | Full-Stack Developer".to_string(),
            description: STOCK_DESCRIPTION.to_string(),
            lang: "en-GB".to_string(),
            og_locale: "en_GB".to_string(),
            date: DateConfig::default(),
            webmentions: WebmentionConfig::default(),
        }
    }
}

/// Webmention settings: the canonical site URL mentions are fetched for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WebmentionConfig {
    /// Absolute `http(s)` URL of the site.
    pub link: String,
}

impl Default for WebmentionConfig {
    fn default() -> Self {
        Self {
            link: "https://dpenedo.com".to_string(),
        }
    }
}

fn default_menu() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "/"),
        NavItem::new("About Me", "/about-me/"),
        NavItem::new("Blog", "/posts/"),
    ]
}

/// Code-block syntax-highlighting options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodeConfig {
    /// Bundled theme names. Pair one dark and one light theme to follow the
    /// site's colour-mode switch.
    pub themes: Vec<String>,
    /// Colour code-block scrollbars with the active theme.
    pub use_themed_scrollbars: bool,
    pub style_overrides: StyleOverrides,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            themes: vec!["github-dark".to_string()],
            use_themed_scrollbars: false,
            style_overrides: StyleOverrides::default(),
        }
    }
}

/// CSS values applied to every code block regardless of theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverrides {
    pub frames: FrameOverrides,
    pub ui_line_height: String,
    pub code_font_size: String,
    pub code_line_height: String,
    pub border_radius: String,
    pub code_padding_inline: String,
    pub code_font_family: String,
}

impl Default for StyleOverrides {
    fn default() -> Self {
        Self {
            frames: FrameOverrides::default(),
            ui_line_height: "inherit".to_string(),
            code_font_size: "0.875rem".to_string(),
            code_line_height: "1.7142857rem".to_string(),
            border_radius: "4px".to_string(),
            code_padding_inline: "1rem".to_string(),
            code_font_family: r#"Hack Nerd Font, FiraCode Nerd Font, ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, "Liberation Mono", "Courier New", monospace;"#.to_string(),
        }
    }
}

/// Overrides for the frame drawn around code blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameOverrides {
    /// CSS `box-shadow` value for the frame.
    pub frame_box_shadow_css_value: String,
}

impl Default for FrameOverrides {
    fn default() -> Self {
        Self {
            frame_box_shadow_css_value: "none".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are well-formed.
    ///
    /// Returns the first problem found, naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.site.validate()?;

        if self.menu.is_empty() {
            return Err(ConfigError::Validation("menu must not be empty".into()));
        }
        for (i, item) in self.menu.iter().enumerate() {
            if item.title.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "menu[{i}].title must not be empty"
                )));
            }
            if !item.path.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "menu[{i}].path must start with \"/\" (got {:?})",
                    item.path
                )));
            }
        }

        self.code.validate()
    }
}

impl SiteIdentity {
    fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("site.author", &self.author),
            ("site.title", &self.title),
            ("site.description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }

        LanguageTag::parse(&self.lang)
            .map_err(|e| ConfigError::Validation(format!("site.lang: {e}")))?;
        locale::validate_og_locale(&self.og_locale)
            .map_err(|e| ConfigError::Validation(format!("site.og_locale: {e}")))?;
        date::check_locale(&self.date.locale)
            .map_err(|e| ConfigError::Validation(format!("site.date.locale: {e}")))?;

        validate_site_url(&self.webmentions.link)
            .map_err(|e| ConfigError::Validation(format!("site.webmentions.link: {e}")))
    }
}

/// The URL must parse, use http or https, and name a host.
fn validate_site_url(link: &str) -> Result<(), String> {
    let parsed = url::Url::parse(link).map_err(|e| format!("invalid URL {link:?}: {e}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!(
            "scheme '{}' not supported, must be http or https",
            parsed.scheme()
        ));
    }
    if parsed.host_str().is_none() {
        return Err("URL must have a valid host".to_string());
    }
    Ok(())
}

impl CodeConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.themes.is_empty() {
            return Err(ConfigError::Validation(
                "code.themes must not be empty".into(),
            ));
        }
        theme::resolve_variants(&self.themes)
            .map_err(|e| ConfigError::Validation(format!("code.themes: {e}")))?;
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock config does not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Site Configuration
# ==================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Tables merge key by key with the defaults; arrays (menu, themes) replace
# the default list entirely.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
# Author meta property; also printed on generated Open Graph images.
author = "Daniel Penedo Lázaro"

# Base of every page title.
title = "Daniel Penedo Lázaro | Full-Stack Developer"

# Default description meta property.
description = "I'm Daniel Penedo Lázaro, a web developer specializing in building modern websites and applications using Django, React, Astro, and TypeScript. With a passion for Linux, open-source technologies, and efficient programming, I share insights and projects that combine innovation and best practices in web development."

# <html lang> attribute, as a BCP-47 tag.
lang = "en-GB"

# og:locale meta property, language_REGION.
og_locale = "en_GB"

# ---------------------------------------------------------------------------
# Dates
# ---------------------------------------------------------------------------
[site.date]
# English locales only: en-US and bare "en" put the month first.
locale = "en-GB"

# Parts to render. day/year: "numeric" | "2-digit".
# month: "numeric" | "2-digit" | "long" | "short" | "narrow".
# Omit a part to hide it; omit all three for numeric day/month/year.
[site.date.options]
day = "numeric"
month = "short"
year = "numeric"

# ---------------------------------------------------------------------------
# Webmentions
# ---------------------------------------------------------------------------
[site.webmentions]
# Canonical site URL that mentions are fetched for.
link = "https://dpenedo.com"

# ---------------------------------------------------------------------------
# Code blocks
# ---------------------------------------------------------------------------
[code]
# Bundled themes: github-dark, github-light, dracula, nord, one-dark-pro,
# night-owl, solarized-dark, solarized-light, min-dark, min-light,
# catppuccin-mocha, catppuccin-latte.
# List one dark and one light theme to follow the site's colour-mode switch.
themes = ["github-dark"]

# Colour code-block scrollbars with the active theme.
use_themed_scrollbars = false

[code.style_overrides]
ui_line_height = "inherit"
code_font_size = "0.875rem"
code_line_height = "1.7142857rem"
border_radius = "4px"
code_padding_inline = "1rem"
code_font_family = 'Hack Nerd Font, FiraCode Nerd Font, ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, "Liberation Mono", "Courier New", monospace;'

[code.style_overrides.frames]
frame_box_shadow_css_value = "none"

# ---------------------------------------------------------------------------
# Menu (header and footer, in order). Paths must start with "/".
# ---------------------------------------------------------------------------
[[menu]]
title = "Home"
path = "/"

[[menu]]
title = "About Me"
path = "/about-me/"

[[menu]]
title = "Blog"
path = "/posts/"
"##
}
