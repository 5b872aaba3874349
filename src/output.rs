//! CLI output formatting.
//!
//! Each command has a `format_*` function that returns display lines and a
//! `print_*` wrapper that writes them to stdout. Format functions are pure:
//! no I/O beyond what their arguments describe, so tests can assert on exact
//! lines.
//!
//! # Output Format
//!
//! ```text
//! Site
//!     Daniel Penedo Lázaro | Full-Stack Developer
//!         Author: Daniel Penedo Lázaro
//!         Language: en-GB (og:locale en_GB)
//!         Description: I'm Daniel Penedo Lázaro, a web developer specializing...
//!         Webmentions: https://dpenedo.com
//!
//! Dates
//!     Locale: en-GB
//!     Example: 31 Jan 2026
//!
//! Menu
//!     001 Home → /
//!     002 About Me → /about-me/
//!     003 Blog → /posts/
//!
//! Code
//!     001 github-dark (dark) → [data-theme="github-dark"]
//!         Scrollbars: browser default
//!
//! Config
//!     config.toml
//! ```

use crate::config::{CONFIG_FILE, SiteConfig};
use crate::date;
use crate::theme::{self, theme_css_selector};
use crate::types::NavItem;
use chrono::NaiveDate;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    }
}

/// The date used to preview the configured date format.
fn sample_date() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2026, 1, 31)
}

/// Format the menu, one numbered line per entry.
///
/// ```text
/// 001 Home → /
/// 002 Blog → /posts/ (current)
/// ```
pub fn format_menu(menu: &[NavItem], current_path: Option<&str>, depth: usize) -> Vec<String> {
    menu.iter()
        .enumerate()
        .map(|(i, item)| {
            let marker = match current_path {
                Some(path) if item.is_current(path) => " (current)",
                _ => "",
            };
            format!(
                "{}{} {} → {}{}",
                indent(depth),
                format_index(i + 1),
                item.title,
                item.path,
                marker
            )
        })
        .collect()
}

/// Print the menu to stdout.
pub fn print_menu(menu: &[NavItem], current_path: Option<&str>) {
    for line in format_menu(menu, current_path, 0) {
        println!("{}", line);
    }
}

/// Format the resolved configuration as a readable inventory.
///
/// `root` is the directory the config was loaded from; the `Config` section
/// notes whether a `config.toml` was found there.
pub fn format_config_summary(config: &SiteConfig, root: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    let site = &config.site;

    lines.push("Site".to_string());
    lines.push(format!("{}{}", indent(1), site.title));
    lines.push(format!("{}Author: {}", indent(2), site.author));
    lines.push(format!(
        "{}Language: {} (og:locale {})",
        indent(2),
        site.lang,
        site.og_locale
    ));
    lines.push(format!(
        "{}Description: {}",
        indent(2),
        truncate_desc(site.description.trim(), 60)
    ));
    lines.push(format!("{}Webmentions: {}", indent(2), site.webmentions.link));

    lines.push(String::new());
    lines.push("Dates".to_string());
    lines.push(format!("{}Locale: {}", indent(1), site.date.locale));
    if let Some(sample) = sample_date() {
        match date::format_date(sample, &site.date) {
            Ok(text) => lines.push(format!("{}Example: {}", indent(1), text)),
            Err(e) => lines.push(format!("{}Example: ({})", indent(1), e)),
        }
    }

    lines.push(String::new());
    lines.push("Menu".to_string());
    lines.extend(format_menu(&config.menu, None, 1));

    lines.push(String::new());
    lines.push("Code".to_string());
    match theme::resolve_variants(&config.code.themes) {
        Ok(variants) => {
            for (i, variant) in variants.iter().enumerate() {
                let theme = &variant.theme;
                lines.push(format!(
                    "{}{} {} ({}) → {}",
                    indent(1),
                    format_index(i + 1),
                    theme.name,
                    theme.kind,
                    theme_css_selector(theme, &variants)
                ));
            }
        }
        Err(e) => lines.push(format!("{}({})", indent(1), e)),
    }
    let scrollbars = if config.code.use_themed_scrollbars {
        "themed"
    } else {
        "browser default"
    };
    lines.push(format!("{}Scrollbars: {}", indent(2), scrollbars));

    lines.push(String::new());
    lines.push("Config".to_string());
    if root.join(CONFIG_FILE).exists() {
        lines.push(format!("{}{}", indent(1), CONFIG_FILE));
    } else {
        lines.push(format!("{}(stock defaults)", indent(1)));
    }

    lines
}

/// Print the configuration summary to stdout.
pub fn print_config_summary(config: &SiteConfig, root: &Path) {
    for line in format_config_summary(config, root) {
        println!("{}", line);
    }
}
