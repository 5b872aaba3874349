//! # Folio
//!
//! Configuration for a personal static website: who the author is, what the
//! menu looks like, how dates read, and how code blocks are themed. The page
//! renderer, head-metadata builder, date helper and syntax highlighter all
//! read their settings from here.
//!
//! ```text
//! config.toml (optional)
//!       │
//!       ▼
//! stock defaults ── merge ──▶ SiteConfig ──▶ site    (meta tags, <html lang>, OG image)
//!                                   │         menu    (header, footer)
//!                                   │         date    (date::format_date)
//!                                   └───────▶ code    (css::generate_code_css)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `SiteConfig` and its sections, stock defaults, `config.toml` loading, merging and validation |
//! | [`theme`] | Bundled colour themes, style variants, and the code-block CSS selector |
//! | [`css`] | Code-block stylesheet generation from `[code]` options |
//! | [`date`] | Site-wide date rendering from the `[site.date]` preference |
//! | [`locale`] | BCP-47 and Open Graph locale tag parsing |
//! | [`types`] | Shared types (`NavItem`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Stock Values Are the Site
//!
//! `SiteConfig::default()` is not a placeholder: it is the site's actual
//! configuration. `config.toml` exists so a fork or a staging build can
//! change a few values without touching code, and everything it leaves out
//! keeps its stock value.
//!
//! ## Validated Once, Read Everywhere
//!
//! Loading rejects unknown keys and malformed values (relative menu paths,
//! bad locale tags, unknown themes) up front. Downstream code takes a
//! `&SiteConfig` and can assume every invariant holds.

pub mod config;
pub mod css;
pub mod date;
pub mod locale;
pub mod output;
pub mod theme;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
