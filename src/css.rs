//! CSS generation for code blocks.
//!
//! Turns `[code]` config into a stylesheet fragment of custom properties:
//!
//! ```text
//! :root {
//!     --code-font-family: Hack Nerd Font, ...;
//!     --code-font-size: 0.875rem;
//!     ...
//! }
//!
//! :root, [data-theme='dark'] {
//!     --code-background: #24292e;
//!     --code-foreground: #e1e4e8;
//! }
//!
//! [data-theme='light'] {
//!     --code-background: #ffffff;
//!     --code-foreground: #24292e;
//! }
//! ```
//!
//! The first block carries the style overrides and is theme-independent. Each
//! style variant then gets a block keyed by [`theme_css_selector`]. The first
//! variant also applies to `:root`, so code blocks are coloured before the
//! colour-mode switch has set `data-theme`.

use crate::config::{CodeConfig, StyleOverrides};
use crate::theme::{self, StyleVariant, ThemeError, theme_css_selector};

/// Strip trailing semicolons so a value can be placed in a declaration.
fn css_value(value: &str) -> &str {
    value.trim().trim_end_matches(';').trim_end()
}

/// Generate the theme-independent custom properties from style overrides.
pub fn generate_override_css(overrides: &StyleOverrides) -> String {
    format!(
        r#":root {{
    --code-font-family: {font_family};
    --code-font-size: {font_size};
    --code-line-height: {line_height};
    --code-padding-inline: {padding_inline};
    --code-border-radius: {border_radius};
    --code-ui-line-height: {ui_line_height};
    --code-frame-box-shadow: {frame_box_shadow};
}}"#,
        font_family = css_value(&overrides.code_font_family),
        font_size = css_value(&overrides.code_font_size),
        line_height = css_value(&overrides.code_line_height),
        padding_inline = css_value(&overrides.code_padding_inline),
        border_radius = css_value(&overrides.border_radius),
        ui_line_height = css_value(&overrides.ui_line_height),
        frame_box_shadow = css_value(&overrides.frames.frame_box_shadow_css_value),
    )
}

/// Generate one colour block per style variant.
pub fn generate_variant_css(variants: &[StyleVariant], themed_scrollbars: bool) -> String {
    variants
        .iter()
        .enumerate()
        .map(|(i, variant)| {
            let theme = &variant.theme;
            let scrollbar = if themed_scrollbars {
                format!(
                    "    --code-scrollbar-color: {fg} {bg};\n",
                    fg = theme.foreground,
                    bg = theme.background,
                )
            } else {
                String::new()
            };
            format!(
                r#"{root}{selector} {{
    --code-background: {background};
    --code-foreground: {foreground};
{scrollbar}}}"#,
                root = if i == 0 { ":root, " } else { "" },
                selector = theme_css_selector(theme, variants),
                background = theme.background,
                foreground = theme.foreground,
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Generate the full code-block stylesheet fragment.
pub fn generate_code_css(code: &CodeConfig) -> Result<String, ThemeError> {
    let variants = theme::resolve_variants(&code.themes)?;
    let mut css = generate_override_css(&code.style_overrides);
    css.push_str("\n\n");
    css.push_str(&generate_variant_css(&variants, code.use_themed_scrollbars));
    if code.use_themed_scrollbars {
        css.push_str("\n\npre {\n    scrollbar-color: var(--code-scrollbar-color);\n}");
    }
    Ok(css)
}
