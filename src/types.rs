//! Shared types read by the header, footer and config layers.

use serde::{Deserialize, Serialize};

/// One entry in the site menu.
///
/// The menu is an ordered list: the header and footer render entries in the
/// order they appear in config. Paths are site-relative and start with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
    /// Link label, e.g. `"About Me"`.
    pub title: String,
    /// Site-relative URL, e.g. `"/about-me/"`.
    pub path: String,
}

impl NavItem {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }

    /// Whether this entry is the active one for `current_path`.
    ///
    /// The root entry (`/`) only matches the root itself; every other entry
    /// also matches the pages beneath it, so `/posts/` is active on
    /// `/posts/hello-world/`.
    pub fn is_current(&self, current_path: &str) -> bool {
        if self.path == "/" {
            return current_path == "/";
        }
        let section = self.path.trim_end_matches('/');
        current_path == section
            || current_path
                .strip_prefix(section)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_matches_only_root() {
        let home = NavItem::new("Home", "/");
        assert!(home.is_current("/"));
        assert!(!home.is_current("/posts/"));
    }

    #[test]
    fn section_matches_children() {
        let blog = NavItem::new("Blog", "/posts/");
        assert!(blog.is_current("/posts/"));
        assert!(blog.is_current("/posts"));
        assert!(blog.is_current("/posts/hello-world/"));
    }

    #[test]
    fn section_does_not_match_prefix_sibling() {
        let blog = NavItem::new("Blog", "/posts/");
        assert!(!blog.is_current("/postscript/"));
        assert!(!blog.is_current("/about-me/"));
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<NavItem, _> = toml::from_str(
            r#"
title = "Home"
path = "/"
href = "/"
"#,
        );
        assert!(result.is_err());
    }
}
