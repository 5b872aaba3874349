//! Shared test utilities for the folio test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = config_dir("[site]\ntitle = \"Notes\"\n");
//! let config = load_config(tmp.path()).unwrap();
//!
//! assert_menu(&config, &[("Home", "/"), ("About Me", "/about-me/"), ("Blog", "/posts/")]);
//! ```

use tempfile::TempDir;

use crate::config::{CONFIG_FILE, ConfigError, SiteConfig};

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp directory holding a `config.toml` with the given contents.
pub fn config_dir(contents: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join(CONFIG_FILE), contents).unwrap();
    tmp
}

// =========================================================================
// Assertions
// =========================================================================

/// Assert the menu matches `(title, path)` pairs in order.
pub fn assert_menu(config: &SiteConfig, expected: &[(&str, &str)]) {
    let actual: Vec<(&str, &str)> = config
        .menu
        .iter()
        .map(|n| (n.title.as_str(), n.path.as_str()))
        .collect();
    assert_eq!(actual, expected.to_vec(), "menu mismatch");
}

/// Assert validation fails with a message containing `needle`.
pub fn assert_validation_error(config: &SiteConfig, needle: &str) {
    match config.validate() {
        Err(ConfigError::Validation(msg)) => assert!(
            msg.contains(needle),
            "validation message {msg:?} does not mention {needle:?}"
        ),
        Err(other) => panic!("expected a validation error, got {other}"),
        Ok(()) => panic!("expected validation to fail on {needle:?}"),
    }
}
