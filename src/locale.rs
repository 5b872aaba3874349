//! Locale tag parsing.
//!
//! Two tag shapes appear in site config:
//!
//! - **BCP-47 language tags** (`en-GB`, `pt-BR`, `zh-Hant-TW`) for the HTML
//!   `lang` attribute and the date-formatting locale.
//! - **Open Graph locales** (`en_GB`) for the `og:locale` meta property, which
//!   uses an underscore and always carries a region.
//!
//! Parsing is syntactic only. A tag like `xx-QQ` is well-formed and accepted
//! even though no such language exists.

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocaleError {
    #[error("invalid language tag {tag:?}: {reason}")]
    InvalidTag { tag: String, reason: &'static str },
    #[error("invalid Open Graph locale {0:?}: expected language_REGION, e.g. en_GB")]
    InvalidOgLocale(String),
}

/// The leading subtags of a BCP-47 language tag.
///
/// Variants, extensions and private-use subtags are checked for shape but not
/// kept; nothing downstream reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag {
    /// Primary language, lowercased (`en`).
    pub language: String,
    /// Script subtag, title-cased (`Hant`).
    pub script: Option<String>,
    /// Region subtag, uppercased (`GB`, `419`).
    pub region: Option<String>,
}

impl LanguageTag {
    /// Parse a BCP-47 tag such as `en-GB`.
    ///
    /// Subtag case is normalized in the result; the input may use any case.
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        let invalid = |reason| LocaleError::InvalidTag {
            tag: tag.to_string(),
            reason,
        };

        let mut subtags = tag.split('-').peekable();
        let language = subtags.next().unwrap_or_default();
        let lang_len = language.len();
        if !((2..=3).contains(&lang_len) || (5..=8).contains(&lang_len))
            || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(invalid("language subtag must be 2-3 or 5-8 letters"));
        }

        let script = match subtags.peek() {
            Some(s) if s.len() == 4 && s.chars().all(|c| c.is_ascii_alphabetic()) => {
                let (head, tail) = s.split_at(1);
                let script = format!(
                    "{}{}",
                    head.to_ascii_uppercase(),
                    tail.to_ascii_lowercase()
                );
                subtags.next();
                Some(script)
            }
            _ => None,
        };

        let mut region = None;
        if let Some(s) = subtags.peek() {
            let is_alpha_region = s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic());
            let is_numeric_region = s.len() == 3 && s.chars().all(|c| c.is_ascii_digit());
            if is_alpha_region || is_numeric_region {
                region = Some(s.to_ascii_uppercase());
                subtags.next();
            }
        }

        for rest in subtags {
            if rest.is_empty() || rest.len() > 8 {
                return Err(invalid("subtags must be 1-8 characters"));
            }
            if !rest.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(invalid("subtags must be ASCII letters or digits"));
            }
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            script,
            region,
        })
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{script}")?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        Ok(())
    }
}

/// Check an Open Graph locale such as `en_GB`.
///
/// Open Graph expects exactly `ll_RR`: a lowercase 2-3 letter language and an
/// uppercase 2 letter region.
pub fn validate_og_locale(locale: &str) -> Result<(), LocaleError> {
    let invalid = || LocaleError::InvalidOgLocale(locale.to_string());
    let (language, region) = locale.split_once('_').ok_or_else(invalid)?;
    let language_ok =
        (2..=3).contains(&language.len()) && language.chars().all(|c| c.is_ascii_lowercase());
    let region_ok = region.len() == 2 && region.chars().all(|c| c.is_ascii_uppercase());
    if language_ok && region_ok {
        Ok(())
    } else {
        Err(invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_and_region() {
        let tag = LanguageTag::parse("en-GB").unwrap();
        assert_eq!(tag.language, "en");
        assert_eq!(tag.script, None);
        assert_eq!(tag.region.as_deref(), Some("GB"));
    }

    #[test]
    fn parses_bare_language() {
        let tag = LanguageTag::parse("en").unwrap();
        assert_eq!(tag.language, "en");
        assert_eq!(tag.region, None);
    }

    #[test]
    fn parses_script_and_region() {
        let tag = LanguageTag::parse("zh-hant-tw").unwrap();
        assert_eq!(tag.language, "zh");
        assert_eq!(tag.script.as_deref(), Some("Hant"));
        assert_eq!(tag.region.as_deref(), Some("TW"));
        assert_eq!(tag.to_string(), "zh-Hant-TW");
    }

    #[test]
    fn parses_numeric_region() {
        let tag = LanguageTag::parse("es-419").unwrap();
        assert_eq!(tag.region.as_deref(), Some("419"));
    }

    #[test]
    fn normalizes_case() {
        let tag = LanguageTag::parse("EN-gb").unwrap();
        assert_eq!(tag.to_string(), "en-GB");
    }

    #[test]
    fn accepts_variant_subtags() {
        let tag = LanguageTag::parse("de-DE-1996").unwrap();
        assert_eq!(tag.region.as_deref(), Some("DE"));
    }

    #[test]
    fn rejects_empty() {
        assert!(LanguageTag::parse("").is_err());
    }

    #[test]
    fn rejects_underscore_form() {
        assert!(LanguageTag::parse("en_GB").is_err());
    }

    #[test]
    fn rejects_empty_subtag() {
        assert!(LanguageTag::parse("en--GB").is_err());
        assert!(LanguageTag::parse("en-").is_err());
    }

    #[test]
    fn rejects_numeric_language() {
        let err = LanguageTag::parse("12-GB").unwrap_err();
        assert!(err.to_string().contains("language subtag"));
    }

    #[test]
    fn og_locale_valid() {
        assert!(validate_og_locale("en_GB").is_ok());
        assert!(validate_og_locale("pt_BR").is_ok());
    }

    #[test]
    fn og_locale_rejects_hyphen_and_case() {
        assert!(validate_og_locale("en-GB").is_err());
        assert!(validate_og_locale("EN_gb").is_err());
        assert!(validate_og_locale("en").is_err());
        assert!(validate_og_locale("en_GBR").is_err());
    }
}
