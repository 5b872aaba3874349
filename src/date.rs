//! Site-wide date rendering.
//!
//! Post dates, "last updated" stamps and archive headings all go through
//! [`format_date`], parameterized by the `[site.date]` config section:
//!
//! ```toml
//! [site.date]
//! locale = "en-GB"
//!
//! [site.date.options]
//! day = "numeric"
//! month = "short"
//! year = "numeric"
//! ```
//!
//! The option names and values mirror the browser's `toLocaleDateString`, so
//! a date renders the same in generated HTML as it would client-side:
//!
//! | Locale  | day / month / year        | 2026-10-05    |
//! |---------|---------------------------|---------------|
//! | `en-GB` | numeric / short / numeric | `5 Oct 2026`  |
//! | `en-US` | numeric / short / numeric | `Oct 5, 2026` |
//! | `en-GB` | (none)                    | `5/10/2026`   |
//! | `en-US` | (none)                    | `10/5/2026`   |
//! | `en-CA` | numeric / short / numeric | `Oct 5, 2026` |
//! | `en-CA` | (none)                    | `2026-10-05`  |
//!
//! British English shortens September to `Sept` (`5 Sept 2026`); every other
//! short month is the first three letters of its name.
//!
//! Only English locales are supported. Month names are not translated, so any
//! other language is rejected rather than silently rendered in English.

use crate::locale::{LanguageTag, LocaleError};
use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DateError {
    #[error(transparent)]
    Locale(#[from] LocaleError),
    #[error("unsupported date locale {0:?}: only English (en, en-*) locales are supported")]
    UnsupportedLocale(String),
}

/// Date rendering preference: a locale plus which parts to show and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DateConfig {
    /// BCP-47 locale tag, e.g. `"en-GB"`.
    pub locale: String,
    pub options: DateOptions,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            locale: "en-GB".to_string(),
            options: DateOptions {
                day: Some(NumericStyle::Numeric),
                month: Some(MonthStyle::Short),
                year: Some(NumericStyle::Numeric),
            },
        }
    }
}

/// Which date parts to render. An absent part is omitted, unless all three
/// are absent, in which case all three render as `numeric`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<NumericStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<MonthStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<NumericStyle>,
}

impl DateOptions {
    fn is_empty(&self) -> bool {
        self.day.is_none() && self.month.is_none() && self.year.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericStyle {
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthStyle {
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
    #[serde(rename = "long")]
    Long,
    #[serde(rename = "short")]
    Short,
    #[serde(rename = "narrow")]
    Narrow,
}

impl MonthStyle {
    fn is_textual(self) -> bool {
        matches!(self, MonthStyle::Long | MonthStyle::Short | MonthStyle::Narrow)
    }
}

/// Part order for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldOrder {
    /// `19 Oct 2026`, `19/10/2026`
    DayFirst,
    /// `Oct 19, 2026`, `10/19/2026`
    MonthFirst,
    /// `Oct 19, 2026`, `2026-10-19`
    MonthFirstIsoNumeric,
}

/// How a locale lays out and abbreviates dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LocaleStyle {
    order: FieldOrder,
    /// British English abbreviates September as `Sept`.
    long_september: bool,
}

fn locale_style(locale: &str) -> Result<LocaleStyle, DateError> {
    let tag = LanguageTag::parse(locale)?;
    if tag.language != "en" {
        return Err(DateError::UnsupportedLocale(locale.to_string()));
    }
    let region = tag.region.as_deref();
    // `en` with no region follows the US convention, like browsers do.
    let order = match region {
        None | Some("US") => FieldOrder::MonthFirst,
        Some("CA") => FieldOrder::MonthFirstIsoNumeric,
        Some(_) => FieldOrder::DayFirst,
    };
    Ok(LocaleStyle {
        order,
        long_september: region == Some("GB"),
    })
}

/// Check that a locale can be used for date rendering.
pub fn check_locale(locale: &str) -> Result<(), DateError> {
    locale_style(locale).map(|_| ())
}

fn numeric(value: u32, style: NumericStyle) -> String {
    match style {
        NumericStyle::Numeric => value.to_string(),
        NumericStyle::TwoDigit => format!("{:02}", value % 100),
    }
}

fn month_part(date: NaiveDate, style: MonthStyle, locale: LocaleStyle) -> String {
    let month = date.month();
    let name = Month::try_from(month as u8)
        .map(|m| m.name())
        .unwrap_or_default();
    match style {
        MonthStyle::Numeric => month.to_string(),
        MonthStyle::TwoDigit => format!("{:02}", month),
        MonthStyle::Long => name.to_string(),
        MonthStyle::Short if month == 9 && locale.long_september => "Sept".to_string(),
        MonthStyle::Short => name.chars().take(3).collect(),
        MonthStyle::Narrow => name.chars().take(1).collect(),
    }
}

fn year_part(date: NaiveDate, style: NumericStyle) -> String {
    let year = date.year();
    match style {
        NumericStyle::Numeric => year.to_string(),
        NumericStyle::TwoDigit => format!("{:02}", year.rem_euclid(100)),
    }
}

/// Render a date according to a date preference.
pub fn format_date(date: NaiveDate, config: &DateConfig) -> Result<String, DateError> {
    let style = locale_style(&config.locale)?;

    let mut options = if config.options.is_empty() {
        DateOptions {
            day: Some(NumericStyle::Numeric),
            month: Some(MonthStyle::Numeric),
            year: Some(NumericStyle::Numeric),
        }
    } else {
        config.options.clone()
    };
    let textual = options.month.is_some_and(MonthStyle::is_textual);

    // Canadian numeric dates are ISO-shaped: always two-digit month and day.
    if !textual && style.order == FieldOrder::MonthFirstIsoNumeric {
        options.day = options.day.map(|_| NumericStyle::TwoDigit);
        options.month = options.month.map(|_| MonthStyle::TwoDigit);
    }

    let day = options.day.map(|s| numeric(date.day(), s));
    let month = options.month.map(|s| month_part(date, s, style));
    let year = options.year.map(|s| year_part(date, s));

    let formatted = if textual {
        match style.order {
            FieldOrder::DayFirst => [day, month, year]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" "),
            FieldOrder::MonthFirst | FieldOrder::MonthFirstIsoNumeric => {
                let month_day = [month, day]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(" ");
                match year {
                    Some(year) if month_day.is_empty() => year,
                    Some(year) if options.day.is_some() => format!("{month_day}, {year}"),
                    Some(year) => format!("{month_day} {year}"),
                    None => month_day,
                }
            }
        }
    } else {
        let (parts, separator) = match style.order {
            FieldOrder::DayFirst => ([day, month, year], "/"),
            FieldOrder::MonthFirst => ([month, day, year], "/"),
            FieldOrder::MonthFirstIsoNumeric => ([year, month, day], "-"),
        };
        parts
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(separator)
    };

    Ok(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pref(locale: &str, options: DateOptions) -> DateConfig {
        DateConfig {
            locale: locale.to_string(),
            options,
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_preference_is_short_british() {
        let out = format_date(ymd(2026, 10, 5), &DateConfig::default()).unwrap();
        assert_eq!(out, "5 Oct 2026");
    }

    #[test]
    fn us_short_month_uses_comma() {
        let options = DateConfig::default().options;
        let out = format_date(ymd(2026, 10, 5), &pref("en-US", options)).unwrap();
        assert_eq!(out, "Oct 5, 2026");
    }

    #[test]
    fn long_month() {
        let options = DateOptions {
            day: Some(NumericStyle::Numeric),
            month: Some(MonthStyle::Long),
            year: Some(NumericStyle::Numeric),
        };
        let out = format_date(ymd(2024, 2, 29), &pref("en-GB", options)).unwrap();
        assert_eq!(out, "29 February 2024");
    }

    #[test]
    fn narrow_month() {
        let options = DateOptions {
            month: Some(MonthStyle::Narrow),
            ..Default::default()
        };
        let out = format_date(ymd(2026, 9, 1), &pref("en-GB", options)).unwrap();
        assert_eq!(out, "S");
    }

    #[test]
    fn empty_options_render_all_numeric() {
        let gb = format_date(ymd(2026, 10, 5), &pref("en-GB", DateOptions::default())).unwrap();
        assert_eq!(gb, "5/10/2026");
        let us = format_date(ymd(2026, 10, 5), &pref("en-US", DateOptions::default())).unwrap();
        assert_eq!(us, "10/5/2026");
    }

    #[test]
    fn two_digit_parts() {
        let options = DateOptions {
            day: Some(NumericStyle::TwoDigit),
            month: Some(MonthStyle::TwoDigit),
            year: Some(NumericStyle::TwoDigit),
        };
        let out = format_date(ymd(2026, 3, 7), &pref("en-GB", options)).unwrap();
        assert_eq!(out, "07/03/26");
    }

    #[test]
    fn month_and_year_only() {
        let options = DateOptions {
            month: Some(MonthStyle::Long),
            year: Some(NumericStyle::Numeric),
            ..Default::default()
        };
        let gb = format_date(ymd(2026, 10, 5), &pref("en-GB", options.clone())).unwrap();
        assert_eq!(gb, "October 2026");
        let us = format_date(ymd(2026, 10, 5), &pref("en-US", options)).unwrap();
        assert_eq!(us, "October 2026");
    }

    #[test]
    fn year_only() {
        let options = DateOptions {
            year: Some(NumericStyle::Numeric),
            ..Default::default()
        };
        let out = format_date(ymd(2026, 10, 5), &pref("en-US", options)).unwrap();
        assert_eq!(out, "2026");
    }

    #[test]
    fn bare_english_is_month_first() {
        let options = DateConfig::default().options;
        let out = format_date(ymd(2026, 10, 19), &pref("en", options)).unwrap();
        assert_eq!(out, "Oct 19, 2026");
    }

    #[test]
    fn other_english_regions_are_day_first() {
        let options = DateConfig::default().options;
        let out = format_date(ymd(2026, 10, 19), &pref("en-AU", options)).unwrap();
        assert_eq!(out, "19 Oct 2026");
    }

    #[test]
    fn british_short_september() {
        let out = format_date(ymd(2026, 9, 5), &DateConfig::default()).unwrap();
        assert_eq!(out, "5 Sept 2026");
    }

    #[test]
    fn american_short_september() {
        let options = DateConfig::default().options;
        let out = format_date(ymd(2026, 9, 5), &pref("en-US", options)).unwrap();
        assert_eq!(out, "Sep 5, 2026");
    }

    #[test]
    fn british_long_and_narrow_september_unchanged() {
        let long = DateOptions {
            month: Some(MonthStyle::Long),
            ..Default::default()
        };
        assert_eq!(
            format_date(ymd(2026, 9, 5), &pref("en-GB", long)).unwrap(),
            "September"
        );
        let narrow = DateOptions {
            month: Some(MonthStyle::Narrow),
            ..Default::default()
        };
        assert_eq!(
            format_date(ymd(2026, 9, 5), &pref("en-GB", narrow)).unwrap(),
            "S"
        );
    }

    #[test]
    fn canadian_short_month_is_month_first() {
        let options = DateConfig::default().options;
        let out = format_date(ymd(2026, 10, 5), &pref("en-CA", options)).unwrap();
        assert_eq!(out, "Oct 5, 2026");
    }

    #[test]
    fn canadian_numeric_is_iso_shaped() {
        let out = format_date(ymd(2026, 10, 5), &pref("en-CA", DateOptions::default())).unwrap();
        assert_eq!(out, "2026-10-05");
    }

    #[test]
    fn non_english_locale_rejected() {
        let err = format_date(ymd(2026, 1, 1), &pref("es-ES", DateOptions::default()));
        assert!(matches!(err, Err(DateError::UnsupportedLocale(_))));
    }

    #[test]
    fn malformed_locale_rejected() {
        let err = format_date(ymd(2026, 1, 1), &pref("en_GB", DateOptions::default()));
        assert!(matches!(err, Err(DateError::Locale(_))));
    }

    #[test]
    fn options_parse_from_toml() {
        let config: DateConfig = toml::from_str(
            r#"
locale = "en-US"
[options]
day = "2-digit"
month = "long"
"#,
        )
        .unwrap();
        assert_eq!(config.options.day, Some(NumericStyle::TwoDigit));
        assert_eq!(config.options.month, Some(MonthStyle::Long));
        assert_eq!(config.options.year, None);
    }

    #[test]
    fn unknown_option_key_rejected() {
        let result: Result<DateConfig, _> = toml::from_str(
            r#"
[options]
weekday = "long"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_option_value_rejected() {
        let result: Result<DateConfig, _> = toml::from_str(
            r#"
[options]
day = "short"
"#,
        );
        assert!(result.is_err());
    }
}
