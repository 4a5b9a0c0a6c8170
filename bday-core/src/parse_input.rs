use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::keywords::{Keyword, Keywords};
use crate::moment::ParsedMoment;

/// Default accepted input date formats (parsing only).
pub const DEFAULT_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d", "%B %d, %Y", "%d %B %Y"];

/// Configuration options for parsing functions.
#[derive(Copy, Clone, Debug)]
pub struct ParseOptions<'a> {
    /// The moment to resolve relative keywords against.
    pub reference_now: Option<NaiveDateTime>,
    /// A slice of `chrono` format strings to try for parsing dates.
    pub formats: Option<&'a [&'a str]>,
}

impl Default for ParseOptions<'_> {
    fn default() -> Self {
        Self {
            reference_now: None,
            formats: None,
        }
    }
}

/// `4th` → `4`, so "May 4th, 1990" matches `%B %d, %Y`.
static ORDINAL_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})(?:st|nd|rd|th)\b").unwrap());
static EXTRA_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Parses a string token into a [`ParsedMoment`].
///
/// Input is normalized first (trimmed, ordinal day suffixes stripped, runs of
/// whitespace collapsed), then matched in order:
/// 1. ISO datetime `YYYY-MM-DDTHH:MM[:SS]`, which keeps the time of day.
/// 2. Relative keywords (`today`, `yesterday`, `tomorrow` and registered
///    synonyms), resolved against `reference_now`.
/// 3. Any format string in the `formats` slice, such as `"%Y-%m-%d"`.
///
/// Returns `None` when nothing matches.
///
/// # Examples
///
/// ```
/// # use chrono::{NaiveDate, NaiveTime};
/// # use bday_core::parse_input::{parse_moment_token, ParseOptions};
/// let anchor = NaiveDate::from_ymd_opt(2025, 8, 15)
///     .unwrap()
///     .and_hms_opt(12, 0, 0)
///     .unwrap();
/// let opts = ParseOptions {
///     reference_now: Some(anchor),
///     ..Default::default()
/// };
///
/// let m = parse_moment_token("yesterday", Some(opts)).unwrap();
/// assert_eq!(m.date, NaiveDate::from_ymd_opt(2025, 8, 14).unwrap());
/// assert!(m.time.is_none());
///
/// let m = parse_moment_token("1990-05-04T06:30", Some(opts)).unwrap();
/// assert_eq!(m.date, NaiveDate::from_ymd_opt(1990, 5, 4).unwrap());
/// assert_eq!(m.time, Some(NaiveTime::from_hms_opt(6, 30, 0).unwrap()));
/// ```
pub fn parse_moment_token(s: &str, options: Option<ParseOptions>) -> Option<ParsedMoment> {
    let options = options.unwrap_or_default();
    let reference_now = options
        .reference_now
        .unwrap_or_else(|| Local::now().naive_local());
    let formats = options.formats.unwrap_or(DEFAULT_FORMATS);

    let normalized = normalize(s);
    let token = normalized.as_str();
    if token.is_empty() {
        return None;
    }

    if let Some(dt) = parse_iso_datetime(token) {
        return Some(ParsedMoment::at(dt.date(), dt.time()));
    }
    parse_date_token(token, reference_now.date(), formats).map(ParsedMoment::date_only)
}

/// Parses a normalized token into a concrete calendar date.
///
/// Keywords are checked before the format list, so a synonym can never be
/// shadowed by a format string.
pub fn parse_date_token(s: &str, reference_date: NaiveDate, formats: &[&str]) -> Option<NaiveDate> {
    if Keywords::matches(Keyword::Today, s) {
        return Some(reference_date);
    }
    if Keywords::matches(Keyword::Yesterday, s) {
        return Some(reference_date - Duration::days(1));
    }
    if Keywords::matches(Keyword::Tomorrow, s) {
        return Some(reference_date + Duration::days(1));
    }

    formats
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .next()
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return Some(dt);
    }
    None
}

fn normalize(s: &str) -> String {
    let trimmed = s.trim();
    let no_ordinals = ORDINAL_SUFFIX.replace_all(trimmed, "$1");
    EXTRA_SPACE.replace_all(&no_ordinals, " ").into_owned()
}
