//! The core `Validator` struct and its associated types, providing the primary API for interaction.

use crate::config::Config;
use crate::moment::ParsedMoment;
use crate::parse_input::{ParseOptions, parse_moment_token};
use crate::render::format_hint;
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Why a piece of input text could not become a [`ParsedMoment`].
///
/// Both variants are recoverable and meant to be displayed to the user;
/// anything else (config reads, clock access) surfaces as a hard error
/// through `anyhow` instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationFailure {
    /// The text (or absence of text) denotes no recognizable calendar date.
    #[error("{hint}")]
    MalformedInput {
        /// The rejected text; `None` when the prompt was cancelled.
        input: Option<String>,
        hint: String,
    },
    /// A real date, but strictly later than the moment validation ran.
    #[error("{date} is in the future. Are you a timelord?")]
    FutureDate { date: NaiveDate },
}

/// The central struct for date-input validation.
///
/// An instance holds the configuration (accepted input formats, prompt text)
/// and no other state, so it is safe to call repeatedly.
#[derive(Debug)]
pub struct Validator {
    pub config: Config,
}

impl Validator {
    /// Creates a new `Validator`, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::with_config(config))
    }

    /// Creates a new `Validator` with a specific `Config`.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Validates a piece of raw input against the configured input space.
    ///
    /// - Absent input (a cancelled prompt) is rejected as [`ValidationFailure::MalformedInput`]
    ///   rather than defaulting to some sentinel date.
    /// - Text that parses to a date strictly after "now" is rejected as
    ///   [`ValidationFailure::FutureDate`]. Date-only input is compared at
    ///   date precision, so today's date is accepted all day; input carrying
    ///   a time of day is compared at datetime precision.
    /// - Everything else that parses is returned as a [`ParsedMoment`].
    ///
    /// # Arguments
    ///
    /// * `input` - the raw text, or `None` when the prompt was cancelled.
    /// * `reference_now` - optional override of "now", read once per call.
    ///   Used by tests and by callers replaying input against a fixed clock.
    pub fn validate(
        &self,
        input: Option<&str>,
        reference_now: Option<NaiveDateTime>,
    ) -> Result<ParsedMoment, ValidationFailure> {
        let now = reference_now.unwrap_or_else(|| Local::now().naive_local());
        let text = match input {
            Some(text) => text,
            None => return Err(self.malformed(None)),
        };

        let format_strs: Vec<&str> = self
            .config
            .input_date_formats
            .iter()
            .map(AsRef::as_ref)
            .collect();
        let opts = ParseOptions {
            reference_now: Some(now),
            formats: Some(&format_strs),
        };
        let Some(moment) = parse_moment_token(text, Some(opts)) else {
            return Err(self.malformed(Some(text)));
        };

        let in_future = match moment.time {
            Some(_) => moment.as_datetime() > now,
            None => moment.date > now.date(),
        };
        if in_future {
            return Err(ValidationFailure::FutureDate { date: moment.date });
        }
        Ok(moment)
    }

    /// Same contract as [`validate`](Self::validate), with the input-collecting
    /// step injected as a collaborator.
    ///
    /// The collaborator returns `None` when the user cancelled (eg. EOF on
    /// stdin); that is classified as malformed input, not an error.
    pub fn validate_with<F>(
        &self,
        ask: F,
        reference_now: Option<NaiveDateTime>,
    ) -> Result<ParsedMoment, ValidationFailure>
    where
        F: FnOnce() -> Option<String>,
    {
        let answer = ask();
        self.validate(answer.as_deref(), reference_now)
    }

    fn malformed(&self, input: Option<&str>) -> ValidationFailure {
        ValidationFailure::MalformedInput {
            input: input.map(str::to_string),
            hint: format_hint(&self.config.input_date_formats),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::mk_config;
    use chrono::NaiveDate;

    fn mk_validator() -> Validator {
        Validator::with_config(mk_config())
    }

    fn anchor() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn absent_input_is_malformed() {
        let v = mk_validator();
        let err = v.validate(None, Some(anchor())).unwrap_err();
        assert!(matches!(
            err,
            ValidationFailure::MalformedInput { input: None, .. }
        ));
    }

    #[test]
    fn empty_and_junk_input_are_malformed() {
        let v = mk_validator();
        let err = v.validate(Some(""), Some(anchor())).unwrap_err();
        assert!(matches!(err, ValidationFailure::MalformedInput { .. }));

        let err = v.validate(Some("not-a-date"), Some(anchor())).unwrap_err();
        match err {
            ValidationFailure::MalformedInput { input, hint } => {
                assert_eq!(input.as_deref(), Some("not-a-date"));
                assert!(hint.contains("YYYY-MM-DD"));
            }
            other => panic!("expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn future_date_is_rejected() {
        let v = mk_validator();
        let err = v.validate(Some("9999-01-01"), Some(anchor())).unwrap_err();
        assert_eq!(
            err,
            ValidationFailure::FutureDate {
                date: NaiveDate::from_ymd_opt(9999, 1, 1).unwrap()
            }
        );
    }

    #[test]
    fn tomorrow_is_rejected() {
        let v = mk_validator();
        let err = v.validate(Some("tomorrow"), Some(anchor())).unwrap_err();
        assert_eq!(
            err,
            ValidationFailure::FutureDate {
                date: NaiveDate::from_ymd_opt(2025, 8, 16).unwrap()
            }
        );
    }

    #[test]
    fn past_date_is_accepted_and_reconstructible() {
        let v = mk_validator();
        let m = v.validate(Some("1990-05-04"), Some(anchor())).unwrap();
        assert_eq!(m.date, NaiveDate::from_ymd_opt(1990, 5, 4).unwrap());
        assert!(m.time.is_none());

        let m = v.validate(Some("May 4, 1990"), Some(anchor())).unwrap();
        assert_eq!(m.date, NaiveDate::from_ymd_opt(1990, 5, 4).unwrap());
    }

    #[test]
    fn today_is_accepted_all_day() {
        // Date-only input is compared at date precision, so "today" at noon
        // does not count as the future even though midnight < now.
        let v = mk_validator();
        let m = v.validate(Some("2025-08-15"), Some(anchor())).unwrap();
        assert_eq!(m.date, anchor().date());

        let m = v.validate(Some("today"), Some(anchor())).unwrap();
        assert_eq!(m.date, anchor().date());
    }

    #[test]
    fn datetime_input_compares_at_datetime_precision() {
        let v = mk_validator();
        // Equal to now: accepted, the rule is strictly-future-only.
        let m = v
            .validate(Some("2025-08-15T12:00"), Some(anchor()))
            .unwrap();
        assert_eq!(m.as_datetime(), anchor());

        // One minute later the same day: rejected.
        let err = v
            .validate(Some("2025-08-15T12:01"), Some(anchor()))
            .unwrap_err();
        assert!(matches!(err, ValidationFailure::FutureDate { .. }));
    }

    #[test]
    fn validate_is_idempotent_under_fixed_clock() {
        let v = mk_validator();
        let first = v.validate(Some("2000-01-01"), Some(anchor()));
        let second = v.validate(Some("2000-01-01"), Some(anchor()));
        assert_eq!(first, second);

        let first = v.validate(Some("nope"), Some(anchor()));
        let second = v.validate(Some("nope"), Some(anchor()));
        assert_eq!(first, second);
    }

    #[test]
    fn collaborator_answer_is_validated() {
        let v = mk_validator();
        let m = v
            .validate_with(|| Some("1990-05-04".to_string()), Some(anchor()))
            .unwrap();
        assert_eq!(m.date, NaiveDate::from_ymd_opt(1990, 5, 4).unwrap());

        let err = v.validate_with(|| None, Some(anchor())).unwrap_err();
        assert!(matches!(
            err,
            ValidationFailure::MalformedInput { input: None, .. }
        ));
    }
}
