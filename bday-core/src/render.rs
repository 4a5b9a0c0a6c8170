//! Pure formatting helpers for validated moments and failure hints.

use chrono::NaiveDate;

use crate::moment::ParsedMoment;

/// Formats a date according to the user's configuration.
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    date.format(date_format).to_string()
}

/// `Friday, 04 May 1990`, plus ` at HH:MM` when the input carried a time.
pub fn format_moment(moment: &ParsedMoment, date_format: &str) -> String {
    let date = format_date(moment.date, date_format);
    match moment.time {
        Some(t) => format!("{date} at {}", t.format("%H:%M")),
        None => date,
    }
}

/// Human-readable description of the accepted input shapes,
/// eg. `Enter a date in the form YYYY-MM-DD or Month DD, YYYY`.
pub fn format_hint(formats: &[String]) -> String {
    let shapes: Vec<String> = formats.iter().map(|f| placeholder(f)).collect();
    format!("Enter a date in the form {}", shapes.join(" or "))
}

/// `%Y-%m-%d` → `YYYY-MM-DD`. Covers the specifiers used by the defaults;
/// anything else is shown as-is.
fn placeholder(fmt: &str) -> String {
    fmt.replace("%Y", "YYYY")
        .replace("%m", "MM")
        .replace("%d", "DD")
        .replace("%B", "Month")
}
