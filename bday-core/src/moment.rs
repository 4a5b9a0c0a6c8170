use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A validated point in time: a calendar date, plus the time of day when the
/// input carried one (ISO `YYYY-MM-DDTHH:MM[:SS]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedMoment {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
}

impl ParsedMoment {
    pub fn date_only(date: NaiveDate) -> Self {
        Self { date, time: None }
    }

    pub fn at(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date,
            time: Some(time),
        }
    }

    /// Midnight when the input carried no time of day.
    pub fn as_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time.unwrap_or_default())
    }
}
