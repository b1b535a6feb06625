mod consts;
mod label;
mod prelude;
mod task;
mod validation;

pub use consts::*;
pub use label::{format_due, format_due_on};
pub use task::{DraftError, TaskDraft, TaskPatch};
pub use validation::{
    ValidationResult, should_show_expand_button, validate_category, validate_description,
    validate_title,
};

use crate::prelude::*;
use chrono::{Local, NaiveDate};
use std::str::FromStr;

/// A task's due date, reduced to a calendar day.
/// Any time-of-day carried by the input is dropped at parse time, so
/// "due today at 23:59" and "due today at 00:01" compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{_0}")]
pub struct DueDate(NaiveDate);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    /// No parse strategy recognized the input
    #[display(fmt = "Unrecognized date string: {_0}")]
    Unrecognized(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl DueDate {
    /// Wraps an already-resolved calendar day
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the underlying calendar day
    #[inline]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Signed whole-day offset from `today`: negative for past dates,
    /// zero for today, positive for future dates.
    pub fn days_from(self, today: NaiveDate) -> i64 {
        self.0.signed_duration_since(today).num_days()
    }

    /// True when the date falls strictly before `today`
    pub fn is_overdue(self, today: NaiveDate) -> bool {
        self.0 < today
    }
}

/// Parse strategies tried in order; the first to produce a date wins.
const PARSE_STRATEGIES: &[fn(&str) -> Option<NaiveDate>] =
    &[parse_normalized_iso, parse_fallback_formats];

/// Everything before the first time separator.
/// "2024-01-15T10:30:00" and "2024-01-15 10:30:00" both yield "2024-01-15".
fn date_portion(input: &str) -> &str {
    let mut portion = input;
    for sep in TIME_SEPARATORS {
        if let Some((date, _)) = portion.split_once(sep) {
            portion = date;
        }
    }
    portion
}

/// Normalizes alternate separators and parses as ISO year-month-day.
/// Accepts unpadded components, so "2024/1/5" resolves like "2024-01-05".
fn parse_normalized_iso(portion: &str) -> Option<NaiveDate> {
    let normalized: String = portion
        .chars()
        .map(|c| if c == ALT_DATE_SEPARATOR { DATE_SEPARATOR } else { c })
        .collect();
    NaiveDate::parse_from_str(&normalized, ISO_DATE_FORMAT).ok()
}

/// Tries each fallback format against the raw date portion.
fn parse_fallback_formats(portion: &str) -> Option<NaiveDate> {
    FALLBACK_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(portion, format).ok())
}

impl FromStr for DueDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let portion = date_portion(trimmed);
        PARSE_STRATEGIES
            .iter()
            .find_map(|strategy| strategy(portion))
            .map(Self)
            .ok_or_else(|| ParseError::Unrecognized(s.to_owned()))
    }
}

impl From<NaiveDate> for DueDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<DueDate> for NaiveDate {
    fn from(due: DueDate) -> Self {
        due.0
    }
}

/// Today's date on the local calendar
pub(crate) fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// True when `input` holds a date strictly before today.
/// Empty and unrecognizable inputs are never overdue.
pub fn is_overdue(input: &str) -> bool {
    is_overdue_on(input, local_today())
}

/// [`is_overdue`] against an explicit `today`, for deterministic callers
pub fn is_overdue_on(input: &str, today: NaiveDate) -> bool {
    input
        .parse::<DueDate>()
        .is_ok_and(|due| due.is_overdue(today))
}

/// Whole days from today until `input`: negative when overdue, zero for
/// today. Empty and unrecognizable inputs count as zero.
pub fn days_until(input: &str) -> i64 {
    days_until_on(input, local_today())
}

/// [`days_until`] against an explicit `today`, for deterministic callers
pub fn days_until_on(input: &str, today: NaiveDate) -> i64 {
    input.parse::<DueDate>().map_or(0, |due| due.days_from(today))
}

impl serde::Serialize for DueDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for DueDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        let due = "2024-01-05".parse::<DueDate>().unwrap();
        assert_eq!(due.date(), day(2024, 1, 5));
    }

    #[test]
    fn test_parse_slashed_date() {
        let due = "2024/01/05".parse::<DueDate>().unwrap();
        assert_eq!(due.date(), day(2024, 1, 5));
    }

    #[test]
    fn test_parse_unpadded_components() {
        assert_eq!("2024-1-5".parse::<DueDate>().unwrap().date(), day(2024, 1, 5));
        assert_eq!("2024/1/5".parse::<DueDate>().unwrap().date(), day(2024, 1, 5));
    }

    #[test]
    fn test_parse_strips_time_portion() {
        assert_eq!(
            "2024-01-05T10:30:00".parse::<DueDate>().unwrap().date(),
            day(2024, 1, 5)
        );
        assert_eq!(
            "2024-01-05 10:30:00".parse::<DueDate>().unwrap().date(),
            day(2024, 1, 5)
        );
        assert_eq!(
            "2024/01/05 08:00".parse::<DueDate>().unwrap().date(),
            day(2024, 1, 5)
        );
    }

    #[test]
    fn test_parse_with_whitespace() {
        let due = " 2024-01-05 ".parse::<DueDate>().unwrap();
        assert_eq!(due.date(), day(2024, 1, 5));
    }

    #[test]
    fn test_parse_month_first_fallback() {
        let due = "01/05/2024".parse::<DueDate>().unwrap();
        assert_eq!(due.date(), day(2024, 1, 5));
    }

    #[test]
    fn test_parse_day_first_fallback() {
        // Month-first can't take 25 as a month, day-first picks it up
        let due = "25/12/2024".parse::<DueDate>().unwrap();
        assert_eq!(due.date(), day(2024, 12, 25));
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!("".parse::<DueDate>(), Err(ParseError::EmptyInput)));
        assert!(matches!("   ".parse::<DueDate>(), Err(ParseError::EmptyInput)));
    }

    #[test]
    fn test_parse_garbage() {
        let result = "not-a-date".parse::<DueDate>();
        assert!(matches!(result, Err(ParseError::Unrecognized(_))));
    }

    #[test]
    fn test_parse_trailing_separator() {
        let result = "2024-03-01/".parse::<DueDate>();
        assert!(matches!(result, Err(ParseError::Unrecognized(_))));
    }

    #[test]
    fn test_parse_rejects_invalid_calendar_dates() {
        assert!("2024-13-05".parse::<DueDate>().is_err());
        assert!("2024-02-30".parse::<DueDate>().is_err());
        assert!("2024-00-10".parse::<DueDate>().is_err());
    }

    #[test]
    fn test_parse_leap_day() {
        assert!("2024-02-29".parse::<DueDate>().is_ok());
        assert!("2023-02-29".parse::<DueDate>().is_err());
    }

    #[test]
    fn test_days_from_today() {
        let today = day(2024, 1, 5);
        let due = DueDate::new(day(2024, 1, 5));
        assert_eq!(due.days_from(today), 0);
        assert!(!due.is_overdue(today));
    }

    #[test]
    fn test_days_from_past_and_future() {
        let today = day(2024, 1, 5);
        assert_eq!(DueDate::new(day(2024, 1, 4)).days_from(today), -1);
        assert_eq!(DueDate::new(day(2024, 1, 10)).days_from(today), 5);
        assert_eq!(DueDate::new(day(2024, 2, 1)).days_from(today), 27);
        assert_eq!(DueDate::new(day(2023, 12, 31)).days_from(today), -5);
    }

    #[test]
    fn test_overdue_is_strictly_before_today() {
        let today = day(2024, 1, 5);
        assert!(DueDate::new(day(2024, 1, 4)).is_overdue(today));
        assert!(!DueDate::new(day(2024, 1, 5)).is_overdue(today));
        assert!(!DueDate::new(day(2024, 1, 6)).is_overdue(today));
    }

    #[test]
    fn test_days_until_on_slashed_input() {
        let today = day(2024, 1, 5);
        assert_eq!(days_until_on("2024/01/10", today), 5);
    }

    #[test]
    fn test_empty_input_sentinels() {
        let today = day(2024, 1, 5);
        assert!(!is_overdue_on("", today));
        assert_eq!(days_until_on("", today), 0);
    }

    #[test]
    fn test_unrecognized_input_sentinels() {
        let today = day(2024, 1, 5);
        assert!(!is_overdue_on("soon", today));
        assert_eq!(days_until_on("soon", today), 0);
    }

    #[test]
    fn test_overdue_agrees_with_negative_days() {
        let today = day(2024, 1, 5);
        let inputs = [
            "2023-11-30",
            "2024-01-04",
            "2024-01-05",
            "2024-01-06",
            "2024-06-15",
            "2024/01/04 22:00",
            "",
            "not a date",
        ];
        for input in inputs {
            assert_eq!(
                is_overdue_on(input, today),
                days_until_on(input, today) < 0,
                "disagreement for {input:?}"
            );
        }
    }

    #[test]
    fn test_ambient_wrappers_use_local_today() {
        let today = local_today();
        let yesterday = (today - Duration::days(1)).to_string();
        let tomorrow = (today + Duration::days(1)).to_string();
        assert!(is_overdue(&yesterday));
        assert!(!is_overdue(&tomorrow));
        assert_eq!(days_until(&tomorrow), 1);
    }

    #[test]
    fn test_display_is_iso() {
        let due = DueDate::new(day(2024, 1, 5));
        assert_eq!(due.to_string(), "2024-01-05");
    }

    #[test]
    fn test_conversions() {
        let date = day(2024, 1, 5);
        let due = DueDate::from(date);
        let back: NaiveDate = due.into();
        assert_eq!(back, date);
    }

    #[test]
    fn test_ordering_follows_calendar() {
        let earlier = DueDate::new(day(2024, 1, 5));
        let later = DueDate::new(day(2024, 1, 6));
        assert!(earlier < later);
    }

    #[test]
    fn test_serde_round_trip() {
        let due = "2024/01/05".parse::<DueDate>().unwrap();
        let json = serde_json::to_string(&due).unwrap();
        assert_eq!(json, r#""2024-01-05""#);
        let parsed: DueDate = serde_json::from_str(&json).unwrap();
        assert_eq!(due, parsed);
    }

    #[test]
    fn test_serde_validation() {
        // Lenient inputs are accepted, the stored value is the bare day
        let due: DueDate = serde_json::from_str(r#""2024-01-05T10:30:00""#).unwrap();
        assert_eq!(due.date(), day(2024, 1, 5));

        // Unrecognizable strings are rejected
        let result: Result<DueDate, _> = serde_json::from_str(r#""2024-03-01/""#);
        assert!(result.is_err());

        let result: Result<DueDate, _> = serde_json::from_str(r#""""#);
        assert!(result.is_err());
    }
}
