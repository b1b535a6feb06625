use chrono::{Datelike, NaiveDate};

use crate::{DueDate, local_today};

impl DueDate {
    /// Relative label for this date as seen from `today`:
    /// `今天（1月5日）`, `明天（1月6日）`, `已过期3天（1月2日）` or
    /// `5天后（1月10日）`. Dates outside `today`'s year carry the year.
    pub fn label(self, today: NaiveDate) -> String {
        let calendar = self.calendar_label(today);
        match self.days_from(today) {
            0 => format!("今天（{calendar}）"),
            1 => format!("明天（{calendar}）"),
            offset if offset < 0 => format!("已过期{}天（{calendar}）", -offset),
            offset => format!("{offset}天后（{calendar}）"),
        }
    }

    /// `{month}月{day}日`, year-qualified when outside `today`'s year.
    /// Components are unpadded to keep the label compact.
    fn calendar_label(self, today: NaiveDate) -> String {
        let date = self.date();
        if date.year() == today.year() {
            format!("{}月{}日", date.month(), date.day())
        } else {
            format!("{}年{}月{}日", date.year(), date.month(), date.day())
        }
    }
}

/// Renders a due-date string for display, relative to today.
/// Empty input renders as empty; input no strategy recognizes is
/// returned unchanged so the caller still has something to show.
pub fn format_due(input: &str) -> String {
    format_due_on(input, local_today())
}

/// [`format_due`] against an explicit `today`, for deterministic callers
pub fn format_due_on(input: &str, today: NaiveDate) -> String {
    if input.is_empty() {
        return String::new();
    }
    match input.parse::<DueDate>() {
        Ok(due) => due.label(today),
        Err(error) => {
            tracing::warn!(input, error = %error, "failed to parse due date");
            input.to_owned()
        }
    }
}
