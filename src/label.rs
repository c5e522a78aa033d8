//! label.rs
//!
//! Human-readable proximity labels for upcoming birthdays.
//!
//! Up to [`DAYS_THRESHOLD`] days away the label counts days; beyond that it
//! counts calendar-month boundaries between today and the birthday, so
//! "In 1 month" always means "next calendar month" regardless of how long
//! the months involved are.

use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::Serialize;

/// Largest day-count still shown as "In N days".
pub const DAYS_THRESHOLD: i64 = 28;

/// Soon-highlight window, in days.
pub const SOON_THRESHOLD: i64 = 7;

const TODAY_TEXT: &str = "Today! 🎉";
const TOMORROW_TEXT: &str = "Tomorrow";

/// Number of calendar-month boundaries crossed between `today` and
/// `today + days_until`. Zero when both fall in the same month.
pub fn calculate_months_between(days_until: i64, today: NaiveDate) -> u32 {
    let target = TimeDelta::try_days(days_until)
        .and_then(|delta| today.checked_add_signed(delta))
        .unwrap_or(NaiveDate::MAX);

    // The cursor only tracks (year, month): stepping a day-of-month cursor
    // from the 31st would skip over short months.
    let (mut year, mut month) = (today.year(), today.month());
    let mut months = 0;

    while (year, month) < (target.year(), target.month()) {
        months += 1;
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }

    months
}

/// Formats a day-count into "Today! 🎉", "Tomorrow", "In N days" or
/// "In N month(s)".
///
/// `days_until` must come from `days_until_birthday` and is never negative;
/// a negative count is a caller bug and panics in debug builds.
pub fn format_proximity_label(days_until: i64, today: NaiveDate) -> String {
    debug_assert!(
        days_until >= 0,
        "negative day-count {days_until} passed to format_proximity_label"
    );

    match days_until {
        0 => TODAY_TEXT.to_string(),
        1 => TOMORROW_TEXT.to_string(),
        d if d <= DAYS_THRESHOLD => format!("In {d} days"),
        // 29..=30 days can still land in the current month; never say "In 0 months".
        d => match calculate_months_between(d, today).max(1) {
            1 => "In 1 month".to_string(),
            months => format!("In {months} months"),
        },
    }
}

/// "January 15" style month/day, no year and no zero padding.
pub fn format_birthday(birth: NaiveDate) -> String {
    birth.format("%B %-d").to_string()
}

/// How prominently a birthday should be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Today,
    Soon,
    Later,
}

impl Urgency {
    pub fn from_days(days_until: i64) -> Self {
        match days_until {
            0 => Urgency::Today,
            d if d <= SOON_THRESHOLD => Urgency::Soon,
            _ => Urgency::Later,
        }
    }
}
