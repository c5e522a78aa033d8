//! calendar.rs
//!
//! Calendar arithmetic for birthday occurrences.
//!
//! A birthday recurs on its month/day every year. The only date that does
//! not exist every year is Feb 29, so its observed day in a common year is
//! decided by an explicit [`LeapDayPolicy`] instead of whatever the date
//! library would normalise it to.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{BirthdayError, Result};

/// Where a Feb 29 birthday falls in a common (non-leap) year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LeapDayPolicy {
    /// Observed on March 1.
    #[default]
    MarchFirst,
    /// Observed on February 28.
    FebruaryTwentyEighth,
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Builds a validated birth date, failing on anything that is not a real
/// calendar day (month 13, April 31, Feb 29 in a common year, ...).
pub fn birth_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(BirthdayError::InvalidDate { year, month, day })
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|source| {
        BirthdayError::ParseDate {
            input: input.to_string(),
            source,
        }
    })
}

/// The day `birth`'s month/day is observed in `year`.
///
/// Returns `None` only when `year` is outside chrono's supported range.
pub fn occurrence_in(birth: NaiveDate, year: i32, policy: LeapDayPolicy) -> Option<NaiveDate> {
    if birth.month() == 2 && birth.day() == 29 && !is_leap_year(year) {
        return match policy {
            LeapDayPolicy::MarchFirst => NaiveDate::from_ymd_opt(year, 3, 1),
            LeapDayPolicy::FebruaryTwentyEighth => NaiveDate::from_ymd_opt(year, 2, 28),
        };
    }
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
}

/// The first observed birthday on or after `today`.
pub fn next_occurrence(birth: NaiveDate, today: NaiveDate, policy: LeapDayPolicy) -> NaiveDate {
    match occurrence_in(birth, today.year(), policy) {
        Some(candidate) if candidate >= today => candidate,
        // Already passed this year; only saturates at the end of chrono's range.
        _ => occurrence_in(birth, today.year() + 1, policy).unwrap_or(NaiveDate::MAX),
    }
}

/// Whole days from `today` until the next birthday, using the default
/// leap-day policy. `0` means the birthday is today.
pub fn days_until_birthday(birth: NaiveDate, today: NaiveDate) -> i64 {
    days_until_birthday_with(birth, today, LeapDayPolicy::default())
}

pub fn days_until_birthday_with(birth: NaiveDate, today: NaiveDate, policy: LeapDayPolicy) -> i64 {
    next_occurrence(birth, today, policy)
        .signed_duration_since(today)
        .num_days()
}
