//! age.rs
//!
//! Age in completed years as of a reference date.
//!
//! Only the year difference matters, corrected by one when this year's
//! birthday has not been reached yet. Comparing `(month, day)` pairs keeps
//! Feb 29 birthdays correct without any leap-year special case: someone born
//! on Feb 29 is a year older from March 1 in a common year.

use chrono::{Datelike, NaiveDate};

use crate::calendar::{LeapDayPolicy, next_occurrence};

/// Returns completed years of age. A birth date after `today` yields 0.
pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - birth.year();

    // Birthday not reached yet this year
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }

    years.max(0) as u32
}

/// The age a person turns on their next birthday after `today`.
///
/// Follows the observed birthday under `policy`, so a Feb 29 person moves on
/// to the following age on the same day their label reads "Today".
pub fn next_age(birth: NaiveDate, today: NaiveDate, policy: LeapDayPolicy) -> u32 {
    let tomorrow = today.succ_opt().unwrap_or(NaiveDate::MAX);
    let year = next_occurrence(birth, tomorrow, policy).year();
    (year - birth.year()).max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn today() -> NaiveDate {
        d(2026, 1, 29)
    }

    #[test]
    fn birthday_already_passed_this_year() {
        assert_eq!(calculate_age(d(1990, 1, 15), today()), 36);
        assert_eq!(calculate_age(d(1990, 1, 1), today()), 36);
    }

    #[test]
    fn birthday_not_reached_yet() {
        assert_eq!(calculate_age(d(1990, 6, 15), today()), 35);
        assert_eq!(calculate_age(d(1990, 1, 30), today()), 35);
    }

    #[test]
    fn birthday_today_counts_as_reached() {
        assert_eq!(calculate_age(d(1990, 1, 29), today()), 36);
    }

    #[test]
    fn born_yesterday_is_zero() {
        assert_eq!(calculate_age(d(2026, 1, 28), today()), 0);
    }

    #[test]
    fn future_birth_date_clamps_to_zero() {
        assert_eq!(calculate_age(d(2027, 5, 1), today()), 0);
    }

    #[test]
    fn leap_day_birthday() {
        assert_eq!(calculate_age(d(2000, 2, 29), d(2026, 3, 1)), 26);
        assert_eq!(calculate_age(d(2000, 2, 29), d(2026, 2, 28)), 25);
        assert_eq!(calculate_age(d(2000, 2, 29), d(2028, 2, 29)), 28);
    }

    #[test]
    fn next_age_is_one_more() {
        let policy = LeapDayPolicy::default();
        assert_eq!(next_age(d(1990, 6, 15), today(), policy), 36);
        assert_eq!(next_age(d(1990, 1, 30), today(), policy), 36);
        // On the birthday itself the next one is a year away
        assert_eq!(next_age(d(1990, 1, 29), today(), policy), 37);
        assert_eq!(next_age(d(2026, 1, 28), today(), policy), 1);
    }

    #[test]
    fn next_age_follows_observed_leap_day() {
        let birth = d(2000, 2, 29);

        let feb = LeapDayPolicy::FebruaryTwentyEighth;
        assert_eq!(next_age(birth, d(2026, 2, 27), feb), 26);
        assert_eq!(next_age(birth, d(2026, 2, 28), feb), 27);

        let march = LeapDayPolicy::MarchFirst;
        assert_eq!(next_age(birth, d(2026, 2, 28), march), 26);
        assert_eq!(next_age(birth, d(2026, 3, 1), march), 27);

        // Leap years have a real Feb 29 under either policy
        for policy in [feb, march] {
            assert_eq!(next_age(birth, d(2028, 2, 28), policy), 28);
            assert_eq!(next_age(birth, d(2028, 2, 29), policy), 29);
        }
    }

    #[test]
    fn next_age_matches_calculate_age_away_from_the_birthday() {
        let birth = d(1985, 8, 20);
        let mut day = d(2026, 1, 1);
        while day.year() == 2026 {
            if (day.month(), day.day()) != (birth.month(), birth.day()) {
                assert_eq!(
                    next_age(birth, day, LeapDayPolicy::default()),
                    calculate_age(birth, day) + 1,
                    "{day}"
                );
            }
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn age_never_decreases_as_today_advances() {
        let birth = d(2000, 2, 29);
        let mut day = d(2000, 2, 29);
        let mut previous = calculate_age(birth, day);
        while day < d(2010, 1, 1) {
            day = day.succ_opt().unwrap();
            let age = calculate_age(birth, day);
            assert!(age >= previous, "age went from {previous} to {age} on {day}");
            assert!(age - previous <= 1);
            previous = age;
        }
        assert_eq!(previous, 9);
    }
}
