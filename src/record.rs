use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{LeapDayPolicy, days_until_birthday_with};

/// Anything that carries a birth date can be ordered by upcoming birthday.
pub trait HasBirthDate {
    fn birth_date(&self) -> NaiveDate;
}

/// Minimal identifier + birth date pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthRecord {
    pub id: String,
    pub birth_date: NaiveDate,
}

impl BirthRecord {
    pub fn new(id: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            birth_date,
        }
    }
}

impl HasBirthDate for BirthRecord {
    fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }
}

impl<T: HasBirthDate + ?Sized> HasBirthDate for &T {
    fn birth_date(&self) -> NaiveDate {
        (**self).birth_date()
    }
}

/// Returns a copy of `records` ordered by days until the next birthday,
/// closest first. Records with the same day-count keep their input order.
pub fn sort_by_upcoming_birthday<T>(records: &[T], today: NaiveDate) -> Vec<T>
where
    T: HasBirthDate + Clone,
{
    sort_by_upcoming_birthday_with(records, today, LeapDayPolicy::default())
}

pub fn sort_by_upcoming_birthday_with<T>(
    records: &[T],
    today: NaiveDate,
    policy: LeapDayPolicy,
) -> Vec<T>
where
    T: HasBirthDate + Clone,
{
    let mut sorted = records.to_vec();
    // slice::sort_by_cached_key is stable
    sorted.sort_by_cached_key(|r| days_until_birthday_with(r.birth_date(), today, policy));
    sorted
}
