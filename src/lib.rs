//! Birthday proximity calculations over a roster of people and groups.
//!
//! Every calculation takes the reference date explicitly; nothing in the
//! library reads the system clock.

pub mod age;
pub mod calendar;
pub mod card;
pub mod cli;
pub mod config;
pub mod error;
pub mod label;
pub mod logger;
pub mod record;
pub mod report;
pub mod roster;

pub use age::{calculate_age, next_age};
pub use calendar::{LeapDayPolicy, days_until_birthday, days_until_birthday_with};
pub use card::BirthdayCard;
pub use config::RosterConfig;
pub use error::{BirthdayError, Result};
pub use label::{calculate_months_between, format_birthday, format_proximity_label};
pub use record::{BirthRecord, HasBirthDate, sort_by_upcoming_birthday, sort_by_upcoming_birthday_with};
pub use roster::{Group, Person, Roster};
