use chrono::NaiveDate;
use serde::Serialize;

use crate::age::next_age;
use crate::calendar::{LeapDayPolicy, days_until_birthday_with};
use crate::label::{Urgency, format_birthday, format_proximity_label};
use crate::roster::{Group, Person, member_count_label};

const SELF_NAME: &str = "Me";

/// Everything needed to show one person's upcoming birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthdayCard {
    pub id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    pub birthday: String,
    pub days_until: i64,
    pub label: String,
    pub urgency: Urgency,
}

impl BirthdayCard {
    /// Builds the card for `person` as seen by `viewer_id` on `today`.
    ///
    /// The viewer's own card is titled "Me". When the person opted in via
    /// `show_age`, the age they are about to turn is appended.
    pub fn build(
        person: &Person,
        today: NaiveDate,
        viewer_id: Option<&str>,
        group_name: Option<String>,
        policy: LeapDayPolicy,
    ) -> Self {
        let days_until = days_until_birthday_with(person.birth_date, today, policy);

        let base = if viewer_id == Some(person.id.as_str()) {
            SELF_NAME.to_string()
        } else {
            person.full_name()
        };
        let display_name = if person.show_age {
            format!("{base} ({})", next_age(person.birth_date, today, policy))
        } else {
            base
        };

        Self {
            id: person.id.clone(),
            display_name,
            group_name,
            birthday: format_birthday(person.birth_date),
            days_until,
            label: format_proximity_label(days_until, today),
            urgency: Urgency::from_days(days_until),
        }
    }
}

/// One entry of a user's group list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCard {
    pub id: String,
    pub name: String,
    pub member_count: usize,
    pub members: String,
}

impl GroupCard {
    pub fn build(group: &Group) -> Self {
        let member_count = group.user_ids.len();
        Self {
            id: group.id.clone(),
            name: group.name.clone(),
            member_count,
            members: member_count_label(member_count),
        }
    }
}
