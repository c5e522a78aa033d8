//! People, groups and who shares a group with whom.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::HasBirthDate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub group_ids: Vec<String>,
    #[serde(default)]
    pub show_age: bool,
}

impl Person {
    /// "Name Surname", or just the name when there is no surname.
    pub fn full_name(&self) -> String {
        match self.surname.as_deref().map(str::trim) {
            Some(surname) if !surname.is_empty() => format!("{} {surname}", self.name),
            _ => self.name.clone(),
        }
    }

    pub fn in_group(&self, group_id: &str) -> bool {
        self.group_ids.iter().any(|g| g == group_id)
    }
}

impl HasBirthDate for Person {
    fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub user_ids: Vec<String>,
}

impl Group {
    pub fn has_user(&self, user_id: &str) -> bool {
        self.user_ids.iter().any(|u| u == user_id)
    }
}

/// Someone sharing at least one group with a given user, together with the
/// groups they share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Companion<'a> {
    pub person: &'a Person,
    /// Shared group names, comma separated, in group order.
    pub group_names: String,
    pub group_ids: Vec<String>,
}

impl HasBirthDate for Companion<'_> {
    fn birth_date(&self) -> NaiveDate {
        self.person.birth_date
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub people: Vec<Person>,
    pub groups: Vec<Group>,
}

impl Roster {
    pub fn new(people: Vec<Person>, groups: Vec<Group>) -> Self {
        Self { people, groups }
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Groups whose `user_ids` include `user_id`, in roster order.
    pub fn groups_of(&self, user_id: &str) -> Vec<&Group> {
        self.groups.iter().filter(|g| g.has_user(user_id)).collect()
    }

    /// People listing `group_id` among their groups, in roster order.
    pub fn members_of(&self, group_id: &str) -> Vec<&Person> {
        self.people.iter().filter(|p| p.in_group(group_id)).collect()
    }

    /// Everyone who shares a group with `user_id`, excluding the user.
    ///
    /// Groups are taken from each group's `user_ids`; members from each
    /// person's `group_ids`. A person in several shared groups appears once,
    /// at the position of the first group they were found in.
    pub fn people_sharing_groups(&self, user_id: &str) -> Vec<Companion<'_>> {
        let mut companions: Vec<Companion<'_>> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for group in self.groups_of(user_id) {
            for person in self
                .people
                .iter()
                .filter(|p| p.id != user_id && p.in_group(&group.id))
            {
                match index.get(person.id.as_str()) {
                    Some(&i) => {
                        let existing = &mut companions[i];
                        existing.group_names.push_str(", ");
                        existing.group_names.push_str(&group.name);
                        existing.group_ids.push(group.id.clone());
                    }
                    None => {
                        index.insert(person.id.as_str(), companions.len());
                        companions.push(Companion {
                            person,
                            group_names: group.name.clone(),
                            group_ids: vec![group.id.clone()],
                        });
                    }
                }
            }
        }

        companions
    }
}

/// "1 member" / "N members".
pub fn member_count_label(count: usize) -> String {
    if count == 1 {
        "1 member".to_string()
    } else {
        format!("{count} members")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: &str, name: &str, groups: &[&str]) -> Person {
        Person {
            id: id.to_string(),
            name: name.to_string(),
            surname: None,
            email: None,
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            group_ids: groups.iter().map(|g| g.to_string()).collect(),
            show_age: false,
        }
    }

    fn group(id: &str, name: &str, users: &[&str]) -> Group {
        Group {
            id: id.to_string(),
            name: name.to_string(),
            user_ids: users.iter().map(|u| u.to_string()).collect(),
        }
    }

    fn roster() -> Roster {
        Roster::new(
            vec![
                person("me", "Me", &["family", "work"]),
                person("ann", "Ann", &["family"]),
                person("bo", "Bo", &["family", "work"]),
                person("cy", "Cy", &["work"]),
                person("dee", "Dee", &["club"]),
            ],
            vec![
                group("family", "Family", &["me", "ann", "bo"]),
                group("work", "Work", &["me", "bo", "cy"]),
                group("club", "Club", &["dee"]),
            ],
        )
    }

    #[test]
    fn lookup_by_id() {
        let r = roster();
        assert_eq!(r.group("work").map(|g| g.name.as_str()), Some("Work"));
        assert_eq!(r.person("cy").map(|p| p.name.as_str()), Some("Cy"));
        assert!(r.group("nope").is_none());
        assert!(r.person("nope").is_none());
    }

    #[test]
    fn groups_of_user_in_roster_order() {
        let r = roster();
        let ids: Vec<&str> = r.groups_of("bo").iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["family", "work"]);

        let ids: Vec<&str> = r.groups_of("dee").iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["club"]);

        assert!(r.groups_of("ghost").is_empty());
    }

    #[test]
    fn members_of_group_in_roster_order() {
        let r = roster();
        let ids: Vec<&str> = r.members_of("work").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["me", "bo", "cy"]);
        assert!(r.members_of("empty").is_empty());
    }

    #[test]
    fn sharing_groups_excludes_self_and_dedups() {
        let r = roster();
        let companions = r.people_sharing_groups("me");
        let ids: Vec<&str> = companions.iter().map(|c| c.person.id.as_str()).collect();
        assert_eq!(ids, vec!["ann", "bo", "cy"]);

        let bo = &companions[1];
        assert_eq!(bo.group_names, "Family, Work");
        assert_eq!(bo.group_ids, vec!["family", "work"]);
        assert_eq!(companions[2].group_names, "Work");
    }

    #[test]
    fn sharing_groups_for_loner_is_empty() {
        let r = roster();
        assert!(r.people_sharing_groups("dee").is_empty());
        assert!(r.people_sharing_groups("ghost").is_empty());
    }

    #[test]
    fn full_name_with_and_without_surname() {
        let mut p = person("x", "Alice", &[]);
        assert_eq!(p.full_name(), "Alice");
        p.surname = Some("Smith".to_string());
        assert_eq!(p.full_name(), "Alice Smith");
        p.surname = Some("  ".to_string());
        assert_eq!(p.full_name(), "Alice");
    }

    #[test]
    fn member_count_is_pluralised() {
        assert_eq!(member_count_label(0), "0 members");
        assert_eq!(member_count_label(1), "1 member");
        assert_eq!(member_count_label(4), "4 members");
    }
}
