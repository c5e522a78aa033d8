//! Roster file loading.
//!
//! The roster is a TOML document with `[[people]]` and `[[groups]]` arrays
//! and an optional top-level `leap_day` policy.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calendar::LeapDayPolicy;
use crate::error::{BirthdayError, Result};
use crate::roster::{Group, Person, Roster};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub leap_day: Option<LeapDayPolicy>,
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl RosterConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RosterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading roster");

        let content = std::fs::read_to_string(path).map_err(|source| BirthdayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;

        tracing::info!(
            people = config.people.len(),
            groups = config.groups.len(),
            "Roster loaded"
        );
        Ok(config)
    }

    pub fn into_roster(self) -> Roster {
        Roster::new(self.people, self.groups)
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        let mut person_ids = HashSet::new();
        for person in &self.people {
            validate_non_empty("people.id", &person.id)?;
            validate_non_empty(&format!("people[{}].name", person.id), &person.name)?;
            if !person_ids.insert(person.id.as_str()) {
                return Err(BirthdayError::validation(format!(
                    "duplicate person id '{}'",
                    person.id
                )));
            }
        }

        let mut group_ids = HashSet::new();
        for group in &self.groups {
            validate_non_empty("groups.id", &group.id)?;
            validate_non_empty(&format!("groups[{}].name", group.id), &group.name)?;
            if !group_ids.insert(group.id.as_str()) {
                return Err(BirthdayError::validation(format!(
                    "duplicate group id '{}'",
                    group.id
                )));
            }
        }

        for person in &self.people {
            if let Some(unknown) = person
                .group_ids
                .iter()
                .find(|g| !group_ids.contains(g.as_str()))
            {
                return Err(BirthdayError::validation(format!(
                    "person '{}' references unknown group '{unknown}'",
                    person.id
                )));
            }
        }

        for group in &self.groups {
            if let Some(unknown) = group
                .user_ids
                .iter()
                .find(|u| !person_ids.contains(u.as_str()))
            {
                return Err(BirthdayError::validation(format!(
                    "group '{}' references unknown person '{unknown}'",
                    group.id
                )));
            }
        }

        Ok(())
    }
}

fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BirthdayError::validation(format!(
            "{field_name} cannot be empty"
        )));
    }
    Ok(())
}
