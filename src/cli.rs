use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;

use crate::calendar::{LeapDayPolicy, parse_date};
use crate::card::{BirthdayCard, GroupCard};
use crate::config::RosterConfig;
use crate::error::{BirthdayError, Result};
use crate::record::sort_by_upcoming_birthday_with;
use crate::report::{self, Format, ReportRow};
use crate::roster::member_count_label;

#[derive(Parser, Debug, Clone)]
#[command(name = "birthdays")]
#[command(about = "List upcoming birthdays from a roster of people and groups")]
pub struct Cli {
    /// Roster file (TOML)
    #[arg(long, env = "BIRTHDAYS_ROSTER", default_value = "roster.toml")]
    pub roster: PathBuf,

    /// Reference date (YYYY-MM-DD), defaults to the local date
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// Only list members of this group
    #[arg(long, conflicts_with = "user")]
    pub group: Option<String>,

    /// List the groups this user belongs to, with member counts
    #[arg(long, conflicts_with_all = ["group", "user"])]
    pub groups_of: Option<String>,

    /// List people sharing a group with this user
    #[arg(long)]
    pub user: Option<String>,

    /// Person viewing the list; their own card is shown as "Me"
    #[arg(long)]
    pub viewer: Option<String>,

    /// Where Feb 29 birthdays fall in common years
    #[arg(long, value_enum)]
    pub leap_day: Option<LeapDayPolicy>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: Format,

    /// Show at most this many entries
    #[arg(long)]
    pub limit: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

const NO_BIRTHDAYS_TEXT: &str = "No birthdays found.";
const NO_MEMBERS_TEXT: &str = "No members in this group yet.";
const NO_PEOPLE_TEXT: &str = "No people found in your groups yet.";
const NO_GROUPS_TEXT: &str = "You don't belong to any groups yet.";

impl Cli {
    /// Renders the selected listing as of `today`.
    pub fn report(&self, config: RosterConfig, today: NaiveDate) -> Result<String> {
        let policy = self.leap_day.or(config.leap_day).unwrap_or_default();
        let roster = config.into_roster();

        if let Some(user_id) = &self.groups_of {
            if roster.person(user_id).is_none() {
                return Err(BirthdayError::PersonNotFound(user_id.clone()));
            }
            let groups = roster
                .groups_of(user_id)
                .into_iter()
                .map(GroupCard::build)
                .collect::<Vec<_>>();
            tracing::debug!(user = %user_id, groups = groups.len(), "Listing groups");

            return self.render("Groups", groups, NO_GROUPS_TEXT);
        }

        if let Some(group_id) = &self.group {
            let group = roster
                .group(group_id)
                .ok_or_else(|| BirthdayError::GroupNotFound(group_id.clone()))?;
            let members = sort_by_upcoming_birthday_with(&roster.members_of(group_id), today, policy);
            tracing::debug!(group = %group.id, members = members.len(), "Listing group");

            let title = format!("{} · {}", group.name, member_count_label(members.len()));
            let viewer = self.viewer.as_deref();
            let cards = members
                .iter()
                .map(|p| BirthdayCard::build(p, today, viewer, None, policy))
                .collect::<Vec<_>>();
            return self.render(&title, cards, NO_MEMBERS_TEXT);
        }

        if let Some(user_id) = &self.user {
            if roster.person(user_id).is_none() {
                return Err(BirthdayError::PersonNotFound(user_id.clone()));
            }
            let people =
                sort_by_upcoming_birthday_with(&roster.people_sharing_groups(user_id), today, policy);
            tracing::debug!(user = %user_id, people = people.len(), "Listing people");

            let viewer = self.viewer.as_deref().or(Some(user_id.as_str()));
            let cards = people
                .into_iter()
                .map(|c| BirthdayCard::build(c.person, today, viewer, Some(c.group_names), policy))
                .collect::<Vec<_>>();
            return self.render("People", cards, NO_PEOPLE_TEXT);
        }

        let everyone = sort_by_upcoming_birthday_with(&roster.people, today, policy);
        let viewer = self.viewer.as_deref();
        let cards = everyone
            .iter()
            .map(|p| BirthdayCard::build(p, today, viewer, None, policy))
            .collect::<Vec<_>>();
        self.render("Everyone", cards, NO_BIRTHDAYS_TEXT)
    }

    fn render<R>(&self, title: &str, mut rows: Vec<R>, empty_text: &str) -> Result<String>
    where
        R: ReportRow + Serialize,
    {
        if let Some(limit) = self.limit {
            rows.truncate(limit);
        }
        report::render(self.format, title, &rows, empty_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("birthdays").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&["--roster", "people.toml"]);
        assert_eq!(cli.roster, PathBuf::from("people.toml"));
        assert_eq!(cli.today, None);
        assert_eq!(cli.format, Format::Text);
        assert_eq!(cli.leap_day, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_today_and_policy() {
        let cli = parse(&[
            "--roster",
            "r.toml",
            "--today",
            "2026-01-29",
            "--leap-day",
            "february-twenty-eighth",
            "--format",
            "json",
            "-v",
        ]);
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2026, 1, 29));
        assert_eq!(cli.leap_day, Some(LeapDayPolicy::FebruaryTwentyEighth));
        assert_eq!(cli.format, Format::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_bad_today() {
        let args = ["birthdays", "--roster", "r.toml", "--today", "2026-02-30"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn group_and_user_conflict() {
        let args = ["birthdays", "--roster", "r.toml", "--group", "g", "--user", "u"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn groups_of_conflicts_with_other_listings() {
        let cli = parse(&["--roster", "r.toml", "--groups-of", "u1"]);
        assert_eq!(cli.groups_of.as_deref(), Some("u1"));

        let args = ["birthdays", "--roster", "r.toml", "--groups-of", "u1", "--group", "g"];
        assert!(Cli::try_parse_from(args).is_err());
        let args = ["birthdays", "--roster", "r.toml", "--groups-of", "u1", "--user", "u1"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
