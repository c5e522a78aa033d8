use serde::Serialize;

use crate::card::{BirthdayCard, GroupCard};
use crate::error::Result;

const MIN_ROW_CHARS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Something that prints as one `key: ..... value` line.
pub trait ReportRow {
    fn key(&self) -> &str;
    fn value(&self) -> String;
}

impl ReportRow for BirthdayCard {
    fn key(&self) -> &str {
        &self.display_name
    }

    fn value(&self) -> String {
        match &self.group_name {
            Some(group) => format!("{} · {} ({group})", self.birthday, self.label),
            None => format!("{} · {}", self.birthday, self.label),
        }
    }
}

impl ReportRow for GroupCard {
    fn key(&self) -> &str {
        &self.name
    }

    fn value(&self) -> String {
        self.members.clone()
    }
}

// Utilities for building aligned rows

/// Splits a row into `("key: ", dots, value)` so that every value of the
/// report starts at the same column.
pub fn build_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.chars().count() + value.chars().count();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => format!("{} ", ".".repeat(n - 1)),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.chars().count()) + 2;
    format!("{base}{}", "-".repeat(dash_count))
}

/// Plain-text report: a dashed header followed by one dot-aligned row per
/// entry, or `empty_text` when there is nothing to list.
pub fn render_text<R: ReportRow>(title: &str, rows: &[R], empty_text: &str) -> String {
    let values: Vec<String> = rows.iter().map(ReportRow::value).collect();

    let align_width = rows
        .iter()
        .zip(&values)
        .map(|(r, v)| r.key().chars().count() + 2 + v.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_ROW_CHARS);

    let mut out = build_header_line(title, align_width);
    out.push('\n');

    if rows.is_empty() {
        out.push_str(empty_text);
        out.push('\n');
        return out;
    }

    for (row, value) in rows.iter().zip(&values) {
        let (k, d, v) = build_row(row.key(), value, align_width);
        out.push_str(&format!("{k}{d}{v}\n"));
    }

    out
}

pub fn render_json<T: Serialize>(items: &[T]) -> Result<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

pub fn render<R>(format: Format, title: &str, rows: &[R], empty_text: &str) -> Result<String>
where
    R: ReportRow + Serialize,
{
    match format {
        Format::Text => Ok(render_text(title, rows, empty_text)),
        Format::Json => render_json(rows),
    }
}
