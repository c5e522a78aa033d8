use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BirthdayError {
    #[error("Invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Could not parse date '{input}' (expected YYYY-MM-DD): {source}")]
    ParseDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Failed to read roster {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Roster is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("Person not found: {0}")]
    PersonNotFound(String),
}

impl BirthdayError {
    pub fn validation(message: impl Into<String>) -> Self {
        BirthdayError::Validation {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BirthdayError>;
