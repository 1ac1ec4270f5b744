//! Task model and validation for studyplan.
//!
//! The persisted wire format keeps the field names the store file has always
//! used (`date`, `done`, `createdAt`); older blobs that spelled them
//! `dueDate`/`completed` still load via serde aliases.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Date format accepted on input and used in the store file
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single trackable study item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Unique, immutable identifier (UUID v4)
    pub id: String,
    pub title: String,
    pub subject: String,
    #[serde(rename = "date", alias = "dueDate")]
    pub due_date: NaiveDate,
    #[serde(rename = "done", alias = "completed", default)]
    pub completed: bool,
    /// Set once at creation; absent in blobs written by older versions
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

/// User-supplied fields for creating or updating a task.
///
/// Fields are kept as raw text so the store owns all validation, including
/// the empty-field checks.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub subject: String,
    pub due_date: String,
}

impl TaskDraft {
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            due_date: due_date.into(),
        }
    }

    /// Check required fields and parse the due date.
    ///
    /// Returns the parsed date so callers validate and parse in one step.
    pub fn validate(&self) -> Result<NaiveDate> {
        if self.title.trim().is_empty() {
            return Err(Error::MissingField("title"));
        }
        if self.subject.trim().is_empty() {
            return Err(Error::MissingField("subject"));
        }
        let raw = self.due_date.trim();
        if raw.is_empty() {
            return Err(Error::MissingField("date"));
        }
        parse_due_date(raw)
    }
}

impl Task {
    /// Build a task from a validated draft, assigning a fresh id
    pub fn from_draft(draft: &TaskDraft, due_date: NaiveDate) -> Self {
        Self {
            id: generate_id(),
            title: draft.title.trim().to_string(),
            subject: draft.subject.trim().to_string(),
            due_date,
            completed: false,
            created_at: Some(Utc::now()),
        }
    }
}

/// Generate a fresh collision-free task id.
///
/// UUID v4 from the OS random source; uniqueness across the collection is a
/// hard invariant, enforced again by the store on insert.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Parse a `YYYY-MM-DD` due date
pub fn parse_due_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| Error::InvalidDate(raw.trim().to_string()))
}
