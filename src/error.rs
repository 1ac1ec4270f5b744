//! Error types for studyplan
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (unknown id, bad date, bad args)
//! - 3: Validation refused (missing field, duplicate title, unknown subject)
//! - 4: Operation failed (IO, serialization)

use thiserror::Error;

/// Exit codes for the studyplan CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const VALIDATION_REFUSED: i32 = 3;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for studyplan operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Ambiguous task id prefix: {0}")]
    AmbiguousId(String),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Validation refusals (exit code 3)
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("A task titled \"{0}\" already exists")]
    DuplicateTitle(String),

    #[error("Unknown subject: {subject}")]
    UnknownSubject {
        subject: String,
        allowed: Vec<String>,
    },

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors
            Error::TaskNotFound(_)
            | Error::AmbiguousId(_)
            | Error::InvalidDate(_)
            | Error::InvalidArgument(_)
            | Error::InvalidConfig(_) => exit_codes::USER_ERROR,

            // Validation refusals
            Error::MissingField(_)
            | Error::DuplicateTitle(_)
            | Error::UnknownSubject { .. } => exit_codes::VALIDATION_REFUSED,

            // Operation failures
            Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_)
            | Error::TomlSerialize(_)
            | Error::OperationFailed(_) => exit_codes::OPERATION_FAILED,
        }
    }

    /// Structured details for JSON error output, when the variant carries any
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::MissingField(field) => Some(serde_json::json!({ "field": field })),
            Error::DuplicateTitle(title) => Some(serde_json::json!({ "title": title })),
            Error::UnknownSubject { subject, allowed } => Some(serde_json::json!({
                "subject": subject,
                "allowed": allowed,
            })),
            _ => None,
        }
    }
}

/// Result type alias for studyplan operations
pub type Result<T> = std::result::Result<T, Error>;
