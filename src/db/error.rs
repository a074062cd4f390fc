//! Error type of the persistence layer.
//!
//! Lookups that miss are not errors (`Ok(None)`); everything else the store
//! refuses comes back as one of these variants. Constraint failures raised by
//! SQLite (unique keys, CHECK clauses, foreign keys) are split out from other
//! SQLite errors so the command layer can phrase them for the user.

use rusqlite::ErrorCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    /// A UNIQUE, CHECK or FOREIGN KEY constraint rejected the statement.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Input that cannot be stored: unknown enum code, blank required field,
    /// unparseable date.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The teacher is still assigned to at least one group.
    #[error("teacher {teacher_id} is assigned to groups: {}", groups.join(", "))]
    TeacherInUse { teacher_id: i64, groups: Vec<String> },

    #[error(transparent)]
    Sqlite(rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        if matches!(err.sqlite_error_code(), Some(ErrorCode::ConstraintViolation)) {
            let detail = match &err {
                rusqlite::Error::SqliteFailure(_, Some(message)) => message.clone(),
                other => other.to_string(),
            };
            DbError::ConstraintViolation(detail)
        } else {
            DbError::Sqlite(err)
        }
    }
}

impl DbError {
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, DbError::ConstraintViolation(_))
    }
}

pub type Result<T> = std::result::Result<T, DbError>;

/// Fails with `Validation` when a required text field is blank.
pub fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DbError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Like [`require`], for a field an update may leave unset.
pub fn require_if_set(field: &str, value: Option<&str>) -> Result<()> {
    value.map_or(Ok(()), |v| require(field, v))
}
