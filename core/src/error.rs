//! Error types for the command parser and the task list.

use std::num::ParseIntError;
use thiserror::Error;

/// Why a line of input could not be turned into a [`Command`](crate::Command).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The first word is not a known command.
    #[error("I don't know what that command means")]
    InvalidCommand,

    /// `todo`, `deadline`, `event` or `lesson` with nothing to describe.
    #[error("the description cannot be empty")]
    MissingDescription,

    #[error("a deadline needs a due date after /by")]
    MissingDeadline,

    #[error("an event needs a date after /at")]
    MissingEventInfo,

    /// A date did not match the pattern expected at that position.
    #[error("dates must look like 2-12-2024 (or 2024-12-02 after /date)")]
    WrongDateFormat,

    /// `display` with neither a module code nor a `/date` clause.
    #[error("use `display MODULE`, `display /date DATE[-DATE]` or `display MODULE /date DATE`")]
    WrongInputFormat,

    /// `done`, `delete` or `find` with no operand.
    #[error("`{command}` needs an argument")]
    MissingArgument { command: &'static str },

    /// Task numbers are 1-based, so `0` has no task behind it.
    #[error("task numbers start at 1")]
    NonPositiveIndex,

    #[error("not a valid number: {0}")]
    InvalidNumber(#[from] ParseIntError),

    #[error("malformed lesson: {0}")]
    MalformedLesson(String),
}

impl ParseError {
    pub fn malformed_lesson(reason: impl Into<String>) -> Self {
        Self::MalformedLesson(reason.into())
    }

    /// Returns the error category as a short label for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidCommand => "Unknown command",
            Self::MissingDescription | Self::MissingArgument { .. } => "Missing input",
            Self::MissingDeadline | Self::MissingEventInfo => "Missing date",
            Self::WrongDateFormat => "Date format",
            Self::WrongInputFormat => "Input format",
            Self::NonPositiveIndex | Self::InvalidNumber(_) => "Task number",
            Self::MalformedLesson(_) => "Lesson format",
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Failures reported by a [`TaskRepository`](crate::TaskRepository).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("there is no task {} (the list has {len})", .index + 1)]
    IndexOutOfRange { index: usize, len: usize },
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_wraps_parse_int_error() {
        let source = "abc".parse::<usize>().unwrap_err();
        let err = ParseError::from(source.clone());
        assert_eq!(err, ParseError::InvalidNumber(source));
        assert_eq!(err.category(), "Task number");
        assert!(err.to_string().starts_with("not a valid number"));
    }

    #[test]
    fn test_missing_argument_names_command() {
        let err = ParseError::MissingArgument { command: "done" };
        assert_eq!(err.to_string(), "`done` needs an argument");
    }

    #[test]
    fn test_store_error_reports_one_based_index() {
        let err = StoreError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "there is no task 5 (the list has 2)");
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParseError>();
        assert_send_sync::<StoreError>();
    }
}
