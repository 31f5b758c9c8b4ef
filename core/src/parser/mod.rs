//! Turns a line of user input into a typed [`Command`].
//!
//! The first word picks the intent; the rest of the line goes to that
//! intent's validator. Every failure is a [`ParseError`], never a partial
//! command.

pub mod display;
pub mod task;

#[cfg(test)]
mod parser_test;

use tracing::debug;

use crate::error::{ParseError, ParseResult};
use crate::input::split_keyword;
use crate::model::command::{Command, TaskIndex};

pub use display::validate_display;
pub use task::{validate_deadline, validate_event, validate_lesson, validate_todo};

pub fn parse(line: &str) -> ParseResult<Command> {
    let (keyword, rest) = split_keyword(line);

    let command = match keyword.to_lowercase().as_str() {
        "bye" => Command::Exit,
        "list" => Command::List,
        "done" => Command::Done {
            index: parse_index("done", rest)?,
        },
        "delete" => Command::Delete {
            index: parse_index("delete", rest)?,
        },
        "find" => Command::Find {
            keywords: parse_keywords(rest)?,
        },
        "todo" => Command::Add {
            payload: validate_todo(rest)?.into(),
        },
        "deadline" => Command::Add {
            payload: validate_deadline(rest)?.into(),
        },
        "event" => Command::Add {
            payload: validate_event(rest)?.into(),
        },
        "lesson" => Command::Add {
            payload: validate_lesson(rest)?.into(),
        },
        "display" => Command::Display {
            selector: validate_display(rest)?,
        },
        _ => {
            debug!(keyword, "unrecognised command keyword");
            return Err(ParseError::InvalidCommand);
        }
    };

    debug!(?command, "parsed input");
    Ok(command)
}

/// Reads the 1-based task number after `done`/`delete`.
fn parse_index(command: &'static str, rest: Option<&str>) -> ParseResult<TaskIndex> {
    let operand = rest
        .and_then(|r| r.split_whitespace().next())
        .ok_or(ParseError::MissingArgument { command })?;
    let number: usize = operand.parse()?;
    TaskIndex::from_one_based(number).ok_or(ParseError::NonPositiveIndex)
}

fn parse_keywords(rest: Option<&str>) -> ParseResult<String> {
    match rest {
        Some(keywords) if !keywords.trim().is_empty() => Ok(keywords.to_lowercase()),
        _ => Err(ParseError::MissingArgument { command: "find" }),
    }
}
