use tracing::debug;

use crate::error::{ParseError, ParseResult};
use crate::input::{last_token, split_on_marker, Marker};
use crate::model::task::{Deadline, Event, Frequency, Lesson, ToDo};
use crate::time::{canonicalize_date, parse_clock};

/// `rest` is everything after the `todo` keyword, kept as typed.
pub fn validate_todo(rest: Option<&str>) -> ParseResult<ToDo> {
    let description = rest.ok_or(ParseError::MissingDescription)?;
    Ok(ToDo::new(description))
}

/// `DESCRIPTION /by D-MM-YYYY`. The description keeps the space before `/by`.
pub fn validate_deadline(rest: Option<&str>) -> ParseResult<Deadline> {
    let (description, due) = split_described(rest, Marker::By, ParseError::MissingDeadline)?;
    Ok(Deadline::new(description, canonicalize_date(due)?))
}

/// `DESCRIPTION /at D-MM-YYYY`.
pub fn validate_event(rest: Option<&str>) -> ParseResult<Event> {
    let (description, at) = split_described(rest, Marker::At, ParseError::MissingEventInfo)?;
    Ok(Event::new(description, canonicalize_date(at)?))
}

fn split_described(
    rest: Option<&str>,
    marker: Marker,
    missing: ParseError,
) -> ParseResult<(&str, &str)> {
    let rest = rest.ok_or(ParseError::MissingDescription)?;
    let (description, tail) = split_on_marker(rest, marker).ok_or(missing)?;
    if description.trim().is_empty() {
        return Err(ParseError::MissingDescription);
    }
    Ok((description, tail))
}

/// `DESCRIPTION MODULE /on WEEKDAY INTERVAL START END`, e.g.
/// `lecture CS2113 /on 5 7 16:00 18:00`.
///
/// The module code is the last word before `/on`.
pub fn validate_lesson(rest: Option<&str>) -> ParseResult<Lesson> {
    let rest = rest.ok_or(ParseError::MissingDescription)?;
    let (clause, schedule) = split_on_marker(rest, Marker::On).ok_or_else(|| {
        ParseError::malformed_lesson("expected `/on WEEKDAY INTERVAL START END`")
    })?;

    let clause = clause.trim();
    let module_code = last_token(clause).ok_or(ParseError::MissingDescription)?;
    let description = clause
        .strip_suffix(module_code)
        .unwrap_or_default()
        .trim_end();
    if description.is_empty() {
        return Err(ParseError::MissingDescription);
    }
    debug!(module_code, "module code taken from the last word before /on");

    let fields: Vec<&str> = schedule.split_whitespace().collect();
    let [weekday, interval, start, end] = fields.as_slice() else {
        return Err(ParseError::malformed_lesson(format!(
            "expected 4 fields after /on, found {}",
            fields.len()
        )));
    };

    let weekday: u32 = weekday.parse()?;
    if !(1..=7).contains(&weekday) {
        return Err(ParseError::malformed_lesson(
            "weekday must be between 1 (Mon) and 7 (Sun)",
        ));
    }
    let interval: u32 = interval.parse()?;
    if interval == 0 {
        return Err(ParseError::malformed_lesson("interval must be at least 1 day"));
    }

    let start_time = parse_clock(start)
        .ok_or_else(|| ParseError::malformed_lesson(format!("`{start}` is not a HH:MM time")))?;
    let end_time = parse_clock(end)
        .ok_or_else(|| ParseError::malformed_lesson(format!("`{end}` is not a HH:MM time")))?;
    if end_time <= start_time {
        return Err(ParseError::malformed_lesson("a lesson must end after it starts"));
    }

    Ok(Lesson {
        description: description.to_string(),
        module_code: module_code.to_string(),
        frequency: Frequency { weekday, interval },
        start_time,
        end_time,
    })
}
