use std::ops::RangeInclusive;

use chrono::{NaiveDate, NaiveTime};

use crate::error::{ParseError, ParseResult};

const CANONICAL_FORMAT: &str = "%-d %b %Y";
const CANONICAL_PARSE_FORMAT: &str = "%d %b %Y";
const ISO_FORMAT: &str = "%Y-%m-%d";
const CLOCK_FORMAT: &str = "%H:%M";

/// Turns a `D-MM-YYYY` date (e.g. `2-12-2024`) into its canonical
/// `D MMM YYYY` rendering (`2 Dec 2024`).
///
/// Only leading and trailing whitespace is tolerated. Day and month take one
/// or two digits, the year exactly four.
pub fn canonicalize_date(input: &str) -> ParseResult<String> {
    let date = parse_day_month_year(input.trim()).ok_or(ParseError::WrongDateFormat)?;
    Ok(date.format(CANONICAL_FORMAT).to_string())
}

fn parse_day_month_year(input: &str) -> Option<NaiveDate> {
    let mut parts = input.split('-');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    if !is_digits(day, 1..=2) || !is_digits(month, 1..=2) || !is_digits(year, 4..=4) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn is_digits(text: &str, len: RangeInclusive<usize>) -> bool {
    len.contains(&text.len()) && text.bytes().all(|b| b.is_ascii_digit())
}

/// Reads back a date produced by [`canonicalize_date`].
pub fn parse_canonical(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), CANONICAL_PARSE_FORMAT).ok()
}

/// Parses a `YYYY-MM-DD` or `YYYY/MM/DD` date.
pub fn parse_iso_date(text: &str) -> ParseResult<NaiveDate> {
    let normalized = text.trim().replace('/', "-");
    NaiveDate::parse_from_str(&normalized, ISO_FORMAT).map_err(|_| ParseError::WrongDateFormat)
}

/// Splits `START-END` into its two dates, or returns `None` for a single date.
///
/// Both ends use the `/date` element format, so a dash may belong to a date
/// or separate the range. Six components with a dash after the third are a
/// range; three components are a single date. Anything else falls back to
/// splitting on the first dash, which then fails to parse as a date.
pub fn split_date_range(text: &str) -> Option<(&str, &str)> {
    let separators: Vec<(usize, char)> = text
        .char_indices()
        .filter(|(_, c)| *c == '-' || *c == '/')
        .collect();

    if !separators.iter().any(|(_, c)| *c == '-') {
        return None;
    }
    match separators.as_slice() {
        [_, _] => None,
        [_, _, (at, '-'), _, _] => Some((&text[..*at], &text[*at + 1..])),
        _ => text.split_once('-'),
    }
}

/// Parses an `HH:MM` clock time.
pub fn parse_clock(text: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(text, CLOCK_FORMAT).ok()
}
