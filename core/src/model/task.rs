use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::time::parse_canonical;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ToDo {
    pub description: String,
}

impl ToDo {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A task that must be finished by `due_date`.
///
/// `due_date` always holds the canonical `D MMM YYYY` rendering produced by
/// [`canonicalize_date`](crate::time::canonicalize_date), never raw input.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Deadline {
    pub description: String,
    pub due_date: String,
}

impl Deadline {
    pub fn new(description: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            due_date: due_date.into(),
        }
    }
}

/// Something happening at a given date. Same invariants as [`Deadline`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub description: String,
    pub at_info: String,
}

impl Event {
    pub fn new(description: impl Into<String>, at_info: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            at_info: at_info.into(),
        }
    }
}

/// Weekly slot of a lesson: `weekday` runs 1 (Mon) to 7 (Sun), `interval`
/// is the repeat period in days.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frequency {
    pub weekday: u32,
    pub interval: u32,
}

impl Frequency {
    pub fn weekday(&self) -> Option<Weekday> {
        match self.weekday {
            1 => Some(Weekday::Mon),
            2 => Some(Weekday::Tue),
            3 => Some(Weekday::Wed),
            4 => Some(Weekday::Thu),
            5 => Some(Weekday::Fri),
            6 => Some(Weekday::Sat),
            7 => Some(Weekday::Sun),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub description: String,
    pub module_code: String,
    pub frequency: Frequency,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    ToDo(ToDo),
    Deadline(Deadline),
    Event(Event),
    Lesson(Lesson),
}

impl From<ToDo> for TaskKind {
    fn from(todo: ToDo) -> Self {
        TaskKind::ToDo(todo)
    }
}

impl From<Deadline> for TaskKind {
    fn from(deadline: Deadline) -> Self {
        TaskKind::Deadline(deadline)
    }
}

impl From<Event> for TaskKind {
    fn from(event: Event) -> Self {
        TaskKind::Event(event)
    }
}

impl From<Lesson> for TaskKind {
    fn from(lesson: Lesson) -> Self {
        TaskKind::Lesson(lesson)
    }
}

impl TaskKind {
    pub fn description(&self) -> &str {
        match self {
            TaskKind::ToDo(t) => &t.description,
            TaskKind::Deadline(d) => &d.description,
            TaskKind::Event(e) => &e.description,
            TaskKind::Lesson(l) => &l.description,
        }
    }

    pub fn type_icon(&self) -> char {
        match self {
            TaskKind::ToDo(_) => 'T',
            TaskKind::Deadline(_) => 'D',
            TaskKind::Event(_) => 'E',
            TaskKind::Lesson(_) => 'L',
        }
    }

    /// Human readable timing, if the task has any.
    pub fn when(&self) -> Option<String> {
        match self {
            TaskKind::ToDo(_) => None,
            TaskKind::Deadline(d) => Some(format!("by: {}", d.due_date)),
            TaskKind::Event(e) => Some(format!("at: {}", e.at_info)),
            TaskKind::Lesson(l) => {
                let day = l
                    .frequency
                    .weekday()
                    .map(|w| w.to_string())
                    .unwrap_or_else(|| "?".to_string());
                Some(format!(
                    "{} {}-{}, every {} days",
                    day,
                    l.start_time.format("%H:%M"),
                    l.end_time.format("%H:%M"),
                    l.frequency.interval
                ))
            }
        }
    }

    fn date(&self) -> Option<NaiveDate> {
        match self {
            TaskKind::Deadline(d) => parse_canonical(&d.due_date),
            TaskKind::Event(e) => parse_canonical(&e.at_info),
            TaskKind::ToDo(_) | TaskKind::Lesson(_) => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub kind: TaskKind,
    pub done: bool,
}

impl Task {
    pub fn new(kind: impl Into<TaskKind>) -> Self {
        Self {
            kind: kind.into(),
            done: false,
        }
    }

    pub fn description(&self) -> &str {
        self.kind.description()
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn status_icon(&self) -> char {
        if self.done {
            'X'
        } else {
            ' '
        }
    }

    /// `keywords` are compared case-insensitively against the description.
    pub fn matches_keywords(&self, keywords: &str) -> bool {
        let needle = keywords.trim().to_lowercase();
        self.description().to_lowercase().contains(&needle)
    }

    /// Lessons match on their module code; any task matches when a word
    /// of its description is the code.
    pub fn belongs_to_module(&self, code: &str) -> bool {
        if let TaskKind::Lesson(lesson) = &self.kind {
            if lesson.module_code.eq_ignore_ascii_case(code) {
                return true;
            }
        }
        self.description()
            .split_whitespace()
            .any(|word| word.eq_ignore_ascii_case(code))
    }

    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match &self.kind {
            TaskKind::Lesson(lesson) => lesson.frequency.weekday() == Some(date.weekday()),
            kind => kind.date() == Some(date),
        }
    }

    /// Inclusive on both ends. An inverted range matches nothing.
    pub fn occurs_between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        if start > end {
            return false;
        }
        match &self.kind {
            TaskKind::Lesson(_) => start
                .iter_days()
                .take_while(|day| *day <= end)
                .take(7)
                .any(|day| self.occurs_on(day)),
            kind => kind.date().is_some_and(|d| start <= d && d <= end),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.type_icon(),
            self.status_icon(),
            self.description()
        )?;
        if let TaskKind::Lesson(lesson) = &self.kind {
            write!(f, " {}", lesson.module_code)?;
        }
        if let Some(when) = self.kind.when() {
            write!(f, " ({})", when)?;
        }
        Ok(())
    }
}
