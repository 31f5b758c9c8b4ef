#[cfg(test)]
mod tests {
    use crate::error::ParseError;
    use crate::model::command::{Command, DisplaySelector, TaskIndex};
    use crate::model::task::{Deadline, Event, TaskKind, ToDo};
    use crate::parser::parse;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn add(payload: impl Into<TaskKind>) -> Command {
        Command::Add {
            payload: payload.into(),
        }
    }

    #[test]
    fn test_bare_keywords() {
        assert_eq!(parse("bye"), Ok(Command::Exit));
        assert_eq!(parse("list"), Ok(Command::List));
        assert_eq!(parse("todo"), Err(ParseError::MissingDescription));
        assert_eq!(parse("deadline"), Err(ParseError::MissingDescription));
        assert_eq!(parse("event"), Err(ParseError::MissingDescription));
        assert_eq!(parse("lesson"), Err(ParseError::MissingDescription));
        assert_eq!(
            parse("find"),
            Err(ParseError::MissingArgument { command: "find" })
        );
        assert_eq!(
            parse("done"),
            Err(ParseError::MissingArgument { command: "done" })
        );
        assert_eq!(
            parse("delete"),
            Err(ParseError::MissingArgument { command: "delete" })
        );
        assert_eq!(parse("display"), Err(ParseError::WrongInputFormat));
    }

    #[test]
    fn test_keywords_are_case_insensitive_and_ignore_trailing_text() {
        assert_eq!(parse("BYE now"), Ok(Command::Exit));
        assert_eq!(parse("List everything please"), Ok(Command::List));
        assert_eq!(parse("  ToDo read book  "), Ok(add(ToDo::new("read book"))));
    }

    #[test]
    fn test_deadline() {
        assert_eq!(
            parse("deadline submit report /by 2-12-2024"),
            Ok(add(Deadline::new("submit report ", "2 Dec 2024")))
        );
    }

    #[test]
    fn test_event() {
        assert_eq!(
            parse("event team sync /at 5-1-2025"),
            Ok(add(Event::new("team sync ", "5 Jan 2025")))
        );
    }

    #[test]
    fn test_deadline_and_event_errors() {
        assert_eq!(
            parse("deadline submit report"),
            Err(ParseError::MissingDeadline)
        );
        assert_eq!(parse("event team sync"), Err(ParseError::MissingEventInfo));
        assert_eq!(
            parse("deadline submit report /by 32-13-2024"),
            Err(ParseError::WrongDateFormat)
        );
        assert_eq!(
            parse("event team sync /at 5 - 1 - 2025"),
            Err(ParseError::WrongDateFormat)
        );
    }

    #[test]
    fn test_done_and_delete() {
        assert_eq!(
            parse("done 3"),
            Ok(Command::Done {
                index: TaskIndex::from_zero_based(2)
            })
        );
        assert_eq!(
            parse("delete 1"),
            Ok(Command::Delete {
                index: TaskIndex::from_zero_based(0)
            })
        );
        assert!(matches!(parse("done abc"), Err(ParseError::InvalidNumber(_))));
        assert!(matches!(parse("delete -2"), Err(ParseError::InvalidNumber(_))));
        assert_eq!(parse("done 0"), Err(ParseError::NonPositiveIndex));
    }

    #[test]
    fn test_index_is_not_bounds_checked() {
        assert_eq!(
            parse("done 999"),
            Ok(Command::Done {
                index: TaskIndex::from_zero_based(998)
            })
        );
    }

    #[test]
    fn test_find() {
        assert_eq!(
            parse("find project"),
            Ok(Command::Find {
                keywords: "project".to_string()
            })
        );
        assert_eq!(
            parse("find Big Project"),
            Ok(Command::Find {
                keywords: "big project".to_string()
            })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            parse("display CS2113"),
            Ok(Command::Display {
                selector: DisplaySelector::ByModuleCode {
                    code: "CS2113".to_string()
                }
            })
        );
        assert_eq!(
            parse("display /date 2024-01-01-2024-01-31"),
            Ok(Command::Display {
                selector: DisplaySelector::ByDateRange {
                    start: ymd(2024, 1, 1),
                    end: ymd(2024, 1, 31),
                }
            })
        );
        assert_eq!(
            parse("display /date not-a-date"),
            Err(ParseError::WrongDateFormat)
        );
    }

    #[test]
    fn test_lesson_is_added() {
        let command = parse("lesson lecture CS2113 /on 5 7 16:00 18:00").unwrap();
        match command {
            Command::Add {
                payload: TaskKind::Lesson(lesson),
            } => {
                assert_eq!(lesson.module_code, "CS2113");
                assert_eq!(lesson.description, "lecture");
            }
            other => panic!("expected a lesson, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(parse("foobar"), Err(ParseError::InvalidCommand));
        assert_eq!(parse(""), Err(ParseError::InvalidCommand));
        assert_eq!(parse("todos read"), Err(ParseError::InvalidCommand));
    }
}
