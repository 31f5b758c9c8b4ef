use duequest_core::{DisplaySelector, ParseError, Response, TaskEntry, TaskKind};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "No")]
    number: usize,
    #[tabled(rename = "Type")]
    kind: char,
    #[tabled(rename = "Done")]
    done: char,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "When")]
    when: String,
}

impl From<&TaskEntry> for TaskRow {
    fn from(entry: &TaskEntry) -> Self {
        let task = &entry.task;
        let description = match &task.kind {
            TaskKind::Lesson(lesson) => format!("{} {}", lesson.description, lesson.module_code),
            kind => kind.description().to_string(),
        };
        TaskRow {
            number: entry.number,
            kind: task.kind.type_icon(),
            done: task.status_icon(),
            description,
            when: task.kind.when().unwrap_or_else(|| "-".to_string()),
        }
    }
}

fn table(entries: &[TaskEntry]) -> String {
    let mut table = Table::new(entries.iter().map(TaskRow::from));
    table.with(Style::modern());
    table.to_string()
}

fn describe(selector: &DisplaySelector) -> String {
    match selector {
        DisplaySelector::ByModuleCode { code } => format!("for {}", code),
        DisplaySelector::ByDate { date } => format!("on {}", date),
        DisplaySelector::ByDateRange { start, end } => format!("from {} to {}", start, end),
        DisplaySelector::ByModuleAndDate { code, date } => format!("for {} on {}", code, date),
    }
}

pub fn render_response(response: &Response) -> String {
    match response {
        Response::Added { entry, total } => format!(
            "Got it. I've added this task:\n  {}\nNow you have {} task(s) in the list.",
            entry.task, total
        ),
        Response::MarkedDone { entry } => {
            format!("Nice! I've marked this task as done:\n  {}", entry.task)
        }
        Response::Deleted { entry, remaining } => format!(
            "Noted. I've removed this task:\n  {}\nNow you have {} task(s) in the list.",
            entry.task, remaining
        ),
        Response::Listed { entries } => {
            if entries.is_empty() {
                "Your task list is empty.".to_string()
            } else {
                format!("Here are the tasks in your list:\n{}", table(entries))
            }
        }
        Response::Found { keywords, entries } => {
            if entries.is_empty() {
                format!("No tasks match \"{}\".", keywords.trim())
            } else {
                format!("Here are the matching tasks in your list:\n{}", table(entries))
            }
        }
        Response::Displayed { selector, entries } => {
            if entries.is_empty() {
                format!("No tasks {}.", describe(selector))
            } else {
                format!("Tasks {}:\n{}", describe(selector), table(entries))
            }
        }
    }
}

pub fn render_parse_error(err: &ParseError) -> String {
    format!("{}: {}", err.category(), err)
}
