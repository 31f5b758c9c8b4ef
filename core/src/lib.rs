pub mod error;
pub mod input;
pub mod model;
pub mod parser;
pub mod repository;
pub mod service;
pub mod time;

pub use error::{ParseError, ParseResult, StoreError, StoreResult};
pub use model::command::{Command, DisplaySelector, TaskIndex};
pub use model::task::{Deadline, Event, Frequency, Lesson, Task, TaskKind, ToDo};
pub use parser::parse;
pub use repository::{TaskList, TaskRepository};
pub use service::command_service::{CommandService, Outcome};
pub use service::dto::{Response, TaskEntry};
pub use time::canonicalize_date;
