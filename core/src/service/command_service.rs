use anyhow::Result;
use tracing::{debug, info};

use crate::model::command::Command;
use crate::model::task::Task;
use crate::repository::TaskRepository;
use crate::service::dto::{Response, TaskEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Exit,
    Reply(Response),
}

/// Runs parsed commands against a task repository.
pub struct CommandService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> CommandService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        let response = match command {
            Command::Exit => return Ok(Outcome::Exit),
            Command::List => Response::Listed {
                entries: TaskEntry::from_entities(self.repo.list()),
            },
            Command::Add { payload } => {
                let index = self.repo.add(Task::new(payload))?;
                let task = self.repo.get(index)?;
                info!(number = index.one_based(), "task added");
                Response::Added {
                    entry: TaskEntry::from_entity(index, task),
                    total: self.repo.len(),
                }
            }
            Command::Done { index } => {
                let task = self.repo.mark_done(index)?;
                info!(number = index.one_based(), "task marked done");
                Response::MarkedDone {
                    entry: TaskEntry::from_entity(index, task),
                }
            }
            Command::Delete { index } => {
                let task = self.repo.delete(index)?;
                info!(number = index.one_based(), "task deleted");
                Response::Deleted {
                    entry: TaskEntry::from_entity(index, &task),
                    remaining: self.repo.len(),
                }
            }
            Command::Find { keywords } => {
                let entries = TaskEntry::from_entities(self.repo.find(&keywords));
                debug!(%keywords, matches = entries.len(), "find");
                Response::Found { keywords, entries }
            }
            Command::Display { selector } => {
                let entries = TaskEntry::from_entities(self.repo.display(&selector));
                debug!(?selector, matches = entries.len(), "display");
                Response::Displayed { selector, entries }
            }
        };
        Ok(Outcome::Reply(response))
    }
}
