use std::io::{BufRead, Write};

use anyhow::Result;
use duequest_core::{parse, CommandService, Outcome, StoreError, TaskRepository};
use tracing::warn;

use crate::render::{render_parse_error, render_response};

const PROMPT: &str = "> ";
const GREETING: &str = "Hello! What can I do for you?";
const FAREWELL: &str = "Bye. Hope to see you again soon!";

/// Reads commands line by line until `bye` or end of input.
pub fn run<R, I, W>(service: &mut CommandService<R>, input: I, output: &mut W) -> Result<()>
where
    R: TaskRepository,
    I: BufRead,
    W: Write,
{
    writeln!(output, "{}", GREETING)?;
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
            continue;
        }

        if let Step::Stop = handle_line(service, &line, output)? {
            return Ok(());
        }
        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    writeln!(output)?;
    writeln!(output, "{}", FAREWELL)?;
    Ok(())
}

pub enum Step {
    Continue,
    Stop,
}

/// Parses and executes one line, writing the reply. Parse and lookup
/// failures are reported to the user; only I/O errors propagate.
pub fn handle_line<R, W>(service: &mut CommandService<R>, line: &str, output: &mut W) -> Result<Step>
where
    R: TaskRepository,
    W: Write,
{
    let command = match parse(line) {
        Ok(command) => command,
        Err(err) => {
            writeln!(output, "{}", render_parse_error(&err))?;
            return Ok(Step::Continue);
        }
    };

    match service.execute(command) {
        Ok(Outcome::Exit) => {
            writeln!(output, "{}", FAREWELL)?;
            Ok(Step::Stop)
        }
        Ok(Outcome::Reply(response)) => {
            writeln!(output, "{}", render_response(&response))?;
            Ok(Step::Continue)
        }
        Err(err) => match err.downcast_ref::<StoreError>() {
            Some(store_err) => {
                writeln!(output, "Task number: {}", store_err)?;
                Ok(Step::Continue)
            }
            None => {
                warn!(error = %err, "command failed");
                Err(err)
            }
        },
    }
}
