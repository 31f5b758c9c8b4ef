mod logging;
mod render;
mod repl;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use duequest_core::{parse, CommandService, TaskList};

use crate::render::render_parse_error;

#[derive(Parser)]
#[command(name = "duequest")]
#[command(about = "A task tracker driven by one-line commands", long_about = None)]
struct Cli {
    /// Log parser and executor activity to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Interactive prompt (default)
    Repl,
    /// Parse one line and print the resulting command as JSON
    Parse {
        /// The command line, e.g. deadline submit report /by 2-12-2024
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        line: Vec<String>,
    },
    /// Parse and execute one line against an empty list
    Run {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        line: Vec<String>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let mut service = CommandService::new(TaskList::new());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Repl) | None => {
            let stdin = io::stdin();
            repl::run(&mut service, stdin.lock(), &mut out)?;
        }
        Some(Commands::Parse { line }) => match parse(&line.join(" ")) {
            Ok(command) => {
                serde_json::to_writer_pretty(&mut out, &command)?;
                writeln!(out)?;
            }
            Err(err) => {
                eprintln!("{}", render_parse_error(&err));
                return Ok(ExitCode::FAILURE);
            }
        },
        Some(Commands::Run { line }) => {
            repl::handle_line(&mut service, &line.join(" "), &mut out)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
