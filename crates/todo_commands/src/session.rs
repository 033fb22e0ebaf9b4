// crates/todo_commands/src/session.rs

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use extract_todos::Todo;
use render_todo_table::render_todos;

use crate::{parse_command, Outcome};

/// Printed once before the first command is read.
pub const PROMPT: &str = "Please, write your command!";

/// Printed for an unknown verb or malformed arguments.
pub const WRONG_COMMAND: &str = "wrong command";

/// Reads commands from `input` line by line and writes each response to
/// `output` until `exit` or end of input.
pub fn run_session<R: BufRead, W: Write>(todos: &[Todo], input: R, output: &mut W) -> Result<()> {
    writeln!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line.context("Error reading command from input")?;
        let command = parse_command(&line);
        log::debug!("'{}' parsed as {:?}", line.trim(), command);

        match command.execute(todos) {
            Outcome::Exit => return Ok(()),
            Outcome::Table(view) => {
                log::debug!("showing {} of {} todo(s)", view.len(), todos.len());
                render_todos(&view, output).context("Error writing table")?;
            }
            Outcome::WrongCommand => writeln!(output, "{}", WRONG_COMMAND)?,
        }
        output.flush()?;
    }

    log::debug!("end of input");
    Ok(())
}
