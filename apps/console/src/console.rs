//! # Console Stream
//!
//! Line-oriented terminal I/O shared by every role session.
//!
//! ```text
//! ┌───────────────┐   prompt()        ┌─────────────────┐
//! │ Role session  │ ────────────────► │  TextConsole    │ ◄── stdin (BufRead)
//! │               │   say() / show()  │                 │ ──► stdout
//! │               │   warn()          │                 │ ──► stderr
//! └───────────────┘                   └─────────────────┘
//! ```
//!
//! A prompt is written without a newline and flushed, then one whole line
//! is read. End of input surfaces as [`ConsoleError::Closed`].

use std::io::{BufRead, Write};

use crate::error::{ConsoleError, ConsoleResult};

/// Interactive surface a role session talks through.
pub trait Console {
    /// Prints `label` and reads one line, trimmed of surrounding whitespace.
    fn prompt(&mut self, label: &str) -> ConsoleResult<String>;

    /// Prints one line to standard output.
    fn say(&mut self, line: &str) -> ConsoleResult<()>;

    /// Prints a pre-rendered block (menus, listings) to standard output.
    fn show(&mut self, block: &str) -> ConsoleResult<()>;

    /// Prints one line to the error stream.
    fn warn(&mut self, line: &str) -> ConsoleResult<()>;

    /// Prompts for an integer. `None` when the line does not parse.
    fn prompt_number(&mut self, label: &str) -> ConsoleResult<Option<i64>> {
        let line = self.prompt(label)?;
        Ok(line.parse::<i64>().ok())
    }
}

/// [`Console`] over any reader and pair of writers.
pub struct TextConsole<R, W, E> {
    input: R,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> TextConsole<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        TextConsole { input, out, err }
    }

    pub fn out(&self) -> &W {
        &self.out
    }

    pub fn err(&self) -> &E {
        &self.err
    }
}

impl<R: BufRead, W: Write, E: Write> Console for TextConsole<R, W, E> {
    fn prompt(&mut self, label: &str) -> ConsoleResult<String> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, line: &str) -> ConsoleResult<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn show(&mut self, block: &str) -> ConsoleResult<()> {
        write!(self.out, "{}", block)?;
        if !block.ends_with('\n') {
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn warn(&mut self, line: &str) -> ConsoleResult<()> {
        self.out.flush()?;
        writeln!(self.err, "{}", line)?;
        self.err.flush()?;
        Ok(())
    }
}
