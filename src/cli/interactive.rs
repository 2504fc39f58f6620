//! Interactive confirmation on the controlling terminal.

use std::io::{self, BufRead, StdinLock, Write};

use console::style;

use crate::error::Result;
use crate::installer::{ConfirmPrompt, is_confirmation};

/// Reads a yes/no answer from `input`. The question goes to stderr so
/// JSON output on stdout stays clean.
pub struct InteractivePrompt<R> {
    input: R,
}

impl InteractivePrompt<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> InteractivePrompt<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> ConfirmPrompt for InteractivePrompt<R> {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        let mut stderr = io::stderr();
        write!(stderr, "{}", style(question).cyan())?;
        stderr.flush()?;

        // EOF reads as an empty answer, which declines
        let mut answer = String::new();
        self.input.read_line(&mut answer)?;

        Ok(is_confirmation(&answer))
    }
}
