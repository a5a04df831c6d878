//! Line-oriented operator console.
//!
//! Generic over the reader and writer so sessions can be driven from stdin and
//! stdout or from in-memory buffers in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::CliError;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `text` followed by a newline.
    pub fn say(&mut self, text: impl Display) -> Result<(), CliError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Show `prompt` on its own line and read one answer line.
    ///
    /// The line ending is stripped; other whitespace is kept. Returns
    /// [`CliError::InputClosed`] at end of input.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, CliError> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Ask until `check` accepts the answer, showing each rejection.
    pub fn prompt_until<T, E: Display>(
        &mut self,
        prompt: &str,
        mut check: impl FnMut(&str) -> Result<T, E>,
    ) -> Result<T, CliError> {
        loop {
            let answer = self.read_line(prompt)?;
            match check(&answer) {
                Ok(value) => return Ok(value),
                Err(rejection) => self.say(rejection)?,
            }
        }
    }

    /// Yes/no question; only `y`/`yes` (any case) count as yes.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, CliError> {
        let answer = self.read_line(prompt)?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
