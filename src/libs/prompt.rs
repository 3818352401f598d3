//! Interactive console input.
//!
//! Commands collect their inputs through a [`Prompter`], which writes the
//! prompt to standard output and reads one line of standard input per
//! question. The reader is generic so tests can drive commands from an
//! in-memory buffer.
//!
//! Two read modes exist and the difference is observable behavior: a line
//! read keeps the whole answer, a token read keeps only the first
//! whitespace-delimited word and discards the rest of the line. An empty
//! answer (plain Enter, or end of input) yields an empty string in both
//! modes, which is what makes "press Enter to skip" work.

use crate::libs::messages::Message;
use std::io::{self, BufRead, StdinLock, Write};

pub struct Prompter<R> {
    reader: R,
}

impl Prompter<StdinLock<'static>> {
    /// Builds a prompter over the locked standard input.
    pub fn stdin() -> Self {
        Prompter::new(io::stdin().lock())
    }
}

impl<R: BufRead> Prompter<R> {
    pub fn new(reader: R) -> Self {
        Prompter { reader }
    }

    /// Asks for a whole line. Surrounding whitespace is trimmed, interior
    /// whitespace is preserved.
    pub fn read_line(&mut self, prompt: Message) -> io::Result<String> {
        let line = self.ask(prompt)?;

        Ok(line.trim().to_string())
    }

    /// Asks for a single token. The rest of the line is discarded.
    pub fn read_token(&mut self, prompt: Message) -> io::Result<String> {
        let line = self.ask(prompt)?;

        Ok(line.split_whitespace().next().unwrap_or_default().to_string())
    }

    /// Asks for a numeric id. A token that does not parse behaves as id 0,
    /// which no stored row ever carries.
    pub fn read_id(&mut self, prompt: Message) -> io::Result<i64> {
        let token = self.read_token(prompt)?;

        Ok(token.parse().unwrap_or(0))
    }

    /// Prints the prompt without a trailing newline and consumes one input
    /// line. End of input behaves like an empty line.
    fn ask(&mut self, prompt: Message) -> io::Result<String> {
        print!("{}: ", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;

        Ok(line)
    }
}
