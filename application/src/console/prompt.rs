//! [`Prompt`] definitions.

use std::{
    fmt,
    io::{self, BufRead, Write},
    str::FromStr,
};

use common::{Date, Money};

/// Line-oriented prompt asking the operator for input until it is valid.
#[derive(Debug)]
pub struct Prompt<R, W> {
    /// Source of the operator's input.
    input: R,

    /// Destination of the prompts and messages.
    output: W,
}

impl<R, W> Prompt<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a new [`Prompt`] over the provided `input` and `output`.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints the provided `message` on its own line.
    ///
    /// # Errors
    ///
    /// If failed to write the `output`.
    pub fn say(&mut self, message: impl fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Prints the provided `label` and reads a trimmed line.
    ///
    /// # Errors
    ///
    /// If failed to read the `input` or write the `output`.
    /// [`io::ErrorKind::UnexpectedEof`] is returned once the `input` ends.
    pub fn line(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        Ok(line.trim().to_owned())
    }

    /// Reads a `T` value, repeating the `retry` message and the `label` until
    /// the input parses.
    ///
    /// # Errors
    ///
    /// See [`Prompt::line()`].
    pub fn parse<T: FromStr>(
        &mut self,
        label: &str,
        retry: &str,
    ) -> io::Result<T> {
        loop {
            if let Ok(val) = self.line(label)?.parse() {
                return Ok(val);
            }
            self.say(retry)?;
        }
    }

    /// Reads an optional `T` value. An empty line means [`None`].
    ///
    /// # Errors
    ///
    /// See [`Prompt::line()`].
    pub fn optional<T: FromStr>(
        &mut self,
        label: &str,
        retry: &str,
    ) -> io::Result<Option<T>> {
        loop {
            let line = self.line(label)?;
            if line.is_empty() {
                return Ok(None);
            }
            if let Ok(val) = line.parse() {
                return Ok(Some(val));
            }
            self.say(retry)?;
        }
    }

    /// Reads an integer.
    ///
    /// # Errors
    ///
    /// See [`Prompt::line()`].
    pub fn int<T: FromStr>(&mut self, label: &str) -> io::Result<T> {
        self.parse(label, "Invalid integer. Try again.")
    }

    /// Reads a [`Money`] amount.
    ///
    /// # Errors
    ///
    /// See [`Prompt::line()`].
    pub fn amount(&mut self, label: &str) -> io::Result<Money> {
        self.parse(label, "Invalid number. Try again.")
    }

    /// Reads a `YYYY-MM-DD` [`Date`].
    ///
    /// # Errors
    ///
    /// See [`Prompt::line()`].
    pub fn date(&mut self, label: &str) -> io::Result<Date> {
        self.parse(label, "Invalid date. Use yyyy-MM-dd.")
    }

    /// Reads a non-empty text, repeating the `retry` message and the `label`
    /// until it parses.
    ///
    /// # Errors
    ///
    /// See [`Prompt::line()`].
    pub fn text<T: FromStr>(
        &mut self,
        label: &str,
        retry: &str,
    ) -> io::Result<T> {
        loop {
            let line = self.line(label)?;
            if line.is_empty() {
                self.say("Input cannot be empty.")?;
                continue;
            }
            if let Ok(val) = line.parse() {
                return Ok(val);
            }
            self.say(retry)?;
        }
    }
}
