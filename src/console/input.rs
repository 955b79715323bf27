//! Line input and the parse-and-retry prompts.

use super::{Console, ConsoleError, InputError};
use std::io::{BufRead, Write};

const INVALID_NUMBER: &str = "Invalid number. Try again: ";
const INVALID_PRICE: &str = "Invalid price. Try again: ₹";

/// Parses a whole number, ignoring surrounding whitespace.
pub fn parse_int(text: &str) -> Result<i32, InputError> {
    text.trim()
        .parse()
        .map_err(|_| InputError::InvalidNumber(text.to_string()))
}

/// Parses a finite, non-negative price, ignoring surrounding whitespace.
pub fn parse_price(text: &str) -> Result<f64, InputError> {
    match text.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(InputError::InvalidPrice(text.to_string())),
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Next line without its line terminator.
    pub(super) fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Reads lines until one parses with `parse`, printing `retry` after each miss.
    fn read_parsed<T>(
        &mut self,
        parse: fn(&str) -> Result<T, InputError>,
        retry: &str,
    ) -> Result<T, ConsoleError> {
        loop {
            let line = self.read_line()?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!(error = %e, "Rejected input");
                    self.prompt(retry)?;
                }
            }
        }
    }

    pub(super) fn read_int(&mut self) -> Result<i32, ConsoleError> {
        self.read_parsed(parse_int, INVALID_NUMBER)
    }

    pub(super) fn ask_int(&mut self, question: &str) -> Result<i32, ConsoleError> {
        self.prompt(question)?;
        self.read_int()
    }

    pub(super) fn ask_price(&mut self, question: &str) -> Result<f64, ConsoleError> {
        self.prompt(question)?;
        self.read_parsed(parse_price, INVALID_PRICE)
    }

    pub(super) fn ask_text(&mut self, question: &str) -> Result<String, ConsoleError> {
        self.prompt(question)?;
        self.read_line()
    }
}
