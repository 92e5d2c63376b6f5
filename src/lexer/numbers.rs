//! Numeric literal scanning.
//!
//! Int:   `-?(0|[1-9][0-9]*)`
//! Float: `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`
//!
//! The raw span text is the token value; conversion to a numeric value is
//! the parser's job. A leading `+` is not accepted.

use crate::error::SyntaxError;
use crate::source::Source;
use crate::token::{Token, TokenKind};

use super::helpers::printed;
use super::reader::Reader;

impl Reader<'_> {
    pub(super) fn read_number(&mut self, source: &Source) -> Result<Token, SyntaxError> {
        let start_byte = self.byte();
        let start = self.rune();
        let mut is_float = false;

        if self.current() == Some('-') {
            self.advance_ascii(1);
        }

        if self.current() == Some('0') {
            self.advance_ascii(1);
            if let Some(ch) = self.current()
                && ch.is_ascii_digit()
            {
                let message =
                    format!("Invalid number, unexpected digit after 0: {}.", printed(Some(ch)));
                return Err(SyntaxError::new(source, self.rune(), message));
            }
        } else {
            self.read_digits(source)?;
        }

        if self.current() == Some('.') {
            is_float = true;
            self.advance_ascii(1);
            self.read_digits(source)?;
        }

        if matches!(self.current(), Some('E' | 'e')) {
            is_float = true;
            self.advance_ascii(1);
            if matches!(self.current(), Some('+' | '-')) {
                self.advance_ascii(1);
            }
            self.read_digits(source)?;
        }

        let kind = if is_float { TokenKind::Float } else { TokenKind::Int };
        let value = String::from_utf8_lossy(self.slice(start_byte, self.byte())).into_owned();
        Ok(Token::new(kind, start, self.rune(), value))
    }

    /// Consumes a maximal run of at least one digit.
    fn read_digits(&mut self, source: &Source) -> Result<(), SyntaxError> {
        let first = self.current();
        if !first.is_some_and(|ch| ch.is_ascii_digit()) {
            let message = format!("Invalid number, expected digit but got: {}.", printed(first));
            return Err(SyntaxError::new(source, self.rune(), message));
        }
        while self.current().is_some_and(|ch| ch.is_ascii_digit()) {
            self.advance_ascii(1);
        }
        Ok(())
    }
}
