//! Single-line string scanning.
//!
//! Content between escapes is copied in raw chunks; only the escape
//! sequences themselves are decoded codepoint by codepoint. Multi-byte
//! UTF-8 passes through unchanged.

use crate::error::SyntaxError;
use crate::source::Source;
use crate::token::{Token, TokenKind};

use super::helpers::printed;
use super::reader::Reader;

impl Reader<'_> {
    /// Scans a string literal starting at the opening `"`. The emitted
    /// token spans from the opening quote to one past the closing quote;
    /// its value is the decoded content.
    pub(super) fn read_string(&mut self, source: &Source) -> Result<Token, SyntaxError> {
        let start = self.rune();
        self.advance_ascii(1); // opening quote
        let mut chunk_start = self.byte();
        let mut value = String::new();

        loop {
            match self.current() {
                None | Some('\n' | '\r') => {
                    return Err(SyntaxError::new(source, self.rune(), "Unterminated string."));
                }
                Some('"') => break,
                Some(ch) if (ch as u32) < 0x20 && ch != '\t' => {
                    let message =
                        format!("Invalid character within String: {}.", printed(Some(ch)));
                    return Err(SyntaxError::new(source, self.rune(), message));
                }
                Some('\\') => {
                    value.push_str(&String::from_utf8_lossy(
                        self.slice(chunk_start, self.byte()),
                    ));
                    self.advance_ascii(1); // backslash
                    self.read_escape(source, &mut value)?;
                    chunk_start = self.byte();
                }
                Some(_) => self.advance(),
            }
        }

        value.push_str(&String::from_utf8_lossy(
            self.slice(chunk_start, self.byte()),
        ));
        self.advance_ascii(1); // closing quote
        Ok(Token::new(TokenKind::String, start, self.rune(), value))
    }
}
