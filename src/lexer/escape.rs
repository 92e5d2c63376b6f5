//! Escape sequence decoding for single-line strings.

use crate::error::SyntaxError;
use crate::source::Source;

use super::reader::Reader;

impl Reader<'_> {
    /// Decodes the escape following an already-consumed backslash, pushing
    /// the produced character onto `value` and leaving the reader just past
    /// the escape. Faults are positioned at the escape character.
    pub(super) fn read_escape(
        &mut self,
        source: &Source,
        value: &mut String,
    ) -> Result<(), SyntaxError> {
        let position = self.rune();
        let decoded = match self.current() {
            Some('"') => '"',
            Some('/') => '/',
            Some('\\') => '\\',
            Some('b') => '\u{0008}',
            Some('f') => '\u{000C}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('u') => {
                let after_u = self.byte() + 1;
                let body_len = self.body_len();
                if body_len < after_u + 4 {
                    let rest = self.slice(after_u.min(body_len), body_len);
                    let message = format!(
                        "Invalid character escape sequence: \\u{}",
                        String::from_utf8_lossy(rest)
                    );
                    return Err(SyntaxError::new(source, position, message));
                }
                let digits = self.slice(after_u, after_u + 4);
                let Some(code) = hex4(digits) else {
                    let message = format!(
                        "Invalid character escape sequence: \\u{}",
                        String::from_utf8_lossy(digits)
                    );
                    return Err(SyntaxError::new(source, position, message));
                };
                // Surrogate halves have no scalar value; substitute U+FFFD.
                value.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
                self.advance_ascii(5); // 'u' and four hex digits
                return Ok(());
            }
            other => {
                let shown = other.unwrap_or(char::REPLACEMENT_CHARACTER);
                let message = format!("Invalid character escape sequence: \\{shown}.");
                return Err(SyntaxError::new(source, position, message));
            }
        };
        value.push(decoded);
        self.advance_ascii(1);
        Ok(())
    }
}

/// Four hex digits to their scalar value; `None` on any non-hex byte.
fn hex4(digits: &[u8]) -> Option<u32> {
    digits.iter().try_fold(0u32, |acc, &b| {
        let digit = (b as char).to_digit(16)?;
        Some(acc << 4 | digit)
    })
}
