//! Name and namespaced-name scanning.

use crate::token::{Token, TokenKind};

use super::helpers::is_name_continue;
use super::reader::Reader;

impl Reader<'_> {
    /// Scans `[_A-Za-z][_0-9A-Za-z.]*` starting at the current codepoint,
    /// which the dispatcher has already checked is a name start. A `.`
    /// anywhere in the run makes the token a namespaced reference (NS)
    /// instead of a plain name.
    ///
    /// Names are ASCII by construction, so byte and codepoint offsets move
    /// 1-for-1 through the token.
    pub(super) fn read_name(&mut self) -> Token {
        let start_byte = self.byte();
        let start = self.rune();
        let mut kind = TokenKind::Name;

        self.advance_ascii(1);
        while let Some(ch) = self.current() {
            if !is_name_continue(ch) {
                break;
            }
            if ch == '.' {
                kind = TokenKind::Ns;
            }
            self.advance_ascii(1);
        }

        let value = String::from_utf8_lossy(self.slice(start_byte, self.byte())).into_owned();
        Token::new(kind, start, self.rune(), value)
    }
}
