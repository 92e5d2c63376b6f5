//! The Apex lexer: turns a source document into a token stream.
//!
//! One token is produced per [`Lexer::next_token`] call. All positions in
//! emitted tokens and errors are codepoint offsets; the byte offsets needed
//! for slicing raw spans are carried alongside internally and never exposed.

mod block_strings;
mod escape;
mod helpers;
mod identifiers;
mod numbers;
mod reader;
mod strings;

use crate::error::SyntaxError;
use crate::source::Source;
use crate::token::{Token, TokenKind};

use helpers::{is_name_start, printed};
use reader::{Reader, scan_position};

/// Cursor over a source document.
///
/// Holds the resume position between calls: each successful `next_token`
/// continues from the end of the token it returned. Not meant to be shared;
/// each parse owns its own cursor, while the underlying [`Source`] may back
/// many of them.
#[derive(Debug)]
pub struct Lexer {
    source: Source,
    prev_byte: usize,
    prev_rune: usize,
}

impl Lexer {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            prev_byte: 0,
            prev_rune: 0,
        }
    }

    /// Reads the next token from the end of the previously emitted one.
    /// At end of input an EOF token is emitted at the final position,
    /// idempotently.
    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        self.next_from(0)
    }

    /// Reads the next token, restarting at codepoint offset `resume` when it
    /// is non-zero. Zero is the continue sentinel parsers rely on: it means
    /// "from the end of the previous token", exactly like [`Self::next_token`].
    ///
    /// A non-zero resume pays one forward walk over the buffer to recover
    /// the matching byte offset; it is the cold backtracking path.
    pub fn next_from(&mut self, resume: usize) -> Result<Token, SyntaxError> {
        let (byte, rune) = if resume == 0 || resume == self.prev_rune {
            (self.prev_byte, self.prev_rune)
        } else {
            scan_position(self.source.body(), resume)
        };

        let mut reader = Reader::new(self.source.body(), byte, rune);
        let token = read_token(&self.source, &mut reader)?;
        self.prev_byte = reader.byte();
        self.prev_rune = token.end;
        Ok(token)
    }

    /// Drains the cursor into a vector ending with the EOF token, or the
    /// first lexical fault.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, SyntaxError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }
}

impl Reader<'_> {
    /// Advances past ignored content: BOM, whitespace, line terminators,
    /// commas, and `#` comments (which run to the next LF/CR or end of
    /// input).
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.current() {
            match ch {
                '\u{FEFF}' | '\t' | ' ' | '\n' | '\r' | ',' => self.advance(),
                '#' => {
                    self.advance();
                    while let Some(ch) = self.current() {
                        if ch == '\n' || ch == '\r' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }
}

/// Reads one token starting at the reader's position, leaving the reader at
/// the token's end.
fn read_token(source: &Source, reader: &mut Reader<'_>) -> Result<Token, SyntaxError> {
    reader.skip_ignored();

    let start = reader.rune();
    let Some(ch) = reader.current() else {
        return Ok(Token::new(TokenKind::Eof, start, start, ""));
    };

    if (ch as u32) < 0x20 && !matches!(ch, '\t' | '\n' | '\r') {
        let message = format!("Invalid character {}", printed(Some(ch)));
        return Err(SyntaxError::new(source, start, message));
    }

    let punctuation = match ch {
        '!' => Some(TokenKind::Bang),
        '?' => Some(TokenKind::Question),
        '$' => Some(TokenKind::Dollar),
        '&' => Some(TokenKind::Amp),
        '(' => Some(TokenKind::ParenL),
        ')' => Some(TokenKind::ParenR),
        '*' => Some(TokenKind::Star),
        ':' => Some(TokenKind::Colon),
        '=' => Some(TokenKind::Equals),
        '@' => Some(TokenKind::At),
        '[' => Some(TokenKind::BracketL),
        ']' => Some(TokenKind::BracketR),
        '{' => Some(TokenKind::BraceL),
        '|' => Some(TokenKind::Pipe),
        '}' => Some(TokenKind::BraceR),
        _ => None,
    };
    if let Some(kind) = punctuation {
        reader.advance_ascii(1);
        return Ok(Token::new(kind, start, start + 1, ""));
    }

    match ch {
        '.' => {
            if reader.peek() == Some('.') && reader.peek_n(2) == Some('.') {
                reader.advance_ascii(3);
                return Ok(Token::new(TokenKind::Spread, start, start + 3, ""));
            }
        }
        '"' => {
            if reader.peek() == Some('"') && reader.peek_n(2) == Some('"') {
                return reader.read_block_string(source);
            }
            return reader.read_string(source);
        }
        '-' | '0'..='9' => return reader.read_number(source),
        ch if is_name_start(ch) => return Ok(reader.read_name()),
        _ => {}
    }

    let message = format!("Unexpected character {}.", printed(Some(ch)));
    Err(SyntaxError::new(source, start, message))
}
