//! Block strings and the BlockStringValue normalization algorithm.
//!
//! A block string is delimited by `"""`. Raw LF, CR, and TAB are legal
//! content, `\"""` escapes a literal triple quote, and every other
//! backslash is kept verbatim. The raw body is normalized before the token
//! is emitted: common indentation is stripped and surrounding blank lines
//! are trimmed, per the GraphQL BlockStringValue() algorithm.

use crate::error::SyntaxError;
use crate::source::Source;
use crate::token::{Token, TokenKind};

use super::helpers::printed;
use super::reader::Reader;

impl Reader<'_> {
    /// Scans a block string starting at the opening `"""`. The emitted
    /// token spans from the first opening quote to one past the last
    /// closing quote; its value is the normalized body.
    pub(super) fn read_block_string(&mut self, source: &Source) -> Result<Token, SyntaxError> {
        let start = self.rune();
        self.advance_ascii(3); // opening """
        let mut chunk_start = self.byte();
        let mut raw = String::new();

        loop {
            let Some(ch) = self.current() else {
                return Err(SyntaxError::new(source, self.rune(), "Unterminated string."));
            };

            if ch == '"' && self.peek() == Some('"') && self.peek_n(2) == Some('"') {
                raw.push_str(&String::from_utf8_lossy(
                    self.slice(chunk_start, self.byte()),
                ));
                self.advance_ascii(3);
                let value = block_string_value(&raw);
                return Ok(Token::new(TokenKind::BlockString, start, self.rune(), value));
            }

            if (ch as u32) < 0x20 && !matches!(ch, '\t' | '\n' | '\r') {
                let message = format!("Invalid character within String: {}.", printed(Some(ch)));
                return Err(SyntaxError::new(source, self.rune(), message));
            }

            // \""" consumes four codepoints and contributes a literal """.
            if ch == '\\'
                && self.peek() == Some('"')
                && self.peek_n(2) == Some('"')
                && self.peek_n(3) == Some('"')
            {
                raw.push_str(&String::from_utf8_lossy(
                    self.slice(chunk_start, self.byte()),
                ));
                raw.push_str("\"\"\"");
                self.advance_ascii(4);
                chunk_start = self.byte();
                continue;
            }

            self.advance();
        }
    }
}

/// GraphQL `BlockStringValue()`: produces the value of a block string from
/// its raw body by removing common indentation and surrounding blank lines.
pub(super) fn block_string_value(raw: &str) -> String {
    let mut lines = split_lines(raw);

    // Minimum indentation over all lines but the first, ignoring lines that
    // are whitespace through to the end.
    let mut common_indent: Option<usize> = None;
    for line in lines.iter().skip(1) {
        let indent = leading_whitespace_len(line);
        if indent < line.chars().count() && common_indent.is_none_or(|min| indent < min) {
            common_indent = Some(indent);
            if indent == 0 {
                break;
            }
        }
    }
    if let Some(indent) = common_indent.filter(|&indent| indent > 0) {
        for line in &mut lines {
            if line.chars().count() >= indent {
                *line = skip_codepoints(line, indent);
            }
        }
    }

    let Some(first) = lines.iter().position(|line| !line_is_blank(line)) else {
        return String::new();
    };
    let last = lines
        .iter()
        .rposition(|line| !line_is_blank(line))
        .unwrap_or(first);
    lines[first..=last].join("\n")
}

/// Splits on `\r\n`, `\n`, or `\r`. Always yields at least one line.
fn split_lines(raw: &str) -> Vec<&str> {
    let bytes = raw.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                lines.push(&raw[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            b'\n' => {
                lines.push(&raw[start..i]);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&raw[start..]);
    lines
}

/// Count of leading SPACE/TAB codepoints.
fn leading_whitespace_len(line: &str) -> usize {
    line.chars().take_while(|&ch| ch == ' ' || ch == '\t').count()
}

/// A line is blank when its leading whitespace spans the whole line.
fn line_is_blank(line: &str) -> bool {
    line.chars().all(|ch| ch == ' ' || ch == '\t')
}

fn skip_codepoints(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((at, _)) => &line[at..],
        None => "",
    }
}
