//! Lexer diagnostics.

use std::error::Error as StdError;
use std::fmt;

use crate::source::Source;

/// A lexical fault at a codepoint offset in a source document.
///
/// `position` counts Unicode scalar values from the start of the body, so a
/// line/column converter can be applied uniformly downstream. Messages are
/// stable strings the parser surfaces verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    source: Source,
    position: usize,
    message: String,
}

impl SyntaxError {
    pub(crate) fn new(source: &Source, position: usize, message: impl Into<String>) -> Self {
        Self {
            source: source.clone(),
            position,
            message: message.into(),
        }
    }

    /// The document the fault occurred in.
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Codepoint offset of the fault.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.source.name(),
            self.position,
            self.message
        )
    }
}

impl StdError for SyntaxError {}
