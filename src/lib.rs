//! Lexical analysis for the Apex interface-definition language.
//!
//! The lexer turns a UTF-8 source document into a stream of [`Token`]s with
//! codepoint-accurate positions. Keywords are not distinguished here; the
//! parser compares NAME values against [`token::KEYWORDS`].

pub mod error;
pub mod lexer;
pub mod source;
pub mod token;

pub use error::SyntaxError;
pub use lexer::Lexer;
pub use source::Source;
pub use token::{Token, TokenKind};
