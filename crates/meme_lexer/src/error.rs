//! Lexical errors.
use core::fmt;

use meme_span::Span;

/// The type of lexical error.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character that can't start any token.
    SyntaxError,
    /// The input ended inside a `/* ... */` comment.
    UnterminatedComment,
}

impl LexErrorKind {
    /// Return the fixed diagnostic message for the error.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::SyntaxError => "Syntax Error",
            Self::UnterminatedComment => "Unterminated multi-line comment",
        }
    }
}

/// A lexical error extracted from an error token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexError {
    /// The type of lexical error.
    pub kind: LexErrorKind,
    /// The offending span.
    pub span: Span,
    /// The line the offending span starts on.
    pub line: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.kind.message())
    }
}

impl core::error::Error for LexError {}
