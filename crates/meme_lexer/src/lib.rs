//! Lexer for the meme schema description language.
mod error;
mod lexer;
mod scanner;
mod source;
mod state;
mod tables;
pub mod token;

pub use error::{LexError, LexErrorKind};
pub use lexer::Lexer;
pub use meme_span::Span;
pub use source::SourceCursor;
pub use state::State;
pub use tables::ClassificationTables;
pub use token::{SourceRef, Token, TokenKind};

/// Lex a whole source text.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}
