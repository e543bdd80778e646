use crate::scanner::Scanner;
use crate::state::{LexerTransition, State};
use crate::tables::ClassificationTables;
use crate::token::{SourceRef, Token};
use core::fmt;
use core::iter::FusedIterator;

/// A resumable lexer over a schema source text.
///
/// Each call to [`Lexer::next_token`] runs the state machine just far enough to produce one
/// token. [`Lexer::tokenize`] drives it to the end in one go. Both produce the same tokens.
#[derive(Debug)]
pub struct Lexer<'src> {
    /// The scanning state.
    scanner: Scanner<'src>,
    /// The lexer state.
    state: State,
}

impl<'src> Lexer<'src> {
    /// Create a lexer.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::with_tables(source, ClassificationTables::get())
    }

    /// Create a lexer that classifies words and punctuation with the given tables.
    pub(crate) fn with_tables(source: &'src str, tables: &'static ClassificationTables) -> Self {
        Self {
            scanner: Scanner::new(source, tables),
            state: State::Start,
        }
    }

    /// Attach a file identity to every token this lexer produces.
    #[must_use]
    pub fn with_source_ref(mut self, source: SourceRef) -> Self {
        self.scanner.set_source(source);
        self
    }

    /// Lex the next token.
    ///
    /// Returns `None` once the end of input or error token has been handed out.
    pub fn next_token(&mut self) -> Option<Token> {
        while !self.state.is_terminal() {
            let LexerTransition { new_state, token } = self.state.execute(&mut self.scanner);

            // Change state
            if let Some(new_state) = new_state {
                tracing::trace!("{:?} -> {new_state:?}", self.state);
                self.state = new_state;
            }

            if let Some(token) = token {
                return Some(token);
            }
        }
        None
    }

    /// Lex the rest of the source.
    ///
    /// The last token is always either the end of input token or a single error token.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        self.by_ref().collect()
    }

    /// Return the current state of the state machine.
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Return the source text.
    #[must_use]
    pub const fn get_source(&self) -> &'src str {
        self.scanner.get_text()
    }

    /// Return the source text a token was scanned from.
    ///
    /// This is the offending text for error tokens and empty for the end of input.
    #[must_use]
    pub fn lexeme(&self, token: &Token) -> Option<&'src str> {
        self.scanner.get_lexeme(&token.span)
    }

    /// Dump a token as a single line.
    ///
    /// # Errors
    /// This function will only error if writes into the buffer error.
    pub fn dump_token(&self, buffer: &mut impl fmt::Write, token: &Token) -> Result<(), fmt::Error> {
        if let Some(error) = token.as_error() {
            let lexeme = self.lexeme(token).unwrap_or_default();
            return write!(buffer, "{error} at {lexeme:?}");
        }
        write!(
            buffer,
            "{}:{}-{} {} {token}",
            token.line,
            token.column_start(),
            token.column_end(),
            token.kind.name()
        )
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl FusedIterator for Lexer<'_> {}
