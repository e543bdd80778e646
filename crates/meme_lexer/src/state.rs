mod comment;
mod end;
mod ident;
mod punctuation;
mod text;
mod whitespace;

use crate::error::LexErrorKind;
use crate::scanner::Scanner;
use crate::token::Token;

/// Represents a state transition in the lexer.
pub(crate) struct LexerTransition {
    /// The new state to transition to unless it is `None` then no state change will take place.
    pub(crate) new_state: Option<State>,
    /// A token if one was lexed.
    pub(crate) token: Option<Token>,
}

impl LexerTransition {
    /// Keep scanning in the current state.
    pub(crate) const fn stay() -> Self {
        Self {
            new_state: None,
            token: None,
        }
    }

    /// Move to another state without emitting anything.
    pub(crate) const fn goto(state: State) -> Self {
        Self {
            new_state: Some(state),
            token: None,
        }
    }

    /// Emit a token and move to another state.
    pub(crate) fn emit(state: State, token: Token) -> Self {
        Self {
            new_state: Some(state),
            token: Some(token),
        }
    }
}

/// The state of the lexer.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum State {
    /// The state before anything has been read.
    Start,
    /// The state between tokens, picking what to scan next.
    ScanText,
    /// The state when consuming whitespace.
    SkipWhitespace,
    /// The state when lexing identifiers or keywords.
    ScanIdentifierOrKeyword,
    /// The state before a bracket or comma.
    ScanPunctuation,
    /// The state after seeing a double slash.
    ScanLineComment,
    /// The state after seeing `/*`.
    ScanBlockComment,
    /// The state before the end of the input.
    ScanEnd,
    /// The state that reports an error and stops lexing.
    Error(LexErrorKind),
    /// The state when lexing is finished.
    Finished,
}

impl State {
    /// Check if the state has no successor.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Finished)
    }

    pub(crate) fn execute(self, scanner: &mut Scanner<'_>) -> LexerTransition {
        match self {
            Self::Start => {
                scanner.reset();
                LexerTransition::goto(Self::ScanText)
            }
            Self::ScanText => text::execute(scanner),
            Self::SkipWhitespace => whitespace::execute(scanner),
            Self::ScanIdentifierOrKeyword => ident::execute(scanner),
            Self::ScanPunctuation => punctuation::execute(scanner),
            Self::ScanLineComment => comment::execute_line(scanner),
            Self::ScanBlockComment => comment::execute_block(scanner),
            Self::ScanEnd => end::execute_end(scanner),
            Self::Error(kind) => end::execute_error(scanner, kind),
            Self::Finished => LexerTransition::stay(),
        }
    }
}
