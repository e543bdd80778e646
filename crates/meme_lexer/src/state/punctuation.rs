use crate::error::LexErrorKind;
use crate::scanner::Scanner;
use crate::state::{LexerTransition, State};

/// Lex a single bracket or comma.
pub(crate) fn execute(scanner: &mut Scanner<'_>) -> LexerTransition {
    let kind = scanner
        .cursor
        .read()
        .and_then(|ch| scanner.tables.punctuation(ch));

    match kind {
        Some(kind) => LexerTransition::emit(State::ScanText, scanner.emit(kind)),
        // Only reachable if the text state and the tables disagree.
        None => LexerTransition::goto(State::Error(LexErrorKind::SyntaxError)),
    }
}
