use crate::error::LexErrorKind;
use crate::scanner::Scanner;
use crate::state::{LexerTransition, State};

/// Emit the end of input token.
pub(crate) fn execute_end(scanner: &mut Scanner<'_>) -> LexerTransition {
    match scanner.cursor.read() {
        None => LexerTransition::emit(State::Finished, scanner.emit_eof()),
        Some(_) => LexerTransition::goto(State::Error(LexErrorKind::SyntaxError)),
    }
}

/// Emit the error token and stop.
pub(crate) fn execute_error(scanner: &mut Scanner<'_>, kind: LexErrorKind) -> LexerTransition {
    LexerTransition::emit(State::Finished, scanner.emit_error(kind))
}
