use crate::error::LexErrorKind;
use crate::scanner::Scanner;
use crate::state::{LexerTransition, State};
use crate::token::TokenKind;

/// Consume a `//` comment up to, but not including, the end of the line.
pub(crate) fn execute_line(scanner: &mut Scanner<'_>) -> LexerTransition {
    match scanner.cursor.read() {
        None | Some('\n') => {
            scanner.cursor.backup();
            LexerTransition::emit(State::ScanText, scanner.emit(TokenKind::LineComment))
        }
        Some(_) => LexerTransition::stay(),
    }
}

/// Consume a `/* */` comment including its closing delimiter.
pub(crate) fn execute_block(scanner: &mut Scanner<'_>) -> LexerTransition {
    match scanner.cursor.read() {
        None => LexerTransition::goto(State::Error(LexErrorKind::UnterminatedComment)),
        Some('*') if scanner.cursor.peek() == Some('/') => {
            scanner.cursor.read();
            LexerTransition::emit(State::ScanText, scanner.emit(TokenKind::BlockComment))
        }
        Some('\n') => {
            scanner.newline();
            LexerTransition::stay()
        }
        Some(_) => LexerTransition::stay(),
    }
}
