use crate::error::LexErrorKind;
use crate::scanner::Scanner;
use crate::state::whitespace::is_whitespace;
use crate::state::{LexerTransition, State};

/// Pick the state for the next token from its first character.
pub(crate) fn execute(scanner: &mut Scanner<'_>) -> LexerTransition {
    let Some(ch) = scanner.cursor.read() else {
        // EOF
        scanner.cursor.backup();
        return LexerTransition::goto(State::ScanEnd);
    };

    if is_whitespace(ch) {
        scanner.cursor.backup();
        LexerTransition::goto(State::SkipWhitespace)
    } else if ch.is_ascii_alphabetic() {
        scanner.cursor.backup();
        LexerTransition::goto(State::ScanIdentifierOrKeyword)
    } else if scanner.tables.is_punctuation(ch) {
        scanner.cursor.backup();
        LexerTransition::goto(State::ScanPunctuation)
    } else if ch == '/' {
        match scanner.cursor.read() {
            Some('/') => LexerTransition::goto(State::ScanLineComment),
            Some('*') => LexerTransition::goto(State::ScanBlockComment),
            _ => LexerTransition::goto(State::Error(LexErrorKind::SyntaxError)),
        }
    } else {
        LexerTransition::goto(State::Error(LexErrorKind::SyntaxError))
    }
}
