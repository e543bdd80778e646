use crate::scanner::Scanner;
use crate::state::{LexerTransition, State};

/// Check if the character separates tokens.
pub(crate) const fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n')
}

/// Consume a run of whitespace, counting newlines.
pub(crate) fn execute(scanner: &mut Scanner<'_>) -> LexerTransition {
    match scanner.cursor.read() {
        Some('\n') => {
            scanner.newline();
            LexerTransition::stay()
        }
        Some(ch) if is_whitespace(ch) => LexerTransition::stay(),
        _ => {
            scanner.cursor.backup();
            scanner.ignore();
            LexerTransition::goto(State::ScanText)
        }
    }
}
