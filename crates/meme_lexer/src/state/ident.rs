use crate::scanner::Scanner;
use crate::state::{LexerTransition, State};
use crate::token::TokenKind;

/// Consume an identifier and classify it once the run ends.
pub(crate) fn execute(scanner: &mut Scanner<'_>) -> LexerTransition {
    match scanner.cursor.read() {
        Some(ch) if ch.is_ascii_alphanumeric() || ch == '_' => LexerTransition::stay(),
        _ => {
            scanner.cursor.backup();
            let kind = scanner
                .tables
                .word(scanner.cursor.window_text())
                .unwrap_or(TokenKind::Ident);
            LexerTransition::emit(State::ScanText, scanner.emit(kind))
        }
    }
}
