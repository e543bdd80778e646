use meme_lexer::{Lexer, Token, TokenKind};

/// Lex the source with both the eager and the incremental protocol.
///
/// # Panics
/// When the two protocols disagree.
#[expect(
    clippy::allow_attributes,
    reason = "clippy/rust-analzyer is confused with the test organisation."
)]
#[allow(unreachable_pub, dead_code, reason = "used by each test file.")]
pub fn lex(code: &str) -> Vec<Token> {
    let eager = Lexer::new(code).tokenize();

    let mut lexer = Lexer::new(code);
    let mut incremental = Vec::new();
    while let Some(token) = lexer.next_token() {
        incremental.push(token);
    }
    assert!(lexer.next_token().is_none(), "lexer resumed after finishing.");

    assert_eq!(eager, incremental, "protocols disagree.");
    eager
}

/// Lex the source checking the kinds and literals of every token.
///
/// Every token except the last must be the exact source text it spans.
///
/// # Panics
/// When the expected and actual tokens differ.
#[expect(
    clippy::allow_attributes,
    reason = "clippy/rust-analzyer is confused with the test organisation."
)]
#[allow(unreachable_pub, dead_code, reason = "used by each test file.")]
pub fn check(code: &str, expected: &[(TokenKind, &str)]) {
    let tokens = lex(code);
    let actual: Vec<(TokenKind, &str)> = tokens
        .iter()
        .map(|token| (token.kind, token.literal.as_str()))
        .collect();
    assert_eq!(expected, actual.as_slice(), "check failed.");

    for token in tokens.iter().filter(|token| !token.is_terminal()) {
        assert_eq!(
            &code[token.span.range()],
            token.literal.as_str(),
            "literal is not the source text."
        );
        assert!(token.column_start() <= token.column_end());
    }
}
