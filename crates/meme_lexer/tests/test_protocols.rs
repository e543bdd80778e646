mod common;

use meme_lexer::{Lexer, SourceRef, State, TokenKind};

const SCHEMA: &str = "// People and what they own.
concept Person {
    required name [string]
    optional age [integer]
}

/* Ownership is a relation
   between two concepts. */
relation Owns<T> extends Relation {
    required owner [Person]
    required item [anyof(T, boolean)]
}
";

#[test]
fn eager_matches_incremental() {
    for code in [SCHEMA, "", "oneof", "(", "/* open", "a ~ b", "x\n\n// done"] {
        let tokens = common::lex(code);
        assert_eq!(
            tokens.iter().filter(|token| token.is_terminal()).count(),
            1,
            "{code:?}"
        );
        assert!(tokens.last().is_some_and(meme_lexer::Token::is_terminal));
    }
}

#[test]
fn free_function_matches_lexer() {
    assert_eq!(meme_lexer::tokenize(SCHEMA), Lexer::new(SCHEMA).tokenize());
}

#[test]
fn iterator_stops_early() {
    let mut lexer = Lexer::new(SCHEMA);
    let first: Vec<TokenKind> = lexer.by_ref().take(3).map(|token| token.kind).collect();
    assert_eq!(
        first,
        [
            TokenKind::LineComment,
            TokenKind::KeywordConcept,
            TokenKind::Ident
        ]
    );
    assert!(!lexer.state().is_terminal());
    let rest = lexer.count();
    assert_eq!(rest, common::lex(SCHEMA).len() - 3);
}

#[test]
fn lexer_ends_in_finished_state() {
    let mut lexer = Lexer::new("concept");
    while lexer.next_token().is_some() {}
    assert_eq!(lexer.state(), State::Finished);
}

#[test]
fn source_ref_is_attached() {
    let source = SourceRef {
        file_name: "people.meme".to_owned(),
        file_path: "/schemas/people.meme".to_owned(),
    };
    let tokens = Lexer::new("concept Person").with_source_ref(source.clone()).tokenize();
    assert_eq!(tokens.len(), 3);
    for token in &tokens {
        assert_eq!(token.source.as_deref(), Some(&source));
    }
    assert!(Lexer::new("concept").tokenize()[0].source.is_none());
}

#[test]
fn lexeme_recovers_source_text() {
    let lexer = Lexer::new(SCHEMA);
    for token in Lexer::new(SCHEMA) {
        let lexeme = lexer.lexeme(&token).expect("token spans are valid.");
        if token.is_eof() {
            assert_eq!(lexeme, "");
        } else {
            assert_eq!(lexeme, token.literal.as_str());
        }
    }
}
