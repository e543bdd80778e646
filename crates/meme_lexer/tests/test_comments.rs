mod common;

use common::check;
use meme_lexer::{LexErrorKind, TokenKind};

#[test]
fn line_comment_at_eof() {
    check(
        "concept // trailing",
        &[
            (TokenKind::KeywordConcept, "concept"),
            (TokenKind::LineComment, "// trailing"),
            (TokenKind::Eof, "EOF"),
        ],
    );
}

#[test]
fn line_comment_stops_at_newline() {
    let tokens = common::lex("// first\nconcept");
    assert_eq!(tokens[0].kind, TokenKind::LineComment);
    assert_eq!(tokens[0].literal.as_str(), "// first");
    assert_eq!(tokens[0].line, 0);
    assert_eq!(tokens[1].kind, TokenKind::KeywordConcept);
    assert_eq!(tokens[1].line, 1);
}

#[test]
fn only_line_comment() {
    check("//", &[(TokenKind::LineComment, "//"), (TokenKind::Eof, "EOF")]);
}

#[test]
fn block_comment() {
    check(
        "a /* b, c */ d",
        &[
            (TokenKind::Ident, "a"),
            (TokenKind::BlockComment, "/* b, c */"),
            (TokenKind::Ident, "d"),
            (TokenKind::Eof, "EOF"),
        ],
    );
}

#[test]
fn block_comment_with_stars() {
    check(
        "/**/ /***/ /* * / **/",
        &[
            (TokenKind::BlockComment, "/**/"),
            (TokenKind::BlockComment, "/***/"),
            (TokenKind::BlockComment, "/* * / **/"),
            (TokenKind::Eof, "EOF"),
        ],
    );
}

#[test]
fn block_comment_counts_lines() {
    let tokens = common::lex("/* one\ntwo\n*/ concept");
    assert_eq!(tokens[0].kind, TokenKind::BlockComment);
    assert_eq!(tokens[0].line, 0);
    assert_eq!(tokens[1].kind, TokenKind::KeywordConcept);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn comments_are_trivia() {
    let tokens = common::lex("// line\nconcept /* block */ Foo");
    let comments: Vec<TokenKind> = tokens
        .iter()
        .map(|token| token.kind)
        .filter(|kind| kind.is_comment())
        .collect();
    assert_eq!(comments, [TokenKind::LineComment, TokenKind::BlockComment]);
    assert!(!TokenKind::Ident.is_comment());
}

#[test]
fn unicode_in_comments() {
    check(
        "// Emoji: ☃☺♣\n/* ĐĦŋœ */",
        &[
            (TokenKind::LineComment, "// Emoji: ☃☺♣"),
            (TokenKind::BlockComment, "/* ĐĦŋœ */"),
            (TokenKind::Eof, "EOF"),
        ],
    );
}

#[test]
fn unterminated_block_comment() {
    let tokens = common::lex("concept Foo /* never closed\n");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::KeywordConcept);
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    let error = tokens[2]
        .as_error()
        .expect("unterminated comments produce an error.");
    assert_eq!(error.kind, LexErrorKind::UnterminatedComment);
    assert_eq!(error.span.range(), 12..28);
    assert!(tokens.iter().all(|token| !token.is_eof()));
}

#[test]
fn unterminated_block_comment_alone() {
    let tokens = common::lex("/*");
    assert_eq!(tokens.len(), 1);
    assert_eq!(
        tokens[0].kind,
        TokenKind::Error(LexErrorKind::UnterminatedComment)
    );
    assert_eq!(tokens[0].literal.as_str(), "Unterminated multi-line comment");
}

#[test]
fn block_comment_closing_star_at_eof() {
    let tokens = common::lex("/* *");
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_error());
}
