extern crate alloc;

use crate::error::{LexError, LexErrorKind};
use alloc::sync::Arc;
use compact_str::CompactString;
use core::fmt;
use meme_span::Span;

/// The literal carried by end of input tokens.
pub const EOF_LITERAL: &str = "EOF";

/// The identity of the file a token was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRef {
    /// The file name.
    pub file_name: String,
    /// The path to the file.
    pub file_path: String,
}

/// A language token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token's type.
    pub kind: TokenKind,
    /// The lexeme for regular tokens, the end marker for EOF and the message for errors.
    pub literal: CompactString,
    /// The 0-based line the token starts on.
    pub line: usize,
    /// The span of the token in the text.
    pub span: Span,
    /// The file the token came from, if known.
    pub source: Option<Arc<SourceRef>>,
}

impl Token {
    /// The byte offset where the token starts.
    #[must_use]
    pub const fn column_start(&self) -> usize {
        self.span.start
    }

    /// The byte offset one past the end of the token.
    #[must_use]
    pub const fn column_end(&self) -> usize {
        self.span.end()
    }

    /// Check if the token is EOF.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Check if the token is an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error(_))
    }

    /// Check if the token ends a scan.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.is_eof() || self.is_error()
    }

    /// Return the structured error if this is an error token.
    #[must_use]
    pub const fn as_error(&self) -> Option<LexError> {
        match self.kind {
            TokenKind::Error(kind) => Some(LexError {
                kind,
                span: self.span,
                line: self.line,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MAX_CHARS: usize = 10;

        match self.kind {
            TokenKind::Eof => f.write_str(EOF_LITERAL),
            TokenKind::Error(kind) => f.write_str(kind.message()),
            _ => match self.literal.char_indices().nth(MAX_CHARS) {
                Some((cutoff, _)) => write!(f, "{:?}...", &self.literal.as_str()[..cutoff]),
                None => write!(f, "{:?}", self.literal.as_str()),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum TokenKind {
    /// A lexical error. Always the last token of a scan.
    Error(LexErrorKind),
    /// End of file.
    Eof,

    // Keywords
    /// The `concept` keyword.
    KeywordConcept,
    /// The `relation` keyword.
    KeywordRelation,
    /// The `required` keyword.
    KeywordRequired,
    /// The `optional` keyword.
    KeywordOptional,
    /// The `extends` keyword.
    KeywordExtends,

    /// Identifiers.
    Ident,

    // Base types
    /// The `integer` type.
    TypeInteger,
    /// The `string` type.
    TypeString,
    /// The `boolean` type.
    TypeBoolean,

    // Composite type constructors
    /// The `oneof` constructor.
    KeywordOneOf,
    /// The `anyof` constructor.
    KeywordAnyOf,

    // Parentheses
    /// Left parenthesis `(`.
    LeftParenthesis,
    /// Right parenthesis `)`.
    RightParenthesis,

    // Braces
    /// Left curly brace `{`.
    LeftBrace,
    /// Right curly brace `}`.
    RightBrace,

    // Square brackets
    /// Left square bracket `[`.
    LeftSquareBracket,
    /// Right square bracket `]`.
    RightSquareBracket,

    // Angle brackets
    /// Left angle bracket `<`.
    LeftAngleBracket,
    /// Right angle bracket `>`.
    RightAngleBracket,

    /// Comma `,`.
    Comma,

    // Comments
    /// A `// ...` comment running to the end of the line.
    LineComment,
    /// A `/* ... */` comment.
    BlockComment,
}

impl TokenKind {
    /// Return the token's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Error(_) => "ERROR",
            Self::Eof => "EOF",
            Self::KeywordConcept => "CONCEPT",
            Self::KeywordRelation => "RELATION",
            Self::KeywordRequired => "REQUIRED",
            Self::KeywordOptional => "OPTIONAL",
            Self::KeywordExtends => "EXTENDS",
            Self::Ident => "IDENTIFIER",
            Self::TypeInteger => "INTEGER",
            Self::TypeString => "STRING",
            Self::TypeBoolean => "BOOLEAN",
            Self::KeywordOneOf => "ONEOF",
            Self::KeywordAnyOf => "ANYOF",
            Self::LeftParenthesis => "LEFT_PAREN",
            Self::RightParenthesis => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::LeftSquareBracket => "LEFT_SQUARE_BRACE",
            Self::RightSquareBracket => "RIGHT_SQUARE_BRACE",
            Self::LeftAngleBracket => "LEFT_ANGLE_BRACE",
            Self::RightAngleBracket => "RIGHT_ANGLE_BRACE",
            Self::Comma => "COMMA",
            Self::LineComment => "SINGLE_LINE_COMMENT",
            Self::BlockComment => "MULTI_LINE_COMMENT",
        }
    }

    /// Check if the kind is one of the declaration keywords.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::KeywordConcept
                | Self::KeywordRelation
                | Self::KeywordRequired
                | Self::KeywordOptional
                | Self::KeywordExtends
        )
    }

    /// Check if the kind names a base type.
    #[must_use]
    pub const fn is_base_type(self) -> bool {
        matches!(self, Self::TypeInteger | Self::TypeString | Self::TypeBoolean)
    }

    /// Check if the kind is a composite type constructor.
    #[must_use]
    pub const fn is_composite_constructor(self) -> bool {
        matches!(self, Self::KeywordOneOf | Self::KeywordAnyOf)
    }

    /// Check if the kind is an opening or closing bracket of any shape.
    #[must_use]
    pub const fn is_bracket(self) -> bool {
        matches!(
            self,
            Self::LeftParenthesis
                | Self::RightParenthesis
                | Self::LeftBrace
                | Self::RightBrace
                | Self::LeftSquareBracket
                | Self::RightSquareBracket
                | Self::LeftAngleBracket
                | Self::RightAngleBracket
        )
    }

    /// Check if the kind is a comment.
    #[must_use]
    pub const fn is_comment(self) -> bool {
        matches!(self, Self::LineComment | Self::BlockComment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::{Token, TokenKind};
    use crate::error::LexErrorKind;
    use compact_str::CompactString;
    use meme_span::Span;

    fn token(kind: TokenKind, literal: &str) -> Token {
        Token {
            kind,
            literal: CompactString::new(literal),
            line: 0,
            span: Span::between(0, literal.len()),
            source: None,
        }
    }

    #[test]
    fn display_quotes_short_literals() {
        assert_eq!(token(TokenKind::Ident, "foo").to_string(), "\"foo\"");
    }

    #[test]
    fn display_truncates_long_literals() {
        let token = token(TokenKind::LineComment, "// a long comment");
        assert_eq!(token.to_string(), "\"// a long \"...");
    }

    #[test]
    fn display_special_tokens() {
        assert_eq!(token(TokenKind::Eof, "EOF").to_string(), "EOF");
        let error = token(
            TokenKind::Error(LexErrorKind::SyntaxError),
            LexErrorKind::SyntaxError.message(),
        );
        assert_eq!(error.to_string(), "Syntax Error");
    }

    #[test]
    fn as_error_only_for_errors() {
        assert!(token(TokenKind::Comma, ",").as_error().is_none());
        let error = token(TokenKind::Error(LexErrorKind::UnterminatedComment), "/*")
            .as_error()
            .expect("error tokens convert into errors.");
        assert_eq!(error.kind, LexErrorKind::UnterminatedComment);
        assert_eq!(error.span, Span::between(0, 2));
        assert_eq!(error.to_string(), "[line 0] Error: Unterminated multi-line comment");
    }
}
