extern crate alloc;

use crate::error::LexErrorKind;
use crate::source::SourceCursor;
use crate::tables::ClassificationTables;
use crate::token::{EOF_LITERAL, SourceRef, Token, TokenKind};
use alloc::sync::Arc;
use compact_str::CompactString;
use meme_span::Span;

/// The mutable scanning state shared by every state of the machine.
#[derive(Debug)]
pub(crate) struct Scanner<'src> {
    /// The read cursor.
    pub(crate) cursor: SourceCursor<'src>,
    /// The current 0-based line.
    line: usize,
    /// The line the pending window started on.
    window_line: usize,
    /// The lookup tables for words and punctuation.
    pub(crate) tables: &'static ClassificationTables,
    /// The file attached to every emitted token.
    source: Option<Arc<SourceRef>>,
}

impl<'src> Scanner<'src> {
    pub(crate) fn new(text: &'src str, tables: &'static ClassificationTables) -> Self {
        Self {
            cursor: SourceCursor::new(text),
            line: 0,
            window_line: 0,
            tables,
            source: None,
        }
    }

    pub(crate) fn set_source(&mut self, source: SourceRef) {
        self.source = Some(Arc::new(source));
    }

    /// Rewind to the start of the text.
    pub(crate) const fn reset(&mut self) {
        self.cursor.reset();
        self.line = 0;
        self.window_line = 0;
    }

    /// Record a consumed newline.
    pub(crate) const fn newline(&mut self) {
        self.line += 1;
    }

    /// Drop the pending window.
    pub(crate) const fn ignore(&mut self) {
        self.cursor.ignore();
        self.window_line = self.line;
    }

    /// Package the pending window as a token of the given kind.
    pub(crate) fn emit(&mut self, kind: TokenKind) -> Token {
        let token = Token {
            kind,
            literal: CompactString::new(self.cursor.window_text()),
            line: self.window_line,
            span: self.cursor.window(),
            source: self.source.clone(),
        };
        tracing::trace!("Emitting {} {token}", kind.name());
        self.ignore();
        token
    }

    /// Create the end of input token.
    pub(crate) fn emit_eof(&mut self) -> Token {
        let end = self.cursor.get_text().len();
        let token = Token {
            kind: TokenKind::Eof,
            literal: CompactString::new(EOF_LITERAL),
            line: self.line,
            span: Span::between(end, end),
            source: self.source.clone(),
        };
        self.ignore();
        token
    }

    /// Package the pending window as an error token.
    pub(crate) fn emit_error(&mut self, kind: LexErrorKind) -> Token {
        let token = Token {
            kind: TokenKind::Error(kind),
            literal: CompactString::new(kind.message()),
            line: self.window_line,
            span: self.cursor.window(),
            source: self.source.clone(),
        };
        tracing::debug!(
            "Lexing stopped at line {}: {} in {:?}",
            token.line,
            kind.message(),
            self.cursor.window_text()
        );
        self.ignore();
        token
    }

    pub(crate) const fn get_text(&self) -> &'src str {
        self.cursor.get_text()
    }

    pub(crate) fn get_lexeme(&self, span: &Span) -> Option<&'src str> {
        self.cursor.get_lexeme(span)
    }
}
