use crate::ReportableError;
use ariadne::{Color, Config, IndexType, Label, Report as AReport, ReportKind, Source};
use core::ops;
use meme_lexer::{LexError, LexErrorKind, Span};
use std::io;

type Report<'err> = AReport<'err, (&'err str, ops::Range<usize>)>;

impl ReportableError for LexError {
    fn report(&self, buffer: &mut String, path: &str, text: &str) {
        let mut output = io::Cursor::new(Vec::new());

        let report = match self.kind {
            LexErrorKind::SyntaxError => format_syntax_error(path, self.span),
            LexErrorKind::UnterminatedComment => format_unterminated_comment(path, self.span),
        };

        report
            .write((path, Source::from(text)), &mut output)
            .expect("write into buffer should not fail.");
        buffer.push_str(
            &String::from_utf8(output.into_inner())
                .expect("buffer consists of only valid UTF-8 bytes."),
        );
    }
}

fn format_syntax_error(path: &str, span: Span) -> Report<'_> {
    Report::build(ReportKind::Error, (path, span.range()))
        .with_message(LexErrorKind::SyntaxError.message())
        .with_config(config())
        .with_label(
            Label::new((path, span.range()))
                .with_color(Color::Red)
                .with_message("no token starts with this".to_owned()),
        )
        .finish()
}

fn format_unterminated_comment(path: &str, span: Span) -> Report<'_> {
    let opening = span.start..(span.start + 2).min(span.end());
    Report::build(ReportKind::Error, (path, span.range()))
        .with_message(LexErrorKind::UnterminatedComment.message())
        .with_config(config())
        .with_label(
            Label::new((path, opening))
                .with_color(Color::Yellow)
                .with_message("comment opened here".to_owned()),
        )
        .with_note("close the comment with `*/`")
        .finish()
}

/// Spans are byte offsets into the source.
fn config() -> Config {
    Config::default()
        .with_compact(true)
        .with_index_type(IndexType::Byte)
}
