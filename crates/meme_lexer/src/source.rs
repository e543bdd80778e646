use meme_span::Span;

/// A read cursor over a source text.
///
/// The cursor tracks two byte offsets: the start of the pending window and the current read
/// position. Characters between the two have been read but not yet emitted or ignored.
#[derive(Debug)]
pub struct SourceCursor<'src> {
    /// The source text.
    text: &'src str,
    /// The byte offset where the pending window starts.
    window_start: usize,
    /// The byte offset of the next character to read.
    offset: usize,
    /// Whether the last read hit the end of the input.
    exhausted: bool,
}

impl<'src> SourceCursor<'src> {
    /// Create from a source string.
    pub const fn new(source: &'src str) -> Self {
        Self {
            text: source,
            window_start: 0,
            offset: 0,
            exhausted: false,
        }
    }

    /// Move both offsets back to the start of the text.
    pub const fn reset(&mut self) {
        self.window_start = 0;
        self.offset = 0;
        self.exhausted = false;
    }

    /// Read the next character, or `None` at the end of the input.
    ///
    /// Reading at the end of the input does not move the cursor, so repeated reads keep
    /// returning `None` from the same position.
    pub fn read(&mut self) -> Option<char> {
        if let Some(ch) = self.text[self.offset..].chars().next() {
            self.offset += ch.len_utf8();
            Some(ch)
        } else {
            self.exhausted = true;
            None
        }
    }

    /// Return the next character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        let ch = self.read();
        self.backup();
        ch
    }

    /// Undo the last read.
    ///
    /// Backing up over the start of the window drags the window start back with the cursor.
    pub fn backup(&mut self) {
        if self.exhausted {
            self.exhausted = false;
            return;
        }
        if let Some(ch) = self.text[..self.offset].chars().next_back() {
            self.offset -= ch.len_utf8();
        }
        if self.window_start > self.offset {
            self.window_start = self.offset;
        }
    }

    /// Drop the pending window without emitting it.
    pub const fn ignore(&mut self) {
        self.window_start = self.offset;
    }

    /// Return the span of the pending window.
    pub const fn window(&self) -> Span {
        Span::between(self.window_start, self.offset)
    }

    /// Return the text of the pending window.
    pub fn window_text(&self) -> &'src str {
        &self.text[self.window_start..self.offset]
    }

    /// Return the current read offset.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Return the source.
    pub const fn get_text(&self) -> &'src str {
        self.text
    }

    /// Return the lexeme associated with the given span if the span is valid.
    pub fn get_lexeme(&self, span: &Span) -> Option<&'src str> {
        self.text.get(span.range())
    }
}
