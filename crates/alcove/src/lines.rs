use std::ops::Range;

/// The document as an ordered, 0-indexed sequence of lines with byte offsets.
///
/// Lines carry no trailing newline; a trailing `\r` is stripped so CRLF
/// documents parse identically. The buffer is the source of truth for all
/// offset math and is never mutated during a parse pass.
pub struct LineBuffer<'a> {
    src: &'a str,
    lines: Vec<Line<'a>>,
}

#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    /// Line text without the line ending.
    text: &'a str,
    /// Byte offset of the first character in the source.
    start: usize,
}

impl<'a> LineBuffer<'a> {
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        let mut lines = Vec::new();
        let mut offset = 0;

        for raw in src.split('\n') {
            let text = raw.strip_suffix('\r').unwrap_or(raw);
            lines.push(Line { text, start: offset });
            // +1 for the '\n' delimiter; the final segment has none.
            offset += raw.len() + 1;
        }

        Self { src, lines }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text of line `index`, without the line ending.
    #[must_use]
    pub fn line(&self, index: usize) -> &'a str {
        self.lines[index].text
    }

    /// Byte offset of the first character of line `index`.
    #[must_use]
    pub fn line_start(&self, index: usize) -> usize {
        self.lines[index].start
    }

    /// Byte offset one past the last character of line `index`, excluding the
    /// line ending.
    #[must_use]
    pub fn line_end(&self, index: usize) -> usize {
        let line = self.lines[index];
        line.start + line.text.len()
    }

    /// Byte offset of the first character of the line after `index`, or the
    /// source length for the final line.
    #[must_use]
    pub fn next_line_start(&self, index: usize) -> usize {
        match self.lines.get(index + 1) {
            Some(next) => next.start,
            None => self.src.len(),
        }
    }

    /// Byte span of the line range, from the start of the first line through
    /// the end of the last line's text (the final line ending is excluded).
    #[must_use]
    pub fn text_span(&self, lines: &Range<usize>) -> Range<usize> {
        self.line_start(lines.start)..self.line_end(lines.end - 1)
    }

    /// Byte span of the line range including the last line's line ending,
    /// suitable for splicing replacement text over whole lines.
    #[must_use]
    pub fn splice_span(&self, lines: &Range<usize>) -> Range<usize> {
        self.line_start(lines.start)..self.next_line_start(lines.end - 1)
    }
}
