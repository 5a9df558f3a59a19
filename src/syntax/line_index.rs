//! Offset to line/column conversion.
//!
//! Lines are split on the same Unicode line-break sequences the lexer uses,
//! so a delimiter preceded by `\u{2028}` still starts a new line here.

use text_size::{TextRange, TextSize};

use crate::base::{Position, Span};
use crate::parser::line_breaks;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex<'a> {
    text: &'a str,
    /// Offset of the first byte of every line; always starts with 0
    line_starts: Vec<TextSize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        line_starts.extend(line_breaks(text).map(|r| r.end()));
        Self { text, line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Line and character column of `offset`. Offsets past the end clamp to
    /// the end of the text.
    pub fn line_col(&self, offset: TextSize) -> Position {
        let offset = offset.min(TextSize::of(self.text));
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let start = usize::from(self.line_starts[line]);
        let column = self.text[start..]
            .char_indices()
            .take_while(|(i, _)| start + i < usize::from(offset))
            .count();
        Position::new(line, column)
    }

    pub fn span(&self, range: TextRange) -> Span {
        Span::new(self.line_col(range.start()), self.line_col(range.end()))
    }
}
