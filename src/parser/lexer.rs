//! Logos-based lexer for definition files
//!
//! The raw scanner splits the buffer into line breaks, dash runs and plain
//! text. The delimiter search walks those raw tokens looking for a line that
//! is exactly `---`; the lexer then emits at most three tokens:
//! host text, delimiter, host text.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }
}

/// Lexer producing the host/delimiter token stream of one buffer
pub struct Lexer<'a> {
    input: &'a str,
    delimiter: Option<TextRange>,
    stage: Stage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Leading,
    Delimiter,
    Trailing,
    Done,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            delimiter: find_delimiter(input),
            stage: Stage::Leading,
        }
    }

    /// Range of the structural delimiter, if the buffer has one
    pub fn delimiter(&self) -> Option<TextRange> {
        self.delimiter
    }

    fn token(&self, kind: SyntaxKind, range: TextRange) -> Token<'a> {
        let input = self.input;
        Token {
            kind,
            text: &input[range],
            offset: range.start(),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let end = TextSize::of(self.input);
        match (self.stage, self.delimiter) {
            (Stage::Leading, None) => {
                self.stage = Stage::Done;
                Some(self.token(SyntaxKind::HOST_TEXT, TextRange::up_to(end)))
            }
            (Stage::Leading, Some(delim)) => {
                self.stage = Stage::Delimiter;
                Some(self.token(SyntaxKind::HOST_TEXT, TextRange::up_to(delim.start())))
            }
            (Stage::Delimiter, Some(delim)) => {
                self.stage = Stage::Trailing;
                Some(self.token(SyntaxKind::DELIMITER, delim))
            }
            // Always emitted, even when empty
            (Stage::Trailing, Some(delim)) => {
                self.stage = Stage::Done;
                Some(self.token(SyntaxKind::HOST_TEXT, TextRange::new(delim.end(), end)))
            }
            _ => None,
        }
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Locate the first line consisting solely of `---`.
///
/// The returned range includes the line break before the dashes (unless they
/// start the buffer) and the line break after them (unless they end it).
pub fn find_delimiter(input: &str) -> Option<TextRange> {
    // Where a match would start if `---` came next
    let mut line_start = Some(0);
    // Start of a match whose dashes have been seen
    let mut pending = None;

    for (token, span) in RawToken::lexer(input).spanned() {
        let token = token.unwrap_or(RawToken::Text);
        if let Some(start) = pending.take() {
            if token == RawToken::LineBreak {
                return Some(range(start, span.end));
            }
        }
        match token {
            RawToken::LineBreak => line_start = Some(span.start),
            RawToken::Dashes => pending = line_start.take(),
            RawToken::Dash | RawToken::Text => line_start = None,
        }
    }

    pending.map(|start| range(start, input.len()))
}

/// Ranges of every line break sequence in the buffer, in order.
pub fn line_breaks(input: &str) -> impl Iterator<Item = TextRange> + '_ {
    RawToken::lexer(input)
        .spanned()
        .filter(|(token, _)| *token == Ok(RawToken::LineBreak))
        .map(|(_, span)| range(span.start, span.end))
}

fn range(start: usize, end: usize) -> TextRange {
    TextRange::new(TextSize::new(start as u32), TextSize::new(end as u32))
}

/// Raw scanner tokens
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    /// Any single Unicode line terminator sequence
    #[regex(r"\r\n|[\n\r\x0B\x0C\x{85}\x{2028}\x{2029}]")]
    LineBreak,

    #[token("---")]
    Dashes,

    #[token("-")]
    Dash,

    #[regex(r"[^\n\r\x0B\x0C\x{85}\x{2028}\x{2029}\-]+")]
    Text,
}
