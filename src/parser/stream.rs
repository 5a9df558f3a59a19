//! Restartable token stream following the editor lexer protocol.
//!
//! Highlighters and other editor consumers drive a lexer through
//! `start` / `token_kind` / `advance` calls instead of iterating. Querying the
//! stream before `start` is a contract violation and reported as
//! [`DefError::UninitializedBuffer`].

use std::ops::Range;

use text_size::{TextRange, TextSize};

use super::lexer::{Token, tokenize};
use super::syntax_kind::SyntaxKind;
use crate::error::{DefError, Result};

#[derive(Debug, Default)]
pub struct TokenStream<'a> {
    buffer: Option<&'a str>,
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start lexing the whole buffer.
    pub fn start(&mut self, buffer: &'a str) {
        self.buffer = Some(buffer);
        self.tokens = tokenize(buffer);
        self.pos = 0;
    }

    /// Start lexing only `range` of the buffer. Token offsets stay relative to
    /// the whole buffer.
    pub fn start_in(&mut self, buffer: &'a str, range: TextRange) -> Result<()> {
        let slice = buffer.get(Range::<usize>::from(range)).ok_or(DefError::InvalidRange {
            range,
            len: buffer.len(),
        })?;
        self.buffer = Some(buffer);
        self.tokens = tokenize(slice)
            .into_iter()
            .map(|token| Token {
                offset: token.offset + range.start(),
                ..token
            })
            .collect();
        self.pos = 0;
        Ok(())
    }

    pub fn buffer(&self) -> Result<&'a str> {
        self.buffer.ok_or(DefError::UninitializedBuffer)
    }

    pub fn buffer_end(&self) -> Result<TextSize> {
        self.buffer().map(TextSize::of)
    }

    /// Kind of the current token, `None` once the stream is exhausted.
    ///
    /// Empty tokens are reported like any other; consumers that only care
    /// about visible text should skip zero-length ranges.
    pub fn token_kind(&self) -> Result<Option<SyntaxKind>> {
        Ok(self.current()?.map(|t| t.kind))
    }

    pub fn token_start(&self) -> Result<TextSize> {
        self.current()?
            .map(|t| t.offset)
            .map_or_else(|| self.end_of_tokens(), Ok)
    }

    pub fn token_end(&self) -> Result<TextSize> {
        self.current()?
            .map(|t| t.range().end())
            .map_or_else(|| self.end_of_tokens(), Ok)
    }

    pub fn token_text(&self) -> Result<&'a str> {
        Ok(self.current()?.map_or("", |t| t.text))
    }

    pub fn advance(&mut self) -> Result<()> {
        self.buffer()?;
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        Ok(())
    }

    fn current(&self) -> Result<Option<&Token<'a>>> {
        self.buffer()?;
        Ok(self.tokens.get(self.pos))
    }

    fn end_of_tokens(&self) -> Result<TextSize> {
        match self.tokens.last() {
            Some(last) => Ok(last.range().end()),
            None => self.buffer_end(),
        }
    }
}
