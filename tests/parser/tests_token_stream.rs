#![allow(clippy::unwrap_used)]

use interop_def::DefError;
use interop_def::parser::{SyntaxKind, TokenStream};

use crate::helpers::source_fixtures::*;

/// Collect (kind, text) pairs the way a highlighter walks the stream
fn walk<'a>(stream: &mut TokenStream<'a>) -> Vec<(SyntaxKind, &'a str)> {
    let mut out = Vec::new();
    while let Some(kind) = stream.token_kind().unwrap() {
        out.push((kind, stream.token_text().unwrap()));
        stream.advance().unwrap();
    }
    out
}

#[test]
fn test_stream_walk_matches_tokenize() {
    let mut stream = TokenStream::new();
    stream.start(ZLIB_DEF);
    let walked = walk(&mut stream);
    assert_eq!(walked.len(), 3);
    assert_eq!(walked[0], (SyntaxKind::HOST_TEXT, ZLIB_PROPERTIES));
    assert_eq!(walked[1].0, SyntaxKind::DELIMITER);
}

#[test]
fn test_stream_requires_start() {
    let stream = TokenStream::new();
    let err = stream.token_text().unwrap_err();
    assert!(matches!(err, DefError::UninitializedBuffer));
    assert_eq!(err.to_string(), "buffer is requested without initialization");
}

#[test]
fn test_stream_advance_past_end_is_harmless() {
    let mut stream = TokenStream::new();
    stream.start(PROPERTIES_ONLY);
    stream.advance().unwrap();
    stream.advance().unwrap();
    assert_eq!(stream.token_kind().unwrap(), None);
    assert_eq!(stream.token_end().unwrap(), stream.buffer_end().unwrap());
}
