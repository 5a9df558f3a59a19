//! End-to-end scenarios for splitting a file into its two halves.

#![allow(clippy::unwrap_used)]

use interop_def::{AstNode, SyntaxTree, TextRange, TextSize};
use rstest::rstest;

use crate::helpers::source_fixtures::*;

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(TextSize::new(start), TextSize::new(end))
}

#[test]
fn test_empty_input() {
    let tree = SyntaxTree::parse("");
    assert_eq!(tree.first_half().text_range(), range(0, 0));
    assert!(tree.second_half().is_none());
}

#[test]
fn test_properties_only() {
    let tree = SyntaxTree::parse("foo=bar");
    assert_eq!(tree.first_half().text(), "foo=bar");
    assert_eq!(tree.first_half().text_range(), range(0, 7));
    assert!(tree.second_half().is_none());
    assert!(tree.delimiter_range().is_none());
}

#[test]
fn test_properties_and_declarations() {
    let tree = SyntaxTree::parse("foo=bar\n---\nvoid f();");
    assert_eq!(tree.first_half().text(), "foo=bar");
    assert_eq!(tree.second_half().unwrap().text(), "void f();");
    assert_eq!(tree.delimiter_range(), Some(range(7, 12)));
}

#[test]
fn test_delimiter_only() {
    let tree = SyntaxTree::parse("---");
    assert_eq!(tree.first_half().text(), "");
    assert_eq!(tree.second_half().unwrap().text(), "");
}

#[test]
fn test_second_delimiter_is_content() {
    let tree = SyntaxTree::parse("a\n---\nb\n---\nc");
    assert_eq!(tree.first_half().text(), "a");
    assert_eq!(tree.second_half().unwrap().text(), "b\n---\nc");
}

#[test]
fn test_update_first_half_decodes_to_new_content() {
    let tree = SyntaxTree::parse("foo=bar\n---\nvoid f();");
    let host = tree.first_half().update_text("x=y");

    let escaper = host.escaper();
    let mut decoded = String::new();
    assert!(escaper.decode(escaper.relevant_text_range(), &mut decoded));
    assert_eq!(decoded, "x=y");
}

#[rstest]
#[case(ZLIB_DEF)]
#[case(PROPERTIES_ONLY)]
#[case(CRLF_DEF)]
#[case(DASHES_IN_DECLARATIONS)]
#[case("")]
#[case("---")]
#[case("\u{2028}---\u{2029}")]
fn test_reconstruct_round_trip(#[case] input: &str) {
    let tree = SyntaxTree::parse(input);
    assert_eq!(tree.reconstruct(), input);
    assert_eq!(tree.syntax().to_string(), input);
}

#[test]
fn test_zlib_halves() {
    let tree = SyntaxTree::parse(ZLIB_DEF);
    assert_eq!(tree.first_half().text(), ZLIB_PROPERTIES);
    assert_eq!(tree.second_half().unwrap().text(), ZLIB_DECLARATIONS);

    let places = tree.injection_places();
    assert_eq!(places.len(), 2);
    assert_eq!(&tree.source()[places[1].range], ZLIB_DECLARATIONS);
}

#[test]
fn test_parse_on_threads() {
    let inputs = vec![ZLIB_DEF, CRLF_DEF, PROPERTIES_ONLY];
    let handles: Vec<_> = inputs
        .into_iter()
        .map(|input| std::thread::spawn(move || SyntaxTree::parse(input)))
        .collect();
    let trees: Vec<SyntaxTree> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(trees[0].second_half().is_some());
    assert!(trees[1].second_half().is_some());
    assert!(trees[2].second_half().is_none());
}
