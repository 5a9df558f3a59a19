//! Text replacement through injection hosts and tree handles.

#![allow(clippy::unwrap_used)]

use interop_def::{AstNode, DefError, HostNode, SyntaxKind, SyntaxTree, TextRange};
use rstest::rstest;

use crate::helpers::source_fixtures::*;

#[test]
fn test_both_halves_support_update_text() {
    let tree = SyntaxTree::parse(ZLIB_DEF);
    for host in tree.hosts() {
        let updated = host.update_text("replaced");
        assert_eq!(updated.kind(), host.kind());
        assert_eq!(updated.text(), "replaced");
    }
}

#[test]
fn test_update_text_through_handle() {
    let tree = SyntaxTree::parse(ZLIB_DEF);
    let first = tree.handle(&HostNode::from(tree.first_half()));
    let (edited, handle) = tree.update_text(first, "headers = zlib.h\nlinkerOpts = -lz").unwrap();

    assert_eq!(handle.tree(), edited.id());
    assert_eq!(edited.first_half().text(), "headers = zlib.h\nlinkerOpts = -lz");
    assert_eq!(edited.second_half().unwrap().text(), ZLIB_DECLARATIONS);
    assert_eq!(edited.reconstruct(), edited.source());
}

#[test]
fn test_stale_handle_after_edit() {
    let tree = SyntaxTree::parse(ZLIB_DEF);
    let handle = tree.handles()[1];
    let (edited, _) = tree.update_text(handle, "int g(void);").unwrap();
    assert!(matches!(
        edited.resolve(handle),
        Err(DefError::ForeignHandle { .. })
    ));
}

#[test]
fn test_content_change_in_declarations() {
    let tree = SyntaxTree::parse("headers = a.h\n---\nint f(void);");
    let second = tree.second_half().unwrap();
    let changed = second
        .handle_content_change(TextRange::new(4.into(), 5.into()), "g")
        .unwrap();
    assert_eq!(changed.text(), "int g(void);");
    assert_eq!(changed.text_range(), second.text_range());
}

#[test]
fn test_decode_after_second_half_edit() {
    let tree = SyntaxTree::parse(CRLF_DEF);
    let second = tree.second_half().unwrap().update_text("void g(void);");
    let mut out = String::new();
    assert!(second.escaper().decode(TextRange::up_to(second.text_range().len()), &mut out));
    assert_eq!(out, "void g(void);");
}

fn host_summary(tree: &SyntaxTree) -> Vec<(SyntaxKind, TextRange, String)> {
    tree.hosts()
        .iter()
        .map(|host| (host.kind(), host.text_range(), host.text()))
        .collect()
}

#[rstest]
#[case::delimiter_only_second("---", 1, "int x;", "---\nint x;")]
#[case::delimiter_only_first("---", 0, "x=1", "x=1\n---")]
#[case::trailing_delimiter("a\n---", 1, "int x;", "a\n---\nint x;")]
#[case::leading_delimiter("---\nb", 0, "int x;", "int x;\n---\nb")]
#[case::leading_delimiter_second("---\nb", 1, "void f();", "---\nvoid f();")]
#[case::carriage_return_first("a\n---\nb", 0, "x\r", "x\r\r\n---\nb")]
#[case::carriage_return_on_bare_delimiter("---", 0, "x\r", "x\r\r\n---")]
#[case::line_feed_after_carriage_return("a\r---\rb", 1, "\nc", "a\r---\r\n\nc")]
#[case::emptied_first("a\n---\nb", 0, "", "\n---\nb")]
fn test_edit_agrees_with_reparse(
    #[case] input: &str,
    #[case] index: usize,
    #[case] replacement: &str,
    #[case] expected: &str,
) {
    let tree = SyntaxTree::parse(input);
    let handle = tree.handles()[index];
    let (edited, _) = tree.update_text(handle, replacement).unwrap();
    assert_eq!(edited.reconstruct(), expected);

    let reparsed = edited.reparse();
    assert_eq!(host_summary(&edited), host_summary(&reparsed));
    assert_eq!(edited.delimiter_range(), reparsed.delimiter_range());
    assert_eq!(edited.hosts()[index].text(), replacement);
}
