//! The syntax tree of one definition file.
//!
//! A [`SyntaxTree`] pairs the shared source buffer with the immutable green
//! tree built from it. It is `Send + Sync`; red [`SyntaxNode`]s are created on
//! demand and never stored. Nodes are addressed from outside through
//! [`NodeHandle`]s, which only resolve against the tree they came from.

use std::sync::Arc;

use rowan::GreenNode;
use text_size::{TextRange, TextSize};

use crate::base::{Position, Span, TreeId};
use crate::config::ParseConfig;
use crate::error::{DefError, Result};
use crate::parser::{
    self, AstNode, FirstHalf, HostNode, SecondHalf, SourceFile, SyntaxNode, SyntaxToken,
};

use super::line_index::LineIndex;

/// Stable address of a host node: owning tree plus host index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    tree: TreeId,
    index: u32,
}

impl NodeHandle {
    pub fn new(tree: TreeId, index: u32) -> Self {
        Self { tree, index }
    }

    pub fn tree(&self) -> TreeId {
        self.tree
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

#[derive(Debug, Clone)]
pub struct SyntaxTree {
    id: TreeId,
    source: Arc<str>,
    green: GreenNode,
}

impl SyntaxTree {
    /// Parse a buffer into a tree.
    pub fn parse(source: impl Into<Arc<str>>) -> Self {
        Self::parse_with_config(source, &ParseConfig::default())
    }

    pub fn parse_with_config(source: impl Into<Arc<str>>, config: &ParseConfig) -> Self {
        let source = source.into();
        let green = parser::parse_with_config(&source, config).green;
        Self::new(source, green)
    }

    /// Wrap a green tree produced by an edit. The source is re-derived from it.
    pub(crate) fn from_green(green: GreenNode) -> Self {
        let source: Arc<str> = SyntaxNode::new_root(green.clone()).to_string().into();
        Self::new(source, green)
    }

    fn new(source: Arc<str>, green: GreenNode) -> Self {
        let id = TreeId::next();
        tracing::debug!(tree = id.raw(), len = source.len(), "syntax tree built");
        Self { id, source, green }
    }

    pub fn id(&self) -> TreeId {
        self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// The shared source buffer.
    pub fn source_arc(&self) -> Arc<str> {
        Arc::clone(&self.source)
    }

    pub fn len(&self) -> TextSize {
        TextSize::of(&*self.source)
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn source_file(&self) -> SourceFile {
        SourceFile(self.syntax())
    }

    // =========================================================================
    // Halves
    // =========================================================================

    pub fn first_half(&self) -> FirstHalf {
        match self.source_file().first_half() {
            Some(first) => first,
            None => panic!("tree {:?} has no first half", self.id),
        }
    }

    pub fn second_half(&self) -> Option<SecondHalf> {
        self.source_file().second_half()
    }

    pub fn delimiter(&self) -> Option<SyntaxToken> {
        self.source_file().delimiter()
    }

    pub fn delimiter_range(&self) -> Option<TextRange> {
        self.delimiter().map(|t| t.text_range())
    }

    /// Host nodes in source order.
    pub fn hosts(&self) -> Vec<HostNode> {
        self.source_file().hosts().collect()
    }

    // =========================================================================
    // Handles
    // =========================================================================

    pub fn handle(&self, host: &HostNode) -> NodeHandle {
        NodeHandle::new(self.id, host.index())
    }

    pub fn handles(&self) -> Vec<NodeHandle> {
        self.hosts().iter().map(|h| self.handle(h)).collect()
    }

    pub fn resolve(&self, handle: NodeHandle) -> Result<HostNode> {
        if handle.tree != self.id {
            return Err(DefError::ForeignHandle {
                handle_tree: handle.tree,
                tree: self.id,
            });
        }
        self.syntax()
            .children()
            .nth(handle.index as usize)
            .map(HostNode::from_syntax)
            .ok_or(DefError::NoSuchNode(handle.index))
    }

    // =========================================================================
    // Edits
    // =========================================================================

    /// Replace the whole content of the host at `handle`.
    ///
    /// Returns the rebuilt tree and the handle of the replaced host inside it.
    /// The delimiter is not searched again: text resembling a delimiter that
    /// is written into a half stays part of that half.
    pub fn update_text(&self, handle: NodeHandle, text: &str) -> Result<(SyntaxTree, NodeHandle)> {
        let host = self.resolve(handle)?;
        let tree = SyntaxTree::from_green(host.replaced_root(text));
        let handle = NodeHandle::new(tree.id, host.index());
        Ok((tree, handle))
    }

    /// Full reparse of the current text, discovering the delimiter afresh.
    pub fn reparse(&self) -> SyntaxTree {
        SyntaxTree::parse(self.source_arc())
    }

    /// Concatenate first half, delimiter and second half.
    pub fn reconstruct(&self) -> String {
        let mut out = self.first_half().text();
        if let Some(delimiter) = self.delimiter() {
            out.push_str(delimiter.text());
        }
        if let Some(second) = self.second_half() {
            out.push_str(&second.text());
        }
        out
    }

    // =========================================================================
    // Positions
    // =========================================================================

    pub fn line_index(&self) -> LineIndex<'_> {
        LineIndex::new(&self.source)
    }

    pub fn line_col(&self, offset: TextSize) -> Position {
        self.line_index().line_col(offset)
    }

    pub fn span(&self, range: TextRange) -> Span {
        self.line_index().span(range)
    }
}
