//! Typed AST wrappers over the untyped rowan CST.
//!
//! Each struct wraps a SyntaxNode and provides methods to access children.
//! The two halves are combined in [`HostNode`], the sum type consumers match
//! on when they need to treat either half uniformly.

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};
use rowan::TextRange;

pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;

    fn text_range(&self) -> TextRange {
        self.syntax().text_range()
    }

    fn text(&self) -> String {
        self.syntax().text().to_string()
    }
}

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(SourceFile, SOURCE_FILE);
ast_node!(FirstHalf, FIRST_HALF);
ast_node!(SecondHalf, SECOND_HALF);

impl SourceFile {
    /// The configuration half. Every file has one.
    pub fn first_half(&self) -> Option<FirstHalf> {
        self.0.children().find_map(FirstHalf::cast)
    }

    /// The declarations half, present only after a delimiter line.
    pub fn second_half(&self) -> Option<SecondHalf> {
        self.0.children().find_map(SecondHalf::cast)
    }

    /// The structural `---` line, including its line breaks.
    pub fn delimiter(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind() == SyntaxKind::DELIMITER)
    }

    /// Both halves in source order.
    pub fn hosts(&self) -> impl Iterator<Item = HostNode> + '_ {
        self.0.children().filter_map(HostNode::cast)
    }
}

/// Either half of a definition file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HostNode {
    FirstHalf(FirstHalf),
    SecondHalf(SecondHalf),
}

impl HostNode {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::FIRST_HALF => Some(Self::FirstHalf(FirstHalf(node))),
            SyntaxKind::SECOND_HALF => Some(Self::SecondHalf(SecondHalf(node))),
            _ => None,
        }
    }

    /// Materialize a host from a node the tree builder produced.
    ///
    /// # Panics
    ///
    /// Panics if the node is not a `FIRST_HALF` or `SECOND_HALF`; the tree
    /// builder never emits other host kinds.
    pub fn from_syntax(node: SyntaxNode) -> Self {
        let kind = node.kind();
        Self::cast(node).unwrap_or_else(|| panic!("unknown element type: {:?}", kind))
    }

    pub fn kind(&self) -> SyntaxKind {
        self.syntax().kind()
    }

    pub fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::FirstHalf(n) => n.syntax(),
            Self::SecondHalf(n) => n.syntax(),
        }
    }

    pub fn text_range(&self) -> TextRange {
        self.syntax().text_range()
    }

    pub fn text(&self) -> String {
        self.syntax().text().to_string()
    }

    /// Position among the hosts of a file: 0 for the first half, 1 for the second.
    pub fn index(&self) -> u32 {
        match self {
            Self::FirstHalf(_) => 0,
            Self::SecondHalf(_) => 1,
        }
    }

    pub fn as_first_half(&self) -> Option<&FirstHalf> {
        match self {
            Self::FirstHalf(n) => Some(n),
            Self::SecondHalf(_) => None,
        }
    }

    pub fn as_second_half(&self) -> Option<&SecondHalf> {
        match self {
            Self::SecondHalf(n) => Some(n),
            Self::FirstHalf(_) => None,
        }
    }
}

impl From<FirstHalf> for HostNode {
    fn from(node: FirstHalf) -> Self {
        Self::FirstHalf(node)
    }
}

impl From<SecondHalf> for HostNode {
    fn from(node: SecondHalf) -> Self {
        Self::SecondHalf(node)
    }
}
