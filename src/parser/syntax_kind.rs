//! Syntax kinds for the Rowan-based CST
//!
//! A definition file has very few kinds: two token kinds produced by the
//! lexer and three node kinds produced by the tree builder.

/// All syntax kinds (tokens and nodes) of a definition file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TOKENS
    // =========================================================================
    HOST_TEXT = 0, // raw text handed to another grammar
    DELIMITER,     // the `---` line including its line breaks

    // =========================================================================
    // NODES
    // =========================================================================
    FIRST_HALF,  // configuration properties
    SECOND_HALF, // C declarations
    SOURCE_FILE,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this kind is produced by the lexer
    pub fn is_token(self) -> bool {
        matches!(self, Self::HOST_TEXT | Self::DELIMITER)
    }

    /// Check if this kind is a node whose text is reinterpreted by another grammar
    pub fn is_host(self) -> bool {
        matches!(self, Self::FIRST_HALF | Self::SECOND_HALF)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DefLanguage {}

impl rowan::Language for DefLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<DefLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<DefLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<DefLanguage>;
