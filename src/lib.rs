//! # interop-def
//!
//! Front end for Kotlin/Native C interop definition (`.def`) files.
//!
//! A definition file has two halves separated by a line containing only
//! `---`: configuration properties first, C declarations second. This crate
//! finds the delimiter, builds a lossless syntax tree and exposes each half as
//! an injection host that another analyzer can treat as a file of its own.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! syntax    → SyntaxTree, handles, injection hosts, escapers, file loading
//!   ↓
//! parser    → Logos lexer, tree builder, typed AST
//!   ↓
//! base      → Primitives (TreeId, TextRange, Position)
//! ```
//!
//! ## Example
//!
//! ```
//! use interop_def::{AstNode, SyntaxTree};
//!
//! let tree = SyntaxTree::parse("headers = zlib.h\n---\nint deflateEnd(void *);");
//! assert_eq!(tree.first_half().text(), "headers = zlib.h");
//! assert_eq!(tree.second_half().unwrap().text(), "int deflateEnd(void *);");
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax)
// ============================================================================

/// Foundation types: TreeId, TextRange, Position, format constants
pub mod base;

/// Parser configuration
pub mod config;

/// Crate error type
pub mod error;

/// Parser: Logos lexer, tree builder, typed AST
pub mod parser;

/// Syntax: trees, handles, injection hosts, file loading
pub mod syntax;

use std::path::Path;

pub use base::{Position, Span, TextRange, TextSize, TreeId};
pub use config::ParseConfig;
pub use error::{DefError, Result};
pub use parser::{AstNode, FirstHalf, HostNode, SecondHalf, SyntaxKind, Token, tokenize};
pub use syntax::{
    DefFile, HostEscaper, HostLanguage, InjectionPlace, LanguageRegistry, NodeHandle, SyntaxTree,
};

/// Load and parse a definition file with the default configuration.
pub fn parse_file(path: impl AsRef<Path>) -> Result<DefFile> {
    syntax::load_and_parse(path.as_ref(), &ParseConfig::default())
}
