//! Rowan-based parser for interop definition files
//!
//! This module provides a lossless parser using:
//! - **logos** for scanning line breaks and dash runs
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → HOST_TEXT, DELIMITER, HOST_TEXT
//!     ↓
//! Parser → GreenNode tree (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → FirstHalf / SecondHalf wrappers
//! ```

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
mod lexer;
mod stream;
mod syntax_kind;

pub use ast::*;
pub use lexer::{Lexer, Token, find_delimiter, line_breaks, tokenize};
pub use parser::{Parse, parse, parse_tokens, parse_with_config};
pub use stream::TokenStream;
pub use syntax_kind::{DefLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
