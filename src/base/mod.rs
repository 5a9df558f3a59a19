//! Foundation types for the interop definition front end.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TreeId`] - Identity of one parsed syntax tree
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`Position`], [`Span`] - Line/column positions
//! - Format constants (file extension, delimiter)
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod position;
mod tree_id;

pub use position::{Position, Span};
pub use text_size::{TextRange, TextSize};
pub use tree_id::TreeId;

// Re-export text-size for convenience
pub use text_size;
