//! Error types for the interop definition front end.
//!
//! Parsing itself never fails: every buffer yields a tree. These errors cover
//! misuse of the token stream protocol, stale or foreign node handles, edits
//! outside a host, and file loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::base::{TextRange, TreeId};

/// Errors produced by the crate's fallible operations.
#[derive(Debug, Error)]
pub enum DefError {
    /// Token state was queried before a buffer was supplied.
    #[error("buffer is requested without initialization")]
    UninitializedBuffer,

    /// A lexing range does not fit the buffer or splits a character.
    #[error("range {range:?} is not valid for a buffer of {len} bytes")]
    InvalidRange { range: TextRange, len: usize },

    /// A node handle was resolved against a tree it was not taken from.
    #[error("handle from tree {handle_tree:?} used with tree {tree:?}")]
    ForeignHandle { handle_tree: TreeId, tree: TreeId },

    /// The tree has no host node at the requested index.
    #[error("no host node at index {0}")]
    NoSuchNode(u32),

    /// An edit range lies outside the host's text.
    #[error("range {range:?} is outside a host of {len:?} bytes")]
    RangeOutsideHost { range: TextRange, len: text_size::TextSize },

    /// The path has no extension at all.
    #[error("no file extension: {}", .0.display())]
    MissingExtension(PathBuf),

    /// The path's extension is not accepted by the configuration.
    #[error("unsupported file extension: {0}")]
    UnsupportedExtension(String),

    /// IO error while reading a file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DefError {
    /// Check if this error comes from the filesystem or path validation.
    pub fn is_file_error(&self) -> bool {
        matches!(
            self,
            Self::MissingExtension(_) | Self::UnsupportedExtension(_) | Self::Io(_)
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = DefError> = std::result::Result<T, E>;
