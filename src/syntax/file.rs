//! Loading and parsing definition files from disk.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::ParseConfig;
use crate::error::{DefError, Result};

use super::tree::SyntaxTree;

/// A parsed definition file
#[derive(Debug, Clone)]
pub struct DefFile {
    path: PathBuf,
    tree: SyntaxTree,
}

impl DefFile {
    pub fn new(path: impl Into<PathBuf>, tree: SyntaxTree) -> Self {
        Self {
            path: path.into(),
            tree,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    pub fn into_tree(self) -> SyntaxTree {
        self.tree
    }

    /// Check whether the file has a declarations half
    pub fn has_declarations(&self) -> bool {
        self.tree.second_half().is_some()
    }
}

/// Get file extension from path
pub fn get_extension(path: &Path) -> Result<&str> {
    path.extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| DefError::MissingExtension(path.to_path_buf()))
}

/// Validate that the extension is accepted by `config`
pub fn validate_extension<'p>(path: &'p Path, config: &ParseConfig) -> Result<&'p str> {
    let ext = get_extension(path)?;
    if config.accepts_extension(ext) {
        Ok(ext)
    } else {
        Err(DefError::UnsupportedExtension(ext.to_string()))
    }
}

/// Load file contents
pub fn load_file(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Parse in-memory content that belongs to `path` (e.g. an unsaved editor buffer)
pub fn parse_content(content: &str, path: &Path, config: &ParseConfig) -> Result<DefFile> {
    validate_extension(path, config)?;
    Ok(DefFile::new(path, SyntaxTree::parse_with_config(content, config)))
}

/// Loads and parses a definition file.
///
/// # Errors
///
/// Returns an error if:
/// - The file has no extension or one `config` does not accept
/// - The file cannot be read
pub fn load_and_parse(path: &Path, config: &ParseConfig) -> Result<DefFile> {
    validate_extension(path, config)?;
    let content = load_file(path)?;
    tracing::debug!("Loaded {} ({} bytes)", path.display(), content.len());
    Ok(DefFile::new(path, SyntaxTree::parse_with_config(content, config)))
}

/// Parse many files in parallel. Results keep the order of `paths`.
pub fn parse_files(paths: &[PathBuf], config: &ParseConfig) -> Vec<Result<DefFile>> {
    paths
        .par_iter()
        .map(|path| load_and_parse(path, config))
        .collect()
}
