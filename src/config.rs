//! Parser configuration.

use std::path::Path;

use crate::base::constants::DEF_EXT;

/// Options controlling how files are recognized and parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    /// Emit `tracing` events for every token the tree builder consumes
    pub trace: bool,
    /// File extensions (without the leading dot) recognized as definition files
    pub extensions: Vec<String>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            trace: false,
            extensions: vec![DEF_EXT.to_string()],
        }
    }
}

impl ParseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Accept an additional file extension. A leading dot is ignored.
    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        let ext = ext.into();
        let ext = ext.trim_start_matches('.').to_string();
        if !self.extensions.contains(&ext) {
            self.extensions.push(ext);
        }
        self
    }

    /// Check whether an extension is recognized (case-sensitive).
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }

    /// Check whether a path carries a recognized extension.
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.accepts_extension(e))
    }
}
