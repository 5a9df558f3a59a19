//! Injection host capability of the two halves.
//!
//! Both halves are hosts: their text is handed, unchanged, to another
//! grammar. Edits made through the injected copy come back as content
//! changes and are applied by swapping the host's green node, which yields a
//! new root with every other node shared.
//!
//! The delimiter token is rewritten when the edited half would otherwise
//! touch the `---` without a line break in between, so the rebuilt tree still
//! agrees with a fresh parse of its text. Replacement text containing a line
//! that is exactly `---` is kept as content; only a reparse promotes it.

use rowan::{GreenNode, GreenNodeBuilder, GreenToken};

use crate::base::constants::DELIMITER;
use text_size::{TextRange, TextSize};

use crate::error::{DefError, Result};
use crate::parser::{FirstHalf, HostNode, SecondHalf, SyntaxKind, SyntaxNode};

use super::escaper::HostEscaper;
use super::injection::HostLanguage;

impl HostNode {
    /// A half always wraps one contiguous range, so it is always a valid host.
    pub fn is_valid_host(&self) -> bool {
        true
    }

    pub fn language(&self) -> HostLanguage {
        match self {
            Self::FirstHalf(_) => HostLanguage::Properties,
            Self::SecondHalf(_) => HostLanguage::ObjectiveC,
        }
    }

    pub fn escaper(&self) -> HostEscaper {
        HostEscaper::new(self.clone())
    }

    /// Replace the whole content of this host.
    ///
    /// The returned host lives in a rebuilt tree that shares every other node
    /// with the original one.
    pub fn update_text(&self, text: &str) -> HostNode {
        self.with_root(self.replaced_root(text))
    }

    /// Replace `range` (relative to the host start) with `content`.
    pub fn handle_content_change(&self, range: TextRange, content: &str) -> Result<HostNode> {
        let text = self.text();
        let len = TextSize::of(text.as_str());
        let before = text.get(..usize::from(range.start()));
        let after = text.get(usize::from(range.end())..);
        let (Some(before), Some(after)) = (before, after) else {
            return Err(DefError::RangeOutsideHost { range, len });
        };

        tracing::trace!(kind = ?self.kind(), ?range, "content change");
        Ok(self.update_text(&format!("{before}{content}{after}")))
    }

    /// Root of a new tree in which this host's content is `text`.
    pub(crate) fn replaced_root(&self, text: &str) -> GreenNode {
        let mut builder = GreenNodeBuilder::new();
        builder.start_node(self.kind().into());
        if !text.is_empty() {
            builder.token(SyntaxKind::HOST_TEXT.into(), text);
        }
        builder.finish_node();
        let green = self.syntax().replace_with(builder.finish());

        let root = SyntaxNode::new_root(green.clone());
        let Some(delimiter) = root
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind() == SyntaxKind::DELIMITER)
        else {
            return green;
        };
        match separated_delimiter(self.kind(), delimiter.text(), text) {
            Some(fixed) => {
                tracing::trace!(kind = ?self.kind(), delimiter = ?fixed, "delimiter rewritten");
                delimiter.replace_with(GreenToken::new(SyntaxKind::DELIMITER.into(), &fixed))
            }
            None => green,
        }
    }

    fn with_root(&self, root: GreenNode) -> HostNode {
        let kind = self.kind();
        match SyntaxNode::new_root(root)
            .children()
            .nth(self.index() as usize)
        {
            Some(node) if node.kind() == kind => HostNode::from_syntax(node),
            other => panic!("replaced {:?} host missing from rebuilt tree: {:?}", kind, other),
        }
    }
}

/// Delimiter text keeping `---` on its own line next to a half whose new
/// content is `text`, or `None` if `delimiter` already does.
fn separated_delimiter(kind: SyntaxKind, delimiter: &str, text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    match kind {
        SyntaxKind::FIRST_HALF => {
            // A trailing `\r` would merge with a leading `\n` into one break
            let prefix = match (delimiter.starts_with(DELIMITER), text.ends_with('\r')) {
                (true, true) => "\r\n",
                (true, false) => "\n",
                (false, true) if delimiter.starts_with('\n') => "\r",
                _ => return None,
            };
            Some(format!("{prefix}{delimiter}"))
        }
        SyntaxKind::SECOND_HALF => {
            let needs_break = delimiter.ends_with(DELIMITER)
                || (delimiter.ends_with('\r') && text.starts_with('\n'));
            needs_break.then(|| format!("{delimiter}\n"))
        }
        _ => None,
    }
}

/// Typed forwarders so each half keeps its own type through an edit.
macro_rules! injection_host {
    ($name:ident, $variant:ident) => {
        impl $name {
            pub fn is_valid_host(&self) -> bool {
                HostNode::from(self.clone()).is_valid_host()
            }

            pub fn language(&self) -> HostLanguage {
                HostNode::from(self.clone()).language()
            }

            pub fn escaper(&self) -> HostEscaper {
                HostNode::from(self.clone()).escaper()
            }

            #[doc = concat!("Replace the whole content of this `", stringify!($name), "`.")]
            pub fn update_text(&self, text: &str) -> $name {
                match HostNode::from(self.clone()).update_text(text) {
                    HostNode::$variant(node) => node,
                    other => panic!("edit changed host kind to {:?}", other.kind()),
                }
            }

            pub fn handle_content_change(&self, range: TextRange, content: &str) -> Result<$name> {
                match HostNode::from(self.clone()).handle_content_change(range, content)? {
                    HostNode::$variant(node) => Ok(node),
                    other => panic!("edit changed host kind to {:?}", other.kind()),
                }
            }
        }
    };
}

injection_host!(FirstHalf, FirstHalf);
injection_host!(SecondHalf, SecondHalf);
