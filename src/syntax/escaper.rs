//! Region escaper: maps the injected copy of a host back onto the host.
//!
//! Definition files have no quoting or escape sequences, so decoding copies
//! text verbatim and offsets map one to one.

use text_size::{TextRange, TextSize};

use crate::parser::HostNode;

use super::injection::HostLanguage;

/// Escaper for one host. The host's kind decides which language the decoded
/// text is analyzed as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEscaper {
    host: HostNode,
}

impl HostEscaper {
    pub fn new(host: HostNode) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &HostNode {
        &self.host
    }

    pub fn language(&self) -> HostLanguage {
        self.host.language()
    }

    /// Both halves span any number of lines.
    pub fn is_one_line(&self) -> bool {
        false
    }

    /// The part of the host handed to the injected grammar: all of it.
    pub fn relevant_text_range(&self) -> TextRange {
        TextRange::up_to(self.host.text_range().len())
    }

    /// Append the decoded text of `range_inside_host` to `out`.
    ///
    /// Host text is stored verbatim, so decoding always succeeds for a range
    /// inside the host on character boundaries. Any other range returns
    /// `false` and leaves `out` untouched.
    pub fn decode(&self, range_inside_host: TextRange, out: &mut String) -> bool {
        let text = self.host.text();
        match text.get(std::ops::Range::<usize>::from(range_inside_host)) {
            Some(slice) => {
                out.push_str(slice);
                true
            }
            None => false,
        }
    }

    /// Map an offset in decoded text to an offset inside the host.
    ///
    /// Returns `None` when the offset falls past the end of `range_inside_host`.
    pub fn offset_in_host(
        &self,
        offset_in_decoded: TextSize,
        range_inside_host: TextRange,
    ) -> Option<TextSize> {
        let offset = range_inside_host.start() + offset_in_decoded;
        (offset <= range_inside_host.end()).then_some(offset)
    }
}
