//! Injection places: which grammar analyzes which half.
//!
//! The crate only tags each half with a [`HostLanguage`]. Mapping a language
//! to an actual grammar is the caller's business, supplied through a
//! [`LanguageRegistry`].

use std::collections::HashMap;
use std::fmt;

use text_size::TextRange;

use super::tree::{NodeHandle, SyntaxTree};

/// Language a half is analyzed as
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HostLanguage {
    /// Configuration properties (first half)
    Properties,
    /// C / Objective-C declarations (second half)
    ObjectiveC,
}

impl HostLanguage {
    /// Identifier conventionally used by grammar registries
    pub fn id(self) -> &'static str {
        match self {
            Self::Properties => "Properties",
            Self::ObjectiveC => "ObjectiveC",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "Properties" => Some(Self::Properties),
            "ObjectiveC" => Some(Self::ObjectiveC),
            _ => None,
        }
    }
}

impl fmt::Display for HostLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A region of a file to be analyzed under another grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjectionPlace {
    pub handle: NodeHandle,
    pub language: HostLanguage,
    /// Absolute range of the host in the file
    pub range: TextRange,
}

/// Caller-owned mapping from host languages to grammars
pub trait LanguageRegistry {
    type Grammar;

    fn grammar(&self, language: HostLanguage) -> Option<Self::Grammar>;
}

impl<G: Clone> LanguageRegistry for HashMap<HostLanguage, G> {
    type Grammar = G;

    fn grammar(&self, language: HostLanguage) -> Option<G> {
        self.get(&language).cloned()
    }
}

impl SyntaxTree {
    /// Every valid host with its language, in source order.
    pub fn injection_places(&self) -> Vec<InjectionPlace> {
        self.hosts()
            .into_iter()
            .filter(|host| host.is_valid_host())
            .map(|host| InjectionPlace {
                handle: self.handle(&host),
                language: host.language(),
                range: host.text_range(),
            })
            .collect()
    }

    /// Injection places paired with the grammar the registry provides.
    /// Places whose language the registry does not know are skipped.
    pub fn injections<R: LanguageRegistry>(&self, registry: &R) -> Vec<(InjectionPlace, R::Grammar)> {
        self.injection_places()
            .into_iter()
            .filter_map(|place| registry.grammar(place.language).map(|g| (place, g)))
            .collect()
    }
}
