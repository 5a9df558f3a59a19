//! Syntax layer: the parsed tree of a definition file and the contracts
//! external analyzers use to work on its two halves.

mod escaper;
mod file;
mod host;
mod injection;
mod line_index;
mod tree;

pub use escaper::HostEscaper;
pub use file::{
    DefFile, get_extension, load_and_parse, load_file, parse_content, parse_files,
    validate_extension,
};
pub use injection::{HostLanguage, InjectionPlace, LanguageRegistry};
pub use line_index::LineIndex;
pub use tree::{NodeHandle, SyntaxTree};
