//! Constants describing the `.def` file format.

/// Default file extension for interop definition files
pub const DEF_EXT: &str = "def";

/// Content of the line separating the two halves of a file
pub const DELIMITER: &str = "---";

/// Short format name used by editor integrations
pub const FORMAT_NAME: &str = "KND";

/// Human readable format description
pub const FORMAT_DESCRIPTION: &str = "Definitions file for Kotlin/Native C interop";
