pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod parser;

pub use config::Config;
pub use convert::{convert, Style};
pub use error::CaseError;
pub use parser::{parse, CaseStyle};

use serde::Serialize;

/// Result of segmenting one identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedCase {
    pub words: Vec<String>,
    pub case: CaseStyle,
    /// First separator character of the input, or empty.
    pub separator: String,
}
