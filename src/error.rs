//! Error types for configuration and translation.

use thiserror::Error;

/// Result type for translation operations.
pub type Result<T> = std::result::Result<T, TranslateError>;

/// Fatal diagnostics raised while translating a source file.
///
/// Every variant aborts the translation; no partial output is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// End of input reached inside a narrative region.
    #[error("You haven't closed your last narrative comment")]
    UnclosedNarrative,

    /// A narrative opener found inside an already open narrative.
    #[error("Don't open narrative comments inside narrative comments at line {line}")]
    NestedNarrativeOpen { line: usize },

    /// A narrative closer found at top level before any narrative was opened.
    #[error("Don't insert a close narrative comment at the start of your program at line {line}")]
    StrayNarrativeClose { line: usize },

    /// The flattener met a token the parser should never have let through.
    #[error("{detail} at line {line}")]
    InternalInvariant { line: usize, detail: &'static str },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Invalid translator configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("narrative delimiters must not be empty")]
    EmptyDelimiter,

    #[error("narrative delimiters must differ (both are \"{0}\")")]
    IdenticalDelimiters(String),

    #[error("code indentation must be at least 1")]
    ZeroIndent,

    #[error("{name} is not a supported language (supported: {known})")]
    UnknownLanguage { name: String, known: String },
}
