//! Error types for CLDR lookups.

use std::{io, path::PathBuf, result};

/// Malformed exemplar notation.
///
/// These are local to one locale file: the caller treats the exemplar as
/// absent and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExemplarError {
    #[error("exemplar string must start with '['")]
    MissingOpenBracket,

    #[error("escape at offset {offset} has {digits} hex digits, expected 4 to 6")]
    HexDigitCount { offset: usize, digits: usize },

    #[error("escape at offset {offset} is not a valid code point")]
    InvalidCodePoint { offset: usize },

    #[error("dangling backslash at end of input")]
    DanglingEscape,

    #[error("unexpected '{found}' at offset {offset}")]
    UnexpectedChar { offset: usize, found: char },

    #[error("cluster starting at offset {offset} is never closed")]
    UnterminatedCluster { offset: usize },

    #[error("range at offset {offset} has no single-character left operand")]
    RangeWithoutStart { offset: usize },

    #[error("range at offset {offset} follows the multi-character unit {previous:?}")]
    RangeAfterCluster { offset: usize, previous: String },

    #[error("range at offset {offset} has no right operand")]
    RangeWithoutEnd { offset: usize },
}

/// Errors that can occur while loading or querying CLDR data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Xml {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("{path}: missing element <{element}>")]
    MissingElement { path: PathBuf, element: &'static str },

    #[error("{path}: <{element}> has no '{attribute}' attribute")]
    MissingAttribute {
        path: PathBuf,
        element: &'static str,
        attribute: &'static str,
    },

    #[error("{path}:{line}: expected at least {expected} fields")]
    MalformedLine { path: PathBuf, line: usize, expected: usize },

    #[error("no likely script known for language '{0}'")]
    UnknownLanguage(String),

    #[error("script '{0}' is missing from the script metadata table")]
    UnknownScript(String),

    #[error("no English name for '{0}'")]
    MissingName(String),
}

pub type Result<T> = result::Result<T, Error>;
