use std::{io, path::PathBuf, result};

use crate::record::Platform;

/// Errors that can occur while indexing fonts or selecting family members.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse font {path}: {source}")]
    ReadFont {
        path: PathBuf,
        #[source]
        source: read_fonts::ReadError,
    },

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("{0}: file name does not follow the Noto naming scheme")]
    UnrecognizedFile(PathBuf),

    #[error("{path}: no ISO 15924 code for script name '{name}'")]
    UnknownScriptName { path: PathBuf, name: String },

    #[error("{0}: no family name record")]
    MissingFamilyName(PathBuf),

    #[error("unknown weight '{0}'")]
    UnknownWeight(String),

    #[error("unknown platform '{0}'")]
    UnknownPlatform(String),

    #[error("family {key} on {platform}: expected one Regular upright member, found {found}")]
    Representative { key: String, platform: Platform, found: usize },

    #[error("family {key} on {platform}: {count} members, expected 1, 2, 4 or 7")]
    MemberCount { key: String, platform: Platform, count: usize },
}

pub type Result<T> = result::Result<T, Error>;
