//! Reading character coverage and names out of font binaries.

use std::{collections::BTreeSet, fs::read, path::Path};

use skrifa::{FontRef, MetadataProvider, string::StringId};

use crate::error::{Error, Result};

/// Source of per-font facts the catalog cannot derive from file names.
///
/// Implementations are shared across the coverage worker threads.
pub trait FontIntrospector: Sync {
    /// Every code point the font's character map covers.
    fn coverage(&self, path: &Path) -> Result<BTreeSet<u32>>;

    /// The family name record (name ID 1).
    fn family_name(&self, path: &Path) -> Result<String>;
}

/// Introspector backed by `skrifa`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkrifaIntrospector;

fn load(path: &Path) -> Result<Vec<u8>> {
    read(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })
}

fn parse<'a>(path: &Path, data: &'a [u8]) -> Result<FontRef<'a>> {
    FontRef::new(data).map_err(|source| Error::ReadFont { path: path.to_path_buf(), source })
}

impl FontIntrospector for SkrifaIntrospector {
    fn coverage(&self, path: &Path) -> Result<BTreeSet<u32>> {
        let data = load(path)?;
        let font = parse(path, &data)?;
        Ok(font.charmap().mappings().map(|(codepoint, _)| codepoint).collect())
    }

    fn family_name(&self, path: &Path) -> Result<String> {
        let data = load(path)?;
        let font = parse(path, &data)?;
        font.localized_strings(StringId::FAMILY_NAME)
            .english_or_first()
            .map(|name| name.to_string())
            .ok_or_else(|| Error::MissingFamilyName(path.to_path_buf()))
    }
}
