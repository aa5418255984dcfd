//! Reproducible zip packages of font binaries.
//!
//! A package name is derived from the major name, the target platform and
//! the hinting of its members, so two families or platforms can land on the
//! same archive. [`PackageAssembler`] remembers what each archive holds and
//! refuses to let one name stand for two different member sets, or one set
//! appear under two names.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    fs::{File, metadata},
    io::copy,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::info;
use noto_font_catalog::{FontRecord, HintStatus, Platform};
use zip::{CompressionMethod, DateTime, ZipWriter, write::SimpleFileOptions};

use crate::{config::COMPREHENSIVE_MIN_MEMBERS, dataset::PackageRef};

#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    #[error("package {major} has no members")]
    Empty { major: String },

    #[error("package {major} contains {basename} more than once")]
    DuplicateBasename { major: String, basename: String },

    #[error("package {major} mixes hinted and unhinted fonts but has only {count} members")]
    MixedHinting { major: String, count: usize },

    #[error("package {name} was already written with different members")]
    PackageConflict { name: String },

    #[error("package {name} would duplicate the contents of {existing}")]
    DuplicateContents { name: String, existing: String },
}

/// Hinting shared by a package's members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintComposition {
    Hinted,
    Unhinted,
    Mixed,
}

impl HintComposition {
    pub fn of(members: &[&FontRecord]) -> Self {
        let has = |status| members.iter().any(|font| font.hint_status == status);
        match (has(HintStatus::Hinted), has(HintStatus::Unhinted)) {
            (true, false) => Self::Hinted,
            (false, true) => Self::Unhinted,
            _ => Self::Mixed,
        }
    }
}

/// Archive basename for `members` of `major` on `platform`.
pub fn package_name(
    major: &str,
    platform: Platform,
    members: &[&FontRecord],
) -> Result<String, PackageError> {
    if members.is_empty() {
        return Err(PackageError::Empty { major: major.to_string() });
    }
    let mut basenames = HashSet::new();
    for font in members {
        if !basenames.insert(font.file_name()) {
            return Err(PackageError::DuplicateBasename {
                major: major.to_string(),
                basename: font.file_name().to_string(),
            });
        }
    }

    let hinting = HintComposition::of(members);
    let suffix = match platform {
        Platform::Other => match hinting {
            HintComposition::Mixed if members.len() > COMPREHENSIVE_MIN_MEMBERS => "",
            HintComposition::Mixed => {
                return Err(PackageError::MixedHinting {
                    major: major.to_string(),
                    count: members.len(),
                });
            }
            HintComposition::Unhinted => "-unhinted",
            HintComposition::Hinted => "-hinted",
        },
        Platform::Windows => match hinting {
            HintComposition::Unhinted => "-unhinted",
            _ if members.iter().any(|font| font.platform == Some(Platform::Windows)) => "-windows",
            _ => "-hinted",
        },
        Platform::Linux => {
            if members.len() > COMPREHENSIVE_MIN_MEMBERS || hinting != HintComposition::Unhinted {
                "-hinted"
            } else {
                "-unhinted"
            }
        }
    };
    Ok(format!("{major}{suffix}.zip"))
}

/// Writes package archives into one directory, once per name.
#[derive(Debug)]
pub struct PackageAssembler {
    dir: PathBuf,
    produced: BTreeMap<String, BTreeSet<PathBuf>>,
}

impl PackageAssembler {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), produced: BTreeMap::new() }
    }

    /// Names of the archives written so far.
    pub fn produced(&self) -> impl Iterator<Item = &str> {
        self.produced.keys().map(String::as_str)
    }

    /// Name the package, write it if it is new, and report its size.
    pub fn assemble(
        &mut self,
        major: &str,
        platform: Platform,
        members: &[&FontRecord],
    ) -> Result<PackageRef> {
        let name = package_name(major, platform, members)?;
        let contents: BTreeSet<PathBuf> = members.iter().map(|font| font.path.clone()).collect();
        let path = self.dir.join(&name);

        match self.produced.get(&name) {
            Some(existing) if *existing == contents => {}
            Some(_) => return Err(PackageError::PackageConflict { name }.into()),
            None => {
                if let Some((existing, _)) = self.produced.iter().find(|(_, set)| **set == contents)
                {
                    return Err(PackageError::DuplicateContents {
                        name,
                        existing: existing.clone(),
                    }
                    .into());
                }
                write_zip(&path, members)?;
                info!("Wrote {name} ({} fonts)", members.len());
                self.produced.insert(name.clone(), contents);
            }
        }

        let size = metadata(&path)
            .with_context(|| format!("Failed to stat {}", path.display()))?
            .len();
        Ok(PackageRef { url: name, size })
    }
}

/// Deflate `members` into `path`, flat and sorted by basename, with fixed
/// timestamps.
fn write_zip(path: &Path, members: &[&FontRecord]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let mut sorted = members.to_vec();
    sorted.sort_by_key(|font| font.file_name());
    for font in sorted {
        zip.start_file(font.file_name(), options)
            .with_context(|| format!("Failed to add {} to {}", font.file_name(), path.display()))?;
        let mut source = File::open(&font.path)
            .with_context(|| format!("Failed to open {}", font.path.display()))?;
        copy(&mut source, &mut zip)
            .with_context(|| format!("Failed to compress {}", font.path.display()))?;
    }
    zip.finish().with_context(|| format!("Failed to finish {}", path.display()))?;
    Ok(())
}
