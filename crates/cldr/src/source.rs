//! Per-locale CLDR documents with memoized exemplar and name lookups.

use std::{
    cell::RefCell,
    collections::HashMap,
    path::{Path, PathBuf},
};

use log::{debug, warn};

use crate::{
    error::Result,
    exemplar,
    locale::{ParentLocales, normalize},
    xml::{children, descendants, find, with_optional_document},
};

/// Partitions searched for exemplar characters, in priority order.
pub const EXEMPLAR_PARTITIONS: &[&str] = &["common", "seed", "exemplars"];

/// Partitions searched for native language names, in priority order.
pub const NAME_PARTITIONS: &[&str] = &["common", "seed"];

/// Native names CLDR lacks or gets wrong.
pub const HARD_CODED_NATIVE_NAMES: &[(&str, &str)] = &[("mn-Mong", "ᠮᠣᠨᠭᠭᠣᠯ ᠬᠡᠯᠡ")];

/// A CLDR checkout rooted at `root`.
///
/// Every per-file parse is memoized, so walking the fallback chains of many
/// sibling locales reads each ancestor document once.
#[derive(Debug)]
pub struct CldrSource {
    root: PathBuf,
    exemplar_cache: RefCell<HashMap<PathBuf, Option<Vec<String>>>>,
    language_name_cache: RefCell<HashMap<(String, PathBuf), Option<String>>>,
}

impl CldrSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exemplar_cache: RefCell::default(),
            language_name_cache: RefCell::default(),
        }
    }

    /// Path of a locale document, relative to the CLDR root.
    pub fn main_file(partition: &str, locale: &str) -> PathBuf {
        Path::new(partition).join("main").join(format!("{}.xml", locale.replace('-', "_")))
    }

    /// Exemplar units declared by one document.
    ///
    /// A missing document, a document without a main exemplar set, and a
    /// malformed exemplar string all yield `None`.
    pub fn exemplar_from_file(&self, relative: &Path) -> Result<Option<Vec<String>>> {
        if let Some(cached) = self.exemplar_cache.borrow().get(relative) {
            return Ok(cached.clone());
        }

        let path = self.root.join(relative);
        let exemplar = with_optional_document(&path, |doc| {
            let Some(text) = descendants(doc.root_element(), "exemplarCharacters")
                .find(|tag| tag.attribute("type").is_none())
                .and_then(|tag| tag.text())
            else {
                return Ok(None);
            };
            match exemplar::parse(text) {
                Ok(units) => Ok(Some(units)),
                Err(e) => {
                    warn!("{}: ignoring exemplar characters: {e}", relative.display());
                    Ok(None)
                }
            }
        })?
        .flatten();

        self.exemplar_cache.borrow_mut().insert(relative.to_path_buf(), exemplar.clone());
        Ok(exemplar)
    }

    /// Exemplar units for `language-script`, inherited through the fallback
    /// chain.
    pub fn exemplar(
        &self,
        parents: &ParentLocales,
        language: &str,
        script: &str,
    ) -> Result<Option<Vec<String>>> {
        let locale = format!("{language}-{script}");
        for ancestor in parents.resolve_chain(&locale).lookup_locales() {
            for partition in EXEMPLAR_PARTITIONS {
                let file = Self::main_file(partition, &ancestor);
                if let Some(units) = self.exemplar_from_file(&file)?
                    && !units.is_empty()
                {
                    debug!("Exemplar for {locale} found in {}", file.display());
                    return Ok(Some(units));
                }
            }
        }
        Ok(None)
    }

    /// Name of `language` as given in one document's `<languages>` block.
    pub fn language_name_from_file(&self, language: &str, relative: &Path) -> Result<Option<String>> {
        let key = (language.to_string(), relative.to_path_buf());
        if let Some(cached) = self.language_name_cache.borrow().get(&key) {
            return Ok(cached.clone());
        }

        let path = self.root.join(relative);
        let name = with_optional_document(&path, |doc| {
            Ok(find(doc.root_element(), "languages").and_then(|languages| {
                children(languages, "language")
                    .find(|tag| tag.attribute("type").is_some_and(|t| normalize(t) == language))
                    .and_then(|tag| tag.text())
                    .map(String::from)
            }))
        })?
        .flatten();

        self.language_name_cache.borrow_mut().insert(key, name.clone());
        Ok(name)
    }

    /// Name of `lang_scr` in its own locale.
    ///
    /// At each step of the fallback chain, each partition is asked for the
    /// full code and then for the bare language.
    pub fn native_language_name(
        &self,
        parents: &ParentLocales,
        lang_scr: &str,
    ) -> Result<Option<String>> {
        if let Some((_, name)) = HARD_CODED_NATIVE_NAMES.iter().find(|(code, _)| *code == lang_scr) {
            return Ok(Some(name.to_string()));
        }

        let language = lang_scr.split('-').next().unwrap_or(lang_scr);
        for ancestor in parents.resolve_chain(lang_scr).lookup_locales() {
            for partition in NAME_PARTITIONS {
                let file = Self::main_file(partition, &ancestor);
                for wanted in [lang_scr, language] {
                    if let Some(name) = self.language_name_from_file(wanted, &file)?
                        && !name.is_empty()
                    {
                        return Ok(Some(name));
                    }
                }
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir_all, write};

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn ldml(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" ?>
<!DOCTYPE ldml SYSTEM "../../common/dtd/ldml.dtd">
<ldml>{body}</ldml>
"#
        )
    }

    fn write_locale(dir: &TempDir, partition: &str, locale: &str, body: &str) -> PathBuf {
        let path = dir.path().join(CldrSource::main_file(partition, locale));
        create_dir_all(path.parent().unwrap()).unwrap();
        write(&path, ldml(body)).unwrap();
        path
    }

    #[test]
    fn test_main_file() {
        assert_eq!(CldrSource::main_file("seed", "pa-Arab"), Path::new("seed/main/pa_Arab.xml"));
    }

    #[test]
    fn test_exemplar_inherited_from_language() {
        let dir = tempfile::tempdir().unwrap();
        write_locale(
            &dir,
            "common",
            "sr",
            r#"<characters>
                <exemplarCharacters type="auxiliary">[q w]</exemplarCharacters>
                <exemplarCharacters>[а б в]</exemplarCharacters>
            </characters>"#,
        );
        let source = CldrSource::new(dir.path());
        let parents = ParentLocales::new();

        let exemplar = source.exemplar(&parents, "sr", "Cyrl").unwrap();
        assert_eq!(exemplar.unwrap(), ["а", "б", "в"]);
    }

    #[test]
    fn test_exemplar_partition_priority() {
        let dir = tempfile::tempdir().unwrap();
        write_locale(&dir, "seed", "xx", "<characters><exemplarCharacters>[s]</exemplarCharacters></characters>");
        write_locale(&dir, "exemplars", "xx", "<characters><exemplarCharacters>[e]</exemplarCharacters></characters>");
        let source = CldrSource::new(dir.path());

        let exemplar = source.exemplar(&ParentLocales::new(), "xx", "Latn").unwrap();
        assert_eq!(exemplar.unwrap(), ["s"]);
    }

    #[test]
    fn test_malformed_exemplar_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        write_locale(&dir, "common", "xx", "<characters><exemplarCharacters>[{ab}-c]</exemplarCharacters></characters>");
        let source = CldrSource::new(dir.path());

        assert_eq!(source.exemplar(&ParentLocales::new(), "xx", "Latn").unwrap(), None);
    }

    #[test]
    fn test_exemplar_is_memoized() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_locale(
            &dir,
            "common",
            "xx",
            "<characters><exemplarCharacters>[a]</exemplarCharacters></characters>",
        );
        let source = CldrSource::new(dir.path());
        let file = CldrSource::main_file("common", "xx");
        assert_eq!(source.exemplar_from_file(&file).unwrap().unwrap(), ["a"]);

        // A second read must come from the cache, not the (now broken) file.
        write(&path, "not xml").unwrap();
        assert_eq!(source.exemplar_from_file(&file).unwrap().unwrap(), ["a"]);
    }

    #[test]
    fn test_native_name() {
        let dir = tempfile::tempdir().unwrap();
        write_locale(
            &dir,
            "common",
            "pa",
            r#"<localeDisplayNames><languages>
                <language type="pa">ਪੰਜਾਬੀ</language>
            </languages></localeDisplayNames>"#,
        );
        write_locale(
            &dir,
            "common",
            "pa_Arab",
            r#"<localeDisplayNames><languages>
                <language type="pa">پنجابی</language>
            </languages></localeDisplayNames>"#,
        );
        let source = CldrSource::new(dir.path());
        let mut parents = ParentLocales::new();
        parents.insert("pa_Arab", "root");

        assert_eq!(source.native_language_name(&parents, "pa").unwrap().unwrap(), "ਪੰਜਾਬੀ");
        assert_eq!(source.native_language_name(&parents, "pa-Arab").unwrap().unwrap(), "پنجابی");
        assert_eq!(source.native_language_name(&parents, "qq").unwrap(), None);
    }

    #[test]
    fn test_hard_coded_native_name() {
        let source = CldrSource::new("/nonexistent");
        let name = source.native_language_name(&ParentLocales::new(), "mn-Mong").unwrap();
        assert_eq!(name.as_deref(), Some("ᠮᠣᠨᠭᠭᠣᠯ ᠬᠡᠯᠡ"));
    }
}
