//! Language, territory and parent-locale relationships from
//! `supplementalData.xml`.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
};

use log::debug;
use roxmltree::Node;

use crate::{
    error::{Error, Result},
    locale::{ParentLocales, normalize},
    xml::{children, descendants, with_document},
};

#[derive(Debug, Clone, Default)]
pub struct SupplementalData {
    /// Territories each language is used in.
    pub used_in_regions: BTreeMap<String, BTreeSet<String>>,
    /// Scripts each language is written in.
    pub written_in_scripts: BTreeMap<String, BTreeSet<String>>,
    /// Languages spoken in each territory, as `lang` or `lang-Script`.
    pub territory_info: BTreeMap<String, BTreeSet<String>>,
    pub parent_locales: ParentLocales,
}

fn required<'a>(
    node: Node<'a, '_>,
    path: &Path,
    element: &'static str,
    attribute: &'static str,
) -> Result<&'a str> {
    node.attribute(attribute).ok_or_else(|| Error::MissingAttribute {
        path: path.to_path_buf(),
        element,
        attribute,
    })
}

impl SupplementalData {
    pub fn load(path: &Path) -> Result<Self> {
        let path: PathBuf = path.to_path_buf();
        let mut data = with_document(&path, |doc| {
            let root = doc.root_element();
            let mut data = Self::default();

            for language in descendants(root, "languageData").flat_map(|n| children(n, "language"))
            {
                let lang = required(language, &path, "language", "type")?;
                if let Some(territories) = language.attribute("territories") {
                    data.used_in_regions
                        .entry(lang.to_string())
                        .or_default()
                        .extend(territories.split_whitespace().map(String::from));
                }
                if let Some(scripts) = language.attribute("scripts") {
                    data.written_in_scripts
                        .entry(lang.to_string())
                        .or_default()
                        .extend(scripts.split_whitespace().map(String::from));
                }
            }

            for territory in
                descendants(root, "territoryInfo").flat_map(|n| children(n, "territory"))
            {
                let code = required(territory, &path, "territory", "type")?;
                let languages = children(territory, "languagePopulation")
                    .map(|population| {
                        required(population, &path, "languagePopulation", "type").map(normalize)
                    })
                    .collect::<Result<BTreeSet<_>>>()?;
                if !languages.is_empty() {
                    data.territory_info.entry(code.to_string()).or_default().extend(languages);
                }
            }

            for entry in descendants(root, "parentLocale") {
                let parent = required(entry, &path, "parentLocale", "parent")?;
                let locales = required(entry, &path, "parentLocale", "locales")?;
                for locale in locales.split_whitespace() {
                    data.parent_locales.insert(locale, parent);
                }
            }

            Ok(data)
        })?;

        debug!(
            "Loaded {} languages, {} territories, {} parent locales",
            data.written_in_scripts.len(),
            data.territory_info.len(),
            data.parent_locales.len()
        );
        data.parent_locales = data.parent_locales.with_curated();
        Ok(data)
    }

    /// Every `lang` / `lang-Script` code spoken in some territory.
    pub fn all_territory_languages(&self) -> BTreeSet<String> {
        self.territory_info.values().flatten().cloned().collect()
    }
}
