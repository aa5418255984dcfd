//! Likely scripts and script directionality.

use std::{collections::HashMap, fs::read_to_string, path::Path};

use crate::{
    error::{Error, Result},
    locale::normalize,
    xml::{descendants, with_document},
};

/// Default script and territory for a bare language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikelySubtags {
    pub language: String,
    pub script: String,
    pub territory: String,
}

impl LikelySubtags {
    fn new(language: &str, script: &str, territory: &str) -> Self {
        Self {
            language: language.to_string(),
            script: script.to_string(),
            territory: territory.to_string(),
        }
    }
}

/// Languages missing from `likelySubtags.xml` that still show up in the
/// territory data.
pub const CURATED_LIKELY_SUBTAGS: &[(&str, &str, &str)] = &[
    ("abr", "Latn", "GH"),
    ("abq", "Cyrl", "RU"),
    ("ada", "Latn", "GH"),
    ("ae", "Avst", "ZZ"),
    ("aeb", "Arab", "TN"),
    ("aii", "Syrc", "IQ"),
    ("ain", "Kana", "JP"),
    ("akk", "Xsux", "ZZ"),
    ("akz", "Latn", "US"),
    ("ale", "Latn", "US"),
    ("aln", "Latn", "XK"),
    ("an", "Latn", "ES"),
    ("anp", "Deva", "IN"),
    ("arc", "Armi", "ZZ"),
    ("aro", "Latn", "BO"),
    ("arp", "Latn", "US"),
    ("arq", "Arab", "DZ"),
    ("arw", "Latn", "GY"),
    ("ary", "Arab", "MA"),
    ("arz", "Arab", "EG"),
    ("avk", "Latn", "001"),
    ("azb", "Arab", "IR"),
    ("bar", "Latn", "AT"),
    ("bej", "Arab", "SD"),
    ("bci", "Latn", "CI"),
    ("bgc", "Deva", "IN"),
    ("bhi", "Deva", "IN"),
    ("bhk", "Latn", "PH"),
    ("bla", "Latn", "CA"),
    ("blt", "Tavt", "VN"),
    ("bpy", "Beng", "IN"),
    ("bqi", "Arab", "IR"),
    ("bsq", "Bass", "LR"),
    ("bzx", "Latn", "ML"),
    ("cad", "Latn", "US"),
    ("car", "Latn", "VE"),
    ("cay", "Latn", "CA"),
    ("chn", "Latn", "US"),
    ("cho", "Latn", "US"),
    ("chy", "Latn", "US"),
    ("cjs", "Cyrl", "RU"),
    ("ckt", "Cyrl", "RU"),
    ("cop", "Copt", "EG"),
    ("cps", "Latn", "PH"),
    ("crh", "Latn", "UA"),
    ("crs", "Latn", "SC"),
    ("ctd", "Latn", "MM"),
    ("dak", "Latn", "US"),
    ("dcc", "Arab", "IN"),
    ("del", "Latn", "US"),
    ("din", "Latn", "SS"),
    ("dng", "Cyrl", "KG"),
    ("dtp", "Latn", "MY"),
    ("egl", "Latn", "IT"),
    ("egy", "Egyp", "ZZ"),
    ("eka", "Egyp", "NG"),
    ("eky", "Kali", "TH"),
    ("esu", "Latn", "US"),
    ("ett", "Ital", "IT"),
    ("evn", "Latn", "CN"),
    ("ext", "Latn", "ES"),
    ("ffm", "Latn", "ML"),
    ("frc", "Latn", "US"),
    ("frr", "Latn", "DE"),
    ("frs", "Latn", "DE"),
    ("fud", "Latn", "WF"),
    ("fuq", "Latn", "NE"),
    ("fuv", "Latn", "NG"),
    ("gan", "Hans", "CN"),
    ("gay", "Latn", "ID"),
    ("gba", "Latn", "CF"),
    ("gbz", "Arab", "IR"),
    ("gld", "Cyrl", "RU"),
    ("gom", "Deva", "IN"),
    ("got", "Goth", "ZZ"),
    ("grb", "Latn", "LR"),
    ("grc", "Grek", "ZZ"),
    ("guc", "Latn", "CO"),
    ("gur", "Latn", "GH"),
    ("hai", "Latn", "CA"),
    ("hak", "Hant", "CN"),
    ("haz", "Arab", "AF"),
    ("hif", "Deva", "FJ"),
    ("hit", "Xsux", "ZZ"),
    ("hmd", "Plrd", "CN"),
    ("hmn", "Latn", "CN"),
    ("hnj", "Latn", "LA"),
    ("hno", "Arab", "PK"),
    ("hop", "Latn", "US"),
    ("hsn", "Hans", "CN"),
    ("hup", "Latn", "US"),
    ("hz", "Latn", "NA"),
    ("iba", "Latn", "MY"),
    ("ikt", "Latn", "CA"),
    ("izh", "Latn", "RU"),
    ("jam", "Latn", "JM"),
    ("jpr", "Hebr", "IL"),
    ("jrb", "Hebr", "IL"),
    ("jut", "Latn", "DK"),
    ("kac", "Latn", "MM"),
    ("kca", "Cyrl", "RU"),
    ("kfy", "Deva", "IN"),
    ("kjh", "Cyrl", "RU"),
    ("khn", "Deva", "IN"),
    ("kiu", "Latn", "TR"),
    ("kpy", "Cyrl", "RU"),
    ("kxm", "Thai", "TH"),
    ("laj", "Latn", "UG"),
    ("ljp", "Latn", "ID"),
    ("lrc", "Arab", "IR"),
    ("mfa", "Arab", "TH"),
    ("mtr", "Deva", "IN"),
    ("mwl", "Latn", "PT"),
    ("mwv", "Latn", "ID"),
    ("myx", "Latn", "UG"),
    ("ndc", "Latn", "MZ"),
    ("ngl", "Latn", "MZ"),
    ("noe", "Deva", "IN"),
    ("osa", "Latn", "US"),
    ("rom", "Latn", "RO"),
    ("sck", "Deva", "IN"),
    ("skr", "Arab", "PK"),
    ("sou", "Thai", "TH"),
    ("swv", "Deva", "IN"),
    ("uga", "Ugar", "ZZ"),
    ("vep", "Latn", "RU"),
    ("vmw", "Latn", "MZ"),
    ("wbr", "Deva", "IN"),
    ("wbq", "Telu", "IN"),
    ("wls", "Latn", "WF"),
    ("wtm", "Deva", "IN"),
    ("xnr", "Deva", "IN"),
    ("zdj", "Arab", "KM"),
];

/// Column of `scriptMetadata.txt` holding the RTL flag.
const RTL_FIELD: usize = 6;

/// Resolves likely scripts for languages and the directionality of scripts.
#[derive(Debug, Clone, Default)]
pub struct ScriptResolver {
    likely: HashMap<String, LikelySubtags>,
    rtl: HashMap<String, bool>,
}

impl ScriptResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `likelySubtags.xml` and `scriptMetadata.txt`, then apply the
    /// curated likely-subtag overrides.
    pub fn load(likely_subtags: &Path, script_metadata: &Path) -> Result<Self> {
        let mut resolver = Self::new();
        resolver.load_likely_subtags(likely_subtags)?;
        resolver.load_script_metadata(script_metadata)?;
        Ok(resolver.with_curated())
    }

    fn load_likely_subtags(&mut self, path: &Path) -> Result<()> {
        let entries = with_document(path, |doc| {
            descendants(doc.root_element(), "likelySubtag")
                .map(|tag| -> Result<(String, String)> {
                    let attr = |attribute: &'static str| {
                        tag.attribute(attribute).ok_or_else(|| Error::MissingAttribute {
                            path: path.to_path_buf(),
                            element: "likelySubtag",
                            attribute,
                        })
                    };
                    Ok((normalize(attr("from")?), attr("to")?.to_string()))
                })
                .collect::<Result<Vec<_>>>()
        })?;

        for (from, to) in entries {
            let mut parts = to.split('_');
            let language = parts.next().unwrap_or_default();
            let script = parts.next().unwrap_or_default();
            let territory = parts.next().unwrap_or_default();
            self.likely.insert(from, LikelySubtags::new(language, script, territory));
        }
        Ok(())
    }

    /// Parse the semicolon-separated script metadata table.
    fn load_script_metadata(&mut self, path: &Path) -> Result<()> {
        let text =
            read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        for (index, line) in text.lines().enumerate() {
            let content = line.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }
            let fields: Vec<&str> = content.split(';').map(str::trim).collect();
            if fields.len() <= RTL_FIELD {
                return Err(Error::MalformedLine {
                    path: path.to_path_buf(),
                    line: index + 1,
                    expected: RTL_FIELD + 1,
                });
            }
            self.rtl.insert(fields[0].to_string(), fields[RTL_FIELD] == "YES");
        }
        Ok(())
    }

    /// Add the curated likely subtags; they take precedence over CLDR.
    pub fn with_curated(mut self) -> Self {
        for (language, script, territory) in CURATED_LIKELY_SUBTAGS {
            self.insert_likely(LikelySubtags::new(language, script, territory));
        }
        self
    }

    pub fn insert_likely(&mut self, subtags: LikelySubtags) {
        self.likely.insert(subtags.language.clone(), subtags);
    }

    pub fn insert_direction(&mut self, script: &str, rtl: bool) {
        self.rtl.insert(script.to_string(), rtl);
    }

    pub fn likely_subtags(&self, language: &str) -> Result<&LikelySubtags> {
        self.likely.get(language).ok_or_else(|| Error::UnknownLanguage(language.to_string()))
    }

    /// Most likely script for a bare language code.
    pub fn likely_script(&self, language: &str) -> Result<&str> {
        self.likely_subtags(language).map(|subtags| subtags.script.as_str())
    }

    pub fn is_rtl(&self, script: &str) -> Result<bool> {
        self.rtl.get(script).copied().ok_or_else(|| Error::UnknownScript(script.to_string()))
    }
}

/// The script under which fonts for `script` are cataloged.
///
/// Kana-only text is set with the Japanese fonts.
pub fn font_script(script: &str) -> &str {
    match script {
        "Kana" => "Jpan",
        other => other,
    }
}
