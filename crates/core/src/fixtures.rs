//! A small on-disk Noto tree with in-memory CLDR tables, for unit tests.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs::{create_dir_all, write},
    ops::{Deref, DerefMut},
    path::Path,
};

use noto_cldr::{Cldr, CldrSource, EnglishNames, LikelySubtags, ParentLocales, ScriptResolver, SupplementalData};
use noto_font_catalog::{FontCatalog, FontIntrospector, Result, font_directories, parse_file_name};
use tempfile::TempDir;

use crate::context::WebsiteContext;

const FONT_FILES: &[&str] = &[
    "NotoSans-Regular.ttf",
    "NotoSans-Bold.ttf",
    "NotoNaskhArabic-Regular.ttf",
    "NotoKufiArabic-Regular.ttf",
];

/// Reports a fixed coverage and derives family names from file names.
pub struct StubIntrospector;

impl FontIntrospector for StubIntrospector {
    fn coverage(&self, _path: &Path) -> Result<BTreeSet<u32>> {
        Ok(BTreeSet::from([0x20, 0x61, 0x62, 0x63]))
    }

    fn family_name(&self, path: &Path) -> Result<String> {
        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        let parsed = parse_file_name(file_name).unwrap();
        if parsed.script.is_empty() {
            Ok(parsed.display_family())
        } else {
            Ok(format!("{} {}", parsed.display_family(), parsed.script))
        }
    }
}

pub struct Fixture {
    _dir: TempDir,
    ctx: WebsiteContext,
}

impl Deref for Fixture {
    type Target = WebsiteContext;

    fn deref(&self) -> &WebsiteContext {
        &self.ctx
    }
}

impl DerefMut for Fixture {
    fn deref_mut(&mut self) -> &mut WebsiteContext {
        &mut self.ctx
    }
}

fn write_file(path: &Path, contents: &str) {
    create_dir_all(path.parent().unwrap()).unwrap();
    write(path, contents).unwrap();
}

fn pairs(table: &[(&str, &str)]) -> Vec<(String, String)> {
    table.iter().map(|(code, name)| (code.to_string(), name.to_string())).collect()
}

fn cldr(root: &Path) -> Cldr {
    write_file(
        &root.join("common/main/sr.xml"),
        r#"<?xml version="1.0" encoding="UTF-8" ?>
<ldml>
    <localeDisplayNames>
        <languages><language type="sr">српски</language></languages>
    </localeDisplayNames>
    <characters><exemplarCharacters>[а-в]</exemplarCharacters></characters>
</ldml>"#,
    );

    let names = EnglishNames::from_tables(
        pairs(&[
            ("en", "English"),
            ("sr", "Serbian"),
            ("ur", "Urdu"),
            ("dv", "Divehi"),
            ("hy", "Armenian"),
        ]),
        pairs(&[
            ("Latn", "Latin"),
            ("Cyrl", "Cyrillic"),
            ("Arab", "Arabic"),
            ("Thaa", "Thaana"),
            ("Armn", "Armenian"),
        ]),
        pairs(&[("US", "United States"), ("RS", "Serbia"), ("PK", "Pakistan"), ("MV", "Maldives")]),
    );

    let mut parent_locales = ParentLocales::new();
    parent_locales.insert("sr-Latn", "root");
    let territory_info = [
        ("US", &["en"][..]),
        ("RS", &["sr", "sr-Latn"]),
        ("PK", &["ur", "en"]),
        ("MV", &["dv"]),
    ]
    .into_iter()
    .map(|(territory, langs)| {
        (territory.to_string(), langs.iter().map(|lang| lang.to_string()).collect())
    })
    .collect();
    let supplemental = SupplementalData { territory_info, parent_locales, ..Default::default() };

    let mut scripts = ScriptResolver::new();
    for (language, script, territory) in
        [("en", "Latn", "US"), ("sr", "Cyrl", "RS"), ("ur", "Arab", "PK"), ("dv", "Thaa", "MV")]
    {
        scripts.insert_likely(LikelySubtags {
            language: language.to_string(),
            script: script.to_string(),
            territory: territory.to_string(),
        });
    }
    for (script, rtl) in [("Latn", false), ("Cyrl", false), ("Arab", true), ("Thaa", true)] {
        scripts.insert_direction(script, rtl);
    }

    Cldr { names, supplemental, scripts, source: CldrSource::new(root) }
}

/// Fonts in both hint directories, an empty CJK directory, two sample
/// texts, and CLDR data for en, sr, sr-Latn, ur and dv.
pub fn context() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let font_dir = root.join("fonts/individual");
    for hint in ["hinted", "unhinted"] {
        for name in FONT_FILES {
            write_file(&font_dir.join(hint).join(name), name);
        }
    }
    let cjk_dir = root.join("third_party/noto_cjk");
    create_dir_all(&cjk_dir).unwrap();

    let sample_text_dir = root.join("sample_texts");
    write_file(&sample_text_dir.join("en-Latn.txt"), "Hello\n");
    write_file(&sample_text_dir.join("und-Arab.txt"), "ا ب\n");

    let introspector = StubIntrospector;
    let catalog = FontCatalog::index(&font_directories(&font_dir, &cjk_dir), &introspector).unwrap();

    let lat_long = BTreeMap::from([
        ("US".to_string(), (38.0, -97.0)),
        ("RS".to_string(), (44.0, 21.0)),
        ("PK".to_string(), (30.375321, 69.345116)),
        ("MV".to_string(), (3.202778, 73.22068)),
    ]);

    let ctx = WebsiteContext {
        cldr: cldr(&root.join("cldr")),
        catalog,
        lat_long,
        sample_text_dir,
        introspector: Box::new(introspector),
    };
    Fixture { _dir: dir, ctx }
}
