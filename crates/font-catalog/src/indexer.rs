//! Directory scanning and file-name decoding.

use std::{
    collections::BTreeSet,
    io,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use glob::{Pattern, glob};
use log::{debug, info};
use rayon::prelude::*;
use regex::Regex;

use crate::{
    error::{Error, Result},
    introspect::FontIntrospector,
    record::{Coverage, FontRecord, HintStatus, Platform, Style, Weight, family_key, is_single_font},
    script_codes::{UNIFIED_CJK, to_four_letter},
};

static FONT_FILE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(NotoSans|NotoSerif|NotoNaskh|NotoKufi|Arimo|Cousine|Tinos)",
        r"(.*?)",
        r"(UI|Eastern|Estrangela|Western)?",
        r"-",
        r"(|Black|Bold|DemiLight|Light|Medium|Regular|Thin)",
        r"(Italic)?",
        r"(-Windows)?",
        r"\.[ot]t[cf]$",
    ))
    .expect("font file name pattern is valid")
});

/// Families matched by the naming scheme but not published on the site.
const SKIPPED_FAMILIES: &[&str] = &["Arimo", "Cousine", "Tinos"];

/// Scripts covered by the fonts without a script in their name.
pub const LGC_SCRIPTS: &[&str] = &["Latn", "Grek", "Cyrl"];

/// Attributes decoded from a font file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Raw family token, e.g. `NotoSans`.
    pub family: String,
    /// Raw script token, e.g. `Arabic`, or empty.
    pub script: String,
    pub variant: Option<String>,
    pub weight: Weight,
    pub style: Style,
    pub platform: Option<Platform>,
}

impl ParsedName {
    /// `NotoSans` → `Noto Sans`.
    pub fn display_family(&self) -> String {
        match self.family.strip_prefix("Noto") {
            Some(rest) => format!("Noto {rest}"),
            None => self.family.clone(),
        }
    }

    pub fn is_published(&self) -> bool {
        !SKIPPED_FAMILIES.contains(&self.family.as_str())
    }
}

/// Decode a file name; `None` when it does not follow the naming scheme.
pub fn parse_file_name(file_name: &str) -> Option<ParsedName> {
    let captures = FONT_FILE_NAME.captures(file_name)?;
    let group = |i| captures.get(i).map(|m| m.as_str());
    Some(ParsedName {
        family: group(1)?.to_string(),
        script: group(2).unwrap_or_default().to_string(),
        variant: group(3).map(String::from),
        weight: group(4).unwrap_or_default().parse().ok()?,
        style: if group(5).is_some() { Style::Italic } else { Style::Upright },
        platform: group(6).map(|_| Platform::Windows),
    })
}

/// Files that may sit next to fonts without following the naming scheme.
pub fn is_companion_file(file_name: &str) -> bool {
    file_name.ends_with(".ttx")
        || file_name.starts_with("README.")
        || matches!(file_name, "COPYING" | "LICENSE")
}

/// A directory of font binaries sharing one hint status.
#[derive(Debug, Clone)]
pub struct FontDirectory {
    pub path: PathBuf,
    pub hint_status: HintStatus,
}

impl FontDirectory {
    pub fn new(path: impl Into<PathBuf>, hint_status: HintStatus) -> Self {
        Self { path: path.into(), hint_status }
    }

    /// Regular files directly inside the directory, sorted by path.
    fn files(&self) -> Result<Vec<PathBuf>> {
        if !self.path.is_dir() {
            return Err(Error::Io {
                path: self.path.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "font directory not found"),
            });
        }
        let dir = self.path.to_str().ok_or_else(|| Error::Io {
            path: self.path.clone(),
            source: io::Error::new(io::ErrorKind::InvalidData, "path is not valid UTF-8"),
        })?;
        let pattern = format!("{}/*", Pattern::escape(dir));
        let mut files = glob(&pattern)?
            .map(|entry| {
                entry.map_err(|err| Error::Io { path: err.path().to_path_buf(), source: err.into_error() })
            })
            .collect::<Result<Vec<PathBuf>>>()?;
        files.retain(|path| path.is_file());
        files.sort();
        Ok(files)
    }
}

/// A record waiting for its coverage.
struct Pending {
    path: PathBuf,
    hint_status: HintStatus,
    name: ParsedName,
    script: &'static str,
}

/// Every published Noto font binary, with the scripts they cover.
#[derive(Debug, Clone, Default)]
pub struct FontCatalog {
    fonts: Vec<FontRecord>,
    supported_scripts: BTreeSet<String>,
}

impl FontCatalog {
    /// Scan `directories`, decode every file name, and read coverage for
    /// the single-font binaries in parallel.
    pub fn index(
        directories: &[FontDirectory],
        introspector: &dyn FontIntrospector,
    ) -> Result<Self> {
        let mut supported_scripts = BTreeSet::new();
        let mut pending = Vec::new();

        for directory in directories {
            for path in directory.files()? {
                let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
                let Some(name) = parse_file_name(file_name) else {
                    if is_companion_file(file_name) {
                        continue;
                    }
                    return Err(Error::UnrecognizedFile(path));
                };
                if !name.is_published() {
                    debug!("Skipping {file_name}");
                    continue;
                }

                let script = to_four_letter(&name.script).ok_or_else(|| {
                    Error::UnknownScriptName { path: path.clone(), name: name.script.clone() }
                })?;
                if script.is_empty() {
                    supported_scripts.extend(LGC_SCRIPTS.iter().map(|s| s.to_string()));
                } else {
                    supported_scripts.insert(script.to_string());
                }
                if script == UNIFIED_CJK {
                    continue;
                }

                pending.push(Pending { path, hint_status: directory.hint_status, name, script });
            }
        }

        let fonts = pending
            .into_par_iter()
            .map(|p| -> Result<FontRecord> {
                let coverage = if is_single_font(&p.path) {
                    Coverage::Computed(introspector.coverage(&p.path)?)
                } else {
                    Coverage::Unavailable
                };
                let family = p.name.display_family();
                Ok(FontRecord {
                    key: family_key(&family, p.script, p.name.variant.as_deref()),
                    path: p.path,
                    hint_status: p.hint_status,
                    family,
                    script: p.script.to_string(),
                    variant: p.name.variant,
                    weight: p.name.weight,
                    style: p.name.style,
                    platform: p.name.platform,
                    coverage,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        info!("Indexed {} fonts covering {} scripts", fonts.len(), supported_scripts.len());
        Ok(Self { fonts, supported_scripts })
    }

    pub fn fonts(&self) -> &[FontRecord] {
        &self.fonts
    }

    pub fn supported_scripts(&self) -> &BTreeSet<String> {
        &self.supported_scripts
    }

    pub fn supports_script(&self, script: &str) -> bool {
        self.supported_scripts.contains(script)
    }

    /// Every family key, sorted.
    pub fn keys(&self) -> BTreeSet<&str> {
        self.fonts.iter().map(|font| font.key.as_str()).collect()
    }

    /// Keys of the families whose script is exactly `script`.
    ///
    /// The empty script selects the Latin/Greek/Cyrillic families.
    pub fn keys_for_script(&self, script: &str) -> BTreeSet<&str> {
        self.fonts
            .iter()
            .filter(|font| font.script == script)
            .map(|font| font.key.as_str())
            .collect()
    }

    /// Records sharing `key`.
    pub fn family(&self, key: &str) -> impl Iterator<Item = &FontRecord> {
        self.fonts.iter().filter(move |font| font.key == key)
    }
}

/// Script value the catalog stores for fonts covering `script`.
pub fn catalog_script(script: &str) -> &str {
    if LGC_SCRIPTS.contains(&script) { "" } else { script }
}

pub fn font_directories(font_dir: &Path, cjk_dir: &Path) -> Vec<FontDirectory> {
    vec![
        FontDirectory::new(font_dir.join("hinted"), HintStatus::Hinted),
        FontDirectory::new(font_dir.join("unhinted"), HintStatus::Unhinted),
        FontDirectory::new(cjk_dir, HintStatus::Hinted),
    ]
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir_all, write};

    use pretty_assertions::assert_eq;

    use super::*;

    /// Reports a fixed charset without touching the file.
    struct FixedIntrospector;

    impl FontIntrospector for FixedIntrospector {
        fn coverage(&self, _path: &Path) -> Result<BTreeSet<u32>> {
            Ok([0x41, 0x42].into())
        }

        fn family_name(&self, _path: &Path) -> Result<String> {
            Ok("Noto Sans".to_string())
        }
    }

    #[test]
    fn test_parse_plain_name() {
        let parsed = parse_file_name("NotoSans-Regular.ttf").unwrap();
        assert_eq!(
            parsed,
            ParsedName {
                family: "NotoSans".to_string(),
                script: String::new(),
                variant: None,
                weight: Weight::Regular,
                style: Style::Upright,
                platform: None,
            }
        );
        assert_eq!(parsed.display_family(), "Noto Sans");
    }

    #[test]
    fn test_parse_full_name() {
        let parsed = parse_file_name("NotoSansSyriacEastern-BoldItalic-Windows.ttf").unwrap();
        assert_eq!(parsed.script, "Syriac");
        assert_eq!(parsed.variant.as_deref(), Some("Eastern"));
        assert_eq!(parsed.weight, Weight::Bold);
        assert_eq!(parsed.style, Style::Italic);
        assert_eq!(parsed.platform, Some(Platform::Windows));
    }

    #[test]
    fn test_parse_empty_weight() {
        let parsed = parse_file_name("NotoSerif-Italic.ttf").unwrap();
        assert_eq!(parsed.weight, Weight::Regular);
        assert_eq!(parsed.style, Style::Italic);
    }

    #[test]
    fn test_parse_ui_variant() {
        let parsed = parse_file_name("NotoSansArabicUI-Regular.ttf").unwrap();
        assert_eq!(parsed.script, "Arabic");
        assert_eq!(parsed.variant.as_deref(), Some("UI"));
    }

    #[test]
    fn test_parse_collection() {
        let parsed = parse_file_name("NotoSansCJK-Bold.ttc").unwrap();
        assert_eq!(parsed.script, "CJK");
    }

    #[test]
    fn test_unmatched_names() {
        assert_eq!(parse_file_name("NotoSans-Regular.ttx"), None);
        assert_eq!(parse_file_name("Roboto-Regular.ttf"), None);
        assert_eq!(parse_file_name("NotoSans-Heavy.ttf"), None);
        assert!(is_companion_file("README.md"));
        assert!(is_companion_file("LICENSE"));
        assert!(!is_companion_file("notes.txt"));
    }

    #[test]
    fn test_catalog_script() {
        assert_eq!(catalog_script("Latn"), "");
        assert_eq!(catalog_script("Cyrl"), "");
        assert_eq!(catalog_script("Arab"), "Arab");
    }

    fn touch(dir: &Path, names: &[&str]) {
        create_dir_all(dir).unwrap();
        for name in names {
            write(dir.join(name), b"").unwrap();
        }
    }

    #[test]
    fn test_index_directories() {
        let root = tempfile::tempdir().unwrap();
        let fonts = root.path().join("fonts");
        let cjk = root.path().join("cjk");
        touch(
            &fonts.join("hinted"),
            &["NotoSans-Regular.ttf", "NotoNaskhArabicUI-Bold.ttf", "Arimo-Regular.ttf", "LICENSE"],
        );
        touch(&fonts.join("unhinted"), &["NotoSansNKo-Regular.otf", "NotoSans-Regular.ttx"]);
        touch(&cjk, &["NotoSansCJK-Regular.ttc", "NotoSansJP-Regular.otf"]);

        let catalog =
            FontCatalog::index(&font_directories(&fonts, &cjk), &FixedIntrospector).unwrap();

        let keys: Vec<&str> = catalog.keys().into_iter().collect();
        assert_eq!(keys, ["noto-naskh-arab", "noto-sans", "noto-sans-jpan", "noto-sans-nkoo"]);
        let scripts: Vec<&str> = catalog.supported_scripts().iter().map(String::as_str).collect();
        assert_eq!(scripts, ["Arab", "Cyrl", "Grek", "Jpan", "Latn", "Nkoo", "Qaak"]);

        let nko = catalog.family("noto-sans-nkoo").next().unwrap();
        assert_eq!(nko.hint_status, HintStatus::Unhinted);
        assert_eq!(nko.coverage, Coverage::Computed([0x41, 0x42].into()));
        let jp = catalog.family("noto-sans-jpan").next().unwrap();
        assert_eq!(jp.hint_status, HintStatus::Hinted);
        assert_eq!(catalog.keys_for_script("").len(), 1);
    }

    #[test]
    fn test_index_rejects_unknown_file() {
        let root = tempfile::tempdir().unwrap();
        let fonts = root.path().join("fonts");
        let cjk = root.path().join("cjk");
        touch(&fonts.join("hinted"), &["stray.txt"]);
        touch(&fonts.join("unhinted"), &[]);
        touch(&cjk, &[]);

        let err = FontCatalog::index(&font_directories(&fonts, &cjk), &FixedIntrospector);
        assert!(matches!(err, Err(Error::UnrecognizedFile(_))));
    }

    #[test]
    fn test_index_rejects_unknown_script() {
        let root = tempfile::tempdir().unwrap();
        let fonts = root.path().join("fonts");
        let cjk = root.path().join("cjk");
        touch(&fonts.join("hinted"), &["NotoSansKlingon-Regular.ttf"]);
        touch(&fonts.join("unhinted"), &[]);
        touch(&cjk, &[]);

        let err = FontCatalog::index(&font_directories(&fonts, &cjk), &FixedIntrospector);
        assert!(matches!(err, Err(Error::UnknownScriptName { name, .. }) if name == "Klingon"));
    }

    #[test]
    fn test_missing_directory() {
        let root = tempfile::tempdir().unwrap();
        let dirs = [FontDirectory::new(root.path().join("absent"), HintStatus::Hinted)];
        assert!(matches!(FontCatalog::index(&dirs, &FixedIntrospector), Err(Error::Io { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory() {
        use std::{fs::set_permissions, os::unix::fs::PermissionsExt};

        let root = tempfile::tempdir().unwrap();
        let hinted = root.path().join("hinted");
        touch(&hinted, &["NotoSans-Regular.ttf"]);
        set_permissions(&hinted, PermissionsExt::from_mode(0o000)).unwrap();
        // Permission bits do not stop a privileged user from listing.
        let readable = std::fs::read_dir(&hinted).is_ok();

        let dirs = [FontDirectory::new(&hinted, HintStatus::Hinted)];
        let result = FontCatalog::index(&dirs, &FixedIntrospector);
        set_permissions(&hinted, PermissionsExt::from_mode(0o755)).unwrap();
        if !readable {
            assert!(matches!(result, Err(Error::Io { .. })));
        }
    }
}
