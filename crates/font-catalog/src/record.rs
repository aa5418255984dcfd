//! Font records and the attributes decoded from their file names.

use std::{
    collections::BTreeSet,
    fmt,
    hash::{Hash, Hasher},
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::error::Error;

/// Whether a binary carries TrueType hinting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HintStatus {
    Hinted,
    Unhinted,
}

impl HintStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hinted => "hinted",
            Self::Unhinted => "unhinted",
        }
    }
}

impl fmt::Display for HintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target platform of a website data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    Windows,
    Linux,
    Other,
}

impl Platform {
    /// Every platform, in the order data sets are generated.
    pub const ALL: [Self; 3] = [Self::Windows, Self::Linux, Self::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Other => "other",
        }
    }

    /// Hint status preferred when both variants of a font exist.
    pub fn desired_hint_status(self) -> HintStatus {
        match self {
            Self::Windows | Self::Linux => HintStatus::Hinted,
            Self::Other => HintStatus::Unhinted,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "windows" => Ok(Self::Windows),
            "linux" => Ok(Self::Linux),
            "other" => Ok(Self::Other),
            _ => Err(Error::UnknownPlatform(s.to_string())),
        }
    }
}

/// Named weights used in Noto file names, ordered lightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weight {
    Thin,
    Light,
    DemiLight,
    Regular,
    Medium,
    Bold,
    Black,
}

impl Weight {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Thin => "Thin",
            Self::Light => "Light",
            Self::DemiLight => "DemiLight",
            Self::Regular => "Regular",
            Self::Medium => "Medium",
            Self::Bold => "Bold",
            Self::Black => "Black",
        }
    }

    /// CSS `font-weight` value.
    pub fn css_weight(self) -> u16 {
        match self {
            Self::Thin => 100,
            Self::Light => 300,
            Self::DemiLight => 350,
            Self::Regular => 400,
            Self::Medium => 500,
            Self::Bold => 700,
            Self::Black => 900,
        }
    }
}

impl FromStr for Weight {
    type Err = Error;

    /// An empty weight in a file name means Regular.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Thin" => Ok(Self::Thin),
            "Light" => Ok(Self::Light),
            "DemiLight" => Ok(Self::DemiLight),
            "" | "Regular" => Ok(Self::Regular),
            "Medium" => Ok(Self::Medium),
            "Bold" => Ok(Self::Bold),
            "Black" => Ok(Self::Black),
            _ => Err(Error::UnknownWeight(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Style {
    Upright,
    Italic,
}

impl Style {
    /// CSS `font-style` value.
    pub fn css_style(self) -> &'static str {
        match self {
            Self::Upright => "normal",
            Self::Italic => "italic",
        }
    }
}

/// Code points mapped by a font's character map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coverage {
    Computed(BTreeSet<u32>),
    /// Collections and other formats that are not introspected.
    Unavailable,
}

impl Coverage {
    pub fn charset(&self) -> Option<&BTreeSet<u32>> {
        match self {
            Self::Computed(charset) => Some(charset),
            Self::Unavailable => None,
        }
    }
}

/// One font binary in the catalog.
///
/// Records are identified by path alone.
#[derive(Debug, Clone)]
pub struct FontRecord {
    pub path: PathBuf,
    pub hint_status: HintStatus,
    pub key: String,
    /// `Noto Sans`, `Noto Serif`, ...
    pub family: String,
    /// ISO 15924 code, empty for the Latin/Greek/Cyrillic fonts.
    pub script: String,
    pub variant: Option<String>,
    pub weight: Weight,
    pub style: Style,
    pub platform: Option<Platform>,
    pub coverage: Coverage,
}

impl FontRecord {
    pub fn file_name(&self) -> &str {
        self.path.file_name().and_then(|name| name.to_str()).unwrap_or_default()
    }

    /// Whether the binary is a single TrueType or OpenType font.
    pub fn is_single_font(&self) -> bool {
        is_single_font(&self.path)
    }

    /// Same family, script, variant, weight and style; hinting and platform
    /// may differ.
    pub fn basically_same(&self, other: &Self) -> bool {
        self.family == other.family
            && self.script == other.script
            && self.variant == other.variant
            && self.weight == other.weight
            && self.style == other.style
    }

    pub fn is_regular_upright(&self) -> bool {
        self.weight == Weight::Regular && self.style == Style::Upright
    }
}

impl PartialEq for FontRecord {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for FontRecord {}

impl Hash for FontRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

pub(crate) fn is_single_font(path: &Path) -> bool {
    path.to_str().is_some_and(|p| p.ends_with(".ttf") || p.ends_with(".otf"))
}

/// Lowercase hyphen-joined family, script and variant.
///
/// The `UI` variant shares its key with the regular family.
pub fn family_key(family: &str, script: &str, variant: Option<&str>) -> String {
    let mut key = family.replace(' ', "-");
    if !script.is_empty() {
        key.push('-');
        key.push_str(script);
    }
    if let Some(variant) = variant.filter(|v| *v != "UI") {
        key.push('-');
        key.push_str(variant);
    }
    key.to_lowercase()
}
