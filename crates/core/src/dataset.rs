//! The per-platform data set written to `js/data-<platform>.json`.
//!
//! Some fields are computed for every object but not serialized; the site
//! does not read them today.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub region: BTreeMap<String, Region>,
    pub lang: BTreeMap<String, Language>,
    pub family: BTreeMap<String, Family>,
    pub pkg: PackageRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Sorted by English name.
    pub langs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Language {
    pub name: String,
    #[serde(rename = "nameNative", skip_serializing_if = "Option::is_none")]
    pub name_native: Option<String>,
    #[serde(skip)]
    pub rtl: bool,
    /// `None` when no font covers the script.
    #[serde(skip)]
    pub sample: Option<String>,
    /// Family keys, sorted.
    pub families: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Family {
    pub name: String,
    /// Basename of the family's package.
    pub pkg: String,
    /// Sorted by English name.
    pub langs: Vec<String>,
    #[serde(skip)]
    pub category: Option<&'static str>,
    #[serde(skip)]
    pub ranges: Vec<(String, String)>,
    pub fonts: Vec<FontStyle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontStyle {
    pub style: &'static str,
    pub weight: u16,
}

/// A written package archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageRef {
    /// Basename under `pkgs/`.
    pub url: String,
    pub size: u64,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_language_drops_unused_fields() {
        let language = Language {
            name: "Urdu".to_string(),
            name_native: None,
            rtl: true,
            sample: Some("ا ب".to_string()),
            families: vec!["noto-naskh-arab".to_string()],
        };
        assert_eq!(
            serde_json::to_value(&language).unwrap(),
            json!({"name": "Urdu", "families": ["noto-naskh-arab"]})
        );
    }

    #[test]
    fn test_family_shape() {
        let family = Family {
            name: "Noto Sans".to_string(),
            pkg: "NotoSans-unhinted.zip".to_string(),
            langs: vec!["en".to_string()],
            category: Some("sans-serif"),
            ranges: vec![("0041".to_string(), "005A".to_string())],
            fonts: vec![FontStyle { style: "normal", weight: 400 }],
        };
        assert_eq!(
            serde_json::to_value(&family).unwrap(),
            json!({
                "name": "Noto Sans",
                "pkg": "NotoSans-unhinted.zip",
                "langs": ["en"],
                "fonts": [{"style": "normal", "weight": 400}],
            })
        );
    }

    #[test]
    fn test_native_name_key() {
        let language = Language {
            name: "Serbian".to_string(),
            name_native: Some("српски".to_string()),
            rtl: false,
            sample: None,
            families: vec![],
        };
        let value = serde_json::to_value(&language).unwrap();
        assert_eq!(value["nameNative"], "српски");
    }
}
