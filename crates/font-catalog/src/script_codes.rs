//! Script names used in Noto file names, mapped to ISO 15924 codes.

use icu_properties::{PropertyNamesShort, PropertyParser, props::Script};

/// Tokens that are not Unicode script names.
///
/// `CJK` maps to a private-use code; those unified CJK fonts are dropped
/// after their scripts are registered.
pub const ODD_SCRIPTS: &[(&str, &str)] = &[
    ("CJK", "Qaak"),
    ("JP", "Jpan"),
    ("KR", "Kore"),
    ("NKo", "Nkoo"),
    ("Pahlavi", "Phli"),
    ("Parthian", "Prti"),
    ("SC", "Hans"),
    ("SumeroAkkadianCuneiform", "Xsux"),
    ("Symbols", "Zsym"),
    ("TC", "Hant"),
];

/// Code of the unified CJK fonts.
pub const UNIFIED_CJK: &str = "Qaak";

/// Convert a file-name script token to its four-letter code.
///
/// The empty token (Latin/Greek/Cyrillic fonts) stays empty. Otherwise the
/// odd names win, then an exact Unicode `Script` value alias, then a loose
/// match ignoring case and underscores. Returns `None` for tokens that
/// match nothing.
pub fn to_four_letter(token: &str) -> Option<&'static str> {
    if token.is_empty() {
        return Some("");
    }
    if let Some((_, code)) = ODD_SCRIPTS.iter().find(|(name, _)| *name == token) {
        return Some(*code);
    }
    let parser = PropertyParser::<Script>::new();
    let script = parser.get_strict(token).or_else(|| parser.get_loose(token))?;
    PropertyNamesShort::<Script>::new().get(script)
}
