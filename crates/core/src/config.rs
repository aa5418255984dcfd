//! Configuration constants for the website data build.

/// CLDR checkout, relative to the Noto tree.
pub const CLDR_DIR: &str = "third_party/cldr";

/// DSPL country table with latitudes and longitudes.
pub const LAT_LONG_FILE: &str = "third_party/dspl/countries.csv";

/// Hand-written sample texts named `<lang>-<Script>.txt`.
pub const SAMPLE_TEXT_DIR: &str = "sample_texts";

/// Individual font binaries, split into `hinted/` and `unhinted/`.
pub const FONT_DIR: &str = "fonts/individual";

/// CJK font binaries; all of them count as hinted.
pub const CJK_DIR: &str = "third_party/noto_cjk";

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "website_data";

/// Package archives, relative to the output directory.
pub const PKGS_DIR: &str = "pkgs";

/// Data sets, relative to the output directory.
pub const JS_DIR: &str = "js";

/// Major name of the package holding every selected font.
pub const COMPREHENSIVE_PACKAGE: &str = "Noto";

/// Only the comprehensive package may mix hinted and unhinted fonts, and it
/// always has more members than this.
pub const COMPREHENSIVE_MIN_MEMBERS: usize = 50;

/// Scripts some territory language needs but no Noto font covers yet.
pub const SCRIPTS_WITHOUT_FONTS: &[&str] = &["Bass", "Orya", "Plrd", "Thaa", "Tibt"];

/// `(language, family)` pairs to unlink after the data set is built.
///
/// Noto Kufi lacks the Urdu heh goal and characters Khowar and Kashmiri
/// need.
pub const HOT_PATCHES: &[(&str, &str)] = &[
    ("ur", "noto-kufi-arab"),
    ("khw", "noto-kufi-arab"),
    ("ks-Arab", "noto-kufi-arab"),
];

const fn degrees(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}

/// Territories missing from the DSPL table, from the English Wikipedia and
/// The World Factbook.
pub const LAT_LONG_SUPPLEMENT: &[(&str, f64, f64)] = &[
    ("AC", degrees(-7.0, -56.0, 0.0), degrees(-14.0, -22.0, 0.0)),
    ("AX", degrees(60.0, 7.0, 0.0), degrees(19.0, 54.0, 0.0)),
    ("BL", degrees(17.0, 54.0, 0.0), degrees(-62.0, -50.0, 0.0)),
    ("BQ", degrees(12.0, 11.0, 0.0), degrees(-68.0, -14.0, 0.0)),
    ("CP", degrees(10.0, 18.0, 0.0), degrees(-109.0, -13.0, 0.0)),
    ("CW", degrees(12.0, 11.0, 0.0), -69.0),
    ("DG", degrees(7.0, 18.0, 48.0), degrees(72.0, 24.0, 40.0)),
    // Ceuta and Melilla, using Ceuta
    ("EA", degrees(35.0, 53.0, 18.0), degrees(-5.0, -18.0, -56.0)),
    ("IC", 28.1, -15.4),
    ("MF", degrees(18.0, 4.0, 31.0), degrees(-63.0, -3.0, -36.0)),
    ("SS", 8.0, 30.0),
    ("SX", degrees(18.0, 3.0, 0.0), degrees(-63.0, -3.0, 0.0)),
    ("TA", degrees(-37.0, -7.0, 0.0), degrees(-12.0, -17.0, 0.0)),
    // U.S. Outlying Islands, using Johnston Atoll
    ("UM", degrees(16.0, 45.0, 0.0), degrees(-169.0, -31.0, 0.0)),
];
