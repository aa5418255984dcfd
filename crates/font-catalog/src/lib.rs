//! Catalog of Noto font binaries.
//!
//! File names encode family, script, variant, weight, style and platform;
//! [`FontCatalog::index`] decodes them and reads character coverage through
//! a [`FontIntrospector`]. [`select`] then narrows a family down to the
//! members shipped for one target platform.

pub mod coverage;
mod error;
pub mod indexer;
pub mod introspect;
pub mod record;
pub mod script_codes;
pub mod selector;

pub use coverage::{charset_supports_text, charset_to_ranges};
pub use error::{Error, Result};
pub use indexer::{FontCatalog, FontDirectory, ParsedName, catalog_script, font_directories, parse_file_name};
pub use introspect::{FontIntrospector, SkrifaIntrospector};
pub use record::{Coverage, FontRecord, HintStatus, Platform, Style, Weight, family_key};
pub use selector::{FamilySelection, StyleEntry, css_category, select};
