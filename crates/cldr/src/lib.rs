//! CLDR lookups used to describe languages on the Noto website.
//!
//! - [`exemplar`]: the bracketed exemplar character notation
//! - [`locale`]: locale inheritance chains
//! - [`script`]: likely scripts and script directionality
//! - [`names`]: English display names
//! - [`supplemental`]: language/territory relationships
//! - [`source`]: per-locale documents with memoized lookups
//!
//! [`Cldr`] bundles all of them into one read-only snapshot.

mod error;
pub mod exemplar;
pub mod locale;
pub mod names;
pub mod script;
pub mod source;
pub mod supplemental;
mod xml;

use std::path::Path;

use log::info;

pub use error::{Error, ExemplarError, Result};
pub use locale::{FallbackChain, ParentLocales, ROOT};
pub use names::EnglishNames;
pub use script::{LikelySubtags, ScriptResolver, font_script};
pub use source::CldrSource;
pub use supplemental::SupplementalData;

/// Everything loaded from one CLDR checkout.
#[derive(Debug)]
pub struct Cldr {
    pub names: EnglishNames,
    pub supplemental: SupplementalData,
    pub scripts: ScriptResolver,
    pub source: CldrSource,
}

impl Cldr {
    /// Load the tables from a CLDR checkout laid out as upstream ships it.
    pub fn load(root: &Path) -> Result<Self> {
        let supplemental_dir = root.join("common").join("supplemental");
        info!("Loading CLDR data from {}", root.display());

        Ok(Self {
            names: EnglishNames::load(&root.join("common").join("main").join("en.xml"))?,
            supplemental: SupplementalData::load(&supplemental_dir.join("supplementalData.xml"))?,
            scripts: ScriptResolver::load(
                &supplemental_dir.join("likelySubtags.xml"),
                &root.join("common").join("properties").join("scriptMetadata.txt"),
            )?,
            source: CldrSource::new(root),
        })
    }

    pub fn parent_locales(&self) -> &ParentLocales {
        &self.supplemental.parent_locales
    }

    /// Exemplar units for `language-script`, walking the fallback chain.
    pub fn exemplar(&self, language: &str, script: &str) -> Result<Option<Vec<String>>> {
        self.source.exemplar(self.parent_locales(), language, script)
    }

    /// Name of `lang_scr` in its own language, if CLDR has one.
    pub fn native_language_name(&self, lang_scr: &str) -> Result<Option<String>> {
        self.source.native_language_name(self.parent_locales(), lang_scr)
    }
}
