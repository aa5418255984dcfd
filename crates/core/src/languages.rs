use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result, bail};
use log::warn;
use noto_cldr::font_script;
use noto_font_catalog::catalog_script;

use crate::{config::SCRIPTS_WITHOUT_FONTS, context::WebsiteContext, dataset::Language, sample};

/// Language objects plus the reverse index from family key to the
/// languages that family serves.
#[derive(Debug, Clone, Default)]
pub struct LanguageTable {
    pub languages: BTreeMap<String, Language>,
    pub family_to_langs: BTreeMap<String, BTreeSet<String>>,
}

/// Split `lang-Script`, or derive the script of a bare language.
pub fn split_lang_scr<'a>(ctx: &'a WebsiteContext, lang_scr: &'a str) -> Result<(&'a str, &'a str)> {
    match lang_scr.split_once('-') {
        Some(parts) => Ok(parts),
        None => {
            let script = ctx
                .cldr
                .scripts
                .likely_script(lang_scr)
                .with_context(|| format!("No likely script for language {lang_scr}"))?;
            Ok((lang_scr, script))
        }
    }
}

pub fn create_language(
    ctx: &WebsiteContext,
    lang_scr: &str,
    family_to_langs: &mut BTreeMap<String, BTreeSet<String>>,
) -> Result<Language> {
    let (language, script) = split_lang_scr(ctx, lang_scr)?;

    let name = ctx
        .cldr
        .names
        .language_name(lang_scr)
        .with_context(|| format!("No English name for language {lang_scr}"))?;
    let name_native = ctx
        .cldr
        .native_language_name(lang_scr)
        .with_context(|| format!("Failed to look up the native name of {lang_scr}"))?;
    let rtl = ctx
        .cldr
        .scripts
        .is_rtl(script)
        .with_context(|| format!("No direction for script {script} of {lang_scr}"))?;

    let script = font_script(script);
    if !ctx.catalog.supports_script(script) {
        warn!("No font supports the {script} script needed for the {name} language");
        if !SCRIPTS_WITHOUT_FONTS.contains(&script) {
            bail!("No font supports the {script} script needed for {lang_scr}");
        }
        return Ok(Language { name, name_native, rtl, sample: None, families: Vec::new() });
    }

    let sample = sample::sample_text(ctx, language, script)?;
    let families: Vec<String> = ctx
        .catalog
        .keys_for_script(catalog_script(script))
        .into_iter()
        .map(String::from)
        .collect();
    for key in &families {
        family_to_langs.entry(key.clone()).or_default().insert(lang_scr.to_string());
    }

    Ok(Language { name, name_native, rtl, sample: Some(sample), families })
}

/// One language object per code in `lang_scrs`.
pub fn create_languages(ctx: &WebsiteContext, lang_scrs: &BTreeSet<String>) -> Result<LanguageTable> {
    let mut table = LanguageTable::default();
    for lang_scr in lang_scrs {
        let language = create_language(ctx, lang_scr, &mut table.family_to_langs)?;
        table.languages.insert(lang_scr.clone(), language);
    }
    Ok(table)
}
