use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use noto_cldr::exemplar::sample_text_from_exemplar;

use crate::{context::WebsiteContext, io::read_optional_text};

/// Contents of `<dir>/<language>-<script>.txt`, if present.
pub fn sample_from_file(dir: &Path, language: &str, script: &str) -> Result<Option<String>> {
    read_optional_text(&dir.join(format!("{language}-{script}.txt")))
}

/// Sample text for `language` written in `script`.
///
/// A hand-written sample wins, then the CLDR exemplar, then the generic
/// `und-<script>` sample. Falls back to the empty string.
pub fn sample_text(ctx: &WebsiteContext, language: &str, script: &str) -> Result<String> {
    if let Some(text) = sample_from_file(&ctx.sample_text_dir, language, script)? {
        return Ok(text);
    }

    let exemplar = ctx
        .cldr
        .exemplar(language, script)
        .with_context(|| format!("Failed to look up the exemplar for {language}-{script}"))?;
    if let Some(units) = exemplar {
        return Ok(sample_text_from_exemplar(&units));
    }

    if let Some(text) = sample_from_file(&ctx.sample_text_dir, "und", script)? {
        debug!("Using the generic {script} sample for {language}");
        return Ok(text);
    }
    Ok(String::new())
}
