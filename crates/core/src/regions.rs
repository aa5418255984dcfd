use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result};
use noto_cldr::EnglishNames;

use crate::{context::WebsiteContext, dataset::Region};

/// Sort language codes by their English names.
///
/// Lowercased names stand in for locale collation; equal names fall back
/// to the code so the order is total.
pub fn sort_languages<'a>(
    names: &EnglishNames,
    langs: impl IntoIterator<Item = &'a String>,
) -> Result<Vec<String>> {
    let unique: BTreeSet<&String> = langs.into_iter().collect();
    let mut keyed = unique
        .into_iter()
        .map(|code| {
            let name = names
                .language_name(code)
                .with_context(|| format!("No English name for language {code}"))?;
            Ok((name.to_lowercase(), code.clone()))
        })
        .collect::<Result<Vec<_>>>()?;
    keyed.sort();
    Ok(keyed.into_iter().map(|(_, code)| code).collect())
}

/// One region per territory with language data.
///
/// Also returns every `lang` / `lang-Script` code any region lists.
pub fn create_regions(ctx: &WebsiteContext) -> Result<(BTreeMap<String, Region>, BTreeSet<String>)> {
    let mut regions = BTreeMap::new();
    let mut used = BTreeSet::new();

    for (territory, langs) in &ctx.cldr.supplemental.territory_info {
        let name = ctx
            .cldr
            .names
            .territory_name(territory)
            .with_context(|| format!("No English name for territory {territory}"))?;
        let &(lat, lng) = ctx
            .lat_long
            .get(territory)
            .with_context(|| format!("No coordinates for territory {territory}"))?;
        regions.insert(
            territory.clone(),
            Region {
                name: name.to_string(),
                lat,
                lng,
                langs: sort_languages(&ctx.cldr.names, langs)?,
            },
        );
        used.extend(langs.iter().cloned());
    }
    Ok((regions, used))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fixtures;

    #[test]
    fn test_sort_by_english_name() {
        let ctx = fixtures::context();
        let langs = ["ur".to_string(), "en".to_string(), "sr-Latn".to_string(), "en".to_string()];
        let sorted = sort_languages(&ctx.cldr.names, &langs).unwrap();
        // English, Serbian (Latin script), Urdu
        assert_eq!(sorted, ["en", "sr-Latn", "ur"]);
    }

    #[test]
    fn test_unknown_language_fails() {
        let ctx = fixtures::context();
        assert!(sort_languages(&ctx.cldr.names, &["qqq".to_string()]).is_err());
    }

    #[test]
    fn test_create_regions() {
        let ctx = fixtures::context();
        let (regions, used) = create_regions(&ctx).unwrap();

        let serbia = &regions["RS"];
        assert_eq!(serbia.name, "Serbia");
        assert_eq!((serbia.lat, serbia.lng), (44.0, 21.0));
        assert_eq!(serbia.langs, ["sr", "sr-Latn"]);
        assert_eq!(regions.len(), 4);
        assert!(used.contains("dv"));
        assert_eq!(used.len(), 5);
    }

    #[test]
    fn test_missing_coordinates_fail() {
        let mut ctx = fixtures::context();
        ctx.lat_long.remove("PK");
        let err = create_regions(&ctx).unwrap_err();
        assert!(err.to_string().contains("PK"));
    }
}
