use std::collections::{BTreeMap, BTreeSet, HashSet};

use anyhow::{Context, Result};
use noto_font_catalog::{Coverage, FontRecord, Platform, charset_to_ranges, select};

use crate::{
    context::WebsiteContext,
    dataset::{Family, FontStyle},
    package::PackageAssembler,
    regions::sort_languages,
};

/// Family objects for one platform, plus every selected member across all
/// families.
#[derive(Debug, Clone, Default)]
pub struct FamilyTable<'a> {
    pub families: BTreeMap<String, Family>,
    pub members: Vec<&'a FontRecord>,
}

/// Select members, write the family package, and describe the family.
pub fn create_families<'a>(
    ctx: &'a WebsiteContext,
    platform: Platform,
    family_to_langs: &BTreeMap<String, BTreeSet<String>>,
    packages: &mut PackageAssembler,
) -> Result<FamilyTable<'a>> {
    let mut families = BTreeMap::new();
    let mut all_members: HashSet<&FontRecord> = HashSet::new();
    let no_langs = BTreeSet::new();

    for key in ctx.catalog.keys() {
        let selection = select(key, platform, ctx.catalog.fonts())
            .with_context(|| format!("Failed to select members of {key}"))?;
        all_members.extend(selection.members.iter().copied());

        let name = selection
            .display_name(ctx.introspector.as_ref())
            .with_context(|| format!("Failed to read the family name of {key}"))?;
        let pkg = packages.assemble(&name.replace(' ', ""), platform, &selection.members)?;
        let langs = family_to_langs.get(&selection.representative.key).unwrap_or(&no_langs);
        let ranges = match &selection.representative.coverage {
            Coverage::Computed(charset) => charset_to_ranges(charset),
            Coverage::Unavailable => Vec::new(),
        };

        families.insert(
            key.to_string(),
            Family {
                name,
                pkg: pkg.url,
                langs: sort_languages(&ctx.cldr.names, langs)?,
                category: selection.category(),
                ranges,
                fonts: selection
                    .styles()
                    .into_iter()
                    .map(|entry| FontStyle { style: entry.style, weight: entry.weight })
                    .collect(),
            },
        );
    }

    let mut members: Vec<&FontRecord> = all_members.into_iter().collect();
    members.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(FamilyTable { families, members })
}

#[cfg(test)]
mod tests {
    use noto_font_catalog::HintStatus;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{fixtures, languages::create_languages};

    #[test]
    fn test_families_for_other() {
        let ctx = fixtures::context();
        let out = tempfile::tempdir().unwrap();
        let langs = create_languages(&ctx, &ctx.cldr.supplemental.all_territory_languages()).unwrap();
        let mut packages = PackageAssembler::new(out.path());
        let table =
            create_families(&ctx, Platform::Other, &langs.family_to_langs, &mut packages).unwrap();

        let keys: Vec<&str> = table.families.keys().map(String::as_str).collect();
        assert_eq!(keys, ["noto-kufi-arab", "noto-naskh-arab", "noto-sans"]);

        let sans = &table.families["noto-sans"];
        assert_eq!(sans.name, "Noto Sans");
        assert_eq!(sans.pkg, "NotoSans-unhinted.zip");
        assert_eq!(sans.langs, ["en", "sr", "sr-Latn"]);
        assert_eq!(sans.category, Some("sans-serif"));
        assert_eq!(sans.ranges, [("0061".to_string(), "0063".to_string())]);
        assert_eq!(
            sans.fonts,
            [FontStyle { style: "normal", weight: 400 }, FontStyle { style: "normal", weight: 700 }]
        );

        let naskh = &table.families["noto-naskh-arab"];
        assert_eq!(naskh.name, "Noto Naskh Arabic");
        assert_eq!(naskh.category, Some("serif"));
        assert_eq!(naskh.langs, ["ur"]);

        assert_eq!(table.members.len(), 4);
        assert!(table.members.iter().all(|font| font.hint_status == HintStatus::Unhinted));
        assert!(out.path().join("NotoSans-unhinted.zip").is_file());
    }

    #[test]
    fn test_families_for_linux() {
        let ctx = fixtures::context();
        let out = tempfile::tempdir().unwrap();
        let mut packages = PackageAssembler::new(out.path());
        let table = create_families(&ctx, Platform::Linux, &BTreeMap::new(), &mut packages).unwrap();

        assert_eq!(table.families["noto-sans"].pkg, "NotoSans-hinted.zip");
        assert!(table.families["noto-sans"].langs.is_empty());
        assert!(table.members.iter().all(|font| font.hint_status == HintStatus::Hinted));
    }
}
