//! Per-platform generation of the website data sets.

pub mod clean;

use std::{
    collections::{BTreeMap, BTreeSet},
    fs::create_dir_all,
    mem::take,
    path::PathBuf,
    time::Instant,
};

use anyhow::{Context, Result};
use log::{info, warn};
use noto_font_catalog::{FontIntrospector, Platform, SkrifaIntrospector};

use crate::{
    config::{
        CJK_DIR, CLDR_DIR, COMPREHENSIVE_PACKAGE, FONT_DIR, HOT_PATCHES, JS_DIR, LAT_LONG_FILE,
        PKGS_DIR, SAMPLE_TEXT_DIR,
    },
    context::WebsiteContext,
    dataset::{Dataset, Family, Language, PackageRef, Region},
    families::{FamilyTable, create_families},
    io::{glob_files, write_json},
    languages::{LanguageTable, create_languages},
    package::PackageAssembler,
    regions::create_regions,
};

const BANNER: &str =
    "═══════════════════════════════════════════════════════════════════════════════";

/// Where inputs are read from and outputs written to.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    pub noto_dir: PathBuf,
    pub output_dir: PathBuf,
    pub platforms: Vec<Platform>,
}

impl PipelineContext {
    /// Platforms run in their canonical order; an empty list means all of
    /// them.
    pub fn new(noto_dir: PathBuf, output_dir: PathBuf, platforms: Vec<Platform>) -> Self {
        let platforms = Platform::ALL
            .into_iter()
            .filter(|platform| platforms.is_empty() || platforms.contains(platform))
            .collect();
        Self { noto_dir, output_dir, platforms }
    }

    pub fn cldr_dir(&self) -> PathBuf {
        self.noto_dir.join(CLDR_DIR)
    }

    pub fn lat_long_file(&self) -> PathBuf {
        self.noto_dir.join(LAT_LONG_FILE)
    }

    pub fn sample_text_dir(&self) -> PathBuf {
        self.noto_dir.join(SAMPLE_TEXT_DIR)
    }

    pub fn font_dir(&self) -> PathBuf {
        self.noto_dir.join(FONT_DIR)
    }

    pub fn cjk_dir(&self) -> PathBuf {
        self.noto_dir.join(CJK_DIR)
    }

    pub fn pkgs_dir(&self) -> PathBuf {
        self.output_dir.join(PKGS_DIR)
    }

    pub fn js_dir(&self) -> PathBuf {
        self.output_dir.join(JS_DIR)
    }

    pub fn data_file(&self, platform: Platform) -> PathBuf {
        self.js_dir().join(format!("data-{platform}.json"))
    }
}

/// Working state of one platform's sweep.
pub struct PlatformRun<'a, 'p> {
    ctx: &'a WebsiteContext,
    platform: Platform,
    packages: &'p mut PackageAssembler,
    data_file: PathBuf,
    regions: BTreeMap<String, Region>,
    used_langs: BTreeSet<String>,
    languages: LanguageTable,
    families: FamilyTable<'a>,
    pkg: Option<PackageRef>,
}

impl<'a, 'p> PlatformRun<'a, 'p> {
    pub fn new(
        ctx: &'a WebsiteContext,
        platform: Platform,
        packages: &'p mut PackageAssembler,
        data_file: PathBuf,
    ) -> Self {
        Self {
            ctx,
            platform,
            packages,
            data_file,
            regions: BTreeMap::new(),
            used_langs: BTreeSet::new(),
            languages: LanguageTable::default(),
            families: FamilyTable::default(),
            pkg: None,
        }
    }
}

type PlatformStep = (&'static str, fn(&mut PlatformRun<'_, '_>) -> Result<()>);

const PLATFORM_STEPS: &[PlatformStep] = &[
    ("regions", step_regions),
    ("languages", step_languages),
    ("families", step_families),
    ("comprehensive-package", step_comprehensive_package),
    ("hot-patches", step_hot_patches),
    ("write-data", step_write_data),
];

/// Run a named pipeline step with timing
fn run_step<T>(
    name: &str,
    step_num: usize,
    total: usize,
    state: &mut T,
    f: impl Fn(&mut T) -> Result<()>,
) -> Result<()> {
    println!("\n[{step_num}/{total}] {name}");
    let start = Instant::now();
    f(state)?;
    println!("  ✓ {name} ({:.2}s)", start.elapsed().as_secs_f64());
    Ok(())
}

fn run_steps(
    steps: &[PlatformStep],
    run: &mut PlatformRun<'_, '_>,
    offset: usize,
    total: usize,
) -> Result<()> {
    for (i, (name, step_fn)) in steps.iter().enumerate() {
        run_step(name, offset + i + 1, total, run, step_fn)?;
    }
    Ok(())
}

// ============================================================================
// Platform Steps
// ============================================================================

fn step_regions(run: &mut PlatformRun<'_, '_>) -> Result<()> {
    let (regions, used_langs) = create_regions(run.ctx)?;
    println!("  {} regions, {} languages in use", regions.len(), used_langs.len());
    run.regions = regions;
    run.used_langs = used_langs;
    Ok(())
}

fn step_languages(run: &mut PlatformRun<'_, '_>) -> Result<()> {
    run.languages = create_languages(run.ctx, &run.used_langs)?;
    let without_fonts =
        run.languages.languages.values().filter(|language| language.families.is_empty()).count();
    println!("  {} languages, {without_fonts} without fonts", run.languages.languages.len());
    Ok(())
}

fn step_families(run: &mut PlatformRun<'_, '_>) -> Result<()> {
    run.families =
        create_families(run.ctx, run.platform, &run.languages.family_to_langs, run.packages)?;
    println!(
        "  {} families, {} fonts selected",
        run.families.families.len(),
        run.families.members.len()
    );
    Ok(())
}

fn step_comprehensive_package(run: &mut PlatformRun<'_, '_>) -> Result<()> {
    let pkg = run
        .packages
        .assemble(COMPREHENSIVE_PACKAGE, run.platform, &run.families.members)
        .with_context(|| format!("Failed to assemble the {} package", run.platform))?;
    println!("  {} ({} bytes)", pkg.url, pkg.size);
    run.pkg = Some(pkg);
    Ok(())
}

fn step_hot_patches(run: &mut PlatformRun<'_, '_>) -> Result<()> {
    apply_hot_patches(&mut run.languages.languages, &mut run.families.families, HOT_PATCHES);
    Ok(())
}

fn step_write_data(run: &mut PlatformRun<'_, '_>) -> Result<()> {
    let dataset = Dataset {
        region: take(&mut run.regions),
        lang: take(&mut run.languages.languages),
        family: take(&mut run.families.families),
        pkg: run.pkg.take().context("The comprehensive package was not assembled")?,
    };
    write_json(&run.data_file, &dataset)?;
    println!("  Wrote {}", run.data_file.display());
    Ok(())
}

/// Unlink each `(language, family)` pair in both directions.
///
/// Pairs naming a language or family absent from the data set are skipped.
pub fn apply_hot_patches(
    languages: &mut BTreeMap<String, Language>,
    families: &mut BTreeMap<String, Family>,
    patches: &[(&str, &str)],
) {
    for &(lang, key) in patches {
        let (Some(language), Some(family)) = (languages.get_mut(lang), families.get_mut(key)) else {
            warn!("Skipping hot patch {lang}/{key}: not in the data set");
            continue;
        };
        language.families.retain(|family_key| family_key != key);
        family.langs.retain(|code| code != lang);
        info!("Unlinked {lang} from {key}");
    }
}

// ============================================================================
// Public Pipeline Functions
// ============================================================================

/// Generate the data sets and packages, reading fonts with `skrifa`.
pub fn generate(ctx: &PipelineContext) -> Result<()> {
    generate_with(ctx, Box::new(SkrifaIntrospector))
}

/// Generate the data sets and packages with a custom font introspector.
pub fn generate_with(ctx: &PipelineContext, introspector: Box<dyn FontIntrospector>) -> Result<()> {
    let start = Instant::now();

    println!("{BANNER}");
    println!("Noto Website Data Pipeline");
    println!("{BANNER}");

    println!("\nLoading fonts and CLDR data from {}", ctx.noto_dir.display());
    let website = WebsiteContext::load(ctx, introspector)?;
    println!("  {} fonts indexed ({:.2}s)", website.catalog.fonts().len(), start.elapsed().as_secs_f64());

    for dir in [ctx.pkgs_dir(), ctx.js_dir()] {
        create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }

    let mut packages = PackageAssembler::new(ctx.pkgs_dir());
    let total = ctx.platforms.len() * PLATFORM_STEPS.len();
    for (i, &platform) in ctx.platforms.iter().enumerate() {
        println!("\n── {platform} ──");
        let mut run = PlatformRun::new(&website, platform, &mut packages, ctx.data_file(platform));
        run_steps(PLATFORM_STEPS, &mut run, i * PLATFORM_STEPS.len(), total)
            .with_context(|| format!("Failed to generate data for {platform}"))?;
    }

    println!("\n{BANNER}");
    println!("✨ Website data complete in {:.2}s", start.elapsed().as_secs_f64());
    println!("   Output: {}", ctx.output_dir.display());

    let package_count = glob_files(&ctx.pkgs_dir(), "*.zip")?.len();
    let data_count = glob_files(&ctx.js_dir(), "data-*.json")?.len();
    println!("   Packages: {package_count}, Data sets: {data_count}");
    println!("{BANNER}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{dataset::FontStyle, fixtures};

    fn language(families: &[&str]) -> Language {
        Language {
            name: "Urdu".to_string(),
            name_native: None,
            rtl: true,
            sample: None,
            families: families.iter().map(|key| key.to_string()).collect(),
        }
    }

    fn family(langs: &[&str]) -> Family {
        Family {
            name: "Noto Kufi Arabic".to_string(),
            pkg: "NotoKufiArabic-hinted.zip".to_string(),
            langs: langs.iter().map(|code| code.to_string()).collect(),
            category: None,
            ranges: Vec::new(),
            fonts: vec![FontStyle { style: "normal", weight: 400 }],
        }
    }

    #[test]
    fn test_context_paths() {
        let ctx = PipelineContext::new("noto".into(), "out".into(), Vec::new());
        assert_eq!(ctx.platforms, Platform::ALL);
        assert_eq!(ctx.cldr_dir(), Path::new("noto/third_party/cldr"));
        assert_eq!(ctx.font_dir(), Path::new("noto/fonts/individual"));
        assert_eq!(ctx.data_file(Platform::Linux), Path::new("out/js/data-linux.json"));
        assert_eq!(ctx.pkgs_dir(), Path::new("out/pkgs"));
    }

    #[test]
    fn test_hot_patches_unlink_both_sides() {
        let mut languages = BTreeMap::from([
            ("ur".to_string(), language(&["noto-kufi-arab", "noto-naskh-arab"])),
            ("ar".to_string(), language(&["noto-kufi-arab"])),
        ]);
        let mut families = BTreeMap::from([("noto-kufi-arab".to_string(), family(&["ar", "ur"]))]);

        apply_hot_patches(
            &mut languages,
            &mut families,
            &[("ur", "noto-kufi-arab"), ("khw", "noto-kufi-arab")],
        );

        assert_eq!(languages["ur"].families, ["noto-naskh-arab"]);
        assert_eq!(languages["ar"].families, ["noto-kufi-arab"]);
        assert_eq!(families["noto-kufi-arab"].langs, ["ar"]);
    }

    #[test]
    fn test_platform_steps() {
        let ctx = fixtures::context();
        let out = tempfile::tempdir().unwrap();
        let data_file = out.path().join("js").join("data-other.json");
        let mut packages = PackageAssembler::new(out.path());

        let mut run = PlatformRun::new(&ctx, Platform::Other, &mut packages, data_file.clone());
        run_steps(PLATFORM_STEPS, &mut run, 0, PLATFORM_STEPS.len()).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&data_file).unwrap()).unwrap();
        assert_eq!(json["pkg"]["url"], "Noto-unhinted.zip");
        assert_eq!(json["lang"]["ur"]["families"], serde_json::json!(["noto-naskh-arab"]));
        assert_eq!(json["family"]["noto-kufi-arab"]["langs"], serde_json::json!([]));
        assert_eq!(json["region"]["RS"]["langs"], serde_json::json!(["sr", "sr-Latn"]));
        assert!(out.path().join("Noto-unhinted.zip").is_file());
    }
}
