//! Development commands for inspecting intermediate results.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use noto_cldr::{Cldr, SupplementalData, exemplar};
use noto_font_catalog::{FontCatalog, Platform, SkrifaIntrospector, font_directories, parse_file_name, select};
use noto_website_core::PipelineContext;

#[derive(Subcommand)]
pub enum DevCommands {
    /// Expand an exemplar string such as `[a-c {ch}]`
    ParseExemplar {
        #[arg(required = true)]
        text: String,
    },
    /// Print the locale fallback chain
    Chain {
        #[arg(long, default_value = ".")]
        noto_dir: PathBuf,
        #[arg(required = true)]
        locale: String,
    },
    /// Print the exemplar and sample text CLDR gives a locale
    Exemplar {
        #[arg(long, default_value = ".")]
        noto_dir: PathBuf,
        #[arg(required = true)]
        language: String,
        #[arg(required = true)]
        script: String,
    },
    /// Decode font file names
    ParseName {
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Show which fonts a family ships on a platform
    Family {
        #[arg(long, default_value = ".")]
        noto_dir: PathBuf,
        #[arg(short, long, default_value = "other")]
        platform: Platform,
        #[arg(required = true)]
        key: String,
    },
}

fn pipeline_context(noto_dir: PathBuf) -> PipelineContext {
    PipelineContext::new(noto_dir, PathBuf::new(), Vec::new())
}

impl DevCommands {
    pub fn run(self) -> Result<()> {
        match self {
            DevCommands::ParseExemplar { text } => {
                let units = exemplar::parse(&text)?;
                println!("{} units", units.len());
                println!("  {}", units.join(" "));
                println!("Sample: {}", exemplar::sample_text_from_exemplar(&units));
            }
            DevCommands::Chain { noto_dir, locale } => {
                let path = pipeline_context(noto_dir)
                    .cldr_dir()
                    .join("common/supplemental/supplementalData.xml");
                let data = SupplementalData::load(&path)
                    .with_context(|| format!("Failed to load {}", path.display()))?;
                let chain: Vec<String> = data.parent_locales.resolve_chain(&locale).collect();
                println!("{}", chain.join(" → "));

                let language = locale.split(['-', '_']).next().unwrap_or_default();
                if let Some(scripts) = data.written_in_scripts.get(language) {
                    println!("Scripts: {}", Vec::from_iter(scripts.iter().map(String::as_str)).join(" "));
                }
                if let Some(regions) = data.used_in_regions.get(language) {
                    println!("Territories: {}", Vec::from_iter(regions.iter().map(String::as_str)).join(" "));
                }
            }
            DevCommands::Exemplar { noto_dir, language, script } => {
                let cldr = Cldr::load(&pipeline_context(noto_dir).cldr_dir())?;
                match cldr.exemplar(&language, &script)? {
                    Some(units) => {
                        println!("{} units", units.len());
                        println!("Sample: {}", exemplar::sample_text_from_exemplar(&units));
                    }
                    None => println!("No exemplar for {language}-{script}"),
                }
                if let Some(name) = cldr.native_language_name(&format!("{language}-{script}"))? {
                    println!("Native name: {name}");
                }
            }
            DevCommands::ParseName { files } => {
                for file in files {
                    match parse_file_name(&file) {
                        Some(parsed) => println!(
                            "{file}: family={} script={:?} variant={:?} weight={} style={} platform={}",
                            parsed.display_family(),
                            parsed.script,
                            parsed.variant,
                            parsed.weight.css_weight(),
                            parsed.style.css_style(),
                            parsed.platform.map_or("any", Platform::as_str),
                        ),
                        None => println!("{file}: not a Noto font file name"),
                    }
                }
            }
            DevCommands::Family { noto_dir, platform, key } => {
                let ctx = pipeline_context(noto_dir);
                let catalog = FontCatalog::index(
                    &font_directories(&ctx.font_dir(), &ctx.cjk_dir()),
                    &SkrifaIntrospector,
                )?;
                if catalog.family(&key).next().is_none() {
                    bail!("No family with key {key}");
                }
                let selection = select(&key, platform, catalog.fonts())?;
                println!("{key} on {platform}: {}", selection.display_name(&SkrifaIntrospector)?);
                println!("  Representative: {}", selection.representative.path.display());
                for font in &selection.members {
                    println!("  {} ({})", font.path.display(), font.hint_status);
                }
            }
        }
        Ok(())
    }
}
