//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use noto_font_catalog::Platform;
use noto_website_core::{PipelineContext, clean, config::DEFAULT_OUTPUT_DIR, generate};

#[derive(Parser)]
#[command(name = "noto-website-data")]
#[command(about = "Generate the Noto website data sets and font packages")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write `js/data-<platform>.json` and the font packages
    Generate {
        /// Root of the Noto tree holding fonts, CLDR and sample texts
        #[arg(long, default_value = ".")]
        noto_dir: PathBuf,
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
        /// Only generate these platforms (repeatable); all by default
        #[arg(short, long = "platform")]
        platforms: Vec<Platform>,
    },
    /// Remove generated packages and data sets
    Clean {
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
    },
    #[command(subcommand, hide = true)]
    Dev(crate::dev::DevCommands),
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Generate { noto_dir, output_dir, platforms } => {
                generate(&PipelineContext::new(noto_dir, output_dir, platforms))?;
            }
            Commands::Clean { output_dir } => {
                clean(&output_dir)?;
            }
            Commands::Dev(dev) => dev.run()?,
        }
        Ok(())
    }
}
