//! Noto Website Core - builds the per-platform data sets and font packages
//! behind the Noto website.

pub mod config;
pub mod context;
pub mod dataset;
pub mod families;
pub mod io;
pub mod languages;
pub mod package;
pub mod pipeline;
pub mod regions;
pub mod sample;

#[cfg(test)]
mod fixtures;

pub use context::WebsiteContext;
pub use dataset::{Dataset, Family, FontStyle, Language, PackageRef, Region};
pub use package::{PackageAssembler, PackageError, package_name};
pub use pipeline::{PipelineContext, clean::clean, generate, generate_with};
