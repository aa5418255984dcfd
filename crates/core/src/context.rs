//! Inputs shared by every platform's data set.

use std::{
    collections::BTreeMap,
    fs::read_to_string,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::info;
use noto_cldr::Cldr;
use noto_font_catalog::{FontCatalog, FontIntrospector, font_directories};

use crate::{config::LAT_LONG_SUPPLEMENT, pipeline::PipelineContext};

/// Latitude and longitude of each territory.
pub type LatLong = BTreeMap<String, (f64, f64)>;

/// CLDR tables, the font catalog and the auxiliary data, loaded once.
///
/// Nothing here changes after loading, apart from the CLDR lookup memos.
pub struct WebsiteContext {
    pub cldr: Cldr,
    pub catalog: FontCatalog,
    pub lat_long: LatLong,
    pub sample_text_dir: PathBuf,
    pub introspector: Box<dyn FontIntrospector>,
}

impl WebsiteContext {
    pub fn load(ctx: &PipelineContext, introspector: Box<dyn FontIntrospector>) -> Result<Self> {
        let catalog = index_fonts(ctx, introspector.as_ref())?;
        let cldr = load_cldr(ctx)?;
        let lat_long = read_lat_long(&ctx.lat_long_file())?;
        Ok(Self { cldr, catalog, lat_long, sample_text_dir: ctx.sample_text_dir(), introspector })
    }
}

pub fn index_fonts(ctx: &PipelineContext, introspector: &dyn FontIntrospector) -> Result<FontCatalog> {
    let directories = font_directories(&ctx.font_dir(), &ctx.cjk_dir());
    FontCatalog::index(&directories, introspector).context("Failed to index fonts")
}

pub fn load_cldr(ctx: &PipelineContext) -> Result<Cldr> {
    let dir = ctx.cldr_dir();
    Cldr::load(&dir).with_context(|| format!("Failed to load CLDR data from {}", dir.display()))
}

/// Parse the `country,latitude,longitude,name` table, then add the
/// territories it lacks.
pub fn read_lat_long(path: &Path) -> Result<LatLong> {
    let text =
        read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let mut lat_long = LatLong::new();

    for (index, line) in text.lines().enumerate() {
        let mut fields = line.splitn(4, ',');
        let (Some(region), Some(latitude), Some(longitude)) =
            (fields.next(), fields.next(), fields.next())
        else {
            continue;
        };
        if region == "country" || latitude.is_empty() {
            continue;
        }
        let parse = |value: &str| {
            value.trim().parse::<f64>().with_context(|| {
                format!("{}:{}: invalid coordinate '{value}'", path.display(), index + 1)
            })
        };
        lat_long.insert(region.to_string(), (parse(latitude)?, parse(longitude)?));
    }
    info!("Read coordinates for {} territories", lat_long.len());

    lat_long.extend(
        LAT_LONG_SUPPLEMENT
            .iter()
            .map(|(region, latitude, longitude)| (region.to_string(), (*latitude, *longitude))),
    );
    Ok(lat_long)
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use super::*;

    #[test]
    fn test_read_lat_long() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.csv");
        write(
            &path,
            "country,latitude,longitude,name\n\
             AD,42.546245,1.601554,Andorra\n\
             KR,35.907757,127.766922,\"Korea, Republic of\"\n\
             XX,,,Nowhere\n",
        )
        .unwrap();

        let lat_long = read_lat_long(&path).unwrap();
        assert_eq!(lat_long["AD"], (42.546245, 1.601554));
        assert_eq!(lat_long["KR"], (35.907757, 127.766922));
        assert!(!lat_long.contains_key("XX"));
        assert!(!lat_long.contains_key("country"));
        assert_eq!(lat_long["SS"], (8.0, 30.0));
        let (lat, lng) = lat_long["AC"];
        assert!((lat - (-7.0 - 56.0 / 60.0)).abs() < 1e-9);
        assert!((lng - (-14.0 - 22.0 / 60.0)).abs() < 1e-9);
    }

    #[test]
    fn test_read_lat_long_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.csv");
        write(&path, "AD,north,1.6,Andorra\n").unwrap();
        assert!(read_lat_long(&path).is_err());
    }
}
