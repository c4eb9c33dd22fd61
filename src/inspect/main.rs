//! Shapefile inspector.
//!
//! Prints the attribute schema, first record and distinct name values of the
//! boundary shapefiles, to find which name columns a new dataset uses.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

use boundary_map::filter::{DISTRICT_FIELDS, STATE_FIELDS, SUB_DISTRICT_FIELDS};
use boundary_map::source::{resolve_path, ShapefileSource};
use boundary_map::{BoundaryLevel, FeatureCollection};

#[derive(Parser, Debug)]
#[command(name = "inspect")]
#[command(about = "Inspect boundary shapefiles")]
struct Args {
    /// Shapefile base directory
    #[arg(long, default_value = "data/shapefiles")]
    base_path: PathBuf,

    /// Only inspect this level (state, district, subdistrict)
    #[arg(long, value_parser = parse_level)]
    level: Option<BoundaryLevel>,

    /// Column to list distinct values of
    #[arg(long)]
    column: Option<String>,

    /// List every .shp under the base path instead
    #[arg(long)]
    scan: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.scan {
        return scan(&args.base_path);
    }

    let levels: Vec<BoundaryLevel> = match args.level {
        Some(level) => vec![level],
        None => BoundaryLevel::all().to_vec(),
    };

    for level in levels {
        let path = resolve_path(&args.base_path, level);
        println!("--- Inspecting {} ---", level);
        if let Err(e) = inspect(&path, level, args.column.as_deref()) {
            warn!("{}: {:#}", path.display(), e);
        }
        println!();
    }

    Ok(())
}

fn parse_level(s: &str) -> Result<BoundaryLevel, String> {
    s.parse()
        .map_err(|_| format!("unknown level '{}' (expected state, district or subdistrict)", s))
}

fn inspect(path: &Path, level: BoundaryLevel, column: Option<&str>) -> Result<()> {
    let source = ShapefileSource::open(path)?;
    println!("Path: {}", source.path().display());
    println!("Columns: {:?}", source.field_names());

    let column = column
        .map(str::to_string)
        .or_else(|| name_column(source.field_names(), level));

    let features = source.read()?;
    println!("Features: {}", features.len());

    if let Some(first) = features.iter().next() {
        let first = serde_json::to_string_pretty(&first.attributes)
            .context("Failed to render first record")?;
        println!("First row: {}", first);
    }

    if let Some(column) = column {
        let values = distinct_values(&features, &column);
        println!("--- Unique values ({}): {} ---", column, values.len());
        for value in values {
            println!("  {}", value);
        }
    }

    Ok(())
}

/// First known name column present in the table for `level`
fn name_column(fields: &[String], level: BoundaryLevel) -> Option<String> {
    let candidates = match level {
        BoundaryLevel::State => STATE_FIELDS,
        BoundaryLevel::District => DISTRICT_FIELDS,
        BoundaryLevel::SubDistrict => SUB_DISTRICT_FIELDS,
    };
    candidates
        .iter()
        .find(|c| fields.iter().any(|f| f == *c))
        .map(|c| c.to_string())
}

fn distinct_values(features: &FeatureCollection, column: &str) -> BTreeSet<String> {
    features
        .iter()
        .filter_map(|f| f.attribute(column))
        .map(|v| match v {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect()
}

fn scan(base_path: &Path) -> Result<()> {
    info!("Scanning {} for shapefiles", base_path.display());

    let mut found = 0;
    for entry in WalkDir::new(base_path).follow_links(true) {
        let entry = entry?;
        let path = entry.path();
        let is_shp = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("shp"))
            .unwrap_or(false);
        if !path.is_file() || !is_shp {
            continue;
        }

        found += 1;
        match ShapefileSource::open(path) {
            Ok(source) => println!("{} ({} columns)", path.display(), source.field_names().len()),
            Err(e) => println!("{} (unreadable: {})", path.display(), e),
        }
    }

    info!("Found {} shapefiles", found);
    Ok(())
}
