//! HTTP server for administrative boundary GeoJSON.
//!
//! Serves state, district and sub-district boundaries read from shapefiles
//! under a configured base directory.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use boundary_map::api;
use boundary_map::config::Config;
use boundary_map::BoundaryService;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Administrative boundary map server")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address (overrides config)
    #[arg(short, long)]
    listen: Option<String>,

    /// Shapefile base directory (overrides config)
    #[arg(long)]
    base_path: Option<PathBuf>,

    /// Simplify geometries before serving
    #[arg(long)]
    simplify: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    if let Some(listen) = args.listen {
        config.server.listen = listen;
    }
    if let Some(base_path) = args.base_path {
        config.shapefiles.base_path = base_path;
    }
    if args.simplify {
        config.shapefiles.simplify = true;
    }

    info!("Boundary Map Server");
    info!(
        "Shapefile base path: {}",
        config.shapefiles.base_path.display()
    );
    if !config.shapefiles.base_path.is_dir() {
        warn!(
            "Shapefile base path {} is not a directory; every map request will 404",
            config.shapefiles.base_path.display()
        );
    }

    let service = BoundaryService::from_config(&config.shapefiles);
    let app = api::router(service);

    info!("Starting server on {}", config.server.listen);

    let listener = tokio::net::TcpListener::bind(&config.server.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
