//! Boundary Map - administrative boundary shapefiles served as GeoJSON.
//!
//! This library provides the shapefile pipeline shared by the `server` and
//! `inspect` binaries.

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod render;
pub mod service;
pub mod simplify;
pub mod source;

pub use error::{BoundaryError, ErrorKind};
pub use models::{BoundaryLevel, BoundaryRequest, Feature, FeatureCollection};
pub use service::BoundaryService;
