//! Shapefile discovery and decoding.
//!
//! The locator turns a boundary level into a path without touching the disk;
//! the reader opens that path, decodes every record and closes its handles
//! before returning.

mod attribute;
mod locator;
mod reader;

pub use locator::{locate, resolve_path};
pub use reader::{read_features, ShapefileSource};
