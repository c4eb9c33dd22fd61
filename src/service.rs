//! Boundary service: locate, read, filter and serialize one request.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::ShapefileConfig;
use crate::error::{BoundaryError, Result};
use crate::filter;
use crate::models::{BoundaryRequest, FeatureCollection};
use crate::render;
use crate::simplify::simplify_collection;
use crate::source::{read_features, resolve_path};

/// Stateless pipeline over a read-only shapefile tree.
#[derive(Debug, Clone)]
pub struct BoundaryService {
    base_path: PathBuf,
    simplify: bool,
}

impl BoundaryService {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            simplify: false,
        }
    }

    pub fn from_config(config: &ShapefileConfig) -> Self {
        Self::new(config.base_path.clone()).with_simplify(config.simplify)
    }

    pub fn with_simplify(mut self, simplify: bool) -> Self {
        self.simplify = simplify;
        self
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Load and narrow the features for `request`.
    pub fn collect(&self, request: &BoundaryRequest) -> Result<FeatureCollection> {
        let level = request.level();
        let path = resolve_path(&self.base_path, level);

        let features = read_features(&path).map_err(|e| {
            warn!("{} boundaries unavailable: {}", level, e);
            e.with_level(level)
        })?;
        let total = features.len();

        let features = match request.attribute_filter() {
            Some((fields, target)) => {
                let kept = filter::filter(features, fields, target);
                if kept.is_empty() {
                    debug!("No {} features match {:?}", level, target);
                }
                kept
            }
            None => features,
        };

        if let Some(name) = request.sub_district_name() {
            if features.is_empty() {
                return Err(BoundaryError::NoMatch(name.to_string()));
            }
        }

        info!("{}: {} of {} features selected", level, features.len(), total);

        Ok(if self.simplify {
            simplify_collection(features)
        } else {
            features
        })
    }

    /// Run the whole pipeline and return GeoJSON text.
    pub fn fetch(&self, request: &BoundaryRequest) -> Result<String> {
        let start = Instant::now();
        let features = self.collect(request)?;
        let json = render::serialize(&features)?;
        debug!(
            "{} request served in {:.1?} ({} bytes)",
            request.level(),
            start.elapsed(),
            json.len()
        );
        Ok(json)
    }
}
