//! Shapefile decoding into the in-memory feature model.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use geo_types::Geometry;
use shapefile::dbase;
use shapefile::{Shape, ShapeReader};
use tracing::{debug, info};

use super::attribute::{decimal_places, to_json};
use crate::error::{BoundaryError, ReadError, Result};
use crate::models::{Attributes, Feature, FeatureCollection};

/// Open geometry file and attribute table for one shapefile.
///
/// Both handles are owned here and closed when the source is dropped, which
/// [`ShapefileSource::read`] does on every return path. Each call to
/// [`ShapefileSource::open`] gets its own handles.
pub struct ShapefileSource {
    path: PathBuf,
    shapes: ShapeReader<BufReader<File>>,
    table: dbase::Reader<BufReader<File>>,
    fields: Vec<String>,
    /// Declared decimal count per column, parallel to `fields`
    decimals: Vec<u8>,
}

impl ShapefileSource {
    /// Open `path` (the `.shp`) and its `.dbf` sidecar read-only.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(BoundaryError::NotFound {
                level: None,
                path: path.to_path_buf(),
            });
        }

        let shapes = ShapeReader::from_path(path).map_err(|e| BoundaryError::read(path, e))?;
        let dbf = path.with_extension("dbf");
        let table = dbase::Reader::from_path(&dbf).map_err(|e| BoundaryError::read(path, e))?;
        let places = decimal_places(&dbf).map_err(|e| BoundaryError::read(path, e))?;

        let fields: Vec<String> = table
            .fields()
            .iter()
            .map(|field| field.name().to_string())
            .collect();
        let decimals = fields
            .iter()
            .map(|name| places.get(name).copied().unwrap_or(0))
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            shapes,
            table,
            fields,
            decimals,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Attribute columns in declaration order
    pub fn field_names(&self) -> &[String] {
        &self.fields
    }

    /// Decode every record in file order. Nothing is returned on failure.
    pub fn read(mut self) -> Result<FeatureCollection> {
        let path = self.path.clone();
        let features = self
            .decode_all()
            .map_err(|e| BoundaryError::read(path.as_path(), e))?;

        debug!("Decoded {} features from {}", features.len(), path.display());
        Ok(FeatureCollection::new(features))
    }

    fn decode_all(&mut self) -> std::result::Result<Vec<Feature>, ReadError> {
        let columns: Vec<(&String, u8)> = self
            .fields
            .iter()
            .zip(self.decimals.iter().copied())
            .collect();
        let mut shapes = self.shapes.iter_shapes();
        let mut records = self.table.iter_records();
        let mut features = Vec::new();

        loop {
            let index = features.len();
            let (shape, record) = match (shapes.next(), records.next()) {
                (Some(shape), Some(record)) => (shape?, record?),
                (None, None) => break,
                _ => return Err(ReadError::Misaligned { index }),
            };

            let geometry = to_geometry(shape, index)?;
            let attributes: Attributes = columns
                .iter()
                .map(|&(name, decimals)| {
                    let value = record
                        .get(name)
                        .map(|value| to_json(value, decimals))
                        .unwrap_or(serde_json::Value::Null);
                    (name.clone(), value)
                })
                .collect();

            features.push(Feature::new(geometry, attributes).with_record(index));
        }

        Ok(features)
    }
}

fn to_geometry(
    shape: Shape,
    index: usize,
) -> std::result::Result<Option<Geometry<f64>>, ReadError> {
    if let Shape::NullShape = shape {
        return Ok(None);
    }
    Geometry::<f64>::try_from(shape)
        .map(Some)
        .map_err(|e| ReadError::Geometry {
            index,
            message: e.to_string(),
        })
}

/// Read the whole shapefile at `path`.
///
/// Fails with [`BoundaryError::NotFound`] when the `.shp` is missing and
/// [`BoundaryError::Read`] for anything that cannot be decoded.
pub fn read_features(path: &Path) -> Result<FeatureCollection> {
    info!("Reading shapefile from: {}", path.display());
    ShapefileSource::open(path)?.read()
}
