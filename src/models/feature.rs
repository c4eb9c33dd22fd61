//! In-memory feature model decoded from a shapefile.

use geo_types::Geometry;
use serde_json::{Map, Value};

/// Attribute table row: field name to scalar value, in table declaration order.
pub type Attributes = Map<String, Value>;

/// One boundary record
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// `None` for shapefile null shapes
    pub geometry: Option<Geometry<f64>>,
    pub attributes: Attributes,
    /// Zero-based position in the source file, kept through filtering
    pub record: Option<usize>,
}

impl Feature {
    pub fn new(geometry: Option<Geometry<f64>>, attributes: Attributes) -> Self {
        Self {
            geometry,
            attributes,
            record: None,
        }
    }

    pub fn with_record(mut self, index: usize) -> Self {
        self.record = Some(index);
        self
    }

    /// Value of `field`, treating JSON null as absent
    pub fn attribute(&self, field: &str) -> Option<&Value> {
        self.attributes.get(field).filter(|v| !v.is_null())
    }

    /// First populated attribute among `candidates`, in priority order.
    pub fn first_attribute(&self, candidates: &[&str]) -> Option<&Value> {
        candidates.iter().find_map(|field| self.attribute(field))
    }
}

/// Ordered set of features, in source file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Apply `f` to every geometry, keeping order
    pub fn map_geometries<F>(self, mut f: F) -> Self
    where
        F: FnMut(Geometry<f64>) -> Geometry<f64>,
    {
        let features = self
            .features
            .into_iter()
            .map(|feature| Feature {
                geometry: feature.geometry.map(&mut f),
                attributes: feature.attributes,
                record: feature.record,
            })
            .collect();
        Self { features }
    }
}

impl From<Vec<Feature>> for FeatureCollection {
    fn from(features: Vec<Feature>) -> Self {
        Self::new(features)
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for FeatureCollection {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}
