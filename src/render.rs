//! GeoJSON rendering of feature collections.

use geojson::feature::Id;
use geojson::{Feature as GeoJsonFeature, FeatureCollection as GeoJsonCollection, Geometry, Value};

use crate::error::Result;
use crate::models::{Feature, FeatureCollection};

/// Serialize `collection` as a GeoJSON `FeatureCollection`.
///
/// Properties are copied verbatim, nulls included, in attribute order. Features
/// read from disk carry their source record index as a numeric `id`.
pub fn serialize(collection: &FeatureCollection) -> Result<String> {
    let geojson = to_geojson(collection);
    Ok(serde_json::to_string(&geojson)?)
}

pub fn to_geojson(collection: &FeatureCollection) -> GeoJsonCollection {
    GeoJsonCollection {
        bbox: None,
        features: collection.iter().map(to_geojson_feature).collect(),
        foreign_members: None,
    }
}

fn to_geojson_feature(feature: &Feature) -> GeoJsonFeature {
    GeoJsonFeature {
        bbox: None,
        geometry: feature
            .geometry
            .as_ref()
            .map(|geometry| Geometry::new(Value::from(geometry))),
        id: feature.record.map(|index| Id::Number(index.into())),
        properties: Some(feature.attributes.clone()),
        foreign_members: None,
    }
}
