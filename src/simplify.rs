//! Optional geometry simplification for lighter map payloads.

use geo::Simplify;
use geo_types::Geometry;

use crate::models::FeatureCollection;

/// Ramer-Douglas-Peucker tolerance (degrees) for a dataset of `count` features.
///
/// Small datasets (states) are drawn zoomed out and can lose more detail than
/// dense ones (sub-districts).
pub fn tolerance_for(count: usize) -> f64 {
    if count < 50 {
        0.01
    } else if count < 200 {
        0.005
    } else {
        0.001
    }
}

/// Simplify every geometry with the tolerance chosen from the collection size.
pub fn simplify_collection(collection: FeatureCollection) -> FeatureCollection {
    let epsilon = tolerance_for(collection.len());
    collection.map_geometries(|geometry| simplify_geometry(geometry, epsilon))
}

pub fn simplify_geometry(geometry: Geometry<f64>, epsilon: f64) -> Geometry<f64> {
    match geometry {
        Geometry::LineString(g) => Geometry::LineString(g.simplify(&epsilon)),
        Geometry::MultiLineString(g) => Geometry::MultiLineString(g.simplify(&epsilon)),
        Geometry::Polygon(g) => Geometry::Polygon(g.simplify(&epsilon)),
        Geometry::MultiPolygon(g) => Geometry::MultiPolygon(g.simplify(&epsilon)),
        Geometry::GeometryCollection(gc) => Geometry::GeometryCollection(
            gc.into_iter()
                .map(|g| simplify_geometry(g, epsilon))
                .collect(),
        ),
        other => other,
    }
}
