//! Core data models for boundary lookups.

pub mod feature;
pub mod level;
pub mod request;

pub use feature::{Attributes, Feature, FeatureCollection};
pub use level::BoundaryLevel;
pub use request::BoundaryRequest;
