//! Administrative boundary levels and their on-disk layout.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BoundaryError;

/// Granularity of a boundary dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryLevel {
    /// State / union territory
    State,
    /// District
    District,
    /// Sub-district (tehsil / taluka)
    SubDistrict,
}

impl BoundaryLevel {
    /// All levels, coarsest first
    pub fn all() -> &'static [BoundaryLevel] {
        &[
            BoundaryLevel::State,
            BoundaryLevel::District,
            BoundaryLevel::SubDistrict,
        ]
    }

    /// Name used in URLs and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryLevel::State => "state",
            BoundaryLevel::District => "district",
            BoundaryLevel::SubDistrict => "subdistrict",
        }
    }

    /// Subfolder of the shapefile base directory holding this level
    pub fn folder(&self) -> &'static str {
        self.as_str()
    }

    /// Shapefile name inside [`BoundaryLevel::folder`].
    ///
    /// The state file uses a lowercase `wgs84` suffix in the published
    /// datasets; the other two are uppercase.
    pub fn file_name(&self) -> &'static str {
        match self {
            BoundaryLevel::State => "STATE_BOUNDARY_wgs84.shp",
            BoundaryLevel::District => "DISTRICT_BOUNDARY_WGS84.shp",
            BoundaryLevel::SubDistrict => "SUBDISTRICT_BOUNDARY_WGS84.shp",
        }
    }
}

impl fmt::Display for BoundaryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoundaryLevel {
    type Err = BoundaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "state" => Ok(BoundaryLevel::State),
            "district" => Ok(BoundaryLevel::District),
            "subdistrict" => Ok(BoundaryLevel::SubDistrict),
            other => Err(BoundaryError::InvalidLevel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for level in BoundaryLevel::all() {
            assert_eq!(level.as_str().parse::<BoundaryLevel>().unwrap(), *level);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("State".parse::<BoundaryLevel>().is_err());
        assert!("region".parse::<BoundaryLevel>().is_err());
        assert!("".parse::<BoundaryLevel>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&BoundaryLevel::SubDistrict).unwrap();
        assert_eq!(json, "\"subdistrict\"");
    }
}
