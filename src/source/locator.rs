//! Boundary level to shapefile path mapping.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::BoundaryLevel;

/// `<base_dir>/<folder>/<file_name>` for `level`. Pure; no existence check.
pub fn resolve_path(base_dir: &Path, level: BoundaryLevel) -> PathBuf {
    base_dir.join(level.folder()).join(level.file_name())
}

/// Parse `level` and resolve its path. Unknown levels fail before any I/O.
pub fn locate(base_dir: &Path, level: &str) -> Result<PathBuf> {
    let level: BoundaryLevel = level.parse()?;
    Ok(resolve_path(base_dir, level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoundaryError;

    #[test]
    fn test_documented_layout() {
        let base = Path::new("/srv/shapefiles");
        assert_eq!(
            resolve_path(base, BoundaryLevel::State),
            PathBuf::from("/srv/shapefiles/state/STATE_BOUNDARY_wgs84.shp")
        );
        assert_eq!(
            resolve_path(base, BoundaryLevel::District),
            PathBuf::from("/srv/shapefiles/district/DISTRICT_BOUNDARY_WGS84.shp")
        );
        assert_eq!(
            resolve_path(base, BoundaryLevel::SubDistrict),
            PathBuf::from("/srv/shapefiles/subdistrict/SUBDISTRICT_BOUNDARY_WGS84.shp")
        );
    }

    #[test]
    fn test_unknown_level_rejected_without_io() {
        // base path does not exist; the error must come from parsing alone
        let base = Path::new("/definitely/not/here");
        assert!(matches!(
            locate(base, "region"),
            Err(BoundaryError::InvalidLevel(ref l)) if l == "region"
        ));
    }

    #[test]
    fn test_locate_known_level() {
        let base = Path::new("data");
        assert_eq!(
            locate(base, "district").unwrap(),
            PathBuf::from("data/district/DISTRICT_BOUNDARY_WGS84.shp")
        );
    }
}
