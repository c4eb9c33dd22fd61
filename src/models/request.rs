//! A single boundary lookup, validated at construction.

use super::BoundaryLevel;
use crate::error::BoundaryError;
use crate::filter::{DISTRICT_FIELDS, STATE_FIELDS, SUB_DISTRICT_FIELDS};

/// What to load and how to narrow it.
///
/// A district filter only exists on sub-district requests and a state filter
/// only on district requests; the constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryRequest {
    level: BoundaryLevel,
    district_filter: Option<String>,
    state_filter: Option<String>,
    sub_district_name: Option<String>,
}

impl BoundaryRequest {
    fn unfiltered(level: BoundaryLevel) -> Self {
        Self {
            level,
            district_filter: None,
            state_filter: None,
            sub_district_name: None,
        }
    }

    /// All state boundaries
    pub fn state() -> Self {
        Self::unfiltered(BoundaryLevel::State)
    }

    /// District boundaries, optionally narrowed to one state
    pub fn district(state: Option<String>) -> Self {
        Self {
            state_filter: non_blank(state),
            ..Self::unfiltered(BoundaryLevel::District)
        }
    }

    /// Sub-district boundaries of one district. The district is required.
    pub fn sub_district(district: Option<String>) -> Result<Self, BoundaryError> {
        let district = non_blank(district).ok_or(BoundaryError::MissingParameter("district"))?;
        Ok(Self {
            district_filter: Some(district),
            ..Self::unfiltered(BoundaryLevel::SubDistrict)
        })
    }

    /// Sub-district boundaries whose own name matches `name`
    pub fn sub_district_named(name: Option<String>) -> Result<Self, BoundaryError> {
        let name = non_blank(name).ok_or(BoundaryError::MissingParameter("name"))?;
        Ok(Self {
            sub_district_name: Some(name),
            ..Self::unfiltered(BoundaryLevel::SubDistrict)
        })
    }

    /// Request for the levels served by `GET /map/{type}`. `state` only
    /// applies to districts.
    pub fn from_map_type(map_type: &str, state: Option<String>) -> Result<Self, BoundaryError> {
        match map_type.parse::<BoundaryLevel>()? {
            BoundaryLevel::State => Ok(Self::state()),
            BoundaryLevel::District => Ok(Self::district(state)),
            BoundaryLevel::SubDistrict => Err(BoundaryError::InvalidLevel(map_type.to_string())),
        }
    }

    pub fn level(&self) -> BoundaryLevel {
        self.level
    }

    pub fn district_filter(&self) -> Option<&str> {
        self.district_filter.as_deref()
    }

    pub fn state_filter(&self) -> Option<&str> {
        self.state_filter.as_deref()
    }

    pub fn sub_district_name(&self) -> Option<&str> {
        self.sub_district_name.as_deref()
    }

    /// Candidate attribute fields and target value to filter on, if any
    pub fn attribute_filter(&self) -> Option<(&'static [&'static str], &str)> {
        if let Some(district) = self.district_filter() {
            return Some((DISTRICT_FIELDS, district));
        }
        if let Some(state) = self.state_filter() {
            return Some((STATE_FIELDS, state));
        }
        self.sub_district_name()
            .map(|name| (SUB_DISTRICT_FIELDS, name))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
