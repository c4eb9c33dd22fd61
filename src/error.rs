//! Error types for boundary lookups.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::BoundaryLevel;

/// Failure while decoding a shapefile that exists on disk.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Shape(#[from] shapefile::Error),

    #[error(transparent)]
    Table(#[from] shapefile::dbase::Error),

    #[error("attribute table header: {0}")]
    Header(#[from] std::io::Error),

    #[error("unsupported geometry in record {index}: {message}")]
    Geometry { index: usize, message: String },

    #[error("geometry and attribute table disagree at record {index}")]
    Misaligned { index: usize },
}

/// Outcome class, used by the HTTP layer to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidRequest,
    NotFound,
    ReadError,
}

#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("Invalid type. Allowed: state, district")]
    InvalidLevel(String),

    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("{}", not_found_message(.level, .path))]
    NotFound {
        level: Option<BoundaryLevel>,
        path: PathBuf,
    },

    #[error("Sub-district not found: {0}")]
    NoMatch(String),

    #[error("Error processing shapefile: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: ReadError,
    },

    #[error("Error processing shapefile: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl BoundaryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoundaryError::InvalidLevel(_) | BoundaryError::MissingParameter(_) => {
                ErrorKind::InvalidRequest
            }
            BoundaryError::NotFound { .. } | BoundaryError::NoMatch(_) => ErrorKind::NotFound,
            BoundaryError::Read { .. } | BoundaryError::Serialize(_) => ErrorKind::ReadError,
        }
    }

    /// Attach the requested level to a not-found error so the message can name it.
    pub fn with_level(self, level: BoundaryLevel) -> Self {
        match self {
            BoundaryError::NotFound { path, .. } => BoundaryError::NotFound {
                level: Some(level),
                path,
            },
            other => other,
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: impl Into<ReadError>) -> Self {
        BoundaryError::Read {
            path: path.into(),
            source: source.into(),
        }
    }
}

fn not_found_message(level: &Option<BoundaryLevel>, path: &Path) -> String {
    match level {
        Some(BoundaryLevel::SubDistrict) => "Sub-district shapefile not found".to_string(),
        _ => format!(
            "Shapefile not found: {}",
            path.file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_else(|| path.to_string_lossy())
        ),
    }
}

pub type Result<T, E = BoundaryError> = std::result::Result<T, E>;
