//! Error types for the RecordQL SDK.
//!
//! [`RecordQlError`] covers metadata-integrity failures during selection
//! building and parse failures when loading catalogs or request trees.

use std::fmt;

/// Errors that can occur while building selections or loading metadata.
#[derive(Debug)]
pub enum RecordQlError {
    /// A relation field points at an object metadata id that is not in the
    /// catalog. Indicates corrupt metadata upstream; not recoverable here.
    ObjectMetadataNotFound { object_metadata_id: String },
    /// The catalog itself is structurally invalid (e.g. duplicate ids).
    InvalidCatalog(String),
    /// A catalog or requested-fields document failed to parse.
    Parse(serde_json::Error),
}

impl fmt::Display for RecordQlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObjectMetadataNotFound { object_metadata_id } => {
                write!(f, "Object metadata not found: {}", object_metadata_id)
            }
            Self::InvalidCatalog(msg) => write!(f, "Invalid metadata catalog: {}", msg),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for RecordQlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RecordQlError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
