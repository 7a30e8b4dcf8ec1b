//! Response types for the paginated connection envelope.
//!
//! Find-many documents built by [`crate::query::find_many_query`] come back
//! as an edges/node connection; these types deserialize that shape.

use serde::{Deserialize, Serialize};

/// Cursor-based page info.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
    pub has_previous_page: Option<bool>,
    pub start_cursor: Option<String>,
}

/// One edge of a connection: the record plus its cursor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct RecordEdge<T> {
    pub node: T,
    #[serde(default)]
    pub cursor: Option<String>,
}

/// A paginated collection of records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct RecordConnection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<RecordEdge<T>>,
    #[serde(default)]
    pub page_info: PageInfo,
    #[serde(default)]
    pub total_count: Option<i64>,
}
