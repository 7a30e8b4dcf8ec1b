//! Metadata-driven GraphQL query generation for CRM-style record APIs.
//!
//! Record schemas are runtime data here, not compile-time types: a
//! [`MetadataCatalog`] describes each object type's fields, and
//! [`SelectionBuilder`] walks that metadata to produce GraphQL selection
//! sets, optionally narrowed by a [`RecordGqlFields`] request tree. The
//! [`query`] module wraps selections in complete find/create/update/delete
//! documents.

pub mod error;
pub mod metadata;
pub mod pagination;
pub mod query;
pub mod record_fields;
pub mod selection;

// Re-export key types at crate root for convenience.
pub use error::RecordQlError;
pub use metadata::{CompositeKind, FieldKind, FieldMetadata, MetadataCatalog, ObjectMetadata};
pub use pagination::{PageInfo, RecordConnection, RecordEdge};
pub use record_fields::{RecordFieldsNode, RecordGqlFields};
pub use selection::SelectionBuilder;
