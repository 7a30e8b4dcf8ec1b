//! GraphQL selection-set construction from object metadata.
//!
//! [`SelectionBuilder`] turns a [`FieldMetadata`] (or a whole
//! [`ObjectMetadata`]) into the selection-set fragment that retrieves it:
//! scalars become bare field names, composites expand to their fixed
//! sub-field block, and relations recurse into the target object's fields,
//! optionally narrowed by a [`RecordGqlFields`] tree. Output is plain string
//! splicing; consumers embed the fragment into a larger query document and
//! must tolerate its internal whitespace.
//!
//! Without an explicit request tree, relation expansion stops one hop in:
//! a relation's sub-selection contains only the target's scalar and
//! composite fields. This keeps generated queries bounded no matter how
//! interconnected the metadata graph is. An explicit request tree overrides
//! the cutoff, and recursion is then bounded by the (finite) tree itself.

use crate::error::RecordQlError;
use crate::metadata::{FieldKind, FieldMetadata, MetadataCatalog, ObjectMetadata};
use crate::record_fields::RecordGqlFields;

/// Builds selection sets against one metadata catalog.
#[derive(Debug, Clone, Copy)]
pub struct SelectionBuilder<'a> {
    catalog: &'a MetadataCatalog,
}

impl<'a> SelectionBuilder<'a> {
    pub fn new(catalog: &'a MetadataCatalog) -> Self {
        Self { catalog }
    }

    /// Selection fragment for a single field.
    ///
    /// `record_fields` narrows a relation field's sub-selection; it has no
    /// effect on scalars, and composites always expand in full.
    ///
    /// # Errors
    ///
    /// [`RecordQlError::ObjectMetadataNotFound`] if a relation target id is
    /// missing from the catalog.
    pub fn field_selection(
        &self,
        field: &FieldMetadata,
        record_fields: Option<&RecordGqlFields>,
    ) -> Result<String, RecordQlError> {
        match &field.kind {
            FieldKind::Scalar => Ok(field.name.clone()),
            FieldKind::Composite { composite_type } => {
                let subfields: Vec<String> = composite_type
                    .subfields()
                    .iter()
                    .map(|s| format!("  {s}"))
                    .collect();
                Ok(format!("{}\n{{\n{}\n}}", field.name, subfields.join("\n")))
            }
            FieldKind::RelationToOne {
                relation_target_object_id,
            } => {
                let target = self.resolve(relation_target_object_id)?;
                let body = self.relation_body(target, record_fields)?;
                Ok(format!("{}\n{{\n{}\n}}", field.name, body))
            }
            FieldKind::RelationToMany {
                relation_target_object_id,
            } => {
                let target = self.resolve(relation_target_object_id)?;
                let body = self.relation_body(target, record_fields)?;
                Ok(format!(
                    "{}\n{{\n  edges {{\n    node {{\n{}\n}}\n  }}\n}}",
                    field.name, body
                ))
            }
        }
    }

    /// Root-level selection over a whole object type: `{ __typename ... }`.
    ///
    /// With no `record_fields` every active field is included, relations
    /// among them; each relation then expands one hop through
    /// [`field_selection`](Self::field_selection).
    pub fn object_selection(
        &self,
        object: &ObjectMetadata,
        record_fields: Option<&RecordGqlFields>,
    ) -> Result<String, RecordQlError> {
        let mut lines = vec!["__typename".to_string()];
        for field in object.fields.iter().filter(|f| f.is_active) {
            let child = match record_fields {
                None => None,
                Some(fields) => match fields.get(&field.name) {
                    Some(node) if node.is_included() => node.nested(),
                    _ => continue,
                },
            };
            lines.push(self.field_selection(field, child)?);
        }
        Ok(format!("{{\n{}\n}}", lines.join("\n")))
    }

    /// Field lines inside a relation block, `__typename` first.
    fn relation_body(
        &self,
        target: &ObjectMetadata,
        record_fields: Option<&RecordGqlFields>,
    ) -> Result<String, RecordQlError> {
        let mut lines = vec!["__typename".to_string()];
        for field in &target.fields {
            let child = match record_fields {
                // One-hop cutoff: unrestricted descent never expands a
                // relation inside a relation.
                None => {
                    if field.kind.is_relation() {
                        continue;
                    }
                    None
                }
                Some(fields) => match fields.get(&field.name) {
                    Some(node) if node.is_included() => node.nested(),
                    _ => continue,
                },
            };
            lines.push(self.field_selection(field, child)?);
        }
        Ok(lines.join("\n"))
    }

    fn resolve(&self, object_metadata_id: &str) -> Result<&'a ObjectMetadata, RecordQlError> {
        self.catalog.object_by_id(object_metadata_id).ok_or_else(|| {
            RecordQlError::ObjectMetadataNotFound {
                object_metadata_id: object_metadata_id.to_string(),
            }
        })
    }
}
