//! Object-metadata model.
//!
//! CRM record schemas are not fixed type declarations: each workspace
//! describes its object types (Person, Company, ...) at runtime as
//! [`ObjectMetadata`] records. The [`MetadataCatalog`] holds every object
//! type of a workspace and is the single input the selection and query
//! builders read from.

use crate::error::RecordQlError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of field a metadata entry describes.
///
/// Internally tagged as `kind` in the JSON form, so a relation field reads
/// `{"name": "company", "kind": "relationToOne", "relationTargetObjectId": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldKind {
    /// A plain leaf value (text, number, date, boolean, uuid, ...).
    Scalar,
    /// One logical field backed by a fixed set of sub-fields.
    Composite {
        #[serde(rename = "compositeType")]
        composite_type: CompositeKind,
    },
    /// Singular reference to another object type.
    RelationToOne {
        #[serde(rename = "relationTargetObjectId")]
        relation_target_object_id: String,
    },
    /// Paginated collection of another object type.
    RelationToMany {
        #[serde(rename = "relationTargetObjectId")]
        relation_target_object_id: String,
    },
}

impl FieldKind {
    pub fn is_relation(&self) -> bool {
        matches!(self, Self::RelationToOne { .. } | Self::RelationToMany { .. })
    }

    /// The target object metadata id, for relation kinds.
    pub fn relation_target(&self) -> Option<&str> {
        match self {
            Self::RelationToOne {
                relation_target_object_id,
            }
            | Self::RelationToMany {
                relation_target_object_id,
            } => Some(relation_target_object_id),
            _ => None,
        }
    }

    /// Short label used in human-readable listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Composite { .. } => "composite",
            Self::RelationToOne { .. } => "relationToOne",
            Self::RelationToMany { .. } => "relationToMany",
        }
    }
}

/// The closed set of composite field shapes.
///
/// Each kind maps to a fixed, process-wide ordered list of sub-field names;
/// composite fields are always retrieved whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompositeKind {
    FullName,
    Links,
    Address,
    Currency,
}

impl CompositeKind {
    /// The ordered sub-field names this composite expands to.
    pub fn subfields(self) -> &'static [&'static str] {
        match self {
            Self::FullName => &["firstName", "lastName"],
            Self::Links => &["primaryLinkUrl", "primaryLinkLabel", "secondaryLinks"],
            Self::Address => &[
                "addressStreet1",
                "addressStreet2",
                "addressCity",
                "addressState",
                "addressCountry",
                "addressPostcode",
                "addressLat",
                "addressLng",
            ],
            Self::Currency => &["amountMicros", "currencyCode"],
        }
    }
}

/// A single field of an object type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMetadata {
    pub name: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    /// Deactivated fields are skipped when building object selections.
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

fn is_true(b: &bool) -> bool {
    *b
}

impl FieldMetadata {
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Scalar,
            is_active: true,
        }
    }

    pub fn composite(name: impl Into<String>, composite_type: CompositeKind) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Composite { composite_type },
            is_active: true,
        }
    }

    pub fn relation_to_one(name: impl Into<String>, target_object_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::RelationToOne {
                relation_target_object_id: target_object_id.into(),
            },
            is_active: true,
        }
    }

    pub fn relation_to_many(name: impl Into<String>, target_object_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::RelationToMany {
                relation_target_object_id: target_object_id.into(),
            },
            is_active: true,
        }
    }
}

/// Metadata for one object type, with its fields in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMetadata {
    pub id: String,
    pub name_singular: String,
    pub name_plural: String,
    #[serde(default)]
    pub fields: Vec<FieldMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ObjectMetadata {
    pub fn new(
        id: impl Into<String>,
        name_singular: impl Into<String>,
        name_plural: impl Into<String>,
        fields: Vec<FieldMetadata>,
    ) -> Self {
        Self {
            id: id.into(),
            name_singular: name_singular.into(),
            name_plural: name_plural.into(),
            fields,
            created_at: None,
            updated_at: None,
        }
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldMetadata> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// All object types of a workspace, in a stable declared order.
///
/// Serializes as a plain JSON array of [`ObjectMetadata`], which is also the
/// catalog file format the CLI consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataCatalog {
    objects: Vec<ObjectMetadata>,
}

impl MetadataCatalog {
    /// Build a catalog, rejecting duplicate object ids.
    pub fn new(objects: Vec<ObjectMetadata>) -> Result<Self, RecordQlError> {
        for (i, object) in objects.iter().enumerate() {
            if objects[..i].iter().any(|o| o.id == object.id) {
                return Err(RecordQlError::InvalidCatalog(format!(
                    "duplicate object id '{}'",
                    object.id
                )));
            }
        }
        Ok(Self { objects })
    }

    /// Parse a catalog from its JSON array form.
    pub fn from_json_str(json: &str) -> Result<Self, RecordQlError> {
        let objects: Vec<ObjectMetadata> = serde_json::from_str(json)?;
        Self::new(objects)
    }

    /// Serialize back to the pretty-printed JSON array form.
    pub fn to_json_string(&self) -> Result<String, RecordQlError> {
        Ok(serde_json::to_string_pretty(&self.objects)?)
    }

    pub fn objects(&self) -> impl Iterator<Item = &ObjectMetadata> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn object_by_id(&self, id: &str) -> Option<&ObjectMetadata> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn object_by_name(&self, name_singular: &str) -> Option<&ObjectMetadata> {
        self.objects.iter().find(|o| o.name_singular == name_singular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_kind_deserializes_scalar() {
        let json = r#"{"name": "id", "kind": "scalar"}"#;
        let field: FieldMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(field.name, "id");
        assert_eq!(field.kind, FieldKind::Scalar);
        assert!(field.is_active);
    }

    #[test]
    fn field_kind_deserializes_composite() {
        let json = r#"{"name": "name", "kind": "composite", "compositeType": "fullName"}"#;
        let field: FieldMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(
            field.kind,
            FieldKind::Composite {
                composite_type: CompositeKind::FullName
            }
        );
    }

    #[test]
    fn field_kind_deserializes_relation() {
        let json = r#"{
            "name": "company",
            "kind": "relationToOne",
            "relationTargetObjectId": "abc-123",
            "isActive": false
        }"#;
        let field: FieldMetadata = serde_json::from_str(json).unwrap();
        assert!(field.kind.is_relation());
        assert_eq!(field.kind.relation_target(), Some("abc-123"));
        assert!(!field.is_active);
    }

    #[test]
    fn field_metadata_serializes_with_flattened_kind() {
        let field = FieldMetadata::relation_to_many("people", "person-id");
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["kind"], "relationToMany");
        assert_eq!(json["relationTargetObjectId"], "person-id");
        // `isActive: true` is the default and is omitted.
        assert!(json.get("isActive").is_none());
    }

    #[test]
    fn scalar_has_no_relation_target() {
        assert_eq!(FieldKind::Scalar.relation_target(), None);
        assert!(!FieldKind::Scalar.is_relation());
    }

    #[test]
    fn composite_subfield_tables() {
        assert_eq!(CompositeKind::FullName.subfields(), ["firstName", "lastName"]);
        assert_eq!(CompositeKind::Currency.subfields().len(), 2);
        assert_eq!(CompositeKind::Links.subfields().len(), 3);
        assert_eq!(CompositeKind::Address.subfields().len(), 8);
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let object = ObjectMetadata::new("same-id", "person", "people", vec![]);
        let err = MetadataCatalog::new(vec![object.clone(), object]).unwrap_err();
        assert!(err.to_string().contains("duplicate object id 'same-id'"));
    }

    #[test]
    fn catalog_round_trips_through_json() {
        let catalog = MetadataCatalog::new(vec![ObjectMetadata::new(
            "person-id",
            "person",
            "people",
            vec![
                FieldMetadata::scalar("id"),
                FieldMetadata::composite("name", CompositeKind::FullName),
                FieldMetadata::relation_to_one("company", "company-id"),
            ],
        )])
        .unwrap();

        let json = catalog.to_json_string().unwrap();
        let parsed = MetadataCatalog::from_json_str(&json).unwrap();
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn catalog_lookup_by_id_and_name() {
        let catalog = MetadataCatalog::new(vec![ObjectMetadata::new(
            "person-id",
            "person",
            "people",
            vec![],
        )])
        .unwrap();
        assert!(catalog.object_by_id("person-id").is_some());
        assert!(catalog.object_by_name("person").is_some());
        assert!(catalog.object_by_name("people").is_none());
        assert!(catalog.object_by_id("nope").is_none());
    }

    #[test]
    fn object_metadata_parses_timestamps() {
        let json = r#"{
            "id": "x",
            "nameSingular": "person",
            "namePlural": "people",
            "fields": [],
            "updatedAt": "2024-04-01T12:00:00Z"
        }"#;
        let object: ObjectMetadata = serde_json::from_str(json).unwrap();
        assert!(object.created_at.is_none());
        assert_eq!(
            object.updated_at.map(|t| t.timestamp()),
            Some(1711972800)
        );
    }
}
