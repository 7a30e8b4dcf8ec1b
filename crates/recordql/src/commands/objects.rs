use recordql_sdk::MetadataCatalog;
use serde::Serialize;
use tabled::Tabled;

use super::helpers::resolve_object;
use crate::output::Format;

#[derive(Debug, Serialize, Tabled)]
struct ObjectRow {
    #[tabled(rename = "singular")]
    singular: String,
    #[tabled(rename = "plural")]
    plural: String,
    #[tabled(rename = "fields")]
    fields: usize,
    #[tabled(rename = "updated")]
    updated: String,
}

/// List the object types in the catalog.
pub fn run(catalog: &MetadataCatalog, format: Format) -> anyhow::Result<()> {
    let rows: Vec<ObjectRow> = catalog
        .objects()
        .map(|o| ObjectRow {
            singular: o.name_singular.clone(),
            plural: o.name_plural.clone(),
            fields: o.fields.len(),
            updated: o
                .updated_at
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();
    format.print_rows(&rows);
    Ok(())
}

#[derive(Debug, Serialize, Tabled)]
struct FieldRow {
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "kind")]
    kind: String,
    #[tabled(rename = "target")]
    target: String,
    #[tabled(rename = "active")]
    active: bool,
}

/// List one object type's fields.
pub fn run_fields(catalog: &MetadataCatalog, object: &str, format: Format) -> anyhow::Result<()> {
    let object = resolve_object(catalog, object)?;
    let rows: Vec<FieldRow> = object
        .fields
        .iter()
        .map(|f| FieldRow {
            name: f.name.clone(),
            kind: f.kind.label().to_string(),
            target: match f.kind.relation_target() {
                // Dangling targets are shown raw rather than hidden.
                Some(id) => catalog
                    .object_by_id(id)
                    .map(|o| o.name_singular.clone())
                    .unwrap_or_else(|| id.to_string()),
                None => "-".to_string(),
            },
            active: f.is_active,
        })
        .collect();
    format.print_rows(&rows);
    Ok(())
}
