use anyhow::Context;
use recordql_sdk::{MetadataCatalog, ObjectMetadata};
use std::path::{Path, PathBuf};

/// Locate and parse the metadata catalog: `--catalog` flag first, then
/// `$RECORDQL_CATALOG`.
pub fn load_catalog(flag: Option<&Path>) -> anyhow::Result<MetadataCatalog> {
    let path = match flag {
        Some(p) => p.to_path_buf(),
        None => std::env::var_os("RECORDQL_CATALOG")
            .map(PathBuf::from)
            .ok_or_else(|| {
                anyhow::anyhow!("No catalog given. Pass --catalog <path> or set $RECORDQL_CATALOG.")
            })?,
    };
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read catalog file '{}'", path.display()))?;
    MetadataCatalog::from_json_str(&json)
        .with_context(|| format!("Failed to parse catalog file '{}'", path.display()))
}

/// Resolve an object reference (singular name, plural name, or UUID) to its
/// catalog entry.
pub fn resolve_object<'a>(
    catalog: &'a MetadataCatalog,
    reference: &str,
) -> anyhow::Result<&'a ObjectMetadata> {
    if uuid::Uuid::parse_str(reference).is_ok() {
        return catalog
            .object_by_id(reference)
            .ok_or_else(|| anyhow::anyhow!("Object '{}' not found", reference));
    }
    catalog
        .objects()
        .find(|o| o.name_singular == reference || o.name_plural == reference)
        .ok_or_else(|| anyhow::anyhow!("Object '{}' not found", reference))
}
