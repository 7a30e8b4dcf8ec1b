//! Full query and mutation documents over object metadata.
//!
//! These wrap [`SelectionBuilder`](crate::selection::SelectionBuilder)
//! output in the operation shapes the record API expects: a paginated
//! connection for find-many, id-filtered lookup for find-one, and the
//! standard create/update/delete mutations. Variable types derive from the
//! capitalized singular name (`person` → `PersonFilterInput`).

use crate::error::RecordQlError;
use crate::metadata::{MetadataCatalog, ObjectMetadata};
use crate::record_fields::RecordGqlFields;
use crate::selection::SelectionBuilder;

/// Paginated connection query:
/// `query FindManyPeople($filter: ..., $orderBy: ..., $lastCursor: String, $limit: Int)`.
pub fn find_many_query(
    catalog: &MetadataCatalog,
    object: &ObjectMetadata,
    record_fields: Option<&RecordGqlFields>,
) -> Result<String, RecordQlError> {
    let selection = SelectionBuilder::new(catalog).object_selection(object, record_fields)?;
    let singular = capitalize(&object.name_singular);
    let plural = capitalize(&object.name_plural);
    Ok(format!(
        "query FindMany{plural}($filter: {singular}FilterInput, $orderBy: {singular}OrderByInput, $lastCursor: String, $limit: Int) {{\n  \
         {name}(filter: $filter, orderBy: $orderBy, first: $limit, after: $lastCursor) {{\n    \
         edges {{\n      \
         node {selection}\n      \
         cursor\n    \
         }}\n    \
         pageInfo {{\n      \
         hasNextPage\n      \
         endCursor\n    \
         }}\n    \
         totalCount\n  \
         }}\n}}",
        name = object.name_plural,
    ))
}

/// Single-record lookup by id:
/// `query FindOnePerson($objectRecordId: ID!)`.
pub fn find_one_query(
    catalog: &MetadataCatalog,
    object: &ObjectMetadata,
    record_fields: Option<&RecordGqlFields>,
) -> Result<String, RecordQlError> {
    let selection = SelectionBuilder::new(catalog).object_selection(object, record_fields)?;
    let singular = capitalize(&object.name_singular);
    Ok(format!(
        "query FindOne{singular}($objectRecordId: ID!) {{\n  \
         {name}(filter: {{id: {{eq: $objectRecordId}}}}) {selection}\n}}",
        name = object.name_singular,
    ))
}

/// `mutation CreateOnePerson($input: PersonCreateInput!)`, returning the
/// created record's full selection.
pub fn create_one_mutation(
    catalog: &MetadataCatalog,
    object: &ObjectMetadata,
    record_fields: Option<&RecordGqlFields>,
) -> Result<String, RecordQlError> {
    let selection = SelectionBuilder::new(catalog).object_selection(object, record_fields)?;
    let singular = capitalize(&object.name_singular);
    Ok(format!(
        "mutation CreateOne{singular}($input: {singular}CreateInput!) {{\n  \
         create{singular}(data: $input) {selection}\n}}",
    ))
}

/// `mutation UpdateOnePerson($idToUpdate: ID!, $input: PersonUpdateInput!)`.
pub fn update_one_mutation(
    catalog: &MetadataCatalog,
    object: &ObjectMetadata,
    record_fields: Option<&RecordGqlFields>,
) -> Result<String, RecordQlError> {
    let selection = SelectionBuilder::new(catalog).object_selection(object, record_fields)?;
    let singular = capitalize(&object.name_singular);
    Ok(format!(
        "mutation UpdateOne{singular}($idToUpdate: ID!, $input: {singular}UpdateInput!) {{\n  \
         update{singular}(id: $idToUpdate, data: $input) {selection}\n}}",
    ))
}

/// `mutation DeleteOnePerson($idToDelete: ID!)`. Only the id of the deleted
/// record comes back.
pub fn delete_one_mutation(object: &ObjectMetadata) -> String {
    let singular = capitalize(&object.name_singular);
    format!(
        "mutation DeleteOne{singular}($idToDelete: ID!) {{\n  \
         delete{singular}(id: $idToDelete) {{\n    \
         id\n  \
         }}\n}}",
    )
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
