//! Query-document builders against the shared mock catalog.

use recordql_sdk::query::{
    create_one_mutation, delete_one_mutation, find_many_query, find_one_query,
    update_one_mutation,
};
use recordql_sdk::record_fields;
use recordql_sdk::{FieldMetadata, MetadataCatalog, ObjectMetadata, RecordQlError};
use recordql_test_utils::mock_catalog;

#[test]
fn find_many_wraps_the_selection_in_a_connection() {
    let catalog = mock_catalog();
    let person = catalog.object_by_name("person").unwrap();
    let record_fields = record_fields::from_json_str(r#"{"id": true}"#).unwrap();
    let query = find_many_query(&catalog, person, Some(&record_fields)).unwrap();
    assert_eq!(
        query,
        "query FindManyPeople($filter: PersonFilterInput, $orderBy: PersonOrderByInput, $lastCursor: String, $limit: Int) {
  people(filter: $filter, orderBy: $orderBy, first: $limit, after: $lastCursor) {
    edges {
      node {
__typename
id
}
      cursor
    }
    pageInfo {
      hasNextPage
      endCursor
    }
    totalCount
  }
}"
    );
}

#[test]
fn find_many_defaults_to_the_full_root_selection() {
    let catalog = mock_catalog();
    let company = catalog.object_by_name("company").unwrap();
    let query = find_many_query(&catalog, company, None).unwrap();
    assert!(query.starts_with("query FindManyCompanies($filter: CompanyFilterInput"));
    assert!(query.contains("companies(filter: $filter"));
    // Root relations are present, one hop deep.
    assert!(query.contains("accountOwner\n{\n__typename\n"));
    assert!(query.contains("totalCount"));
}

#[test]
fn find_one_filters_by_record_id() {
    let catalog = mock_catalog();
    let person = catalog.object_by_name("person").unwrap();
    let record_fields = record_fields::from_json_str(r#"{"id": true}"#).unwrap();
    let query = find_one_query(&catalog, person, Some(&record_fields)).unwrap();
    assert_eq!(
        query,
        "query FindOnePerson($objectRecordId: ID!) {
  person(filter: {id: {eq: $objectRecordId}}) {
__typename
id
}
}"
    );
}

#[test]
fn create_one_returns_the_selection() {
    let catalog = mock_catalog();
    let person = catalog.object_by_name("person").unwrap();
    let record_fields = record_fields::from_json_str(r#"{"id": true, "email": true}"#).unwrap();
    let mutation = create_one_mutation(&catalog, person, Some(&record_fields)).unwrap();
    assert_eq!(
        mutation,
        "mutation CreateOnePerson($input: PersonCreateInput!) {
  createPerson(data: $input) {
__typename
id
email
}
}"
    );
}

#[test]
fn update_one_takes_id_and_input() {
    let catalog = mock_catalog();
    let member = catalog.object_by_name("workspaceMember").unwrap();
    let record_fields = record_fields::from_json_str(r#"{"id": true}"#).unwrap();
    let mutation = update_one_mutation(&catalog, member, Some(&record_fields)).unwrap();
    assert_eq!(
        mutation,
        "mutation UpdateOneWorkspaceMember($idToUpdate: ID!, $input: WorkspaceMemberUpdateInput!) {
  updateWorkspaceMember(id: $idToUpdate, data: $input) {
__typename
id
}
}"
    );
}

#[test]
fn delete_one_returns_only_the_id() {
    let catalog = mock_catalog();
    let person = catalog.object_by_name("person").unwrap();
    assert_eq!(
        delete_one_mutation(person),
        "mutation DeleteOnePerson($idToDelete: ID!) {
  deletePerson(id: $idToDelete) {
    id
  }
}"
    );
}

#[test]
fn dangling_relation_target_propagates_not_found() {
    let catalog = MetadataCatalog::new(vec![ObjectMetadata::new(
        "company-id",
        "company",
        "companies",
        vec![FieldMetadata::relation_to_one("accountOwner", "missing-member-id")],
    )])
    .unwrap();
    let company = catalog.object_by_name("company").unwrap();
    let err = find_many_query(&catalog, company, None).unwrap_err();
    assert!(matches!(
        err,
        RecordQlError::ObjectMetadataNotFound { ref object_metadata_id }
            if object_metadata_id == "missing-member-id"
    ));
}
