//! Shared test fixtures: a small CRM metadata catalog.
//!
//! Four interlinked object types (person, company, workspaceMember,
//! opportunity) with a representative mix of scalars, composites, and
//! relations in both directions. Field order is part of the fixture —
//! selection tests pin output strings that depend on it.

use recordql_sdk::{CompositeKind, FieldMetadata, MetadataCatalog, ObjectMetadata};

pub const PERSON_OBJECT_ID: &str = "20202020-e674-48e5-a542-72570eee7213";
pub const COMPANY_OBJECT_ID: &str = "20202020-b374-4779-a561-80086cb2e17f";
pub const WORKSPACE_MEMBER_OBJECT_ID: &str = "20202020-463f-435b-828c-107e007a2711";
pub const OPPORTUNITY_OBJECT_ID: &str = "20202020-9549-49dd-b2b2-883999db8938";

/// Build the mock catalog.
pub fn mock_catalog() -> MetadataCatalog {
    MetadataCatalog::new(vec![
        ObjectMetadata::new(
            PERSON_OBJECT_ID,
            "person",
            "people",
            vec![
                FieldMetadata::relation_to_one("company", COMPANY_OBJECT_ID),
                FieldMetadata::composite("xLink", CompositeKind::Links),
                FieldMetadata::scalar("id"),
                FieldMetadata::scalar("createdAt"),
                FieldMetadata::scalar("city"),
                FieldMetadata::scalar("email"),
                FieldMetadata::scalar("jobTitle"),
                FieldMetadata::composite("name", CompositeKind::FullName),
                FieldMetadata::scalar("phone"),
                FieldMetadata::composite("linkedinLink", CompositeKind::Links),
                FieldMetadata::scalar("updatedAt"),
                FieldMetadata::scalar("avatarUrl"),
                FieldMetadata::scalar("companyId"),
                FieldMetadata::relation_to_many("opportunities", OPPORTUNITY_OBJECT_ID),
            ],
        ),
        ObjectMetadata::new(
            COMPANY_OBJECT_ID,
            "company",
            "companies",
            vec![
                FieldMetadata::composite("xLink", CompositeKind::Links),
                FieldMetadata::relation_to_one("accountOwner", WORKSPACE_MEMBER_OBJECT_ID),
                FieldMetadata::composite("linkedinLink", CompositeKind::Links),
                FieldMetadata::scalar("domainName"),
                FieldMetadata::composite("annualRecurringRevenue", CompositeKind::Currency),
                FieldMetadata::scalar("createdAt"),
                FieldMetadata::composite("address", CompositeKind::Address),
                FieldMetadata::scalar("updatedAt"),
                FieldMetadata::relation_to_many("people", PERSON_OBJECT_ID),
                FieldMetadata::scalar("name"),
                FieldMetadata::scalar("accountOwnerId"),
                FieldMetadata::scalar("employees"),
                FieldMetadata::scalar("id"),
                FieldMetadata::scalar("idealCustomerProfile"),
            ],
        ),
        ObjectMetadata::new(
            WORKSPACE_MEMBER_OBJECT_ID,
            "workspaceMember",
            "workspaceMembers",
            vec![
                FieldMetadata::composite("name", CompositeKind::FullName),
                FieldMetadata::scalar("colorScheme"),
                FieldMetadata::scalar("avatarUrl"),
                FieldMetadata::scalar("locale"),
                FieldMetadata::scalar("id"),
                FieldMetadata::scalar("createdAt"),
                FieldMetadata::scalar("updatedAt"),
            ],
        ),
        ObjectMetadata::new(
            OPPORTUNITY_OBJECT_ID,
            "opportunity",
            "opportunities",
            vec![
                FieldMetadata::composite("amount", CompositeKind::Currency),
                FieldMetadata::scalar("closeDate"),
                FieldMetadata::scalar("probability"),
                FieldMetadata::scalar("stage"),
                FieldMetadata::relation_to_one("pointOfContact", PERSON_OBJECT_ID),
                FieldMetadata::relation_to_one("company", COMPANY_OBJECT_ID),
                FieldMetadata::scalar("id"),
                FieldMetadata::scalar("createdAt"),
                FieldMetadata::scalar("updatedAt"),
                FieldMetadata::scalar("personId"),
                FieldMetadata::scalar("companyId"),
            ],
        ),
    ])
    .expect("mock catalog ids are unique")
}

/// The mock catalog in its JSON file form, for CLI tests.
pub fn mock_catalog_json() -> String {
    mock_catalog()
        .to_json_string()
        .expect("mock catalog serializes")
}
