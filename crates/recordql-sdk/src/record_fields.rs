//! The sparse "requested fields" tree.
//!
//! Callers narrow a generated selection by supplying a nested map from field
//! name to either a bare include-marker (`true`) or a sub-tree that narrows
//! the relation target the same way. Absent keys are excluded. The JSON wire
//! form matches what clients send, e.g.
//! `{"accountOwner": {"id": true, "name": true}, "people": true}`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A requested-fields map: field name to inclusion marker or sub-tree.
pub type RecordGqlFields = BTreeMap<String, RecordFieldsNode>;

/// One node of the requested-fields tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordFieldsNode {
    /// `true` includes the field with no further restriction; `false`
    /// excludes it (clients do send literal `false`).
    Marker(bool),
    /// Restricts which fields of a relation target are included.
    Select(RecordGqlFields),
}

impl RecordFieldsNode {
    /// Whether this node includes its field at all. An empty sub-tree is
    /// treated as excluded, the same as an absent key.
    pub fn is_included(&self) -> bool {
        match self {
            Self::Marker(included) => *included,
            Self::Select(fields) => !fields.is_empty(),
        }
    }

    /// The restriction to pass down when descending into a relation target.
    /// Markers carry no restriction.
    pub fn nested(&self) -> Option<&RecordGqlFields> {
        match self {
            Self::Marker(_) => None,
            Self::Select(fields) => Some(fields),
        }
    }
}

/// Parse a requested-fields tree from its JSON object form.
pub fn from_json_str(json: &str) -> Result<RecordGqlFields, crate::error::RecordQlError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_markers_and_subtrees() {
        let fields =
            from_json_str(r#"{"people": true, "accountOwner": {"id": true, "name": true}}"#)
                .unwrap();
        assert_eq!(fields["people"], RecordFieldsNode::Marker(true));
        let nested = fields["accountOwner"].nested().unwrap();
        assert_eq!(nested.len(), 2);
        assert_eq!(nested["id"], RecordFieldsNode::Marker(true));
    }

    #[test]
    fn false_marker_is_excluded() {
        let fields = from_json_str(r#"{"id": true, "employees": false}"#).unwrap();
        assert!(fields["id"].is_included());
        assert!(!fields["employees"].is_included());
    }

    #[test]
    fn empty_subtree_is_excluded() {
        let node = RecordFieldsNode::Select(RecordGqlFields::new());
        assert!(!node.is_included());
    }

    #[test]
    fn non_empty_subtree_is_included() {
        let fields = from_json_str(r#"{"accountOwner": {"id": true}}"#).unwrap();
        assert!(fields["accountOwner"].is_included());
    }

    #[test]
    fn markers_carry_no_restriction() {
        assert_eq!(RecordFieldsNode::Marker(true).nested(), None);
    }

    #[test]
    fn deeply_nested_trees_parse() {
        let fields =
            from_json_str(r#"{"company": {"accountOwner": {"name": {"firstName": true}}}}"#)
                .unwrap();
        let company = fields["company"].nested().unwrap();
        let owner = company["accountOwner"].nested().unwrap();
        assert!(owner["name"].is_included());
    }

    #[test]
    fn rejects_non_object_input() {
        assert!(from_json_str("[1, 2]").is_err());
    }
}
