//! Library — top-level grouping of material banks.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{EntityId, Timestamp};

/// A material library as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Library {
    pub id: EntityId,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// Input for creating a library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLibrary {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Input for updating a library; the target id travels in the URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLibrary {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidateInput;

    #[test]
    fn create_library_accepts_non_empty_name() {
        let input = CreateLibrary {
            name: "Metals".to_string(),
            description: None,
        };
        assert!(input.validate_input().is_ok());
    }

    #[test]
    fn create_library_rejects_empty_name() {
        let input = CreateLibrary {
            name: String::new(),
            description: Some("alloy steels".to_string()),
        };
        let err = input.validate_input().unwrap_err();
        assert_eq!(err.fields()[0].field, "name");
    }

    #[test]
    fn library_round_trips_through_camel_case_json() {
        let json = serde_json::json!({
            "id": "7f2c1a4e-9b3d-4c5e-8f6a-1b2c3d4e5f60",
            "name": "Polymers",
            "description": null,
            "createdAt": "2025-03-01T12:00:00Z",
        });
        let library: Library = serde_json::from_value(json).unwrap();
        assert_eq!(library.name, "Polymers");
        assert!(library.description.is_none());
    }

    #[test]
    fn library_rejects_malformed_id() {
        let json = serde_json::json!({
            "id": "not-a-uuid",
            "name": "Polymers",
            "createdAt": "2025-03-01T12:00:00Z",
        });
        assert!(serde_json::from_value::<Library>(json).is_err());
    }
}
