//! Bank — mid-level grouping of sub-banks, scoped to one library.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{EntityId, Timestamp};

/// A material bank as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    pub id: EntityId,
    pub library_id: EntityId,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// Input for creating a bank under an existing library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBank {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub library_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Input for updating a bank; the target id travels in the URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBank {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub library_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
