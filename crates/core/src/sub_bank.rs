//! Sub-bank — grouping of materials, scoped to one bank.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{EntityId, Timestamp};

/// A sub-bank as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubBank {
    pub id: EntityId,
    pub bank_id: EntityId,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// Input for creating a sub-bank under an existing bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubBank {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub bank_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Input for updating a sub-bank; the target id travels in the URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubBank {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub bank_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidateInput;
    use uuid::Uuid;

    #[test]
    fn create_sub_bank_rejects_empty_name() {
        let input = CreateSubBank {
            name: String::new(),
            bank_id: Uuid::new_v4(),
            description: None,
        };
        assert!(input.validate_input().is_err());
    }
}
