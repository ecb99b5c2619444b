//! Material — leaf record carrying physical/engineering properties,
//! optionally scoped to one sub-bank.
//!
//! Material read endpoints return the record together with its nested
//! ancestor chain; [`MaterialRecord`] models that shape explicitly
//! instead of reaching into loosely-typed JSON.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::EntityId;

/// A material as returned by the API.
///
/// Everything beyond `id` and `name` is nullable: the catalog holds
/// partially filled records, and a material without a sub-bank is a
/// valid (orphaned) entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: EntityId,
    #[serde(default)]
    pub sub_bank_id: Option<EntityId>,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Identifier in the external CAD material database.
    #[validate(range(min = 1, message = "external material id must be positive"))]
    #[serde(default)]
    pub external_mat_id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub density: Option<f64>,
    #[serde(default)]
    pub elastic_module: Option<f64>,
    #[serde(default)]
    pub tensile_strength: Option<f64>,
    #[serde(default)]
    pub thermal_conductivity: Option<f64>,
    #[serde(default)]
    pub thermal_expansion: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub angle: Option<f64>,
    #[serde(default)]
    pub environment_data: Option<String>,
    #[serde(default)]
    pub application_data: Option<String>,
    #[serde(default)]
    pub reduced_name: Option<String>,
}

/// Identifying slice of a library inside a nested material record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LibraryNode {
    pub id: EntityId,
    pub name: String,
}

/// Identifying slice of a bank inside a nested material record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BankNode {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    #[validate(nested)]
    pub library: Option<LibraryNode>,
}

/// Identifying slice of a sub-bank inside a nested material record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubBankNode {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    #[validate(nested)]
    pub bank: Option<BankNode>,
}

/// A material plus its nested ancestor chain, as returned by the
/// material read endpoints.  Each level of the chain may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRecord {
    #[serde(flatten)]
    #[validate(nested)]
    pub material: Material,
    #[serde(default)]
    #[validate(nested)]
    pub sub_bank: Option<SubBankNode>,
}

/// Input for creating a material.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaterial {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_bank_id: Option<EntityId>,
    #[validate(range(min = 1, message = "external material id must be positive"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_mat_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elastic_module: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tensile_strength: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thermal_conductivity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thermal_expansion: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduced_name: Option<String>,
}

/// Input for updating a material; the target id travels in the URL.
pub type UpdateMaterial = CreateMaterial;
