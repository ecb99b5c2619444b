//! Material detail records: shaders, colors, custom properties and
//! physical properties.  One-to-many per material per variant.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::EntityId;

/// Rendering shader attached to a material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Shader {
    pub id: EntityId,
    pub material_id: EntityId,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub texture_path: Option<String>,
}

/// Display color attached to a material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub id: EntityId,
    pub material_id: EntityId,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Hex RGB value, e.g. `#a0b0c0`.
    pub hex: String,
}

/// Free-form key/value property attached to a material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomProperty {
    pub id: EntityId,
    pub material_id: EntityId,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub value: String,
}

/// Measured physical property attached to a material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalProperty {
    pub id: EntityId,
    pub material_id: EntityId,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Input for creating a shader; the owning material id is supplied
/// separately and injected by the repository client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShaderInput {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture_path: Option<String>,
}

/// Input for creating a color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ColorInput {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "hex value must not be empty"))]
    pub hex: String,
}

/// Input for creating a custom property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomPropertyInput {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub value: String,
}

/// Input for creating a physical property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalPropertyInput {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidateInput;

    #[test]
    fn shader_input_rejects_empty_name() {
        let input = ShaderInput {
            name: String::new(),
            texture_path: None,
        };
        assert!(input.validate_input().is_err());
    }

    #[test]
    fn color_input_reports_both_empty_fields() {
        let input = ColorInput {
            name: String::new(),
            hex: String::new(),
        };
        let err = input.validate_input().unwrap_err();
        assert_eq!(err.fields().len(), 2);
    }

    #[test]
    fn physical_property_input_accepts_valid() {
        let input = PhysicalPropertyInput {
            name: "density".to_string(),
            value: 7850.0,
            unit: Some("kg/m^3".to_string()),
        };
        assert!(input.validate_input().is_ok());
    }
}
