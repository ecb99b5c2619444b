//! Material detail sub-resources: shaders, colors, custom properties
//! and physical properties.
//!
//! Each variant lives under the owning material,
//! `{detail_base}/{material_id}/{segment}`.  The POST body carries the
//! material id injected from the path argument, so inputs never repeat
//! it.

use serde::Serialize;

use matcat_core::detail::{
    Color, ColorInput, CustomProperty, CustomPropertyInput, PhysicalProperty,
    PhysicalPropertyInput, Shader, ShaderInput,
};
use matcat_core::error::ValidateInput;
use matcat_core::types::EntityId;

use crate::client::CatalogClient;
use crate::error::ClientResult;
use crate::invalidate::tags;

const SHADERS: &str = "shaders";
const COLORS: &str = "colors";
const CUSTOM: &str = "custom";
const PHYSICAL: &str = "physical";

/// POST body for a detail record: the variant input plus the owning
/// material id.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DetailPayload<'a, T: Serialize> {
    #[serde(flatten)]
    input: &'a T,
    material_id: EntityId,
}

impl CatalogClient {
    fn detail_url(&self, material_id: EntityId, segment: &str) -> String {
        format!("{}/{}/{}", self.config().detail_url, material_id, segment)
    }

    async fn list_details<T>(&self, material_id: EntityId, segment: &str) -> ClientResult<Vec<T>>
    where
        T: serde::de::DeserializeOwned + ValidateInput,
    {
        let items = self.fetch_list(&self.detail_url(material_id, segment)).await?;
        tracing::debug!(%material_id, segment, count = items.len(), "Listed material details");
        Ok(items)
    }

    async fn create_detail<In, T>(
        &self,
        material_id: EntityId,
        segment: &str,
        input: &In,
    ) -> ClientResult<T>
    where
        In: Serialize + ValidateInput,
        T: serde::de::DeserializeOwned + ValidateInput,
    {
        input.validate_input()?;
        let payload = DetailPayload { input, material_id };
        self.post_entity(
            &self.detail_url(material_id, segment),
            &payload,
            tags::MATERIAL_DETAILS,
        )
        .await
    }

    async fn delete_detail(
        &self,
        material_id: EntityId,
        segment: &str,
        id: EntityId,
    ) -> ClientResult<bool> {
        let url = format!("{}/{}", self.detail_url(material_id, segment), id);
        self.delete_entity(&url, tags::MATERIAL_DETAILS).await
    }

    // ---- shaders ----

    /// List the shaders attached to a material.
    pub async fn list_shaders(&self, material_id: EntityId) -> ClientResult<Vec<Shader>> {
        self.list_details(material_id, SHADERS).await
    }

    /// Attach a shader to a material.
    pub async fn create_shader(
        &self,
        material_id: EntityId,
        input: &ShaderInput,
    ) -> ClientResult<Shader> {
        self.create_detail(material_id, SHADERS, input).await
    }

    /// Delete a shader.  True only when the server answered 204.
    pub async fn delete_shader(&self, material_id: EntityId, id: EntityId) -> ClientResult<bool> {
        self.delete_detail(material_id, SHADERS, id).await
    }

    // ---- colors ----

    /// List the colors attached to a material.
    pub async fn list_colors(&self, material_id: EntityId) -> ClientResult<Vec<Color>> {
        self.list_details(material_id, COLORS).await
    }

    /// Attach a color to a material.
    pub async fn create_color(
        &self,
        material_id: EntityId,
        input: &ColorInput,
    ) -> ClientResult<Color> {
        self.create_detail(material_id, COLORS, input).await
    }

    /// Delete a color.  True only when the server answered 204.
    pub async fn delete_color(&self, material_id: EntityId, id: EntityId) -> ClientResult<bool> {
        self.delete_detail(material_id, COLORS, id).await
    }

    // ---- custom properties ----

    /// List the custom properties attached to a material.
    pub async fn list_custom_properties(
        &self,
        material_id: EntityId,
    ) -> ClientResult<Vec<CustomProperty>> {
        self.list_details(material_id, CUSTOM).await
    }

    /// Attach a custom property to a material.
    pub async fn create_custom_property(
        &self,
        material_id: EntityId,
        input: &CustomPropertyInput,
    ) -> ClientResult<CustomProperty> {
        self.create_detail(material_id, CUSTOM, input).await
    }

    /// Delete a custom property.  True only when the server answered 204.
    pub async fn delete_custom_property(
        &self,
        material_id: EntityId,
        id: EntityId,
    ) -> ClientResult<bool> {
        self.delete_detail(material_id, CUSTOM, id).await
    }

    // ---- physical properties ----

    /// List the physical properties attached to a material.
    pub async fn list_physical_properties(
        &self,
        material_id: EntityId,
    ) -> ClientResult<Vec<PhysicalProperty>> {
        self.list_details(material_id, PHYSICAL).await
    }

    /// Attach a physical property to a material.
    pub async fn create_physical_property(
        &self,
        material_id: EntityId,
        input: &PhysicalPropertyInput,
    ) -> ClientResult<PhysicalProperty> {
        self.create_detail(material_id, PHYSICAL, input).await
    }

    /// Delete a physical property.  True only when the server answered 204.
    pub async fn delete_physical_property(
        &self,
        material_id: EntityId,
        id: EntityId,
    ) -> ClientResult<bool> {
        self.delete_detail(material_id, PHYSICAL, id).await
    }
}
