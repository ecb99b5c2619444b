//! Material repository operations, including the create-with-hierarchy
//! call.

use matcat_core::error::ValidateInput;
use matcat_core::hierarchy::{filter_children, FullHierarchyRequest};
use matcat_core::material::{CreateMaterial, Material, MaterialRecord, UpdateMaterial};
use matcat_core::types::EntityId;

use crate::client::CatalogClient;
use crate::config;
use crate::error::{ClientError, ClientResult};
use crate::invalidate::tags;

impl CatalogClient {
    /// List materials with their nested ancestor chains, optionally
    /// narrowed to one sub-bank (client-side filter).
    pub async fn list_materials(
        &self,
        sub_bank: Option<EntityId>,
    ) -> ClientResult<Vec<MaterialRecord>> {
        let items: Vec<MaterialRecord> = self.fetch_list(&self.config().material_url).await?;
        let items = match sub_bank {
            Some(id) => filter_children(&items, id),
            None => items,
        };
        tracing::debug!(count = items.len(), "Listed materials");
        Ok(items)
    }

    /// Fetch one material with its nested ancestor chain; `None` when
    /// the id does not exist.
    pub async fn get_material(&self, id: EntityId) -> ClientResult<Option<MaterialRecord>> {
        let url = format!("{}/{}", self.config().material_url, id);
        self.fetch_one(&url).await
    }

    /// Create a material.  Validation failures are reported before any
    /// request is issued.
    pub async fn create_material(&self, input: &CreateMaterial) -> ClientResult<Material> {
        input.validate_input()?;
        self.post_entity(&self.config().material_url, input, tags::MATERIALS)
            .await
    }

    /// Create a material together with any inline-created ancestors in
    /// one call.  Requires the hierarchy endpoint to be configured.
    pub async fn create_full_hierarchy(
        &self,
        request: &FullHierarchyRequest,
    ) -> ClientResult<Material> {
        request.validate_request()?;
        let url = self
            .config()
            .hierarchy_url
            .clone()
            .ok_or(ClientError::Config {
                name: config::ENV_HIERARCHY_URL,
            })?;
        self.post_entity(&url, request, tags::MATERIALS).await
    }

    /// Update a material.  `None` means a bare success status.
    pub async fn update_material(
        &self,
        id: EntityId,
        input: &UpdateMaterial,
    ) -> ClientResult<Option<Material>> {
        input.validate_input()?;
        let url = format!("{}/{}", self.config().material_url, id);
        self.put_entity(&url, input, tags::MATERIALS).await
    }

    /// Delete a material.  True only when the server answered 204.
    pub async fn delete_material(&self, id: EntityId) -> ClientResult<bool> {
        let url = format!("{}/{}", self.config().material_url, id);
        self.delete_entity(&url, tags::MATERIALS).await
    }
}
