//! Sub-bank repository operations.

use matcat_core::error::ValidateInput;
use matcat_core::hierarchy::filter_children;
use matcat_core::sub_bank::{CreateSubBank, SubBank, UpdateSubBank};
use matcat_core::types::EntityId;

use crate::client::CatalogClient;
use crate::error::ClientResult;
use crate::invalidate::tags;

impl CatalogClient {
    /// List sub-banks, optionally narrowed to one bank.  The filter is
    /// applied client-side over the fetched list.
    pub async fn list_sub_banks(&self, bank: Option<EntityId>) -> ClientResult<Vec<SubBank>> {
        let items: Vec<SubBank> = self.fetch_list(&self.config().sub_bank_url).await?;
        let items = match bank {
            Some(id) => filter_children(&items, id),
            None => items,
        };
        tracing::debug!(count = items.len(), "Listed sub-banks");
        Ok(items)
    }

    /// Fetch one sub-bank; `None` when the id does not exist.
    pub async fn get_sub_bank(&self, id: EntityId) -> ClientResult<Option<SubBank>> {
        let url = format!("{}/{}", self.config().sub_bank_url, id);
        self.fetch_one(&url).await
    }

    /// Create a sub-bank under an existing bank.
    pub async fn create_sub_bank(&self, input: &CreateSubBank) -> ClientResult<SubBank> {
        input.validate_input()?;
        self.post_entity(&self.config().sub_bank_url, input, tags::SUB_BANKS)
            .await
    }

    /// Update a sub-bank.  `None` means a bare success status.
    pub async fn update_sub_bank(
        &self,
        id: EntityId,
        input: &UpdateSubBank,
    ) -> ClientResult<Option<SubBank>> {
        input.validate_input()?;
        let url = format!("{}/{}", self.config().sub_bank_url, id);
        self.put_entity(&url, input, tags::SUB_BANKS).await
    }

    /// Delete a sub-bank.  True only when the server answered 204.
    pub async fn delete_sub_bank(&self, id: EntityId) -> ClientResult<bool> {
        let url = format!("{}/{}", self.config().sub_bank_url, id);
        self.delete_entity(&url, tags::SUB_BANKS).await
    }
}
