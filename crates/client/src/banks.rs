//! Bank repository operations.

use matcat_core::bank::{Bank, CreateBank, UpdateBank};
use matcat_core::error::ValidateInput;
use matcat_core::hierarchy::filter_children;
use matcat_core::types::EntityId;

use crate::client::CatalogClient;
use crate::error::ClientResult;
use crate::invalidate::tags;

impl CatalogClient {
    /// List banks, optionally narrowed to one library.  The filter is
    /// applied client-side over the fetched list.
    pub async fn list_banks(&self, library: Option<EntityId>) -> ClientResult<Vec<Bank>> {
        let items: Vec<Bank> = self.fetch_list(&self.config().bank_url).await?;
        let items = match library {
            Some(id) => filter_children(&items, id),
            None => items,
        };
        tracing::debug!(count = items.len(), "Listed banks");
        Ok(items)
    }

    /// Fetch one bank; `None` when the id does not exist.
    pub async fn get_bank(&self, id: EntityId) -> ClientResult<Option<Bank>> {
        let url = format!("{}/{}", self.config().bank_url, id);
        self.fetch_one(&url).await
    }

    /// Create a bank under an existing library.
    pub async fn create_bank(&self, input: &CreateBank) -> ClientResult<Bank> {
        input.validate_input()?;
        self.post_entity(&self.config().bank_url, input, tags::BANKS)
            .await
    }

    /// Update a bank.  `None` means a bare success status.
    pub async fn update_bank(
        &self,
        id: EntityId,
        input: &UpdateBank,
    ) -> ClientResult<Option<Bank>> {
        input.validate_input()?;
        let url = format!("{}/{}", self.config().bank_url, id);
        self.put_entity(&url, input, tags::BANKS).await
    }

    /// Delete a bank.  True only when the server answered 204.
    pub async fn delete_bank(&self, id: EntityId) -> ClientResult<bool> {
        let url = format!("{}/{}", self.config().bank_url, id);
        self.delete_entity(&url, tags::BANKS).await
    }
}
