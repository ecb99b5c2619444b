//! Library repository operations.

use matcat_core::error::ValidateInput;
use matcat_core::library::{CreateLibrary, Library, UpdateLibrary};
use matcat_core::types::EntityId;

use crate::client::CatalogClient;
use crate::error::ClientResult;
use crate::invalidate::tags;

impl CatalogClient {
    /// List all libraries.
    pub async fn list_libraries(&self) -> ClientResult<Vec<Library>> {
        let items = self.fetch_list(&self.config().library_url).await?;
        tracing::debug!(count = items.len(), "Listed libraries");
        Ok(items)
    }

    /// Fetch one library; `None` when the id does not exist.
    pub async fn get_library(&self, id: EntityId) -> ClientResult<Option<Library>> {
        let url = format!("{}/{}", self.config().library_url, id);
        self.fetch_one(&url).await
    }

    /// Create a library.  Validation failures are reported before any
    /// request is issued.
    pub async fn create_library(&self, input: &CreateLibrary) -> ClientResult<Library> {
        input.validate_input()?;
        self.post_entity(&self.config().library_url, input, tags::LIBRARIES)
            .await
    }

    /// Update a library.  `None` means the server answered with a bare
    /// success status instead of echoing the entity.
    pub async fn update_library(
        &self,
        id: EntityId,
        input: &UpdateLibrary,
    ) -> ClientResult<Option<Library>> {
        input.validate_input()?;
        let url = format!("{}/{}", self.config().library_url, id);
        self.put_entity(&url, input, tags::LIBRARIES).await
    }

    /// Delete a library.  True only when the server answered 204.
    /// Children are not deleted client-side.
    pub async fn delete_library(&self, id: EntityId) -> ClientResult<bool> {
        let url = format!("{}/{}", self.config().library_url, id);
        self.delete_entity(&url, tags::LIBRARIES).await
    }
}
