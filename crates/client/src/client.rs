//! Shared HTTP plumbing for the catalog repository client.
//!
//! [`CatalogClient`] holds one [`reqwest::Client`], the resolved base
//! URLs and the cache-invalidation hook.  The per-entity operation
//! modules build on the request helpers here; every operation is a
//! single attempt with no retries.

use std::sync::Arc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use matcat_core::error::ValidateInput;

use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};
use crate::invalidate::{CacheInvalidator, NoopInvalidator};
use crate::response::{decode_body, error_message, ListEnvelope};

/// HTTP client for the catalog API.  Stateless and cheap to clone the
/// underlying connection pool; construct one and inject it wherever
/// needed.
pub struct CatalogClient {
    http: reqwest::Client,
    config: ApiConfig,
    invalidator: Arc<dyn CacheInvalidator>,
}

impl CatalogClient {
    /// Create a client with a fresh connection pool.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful
    /// for connection pooling across services).
    pub fn with_client(http: reqwest::Client, config: ApiConfig) -> Self {
        Self {
            http,
            config,
            invalidator: Arc::new(NoopInvalidator),
        }
    }

    /// Install the cache invalidation hook fired after successful
    /// writes.
    pub fn with_invalidator(mut self, invalidator: Arc<dyn CacheInvalidator>) -> Self {
        self.invalidator = invalidator;
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    // ---- shared request helpers ----

    /// GET a whole family list, accepting both envelope shapes and
    /// validating every element.  An invalid element fails the list as
    /// a whole.
    pub(crate) async fn fetch_list<T>(&self, url: &str) -> ClientResult<Vec<T>>
    where
        T: DeserializeOwned + ValidateInput,
    {
        let (status, body) = self.send(self.http.get(url)).await?;
        if !status.is_success() {
            return Err(api_error(status, &body));
        }
        let items = decode_body::<ListEnvelope<T>>(status.as_u16(), &body)?.into_items();
        for item in &items {
            item.validate_input()?;
        }
        Ok(items)
    }

    /// GET a single entity.  A 404 is the `None` outcome, not an error.
    pub(crate) async fn fetch_one<T>(&self, url: &str) -> ClientResult<Option<T>>
    where
        T: DeserializeOwned + ValidateInput,
    {
        let (status, body) = self.send(self.http.get(url)).await?;
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(api_error(status, &body));
        }
        let entity: T = decode_body(status.as_u16(), &body)?;
        entity.validate_input()?;
        Ok(Some(entity))
    }

    /// POST an already-validated input, returning the server's copy of
    /// the created entity and invalidating `tag`.
    pub(crate) async fn post_entity<In, T>(&self, url: &str, input: &In, tag: &str) -> ClientResult<T>
    where
        In: Serialize + ?Sized,
        T: DeserializeOwned + ValidateInput,
    {
        let (status, body) = self.send(self.http.post(url).json(input)).await?;
        if !status.is_success() {
            return Err(api_error(status, &body));
        }
        let created: T = decode_body(status.as_u16(), &body)?;
        created.validate_input()?;
        self.invalidator.invalidate(tag);
        Ok(created)
    }

    /// PUT an already-validated input.  The server either echoes the
    /// updated entity (`Some`) or answers with a bare success status
    /// (`None`); both count as success and invalidate `tag`.
    pub(crate) async fn put_entity<In, T>(
        &self,
        url: &str,
        input: &In,
        tag: &str,
    ) -> ClientResult<Option<T>>
    where
        In: Serialize + ?Sized,
        T: DeserializeOwned + ValidateInput,
    {
        let (status, body) = self.send(self.http.put(url).json(input)).await?;
        if !status.is_success() {
            return Err(api_error(status, &body));
        }
        let updated = if body.trim().is_empty() {
            None
        } else {
            let entity: T = decode_body(status.as_u16(), &body)?;
            entity.validate_input()?;
            Some(entity)
        };
        self.invalidator.invalidate(tag);
        Ok(updated)
    }

    /// DELETE by URL.  True only for 204 No Content; any other success
    /// status means the server accepted the request without deleting.
    pub(crate) async fn delete_entity(&self, url: &str, tag: &str) -> ClientResult<bool> {
        let (status, body) = self.send(self.http.delete(url)).await?;
        if !status.is_success() {
            return Err(api_error(status, &body));
        }
        self.invalidator.invalidate(tag);
        Ok(status == StatusCode::NO_CONTENT)
    }

    /// Issue the request and read the whole body.  Failures at this
    /// stage never carry a response, so they map to `Network`.
    async fn send(&self, request: reqwest::RequestBuilder) -> ClientResult<(StatusCode, String)> {
        let response = request.send().await.map_err(ClientError::Network)?;
        let status = response.status();
        let body = response.text().await.map_err(ClientError::Network)?;
        Ok((status, body))
    }
}

/// Build an `Api` error from a non-success response.
pub(crate) fn api_error(status: StatusCode, body: &str) -> ClientError {
    let status = status.as_u16();
    let message = error_message(status, body);
    tracing::warn!(status, %message, "Catalog API returned an error");
    ClientError::Api { status, message }
}
