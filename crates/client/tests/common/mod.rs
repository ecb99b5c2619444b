//! Shared test-server scaffolding for client integration tests.
//!
//! Binds a real axum server on an ephemeral port and points the client
//! at it through [`ApiConfig::single_host`], so tests exercise the same
//! request path production uses without a live catalog API.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use matcat_client::invalidate::CacheInvalidator;
use matcat_client::{ApiConfig, CatalogClient};

/// Serve `app` on an OS-assigned port, returning its base URL.
pub async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test app");
    });
    format!("http://{addr}")
}

/// Records every invalidated tag, in call order.
pub struct RecordingInvalidator(pub Arc<Mutex<Vec<String>>>);

impl CacheInvalidator for RecordingInvalidator {
    fn invalidate(&self, tag: &str) {
        self.0.lock().unwrap().push(tag.to_string());
    }
}

/// Client wired to a single-host test server, with the invalidated
/// tags captured for assertions.
pub struct TestHarness {
    pub client: CatalogClient,
    pub invalidations: Arc<Mutex<Vec<String>>>,
}

impl TestHarness {
    pub fn invalidated_tags(&self) -> Vec<String> {
        self.invalidations.lock().unwrap().clone()
    }
}

/// Spawn `app` and build a client against it.
pub async fn harness(app: Router) -> TestHarness {
    let base = spawn_server(app).await;
    let invalidations = Arc::new(Mutex::new(Vec::new()));
    let client = CatalogClient::new(ApiConfig::single_host(&base))
        .with_invalidator(Arc::new(RecordingInvalidator(invalidations.clone())));
    TestHarness {
        client,
        invalidations,
    }
}

// ---- canned JSON bodies ----

pub fn library_json(id: Uuid, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": null,
        "createdAt": Utc::now().to_rfc3339(),
    })
}

pub fn bank_json(id: Uuid, library_id: Uuid, name: &str) -> Value {
    json!({
        "id": id,
        "libraryId": library_id,
        "name": name,
        "description": null,
        "createdAt": Utc::now().to_rfc3339(),
    })
}

pub fn sub_bank_json(id: Uuid, bank_id: Uuid, name: &str) -> Value {
    json!({
        "id": id,
        "bankId": bank_id,
        "name": name,
        "description": null,
        "createdAt": Utc::now().to_rfc3339(),
    })
}

pub fn material_json(id: Uuid, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "subBankId": null,
        "externalMatId": 42,
        "description": "test material",
        "density": 7850.0,
    })
}
