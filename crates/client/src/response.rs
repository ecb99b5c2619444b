//! Response-body adapters shared by every entity family.
//!
//! The catalog API is inconsistent about list shapes: some endpoints
//! return a bare JSON array, others wrap it as `{ "$values": [...] }`.
//! Both normalize to the same vector here.  Error bodies are equally
//! inconsistent, carrying the human-readable message under either
//! `message` or `detail`.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ClientError;

/// A list body in either of the two shapes the API produces.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Wrapped {
        #[serde(rename = "$values")]
        values: Vec<T>,
    },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Wrapped { values } => values,
            ListEnvelope::Bare(items) => items,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    detail: Option<String>,
}

/// Extract the server-supplied message from an error body.
///
/// Falls back to a generic status message when the body parses but has
/// neither field, and to `"unknown"` when the body is not JSON at all.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed
            .message
            .or(parsed.detail)
            .unwrap_or_else(|| format!("request failed with status {status}")),
        Err(_) => "unknown".to_string(),
    }
}

/// Decode a success body, mapping malformed JSON to an `Api` error
/// instead of propagating the parse failure.
pub(crate) fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|_| ClientError::Api {
        status,
        message: "unknown".to_string(),
    })
}
