//! Uniform presentation-facing result shape.

use crate::error::ClientResult;

/// Flat outcome a UI action can render directly: one human-readable
/// message, a success flag, and the payload when there is one.  No
/// error propagates past this shape.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ActionResult<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ActionResult<T> {
    /// Collapse an operation result, using `success_message` on the Ok
    /// path and the error's display text on the Err path.
    pub fn from_result(result: ClientResult<T>, success_message: impl Into<String>) -> Self {
        match result {
            Ok(data) => Self {
                success: true,
                message: success_message.into(),
                data: Some(data),
            },
            Err(err) => Self {
                success: false,
                message: err.to_string(),
                data: None,
            },
        }
    }
}
