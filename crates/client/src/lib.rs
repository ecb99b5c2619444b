//! HTTP repository client for the matcat material catalog API.
//!
//! One method set per entity family (list / get / create / update /
//! delete), each wrapping a single HTTP round trip against the
//! configured base URLs.  Response bodies are validated with
//! [`matcat_core`] schemas, list envelopes are normalized, and every
//! failure is mapped into [`error::ClientError`].  A cache tag is
//! invalidated after each successful write.

pub mod action;
pub mod banks;
pub mod client;
pub mod config;
pub mod details;
pub mod error;
pub mod invalidate;
pub mod libraries;
pub mod materials;
pub mod response;
pub mod sub_banks;

pub use action::ActionResult;
pub use client::CatalogClient;
pub use config::ApiConfig;
pub use error::{ClientError, ClientResult};
