//! Base-URL configuration, one URL per entity family.
//!
//! Each family is served by an independently configured endpoint, so a
//! deployment can split the catalog across hosts.  A missing required
//! URL is a configuration error surfaced before any request is made,
//! never a network failure.

use crate::error::ClientError;

pub const ENV_LIBRARY_URL: &str = "MATCAT_LIBRARY_API_URL";
pub const ENV_BANK_URL: &str = "MATCAT_BANK_API_URL";
pub const ENV_SUB_BANK_URL: &str = "MATCAT_SUB_BANK_API_URL";
pub const ENV_MATERIAL_URL: &str = "MATCAT_MATERIAL_API_URL";
pub const ENV_DETAIL_URL: &str = "MATCAT_DETAIL_API_URL";
pub const ENV_HIERARCHY_URL: &str = "MATCAT_HIERARCHY_API_URL";

/// Resolved base URLs for the catalog API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub library_url: String,
    pub bank_url: String,
    pub sub_bank_url: String,
    pub material_url: String,
    pub detail_url: String,
    /// Endpoint for the create-with-hierarchy call.  Optional because
    /// deployments without the combined endpoint omit it; the operation
    /// reports a configuration error when called without it.
    pub hierarchy_url: Option<String>,
}

impl ApiConfig {
    /// Load from environment variables.
    ///
    /// | Env Var                   | Required |
    /// |---------------------------|----------|
    /// | `MATCAT_LIBRARY_API_URL`  | yes      |
    /// | `MATCAT_BANK_API_URL`     | yes      |
    /// | `MATCAT_SUB_BANK_API_URL` | yes      |
    /// | `MATCAT_MATERIAL_API_URL` | yes      |
    /// | `MATCAT_DETAIL_API_URL`   | yes      |
    /// | `MATCAT_HIERARCHY_API_URL`| no       |
    pub fn from_env() -> Result<Self, ClientError> {
        Ok(Self {
            library_url: require(ENV_LIBRARY_URL)?,
            bank_url: require(ENV_BANK_URL)?,
            sub_bank_url: require(ENV_SUB_BANK_URL)?,
            material_url: require(ENV_MATERIAL_URL)?,
            detail_url: require(ENV_DETAIL_URL)?,
            hierarchy_url: std::env::var(ENV_HIERARCHY_URL)
                .ok()
                .filter(|v| !v.trim().is_empty()),
        })
    }

    /// Route every family under one base URL (`{base}/libraries`,
    /// `{base}/banks`, ...).  Convenient for single-host deployments
    /// and tests.
    pub fn single_host(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            library_url: format!("{base}/libraries"),
            bank_url: format!("{base}/banks"),
            sub_bank_url: format!("{base}/sub-banks"),
            material_url: format!("{base}/materials"),
            detail_url: format!("{base}/material-details"),
            hierarchy_url: Some(format!("{base}/materials/full-hierarchy")),
        }
    }
}

fn require(name: &'static str) -> Result<String, ClientError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ClientError::Config { name }),
    }
}
