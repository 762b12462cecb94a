//! Per-version demo handlers built from configuration.
//!
//! Each configured version gets its own axum router:
//! - `GET /` returns the version's message
//! - `GET /status` returns `"<identifier> ok"`

use axum::{routing::get, Router};
use serde::Serialize;

use crate::config::schema::{VendorConfig, VersionConfig};
use crate::versioning::{DispatchError, VendorDispatcher, VersionEntry};

/// Router served for one version.
pub fn version_router(version: &VersionConfig) -> Router {
    let message = version.message();
    let status = format!("{} ok", version.identifier);

    Router::new()
        .route("/", get(move || async move { message }))
        .route("/status", get(move || async move { status }))
}

/// Build the dispatcher described by the vendor configuration.
pub fn build_dispatcher(vendor: &VendorConfig) -> Result<VendorDispatcher, DispatchError> {
    let entries: Vec<_> = vendor
        .versions
        .iter()
        .map(|v| {
            let entry = VersionEntry::new(v.identifier.clone(), version_router(v));
            if v.obsolete {
                entry.mark_obsolete();
            }
            entry
        })
        .collect();

    VendorDispatcher::new(vendor.name.clone(), entries)
}

/// Serializable view of one registered version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionSummary {
    pub identifier: String,
    pub obsolete: bool,
    pub default: bool,
    pub media_type: String,
}

/// Describe a dispatcher's version table in registration order.
pub fn describe(dispatcher: &VendorDispatcher) -> Vec<VersionSummary> {
    let default = dispatcher.default_version().identifier();
    dispatcher
        .versions()
        .map(|v| VersionSummary {
            identifier: v.identifier().to_string(),
            obsolete: v.is_obsolete(),
            default: v.identifier() == default,
            media_type: format!(
                "{}{}{}",
                dispatcher.media_type(),
                dispatcher.version_separator(),
                v.identifier()
            ),
        })
        .collect()
}
