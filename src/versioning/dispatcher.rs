//! Vendor dispatcher: version table, default fallback and routing.
//!
//! # Responsibilities
//! - Own the version table and reject invalid tables at construction
//! - Decide which version an `Accept` header addresses
//! - Forward the unmodified request to that version's handler
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - The default is the LAST supplied entry, not the highest label
//! - Version key is everything after the last separator, untrimmed
//! - Decisions are pure functions of the header, so identical requests
//!   always route identically

use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use crate::versioning::error::DispatchError;
use crate::versioning::handler::{not_found, HandlerFuture, RequestHandler};
use crate::versioning::version::VersionEntry;

/// Media-type prefix preceding the vendor name.
pub const VENDOR_PREFIX: &str = "application/vnd.";

/// Token between the vendor name and the version suffix.
pub const VERSION_SEPARATOR: &str = "-";

struct DispatcherInner {
    vendor_name: String,
    media_type: String,
    entries: Vec<Arc<VersionEntry>>,
    index: HashMap<String, usize>,
    default_index: usize,
}

/// Routes requests to registered versions based on the vendor media type.
#[derive(Clone)]
pub struct VendorDispatcher {
    inner: Arc<DispatcherInner>,
}

impl VendorDispatcher {
    /// Build a dispatcher for `vendor_name` from an ordered list of versions.
    ///
    /// Fails on an empty list or on the first duplicated identifier. The last
    /// entry becomes the default version.
    pub fn new<I>(vendor_name: impl Into<String>, versions: I) -> Result<Self, DispatchError>
    where
        I: IntoIterator<Item = Arc<VersionEntry>>,
    {
        let vendor_name = vendor_name.into();
        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for entry in versions {
            if index.contains_key(entry.identifier()) {
                return Err(DispatchError::DuplicateVersion(entry.identifier().to_string()));
            }
            index.insert(entry.identifier().to_string(), entries.len());
            entries.push(entry);
        }

        if entries.is_empty() {
            return Err(DispatchError::NoVersions);
        }
        let default_index = entries.len() - 1;

        tracing::info!(
            vendor = %vendor_name,
            versions = entries.len(),
            default_version = %entries[default_index].identifier(),
            "Vendor dispatcher built"
        );

        Ok(Self {
            inner: Arc::new(DispatcherInner {
                media_type: format!("{}{}", VENDOR_PREFIX, vendor_name),
                vendor_name,
                entries,
                index,
                default_index,
            }),
        })
    }

    pub fn vendor_name(&self) -> &str {
        &self.inner.vendor_name
    }

    /// The media-type prefix expected in `Accept`, e.g. `application/vnd.acme.com`.
    pub fn media_type(&self) -> &str {
        &self.inner.media_type
    }

    pub fn version_separator(&self) -> &'static str {
        VERSION_SEPARATOR
    }

    /// Version used when the header carries no separator.
    pub fn default_version(&self) -> &Arc<VersionEntry> {
        &self.inner.entries[self.inner.default_index]
    }

    /// Look up a version by identifier.
    pub fn version(&self, identifier: &str) -> Result<&Arc<VersionEntry>, DispatchError> {
        self.inner
            .index
            .get(identifier)
            .map(|&i| &self.inner.entries[i])
            .ok_or_else(|| DispatchError::VersionNotFound(identifier.to_string()))
    }

    /// Registered versions in insertion order.
    pub fn versions(&self) -> impl Iterator<Item = &Arc<VersionEntry>> {
        self.inner.entries.iter()
    }

    /// Vendor gate rule: non-empty header containing the vendor media type.
    pub fn accepts_vendor(&self, accept: &str) -> bool {
        !accept.is_empty() && accept.contains(self.media_type())
    }

    /// Version dispatch rule. Does not re-check the vendor.
    pub fn select(&self, accept: &str) -> Result<&Arc<VersionEntry>, DispatchError> {
        match accept.rfind(VERSION_SEPARATOR) {
            None => Ok(self.default_version()),
            Some(pos) => self.version(&accept[pos + VERSION_SEPARATOR.len()..]),
        }
    }

    /// Handler that routes by version only, for use behind an external gate.
    pub fn dispatch(&self) -> VersionDispatch {
        VersionDispatch {
            dispatcher: self.clone(),
        }
    }

    /// Gate then dispatch a single request.
    pub async fn serve(&self, req: Request<Body>) -> Response {
        self.gate(self.dispatch()).handle(req).await
    }

    /// Serve the combined capability as an axum router fallback.
    pub fn into_router(self) -> Router {
        Router::new().fallback(move |req: Request<Body>| {
            let dispatcher = self.clone();
            async move { dispatcher.serve(req).await }
        })
    }

    pub(crate) fn route(&self, req: Request<Body>) -> HandlerFuture {
        let selected = {
            let accept = accept_header(&req);
            self.select(&accept)
        };
        match selected {
            Ok(entry) => {
                tracing::debug!(
                    vendor = %self.vendor_name(),
                    version = %entry.identifier(),
                    obsolete = entry.is_obsolete(),
                    "Dispatching to version"
                );
                entry.handler().handle(req)
            }
            Err(e) => {
                let response = not_found(e.to_string());
                Box::pin(async move { response })
            }
        }
    }
}

impl RequestHandler for VendorDispatcher {
    fn handle(&self, req: Request<Body>) -> HandlerFuture {
        let dispatcher = self.clone();
        Box::pin(async move { dispatcher.serve(req).await })
    }
}

impl std::fmt::Debug for VendorDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VendorDispatcher")
            .field("vendor_name", &self.inner.vendor_name)
            .field("versions", &self.inner.entries)
            .field("default_version", &self.default_version().identifier())
            .finish()
    }
}

/// Version-dispatch capability returned by [`VendorDispatcher::dispatch`].
#[derive(Clone, Debug)]
pub struct VersionDispatch {
    dispatcher: VendorDispatcher,
}

impl RequestHandler for VersionDispatch {
    fn handle(&self, req: Request<Body>) -> HandlerFuture {
        self.dispatcher.route(req)
    }
}

/// `Accept` header value; absent reads as empty. Non-UTF-8 bytes are
/// replaced, never dropped, so the vendor prefix is still found.
pub(crate) fn accept_header(req: &Request<Body>) -> Cow<'_, str> {
    req.headers()
        .get(header::ACCEPT)
        .map(|v| String::from_utf8_lossy(v.as_bytes()))
        .unwrap_or(Cow::Borrowed(""))
}
