//! A single API version bound to its handler.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::versioning::handler::RequestHandler;

/// One registered API version.
///
/// Entries are shared between the code that builds them and the dispatcher
/// that routes to them, hence [`VersionEntry::new`] hands out an `Arc`.
pub struct VersionEntry {
    identifier: String,
    handler: Arc<dyn RequestHandler>,
    obsolete: AtomicBool,
}

impl VersionEntry {
    /// Create a version entry. The identifier is not validated.
    pub fn new(identifier: impl Into<String>, handler: impl RequestHandler) -> Arc<Self> {
        Self::from_shared(identifier, Arc::new(handler))
    }

    /// Create a version entry around an already shared handler.
    pub fn from_shared(identifier: impl Into<String>, handler: Arc<dyn RequestHandler>) -> Arc<Self> {
        Arc::new(Self {
            identifier: identifier.into(),
            handler,
            obsolete: AtomicBool::new(false),
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn handler(&self) -> &Arc<dyn RequestHandler> {
        &self.handler
    }

    /// Flag the version as obsolete. Advisory only: routing ignores it.
    pub fn mark_obsolete(&self) {
        self.obsolete.store(true, Ordering::Relaxed);
    }

    pub fn is_obsolete(&self) -> bool {
        self.obsolete.load(Ordering::Relaxed)
    }
}

impl fmt::Debug for VersionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersionEntry")
            .field("identifier", &self.identifier)
            .field("obsolete", &self.is_obsolete())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::versioning::handler::handler_fn;
    use axum::body::Body;
    use axum::http::Request;

    #[test]
    fn test_accessors() {
        let entry = VersionEntry::new("v1", handler_fn(|_req: Request<Body>| async { "v1" }));
        assert_eq!(entry.identifier(), "v1");
        assert!(!entry.is_obsolete());
    }

    #[test]
    fn test_identifier_not_validated() {
        let entry = VersionEntry::new("", handler_fn(|_req: Request<Body>| async { "" }));
        assert_eq!(entry.identifier(), "");
    }

    #[test]
    fn test_mark_obsolete_is_idempotent() {
        let entry = VersionEntry::new("v1", handler_fn(|_req: Request<Body>| async { "v1" }));
        let shared = Arc::clone(&entry);

        entry.mark_obsolete();
        entry.mark_obsolete();

        assert!(shared.is_obsolete());
        assert_eq!(shared.identifier(), "v1");
    }

    #[tokio::test]
    async fn test_from_shared_reuses_handler() {
        let handler: Arc<dyn RequestHandler> =
            Arc::new(handler_fn(|_req: Request<Body>| async { "shared" }));
        let v1 = VersionEntry::from_shared("v1", Arc::clone(&handler));
        let v2 = VersionEntry::from_shared("v2", Arc::clone(&handler));

        assert!(Arc::ptr_eq(v1.handler(), v2.handler()));
        assert_eq!(v2.identifier(), "v2");

        let response = v1.handler().handle(Request::builder().body(Body::empty()).unwrap()).await;
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"shared");
    }

    #[test]
    fn test_debug_omits_handler() {
        let entry = VersionEntry::new("v2", handler_fn(|_req: Request<Body>| async { "v2" }));
        let rendered = format!("{:?}", entry);
        assert!(rendered.contains("\"v2\""));
        assert!(rendered.contains("obsolete: false"));
    }
}
