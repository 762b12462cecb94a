//! Vendor gate: rejects requests not addressed to the configured vendor.
//!
//! Two shapes of the same rule:
//! - [`VendorGate`], a [`RequestHandler`] wrapping the next handler
//! - [`vendor_gate_middleware`], an axum middleware for external chains

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::versioning::dispatcher::{accept_header, VendorDispatcher};
use crate::versioning::error::DispatchError;
use crate::versioning::handler::{not_found, HandlerFuture, RequestHandler};

/// Handler that only calls `next` when the vendor media type is present.
#[derive(Clone, Debug)]
pub struct VendorGate<H> {
    dispatcher: VendorDispatcher,
    next: Arc<H>,
}

impl VendorDispatcher {
    /// Wrap `next` with the vendor check.
    pub fn gate<H: RequestHandler>(&self, next: H) -> VendorGate<H> {
        VendorGate {
            dispatcher: self.clone(),
            next: Arc::new(next),
        }
    }
}

impl<H: RequestHandler> RequestHandler for VendorGate<H> {
    fn handle(&self, req: Request<Body>) -> HandlerFuture {
        if self.dispatcher.accepts_vendor(&accept_header(&req)) {
            self.next.handle(req)
        } else {
            let response = not_found(DispatchError::WrongVendor.to_string());
            Box::pin(async move { response })
        }
    }
}

/// Axum middleware form of the gate.
///
/// ```rust,ignore
/// let app = Router::new()
///     .fallback(move |req| dispatch.handle(req))
///     .layer(middleware::from_fn_with_state(dispatcher, vendor_gate_middleware));
/// ```
pub async fn vendor_gate_middleware(
    State(dispatcher): State<VendorDispatcher>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !dispatcher.accepts_vendor(&accept_header(&req)) {
        return not_found(DispatchError::WrongVendor.to_string());
    }
    next.run(req).await
}
