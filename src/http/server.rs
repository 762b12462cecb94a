//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router hosting the vendor dispatcher
//! - Mount the gate either inside the dispatcher or as middleware
//! - Wire up middleware (tracing, timeout, request ID, metrics)
//! - Bind server to listener and shut down gracefully

use axum::{
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
    Router,
};
use std::collections::HashMap;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{DispatchMode, ServerConfig, VendorConfig, VersionConfig};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::http::versions::build_dispatcher;
use crate::observability::metrics;
use crate::versioning::{vendor_gate_middleware, DispatchError, RequestHandler, VendorDispatcher};

/// HTTP server exposing one vendor dispatcher.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
    dispatcher: VendorDispatcher,
}

impl HttpServer {
    /// Create a server around an existing dispatcher.
    ///
    /// Of `config.vendor` only `mode` is read. Its name and version table are
    /// rewritten from `dispatcher` so [`HttpServer::config`] stays accurate.
    pub fn new(mut config: ServerConfig, dispatcher: VendorDispatcher) -> Self {
        sync_vendor(&mut config.vendor, &dispatcher);
        let router = Self::build_router(&config, dispatcher.clone());
        metrics::record_versions(dispatcher.vendor_name(), dispatcher.versions().count());
        Self {
            router,
            config,
            dispatcher,
        }
    }

    /// Create a server whose versions are the configured demo handlers.
    pub fn from_config(config: ServerConfig) -> Result<Self, DispatchError> {
        let dispatcher = build_dispatcher(&config.vendor)?;
        Ok(Self::new(config, dispatcher))
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, dispatcher: VendorDispatcher) -> Router {
        let app = match config.vendor.mode {
            DispatchMode::Combined => dispatcher.into_router(),
            DispatchMode::Middleware => {
                let dispatch = dispatcher.dispatch();
                Router::new()
                    .fallback(move |req: Request<Body>| dispatch.handle(req))
                    .layer(middleware::from_fn_with_state(dispatcher, vendor_gate_middleware))
            }
        };

        app.layer(middleware::from_fn(track_metrics))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %req.method(),
                    uri = %req.uri(),
                    request_id = req.request_id().unwrap_or("unknown"),
                )
            }))
            .layer(set_request_id_layer())
    }

    /// Run the server until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            vendor = %self.dispatcher.vendor_name(),
            mode = ?self.config.vendor.mode,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn dispatcher(&self) -> &VendorDispatcher {
        &self.dispatcher
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Align the vendor section with the dispatcher actually served. Messages
/// are kept for identifiers that were already configured.
fn sync_vendor(vendor: &mut VendorConfig, dispatcher: &VendorDispatcher) {
    let mut messages: HashMap<String, Option<String>> = vendor
        .versions
        .drain(..)
        .map(|v| (v.identifier, v.message))
        .collect();

    vendor.name = dispatcher.vendor_name().to_string();
    vendor.versions = dispatcher
        .versions()
        .map(|entry| VersionConfig {
            identifier: entry.identifier().to_string(),
            message: messages.remove(entry.identifier()).flatten(),
            obsolete: entry.is_obsolete(),
        })
        .collect();
}

async fn track_metrics(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let response = next.run(req).await;
    metrics::record_request(&method, response.status().as_u16(), start);
    response
}

/// Wait for Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
