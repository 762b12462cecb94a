//! The request-handling capability registered per version.
//!
//! # Design Decisions
//! - Object safe so heterogeneous handlers share one version table
//! - Infallible: a handler always produces a response, errors included
//! - Axum routers plug in directly; closures and tower services via wrappers

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use futures_util::future::BoxFuture;
use std::convert::Infallible;
use std::future::Future;
use tower::{Service, ServiceExt};

/// Future returned by [`RequestHandler::handle`].
pub type HandlerFuture = BoxFuture<'static, Response>;

/// Anything able to turn a request into a response.
pub trait RequestHandler: Send + Sync + 'static {
    /// Handle a single request.
    fn handle(&self, req: Request<Body>) -> HandlerFuture;
}

impl RequestHandler for Router {
    fn handle(&self, req: Request<Body>) -> HandlerFuture {
        let router = self.clone();
        Box::pin(async move {
            match router.oneshot(req).await {
                Ok(response) => response,
                Err(never) => match never {},
            }
        })
    }
}

/// Handler backed by an async closure. Built with [`handler_fn`].
#[derive(Clone)]
pub struct FnHandler<F> {
    f: F,
}

/// Wrap an async function as a [`RequestHandler`].
pub fn handler_fn<F, Fut, R>(f: F) -> FnHandler<F>
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse,
{
    FnHandler { f }
}

impl<F, Fut, R> RequestHandler for FnHandler<F>
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse,
{
    fn handle(&self, req: Request<Body>) -> HandlerFuture {
        let fut = (self.f)(req);
        Box::pin(async move { fut.await.into_response() })
    }
}

/// Adapts an infallible tower [`Service`] into a [`RequestHandler`].
#[derive(Clone)]
pub struct ServiceHandler<S> {
    service: S,
}

impl<S> ServiceHandler<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }
}

impl<S> RequestHandler for ServiceHandler<S>
where
    S: Service<Request<Body>, Response = Response, Error = Infallible>
        + Clone
        + Send
        + Sync
        + 'static,
    S::Future: Send + 'static,
{
    fn handle(&self, req: Request<Body>) -> HandlerFuture {
        let service = self.service.clone();
        Box::pin(async move {
            match service.oneshot(req).await {
                Ok(response) => response,
                Err(never) => match never {},
            }
        })
    }
}

/// 404 response with a plain-text body.
pub fn not_found(message: impl Into<String>) -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        message.into(),
    )
        .into_response()
}
