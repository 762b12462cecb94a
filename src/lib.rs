//! Vendor media-type API version dispatch.
//!
//! Routes a request to one of several registered API versions based on the
//! `Accept: application/vnd.<vendor>[-<version>]` header.

pub mod config;
pub mod http;
pub mod observability;
pub mod versioning;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
pub use versioning::{DispatchError, RequestHandler, VendorDispatcher, VersionEntry};
