//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned or preserved)
//!     → VendorDispatcher (gate + version dispatch)
//!     → versions.rs (per-version routers built from config)
//!     → Send to client
//! ```

pub mod request;
pub mod server;
pub mod versions;

pub use request::{RequestIdExt, UuidRequestId, X_REQUEST_ID};
pub use server::HttpServer;
