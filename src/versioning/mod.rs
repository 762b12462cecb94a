//! Vendor media-type version negotiation.
//!
//! # Data Flow
//! ```text
//! Incoming Request (Accept: application/vnd.<vendor>[-<version>])
//!     → gate.rs (vendor prefix present? else 404)
//!     → dispatcher.rs (suffix after last separator → version table)
//!     → version.rs (registered handler for that version)
//!     → handler.rs (RequestHandler produces the response)
//!
//! Construction (at startup):
//!     VersionEntry[] (ordered)
//!     → reject empty / duplicate identifiers
//!     → last entry becomes the default version
//!     → freeze as immutable VendorDispatcher
//! ```
//!
//! # Design Decisions
//! - Dispatcher is an explicit value, cheap to clone, no global registry
//! - Matching is deliberately naive: substring for the vendor, last
//!   separator for the version, no RFC 7231 parsing
//! - Every request-time failure is a 404 with a short text body

pub mod dispatcher;
pub mod error;
pub mod gate;
pub mod handler;
pub mod version;

pub use dispatcher::{VendorDispatcher, VersionDispatch, VENDOR_PREFIX, VERSION_SEPARATOR};
pub use error::DispatchError;
pub use gate::{vendor_gate_middleware, VendorGate};
pub use handler::{handler_fn, not_found, FnHandler, HandlerFuture, RequestHandler, ServiceHandler};
pub use version::VersionEntry;
