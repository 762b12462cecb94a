//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Server and dispatcher produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging with request ID on every request span
//! - Metrics are cheap (atomic increments)
//! - Request-time routing errors surface as responses, not log lines

pub mod logging;
pub mod metrics;
