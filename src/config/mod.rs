//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → version table handed to VendorDispatcher
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, with_bind_address, ConfigError};
pub use schema::ServerConfig;
pub use schema::{DispatchMode, ListenerConfig, ObservabilityConfig, TimeoutConfig, VendorConfig, VersionConfig};
