//! Dispatch error definitions.

use thiserror::Error;

/// Errors raised while building or consulting a [`VendorDispatcher`].
///
/// Construction variants are returned to the caller of
/// [`VendorDispatcher::new`]. Request-time variants never escape a handler;
/// they are rendered as 404 responses.
///
/// [`VendorDispatcher`]: crate::versioning::VendorDispatcher
/// [`VendorDispatcher::new`]: crate::versioning::VendorDispatcher::new
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No version entries were supplied, so there is no default.
    #[error("At least one version is required")]
    NoVersions,

    /// Two entries share the same identifier.
    #[error("Version with same identifier already present: {0}")]
    DuplicateVersion(String),

    /// The requested version suffix is not registered.
    #[error("Version not found")]
    VersionNotFound(String),

    /// The Accept header does not carry the vendor media type.
    #[error("Wrong vendor identifier")]
    WrongVendor,
}

impl DispatchError {
    /// True for the variants that can only occur while serving a request.
    pub fn is_request_error(&self) -> bool {
        matches!(self, Self::VersionNotFound(_) | Self::WrongVendor)
    }
}
