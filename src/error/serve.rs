//! Request-scoped errors
//!
//! These never abort the server; the service handler turns them into
//! HTTP status codes.

use super::BundlehostError;

/// Creates an entry not found error
pub fn entry_not_found(path: impl Into<String>) -> BundlehostError {
    BundlehostError::EntryNotFound { path: path.into() }
}

/// Creates a stream copy error
pub fn stream_copy(path: impl Into<String>, reason: impl Into<String>) -> BundlehostError {
    BundlehostError::StreamCopy {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a bind failure error
pub fn bind_failed(addr: impl Into<String>, reason: impl Into<String>) -> BundlehostError {
    BundlehostError::BindFailed {
        addr: addr.into(),
        reason: reason.into(),
    }
}

/// Creates a server failure error
pub fn server_failed(message: impl Into<String>) -> BundlehostError {
    BundlehostError::ServerFailed {
        message: message.into(),
    }
}
