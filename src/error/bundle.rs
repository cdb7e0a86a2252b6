//! Bundle parsing and discovery errors

use super::BundlehostError;

/// Creates an invalid bundle error (archive container is malformed)
pub fn invalid(path: impl Into<String>, reason: impl Into<String>) -> BundlehostError {
    BundlehostError::InvalidBundle {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a corrupt bundle error (archive failed integrity verification)
pub fn corrupt(path: impl Into<String>, reason: impl Into<String>) -> BundlehostError {
    BundlehostError::CorruptBundle {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a bundle open failed error
pub fn open_failed(path: impl Into<String>, reason: impl Into<String>) -> BundlehostError {
    BundlehostError::BundleOpenFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a directory enumeration error
pub fn directory_enumeration(path: impl Into<String>, reason: impl Into<String>) -> BundlehostError {
    BundlehostError::DirectoryEnumeration {
        path: path.into(),
        reason: reason.into(),
    }
}
