//! Registry build errors

use super::BundlehostError;

/// Creates a duplicate subdomain error
pub fn duplicate_subdomain(
    subdomain: impl Into<String>,
    first: impl Into<String>,
    second: impl Into<String>,
) -> BundlehostError {
    BundlehostError::DuplicateSubdomain {
        subdomain: subdomain.into(),
        first: first.into(),
        second: second.into(),
    }
}
