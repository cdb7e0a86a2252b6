//! Error types and handling for bundlehost
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bundle`]: Bundle parsing and discovery errors
//! - [`registry`]: Registry build errors
//! - [`serve`]: Request-scoped errors
//! - [`config`]: Configuration errors

pub mod bundle;
pub mod config;
pub mod registry;
pub mod serve;

#[allow(unused_imports)]
pub use bundle::{
    corrupt as corrupt_bundle, directory_enumeration, invalid as invalid_bundle,
    open_failed as bundle_open_failed,
};
#[allow(unused_imports)]
pub use config::{
    invalid as config_invalid, not_found as config_not_found, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
pub use registry::duplicate_subdomain;
pub use serve::{bind_failed, entry_not_found, server_failed, stream_copy};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bundlehost operations
#[derive(Error, Diagnostic, Debug)]
pub enum BundlehostError {
    // Bundle errors
    #[error("Invalid bundle archive '{path}': {reason}")]
    #[diagnostic(
        code(bundlehost::bundle::invalid),
        help("The file must be a readable zip archive")
    )]
    InvalidBundle { path: String, reason: String },

    #[error("Corrupt bundle archive '{path}': {reason}")]
    #[diagnostic(
        code(bundlehost::bundle::corrupt),
        help("The archive opened but failed integrity verification")
    )]
    CorruptBundle { path: String, reason: String },

    #[error("Failed to open bundle archive '{path}': {reason}")]
    #[diagnostic(
        code(bundlehost::bundle::open_failed),
        help("The bundle changed on disk between discovery and registration")
    )]
    BundleOpenFailed { path: String, reason: String },

    #[error("Failed to read bundle directory '{path}': {reason}")]
    #[diagnostic(
        code(bundlehost::bundle::directory_enumeration),
        help("Check that the bundle directory exists and is readable")
    )]
    DirectoryEnumeration { path: String, reason: String },

    // Registry errors
    #[error("Duplicate subdomain '{subdomain}' for bundles '{first}' and '{second}'")]
    #[diagnostic(
        code(bundlehost::registry::duplicate_subdomain),
        help("Bundle names are case-insensitive; rename one of the archives")
    )]
    DuplicateSubdomain {
        subdomain: String,
        first: String,
        second: String,
    },

    // Request errors
    #[error("Entry not found: {path}")]
    #[diagnostic(code(bundlehost::serve::entry_not_found))]
    EntryNotFound { path: String },

    #[error("Failed to stream entry '{path}': {reason}")]
    #[diagnostic(code(bundlehost::serve::stream_copy))]
    StreamCopy { path: String, reason: String },

    // Server errors
    #[error("Failed to bind {addr}: {reason}")]
    #[diagnostic(
        code(bundlehost::server::bind_failed),
        help("Check that the port is free and the address is valid")
    )]
    BindFailed { addr: String, reason: String },

    #[error("Server failed: {message}")]
    #[diagnostic(code(bundlehost::server::failed))]
    ServerFailed { message: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(bundlehost::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(bundlehost::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(bundlehost::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(bundlehost::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },
}

impl BundlehostError {
    /// Whether this error only affects a single discovery candidate
    pub fn is_candidate_error(&self) -> bool {
        matches!(
            self,
            BundlehostError::InvalidBundle { .. } | BundlehostError::CorruptBundle { .. }
        )
    }
}

impl From<serde_yaml::Error> for BundlehostError {
    fn from(err: serde_yaml::Error) -> Self {
        BundlehostError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BundlehostError>;
