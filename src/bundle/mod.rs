//! Bundle records and parsing
//!
//! A bundle is a zip archive of static content. Parsing validates the
//! archive and derives the bundle's name from its file name; the name is
//! later lowercased to become the bundle's subdomain.

pub mod integrity;
pub mod parser;

use std::path::{Path, PathBuf};

pub use integrity::VerifyMode;
pub use parser::BundleParser;

/// Default file extension of bundle archives (without the dot)
pub const DEFAULT_EXTENSION: &str = "zip";

/// A successfully parsed bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleRecord {
    identifier: String,
    source_path: PathBuf,
}

/// Bundles that survived discovery
pub type BundleCollection = Vec<BundleRecord>;

impl BundleRecord {
    pub fn new(identifier: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            identifier: identifier.into(),
            source_path: source_path.into(),
        }
    }

    /// Bundle name as derived from the file name, case preserved
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Location of the bundle archive
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Routing key for this bundle
    pub fn subdomain(&self) -> String {
        self.identifier.to_lowercase()
    }
}
