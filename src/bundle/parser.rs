//! Bundle parsing
//!
//! Turns a candidate file into a [`BundleRecord`]: the file must open as a
//! zip container and pass the configured integrity check. The archive handle
//! is closed again before parsing returns.

use std::path::Path;

use super::integrity::IntegrityCheck;
use super::{BundleRecord, DEFAULT_EXTENSION, VerifyMode};
use crate::archive::open_zip;
use crate::error::{Result, corrupt_bundle, invalid_bundle};

/// Parses candidate files into bundle records
pub struct BundleParser {
    extension: String,
    check: Box<dyn IntegrityCheck>,
}

impl BundleParser {
    pub fn new(extension: impl Into<String>, verify: VerifyMode) -> Self {
        Self {
            extension: extension.into(),
            check: verify.checker(),
        }
    }

    /// Use a custom integrity check
    #[allow(dead_code)]
    pub fn with_check(extension: impl Into<String>, check: Box<dyn IntegrityCheck>) -> Self {
        Self {
            extension: extension.into(),
            check,
        }
    }

    /// Bundle file extension, without the dot
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Parse the bundle at `path`
    ///
    /// Fails with `InvalidBundle` when the file is not a readable zip archive
    /// (or its name yields no bundle name) and with `CorruptBundle` when the
    /// integrity check rejects it.
    pub fn parse(&self, path: &Path) -> Result<BundleRecord> {
        let shown = path.display().to_string();

        let mut archive = open_zip(path).map_err(|e| invalid_bundle(&shown, e.to_string()))?;
        self.check
            .verify(&mut archive)
            .map_err(|reason| corrupt_bundle(&shown, reason))?;
        drop(archive);

        let identifier = derive_identifier(path, &self.extension).ok_or_else(|| {
            invalid_bundle(
                &shown,
                format!("file name does not end in a non-empty name before .{}", self.extension),
            )
        })?;

        tracing::debug!(
            bundle = %identifier,
            path = %shown,
            check = self.check.name(),
            "parsed bundle"
        );

        Ok(BundleRecord::new(identifier, path))
    }
}

impl Default for BundleParser {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSION, VerifyMode::default())
    }
}

/// Parse a `.zip` bundle without integrity verification
#[allow(dead_code)]
pub fn parse(path: &Path) -> Result<BundleRecord> {
    BundleParser::default().parse(path)
}

/// Bundle name of `path`: the file name without directory and without
/// `.<extension>`; case is preserved.
///
/// Returns `None` when the file name does not carry the extension or the
/// remaining stem is empty.
pub fn derive_identifier(path: &Path, extension: &str) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let stem = file_name.strip_suffix(extension)?.strip_suffix('.')?;

    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}
