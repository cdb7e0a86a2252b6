//! Test fixtures and utilities for reducing test setup duplication.
//!
//! This module provides helper functions to create bundle directories and
//! zip bundles with a single function call.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, write_bundle};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     let path = write_bundle(temp.path(), "wallet.zip", &[("index.html", b"<h1>hi</h1>")]);
//! }
//! ```

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::write::SimpleFileOptions;

use crate::bundle::integrity::{MANIFEST_ENTRY, Manifest};
use crate::hash::hash_bytes;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write a zip bundle named `file_name` into `dir` with the given entries.
///
/// # Panics
///
/// Panics if the archive cannot be written.
pub fn write_bundle(dir: &Path, file_name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
    let path = dir.join(file_name);
    let file = std::fs::File::create(&path).expect("Failed to create bundle file");
    let mut writer = zip::ZipWriter::new(file);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (name, content) in entries {
        writer
            .start_file(*name, options)
            .expect("Failed to start zip entry");
        writer.write_all(content).expect("Failed to write zip entry");
    }

    writer.finish().expect("Failed to finish bundle");
    path
}

/// Write a zip bundle that carries a `manifest.json` with BLAKE3 digests
/// of every given entry.
///
/// # Panics
///
/// Panics if the archive cannot be written.
pub fn write_signed_bundle(dir: &Path, file_name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
    let files: BTreeMap<String, String> = entries
        .iter()
        .map(|(name, content)| ((*name).to_string(), hash_bytes(content)))
        .collect();
    let manifest = serde_json::to_vec(&Manifest { files }).expect("Failed to encode manifest");

    let mut all: Vec<(&str, &[u8])> = entries.to_vec();
    all.push((MANIFEST_ENTRY, manifest.as_slice()));
    write_bundle(dir, file_name, &all)
}

/// Write a file that is not a zip archive
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_garbage(dir: &Path, file_name: &str) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, b"this is not a zip archive").expect("Failed to write file");
    path
}
