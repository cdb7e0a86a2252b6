//! Virtual filesystem over a bundle archive
//!
//! Maps request paths onto archive entries without extracting anything to
//! disk. Paths are normalized before lookup: each segment is
//! percent-decoded, the leading `/`, empty segments and `.` segments are
//! dropped, and any `..` segment makes the path unresolvable.

use std::io::{self, Write};
use std::path::Path;

use percent_encoding::percent_decode_str;

use crate::archive::BundleArchive;

/// Resolves request paths to entries of one bundle archive
#[derive(Debug)]
pub struct VirtualFileResolver {
    archive: BundleArchive,
}

impl VirtualFileResolver {
    pub fn new(archive: BundleArchive) -> Self {
        Self { archive }
    }

    /// Archive entry for `request_path`, if the bundle has one
    pub fn resolve(&self, request_path: &str) -> Option<String> {
        let entry = normalize_request_path(request_path)?;
        self.archive.contains(&entry).then_some(entry)
    }

    /// Copy a resolved entry into `out`
    pub fn copy_to<W: Write + ?Sized>(&self, entry: &str, out: &mut W) -> io::Result<u64> {
        self.archive.copy_entry(entry, out)
    }

    pub fn archive_path(&self) -> &Path {
        self.archive.path()
    }

    /// Number of servable entries
    pub fn entry_count(&self) -> usize {
        self.archive.len()
    }

    /// Servable entries, sorted
    pub fn entries(&self) -> Vec<&str> {
        self.archive.entry_names()
    }
}

/// Normalize a request path into an archive entry name
///
/// Returns `None` for paths that name no file (`/`, empty), that try to
/// climb out of the bundle root, or whose escapes do not decode to UTF-8.
/// An encoded `/` inside a segment never matches.
pub fn normalize_request_path(request_path: &str) -> Option<String> {
    let mut segments = Vec::new();

    for raw in request_path.split('/') {
        let segment = percent_decode_str(raw).decode_utf8().ok()?;
        match segment.as_ref() {
            "" | "." => {}
            ".." => return None,
            other if other.contains(['/', '\\', '\0']) => return None,
            _ => segments.push(segment),
        }
    }

    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}
