//! Random-access reads from a bundle's zip archive
//!
//! A [`BundleArchive`] opens the zip container once at startup and snapshots
//! its entry table into an immutable index. `zip` readers need `&mut` access
//! to seek and an entry stream borrows its reader, so each entry read opens
//! its own handle; requests for the same bundle never wait on each other.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use zip::ZipArchive;
use zip::result::ZipResult;

use crate::error::{Result, bundle_open_failed};

/// An opened bundle archive shared by all requests for one bundle
#[derive(Debug)]
pub struct BundleArchive {
    path: PathBuf,
    /// Normalized entry name -> name as stored in the archive
    entries: HashMap<String, String>,
}

impl BundleArchive {
    /// Open the archive at `path` and index its file entries
    pub fn open(path: &Path) -> Result<Self> {
        let reader = open_zip(path)
            .map_err(|e| bundle_open_failed(path.display().to_string(), e.to_string()))?;
        let entries = index_entries(&reader);

        tracing::debug!(
            path = %path.display(),
            entries = entries.len(),
            "opened bundle archive"
        );

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Location of the archive on disk
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a file entry with this normalized name exists
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of file entries in the archive
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Normalized names of all file entries, sorted
    pub fn entry_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Copy the full content of entry `name` into `out`
    ///
    /// Reads through a handle private to this call, closed before returning
    /// on success and on error.
    pub fn copy_entry<W: Write + ?Sized>(&self, name: &str, out: &mut W) -> io::Result<u64> {
        let stored = self
            .entries
            .get(name)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, name.to_string()))?;

        let mut reader = open_zip(&self.path).map_err(io::Error::from)?;
        let mut entry = reader.by_name(stored).map_err(io::Error::from)?;
        io::copy(&mut entry, out)
    }
}

/// Open a zip container, failing on unreadable files and bad structure
pub fn open_zip(path: &Path) -> ZipResult<ZipArchive<File>> {
    let file = File::open(path)?;
    ZipArchive::new(file)
}

/// Strip the leading `/` some archivers write so lookups use one form
pub fn normalize_entry_name(name: &str) -> &str {
    name.trim_start_matches('/')
}

fn index_entries(reader: &ZipArchive<File>) -> HashMap<String, String> {
    reader
        .file_names()
        .filter(|name| !name.ends_with('/'))
        .map(|name| (normalize_entry_name(name).to_string(), name.to_string()))
        .filter(|(normalized, _)| !normalized.is_empty())
        .collect()
}
