//! Bundle discovery
//!
//! Scans a bundle directory (non-recursively) for files matching
//! `*.<extension>` and parses each one. Candidates that fail to parse are
//! kept aside as [`RejectedCandidate`]s for the caller to report; they never
//! abort discovery. Only an unreadable directory does.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::bundle::{BundleCollection, BundleParser, BundleRecord};
use crate::error::{BundlehostError, Result, config_invalid, directory_enumeration};

/// A candidate file that did not parse as a bundle
#[derive(Debug)]
pub struct RejectedCandidate {
    pub path: PathBuf,
    pub error: BundlehostError,
}

/// Bundles discovered in one directory
#[derive(Debug, Default)]
pub struct BundleStore {
    bundles: BundleCollection,
    rejected: Vec<RejectedCandidate>,
}

impl BundleStore {
    /// Discover bundles directly inside `directory`
    pub fn discover(directory: &Path, parser: &BundleParser) -> Result<Self> {
        let candidates = list_candidates(directory, parser.extension())?;

        let mut store = BundleStore::default();
        for path in candidates {
            match parser.parse(&path) {
                Ok(record) => store.bundles.push(record),
                Err(error) if error.is_candidate_error() => {
                    store.rejected.push(RejectedCandidate { path, error });
                }
                Err(error) => return Err(error),
            }
        }

        tracing::debug!(
            directory = %directory.display(),
            loaded = store.bundles.len(),
            rejected = store.rejected.len(),
            "bundle discovery finished"
        );

        Ok(store)
    }

    pub fn bundles(&self) -> &[BundleRecord] {
        &self.bundles
    }

    pub fn rejected(&self) -> &[RejectedCandidate] {
        &self.rejected
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    #[allow(dead_code)]
    pub fn into_bundles(self) -> BundleCollection {
        self.bundles
    }
}

/// Files directly inside `directory` whose name matches `*.<extension>`,
/// sorted by file name
fn list_candidates(directory: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let pattern = format!("*.{extension}");
    let glob = Glob::new(&pattern)
        .map_err(|e| config_invalid(format!("bad bundle extension '{extension}': {e}")))?;

    let enumeration_error =
        |reason: String| directory_enumeration(directory.display().to_string(), reason);

    if !directory.is_dir() {
        return Err(enumeration_error("not a directory".to_string()));
    }

    let mut candidates = Vec::new();
    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            // The directory itself could not be read
            Err(e) if e.depth() == 0 || e.path() == Some(directory) => {
                return Err(enumeration_error(e.to_string()));
            }
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if glob.matched(&CandidatePath::from(name)).is_some() {
            candidates.push(entry.into_path());
        }
    }

    Ok(candidates)
}
