//! Bundle integrity verification
//!
//! Verification is pluggable through [`IntegrityCheck`] and is off unless
//! [`VerifyMode::Manifest`] is selected. With it off, a bundle is only
//! checked for being a readable zip container; nothing guarantees that its
//! entries are the ones its author shipped.
//!
//! The manifest check expects a `manifest.json` entry of the form
//!
//! ```json
//! { "files": { "index.html": "blake3:…", "css/app.css": "blake3:…" } }
//! ```
//!
//! and requires that the manifest lists exactly the archive's file entries
//! and that every digest matches.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::Read;

use serde::{Deserialize, Serialize};
use zip::ZipArchive;

use crate::archive::normalize_entry_name;
use crate::hash::{hash_reader, verify_hash};

/// Name of the manifest entry inside a bundle
pub const MANIFEST_ENTRY: &str = "manifest.json";

/// Which integrity check the parser runs on each candidate
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum VerifyMode {
    /// Accept any well-formed archive
    #[default]
    #[value(name = "none")]
    #[serde(rename = "none")]
    Disabled,
    /// Require a manifest.json with matching BLAKE3 digests
    Manifest,
}

impl VerifyMode {
    pub fn checker(self) -> Box<dyn IntegrityCheck> {
        match self {
            VerifyMode::Disabled => Box::new(NoVerification),
            VerifyMode::Manifest => Box::new(ManifestVerifier),
        }
    }
}

impl std::fmt::Display for VerifyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerifyMode::Disabled => write!(f, "none"),
            VerifyMode::Manifest => write!(f, "manifest"),
        }
    }
}

/// An integrity check over an opened bundle archive
///
/// Returns the reason for rejection on failure.
pub trait IntegrityCheck: Send + Sync {
    fn name(&self) -> &'static str;

    fn verify(&self, archive: &mut ZipArchive<File>) -> Result<(), String>;
}

/// Accepts every archive
#[derive(Debug, Default)]
pub struct NoVerification;

impl IntegrityCheck for NoVerification {
    fn name(&self) -> &'static str {
        "none"
    }

    fn verify(&self, _archive: &mut ZipArchive<File>) -> Result<(), String> {
        Ok(())
    }
}

/// Bundle manifest listing the expected digest of every entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    pub files: BTreeMap<String, String>,
}

/// Verifies entries against the bundle's `manifest.json`
#[derive(Debug, Default)]
pub struct ManifestVerifier;

impl IntegrityCheck for ManifestVerifier {
    fn name(&self) -> &'static str {
        "manifest"
    }

    fn verify(&self, archive: &mut ZipArchive<File>) -> Result<(), String> {
        let manifest = read_manifest(archive)?;

        // normalized name -> stored name, manifest itself excluded
        let entries: HashMap<String, String> = archive
            .file_names()
            .filter(|name| !name.ends_with('/'))
            .map(|name| (normalize_entry_name(name).to_string(), name.to_string()))
            .filter(|(normalized, _)| normalized != MANIFEST_ENTRY)
            .collect();

        if let Some(unlisted) = entries.keys().find(|name| !manifest.files.contains_key(*name)) {
            return Err(format!("entry '{unlisted}' is not listed in {MANIFEST_ENTRY}"));
        }

        for (name, expected) in &manifest.files {
            let stored = entries
                .get(normalize_entry_name(name))
                .ok_or_else(|| format!("entry '{name}' listed in {MANIFEST_ENTRY} is missing"))?;

            let mut entry = archive
                .by_name(stored)
                .map_err(|e| format!("cannot open entry '{name}': {e}"))?;
            let actual =
                hash_reader(&mut entry).map_err(|e| format!("cannot read entry '{name}': {e}"))?;

            if !verify_hash(expected, &actual) {
                return Err(format!("hash mismatch for '{name}'"));
            }
        }

        Ok(())
    }
}

fn read_manifest(archive: &mut ZipArchive<File>) -> Result<Manifest, String> {
    let mut entry = archive
        .by_name(MANIFEST_ENTRY)
        .map_err(|_| format!("missing {MANIFEST_ENTRY}"))?;

    let mut raw = Vec::new();
    entry
        .read_to_end(&mut raw)
        .map_err(|e| format!("cannot read {MANIFEST_ENTRY}: {e}"))?;

    serde_json::from_slice(&raw).map_err(|e| format!("invalid {MANIFEST_ENTRY}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::open_zip;
    use crate::test_fixtures::{create_temp_dir, write_bundle, write_signed_bundle};

    #[test]
    fn test_no_verification_accepts_anything() {
        let temp = create_temp_dir();
        let path = write_bundle(temp.path(), "plain.zip", &[("index.html", b"hi")]);
        let mut archive = open_zip(&path).unwrap();
        assert!(NoVerification.verify(&mut archive).is_ok());
    }

    #[test]
    fn test_manifest_verifier_accepts_signed_bundle() {
        let temp = create_temp_dir();
        let path = write_signed_bundle(
            temp.path(),
            "wallet.zip",
            &[("index.html", b"<h1>hi</h1>"), ("js/app.js", b"console.log(1)")],
        );
        let mut archive = open_zip(&path).unwrap();
        assert!(ManifestVerifier.verify(&mut archive).is_ok());
    }

    #[test]
    fn test_manifest_verifier_rejects_missing_manifest() {
        let temp = create_temp_dir();
        let path = write_bundle(temp.path(), "plain.zip", &[("index.html", b"hi")]);
        let mut archive = open_zip(&path).unwrap();
        let reason = ManifestVerifier.verify(&mut archive).unwrap_err();
        assert!(reason.contains("missing manifest.json"));
    }

    #[test]
    fn test_manifest_verifier_rejects_hash_mismatch() {
        let temp = create_temp_dir();
        let manifest = serde_json::json!({
            "files": { "index.html": crate::hash::hash_bytes(b"original") }
        })
        .to_string();
        let path = write_bundle(
            temp.path(),
            "tampered.zip",
            &[("index.html", b"tampered"), (MANIFEST_ENTRY, manifest.as_bytes())],
        );
        let mut archive = open_zip(&path).unwrap();
        let reason = ManifestVerifier.verify(&mut archive).unwrap_err();
        assert!(reason.contains("hash mismatch for 'index.html'"));
    }

    #[test]
    fn test_manifest_verifier_rejects_unlisted_entry() {
        let temp = create_temp_dir();
        let manifest = serde_json::json!({
            "files": { "index.html": crate::hash::hash_bytes(b"hi") }
        })
        .to_string();
        let path = write_bundle(
            temp.path(),
            "extra.zip",
            &[
                ("index.html", b"hi"),
                ("sneaky.js", b"alert(1)"),
                (MANIFEST_ENTRY, manifest.as_bytes()),
            ],
        );
        let mut archive = open_zip(&path).unwrap();
        let reason = ManifestVerifier.verify(&mut archive).unwrap_err();
        assert!(reason.contains("sneaky.js"));
    }

    #[test]
    fn test_manifest_verifier_rejects_missing_entry() {
        let temp = create_temp_dir();
        let manifest = serde_json::json!({
            "files": {
                "index.html": crate::hash::hash_bytes(b"hi"),
                "gone.css": crate::hash::hash_bytes(b"body{}")
            }
        })
        .to_string();
        let path = write_bundle(
            temp.path(),
            "short.zip",
            &[("index.html", b"hi"), (MANIFEST_ENTRY, manifest.as_bytes())],
        );
        let mut archive = open_zip(&path).unwrap();
        let reason = ManifestVerifier.verify(&mut archive).unwrap_err();
        assert!(reason.contains("'gone.css'"));
    }

    #[test]
    fn test_manifest_verifier_rejects_malformed_manifest() {
        let temp = create_temp_dir();
        let path = write_bundle(
            temp.path(),
            "badjson.zip",
            &[("index.html", b"hi"), (MANIFEST_ENTRY, b"{not json")],
        );
        let mut archive = open_zip(&path).unwrap();
        let reason = ManifestVerifier.verify(&mut archive).unwrap_err();
        assert!(reason.contains("invalid manifest.json"));
    }

    #[test]
    fn test_verify_mode_checker() {
        assert_eq!(VerifyMode::default(), VerifyMode::Disabled);
        assert_eq!(VerifyMode::Disabled.checker().name(), "none");
        assert_eq!(VerifyMode::Manifest.checker().name(), "manifest");
        assert_eq!(VerifyMode::Manifest.to_string(), "manifest");
    }
}
