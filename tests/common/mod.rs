//! Common test utilities for bundlehost integration tests

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// A scratch directory of bundle archives
pub struct TestBundles {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the bundle directory
    pub path: PathBuf,
}

impl TestBundles {
    /// Create an empty bundle directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a zip bundle with the given entries
    pub fn write_bundle(&self, file_name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
        let path = self.path.join(file_name);
        let file = File::create(&path).expect("Failed to create bundle");
        let mut writer = ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for (name, data) in entries {
            writer
                .start_file(*name, options)
                .expect("Failed to start zip entry");
            writer.write_all(data).expect("Failed to write zip entry");
        }
        writer.finish().expect("Failed to finish bundle");
        path
    }

    /// Write a file that is not a zip archive
    #[allow(dead_code)]
    pub fn write_garbage(&self, file_name: &str) -> PathBuf {
        let path = self.path.join(file_name);
        std::fs::write(&path, b"definitely not a zip archive").expect("Failed to write file");
        path
    }

    /// Write a configuration file next to the bundles
    #[allow(dead_code)]
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.path.join("bundlehost.yaml");
        std::fs::write(&path, yaml).expect("Failed to write config");
        path
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path to the bundlehost binary
    #[allow(dead_code)]
    pub fn bundlehost_bin() -> PathBuf {
        PathBuf::from(env!("CARGO_BIN_EXE_bundlehost"))
    }
}
