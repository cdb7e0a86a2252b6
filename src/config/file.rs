//! Configuration file (bundlehost.yaml) data structures
//!
//! Every field is optional; unset fields fall back to the built-in defaults
//! or to command-line flags.
//!
//! ```yaml
//! dir: /srv/bundles
//! port: 4545
//! bind: 127.0.0.1
//! extension: zip
//! verify: manifest
//! ```

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bundle::VerifyMode;
use crate::error::{Result, config_not_found, config_parse_failed, config_read_failed};

/// Contents of a configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Directory holding the bundle archives
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Port to listen on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Address to listen on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<IpAddr>,

    /// Bundle file extension, without the dot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    /// Integrity check run on each bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify: Option<VerifyMode>,
}

impl ConfigFile {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document is an empty configuration
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config_not_found(path.display().to_string()));
        }

        let yaml = std::fs::read_to_string(path)
            .map_err(|e| config_read_failed(path.display().to_string(), e.to_string()))?;

        Self::from_yaml(&yaml)
            .map_err(|e| config_parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Serialize configuration to YAML string
    #[allow(dead_code)]
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
