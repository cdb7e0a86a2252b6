//! Configuration handling for bundlehost
//!
//! Settings are layered, later layers winning:
//! 1. built-in defaults
//! 2. `bundlehost.yaml` (see [`file`])
//! 3. command-line flags and `BUNDLEHOST_*` environment variables

pub mod file;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::bundle::{BundleParser, DEFAULT_EXTENSION, VerifyMode};
use crate::error::{Result, config_invalid};

pub use file::ConfigFile;

/// Default port, matching the port bundles were historically served on
pub const DEFAULT_PORT: u16 = 4545;

/// Fully resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub dir: PathBuf,
    pub bind: IpAddr,
    pub port: u16,
    pub extension: String,
    pub verify: VerifyMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            extension: DEFAULT_EXTENSION.to_string(),
            verify: VerifyMode::default(),
        }
    }
}

/// Values given on the command line (or through the environment)
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub dir: Option<PathBuf>,
    pub bind: Option<IpAddr>,
    pub port: Option<u16>,
    pub extension: Option<String>,
    pub verify: Option<VerifyMode>,
}

impl Settings {
    /// Layer the configuration file and overrides over the defaults
    pub fn resolve(file: Option<ConfigFile>, overrides: Overrides) -> Result<Self> {
        let mut settings = Settings::default();

        if let Some(file) = file {
            settings.apply(Overrides {
                dir: file.dir,
                bind: file.bind,
                port: file.port,
                extension: file.extension,
                verify: file.verify,
            });
        }
        settings.apply(overrides);

        settings.validate()?;
        Ok(settings)
    }

    fn apply(&mut self, layer: Overrides) {
        if let Some(dir) = layer.dir {
            self.dir = dir;
        }
        if let Some(bind) = layer.bind {
            self.bind = bind;
        }
        if let Some(port) = layer.port {
            self.port = port;
        }
        if let Some(extension) = layer.extension {
            self.extension = extension;
        }
        if let Some(verify) = layer.verify {
            self.verify = verify;
        }
    }

    /// Check values the type system does not
    pub fn validate(&self) -> Result<()> {
        let extension = self.extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(config_invalid("bundle extension must not be empty"));
        }
        if !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(config_invalid(format!(
                "bundle extension '{}' must only contain ASCII letters and digits",
                self.extension
            )));
        }
        Ok(())
    }

    /// Bundle extension without a leading dot
    pub fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    /// Parser configured with these settings
    pub fn parser(&self) -> BundleParser {
        BundleParser::new(self.extension(), self.verify)
    }
}
