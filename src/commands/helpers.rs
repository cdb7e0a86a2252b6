//! Command helper utilities

use std::path::Path;

use crate::config::{ConfigFile, Overrides, Settings};
use crate::error::Result;

/// Resolve settings from an optional configuration file and CLI overrides
///
/// A configuration file is only read when one was named with `--config`
/// (or `BUNDLEHOST_CONFIG`); naming a missing file is an error.
pub fn resolve_settings(config: Option<&Path>, overrides: Overrides) -> Result<Settings> {
    let file = config.map(ConfigFile::load).transpose()?;
    let settings = Settings::resolve(file, overrides)?;

    tracing::debug!(
        dir = %settings.dir.display(),
        listen = %settings.listen_addr(),
        extension = settings.extension(),
        verify = %settings.verify,
        "resolved settings"
    );

    Ok(settings)
}

/// URL a bundle is reachable at
pub fn bundle_url(subdomain: &str, port: u16) -> String {
    format!("http://{subdomain}.localhost:{port}/")
}
