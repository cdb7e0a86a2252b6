//! Version command implementation

use crate::bundle::integrity::MANIFEST_ENTRY;
use crate::config::Settings;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", render());
    Ok(())
}

/// Version banner with the defaults `serve` starts with
fn render() -> String {
    let defaults = Settings::default();

    format!(
        "bundlehost {version}\n\
         \n\
         Defaults:\n  \
         Listen: {listen}\n  \
         Bundles: {dir}/*.{extension}\n  \
         Verify: {verify} (manifest mode reads {MANIFEST_ENTRY})\n\
         \n\
         Build info:\n  \
         Minimum Rust: {rust}\n  \
         Profile: {profile}\n",
        version = env!("CARGO_PKG_VERSION"),
        listen = defaults.listen_addr(),
        dir = defaults.dir.display(),
        extension = defaults.extension(),
        verify = defaults.verify,
        rust = env!("CARGO_PKG_RUST_VERSION"),
        profile = if cfg!(debug_assertions) { "debug" } else { "release" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_defaults() {
        let out = render();
        assert!(out.starts_with(&format!("bundlehost {}", env!("CARGO_PKG_VERSION"))));
        assert!(out.contains("Listen: 127.0.0.1:4545"));
        assert!(out.contains("Bundles: ./*.zip"));
        assert!(out.contains("Verify: none (manifest mode reads manifest.json)"));
        assert!(out.contains("Build info:"));
    }
}
