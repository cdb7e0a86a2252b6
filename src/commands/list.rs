//! List command implementation
//!
//! Lists the bundles that `serve` would load from the configured directory,
//! with the URL each one is served at.

use std::path::Path;

use console::Style;

use super::helpers::{bundle_url, resolve_settings};
use crate::cli::ListArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::store::BundleStore;

/// Run list command
pub fn run(config: Option<&Path>, args: ListArgs) -> Result<()> {
    let settings = resolve_settings(config, args.bundles.overrides())?;
    let store = BundleStore::discover(&settings.dir, &settings.parser())?;

    print!("{}", render(&store, &settings, args.detailed));
    Ok(())
}

/// Render the listing
fn render(store: &BundleStore, settings: &Settings, detailed: bool) -> String {
    let mut out = String::new();
    let bold = Style::new().bold();

    if store.is_empty() {
        out.push_str(&format!(
            "No bundles found in {}.\n",
            settings.dir.display()
        ));
    } else {
        out.push_str(&format!("Bundles ({}):\n\n", store.len()));
        for bundle in store.bundles() {
            out.push_str(&format!(
                "  {}\n",
                Style::new().bold().yellow().apply_to(bundle.identifier())
            ));
            out.push_str(&format!(
                "    {} {}\n",
                bold.apply_to("URL:"),
                Style::new()
                    .cyan()
                    .apply_to(bundle_url(&bundle.subdomain(), settings.port))
            ));
            if detailed {
                out.push_str(&format!(
                    "    {} {}\n",
                    bold.apply_to("Path:"),
                    bundle.source_path().display()
                ));
            }
            out.push('\n');
        }
    }

    if !store.rejected().is_empty() {
        if detailed {
            out.push_str(&format!("Rejected ({}):\n\n", store.rejected().len()));
            for rejected in store.rejected() {
                out.push_str(&format!(
                    "  {}\n    {} {}\n\n",
                    Style::new().bold().red().apply_to(rejected.path.display()),
                    bold.apply_to("Reason:"),
                    rejected.error
                ));
            }
        } else {
            out.push_str(&format!(
                "{}\n",
                Style::new().dim().apply_to(format!(
                    "{} archive(s) rejected, use --detailed to see why",
                    store.rejected().len()
                ))
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{create_temp_dir, write_bundle, write_garbage};

    fn settings_for(dir: &Path) -> Settings {
        Settings {
            dir: dir.to_path_buf(),
            ..Settings::default()
        }
    }

    fn plain(text: String) -> String {
        console::strip_ansi_codes(&text).into_owned()
    }

    #[test]
    fn test_render_bundles() {
        let temp = create_temp_dir();
        write_bundle(temp.path(), "Wallet.zip", &[("index.html", b"hi")]);
        let settings = settings_for(temp.path());
        let store = BundleStore::discover(temp.path(), &settings.parser()).unwrap();

        let out = plain(render(&store, &settings, false));
        assert!(out.contains("Bundles (1):"));
        assert!(out.contains("Wallet"));
        assert!(out.contains("http://wallet.localhost:4545/"));
        assert!(!out.contains("Path:"));
    }

    #[test]
    fn test_render_empty() {
        let temp = create_temp_dir();
        let settings = settings_for(temp.path());
        let store = BundleStore::discover(temp.path(), &settings.parser()).unwrap();

        let out = plain(render(&store, &settings, false));
        assert!(out.starts_with("No bundles found in"));
    }

    #[test]
    fn test_render_rejected() {
        let temp = create_temp_dir();
        write_bundle(temp.path(), "wallet.zip", &[("index.html", b"hi")]);
        write_garbage(temp.path(), "broken.zip");
        let settings = settings_for(temp.path());
        let store = BundleStore::discover(temp.path(), &settings.parser()).unwrap();

        let summary = plain(render(&store, &settings, false));
        assert!(summary.contains("1 archive(s) rejected"));
        assert!(!summary.contains("broken.zip"));

        let detailed = plain(render(&store, &settings, true));
        assert!(detailed.contains("Rejected (1):"));
        assert!(detailed.contains("broken.zip"));
        assert!(detailed.contains("Path:"));
    }
}
