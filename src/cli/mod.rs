//! CLI definitions using clap derive API
//!
//! Each command's argument types live in their own submodule:
//! - serve: Serve command arguments
//! - list: List command arguments
//! - completions: Completions command arguments
//!
//! Arguments shared by commands that discover bundles are in [`BundleArgs`].

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::bundle::VerifyMode;
use crate::config::Overrides;

pub mod completions;
pub mod list;
pub mod serve;

pub use completions::CompletionsArgs;
pub use list::ListArgs;
pub use serve::ServeArgs;

/// Bundlehost - serve zip bundles on localhost subdomains
#[derive(Parser, Debug)]
#[command(
    name = "bundlehost",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Serve zip bundles as static sites on <name>.localhost",
    long_about = "Bundlehost discovers zip bundles in a directory and serves each one \
                  as a static site on its own localhost subdomain: wallet.zip is served \
                  at http://wallet.localhost:<port>/.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  bundlehost serve                       \x1b[90m# Serve bundles in the current directory\x1b[0m\n   \
                  bundlehost serve -d ./dapps -p 8080    \x1b[90m# Serve ./dapps on port 8080\x1b[0m\n   \
                  bundlehost serve --verify manifest     \x1b[90m# Only serve bundles with a valid manifest\x1b[0m\n   \
                  bundlehost list --detailed             \x1b[90m# Show bundles and rejected archives\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(long, short = 'c', global = true, env = "BUNDLEHOST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve bundles over HTTP
    Serve(ServeArgs),

    /// List the bundles that would be served
    List(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options that control bundle discovery
#[derive(Args, Debug, Clone, Default)]
pub struct BundleArgs {
    /// Directory containing bundles (defaults to current directory)
    #[arg(long, short = 'd', env = "BUNDLEHOST_DIR")]
    pub dir: Option<PathBuf>,

    /// File extension of bundle archives
    #[arg(long, short = 'e', env = "BUNDLEHOST_EXTENSION")]
    pub extension: Option<String>,

    /// Integrity check applied to each bundle
    #[arg(long, value_enum, env = "BUNDLEHOST_VERIFY")]
    pub verify: Option<VerifyMode>,
}

impl BundleArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            dir: self.dir.clone(),
            extension: self.extension.clone(),
            verify: self.verify,
            ..Overrides::default()
        }
    }
}
