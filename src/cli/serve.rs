use clap::Parser;
use std::net::IpAddr;

use super::BundleArgs;
use crate::config::Overrides;

/// Arguments for the serve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Serve bundles in the current directory:\n    bundlehost serve\n\n\
                  Serve a directory on another port:\n    bundlehost serve --dir ./dapps --port 8080\n\n\
                  Listen on all interfaces:\n    bundlehost serve --bind 0.0.0.0")]
pub struct ServeArgs {
    #[command(flatten)]
    pub bundles: BundleArgs,

    /// Port to listen on
    #[arg(long, short = 'p', env = "BUNDLEHOST_PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, short = 'b', env = "BUNDLEHOST_BIND")]
    pub bind: Option<IpAddr>,
}

impl ServeArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            port: self.port,
            bind: self.bind,
            ..self.bundles.overrides()
        }
    }
}
