//! Bundlehost - serve zip bundles on localhost subdomains
//!
//! Each bundle archive in a directory is served as a static site on its own
//! subdomain: `wallet.zip` answers at `http://wallet.localhost:<port>/`.

use clap::Parser;

mod archive;
mod bundle;
mod cli;
mod commands;
mod config;
mod error;
mod hash;
mod logging;
mod response;
mod router;
mod server;
mod service;
mod store;
#[cfg(test)]
mod test_fixtures;
mod vfs;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Serve(args) => commands::serve::run(config, args),
        Commands::List(args) => commands::list::run(config, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
