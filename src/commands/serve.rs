//! Serve command implementation
//!
//! Startup runs strictly in order: settings, discovery, registry build,
//! bind. The listener only exists once every bundle's archive is open, so
//! no request can observe a partially built registry.

use std::net::SocketAddr;
use std::path::Path;

use console::Style;

use super::helpers::{bundle_url, resolve_settings};
use crate::cli::ServeArgs;
use crate::error::{Result, server_failed};
use crate::router::{Registry, Router};
use crate::server::Server;
use crate::store::BundleStore;

/// Run serve command
pub fn run(config: Option<&Path>, args: ServeArgs) -> Result<()> {
    let settings = resolve_settings(config, args.overrides())?;

    let store = BundleStore::discover(&settings.dir, &settings.parser())?;
    for rejected in store.rejected() {
        tracing::warn!(
            path = %rejected.path.display(),
            "skipping bundle: {}",
            rejected.error
        );
    }

    let registry = Registry::build(store.bundles())?;
    tracing::info!(
        directory = %settings.dir.display(),
        loaded = registry.len(),
        rejected = store.rejected().len(),
        "bundles loaded"
    );
    if registry.is_empty() {
        tracing::warn!(
            directory = %settings.dir.display(),
            "no bundles to serve; every request will get 404"
        );
    }

    let router = Router::new(registry);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| server_failed(format!("failed to start runtime: {e}")))?;

    runtime.block_on(async move {
        let listener = Server::bind(settings.listen_addr()).await?;
        let local = listener
            .local_addr()
            .map_err(|e| server_failed(format!("failed to read listen address: {e}")))?;

        print_banner(&router, local);
        tracing::info!(listen = %local, "listening");

        Server::new(router).run(listener, shutdown_signal()).await
    })
}

fn print_banner(router: &Router, local: SocketAddr) {
    println!(
        "{} {}",
        Style::new().bold().green().apply_to("Serving on"),
        Style::new().cyan().apply_to(format!("http://{local}"))
    );
    for handler in router.registry().handlers() {
        println!(
            "  {} {}",
            Style::new().bold().yellow().apply_to(handler.identifier()),
            bundle_url(handler.subdomain(), local.port())
        );
    }
    println!("{}", Style::new().dim().apply_to("Press Ctrl-C to stop"));
}

/// Resolves on Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server runs until killed
        tracing::warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
