//! Subdomain routing
//!
//! The [`Registry`] maps lowercase subdomains to [`ServiceHandler`]s. It is
//! built once from the discovered bundles and has no mutating API after
//! that, so the [`Router`] can be shared across connection tasks behind an
//! `Arc` without locking.

pub mod host;

use std::collections::HashMap;

use hyper::header;
use hyper::{Request, Response};

use crate::archive::BundleArchive;
use crate::bundle::BundleRecord;
use crate::error::{Result, duplicate_subdomain};
use crate::response::{self, Body};
use crate::service::ServiceHandler;
use crate::vfs::VirtualFileResolver;

pub use host::subdomain_of;

/// Immutable subdomain -> handler mapping
#[derive(Debug, Default)]
pub struct Registry {
    services: HashMap<String, ServiceHandler>,
}

impl Registry {
    /// Build the registry, opening every bundle's archive
    ///
    /// Fails as a whole when two bundles share a subdomain or when an
    /// archive can no longer be opened; no partial registry is returned.
    pub fn build(bundles: &[BundleRecord]) -> Result<Self> {
        let mut services: HashMap<String, ServiceHandler> = HashMap::with_capacity(bundles.len());

        for record in bundles {
            let subdomain = record.subdomain();
            if let Some(existing) = services.get(&subdomain) {
                return Err(duplicate_subdomain(
                    subdomain,
                    existing.source_path().display().to_string(),
                    record.source_path().display().to_string(),
                ));
            }

            let archive = BundleArchive::open(record.source_path())?;
            let handler = ServiceHandler::new(record, VirtualFileResolver::new(archive));

            tracing::debug!(
                bundle = record.identifier(),
                subdomain = %subdomain,
                entries = handler.resolver().entry_count(),
                "registered bundle"
            );
            tracing::trace!(bundle = record.identifier(), entries = ?handler.resolver().entries());
            services.insert(subdomain, handler);
        }

        Ok(Self { services })
    }

    pub fn get(&self, subdomain: &str) -> Option<&ServiceHandler> {
        self.services.get(subdomain)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Handlers sorted by subdomain
    pub fn handlers(&self) -> Vec<&ServiceHandler> {
        let mut handlers: Vec<&ServiceHandler> = self.services.values().collect();
        handlers.sort_by(|a, b| a.subdomain().cmp(b.subdomain()));
        handlers
    }
}

/// Dispatches requests to bundle handlers by the subdomain of their host
#[derive(Debug, Default)]
pub struct Router {
    registry: Registry,
}

impl Router {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Route one request
    ///
    /// Unknown subdomains and hosts of any other shape get a 404; a matched
    /// handler's response is returned unmodified.
    pub fn route<B>(&self, request: &Request<B>) -> Response<Body> {
        let host = request_host(request);
        let handler = host
            .and_then(subdomain_of)
            .and_then(|subdomain| self.registry.get(&subdomain));

        match handler {
            Some(handler) => handler.serve(request),
            None => {
                tracing::debug!(
                    host = host.unwrap_or_default(),
                    path = request.uri().path(),
                    "no bundle for host"
                );
                response::not_found()
            }
        }
    }
}

/// Host of a request: the `Host` header, or the URI authority for
/// absolute-form requests without one
fn request_host<B>(request: &Request<B>) -> Option<&str> {
    request
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| request.uri().authority().map(|authority| authority.as_str()))
}
