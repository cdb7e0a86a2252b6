//! Per-bundle HTTP service
//!
//! A [`ServiceHandler`] answers requests for one bundle. The requested entry
//! is copied into memory in full before the response is built, so a failed
//! copy is always reported as a clean 500 instead of a truncated 200.

use std::path::Path;

use bytes::Bytes;
use hyper::{Request, Response};

use crate::bundle::BundleRecord;
use crate::error::{BundlehostError, Result, entry_not_found, stream_copy};
use crate::response::{self, Body};
use crate::vfs::VirtualFileResolver;

/// Serves the entries of one bundle
#[derive(Debug)]
pub struct ServiceHandler {
    identifier: String,
    subdomain: String,
    resolver: VirtualFileResolver,
}

impl ServiceHandler {
    pub fn new(record: &BundleRecord, resolver: VirtualFileResolver) -> Self {
        Self {
            identifier: record.identifier().to_string(),
            subdomain: record.subdomain(),
            resolver,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }

    /// Archive this handler serves from
    pub fn source_path(&self) -> &Path {
        self.resolver.archive_path()
    }

    pub fn resolver(&self) -> &VirtualFileResolver {
        &self.resolver
    }

    /// Read the full content of the entry behind `request_path`
    pub fn fetch(&self, request_path: &str) -> Result<Bytes> {
        let entry = self
            .resolver
            .resolve(request_path)
            .ok_or_else(|| entry_not_found(request_path))?;

        let mut body = Vec::new();
        self.resolver
            .copy_to(&entry, &mut body)
            .map_err(|e| stream_copy(&entry, e.to_string()))?;

        Ok(Bytes::from(body))
    }

    /// Answer one request with the entry named by its path
    pub fn serve<B>(&self, request: &Request<B>) -> Response<Body> {
        let path = request.uri().path();

        match self.fetch(path) {
            Ok(body) => {
                tracing::debug!(bundle = %self.identifier, path, bytes = body.len(), "served entry");
                response::ok(body)
            }
            Err(BundlehostError::EntryNotFound { .. }) => {
                tracing::debug!(bundle = %self.identifier, path, "entry not found");
                response::not_found()
            }
            Err(e) => {
                tracing::error!(bundle = %self.identifier, path, error = %e, "failed to serve entry");
                response::internal_error()
            }
        }
    }
}
