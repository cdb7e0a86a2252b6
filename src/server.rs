//! HTTP transport
//!
//! Accepts TCP connections and drives each one with hyper's HTTP/1 server
//! on its own task. Routing reads bundle archives with blocking file I/O, so
//! every request is handed to tokio's blocking pool.

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use crate::error::{Result, bind_failed};
use crate::response::{self, Body};
use crate::router::Router;

/// Pause after a failed accept (e.g. out of file descriptors)
const ACCEPT_BACKOFF: Duration = Duration::from_millis(50);

/// Serves a fully built router
pub struct Server {
    router: Arc<Router>,
}

impl Server {
    pub fn new(router: Router) -> Self {
        Self {
            router: Arc::new(router),
        }
    }

    /// Bind a listener on `addr`
    pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
        TcpListener::bind(addr)
            .await
            .map_err(|e| bind_failed(addr.to_string(), e.to_string()))
    }

    /// Accept connections on `listener` until `shutdown` resolves
    ///
    /// Connections that are still open when the loop stops are not waited
    /// for.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                () = &mut shutdown => {
                    tracing::info!("shutting down");
                    break;
                }
                accepted = listener.accept() => {
                    let (stream, peer) = match accepted {
                        Ok(accepted) => accepted,
                        Err(e) => {
                            tracing::warn!(error = %e, "failed to accept connection");
                            tokio::time::sleep(ACCEPT_BACKOFF).await;
                            continue;
                        }
                    };
                    self.spawn_connection(stream, peer);
                }
            }
        }

        Ok(())
    }

    fn spawn_connection(&self, stream: tokio::net::TcpStream, peer: SocketAddr) {
        let router = Arc::clone(&self.router);

        tokio::spawn(async move {
            let service = service_fn(move |request| dispatch(Arc::clone(&router), request));

            if let Err(e) = http1::Builder::new()
                .serve_connection(TokioIo::new(stream), service)
                .await
            {
                tracing::debug!(peer = %peer, error = %e, "connection closed with error");
            }
        });
    }
}

async fn dispatch(
    router: Arc<Router>,
    request: Request<Incoming>,
) -> std::result::Result<Response<Body>, Infallible> {
    // Entries are served from the archive only; request bodies are ignored
    let (parts, _body) = request.into_parts();
    let request = Request::from_parts(parts, ());

    let response = tokio::task::spawn_blocking(move || router.route(&request))
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "request handler failed");
            response::internal_error()
        });

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::BundleParser;
    use crate::error::BundlehostError;
    use crate::router::Registry;
    use crate::store::BundleStore;
    use crate::test_fixtures::{create_temp_dir, write_bundle, write_garbage};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    async fn raw_get(addr: SocketAddr, host: &str, path: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let request = format!("GET {path} HTTP/1.1\r\nHost: {host}\r\nConnection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut raw = Vec::new();
        stream.read_to_end(&mut raw).await.unwrap();
        String::from_utf8_lossy(&raw).into_owned()
    }

    #[tokio::test]
    async fn test_serves_bundles_over_tcp() {
        let temp = create_temp_dir();
        write_bundle(temp.path(), "wallet.zip", &[("index.html", b"<h1>hi</h1>")]);
        write_garbage(temp.path(), "broken.zip");

        let store = BundleStore::discover(temp.path(), &BundleParser::default()).unwrap();
        assert_eq!(store.len(), 1);
        let router = Router::new(Registry::build(store.bundles()).unwrap());

        let listener = Server::bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop, stopped) = tokio::sync::oneshot::channel::<()>();
        let server = tokio::spawn(Server::new(router).run(listener, async move {
            let _ = stopped.await;
        }));

        let ok = raw_get(addr, "wallet.localhost:4545", "/index.html").await;
        assert!(ok.starts_with("HTTP/1.1 200 OK"), "{ok}");
        assert!(ok.ends_with("\r\n\r\n<h1>hi</h1>"), "{ok}");

        let missing = raw_get(addr, "wallet.localhost:4545", "/missing.html").await;
        assert!(missing.starts_with("HTTP/1.1 404 Not Found"), "{missing}");

        let broken = raw_get(addr, "broken.localhost:4545", "/index.html").await;
        assert!(broken.starts_with("HTTP/1.1 404 Not Found"), "{broken}");
        assert!(broken.ends_with("Not found\n"), "{broken}");

        let bare = raw_get(addr, "localhost:4545", "/index.html").await;
        assert!(bare.starts_with("HTTP/1.1 404 Not Found"), "{bare}");

        stop.send(()).unwrap();
        server.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_bind_failure() {
        let listener = Server::bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let addr = listener.local_addr().unwrap();

        let err = Server::bind(addr).await.unwrap_err();
        assert!(matches!(err, BundlehostError::BindFailed { .. }));
    }
}
