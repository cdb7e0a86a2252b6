//! HTTP responses produced by the router and service handlers

use bytes::Bytes;
use http_body_util::Full;
use hyper::header::{self, HeaderValue};
use hyper::{Response, StatusCode};

/// Response body type: entries are sent as one buffered chunk
pub type Body = Full<Bytes>;

/// 200 with the raw entry bytes
pub fn ok(body: Bytes) -> Response<Body> {
    Response::new(Full::new(body))
}

/// 404 with a plain-text body
pub fn not_found() -> Response<Body> {
    plain_text(StatusCode::NOT_FOUND, "Not found\n")
}

/// 500 with a plain-text body
pub fn internal_error() -> Response<Body> {
    plain_text(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error\n")
}

fn plain_text(status: StatusCode, text: &'static str) -> Response<Body> {
    let mut response = Response::new(Full::new(Bytes::from_static(text.as_bytes())));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    response
}
