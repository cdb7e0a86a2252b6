//! Host header parsing
//!
//! Two host shapes route to a bundle:
//!
//! - `<subdomain>.localhost`
//! - `<subdomain>.localhost:<port>`
//!
//! Everything else (bare `localhost`, deeper names such as `a.b.localhost`,
//! public hosts, malformed ports) does not.

const LOCALHOST: &str = "localhost";

/// Subdomain label of `host`, lowercased, when the host has an accepted shape
pub fn subdomain_of(host: &str) -> Option<String> {
    let host = host.trim();

    let (name, port) = match host.split_once(':') {
        Some((name, port)) => (name, Some(port)),
        None => (host, None),
    };

    if let Some(port) = port {
        if !is_port(port) {
            return None;
        }
    }

    let (label, domain) = name.split_once('.')?;
    if domain != LOCALHOST || label.is_empty() {
        return None;
    }

    Some(label.to_lowercase())
}

fn is_port(port: &str) -> bool {
    !port.is_empty()
        && port.len() <= 5
        && port.bytes().all(|b| b.is_ascii_digit())
        && port.parse::<u16>().is_ok()
}
