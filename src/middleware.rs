//! Request logging middleware.

use axum::{
    extract::{ConnectInfo, Request},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::net::{IpAddr, SocketAddr};
use std::time::Instant;

/// Paths polled by orchestrators; not worth a log line each.
const QUIET_PATHS: &[&str] = &["/health", "/ready"];

/// Logs method, URI, client address, status and latency of every request except probes.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    if QUIET_PATHS.contains(&path.as_str()) {
        return next.run(request).await;
    }
    let method = request.method().clone();
    let uri = request.uri().clone();
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());
    let client = client_ip(request.headers(), peer);

    let start = Instant::now();
    let response = next.run(request).await;
    tracing::info!(
        ip = %client,
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        cost = ?start.elapsed(),
        "handler called"
    );
    response
}

/// First global unicast address in `X-Forwarded-For` (private ranges included, so clients
/// behind an internal proxy are still identified), else the socket peer, else "unknown".
pub fn client_ip(headers: &HeaderMap, peer: Option<IpAddr>) -> String {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .into_iter()
        .flat_map(|v| v.split(','))
        .filter_map(|s| s.trim().parse::<IpAddr>().ok())
        .find(is_routable);
    forwarded
        .or(peer)
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| "unknown".into())
}

fn is_routable(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            !(v4.is_loopback()
                || v4.is_unspecified()
                || v4.is_link_local()
                || v4.is_broadcast()
                || v4.is_multicast())
        }
        IpAddr::V6(v6) => {
            // fe80::/10
            let link_local = (v6.segments()[0] & 0xffc0) == 0xfe80;
            !(v6.is_loopback() || v6.is_unspecified() || v6.is_multicast() || link_local)
        }
    }
}
