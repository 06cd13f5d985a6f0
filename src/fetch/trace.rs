//! Verbosity-scaled transport tracing.
//!
//! Diagnostic side effect only; nothing in the fetch contract depends on it.

use log::info;
use reqwest::header::HeaderMap;
use reqwest::{Request, StatusCode};

use crate::config::Verbosity;

pub(crate) fn trace_request(verbosity: Verbosity, request: &Request) {
    if !verbosity.at_least(Verbosity::Basic) {
        return;
    }
    info!("Request: {} {}", request.method(), request.url());
    if verbosity.at_least(Verbosity::Headers) {
        for (name, value) in request.headers() {
            info!("Request header: {}: {}", name, value.to_str().unwrap_or("<binary>"));
        }
    }
}

pub(crate) fn trace_response(
    verbosity: Verbosity,
    status: StatusCode,
    headers: &HeaderMap,
    body: &str,
) {
    if !verbosity.at_least(Verbosity::Basic) {
        return;
    }
    info!("Response: {status}");
    if verbosity.at_least(Verbosity::Headers) {
        for (name, value) in headers {
            info!("Response header: {}: {}", name, value.to_str().unwrap_or("<binary>"));
        }
    }
    if verbosity.at_least(Verbosity::Body) {
        if body.is_empty() {
            info!("Response body: (empty)");
        } else {
            info!("Response body: {body}");
        }
    }
}
