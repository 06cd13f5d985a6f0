//! The fetch operation: one GET against the lookup service.

mod trace;

use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Request, Response};

use crate::config::{ClientConfig, LOOKUP_ENDPOINT};
use crate::error_handling::{classify_transport_error, FetchError};
use crate::initialization::init_transport_client;
use crate::models::IdentityRecord;

/// Fetches the caller's network identity from the fixed lookup endpoint.
///
/// A convenience over [`fetch_identity_from`] with the production endpoint.
///
/// # Errors
///
/// Returns [`FetchError`] when no usable response was obtained; see
/// [`fetch_identity_from`] for the full contract.
pub async fn fetch_identity(
    config: &ClientConfig,
) -> Result<Option<IdentityRecord>, FetchError> {
    fetch_identity_from(config, LOOKUP_ENDPOINT).await
}

/// Fetches a network identity record from an arbitrary endpoint.
///
/// Builds a fresh transport client from `config`, issues a single GET, and
/// interprets the outcome:
///
/// - 2xx with a non-empty JSON body: `Ok(Some(record))`, with unknown fields
///   ignored and missing fields left absent.
/// - Non-2xx, or 2xx with an empty body: `Ok(None)`. Not an error; nothing
///   is logged in this branch.
/// - Transport-level failure or malformed body: `Err(FetchError)`.
///
/// If the call returns at all, the caller gets either a parsed record or an
/// explicit absence, never a partially populated one.
///
/// Taking the endpoint as a parameter keeps the operation pointable at a
/// mock server; production callers go through [`fetch_identity`].
///
/// # Errors
///
/// Returns [`FetchError::Connectivity`] for timeouts and unresolved hosts,
/// [`FetchError::Transport`] for any other I/O failure, and
/// [`FetchError::Parse`] when a successful response carries invalid JSON.
pub async fn fetch_identity_from(
    config: &ClientConfig,
    endpoint: &str,
) -> Result<Option<IdentityRecord>, FetchError> {
    let client = init_transport_client(config).map_err(classify_transport_error)?;

    let request = client
        .get(endpoint)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json")
        .build()
        .map_err(classify_transport_error)?;
    trace::trace_request(config.verbosity, &request);

    let response = send_request(&client, config, request).await?;

    let status = response.status();
    let headers = response.headers().clone();
    // The body stream is single-consumption: capture it into an owned buffer
    // before any further inspection.
    let body = response.text().await.map_err(classify_transport_error)?;
    trace::trace_response(config.verbosity, status, &headers, &body);

    if !status.is_success() || body.is_empty() {
        debug!("No usable response from {endpoint} (status {status}), returning absent");
        return Ok(None);
    }

    let record = serde_json::from_str(&body)?;
    Ok(Some(record))
}

/// Executes the request, re-sending it once after a connect-phase failure
/// when the configuration asks for it. There is no retry loop above this.
async fn send_request(
    client: &Client,
    config: &ClientConfig,
    request: Request,
) -> Result<Response, FetchError> {
    // GET with no body, so the clone always succeeds
    let reconnect = if config.retry_on_connect_failure {
        request.try_clone()
    } else {
        None
    };

    match client.execute(request).await {
        Ok(response) => Ok(response),
        Err(err) if err.is_connect() => match reconnect {
            Some(retry) => {
                debug!("Connect failed ({err}), re-sending once");
                client
                    .execute(retry)
                    .await
                    .map_err(classify_transport_error)
            }
            None => Err(classify_transport_error(err)),
        },
        Err(err) => Err(classify_transport_error(err)),
    }
}
