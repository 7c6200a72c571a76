//! The fetch/decode half of every lookup, shared by the blocking and async
//! clients.
//!
//! A response body is decoded against the requested shape first. Only when
//! that fails is it tried once more as an [`ApiError`]; if that also fails the
//! primary decode diagnostic is kept. The HTTP status is never consulted, so
//! a 404 carrying an error object and a 200 carrying one are handled alike.

use std::sync::Arc;

use log::{debug, error, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{FailureCategory, Result, ScryfallError};
use crate::models::ApiError;

/// Callback that receives every failed lookup before it is turned into `None`.
pub type FailureSink = Arc<dyn Fn(&ScryfallError) + Send + Sync>;

/// Decode `body` as `T`, falling back to the API's error object.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    if body.is_empty() {
        return Err(ScryfallError::EmptyBody);
    }
    match serde_json::from_slice::<T>(body) {
        Ok(value) => Ok(value),
        Err(primary) => match serde_json::from_slice::<ApiError>(body) {
            Ok(api) => Err(ScryfallError::Api(api)),
            Err(_) => Err(ScryfallError::Decode(primary)),
        },
    }
}

/// Issue one GET against `url` and decode the body.
pub(crate) async fn fetch<T: DeserializeOwned>(http: &Client, url: Url) -> Result<T> {
    debug!("GET {url}");
    let response = http.get(url).send().await?;
    let body = response.bytes().await?;
    decode(&body)
}

/// Log a failed lookup and hand it to the sink, if any.
pub(crate) fn report(err: &ScryfallError, sink: Option<&FailureSink>) {
    match err.category() {
        FailureCategory::Api => warn!("{}", err.user_message()),
        _ => error!("Lookup failed: {err}"),
    }
    if let Some(sink) = sink {
        sink(err);
    }
}

/// Collapse an outcome into the `Option` returned by the public lookups.
pub(crate) fn settle<T>(outcome: Result<T>, sink: Option<&FailureSink>) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(err) => {
            report(&err, sink);
            None
        }
    }
}
