//! Async counterpart of [`Scryfall`](crate::Scryfall) for callers already
//! running inside a Tokio runtime.
//!
//! Runs the same fetch/decode pipeline directly on the caller's runtime and
//! bounds each lookup with [`tokio::time::timeout`]. Dropping a lookup future
//! cancels its request.
//!
//! # Example
//!
//! ```no_run
//! use scryfall_sdk::AsyncScryfall;
//!
//! #[tokio::main]
//! async fn main() {
//!     let scryfall = AsyncScryfall::builder().build().unwrap();
//!     let card = scryfall.card_fuzzy("jace the mind").await;
//! }
//! ```

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::endpoints::{Endpoints, LookupMode};
use crate::error::{Result, ScryfallError};
use crate::models::{Card, SetList, SetSummary};
use crate::pipeline::{self, FailureSink};
use crate::ScryfallBuilder;

// ---------------------------------------------------------------------------
// AsyncScryfallBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncScryfall`] instance.
#[derive(Default)]
pub struct AsyncScryfallBuilder {
    inner: ScryfallBuilder,
}

impl AsyncScryfallBuilder {
    /// Point the client at another API root.
    pub fn base_url(mut self, url: &str) -> Self {
        self.inner = self.inner.base_url(url);
        self
    }

    /// Set how long a lookup waits for its response.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Receive every failed lookup before it is turned into `None`.
    pub fn on_failure<F>(mut self, sink: F) -> Self
    where
        F: Fn(&ScryfallError) + Send + Sync + 'static,
    {
        self.inner = self.inner.on_failure(sink);
        self
    }

    /// Build the async client. No runtime is started; lookups run on the
    /// caller's.
    pub fn build(self) -> Result<AsyncScryfall> {
        let ScryfallBuilder {
            base_url,
            timeout,
            sink,
        } = self.inner;
        Ok(AsyncScryfall {
            http: crate::http_client(timeout)?,
            endpoints: Endpoints::new(&base_url)?,
            timeout,
            sink,
        })
    }
}

// ---------------------------------------------------------------------------
// AsyncScryfall
// ---------------------------------------------------------------------------

/// Async Scryfall client. Cheap to clone; clones share the HTTP client.
#[derive(Clone)]
pub struct AsyncScryfall {
    http: Client,
    endpoints: Endpoints,
    timeout: Duration,
    sink: Option<FailureSink>,
}

impl AsyncScryfall {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncScryfallBuilder {
        AsyncScryfallBuilder::default()
    }

    pub async fn card_fuzzy(&self, name: &str) -> Option<Card> {
        self.card_named(LookupMode::Fuzzy, name).await
    }

    pub async fn card_exact(&self, name: &str) -> Option<Card> {
        self.card_named(LookupMode::Exact, name).await
    }

    pub async fn card_named(&self, mode: LookupMode, name: &str) -> Option<Card> {
        pipeline::settle(self.try_card_named(mode, name).await, self.sink.as_ref())
    }

    pub async fn set(&self, code: &str) -> Option<SetSummary> {
        pipeline::settle(self.try_set(code).await, self.sink.as_ref())
    }

    pub async fn set_list(&self) -> Option<SetList> {
        pipeline::settle(self.try_set_list().await, self.sink.as_ref())
    }

    pub async fn try_card_named(&self, mode: LookupMode, name: &str) -> Result<Card> {
        self.resolve(self.endpoints.card_named(mode, name)?).await
    }

    pub async fn try_set(&self, code: &str) -> Result<SetSummary> {
        self.resolve(self.endpoints.set(code)?).await
    }

    pub async fn try_set_list(&self) -> Result<SetList> {
        self.resolve(self.endpoints.set_list()).await
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn resolve<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tokio::time::timeout(self.timeout, pipeline::fetch(&self.http, url))
            .await
            .map_err(|_| ScryfallError::Timeout(self.timeout))?
    }
}

impl fmt::Debug for AsyncScryfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncScryfall")
            .field("base", &self.endpoints.base().as_str())
            .field("timeout", &self.timeout)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}
