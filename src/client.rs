//! Blocking lookups over the asynchronous HTTP pipeline.
//!
//! Each call spawns one request task on a runtime owned by the client and
//! parks the calling thread on a one-shot channel until the task reports its
//! outcome or the timeout elapses. A timed-out task is aborted, which drops
//! the in-flight request; anything it would have sent afterwards is
//! discarded with the closed channel.

use std::fmt;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::runtime::Runtime;
use url::Url;

use crate::endpoints::{Endpoints, LookupMode};
use crate::error::{Result, ScryfallError};
use crate::models::{Card, SetList, SetSummary};
use crate::pipeline::{self, FailureSink};
use crate::ScryfallBuilder;

/// Blocking Scryfall client.
///
/// The lookup methods return `None` on any failure; the cause is logged and
/// passed to the failure sink configured on the builder. The `try_*` methods
/// return the cause directly instead.
///
/// A `Scryfall` is `Send + Sync` and may be shared between threads; every
/// call gets its own completion channel. Calling it from inside an async
/// task blocks that task's worker thread, so async callers should prefer
/// `AsyncScryfall` (feature `async`).
pub struct Scryfall {
    http: Client,
    endpoints: Endpoints,
    timeout: Duration,
    sink: Option<FailureSink>,
    runtime: Option<Runtime>,
}

impl Scryfall {
    /// Create a new builder for configuring the client.
    pub fn builder() -> ScryfallBuilder {
        ScryfallBuilder::default()
    }

    pub(crate) fn from_builder(builder: ScryfallBuilder) -> Result<Self> {
        let endpoints = Endpoints::new(&builder.base_url)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("scryfall-lookup")
            .enable_all()
            .build()?;
        let http = {
            let _guard = runtime.enter();
            crate::http_client(builder.timeout)?
        };
        Ok(Self {
            http,
            endpoints,
            timeout: builder.timeout,
            sink: builder.sink,
            runtime: Some(runtime),
        })
    }

    // -- Lookups ---------------------------------------------------------------

    /// Look up a card by a possibly misspelled or partial name.
    pub fn card_fuzzy(&self, name: &str) -> Option<Card> {
        self.card_named(LookupMode::Fuzzy, name)
    }

    /// Look up a card by its full name.
    pub fn card_exact(&self, name: &str) -> Option<Card> {
        self.card_named(LookupMode::Exact, name)
    }

    pub fn card_named(&self, mode: LookupMode, name: &str) -> Option<Card> {
        pipeline::settle(self.try_card_named(mode, name), self.sink.as_ref())
    }

    /// Look up a set by its code (e.g. `"MH2"`).
    pub fn set(&self, code: &str) -> Option<SetSummary> {
        pipeline::settle(self.try_set(code), self.sink.as_ref())
    }

    /// Fetch the list of every set.
    pub fn set_list(&self) -> Option<SetList> {
        pipeline::settle(self.try_set_list(), self.sink.as_ref())
    }

    // -- Lookups with the failure cause ---------------------------------------

    pub fn try_card_named(&self, mode: LookupMode, name: &str) -> Result<Card> {
        self.resolve(self.endpoints.card_named(mode, name)?)
    }

    pub fn try_set(&self, code: &str) -> Result<SetSummary> {
        self.resolve(self.endpoints.set(code)?)
    }

    pub fn try_set_list(&self) -> Result<SetList> {
        self.resolve(self.endpoints.set_list())
    }

    // -- Accessors -------------------------------------------------------------

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one request on the background runtime and block until it settles.
    fn resolve<T>(&self, url: Url) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let runtime = self
            .runtime
            .as_ref()
            .ok_or_else(|| ScryfallError::Task("runtime has been shut down".into()))?;

        let (tx, rx) = mpsc::sync_channel(1);
        let http = self.http.clone();
        let task = runtime.spawn(async move {
            let outcome = pipeline::fetch::<T>(&http, url).await;
            // The receiver is gone if the caller already timed out.
            let _ = tx.send(outcome);
        });

        match rx.recv_timeout(self.timeout) {
            Ok(outcome) => outcome,
            Err(RecvTimeoutError::Timeout) => {
                task.abort();
                Err(ScryfallError::Timeout(self.timeout))
            }
            Err(RecvTimeoutError::Disconnected) => Err(ScryfallError::Task(
                "request task stopped before producing a result".into(),
            )),
        }
    }
}

impl Drop for Scryfall {
    fn drop(&mut self) {
        // Plain `Runtime` drop panics when it happens inside another runtime.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

impl fmt::Debug for Scryfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scryfall")
            .field("base", &self.endpoints.base().as_str())
            .field("timeout", &self.timeout)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}
