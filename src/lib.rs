//! Scryfall SDK for Rust.
//!
//! Looks up Magic: The Gathering cards and sets on the Scryfall API and
//! returns them as typed values. Every lookup is a single GET whose body is
//! decoded as the requested shape, or failing that as the API's error
//! object. Lookups block until they settle or time out and return `None` on
//! any failure; the cause goes to the `log` facade and to an optional
//! failure sink.
//!
//! # Quick start
//!
//! ```no_run
//! use scryfall_sdk::Scryfall;
//!
//! let scryfall = Scryfall::builder().build().unwrap();
//!
//! if let Some(card) = scryfall.card_exact("Lightning Bolt") {
//!     print!("{card}");
//! }
//!
//! // Or through the shared default client
//! let set = scryfall_sdk::get_set("MH2");
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod pipeline;

#[cfg(feature = "async")]
pub use async_client::AsyncScryfall;
pub use client::Scryfall;
pub use endpoints::{Endpoints, LookupMode};
pub use error::{FailureCategory, Result, ScryfallError};
pub use models::{ApiError, Card, Color, SetList, SetSummary};

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use log::error;

// ---------------------------------------------------------------------------
// ScryfallBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Scryfall`] client.
///
/// Use [`Scryfall::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](ScryfallBuilder::build) to create the client.
pub struct ScryfallBuilder {
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
    pub(crate) sink: Option<pipeline::FailureSink>,
}

impl Default for ScryfallBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            sink: None,
        }
    }
}

impl ScryfallBuilder {
    /// Point the client at another API root, such as a local mock server.
    ///
    /// Defaults to `https://api.scryfall.com/`.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Set how long a lookup waits for its response.
    ///
    /// Defaults to 30 seconds. A lookup that runs out of time returns `None`
    /// and reports [`ScryfallError::Timeout`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Receive every failed lookup before it is turned into `None`.
    ///
    /// For API errors, [`ScryfallError::user_message`] is the server's
    /// `details` string.
    pub fn on_failure<F>(mut self, sink: F) -> Self
    where
        F: Fn(&ScryfallError) + Send + Sync + 'static,
    {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Build the client, validating the base URL and starting the background
    /// runtime that carries the requests.
    pub fn build(self) -> Result<Scryfall> {
        Scryfall::from_builder(self)
    }
}

/// The shared HTTP client configuration used by both clients.
pub(crate) fn http_client(timeout: Duration) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .connect_timeout(timeout)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()?)
}

// ---------------------------------------------------------------------------
// Default client
// ---------------------------------------------------------------------------

static DEFAULT_CLIENT: OnceLock<Option<Scryfall>> = OnceLock::new();

fn default_client() -> Option<&'static Scryfall> {
    DEFAULT_CLIENT
        .get_or_init(|| match Scryfall::builder().build() {
            Ok(client) => Some(client),
            Err(err) => {
                error!("Failed to build the default Scryfall client: {err}");
                None
            }
        })
        .as_ref()
}

/// Look up a card by fuzzy name using the default client.
pub fn get_card_fuzzy(name: &str) -> Option<Card> {
    default_client()?.card_fuzzy(name)
}

/// Look up a card by exact name using the default client.
pub fn get_card_exact(name: &str) -> Option<Card> {
    default_client()?.card_exact(name)
}

/// Look up a set by code using the default client.
pub fn get_set(code: &str) -> Option<SetSummary> {
    default_client()?.set(code)
}

/// Fetch every set using the default client.
pub fn get_set_list() -> Option<SetList> {
    default_client()?.set_list()
}
