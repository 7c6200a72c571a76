//! Request URL construction for the Scryfall lookups.
//!
//! Caller input is always treated as raw text and percent-encoded here:
//! everything outside the RFC 3986 unreserved set is escaped, so a literal
//! `%20` in a card name is sent as `%2520`. Empty input, and set codes made
//! only of dots (which a URL join would resolve as `.`/`..` path steps), are
//! rejected before any request is made.

use url::Url;

use crate::config;
use crate::error::{Result, ScryfallError};

/// How `cards/named` should match the supplied name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupMode {
    /// Tolerates misspellings and partial names.
    Fuzzy,
    /// Requires the full card name (case-insensitive).
    Exact,
}

impl LookupMode {
    fn param(self) -> &'static str {
        match self {
            LookupMode::Fuzzy => "fuzzy",
            LookupMode::Exact => "exact",
        }
    }
}

/// Builds absolute endpoint URLs against a base address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
    set_list: Url,
}

impl Endpoints {
    /// Parse `base` as the API root. A trailing slash is added when missing
    /// so that relative paths append instead of replacing the last segment.
    pub fn new(base: &str) -> Result<Self> {
        let mut base = base.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base)?;
        if base.cannot_be_a_base() {
            return Err(ScryfallError::InvalidArgument(format!(
                "{base} cannot be used as an API base address"
            )));
        }
        let set_list = base.join(config::SETS_PATH)?;
        Ok(Self { base, set_list })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `cards/named?fuzzy=<name>` or `cards/named?exact=<name>`.
    pub fn card_named(&self, mode: LookupMode, name: &str) -> Result<Url> {
        let encoded = encode("card name", name)?;
        let path = format!("{}?{}={}", config::CARDS_NAMED_PATH, mode.param(), encoded);
        Ok(self.base.join(&path)?)
    }

    /// `sets/<code>`.
    pub fn set(&self, code: &str) -> Result<Url> {
        let encoded = encode("set code", code)?;
        if encoded.chars().all(|c| c == '.') {
            return Err(ScryfallError::InvalidArgument(format!(
                "set code {code:?} is not a valid path segment"
            )));
        }
        Ok(self.base.join(&format!("{}{}", config::SETS_PATH, encoded))?)
    }

    /// `sets/`, the full list of sets.
    pub fn set_list(&self) -> Url {
        self.set_list.clone()
    }
}

fn encode(what: &str, raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(ScryfallError::InvalidArgument(format!("empty {what}")));
    }
    Ok(urlencoding::encode(raw).into_owned())
}
