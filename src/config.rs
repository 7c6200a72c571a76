use std::time::Duration;

pub const API_BASE: &str = "https://api.scryfall.com/";

/// How long a lookup may wait for its response before giving up.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const CARDS_NAMED_PATH: &str = "cards/named";
pub const SETS_PATH: &str = "sets/";
