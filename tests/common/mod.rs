//! Shared fixtures for the Scryfall SDK integration tests.
//!
//! Provides JSON payloads shaped like the API's responses, a `mockito` server
//! wrapper, and a client wired to it whose failure sink records every
//! reported error.

#![allow(dead_code)]

use scryfall_sdk::{FailureCategory, Scryfall, ScryfallError};
use serde_json::{json, Value};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// One reported failure, flattened so it can be stored and compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reported {
    pub category: FailureCategory,
    pub message: String,
}

pub type Reports = Arc<Mutex<Vec<Reported>>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Start a mock server and a client pointed at it.
///
/// Returns `(server, client, reports)`. Keep the server alive for the whole
/// test; dropping it shuts the mock down.
pub fn setup_client() -> (mockito::ServerGuard, Scryfall, Reports) {
    init_logging();
    let server = mockito::Server::new();
    let (client, reports) = client_for(&server.url(), Duration::from_secs(5));
    (server, client, reports)
}

/// Build a client against `base_url` that records failures.
pub fn client_for(base_url: &str, timeout: Duration) -> (Scryfall, Reports) {
    let reports: Reports = Arc::new(Mutex::new(Vec::new()));
    let sink = reports.clone();
    let client = Scryfall::builder()
        .base_url(base_url)
        .timeout(timeout)
        .on_failure(move |err: &ScryfallError| {
            sink.lock().unwrap().push(Reported {
                category: err.category(),
                message: err.user_message().to_string(),
            });
        })
        .build()
        .unwrap();
    (client, reports)
}

/// A local address that accepts connections and never answers them.
///
/// The listener thread holds each accepted socket open until the process
/// exits, so a request against it can only end by timing out.
pub fn silent_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let mut held = Vec::new();
        for stream in listener.incoming().flatten() {
            held.push(stream);
        }
    });
    format!("http://{addr}/")
}

/// A local address with nothing listening on it.
pub fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

pub fn card_json(id: &str, name: &str) -> Value {
    json!({
        "object": "card",
        "id": id,
        "oracle_id": format!("oracle-{id}"),
        "multiverse_ids": [442130],
        "mtgo_id": 67196,
        "name": name,
        "uri": format!("https://api.scryfall.com/cards/{id}"),
        "scryfall_uri": format!("https://scryfall.com/card/{id}"),
        "prints_search_uri": "https://api.scryfall.com/cards/search?order=released&q=oracleid",
        "rulings_uri": format!("https://api.scryfall.com/cards/{id}/rulings"),
        "layout": "normal",
        "cmc": 1.0,
        "type_line": "Instant",
        "oracle_text": format!("{name} deals 3 damage to any target."),
        "mana_cost": "{R}",
        "colors": ["R"],
        "purchase_uris": {
            "tcgplayer": "https://shop.tcgplayer.com/product",
            "cardmarket": "https://www.cardmarket.com/product"
        }
    })
}

pub fn creature_json() -> Value {
    let mut card = card_json("tarmogoyf-id", "Tarmogoyf");
    card["cmc"] = json!(2);
    card["mana_cost"] = json!("{1}{G}");
    card["type_line"] = json!("Creature — Lhurgoyf");
    card["oracle_text"] = json!(
        "Tarmogoyf's power is equal to the number of card types among cards in all graveyards \
         and its toughness is equal to that number plus 1."
    );
    card["colors"] = json!(["G"]);
    card["power"] = json!("*");
    card["toughness"] = json!("1+*");
    card
}

pub fn mh2_json() -> Value {
    json!({
        "object": "set",
        "code": "MH2",
        "mtgo_code": "mh2",
        "name": "Modern Horizons 2",
        "uri": "https://api.scryfall.com/sets/mh2",
        "scryfall_uri": "https://scryfall.com/sets/mh2",
        "search_uri": "https://api.scryfall.com/cards/search?q=e:mh2",
        "released_at": "2021-06-18",
        "set_type": "draft_innovation",
        "card_count": 303,
        "digital": false,
        "foil": true,
        "block_code": "mh",
        "block": "Modern Horizons",
        "icon_svg_uri": "https://svgs.scryfall.io/sets/mh2.svg"
    })
}

/// A promotional set without a block.
pub fn promo_set_json() -> Value {
    json!({
        "object": "set",
        "code": "PLST",
        "name": "The List",
        "uri": "https://api.scryfall.com/sets/plst",
        "scryfall_uri": "https://scryfall.com/sets/plst",
        "search_uri": "https://api.scryfall.com/cards/search?q=e:plst",
        "released_at": "2020-09-08",
        "set_type": "promo",
        "card_count": 2500,
        "digital": false,
        "foil": false,
        "icon_svg_uri": "https://svgs.scryfall.io/sets/planeswalker.svg"
    })
}

pub fn set_list_json(entries: Vec<Value>) -> Value {
    json!({
        "object": "list",
        "has_more": false,
        "data": entries
    })
}

pub fn error_json(status: u16, error_type: Option<&str>, details: &str) -> Value {
    let mut err = json!({
        "object": "error",
        "code": "not_found",
        "status": status,
        "details": details
    });
    if let Some(t) = error_type {
        err["type"] = json!(t);
    }
    err
}
