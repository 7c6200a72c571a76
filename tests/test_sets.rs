//! Set and set-list lookups against a mock Scryfall server.

mod common;

use scryfall_sdk::FailureCategory;
use serde_json::json;

// ---------------------------------------------------------------------------
// set
// ---------------------------------------------------------------------------

#[test]
fn set_lookup_matches_mock_payload() {
    let (mut server, client, reports) = common::setup_client();
    let mock = server
        .mock("GET", "/sets/MH2")
        .with_body(common::mh2_json().to_string())
        .create();

    let set = client.set("MH2").unwrap();

    mock.assert();
    assert_eq!(set.code.as_deref(), Some("MH2"));
    assert_eq!(set.card_count, 303);
    assert_eq!(set.released_at.as_deref(), Some("2021-06-18"));
    assert_eq!(set.block_name.as_deref(), Some("Modern Horizons"));
    assert!(!set.is_reduced());
    assert!(reports.lock().unwrap().is_empty());
}

#[test]
fn set_without_block_uses_reduced_format() {
    let (mut server, client, _reports) = common::setup_client();
    server
        .mock("GET", "/sets/PLST")
        .with_body(common::promo_set_json().to_string())
        .create();

    let set = client.set("PLST").unwrap();

    assert!(set.block_name.is_none());
    assert!(set.block_code.is_none());
    assert!(set.is_reduced());
    let text = set.to_string();
    assert!(text.starts_with("Name: The List\nNumber of Cards: 2500\nSet Type: promo\n"));
    assert!(!text.contains("Block:"));
}

#[test]
fn unknown_set_code_reports_details() {
    let (mut server, client, reports) = common::setup_client();
    server
        .mock("GET", "/sets/ZZZ")
        .with_status(404)
        .with_body(
            common::error_json(404, None, "No Magic set found for the given code.").to_string(),
        )
        .create();

    assert!(client.set("ZZZ").is_none());

    let reports = reports.lock().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].category, FailureCategory::Api);
    assert_eq!(reports[0].message, "No Magic set found for the given code.");
}

#[test]
fn error_object_with_success_status_is_still_an_error() {
    let (mut server, client, reports) = common::setup_client();
    server
        .mock("GET", "/sets/MH2")
        .with_status(200)
        .with_body(common::error_json(400, None, "Bad request.").to_string())
        .create();

    assert!(client.set("MH2").is_none());
    assert_eq!(reports.lock().unwrap()[0].message, "Bad request.");
}

// ---------------------------------------------------------------------------
// set list
// ---------------------------------------------------------------------------

#[test]
fn set_list_preserves_api_order() {
    let (mut server, client, _reports) = common::setup_client();
    let mock = server
        .mock("GET", "/sets/")
        .with_body(
            common::set_list_json(vec![common::mh2_json(), common::promo_set_json()]).to_string(),
        )
        .create();

    let list = client.set_list().unwrap();

    mock.assert();
    assert_eq!(list.len(), 2);
    assert_eq!(list.skipped(), 0);
    let names: Vec<&str> = list.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Modern Horizons 2", "The List"]);
}

#[test]
fn set_list_keeps_unparseable_entries_as_gaps() {
    let (mut server, client, reports) = common::setup_client();
    server
        .mock("GET", "/sets/")
        .with_body(
            common::set_list_json(vec![
                common::mh2_json(),
                json!({"object": "set", "name": "Half a set"}),
                common::promo_set_json(),
            ])
            .to_string(),
        )
        .create();

    let list = client.set_list().unwrap();

    assert_eq!(list.len(), 3);
    assert_eq!(list.skipped(), 1);
    assert!(list.get(1).is_none());
    assert_eq!(list.get(2).unwrap().name, "The List");
    assert!(reports.lock().unwrap().is_empty());
}

#[test]
fn set_list_display_counts_only_present_sets() {
    let (mut server, client, _reports) = common::setup_client();
    server
        .mock("GET", "/sets/")
        .with_body(
            common::set_list_json(vec![json!(null), common::promo_set_json()]).to_string(),
        )
        .create();

    let text = client.set_list().unwrap().to_string();

    assert!(text.starts_with("Set Number: 0\nName: The List\n"));
}
