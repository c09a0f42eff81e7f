// src/tests/router_tests/api_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_catalog};
use serde_json::Value;

#[test]
fn api_returns_the_full_catalog_as_json() {
    let catalog = make_catalog();

    let mut resp = handle(get("/api/listings"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.headers()["Content-Type"]
        .to_str()
        .unwrap()
        .starts_with("application/json"));

    let body = body_string(&mut resp);
    let parsed: Value = serde_json::from_str(&body).expect("valid json");
    let listings = parsed.as_array().expect("json array");

    assert_eq!(listings.len(), 12);
    for (i, listing) in listings.iter().enumerate() {
        assert_eq!(listing["id"], i as u64 + 1);
    }
}

#[test]
fn api_applies_the_same_filters_as_the_search_page() {
    let catalog = make_catalog();

    let mut resp = handle(get("/api/listings?min_bedrooms=4"), &catalog).unwrap();
    let body = body_string(&mut resp);
    let parsed: Value = serde_json::from_str(&body).expect("valid json");

    for listing in parsed.as_array().expect("json array") {
        assert!(listing["bedrooms"].as_u64().unwrap() >= 4);
    }
}

#[test]
fn api_rejects_malformed_filters() {
    let catalog = make_catalog();

    assert!(matches!(
        handle(get("/api/listings?min_price=lots"), &catalog),
        Err(ServerError::BadRequest(_))
    ));
}
