// src/tests/router_tests/search_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_catalog};

#[test]
fn home_page_shows_catalog_overview() {
    let catalog = make_catalog();

    let mut resp = handle(get("/"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("randomly generated listings"));
    assert!(body.contains("12"));
}

#[test]
fn search_without_parameters_returns_the_whole_catalog() {
    let catalog = make_catalog();

    let mut resp = handle(get("/search"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Found <strong>12</strong> listings."));
}

#[test]
fn widest_explicit_bounds_match_everything() {
    let catalog = make_catalog();

    let mut resp = handle(
        get("/search?location=any&min_price=200&max_price=2000&min_bedrooms=1"),
        &catalog,
    )
    .unwrap();

    let body = body_string(&mut resp);
    assert!(body.contains("Found <strong>12</strong> listings."));
}

#[test]
fn search_accepts_a_city_filter() {
    let catalog = make_catalog();

    let mut resp = handle(get("/search?location=Jakarta"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Search Listings"));
}

#[test]
fn inverted_price_bounds_render_the_empty_notice() {
    let catalog = make_catalog();

    let mut resp = handle(get("/search?min_price=2000&max_price=200"), &catalog).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("No listings match your filters."));
}

#[test]
fn malformed_price_is_a_bad_request() {
    let catalog = make_catalog();

    assert!(matches!(
        handle(get("/search?min_price=abc"), &catalog),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn unknown_city_is_a_bad_request() {
    let catalog = make_catalog();

    assert!(matches!(
        handle(get("/search?location=Atlantis"), &catalog),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn unknown_route_is_not_found() {
    let catalog = make_catalog();

    assert!(matches!(
        handle(get("/definitely-not-a-page"), &catalog),
        Err(ServerError::NotFound)
    ));
}
