// src/tests/router_tests/compare_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_catalog};

#[test]
fn fewer_than_two_selections_shows_the_prompt() {
    let catalog = make_catalog();

    let mut resp = handle(get("/compare?ids=1"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Select at least two listings to compare."));
    // No comparison columns yet, so no detail lists either.
    assert_eq!(body.matches("Furniture:").count(), 0);
}

#[test]
fn two_selections_render_side_by_side() {
    let catalog = make_catalog();

    let mut resp = handle(get("/compare?ids=1&ids=3"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    // One detail list per selected listing.
    assert_eq!(body.matches("Furniture:").count(), 2);
    assert!(!body.contains("Select at least two listings"));
}

#[test]
fn unknown_ids_are_dropped_silently() {
    let catalog = make_catalog();

    // Only one of the two ids exists, so the prompt comes back instead of
    // a single-column comparison.
    let mut resp = handle(get("/compare?ids=1&ids=999"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Select at least two listings to compare."));
}

#[test]
fn no_selection_still_renders_the_form() {
    let catalog = make_catalog();

    let mut resp = handle(get("/compare"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Pick the listings"));
}

#[test]
fn malformed_id_is_a_bad_request() {
    let catalog = make_catalog();

    assert!(matches!(
        handle(get("/compare?ids=one"), &catalog),
        Err(ServerError::BadRequest(_))
    ));
}
