// src/tests/router_tests/detail_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_catalog};

#[test]
fn detail_renders_an_existing_listing() {
    let catalog = make_catalog();

    let mut resp = handle(get("/listing?id=1"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Listing 1"));
    assert!(body.contains("Price per m²:"));
    assert!(body.contains("Contact: +62 123 456 789"));
    assert!(body.contains("Furniture:"));
}

#[test]
fn detail_without_id_is_a_bad_request() {
    let catalog = make_catalog();

    assert!(matches!(
        handle(get("/listing"), &catalog),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn detail_for_an_unassigned_id_is_not_found() {
    let catalog = make_catalog();

    // The fixture has ids 1..=12; 13 was never assigned.
    assert!(matches!(
        handle(get("/listing?id=13"), &catalog),
        Err(ServerError::NotFound)
    ));
}
