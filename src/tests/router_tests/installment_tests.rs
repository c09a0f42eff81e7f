// src/tests/router_tests/installment_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_catalog};

#[test]
fn simulator_renders_with_defaults() {
    let catalog = make_catalog();

    let mut resp = handle(get("/installment"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Monthly installment:"));
    assert!(body.contains("over 15 years at 5%."));
}

#[test]
fn simulator_accepts_explicit_parameters() {
    let catalog = make_catalog();

    let mut resp = handle(get("/installment?id=2&rate=0&years=10"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("million/month"));
    assert!(body.contains("over 10 years at 0%."));
}

#[test]
fn zero_years_is_a_bad_request() {
    let catalog = make_catalog();

    assert!(matches!(
        handle(get("/installment?id=1&years=0"), &catalog),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn negative_rate_is_a_bad_request() {
    let catalog = make_catalog();

    assert!(matches!(
        handle(get("/installment?id=1&rate=-2"), &catalog),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn unknown_listing_is_not_found() {
    let catalog = make_catalog();

    assert!(matches!(
        handle(get("/installment?id=99"), &catalog),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn malformed_years_is_a_bad_request() {
    let catalog = make_catalog();

    assert!(matches!(
        handle(get("/installment?id=1&years=ten"), &catalog),
        Err(ServerError::BadRequest(_))
    ));
}
