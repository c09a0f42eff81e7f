use crate::catalog::{generate_listings, Catalog};
use astra::Body;
use http::Method;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Read;

/// Deterministic 12-listing catalog shared by the router tests.
pub fn make_catalog() -> Catalog {
    let mut rng = StdRng::seed_from_u64(42);
    let listings = generate_listings(&mut rng, 12).expect("fixture generation");
    Catalog::new(listings)
}

/// Build a GET request for the router.
pub fn get(path_and_query: &str) -> astra::Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(path_and_query)
        .body(Body::empty())
        .expect("request")
}

/// Drain a response body into a string.
pub fn body_string(resp: &mut astra::Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("read body");
    String::from_utf8(bytes).expect("utf8 body")
}
