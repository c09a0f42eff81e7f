use crate::catalog::{generate_listings, Catalog};
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod assets;
mod catalog;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1. Generate this session's catalog. CATALOG_SIZE overrides the
    //    default of 20 for demos.
    let count: u32 = std::env::var("CATALOG_SIZE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(20);

    let listings = match generate_listings(&mut rand::thread_rng(), count) {
        Ok(listings) => listings,
        Err(e) => {
            eprintln!("Catalog generation failed: {e}");
            std::process::exit(1);
        }
    };
    let catalog = Catalog::new(listings);
    println!("Generated a catalog of {} listings", catalog.len());

    // 2. Start the server.
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr: SocketAddr = ([127, 0, 0, 1], port).into();
    println!("Starting server at http://{addr}");

    let server = Server::bind(addr).max_workers(8);

    // 3. Serve requests, passing the catalog handle into the closure.
    let result = server.serve(move |req, _info| match handle(req, &catalog) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
