pub mod generator;
pub mod query;

pub use generator::generate_listings;
pub use query::{Catalog, SearchCriteria};
