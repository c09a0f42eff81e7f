pub mod listing;
pub mod pricing;

pub use listing::{City, Condition, FurnitureBundle, Listing, Material};
