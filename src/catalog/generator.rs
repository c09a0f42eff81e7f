// src/catalog/generator.rs

use crate::assets::LISTING_IMAGES;
use crate::domain::listing::{City, Condition, FurnitureBundle, Listing, Material};
use crate::errors::DomainError;
use rand::Rng;

/// Lowest asking price the generator will produce, in millions.
pub const PRICE_MIN: u32 = 200;
/// Highest asking price the generator will produce, in millions.
pub const PRICE_MAX: u32 = 2000;

pub const AREA_MIN: u32 = 30;
pub const AREA_MAX: u32 = 300;

pub const BEDROOMS_MIN: u8 = 1;
pub const BEDROOMS_MAX: u8 = 5;

pub const BATHROOMS_MIN: u8 = 1;
pub const BATHROOMS_MAX: u8 = 3;

pub const YEAR_BUILT_MIN: u16 = 2000;
pub const YEAR_BUILT_MAX: u16 = 2023;

/// Produce `count` randomized listings with ids 1..=count, in order.
///
/// Every field is drawn independently and uniformly from its closed
/// domain; the furniture bundle is a single atomic pick, never a mix.
/// The rng is injected so callers control reproducibility -- `main`
/// passes `thread_rng`, tests pass a seeded `StdRng`.
pub fn generate_listings<R: Rng + ?Sized>(
    rng: &mut R,
    count: u32,
) -> Result<Vec<Listing>, DomainError> {
    if count == 0 {
        return Err(DomainError::InvalidArgument(
            "catalog size must be greater than zero".to_string(),
        ));
    }

    let mut listings = Vec::with_capacity(count as usize);
    for id in 1..=count {
        listings.push(Listing {
            id,
            location: City::ALL[rng.gen_range(0..City::ALL.len())],
            price: rng.gen_range(PRICE_MIN..=PRICE_MAX),
            area: rng.gen_range(AREA_MIN..=AREA_MAX),
            bedrooms: rng.gen_range(BEDROOMS_MIN..=BEDROOMS_MAX),
            bathrooms: rng.gen_range(BATHROOMS_MIN..=BATHROOMS_MAX),
            image_ref: LISTING_IMAGES[rng.gen_range(0..LISTING_IMAGES.len())],
            material: Material::ALL[rng.gen_range(0..Material::ALL.len())],
            year_built: rng.gen_range(YEAR_BUILT_MIN..=YEAR_BUILT_MAX),
            condition: Condition::ALL[rng.gen_range(0..Condition::ALL.len())],
            furniture: FurnitureBundle::ALL[rng.gen_range(0..FurnitureBundle::ALL.len())],
        });
    }

    Ok(listings)
}
