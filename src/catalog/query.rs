// src/catalog/query.rs

use crate::catalog::generator::{BEDROOMS_MIN, PRICE_MAX, PRICE_MIN};
use crate::domain::listing::{City, Listing};
use crate::errors::DomainError;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Search filter for [`Catalog::filter`]. A `None` location matches every
/// city. The defaults are the widest bounds the generator can produce, so
/// default criteria match the whole catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    pub location: Option<City>,
    pub min_price: u32,
    pub max_price: u32,
    pub min_bedrooms: u8,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            location: None,
            min_price: PRICE_MIN,
            max_price: PRICE_MAX,
            min_bedrooms: BEDROOMS_MIN,
        }
    }
}

/// Read-only handle over one session's generated listings.
///
/// Cheap to clone; every server worker shares the same immutable catalog
/// behind the `Arc`. There are no mutation operations -- a new catalog
/// means a new process.
#[derive(Clone)]
pub struct Catalog {
    listings: Arc<Vec<Listing>>,
    generated_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings: Arc::new(listings),
            generated_at: Utc::now(),
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Listings matching the criteria, in catalog order. An empty result
    /// is a normal outcome, not an error.
    pub fn filter(&self, criteria: &SearchCriteria) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|listing| {
                criteria
                    .location
                    .map_or(true, |city| listing.location == city)
                    && (criteria.min_price..=criteria.max_price).contains(&listing.price)
                    && listing.bedrooms >= criteria.min_bedrooms
            })
            .collect()
    }

    pub fn find_by_id(&self, id: u32) -> Result<&Listing, DomainError> {
        self.listings
            .iter()
            .find(|listing| listing.id == id)
            .ok_or(DomainError::ListingNotFound(id))
    }

    /// Known listings among `ids`, in catalog order regardless of the
    /// order requested. Unknown ids are dropped silently; the comparison
    /// form only offers ids that exist.
    pub fn find_by_ids(&self, ids: &[u32]) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|listing| ids.contains(&listing.id))
            .collect()
    }

    /// Locations present in the catalog, used to populate the search
    /// form. Set semantics; the ordering carries no meaning.
    pub fn distinct_locations(&self) -> BTreeSet<City> {
        self.listings.iter().map(|listing| listing.location).collect()
    }
}
