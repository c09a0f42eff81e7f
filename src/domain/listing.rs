// src/domain/listing.rs

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Cities a listing can be located in. The set is closed; both the
/// generator and the search form draw from `City::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum City {
    Jakarta,
    Bandung,
    Surabaya,
    Yogyakarta,
    Semarang,
    Medan,
}

impl City {
    pub const ALL: [City; 6] = [
        City::Jakarta,
        City::Bandung,
        City::Surabaya,
        City::Yogyakarta,
        City::Semarang,
        City::Medan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            City::Jakarta => "Jakarta",
            City::Bandung => "Bandung",
            City::Surabaya => "Surabaya",
            City::Yogyakarta => "Yogyakarta",
            City::Semarang => "Semarang",
            City::Medan => "Medan",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for City {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::ALL
            .iter()
            .find(|city| city.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown city: {s}"))
    }
}

/// Primary build material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Material {
    Concrete,
    Wood,
    Brick,
}

impl Material {
    pub const ALL: [Material; 3] = [Material::Concrete, Material::Wood, Material::Brick];

    pub fn as_str(&self) -> &'static str {
        match self {
            Material::Concrete => "Concrete",
            Material::Wood => "Wood",
            Material::Brick => "Brick",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Condition the property is sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Condition {
    New,
    UsedMaintained,
    NeedsRenovation,
}

impl Condition {
    pub const ALL: [Condition; 3] = [
        Condition::New,
        Condition::UsedMaintained,
        Condition::NeedsRenovation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::UsedMaintained => "Used, well maintained",
            Condition::NeedsRenovation => "Needs renovation",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three furniture bundles a listing can ship with. A bundle is
/// always picked as a whole; items are never mixed across bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FurnitureBundle {
    Living,
    Bedroom,
    Kitchen,
}

impl FurnitureBundle {
    pub const ALL: [FurnitureBundle; 3] = [
        FurnitureBundle::Living,
        FurnitureBundle::Bedroom,
        FurnitureBundle::Kitchen,
    ];

    pub fn items(&self) -> [&'static str; 3] {
        match self {
            FurnitureBundle::Living => ["Sofa", "Dining Table", "Wardrobe"],
            FurnitureBundle::Bedroom => ["Bed", "Study Desk", "Lounge Chair"],
            FurnitureBundle::Kitchen => ["Kitchen Set", "TV Stand", "Bookshelf"],
        }
    }
}

impl fmt::Display for FurnitureBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.items().join(", "))
    }
}

// maud renders strings and numbers natively but not arbitrary Display
// types, so the vocabulary enums splice through their Display form.
// Every variant renders fixed text; there is nothing to escape.
macro_rules! impl_maud_render {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl maud::Render for $ty {
                fn render_to(&self, buffer: &mut String) {
                    use std::fmt::Write;
                    let _ = write!(buffer, "{self}");
                }
            }
        )+
    };
}

impl_maud_render!(City, Material, Condition, FurnitureBundle);

/// A single property record. Immutable once generated; every numeric
/// field stays inside the generator's ranges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub id: u32,
    pub location: City,

    /// Asking price, in millions.
    pub price: u32,
    /// Floor area in square meters.
    pub area: u32,

    pub bedrooms: u8,
    pub bathrooms: u8,

    /// Opaque image asset path, resolved by the presentation layer.
    pub image_ref: &'static str,

    pub material: Material,
    pub year_built: u16,
    pub condition: Condition,
    pub furniture: FurnitureBundle,
}

impl Listing {
    /// Age of the building relative to `now`, floored at zero.
    pub fn age_in_years(&self, now: DateTime<Utc>) -> i32 {
        (now.year() - i32::from(self.year_built)).max(0)
    }
}
