use crate::assets::CONTACT_PHONE;
use crate::domain::listing::Listing;
use crate::domain::pricing;
use maud::{html, Markup};

/// Summary card used by search results and the comparison columns.
pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        div class="card" {
            img src=(listing.image_ref) alt=(format!("Listing {}", listing.id));
            h3 { "Listing " (listing.id) " — " (listing.location) }
            p { strong { (listing.price) " million" } }
            p {
                (listing.area) " m² · "
                (listing.bedrooms) " bed · "
                (listing.bathrooms) " bath"
            }
            p { (listing.condition) ", built " (listing.year_built) }
            a href=(format!("/listing?id={}", listing.id)) { "View details" }
        }
    }
}

/// Full attribute list for the detail, installment and comparison views.
/// Price per m² is recomputed per render; the catalog is small enough
/// that caching buys nothing.
pub fn listing_details(listing: &Listing) -> Markup {
    let price_per_m2 = pricing::price_per_area(listing).ok();

    html! {
        ul {
            li { "Location: " (listing.location) }
            li { "Price: " (listing.price) " million" }
            li { "Area: " (listing.area) " m²" }
            li { "Bedrooms: " (listing.bedrooms) }
            li { "Bathrooms: " (listing.bathrooms) }
            @if let Some(ppm) = price_per_m2 {
                li { "Price per m²: " (format!("{ppm:.2}")) " million" }
            }
            li { "Material: " (listing.material) }
            li { "Year built: " (listing.year_built) }
            li { "Condition: " (listing.condition) }
            li { "Furniture: " (listing.furniture) }
            li { "Contact: " (CONTACT_PHONE) }
        }
    }
}
