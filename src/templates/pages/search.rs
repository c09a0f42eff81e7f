use crate::catalog::SearchCriteria;
use crate::domain::listing::{City, Listing};
use crate::templates::{desktop_layout, listing_card};
use maud::{html, Markup};
use std::collections::BTreeSet;

pub struct SearchVm<'a> {
    pub criteria: SearchCriteria,
    pub results: Vec<&'a Listing>,
    pub locations: BTreeSet<City>,
}

pub fn search_page(vm: &SearchVm) -> Markup {
    desktop_layout(
        "Search",
        html! {
            main class="container" {
                h1 { "Search Listings" }

                form action="/search" method="get" class="card" {
                    label for="location" { "Location" }
                    select name="location" id="location" {
                        option value="any" selected[vm.criteria.location.is_none()] { "Any" }
                        @for city in &vm.locations {
                            option value=(city) selected[vm.criteria.location == Some(*city)] { (city) }
                        }
                    }

                    label for="min_price" { "Minimum price (million)" }
                    input type="number" name="min_price" id="min_price"
                        min="200" max="2000" step="100" value=(vm.criteria.min_price);

                    label for="max_price" { "Maximum price (million)" }
                    input type="number" name="max_price" id="max_price"
                        min="200" max="2000" step="100" value=(vm.criteria.max_price);

                    label for="min_bedrooms" { "Minimum bedrooms" }
                    input type="number" name="min_bedrooms" id="min_bedrooms"
                        min="1" max="5" value=(vm.criteria.min_bedrooms);

                    button type="submit" { "Search" }
                }

                @if vm.results.is_empty() {
                    p class="notice" { "No listings match your filters." }
                } @else {
                    p { "Found " strong { (vm.results.len()) } " listings." }
                    div class="grid" {
                        @for listing in vm.results.iter().copied() {
                            (listing_card(listing))
                        }
                    }
                }
            }
        },
    )
}
