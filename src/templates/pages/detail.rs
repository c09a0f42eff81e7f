use crate::domain::listing::Listing;
use crate::templates::components::listing_details;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct DetailVm<'a> {
    pub listing: &'a Listing,
    /// Derived from year_built and the current UTC year.
    pub age_years: i32,
}

pub fn detail_page(vm: &DetailVm) -> Markup {
    let listing = vm.listing;

    desktop_layout(
        "Listing Detail",
        html! {
            main class="container" {
                h1 { "Listing " (listing.id) " — " (listing.location) }

                div class="card" {
                    img src=(listing.image_ref) alt=(format!("Listing {}", listing.id));
                    (listing_details(listing))
                    p {
                        @if vm.age_years == 0 {
                            "Built this year."
                        } @else {
                            (vm.age_years) " years old."
                        }
                    }
                    p {
                        a href=(format!("/installment?id={}", listing.id)) { "Simulate installment" }
                    }
                }
            }
        },
    )
}
