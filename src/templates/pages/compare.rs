use crate::domain::listing::Listing;
use crate::templates::components::listing_details;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct CompareVm<'a> {
    /// Resolved selection, in catalog order.
    pub selected: Vec<&'a Listing>,
    /// The whole catalog, for the checkbox form.
    pub all: &'a [Listing],
}

pub fn compare_page(vm: &CompareVm) -> Markup {
    let selected_ids: Vec<u32> = vm.selected.iter().map(|l| l.id).collect();

    desktop_layout(
        "Compare Listings",
        html! {
            main class="container" {
                h1 { "Compare Listings" }

                form action="/compare" method="get" class="card" {
                    p { "Pick the listings to put side by side:" }
                    @for listing in vm.all {
                        label {
                            input type="checkbox" name="ids" value=(listing.id)
                                checked[selected_ids.contains(&listing.id)];
                            " Listing " (listing.id)
                            " — " (listing.location)
                            ", " (listing.price) " million"
                        }
                    }
                    button type="submit" { "Compare" }
                }

                @if vm.selected.len() < 2 {
                    p class="notice" { "Select at least two listings to compare." }
                } @else {
                    div class="grid" {
                        @for listing in vm.selected.iter().copied() {
                            div class="card" {
                                img src=(listing.image_ref) alt=(format!("Listing {}", listing.id));
                                h3 { "Listing " (listing.id) " — " (listing.location) }
                                (listing_details(listing))
                            }
                        }
                    }
                }
            }
        },
    )
}
