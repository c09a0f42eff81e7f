use crate::domain::listing::Listing;
use crate::templates::components::listing_details;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct InstallmentVm<'a> {
    pub listing: &'a Listing,
    /// Every listing id in the catalog, for the selector.
    pub all_ids: Vec<u32>,
    pub interest_rate_percent: f64,
    pub years: u32,
    /// Flat-interest monthly payment, in millions.
    pub monthly: f64,
}

pub fn installment_page(vm: &InstallmentVm) -> Markup {
    let listing = vm.listing;

    desktop_layout(
        "Installment Simulator",
        html! {
            main class="container" {
                h1 { "Installment Simulator" }

                form action="/installment" method="get" class="card" {
                    label for="id" { "Listing" }
                    select name="id" id="id" {
                        @for id in &vm.all_ids {
                            option value=(id) selected[*id == listing.id] { "Listing " (id) }
                        }
                    }

                    label for="rate" { "Interest rate (%)" }
                    input type="number" name="rate" id="rate"
                        min="0" max="10" step="0.5" value=(vm.interest_rate_percent);

                    label for="years" { "Term (years)" }
                    input type="number" name="years" id="years"
                        min="1" max="30" value=(vm.years);

                    button type="submit" { "Simulate" }
                }

                div class="card" {
                    img src=(listing.image_ref) alt=(format!("Listing {}", listing.id));
                    h3 { "Listing " (listing.id) " — " (listing.location) }
                    (listing_details(listing))
                    p {
                        strong {
                            "Monthly installment: "
                            (format!("{:.2}", vm.monthly))
                            " million/month"
                        }
                        " over " (vm.years) " years at " (vm.interest_rate_percent) "%."
                    }
                }
            }
        },
    )
}
