// templates/pages/home.rs

use crate::catalog::Catalog;
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn home_page(catalog: &Catalog) -> Markup {
    let locations = catalog.distinct_locations();

    desktop_layout(
        "Home",
        html! {
            main class="container" {
                h1 { "Find your next home" }

                (card("This session's catalog", html! {
                    p {
                        strong { (catalog.len()) } " randomly generated listings across "
                        strong { (locations.len()) } " cities."
                    }
                    p {
                        @for (i, city) in locations.iter().enumerate() {
                            @if i > 0 { ", " }
                            (city)
                        }
                    }
                    p { "Generated at " (catalog.generated_at().format("%Y-%m-%d %H:%M UTC").to_string()) "." }
                }))

                (card("Features", html! {
                    ul {
                        li { a href="/search" { "Search" } " — filter by city, price and bedrooms" }
                        li { a href="/installment" { "Installment" } " — simulate a flat-interest monthly payment" }
                        li { a href="/compare" { "Compare" } " — put listings side by side" }
                    }
                }))
            }
        },
    )
}
