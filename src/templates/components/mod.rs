use maud::{html, Markup};

pub mod listing_card;

pub use listing_card::{listing_card, listing_details};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
