//! Card for a single dog in the listing grid.

use leptos::*;

use crate::components::status_badge::Badge;
use crate::listing::view::DogCard as DogCardView;

/// Name, breed, status badge and a link to the detail page.
#[component]
pub fn DogCard(card: DogCardView) -> impl IntoView {
    view! {
        <a href=card.detail_href class="dog-card">
            <div class="dog-card-body">
                <h3 class="dog-name">{card.name}</h3>
                <p class="dog-breed">{card.breed}</p>
                {card.badge.map(|badge| view! { <Badge badge=badge/> })}
            </div>
            <span class="dog-card-link">"View details →"</span>
        </a>
    }
}
