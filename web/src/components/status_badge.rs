use leptos::*;

use crate::listing::view::StatusBadge;

/// Coloured pill with the adoption status.
#[component]
pub fn Badge(badge: StatusBadge) -> impl IntoView {
    view! { <span class=badge.class()>{badge.label()}</span> }
}
