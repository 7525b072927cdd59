//! Placeholder card shown while the listing loads.

use leptos::*;

#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="dog-card skeleton" aria-hidden="true">
            <div class="dog-card-body">
                <div class="skeleton-line title"></div>
                <div class="skeleton-line"></div>
                <div class="skeleton-line short"></div>
            </div>
        </div>
    }
}
