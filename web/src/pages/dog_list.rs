//! Dog listing page – filterable grid of every dog in the shelter.

use leptos::*;

use shelter_common::model::Breed;

use crate::app::api_client;
use crate::components::dog_card::DogCard;
use crate::components::filter_bar::FilterBar;
use crate::components::skeleton_card::SkeletonCard;
use crate::listing::breeds::apply_breeds;
use crate::listing::filter::FilterState;
use crate::listing::outcome::ListingState;
use crate::listing::page::ListingFetch;
use crate::listing::view::{render, DogCard as DogCardView, ListingBody, EMPTY_MESSAGE};

/// Browse dogs by breed and adoption status.
#[component]
pub fn DogListPage() -> impl IntoView {
    let filter = create_rw_signal(FilterState::default());
    let listing = create_rw_signal(ListingState::default());
    let breeds = create_rw_signal(Vec::<Breed>::new());

    // Each call races freely with earlier ones; the ticket decides which
    // response may land.
    let fetch_dogs = move || {
        let current = filter.get_untracked();
        let Some(fetch) = listing.try_update(|state| ListingFetch::start(state, &current)) else {
            return;
        };
        spawn_local(async move {
            let fetched = fetch.run(&api_client()).await;
            listing.update(|state| {
                fetched.apply(state);
            });
        });
    };

    // Effects only run in the browser: this is the mount hook.
    create_effect(move |mounted: Option<()>| {
        if mounted.is_some() {
            return;
        }
        spawn_local(async move {
            let result = api_client().breeds().await;
            breeds.update(|current| {
                apply_breeds(current, result);
            });
        });
        fetch_dogs();
    });

    let on_breed = Callback::new(move |breed_id: String| {
        filter.update(|f| f.set_breed(breed_id));
        fetch_dogs();
    });
    let on_status = Callback::new(move |status: String| {
        filter.update(|f| f.set_status(status));
        fetch_dogs();
    });

    let page_view = create_memo(move |_| {
        listing.with(|state| breeds.with(|b| filter.with(|f| render(state, b, f))))
    });
    let filter_bar = Signal::derive(move || page_view.with(|v| v.filters.clone()));
    let body = create_memo(move |_| page_view.with(|v| v.body.clone()));

    view! {
        <div class="dog-list-page">
            <h1>"Adoptable Dogs"</h1>
            <FilterBar bar=filter_bar on_breed=on_breed on_status=on_status/>

            {move || match body.get() {
                ListingBody::Skeletons(count) => view! {
                    <div class="dog-grid">
                        {(0..count).map(|_| view! { <SkeletonCard/> }).collect_view()}
                    </div>
                }.into_view(),
                ListingBody::Failed(message) => view! {
                    <div class="panel panel-error">
                        <p>{message}</p>
                    </div>
                }.into_view(),
                ListingBody::Empty => view! {
                    <div class="panel">
                        <p>{EMPTY_MESSAGE}</p>
                    </div>
                }.into_view(),
                ListingBody::Cards(cards) => view! {
                    <div class="dog-grid">
                        <For
                            each=move || cards.clone()
                            key=|card| card.key
                            children=move |card: DogCardView| {
                                view! { <DogCard card=card/> }
                            }
                        />
                    </div>
                }.into_view(),
            }}
        </div>
    }
}
