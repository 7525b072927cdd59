//! Dog detail page – everything the shelter knows about one dog.

use leptos::*;
use leptos_router::*;

use shelter_common::model::DogDetail;

use crate::app::api_client;
use crate::components::status_badge::Badge;
use crate::listing::client::FetchError;
use crate::listing::view::status_badge;

/// Detail page for a single dog, addressed by id.
#[component]
pub fn DogDetailPage() -> impl IntoView {
    let params = use_params_map();
    let dog_id = move || params.with(|p| p.get("id").and_then(|id| id.parse::<i64>().ok()));

    let dog = create_local_resource(dog_id, |id| async move {
        match id {
            Some(id) => api_client().dog(id).await,
            None => Err(FetchError::Status {
                code: 404,
                reason: "Not Found".into(),
            }),
        }
    });

    view! {
        <div class="dog-detail-page">
            <a href="/" class="back-link">"← Back to all dogs"</a>
            <Suspense fallback=move || view! { <p class="loading">"Loading…"</p> }>
                {move || dog.get().map(|res| match res {
                    Ok(dog) => view! { <DogProfile dog=dog/> }.into_view(),
                    Err(e) if e.is_not_found() => view! {
                        <div class="panel"><p>"Dog not found"</p></div>
                    }.into_view(),
                    Err(e) => view! {
                        <div class="panel panel-error">
                            <p>"Failed to load dog: " {e.to_string()}</p>
                        </div>
                    }.into_view(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn DogProfile(dog: DogDetail) -> impl IntoView {
    let badge = status_badge(&dog.status);
    let age = if dog.age == 1 {
        "1 year".to_string()
    } else {
        format!("{} years", dog.age)
    };

    view! {
        <article class="dog-profile">
            <header class="dog-profile-header">
                <h1>{dog.name}</h1>
                {badge.map(|badge| view! { <Badge badge=badge/> })}
            </header>
            <dl class="dog-facts">
                <dt>"Breed"</dt>
                <dd>{dog.breed}</dd>
                <dt>"Age"</dt>
                <dd>{age}</dd>
                <dt>"Gender"</dt>
                <dd>{dog.gender}</dd>
            </dl>
            {dog.description.map(|text| view! { <p class="dog-description">{text}</p> })}
        </article>
    }
}
