//! Root Leptos application component with routing.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::nav::Nav;
use crate::listing::client::ShelterClient;
use crate::pages::{dog_detail::DogDetailPage, dog_list::DogListPage};

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        /// API client for the origin the page was served from.
        pub fn api_client() -> ShelterClient {
            let origin = window().location().origin().unwrap_or_default();
            ShelterClient::new(origin)
        }
    } else {
        /// API client for native builds, where there is no page origin.
        pub fn api_client() -> ShelterClient {
            let base = std::env::var("SHELTER_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:3000".into());
            ShelterClient::new(base)
        }
    }
}

/// The root `<App/>` component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/shelter-web.css"/>
        <Title text="Tailspin Shelter – Adopt a Dog"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1"/>
        <Meta name="description" content="Browse the dogs waiting for a home"/>

        <Router>
            <Nav/>
            <main class="main-content">
                <Routes>
                    <Route path="/" view=DogListPage/>
                    <Route path="/dogs/:id" view=DogDetailPage/>
                </Routes>
            </main>
        </Router>
    }
}
