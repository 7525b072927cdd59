//! Listing orchestration without a UI runtime.
//!
//! [`ListingFetch`] is the unit both pages share: the Leptos page starts it
//! inside a signal update and runs it on `spawn_local`, while
//! [`ListingPage`] drives it with plain async calls for tools and tests.

use futures::join;

use shelter_common::model::{Breed, Dog};

use super::breeds::apply_breeds;
use super::client::{FetchError, ShelterClient};
use super::filter::FilterState;
use super::outcome::{FetchTicket, ListingState};
use super::view::{render, ListingView};

/// A listing request that holds its ticket and a snapshot of the filter.
///
/// Running it touches no state, so any number may be in flight at once.
#[derive(Debug, Clone)]
pub struct ListingFetch {
    ticket: FetchTicket,
    filter: FilterState,
}

impl ListingFetch {
    /// Take a ticket from `listing` (which flips it to loading).
    pub fn start(listing: &mut ListingState, filter: &FilterState) -> Self {
        Self {
            ticket: listing.begin(),
            filter: filter.clone(),
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub async fn run(self, client: &ShelterClient) -> FetchedListing {
        let result = client.dogs(&self.filter).await;
        FetchedListing {
            ticket: self.ticket,
            result,
        }
    }
}

/// Result of a [`ListingFetch`], not yet applied.
#[derive(Debug)]
pub struct FetchedListing {
    ticket: FetchTicket,
    result: Result<Vec<Dog>, FetchError>,
}

impl FetchedListing {
    /// Land the result; `false` when a newer fetch has started since.
    pub fn apply(self, listing: &mut ListingState) -> bool {
        listing.complete(self.ticket, self.result)
    }
}

pub struct ListingPage {
    client: ShelterClient,
    filter: FilterState,
    listing: ListingState,
    breeds: Vec<Breed>,
}

impl ListingPage {
    pub fn new(client: ShelterClient) -> Self {
        Self {
            client,
            filter: FilterState::default(),
            listing: ListingState::default(),
            breeds: Vec::new(),
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn listing(&self) -> &ListingState {
        &self.listing
    }

    pub fn breeds(&self) -> &[Breed] {
        &self.breeds
    }

    /// Load the breed options and the first listing concurrently.
    pub async fn mount(&mut self) {
        let fetch = ListingFetch::start(&mut self.listing, &self.filter);
        let (breeds, fetched) = join!(self.client.breeds(), fetch.run(&self.client));
        apply_breeds(&mut self.breeds, breeds);
        fetched.apply(&mut self.listing);
    }

    pub async fn select_breed(&mut self, breed_id: impl Into<String>) {
        self.filter.set_breed(breed_id);
        self.refresh().await;
    }

    pub async fn select_status(&mut self, status: impl Into<String>) {
        self.filter.set_status(status);
        self.refresh().await;
    }

    /// Re-run the listing fetch for the current filter.
    pub async fn refresh(&mut self) {
        let fetch = ListingFetch::start(&mut self.listing, &self.filter);
        fetch.run(&self.client).await.apply(&mut self.listing);
    }

    pub fn view(&self) -> ListingView {
        render(&self.listing, &self.breeds, &self.filter)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::listing::mock::{spawn_mock, unreachable_base_url, MockApi};
    use crate::listing::outcome::Outcome;
    use crate::listing::view::{ListingBody, StatusBadge};

    #[tokio::test]
    async fn test_mount_without_filters() {
        let mock = spawn_mock(MockApi::default()).await;
        let mut page = ListingPage::new(ShelterClient::new(mock.base_url()));
        page.filter.set_status("");

        page.mount().await;

        let mut requests = mock.requests();
        requests.sort();
        assert_eq!(requests, ["/api/breeds", "/api/dogs"]);
        assert_eq!(page.breeds().len(), 2);

        let ListingBody::Cards(cards) = page.view().body else {
            panic!("expected cards");
        };
        let summary: Vec<_> = cards
            .iter()
            .map(|c| (c.key, c.name.as_str(), c.breed.as_str(), c.badge))
            .collect();
        assert_eq!(
            summary,
            [
                (1, "Buddy", "Beagle", Some(StatusBadge::Available)),
                (2, "Luna", "Boxer", Some(StatusBadge::Pending)),
                (3, "Max", "Beagle", Some(StatusBadge::Adopted)),
            ]
        );
    }

    #[tokio::test]
    async fn test_filter_changes_refetch_listing_only() {
        let mock = spawn_mock(MockApi::default()).await;
        let mut page = ListingPage::new(ShelterClient::new(mock.base_url()));
        page.mount().await;

        page.select_breed("7").await;
        page.select_status("").await;

        let requests = mock.requests();
        assert_eq!(requests.len(), 4);
        assert!(requests[..2].contains(&"/api/dogs?status=AVAILABLE".to_string()));
        assert_eq!(requests[2], "/api/dogs?breed_id=7&status=AVAILABLE");
        assert_eq!(requests[3], "/api/dogs?breed_id=7");
        assert_eq!(page.filter().breed_id, "7");
        assert_eq!(page.view().filters.selected_status, "");
    }

    #[tokio::test]
    async fn test_empty_listing() {
        let mock = spawn_mock(MockApi {
            dogs: (StatusCode::OK, json!([])),
            ..MockApi::default()
        })
        .await;
        let mut page = ListingPage::new(ShelterClient::new(mock.base_url()));
        page.mount().await;

        assert_eq!(page.listing().outcome(), &Outcome::Loaded(vec![]));
        assert_eq!(page.view().body, ListingBody::Empty);
    }

    #[tokio::test]
    async fn test_listing_404() {
        let mock = spawn_mock(MockApi {
            dogs: (StatusCode::NOT_FOUND, json!({"error": "nope"})),
            ..MockApi::default()
        })
        .await;
        let mut page = ListingPage::new(ShelterClient::new(mock.base_url()));
        page.mount().await;

        match page.listing().outcome() {
            Outcome::Failed(msg) => assert!(msg.contains("404"), "{msg}"),
            other => panic!("expected failure, got {other:?}"),
        }
        // Breeds come from a separate request and still load.
        assert_eq!(page.breeds().len(), 2);
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let mut page = ListingPage::new(ShelterClient::new(unreachable_base_url().await));
        page.mount().await;

        match page.listing().outcome() {
            Outcome::Failed(msg) => {
                assert!(msg.starts_with("Failed to load dogs: "), "{msg}");
                // reqwest's own line only names the URL; the cause comes after it.
                assert!(msg.to_lowercase().contains("refused"), "{msg}");
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert!(page.breeds().is_empty());
    }

    #[tokio::test]
    async fn test_breed_failure_leaves_listing_alone() {
        let mock = spawn_mock(MockApi {
            breeds: (StatusCode::INTERNAL_SERVER_ERROR, json!({"error": "boom"})),
            ..MockApi::default()
        })
        .await;
        let mut page = ListingPage::new(ShelterClient::new(mock.base_url()));
        page.mount().await;

        assert!(page.breeds().is_empty());
        assert!(matches!(page.listing().outcome(), Outcome::Loaded(dogs) if dogs.len() == 3));
        assert_eq!(page.view().filters.breed_options.len(), 1);
    }

    #[tokio::test]
    async fn test_refresh_is_idempotent() {
        let mock = spawn_mock(MockApi::default()).await;
        let mut page = ListingPage::new(ShelterClient::new(mock.base_url()));

        page.refresh().await;
        let first = page.view();
        page.refresh().await;

        assert_eq!(page.view(), first);
    }

    #[tokio::test]
    async fn test_stale_fetch_never_lands() {
        let mock = spawn_mock(MockApi::default()).await;
        let client = ShelterClient::new(mock.base_url());
        let mut listing = ListingState::default();
        let mut filter = FilterState::default();

        filter.set_breed("7");
        let older = ListingFetch::start(&mut listing, &filter);
        filter.set_breed("4");
        let newer = ListingFetch::start(&mut listing, &filter);
        assert_eq!(older.filter().breed_id, "7");

        let older = older.run(&client).await;
        let newer = newer.run(&client).await;
        assert_eq!(
            mock.requests(),
            [
                "/api/dogs?breed_id=7&status=AVAILABLE",
                "/api/dogs?breed_id=4&status=AVAILABLE"
            ]
        );

        // The older answer arrives first and is dropped; the page keeps loading.
        assert!(!older.apply(&mut listing));
        assert!(listing.is_loading());
        assert!(newer.apply(&mut listing));
        assert!(matches!(listing.outcome(), Outcome::Loaded(dogs) if dogs.len() == 3));
    }

    #[tokio::test]
    async fn test_failed_stale_fetch_does_not_mask_success() {
        let mut listing = ListingState::default();
        let dead = ShelterClient::new(unreachable_base_url().await);
        let older = ListingFetch::start(&mut listing, &FilterState::default())
            .run(&dead)
            .await;

        let mock = spawn_mock(MockApi::default()).await;
        let newer = ListingFetch::start(&mut listing, &FilterState::default())
            .run(&ShelterClient::new(mock.base_url()))
            .await;

        assert!(newer.apply(&mut listing));
        assert!(!older.apply(&mut listing));
        assert!(matches!(listing.outcome(), Outcome::Loaded(_)));
    }
}
