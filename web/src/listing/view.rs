//! Render step: listing state in, view model out.
//!
//! [`render`] holds no state and does no I/O.  The Leptos components only
//! turn its output into DOM.

use shelter_common::model::{Breed, Dog, DogStatus};

use super::filter::FilterState;
use super::outcome::{ListingState, Outcome};

/// Placeholder cards shown while the listing loads.
pub const SKELETON_COUNT: usize = 6;

pub const EMPTY_MESSAGE: &str = "No dogs found matching your criteria.";
pub const ALL_BREEDS_LABEL: &str = "All Breeds";
pub const ALL_STATUS_LABEL: &str = "All Status";

/// Everything the listing page displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    pub filters: FilterBar,
    pub body: ListingBody,
}

/// The two selectors, rendered in every state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBar {
    pub breed_options: Vec<SelectOption>,
    pub selected_breed: String,
    pub status_options: Vec<SelectOption>,
    pub selected_status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingBody {
    Skeletons(usize),
    Failed(String),
    Empty,
    Cards(Vec<DogCard>),
}

/// One card of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogCard {
    /// Dog id; stable across renders.
    pub key: i64,
    pub name: String,
    pub breed: String,
    pub badge: Option<StatusBadge>,
    pub detail_href: String,
}

/// Visual variant of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusBadge {
    Available,
    Pending,
    Adopted,
}

impl StatusBadge {
    pub fn label(self) -> &'static str {
        match self {
            StatusBadge::Available => "Available",
            StatusBadge::Pending => "Pending",
            StatusBadge::Adopted => "Adopted",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            StatusBadge::Available => "status-badge available",
            StatusBadge::Pending => "status-badge pending",
            StatusBadge::Adopted => "status-badge adopted",
        }
    }
}

/// Badge for `status`; unknown states get none.
pub fn status_badge(status: &DogStatus) -> Option<StatusBadge> {
    match status {
        DogStatus::Available => Some(StatusBadge::Available),
        DogStatus::Pending => Some(StatusBadge::Pending),
        DogStatus::Adopted => Some(StatusBadge::Adopted),
        DogStatus::Other(_) => None,
    }
}

/// Route of the detail page for dog `id`.
pub fn detail_href(id: i64) -> String {
    format!("/dogs/{id}")
}

pub fn render(state: &ListingState, breeds: &[Breed], filter: &FilterState) -> ListingView {
    ListingView {
        filters: filter_bar(breeds, filter),
        body: match state.outcome() {
            Outcome::Loading => ListingBody::Skeletons(SKELETON_COUNT),
            Outcome::Failed(message) => ListingBody::Failed(message.clone()),
            Outcome::Loaded(dogs) if dogs.is_empty() => ListingBody::Empty,
            Outcome::Loaded(dogs) => ListingBody::Cards(dogs.iter().map(dog_card).collect()),
        },
    }
}

fn filter_bar(breeds: &[Breed], filter: &FilterState) -> FilterBar {
    let breed_options = std::iter::once(SelectOption::new("", ALL_BREEDS_LABEL))
        .chain(
            breeds
                .iter()
                .map(|b| SelectOption::new(b.id.to_string(), b.name.clone())),
        )
        .collect();

    let status_options = std::iter::once(SelectOption::new("", ALL_STATUS_LABEL))
        .chain(
            DogStatus::KNOWN
                .iter()
                .map(|s| SelectOption::new(s.as_str(), s.label())),
        )
        .collect();

    FilterBar {
        breed_options,
        selected_breed: filter.breed_id.clone(),
        status_options,
        selected_status: filter.status.clone(),
    }
}

fn dog_card(dog: &Dog) -> DogCard {
    DogCard {
        key: dog.id,
        name: dog.name.clone(),
        breed: dog.breed.clone(),
        badge: status_badge(&dog.status),
        detail_href: detail_href(dog.id),
    }
}
