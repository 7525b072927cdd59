//! Outcome of the listing fetch and the per-page state that owns it.

use tracing::debug;

use shelter_common::model::Dog;

use super::client::FetchError;

/// Exactly one of loading, failed or loaded; never two at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Loading,
    Failed(String),
    /// May be empty: no match is a success, not an error.
    Loaded(Vec<Dog>),
}

/// Handle of one listing fetch, handed out by [`ListingState::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

/// Listing state of one page instance.
///
/// Every fetch takes a ticket before touching the network and hands it
/// back with its result.  Only the most recently issued ticket may write
/// the outcome, so a slow response to an old filter can never replace the
/// answer to the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    outcome: Outcome,
    issued: u64,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            outcome: Outcome::Loading,
            issued: 0,
        }
    }
}

impl ListingState {
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.outcome, Outcome::Loading)
    }

    /// Start a fetch: the outcome flips to loading right away.
    pub fn begin(&mut self) -> FetchTicket {
        self.issued += 1;
        self.outcome = Outcome::Loading;
        FetchTicket(self.issued)
    }

    /// Record the result of the fetch holding `ticket`.
    ///
    /// Returns `false` (and changes nothing) when a newer fetch has been
    /// started since.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Vec<Dog>, FetchError>) -> bool {
        if ticket.0 != self.issued {
            debug!(
                "Discarding listing response #{} (latest is #{})",
                ticket.0, self.issued
            );
            return false;
        }

        self.outcome = match result {
            Ok(dogs) => Outcome::Loaded(dogs),
            Err(e) => Outcome::Failed(failure_message(&e)),
        };
        true
    }
}

/// Text shown in place of the grid when the listing fetch fails.
pub fn failure_message(err: &FetchError) -> String {
    format!("Failed to load dogs: {err}")
}
