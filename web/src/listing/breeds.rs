//! Breed options of the filter, loaded once per page.

use tracing::warn;

use shelter_common::model::Breed;

use super::client::FetchError;

/// Replace `current` with a freshly fetched breed list.
///
/// A failed fetch is logged and otherwise ignored: the previous options
/// stay, and the listing is not affected.  Returns whether `current` changed.
pub fn apply_breeds(current: &mut Vec<Breed>, result: Result<Vec<Breed>, FetchError>) -> bool {
    match result {
        Ok(breeds) => {
            *current = breeds;
            true
        }
        Err(e) => {
            warn!("Failed to load breeds: {e}");
            false
        }
    }
}
