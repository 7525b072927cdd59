//! Filter state of the listing and the query string derived from it.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Status preselected when the page mounts.
pub const DEFAULT_STATUS: &str = "AVAILABLE";

/// Characters left as-is in query values (RFC 3986 unreserved set).
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// The two selector values.  An empty string means "no filter".
///
/// Values are never validated here; whatever the selector holds is sent
/// to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub breed_id: String,
    pub status: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            breed_id: String::new(),
            status: DEFAULT_STATUS.to_string(),
        }
    }
}

impl FilterState {
    /// Neither breed nor status selected.
    pub fn unfiltered() -> Self {
        Self {
            breed_id: String::new(),
            status: String::new(),
        }
    }

    pub fn set_breed(&mut self, breed_id: impl Into<String>) {
        self.breed_id = breed_id.into();
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// `?breed_id=..&status=..` with only the non-empty selections, or an
    /// empty string when nothing is selected.
    pub fn query_string(&self) -> String {
        let params: Vec<String> = [("breed_id", &self.breed_id), ("status", &self.status)]
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, QUERY_VALUE)))
            .collect();

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}
