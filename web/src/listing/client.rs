//! HTTP client for the shelter JSON API.
//!
//! Works natively and in the browser (reqwest falls back to `fetch` on
//! wasm32).  No timeout or retry is configured: a request either answers or
//! stays pending.

use serde::de::DeserializeOwned;
use tracing::debug;

use shelter_common::model::{Breed, Dog, DogDetail};

use super::filter::FilterState;

/// Why a request produced no usable data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("{}", status_line(*code, reason))]
    Status { code: u16, reason: String },
    /// The request never got a response.
    #[error("{0}")]
    Transport(String),
    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status { code: 404, .. })
    }
}

fn status_line(code: u16, reason: &str) -> String {
    if reason.is_empty() {
        format!("HTTP {code}")
    } else {
        format!("HTTP {code} {reason}")
    }
}

/// `err` followed by each of its sources, joined with `": "`.
///
/// reqwest keeps the actual cause (refused connection, serde message) in
/// `source()` only.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.ends_with(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}

/// Client rooted at the origin serving `/api/*`.
#[derive(Debug, Clone)]
pub struct ShelterClient {
    http: reqwest::Client,
    base_url: String,
}

impl ShelterClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Listing URL for `filter`; no `?` at all when nothing is selected.
    pub fn dogs_url(&self, filter: &FilterState) -> String {
        format!("{}/api/dogs{}", self.base_url, filter.query_string())
    }

    /// `GET /api/dogs` with the filter's query string.
    pub async fn dogs(&self, filter: &FilterState) -> Result<Vec<Dog>, FetchError> {
        self.get_json(&self.dogs_url(filter)).await
    }

    /// `GET /api/breeds`.
    pub async fn breeds(&self) -> Result<Vec<Breed>, FetchError> {
        self.get_json(&format!("{}/api/breeds", self.base_url)).await
    }

    /// `GET /api/dogs/{id}`.
    pub async fn dog(&self, id: i64) -> Result<DogDetail, FetchError> {
        self.get_json(&format!("{}/api/dogs/{id}", self.base_url))
            .await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!("GET {url}");
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(error_chain(&e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| FetchError::Decode(error_chain(&e)))
    }
}
