//! Shared data-transfer objects used by both server and client.

use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Status ──────────────────────────────────────────────────────────────────

/// Adoption status of a dog.
///
/// The wire format is the bare upper-case string.  Values outside the three
/// known states are preserved in [`DogStatus::Other`] rather than rejected,
/// so a client never drops a record because the server grew a new state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DogStatus {
    Available,
    Pending,
    Adopted,
    Other(String),
}

impl DogStatus {
    /// The closed set of states the shelter knows about, in display order.
    pub const KNOWN: [DogStatus; 3] = [DogStatus::Available, DogStatus::Pending, DogStatus::Adopted];

    pub fn as_str(&self) -> &str {
        match self {
            DogStatus::Available => "AVAILABLE",
            DogStatus::Pending => "PENDING",
            DogStatus::Adopted => "ADOPTED",
            DogStatus::Other(s) => s,
        }
    }

    /// Human-readable label ("Available", "Pending", ...).
    pub fn label(&self) -> &str {
        match self {
            DogStatus::Available => "Available",
            DogStatus::Pending => "Pending",
            DogStatus::Adopted => "Adopted",
            DogStatus::Other(s) => s,
        }
    }
}

impl From<String> for DogStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "AVAILABLE" => DogStatus::Available,
            "PENDING" => DogStatus::Pending,
            "ADOPTED" => DogStatus::Adopted,
            _ => DogStatus::Other(s),
        }
    }
}

impl From<&str> for DogStatus {
    fn from(s: &str) -> Self {
        DogStatus::from(s.to_string())
    }
}

impl From<DogStatus> for String {
    fn from(status: DogStatus) -> Self {
        match status {
            DogStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Dogs ────────────────────────────────────────────────────────────────────

/// A row of the dog listing.  The breed is denormalised to its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub id: i64,
    pub name: String,
    pub breed: String,
    pub status: DogStatus,
}

/// Everything the detail page shows about one dog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogDetail {
    pub id: i64,
    pub name: String,
    pub breed: String,
    pub age: u32,
    pub gender: String,
    pub description: Option<String>,
    pub status: DogStatus,
}

// ─── Breeds ──────────────────────────────────────────────────────────────────

/// An option of the breed filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    pub id: i64,
    pub name: String,
}

// ─── tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&DogStatus::Pending).unwrap();
        assert_eq!(json, "\"PENDING\"");

        let parsed: DogStatus = serde_json::from_str("\"ADOPTED\"").unwrap();
        assert_eq!(parsed, DogStatus::Adopted);
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let parsed: DogStatus = serde_json::from_str("\"FOSTERED\"").unwrap();
        assert_eq!(parsed, DogStatus::Other("FOSTERED".into()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"FOSTERED\"");
    }

    #[test]
    fn test_status_is_case_sensitive() {
        assert_eq!(DogStatus::from("available"), DogStatus::Other("available".into()));
    }

    #[test]
    fn test_dog_from_listing_json() {
        let dog: Dog = serde_json::from_str(
            r#"{"id": 3, "name": "Buddy", "breed": "Beagle", "status": "AVAILABLE"}"#,
        )
        .unwrap();
        assert_eq!(dog.id, 3);
        assert_eq!(dog.breed, "Beagle");
        assert_eq!(dog.status, DogStatus::Available);
    }
}
