use serde::{Deserialize, Serialize};

// ============ Records ============

/// Life status of a character as reported by the catalog.
///
/// The wire values are `"Alive"`, `"Dead"` and `"unknown"` (note the lowercase
/// spelling of the last one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterStatus {
    Alive,
    Dead,
    #[serde(rename = "unknown")]
    Unknown,
}

impl CharacterStatus {
    /// All statuses, in the order the filter cycles through them.
    pub const ALL: [Self; 3] = [Self::Alive, Self::Dead, Self::Unknown];

    /// Wire representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alive => "Alive",
            Self::Dead => "Dead",
            Self::Unknown => "unknown",
        }
    }

    /// Parse an exact wire value. Matching is case-sensitive.
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl std::fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single character record.
///
/// Only the fields the list needs are modelled; any other field in the
/// response is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Unique, stable identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Life status.
    pub status: CharacterStatus,
    /// Species label (empty when the catalog omits it).
    #[serde(default)]
    pub species: String,
    /// Image URI.
    #[serde(default)]
    pub image: String,
}

// ============ Pagination ============

/// Page metadata returned alongside `results`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of records across all pages.
    #[serde(default)]
    pub count: u32,
    /// Total number of pages.
    #[serde(default)]
    pub pages: u32,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub prev: Option<String>,
}

/// One page of the `/character` listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    /// Page metadata. Absent on some mirrors of the API.
    #[serde(default)]
    pub info: Option<PageInfo>,
    /// Records on this page. An empty array marks the end of the listing.
    #[serde(default)]
    pub results: Vec<Character>,
}

impl CharacterPage {
    /// Whether this page carries no records.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PAGE: &str = r#"{
        "info": {
            "count": 826,
            "pages": 42,
            "next": "https://rickandmortyapi.com/api/character?page=2",
            "prev": null
        },
        "results": [
            {
                "id": 1,
                "name": "Rick Sanchez",
                "status": "Alive",
                "species": "Human",
                "type": "",
                "gender": "Male",
                "origin": { "name": "Earth (C-137)", "url": "" },
                "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
                "episode": [],
                "url": "https://rickandmortyapi.com/api/character/1",
                "created": "2017-11-04T18:48:46.250Z"
            },
            {
                "id": 8,
                "name": "Adjudicator Rick",
                "status": "Dead",
                "species": "Human",
                "image": "https://rickandmortyapi.com/api/character/avatar/8.jpeg"
            },
            {
                "id": 6,
                "name": "Abadango Cluster Princess",
                "status": "unknown",
                "image": "https://rickandmortyapi.com/api/character/avatar/6.jpeg"
            }
        ]
    }"#;

    #[test]
    fn deserialize_full_page_ignores_unknown_fields() {
        let page: CharacterPage = serde_json::from_str(SAMPLE_PAGE).unwrap();
        assert_eq!(page.results.len(), 3);
        assert_eq!(page.results[0].name, "Rick Sanchez");
        assert_eq!(page.results[0].status, CharacterStatus::Alive);
        assert_eq!(page.results[1].status, CharacterStatus::Dead);
        assert_eq!(page.results[2].status, CharacterStatus::Unknown);
        assert_eq!(page.results[2].species, "");

        let info = page.info.unwrap();
        assert_eq!(info.pages, 42);
        assert!(info.prev.is_none());
        assert!(info.next.is_some());
    }

    #[test]
    fn deserialize_empty_results() {
        let page: CharacterPage = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(page.is_empty());
        assert!(page.info.is_none());
    }

    #[test]
    fn deserialize_missing_results_is_empty() {
        let page: CharacterPage = serde_json::from_str("{}").unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn unknown_status_value_is_rejected() {
        let raw = r#"{"id": 1, "name": "X", "status": "Zombie", "image": ""}"#;
        assert!(serde_json::from_str::<Character>(raw).is_err());
    }

    #[test]
    fn status_wire_values() {
        assert_eq!(CharacterStatus::from_wire("Alive"), Some(CharacterStatus::Alive));
        assert_eq!(CharacterStatus::from_wire("unknown"), Some(CharacterStatus::Unknown));
        assert_eq!(CharacterStatus::from_wire("alive"), None);
        assert_eq!(CharacterStatus::Unknown.to_string(), "unknown");
    }
}
