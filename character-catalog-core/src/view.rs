//! Filter/sort pipeline
//!
//! Derives the visible list from the owned collection. The result is always a
//! fresh `Vec`; the input slice is never reordered.

use std::cmp::Ordering;

use crate::collection::CharacterCollection;
use crate::types::{Character, SortDirection, ViewQuery};

/// Filter `collection` by status and search term, then sort by name.
pub fn derive_view(collection: &[Character], query: &ViewQuery) -> Vec<Character> {
    let needle = query.search.to_lowercase();

    let mut view: Vec<Character> = collection
        .iter()
        .filter(|c| query.status.matches(c.status))
        .filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    view.sort_unstable_by(|a, b| compare_names(a, b, query.sort));
    view
}

fn compare_names(a: &Character, b: &Character, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => a.name.cmp(&b.name),
        SortDirection::Desc => b.name.cmp(&a.name),
    }
}

/// Memoised [`derive_view`], keyed on collection revision and query.
#[derive(Debug, Default)]
pub struct ViewCache {
    key: Option<(u64, ViewQuery)>,
    view: Vec<Character>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current view, recomputed only when the collection or query changed.
    pub fn get(&mut self, collection: &CharacterCollection, query: &ViewQuery) -> &[Character] {
        let fresh = matches!(
            &self.key,
            Some((revision, cached)) if *revision == collection.revision() && cached == query
        );
        if !fresh {
            self.view = derive_view(collection.as_slice(), query);
            self.key = Some((collection.revision(), query.clone()));
        }
        &self.view
    }

    /// Last computed view, possibly stale.
    pub fn last(&self) -> &[Character] {
        &self.view
    }

    /// Drop the cached result.
    pub fn invalidate(&mut self) {
        self.key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CharacterStatus, StatusFilter};

    fn character(id: u32, name: &str, status: CharacterStatus) -> Character {
        Character {
            id,
            name: name.to_string(),
            status,
            species: String::new(),
            image: String::new(),
        }
    }

    fn sample() -> Vec<Character> {
        vec![
            character(1, "Rick Sanchez", CharacterStatus::Alive),
            character(2, "Morty Smith", CharacterStatus::Alive),
            character(3, "Birdperson", CharacterStatus::Dead),
            character(4, "Beth Smith", CharacterStatus::Alive),
            character(5, "Mr. Poopybutthole", CharacterStatus::Unknown),
        ]
    }

    fn names(view: &[Character]) -> Vec<&str> {
        view.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn single_record_all_filter() {
        let collection = vec![character(1, "Morty", CharacterStatus::Alive)];
        let view = derive_view(&collection, &ViewQuery::default());
        assert_eq!(names(&view), ["Morty"]);
    }

    #[test]
    fn descending_sort() {
        let collection = vec![
            character(1, "Beth", CharacterStatus::Alive),
            character(2, "Rick", CharacterStatus::Alive),
        ];
        let query = ViewQuery::new(StatusFilter::All, "", SortDirection::Desc);
        assert_eq!(names(&derive_view(&collection, &query)), ["Rick", "Beth"]);
    }

    #[test]
    fn status_filter_keeps_exact_matches() {
        let query = ViewQuery::new(
            StatusFilter::Only(CharacterStatus::Dead),
            "",
            SortDirection::Asc,
        );
        assert_eq!(names(&derive_view(&sample(), &query)), ["Birdperson"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let collection = sample();
        for term in ["rick", "RICK", "Sanc"] {
            let query = ViewQuery::new(StatusFilter::All, term, SortDirection::Asc);
            assert_eq!(names(&derive_view(&collection, &query)), ["Rick Sanchez"], "{term}");
        }
    }

    #[test]
    fn search_and_status_combine() {
        let query = ViewQuery::new(
            StatusFilter::Only(CharacterStatus::Alive),
            "smith",
            SortDirection::Asc,
        );
        assert_eq!(
            names(&derive_view(&sample(), &query)),
            ["Beth Smith", "Morty Smith"]
        );
    }

    #[test]
    fn ascending_is_total_order_and_descending_reverses() {
        let collection = sample();
        let asc = derive_view(&collection, &ViewQuery::default());
        assert!(asc.windows(2).all(|w| w[0].name <= w[1].name));

        let query = ViewQuery::new(StatusFilter::All, "", SortDirection::Desc);
        let mut desc = derive_view(&collection, &query);
        desc.reverse();
        assert_eq!(names(&asc), names(&desc));
    }

    #[test]
    fn reapplying_is_idempotent() {
        let collection = sample();
        for query in [
            ViewQuery::new(StatusFilter::Only(CharacterStatus::Alive), "", SortDirection::Asc),
            ViewQuery::new(StatusFilter::All, "", SortDirection::Asc),
        ] {
            let once = derive_view(&collection, &query);
            let twice = derive_view(&once, &query);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn source_slice_is_not_reordered() {
        let collection = sample();
        let before = collection.clone();
        let _ = derive_view(&collection, &ViewQuery::new(StatusFilter::All, "", SortDirection::Desc));
        assert_eq!(collection, before);
    }

    #[test]
    fn cache_recomputes_on_revision_or_query_change() {
        let mut collection = CharacterCollection::from_vec(sample());
        let mut cache = ViewCache::new();
        let query = ViewQuery::default();

        assert_eq!(cache.get(&collection, &query).len(), 5);

        collection.replace(vec![character(9, "Jerry Smith", CharacterStatus::Alive)]);
        assert_eq!(names(cache.get(&collection, &query)), ["Jerry Smith"]);

        let dead = ViewQuery::new(StatusFilter::Only(CharacterStatus::Dead), "", SortDirection::Asc);
        assert!(cache.get(&collection, &dead).is_empty());
    }
}
