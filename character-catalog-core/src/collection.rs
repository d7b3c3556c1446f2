//! The canonical record collection and the edits that may be applied to it
//!
//! The container owns one `CharacterCollection`. Everything else reads it by
//! reference and requests changes by handing back a [`CollectionEdit`] or a
//! full replacement.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::types::Character;

/// A change requested against the owned collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionEdit {
    /// Replace the record whose id equals `character.id`.
    Replace(Character),
    /// Remove the record with this id.
    Remove(u32),
    /// Append a locally created record. Its id is assigned on insert.
    Insert(Character),
}

/// Merge `incoming` into `existing` by id.
///
/// A record keeps the position of its first occurrence and takes the value of
/// its last one; unseen ids are appended in arrival order. The result holds
/// each id at most once.
pub fn merge_by_id<I>(existing: &[Character], incoming: I) -> Vec<Character>
where
    I: IntoIterator<Item = Character>,
{
    let mut merged: Vec<Character> = Vec::with_capacity(existing.len());
    let mut positions: HashMap<u32, usize> = HashMap::with_capacity(existing.len());

    for character in existing.iter().cloned().chain(incoming) {
        if let Some(&index) = positions.get(&character.id) {
            merged[index] = character;
        } else {
            positions.insert(character.id, merged.len());
            merged.push(character);
        }
    }

    merged
}

/// Owned, ordered sequence of records.
///
/// Every mutation bumps [`revision`](Self::revision) so derived views know
/// when to recompute.
#[derive(Debug, Clone, Default)]
pub struct CharacterCollection {
    items: Vec<Character>,
    revision: u64,
}

impl CharacterCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(items: Vec<Character>) -> Self {
        Self { items, revision: 0 }
    }

    pub fn as_slice(&self) -> &[Character] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: u32) -> Option<&Character> {
        self.items.iter().find(|c| c.id == id)
    }

    /// Id a locally created record would receive: one past the largest id.
    pub fn next_id(&self) -> u32 {
        self.items.iter().map(|c| c.id).max().map_or(1, |max| max.saturating_add(1))
    }

    /// Replace the whole collection.
    pub fn replace(&mut self, items: Vec<Character>) {
        self.items = items;
        self.touch();
    }

    /// Merge a fetched page into the collection (see [`merge_by_id`]).
    pub fn merge_page(&mut self, page: Vec<Character>) {
        let merged = merge_by_id(&self.items, page);
        self.replace(merged);
    }

    /// Apply an edit, returning the id of the affected record.
    pub fn apply(&mut self, edit: CollectionEdit) -> CoreResult<u32> {
        match edit {
            CollectionEdit::Replace(updated) => {
                let id = updated.id;
                let slot = self
                    .items
                    .iter_mut()
                    .find(|c| c.id == id)
                    .ok_or(CoreError::RecordNotFound(id))?;
                *slot = updated;
                self.touch();
                Ok(id)
            }
            CollectionEdit::Remove(id) => {
                let index = self
                    .items
                    .iter()
                    .position(|c| c.id == id)
                    .ok_or(CoreError::RecordNotFound(id))?;
                self.items.remove(index);
                self.touch();
                Ok(id)
            }
            CollectionEdit::Insert(mut draft) => {
                if draft.name.trim().is_empty() {
                    return Err(CoreError::ValidationError("name must not be empty".into()));
                }
                let id = self.next_id();
                draft.id = id;
                self.items.push(draft);
                self.touch();
                Ok(id)
            }
        }
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CharacterStatus;

    fn character(id: u32, name: &str) -> Character {
        Character {
            id,
            name: name.to_string(),
            status: CharacterStatus::Alive,
            species: "Human".to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn merge_appends_new_ids_in_order() {
        let existing = vec![character(1, "Rick"), character(2, "Morty")];
        let merged = merge_by_id(&existing, vec![character(3, "Summer"), character(4, "Beth")]);
        let ids: Vec<u32> = merged.iter().map(|c| c.id).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
    }

    #[test]
    fn merge_duplicate_id_keeps_position_takes_last_value() {
        let existing = vec![character(1, "Rick"), character(2, "Morty")];
        let merged = merge_by_id(&existing, vec![character(1, "Rick (C-137)")]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].id, 1);
        assert_eq!(merged[0].name, "Rick (C-137)");
    }

    #[test]
    fn merge_duplicates_within_a_page() {
        let merged = merge_by_id(&[], vec![character(7, "first"), character(7, "second")]);
        assert_eq!(merged, vec![character(7, "second")]);
    }

    #[test]
    fn merge_is_idempotent_on_id() {
        let page = vec![character(1, "Rick"), character(2, "Morty")];
        let once = merge_by_id(&[], page.clone());
        let twice = merge_by_id(&once, page);
        assert_eq!(once, twice);
    }

    #[test]
    fn replace_edit_swaps_matching_record() {
        let mut collection = CharacterCollection::from_vec(vec![character(1, "Rick")]);
        let revision = collection.revision();
        let id = collection
            .apply(CollectionEdit::Replace(character(1, "Pickle Rick")))
            .unwrap();
        assert_eq!(id, 1);
        assert_eq!(collection.get(1).map(|c| c.name.as_str()), Some("Pickle Rick"));
        assert!(collection.revision() > revision);
    }

    #[test]
    fn edits_on_missing_ids_fail() {
        let mut collection = CharacterCollection::from_vec(vec![character(1, "Rick")]);
        assert!(matches!(
            collection.apply(CollectionEdit::Remove(5)),
            Err(CoreError::RecordNotFound(5))
        ));
        assert!(matches!(
            collection.apply(CollectionEdit::Replace(character(6, "Nobody"))),
            Err(CoreError::RecordNotFound(6))
        ));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn remove_edit() {
        let mut collection =
            CharacterCollection::from_vec(vec![character(5, "Jerry"), character(6, "Beth")]);
        collection.apply(CollectionEdit::Remove(5)).unwrap();
        assert!(collection.get(5).is_none());
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn insert_assigns_next_id() {
        let mut collection =
            CharacterCollection::from_vec(vec![character(3, "Summer"), character(10, "Squanchy")]);
        let id = collection.apply(CollectionEdit::Insert(character(0, "Noob-Noob"))).unwrap();
        assert_eq!(id, 11);
        assert_eq!(collection.get(11).map(|c| c.name.as_str()), Some("Noob-Noob"));
    }

    #[test]
    fn insert_into_empty_starts_at_one() {
        let mut collection = CharacterCollection::new();
        assert_eq!(collection.apply(CollectionEdit::Insert(character(42, "Unity"))).unwrap(), 1);
    }

    #[test]
    fn insert_rejects_blank_name() {
        let mut collection = CharacterCollection::new();
        assert!(matches!(
            collection.apply(CollectionEdit::Insert(character(0, "  "))),
            Err(CoreError::ValidationError(_))
        ));
        assert!(collection.is_empty());
    }
}
