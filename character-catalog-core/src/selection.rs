//! Selection and overlay state machine
//!
//! ```text
//!            select                 request_edit
//!   Idle ─────────────▶ DetailOpen ─────────────▶ EditOpen
//!    ▲  ◀───────────────    │   ◀──────────────────  │
//!    │     close_detail     │        select          │
//!    │                      │                        │
//!    └──────────────────────┴── cancel_edit / save_edit
//!
//!   Idle ── request_create ──▶ CreateOpen ── cancel_create / save_create ──▶ Idle
//! ```
//!
//! A confirmed delete forces `Idle` from any state. Transitions not listed are
//! ignored.

use serde::Serialize;

use crate::collection::CollectionEdit;
use crate::types::Character;

/// Which overlay is visible, carrying the selected record id where there is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Overlay {
    #[default]
    Idle,
    DetailOpen(u32),
    EditOpen(u32),
    CreateOpen,
}

/// Selection state for the list.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    overlay: Overlay,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    /// Id of the selected record, if any.
    pub fn selected_id(&self) -> Option<u32> {
        match self.overlay {
            Overlay::DetailOpen(id) | Overlay::EditOpen(id) => Some(id),
            Overlay::Idle | Overlay::CreateOpen => None,
        }
    }

    /// Open the detail overlay for `record`.
    pub fn select(&mut self, record: &Character) -> bool {
        match self.overlay {
            Overlay::Idle | Overlay::DetailOpen(_) | Overlay::EditOpen(_) => {
                self.overlay = Overlay::DetailOpen(record.id);
                true
            }
            Overlay::CreateOpen => false,
        }
    }

    pub fn close_detail(&mut self) -> bool {
        self.transition(|o| matches!(o, Overlay::DetailOpen(_)).then_some(Overlay::Idle))
    }

    /// Swap the detail overlay for the edit overlay, keeping the selection.
    pub fn request_edit(&mut self) -> bool {
        self.transition(|o| match o {
            Overlay::DetailOpen(id) => Some(Overlay::EditOpen(id)),
            _ => None,
        })
    }

    pub fn cancel_edit(&mut self) -> bool {
        self.transition(|o| matches!(o, Overlay::EditOpen(_)).then_some(Overlay::Idle))
    }

    /// Close the edit overlay and hand back the replacement for the owner to apply.
    pub fn save_edit(&mut self, updated: Character) -> Option<CollectionEdit> {
        self.cancel_edit().then_some(CollectionEdit::Replace(updated))
    }

    /// Delete behind a synchronous confirmation gate.
    ///
    /// `None` and a refused confirmation are both no-ops.
    pub fn request_delete<F>(&mut self, id: Option<u32>, confirm: F) -> Option<CollectionEdit>
    where
        F: FnOnce(u32) -> bool,
    {
        let id = id?;
        confirm(id).then(|| self.confirm_delete(id))
    }

    /// Delete after the caller collected confirmation itself.
    pub fn confirm_delete(&mut self, id: u32) -> CollectionEdit {
        self.overlay = Overlay::Idle;
        CollectionEdit::Remove(id)
    }

    pub fn request_create(&mut self) -> bool {
        self.transition(|o| matches!(o, Overlay::Idle).then_some(Overlay::CreateOpen))
    }

    pub fn cancel_create(&mut self) -> bool {
        self.transition(|o| matches!(o, Overlay::CreateOpen).then_some(Overlay::Idle))
    }

    /// Close the create overlay and hand back the insert for the owner to apply.
    pub fn save_create(&mut self, draft: Character) -> Option<CollectionEdit> {
        self.cancel_create().then_some(CollectionEdit::Insert(draft))
    }

    /// Drop back to `Idle` unconditionally.
    pub fn reset(&mut self) {
        self.overlay = Overlay::Idle;
    }

    fn transition(&mut self, next: impl FnOnce(Overlay) -> Option<Overlay>) -> bool {
        match next(self.overlay) {
            Some(overlay) => {
                self.overlay = overlay;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CharacterStatus;

    fn character(id: u32) -> Character {
        Character {
            id,
            name: format!("Character {id}"),
            status: CharacterStatus::Alive,
            species: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn select_then_close() {
        let mut state = SelectionState::new();
        assert!(state.select(&character(3)));
        assert_eq!(state.overlay(), Overlay::DetailOpen(3));
        assert_eq!(state.selected_id(), Some(3));
        assert!(state.close_detail());
        assert_eq!(state.overlay(), Overlay::Idle);
        assert_eq!(state.selected_id(), None);
    }

    #[test]
    fn edit_keeps_selection_and_hides_detail() {
        let mut state = SelectionState::new();
        state.select(&character(3));
        assert!(state.request_edit());
        assert_eq!(state.overlay(), Overlay::EditOpen(3));
        assert_eq!(state.selected_id(), Some(3));
    }

    #[test]
    fn save_edit_returns_replace_and_goes_idle() {
        let mut state = SelectionState::new();
        state.select(&character(3));
        state.request_edit();

        let mut updated = character(3);
        updated.name = "Renamed".to_string();
        assert_eq!(
            state.save_edit(updated.clone()),
            Some(CollectionEdit::Replace(updated))
        );
        assert_eq!(state.overlay(), Overlay::Idle);
    }

    #[test]
    fn cancel_edit_goes_idle() {
        let mut state = SelectionState::new();
        state.select(&character(3));
        state.request_edit();
        assert!(state.cancel_edit());
        assert_eq!(state.overlay(), Overlay::Idle);
    }

    #[test]
    fn select_from_edit_reopens_detail() {
        let mut state = SelectionState::new();
        state.select(&character(3));
        state.request_edit();
        assert!(state.select(&character(4)));
        assert_eq!(state.overlay(), Overlay::DetailOpen(4));
    }

    #[test]
    fn illegal_transitions_are_ignored() {
        let mut state = SelectionState::new();
        assert!(!state.request_edit());
        assert!(!state.cancel_edit());
        assert!(!state.close_detail());
        assert_eq!(state.save_edit(character(1)), None);
        assert_eq!(state.overlay(), Overlay::Idle);

        state.select(&character(1));
        assert!(!state.cancel_edit());
        assert!(!state.request_create());
        assert_eq!(state.overlay(), Overlay::DetailOpen(1));
    }

    #[test]
    fn confirmed_delete_removes_and_goes_idle() {
        let mut state = SelectionState::new();
        state.select(&character(5));
        let edit = state.request_delete(Some(5), |_| true);
        assert_eq!(edit, Some(CollectionEdit::Remove(5)));
        assert_eq!(state.overlay(), Overlay::Idle);
    }

    #[test]
    fn refused_delete_changes_nothing() {
        let mut state = SelectionState::new();
        state.select(&character(5));
        assert_eq!(state.request_delete(Some(5), |_| false), None);
        assert_eq!(state.overlay(), Overlay::DetailOpen(5));
    }

    #[test]
    fn delete_without_selection_is_noop() {
        let mut state = SelectionState::new();
        let mut asked = false;
        assert_eq!(
            state.request_delete(None, |_| {
                asked = true;
                true
            }),
            None
        );
        assert!(!asked);
    }

    #[test]
    fn create_flow() {
        let mut state = SelectionState::new();
        assert!(state.request_create());
        assert_eq!(state.overlay(), Overlay::CreateOpen);
        assert!(!state.select(&character(1)));

        let draft = character(0);
        assert_eq!(
            state.save_create(draft.clone()),
            Some(CollectionEdit::Insert(draft))
        );
        assert_eq!(state.overlay(), Overlay::Idle);
    }
}
