use std::cell::RefCell;
use std::collections::HashMap;

use super::*;
use crate::state::callout::CalloutForm;
use crate::state::event::EventForm;

// =============================================================
// Helpers
// =============================================================

#[derive(Debug, Default)]
struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl DraftStore for &MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Drives the auto-save path: every edit bumps the debouncer, then each
/// scheduled edit settles in order and only the latest ticket touches the slot.
fn edit_then_settle<T>(
    slot: &DraftSlot<&MemoryStore>,
    recovery: &mut DraftRecovery<T>,
    edits: &[T],
) -> Vec<bool>
where
    T: Serialize + PartialEq + Default,
{
    let mut debouncer = Debouncer::default();
    let tickets: Vec<u64> = edits.iter().map(|_| debouncer.bump()).collect();
    tickets
        .iter()
        .zip(edits)
        .map(|(ticket, value)| settle_edit(&debouncer, *ticket, slot, value, recovery))
        .collect()
}

fn drag_night() -> CalloutForm {
    CalloutForm {
        title: "Drag Night".to_owned(),
        ..CalloutForm::default()
    }
}

// =============================================================
// Slots
// =============================================================

#[test]
fn storage_keys_are_distinct_per_form_type() {
    assert_ne!(DraftKind::Callout.storage_key(), DraftKind::Event.storage_key());
}

#[test]
fn settled_edits_persist_latest_form_state() {
    let store = MemoryStore::default();
    let slot = DraftSlot::new(&store, DraftKind::Callout);
    let first = CalloutForm {
        title: "Drag".to_owned(),
        ..CalloutForm::default()
    };
    let mut recovery = DraftRecovery::default();
    let applied = edit_then_settle(&slot, &mut recovery, &[first, drag_night()]);
    assert_eq!(applied, vec![false, true]);
    assert_eq!(slot.load::<CalloutForm>(), Some(drag_night()));
    assert_eq!(store.entries.borrow().len(), 1);
    assert!(recovery.has_unsaved_changes());
}

#[test]
fn event_form_drafts_round_trip_through_slot() {
    let store = MemoryStore::default();
    let slot = DraftSlot::new(&store, DraftKind::Event);
    let form = EventForm {
        title: "Test & Tune".to_owned(),
        date: "2026-06-05".to_owned(),
        ..EventForm::default()
    };
    edit_then_settle(&slot, &mut DraftRecovery::default(), std::slice::from_ref(&form));
    assert_eq!(slot.load::<EventForm>(), Some(form));
}

#[test]
fn new_draft_overwrites_previous_one() {
    let store = MemoryStore::default();
    let slot = DraftSlot::new(&store, DraftKind::Callout);
    slot.save(&drag_night());
    let replacement = CalloutForm {
        title: "Roll Race".to_owned(),
        ..CalloutForm::default()
    };
    slot.save(&replacement);
    assert_eq!(slot.load::<CalloutForm>(), Some(replacement));
}

#[test]
fn malformed_draft_is_cleared_and_treated_as_absent() {
    let store = MemoryStore::default();
    (&store).set(DraftKind::Callout.storage_key(), "{not json");
    let slot = DraftSlot::new(&store, DraftKind::Callout);
    assert_eq!(slot.load::<CalloutForm>(), None);
    assert!(store.entries.borrow().is_empty());
}

#[test]
fn wrong_shape_draft_is_cleared() {
    let store = MemoryStore::default();
    (&store).set(DraftKind::Event.storage_key(), "[1,2,3]");
    let recovery = DraftRecovery::<EventForm>::from_slot(&DraftSlot::new(&store, DraftKind::Event));
    assert!(!recovery.show_prompt());
    assert!(!recovery.has_unsaved_changes());
    assert!(store.entries.borrow().is_empty());
}

#[test]
fn missing_draft_yields_no_prompt() {
    let store = MemoryStore::default();
    let recovery = DraftRecovery::<CalloutForm>::from_slot(&DraftSlot::new(&store, DraftKind::Callout));
    assert!(!recovery.show_prompt());
}

#[test]
fn blank_form_clears_and_filled_form_saves() {
    assert_eq!(draft_action(&CalloutForm::default()), DraftAction::Clear);
    assert_eq!(draft_action(&drag_night()), DraftAction::Save);
}

#[test]
fn editing_back_to_blank_clears_the_slot() {
    let store = MemoryStore::default();
    let slot = DraftSlot::new(&store, DraftKind::Callout);
    let mut recovery = DraftRecovery::default();
    let typed = CalloutForm {
        title: "D".to_owned(),
        ..CalloutForm::default()
    };

    edit_then_settle(&slot, &mut recovery, std::slice::from_ref(&typed));
    assert_eq!(slot.load::<CalloutForm>(), Some(typed));
    assert!(recovery.has_unsaved_changes());

    edit_then_settle(&slot, &mut recovery, &[CalloutForm::default()]);
    assert_eq!(slot.load::<CalloutForm>(), None);
    assert!(!recovery.has_unsaved_changes());

    let reloaded = DraftRecovery::<CalloutForm>::from_slot(&slot);
    assert!(!reloaded.show_prompt());
}

#[test]
fn superseded_edit_leaves_slot_untouched() {
    let store = MemoryStore::default();
    let slot = DraftSlot::new(&store, DraftKind::Callout);
    let mut recovery = DraftRecovery::default();
    let mut debouncer = Debouncer::default();
    let stale = debouncer.bump();
    debouncer.bump();

    assert!(!settle_edit(&debouncer, stale, &slot, &drag_night(), &mut recovery));
    assert!(store.entries.borrow().is_empty());
    assert!(!recovery.has_unsaved_changes());
}

#[test]
fn blank_edit_keeps_pending_draft_on_offer() {
    let store = MemoryStore::default();
    let slot = DraftSlot::new(&store, DraftKind::Callout);
    slot.save(&drag_night());
    let mut recovery = DraftRecovery::<CalloutForm>::from_slot(&slot);

    edit_then_settle(&slot, &mut recovery, &[CalloutForm::default()]);
    assert!(recovery.show_prompt());
    assert_eq!(recovery.restore().map(|d| d.title), Some("Drag Night".to_owned()));
}

// =============================================================
// Recovery prompt
// =============================================================

#[test]
fn reload_with_draft_shows_prompt_and_restore_repopulates() {
    let store = MemoryStore::default();
    let slot = DraftSlot::new(&store, DraftKind::Callout);
    slot.save(&drag_night());

    let mut recovery = DraftRecovery::<CalloutForm>::from_slot(&slot);
    assert!(recovery.show_prompt());
    assert!(recovery.has_unsaved_changes());

    let restored = recovery.restore().unwrap();
    assert_eq!(restored.title, "Drag Night");
    assert!(!recovery.show_prompt());
    assert!(slot.load::<CalloutForm>().is_some());
}

#[test]
fn dismiss_leaves_form_empty_and_discards_slot() {
    let store = MemoryStore::default();
    let slot = DraftSlot::new(&store, DraftKind::Callout);
    slot.save(&drag_night());

    let form = CalloutForm::default();
    let mut recovery = DraftRecovery::<CalloutForm>::from_slot(&slot);
    recovery.discard(&slot);

    assert!(form.title.is_empty());
    assert!(!recovery.show_prompt());
    assert!(!recovery.has_unsaved_changes());
    assert_eq!(slot.load::<CalloutForm>(), None);
}

#[test]
fn successful_submit_deletes_draft() {
    let store = MemoryStore::default();
    let slot = DraftSlot::new(&store, DraftKind::Event);
    let mut recovery = DraftRecovery::<EventForm>::default();
    slot.save(&EventForm {
        title: "Night Drags".to_owned(),
        ..EventForm::default()
    });
    recovery.mark_saved();
    assert!(recovery.has_unsaved_changes());

    recovery.discard(&slot);
    assert!(!recovery.has_unsaved_changes());
    assert!(store.entries.borrow().is_empty());
}

#[test]
fn clearing_one_form_keeps_the_other_slot() {
    let store = MemoryStore::default();
    let callout = DraftSlot::new(&store, DraftKind::Callout);
    let event = DraftSlot::new(&store, DraftKind::Event);
    callout.save(&drag_night());
    event.save(&EventForm::default());
    callout.clear();
    assert_eq!(callout.load::<CalloutForm>(), None);
    assert_eq!(event.load::<EventForm>(), Some(EventForm::default()));
}
