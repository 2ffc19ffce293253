//! Draft persistence for creation forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each form type owns one storage slot. While the user edits, the whole form
//! struct is written to its slot as JSON once edits have been quiet for
//! [`DRAFT_DEBOUNCE_MS`]. On mount the slot is read back and, if present,
//! offered through a restore/dismiss prompt. Successful submit, an explicit
//! clear, or editing the form back to blank deletes the slot.
//!
//! TRADE-OFFS
//! ==========
//! One slot per form type: a new draft silently replaces the previous one.
//! There is no versioning, size limit, or encryption. A slot that no longer
//! parses is logged, deleted, and treated as "no draft".

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::debounce::Debouncer;
use super::ui_persistence;

/// Quiet period after the last edit before the draft is written.
pub const DRAFT_DEBOUNCE_MS: u64 = 1000;

/// Form types that persist drafts, one storage slot each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DraftKind {
    Callout,
    Event,
}

impl DraftKind {
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Callout => "trackside.draft.callout",
            Self::Event => "trackside.draft.event",
        }
    }
}

/// Raw key/value storage backing draft slots.
pub trait DraftStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage`; inert outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl DraftStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        ui_persistence::load_raw(key)
    }

    fn set(&self, key: &str, value: &str) {
        ui_persistence::save_raw(key, value);
    }

    fn remove(&self, key: &str) {
        ui_persistence::remove(key);
    }
}

/// The storage slot of one form type.
#[derive(Clone, Debug)]
pub struct DraftSlot<S = LocalStorage> {
    store: S,
    kind: DraftKind,
}

impl DraftSlot<LocalStorage> {
    pub fn browser(kind: DraftKind) -> Self {
        Self::new(LocalStorage, kind)
    }
}

impl<S: DraftStore> DraftSlot<S> {
    pub fn new(store: S, kind: DraftKind) -> Self {
        Self { store, kind }
    }

    pub fn kind(&self) -> DraftKind {
        self.kind
    }

    /// Read the stored draft. Malformed content clears the slot.
    pub fn load<T: DeserializeOwned>(&self) -> Option<T> {
        let key = self.kind.storage_key();
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("discarding malformed draft in {key}: {e}");
                self.store.remove(key);
                None
            }
        }
    }

    /// Overwrite the slot with `value`.
    pub fn save<T: Serialize>(&self, value: &T) {
        let key = self.kind.storage_key();
        match serde_json::to_string(value) {
            Ok(raw) => self.store.set(key, &raw),
            Err(e) => log::warn!("could not serialize draft for {key}: {e}"),
        }
    }

    pub fn clear(&self) {
        self.store.remove(self.kind.storage_key());
    }
}

/// Recovery prompt state for a form.
///
/// `pending` holds a draft found on mount until the user restores or
/// dismisses it; `unsaved_changes` stays set while the slot holds content that
/// has not been submitted.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftRecovery<T> {
    pending: Option<T>,
    unsaved_changes: bool,
}

impl<T> Default for DraftRecovery<T> {
    fn default() -> Self {
        Self {
            pending: None,
            unsaved_changes: false,
        }
    }
}

impl<T: DeserializeOwned> DraftRecovery<T> {
    /// Check the slot on mount.
    pub fn from_slot<S: DraftStore>(slot: &DraftSlot<S>) -> Self {
        let pending = slot.load::<T>();
        Self {
            unsaved_changes: pending.is_some(),
            pending,
        }
    }
}

impl<T> DraftRecovery<T> {
    /// Whether the restore/dismiss prompt should be shown.
    pub fn show_prompt(&self) -> bool {
        self.pending.is_some()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    /// Hand the recovered draft to the form. The slot is kept.
    pub fn restore(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drop the prompt and delete the slot. Used for "Dismiss", explicit
    /// clear, and successful submit.
    pub fn discard<S: DraftStore>(&mut self, slot: &DraftSlot<S>) {
        self.pending = None;
        self.unsaved_changes = false;
        slot.clear();
    }

    pub fn mark_saved(&mut self) {
        self.unsaved_changes = true;
    }

    /// The slot was emptied because the form went back to its blank state.
    /// A pending draft from an earlier visit stays on offer.
    pub fn mark_cleared(&mut self) {
        self.unsaved_changes = false;
    }
}

/// What a settled edit does to the slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftAction {
    Save,
    /// The form is blank again; an empty form is never stored.
    Clear,
}

pub fn draft_action<T: PartialEq + Default>(value: &T) -> DraftAction {
    if *value == T::default() {
        DraftAction::Clear
    } else {
        DraftAction::Save
    }
}

/// Apply the edit holding `ticket` once its quiet period has elapsed.
///
/// Returns `false` without touching the slot when a newer edit superseded it.
pub fn settle_edit<T, S>(
    debouncer: &Debouncer,
    ticket: u64,
    slot: &DraftSlot<S>,
    value: &T,
    recovery: &mut DraftRecovery<T>,
) -> bool
where
    T: Serialize + PartialEq + Default,
    S: DraftStore,
{
    if !debouncer.is_current(ticket) {
        return false;
    }
    match draft_action(value) {
        DraftAction::Save => {
            slot.save(value);
            recovery.mark_saved();
        }
        DraftAction::Clear => {
            slot.clear();
            recovery.mark_cleared();
        }
    }
    true
}

/// Wire draft recovery and debounced auto-save for a form signal.
///
/// The slot is read after hydration so server and client markup agree. Every
/// later change of `form` schedules [`settle_edit`]: a non-empty form is
/// saved, and a form edited back to blank empties the slot.
pub fn use_draft<T>(kind: DraftKind, form: RwSignal<T>) -> RwSignal<DraftRecovery<T>>
where
    T: Serialize + DeserializeOwned + Clone + Default + PartialEq + Send + Sync + 'static,
{
    let recovery = RwSignal::new(DraftRecovery::<T>::default());
    Effect::new(move || {
        recovery.set(DraftRecovery::from_slot(&DraftSlot::browser(kind)));
    });

    let debouncer = StoredValue::new(Debouncer::default());
    Effect::new(move |prev: Option<()>| {
        let value = form.get();
        if prev.is_none() {
            return;
        }
        let mut ticket = 0;
        debouncer.update_value(|d| ticket = d.bump());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(DRAFT_DEBOUNCE_MS)).await;
            let current = debouncer.get_value();
            let slot = DraftSlot::browser(kind);
            recovery.update(|r| {
                settle_edit(&current, ticket, &slot, &value, r);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (value, ticket);
    });

    recovery
}

/// Delete the form's draft and reset the prompt (submit success or "Clear").
pub fn discard_draft<T>(kind: DraftKind, recovery: RwSignal<DraftRecovery<T>>)
where
    T: Send + Sync + 'static,
{
    let slot = DraftSlot::browser(kind);
    recovery.update(|r| r.discard(&slot));
}
