//! The dashboard's state container.
//!
//! A [`Store`] owns the seven entity collections and is the only way to change
//! them. It is built once at startup around a [`Storage`] backend and handed to
//! consumers by reference. Every mutation notifies subscribers and marks the
//! store dirty; writing back to storage is an explicit step ([`Store::flush`]
//! or [`Store::persist`]) so a burst of edits costs a single write.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::models::{
    Collection, Entity, FinanceDraft, FinanceEntry, FinancePatch, HabitDraft, HabitEntry,
    HabitPatch, HealthDraft, HealthEntry, HealthPatch, InterviewDraft, InterviewPatch,
    InterviewSession, JobApplication, JobDraft, JobPatch, LearningDraft, LearningEntry,
    LearningPatch, MigraineDraft, MigraineEntry, MigrainePatch,
};
use crate::storage::{Storage, StorageError};

/// Storage key the whole store is saved under
pub const DEFAULT_STORAGE_KEY: &str = "career-dashboard-store";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),
    #[error("Failed to encode or decode store data: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Everything the store persists. Keys missing from a stored blob come back as
/// empty collections; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub jobs: Vec<JobApplication>,
    pub interviews: Vec<InterviewSession>,
    pub habits: Vec<HabitEntry>,
    pub finances: Vec<FinanceEntry>,
    pub health: Vec<HealthEntry>,
    pub learning: Vec<LearningEntry>,
    pub migraines: Vec<MigraineEntry>,
}

impl Snapshot {
    pub fn len(&self, collection: Collection) -> usize {
        match collection {
            Collection::Jobs => self.jobs.len(),
            Collection::Interviews => self.interviews.len(),
            Collection::Habits => self.habits.len(),
            Collection::Finances => self.finances.len(),
            Collection::Health => self.health.len(),
            Collection::Learning => self.learning.len(),
            Collection::Migraines => self.migraines.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Collection::ALL.iter().all(|c| self.len(*c) == 0)
    }
}

/// An entity type that has a home in [`Snapshot`]
pub trait StoredEntity: Entity + Sized {
    fn items(state: &Snapshot) -> &Vec<Self>;
    fn items_mut(state: &mut Snapshot) -> &mut Vec<Self>;
}

impl StoredEntity for JobApplication {
    fn items(state: &Snapshot) -> &Vec<Self> {
        &state.jobs
    }
    fn items_mut(state: &mut Snapshot) -> &mut Vec<Self> {
        &mut state.jobs
    }
}

impl StoredEntity for InterviewSession {
    fn items(state: &Snapshot) -> &Vec<Self> {
        &state.interviews
    }
    fn items_mut(state: &mut Snapshot) -> &mut Vec<Self> {
        &mut state.interviews
    }
}

impl StoredEntity for HabitEntry {
    fn items(state: &Snapshot) -> &Vec<Self> {
        &state.habits
    }
    fn items_mut(state: &mut Snapshot) -> &mut Vec<Self> {
        &mut state.habits
    }
}

impl StoredEntity for FinanceEntry {
    fn items(state: &Snapshot) -> &Vec<Self> {
        &state.finances
    }
    fn items_mut(state: &mut Snapshot) -> &mut Vec<Self> {
        &mut state.finances
    }
}

impl StoredEntity for HealthEntry {
    fn items(state: &Snapshot) -> &Vec<Self> {
        &state.health
    }
    fn items_mut(state: &mut Snapshot) -> &mut Vec<Self> {
        &mut state.health
    }
}

impl StoredEntity for LearningEntry {
    fn items(state: &Snapshot) -> &Vec<Self> {
        &state.learning
    }
    fn items_mut(state: &mut Snapshot) -> &mut Vec<Self> {
        &mut state.learning
    }
}

impl StoredEntity for MigraineEntry {
    fn items(state: &Snapshot) -> &Vec<Self> {
        &state.migraines
    }
    fn items_mut(state: &mut Snapshot) -> &mut Vec<Self> {
        &mut state.migraines
    }
}

/// What a subscriber is told after each store operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added { collection: Collection, id: String },
    Updated { collection: Collection, id: String, matched: bool },
    Deleted { collection: Collection, id: String, removed: bool },
    Hydrated,
    Imported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Change)>;

pub struct Store<S: Storage> {
    storage: S,
    key: String,
    state: Snapshot,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    revision: u64,
    persisted_revision: u64,
}

impl<S: Storage> Store<S> {
    /// Empty store saving under `key`. Call [`Store::hydrate`] to load what is already stored.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            state: Snapshot::default(),
            listeners: Vec::new(),
            next_subscription: 0,
            revision: 0,
            persisted_revision: 0,
        }
    }

    pub fn with_default_key(storage: S) -> Self {
        Self::new(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.state
    }

    /// Number of mutations applied since the store was created
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True when in-memory state has changes that have not been written yet
    pub fn is_dirty(&self) -> bool {
        self.revision != self.persisted_revision
    }

    // -----------------------------------------------------------------------
    // Subscriptions
    // -----------------------------------------------------------------------

    pub fn subscribe(&mut self, listener: impl FnMut(&Change) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, change: Change) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
    }

    // -----------------------------------------------------------------------
    // Generic collection operations
    // -----------------------------------------------------------------------

    pub fn list<E: StoredEntity>(&self) -> &[E] {
        E::items(&self.state)
    }

    pub fn get<E: StoredEntity>(&self, id: &str) -> Option<&E> {
        E::items(&self.state).iter().find(|e| e.id() == id)
    }

    fn add<E: StoredEntity>(&mut self, draft: E::Draft) -> String {
        let id = Self::generate_id(E::items(&self.state));
        E::items_mut(&mut self.state).push(E::from_draft(id.clone(), draft));
        self.revision += 1;
        debug!(collection = %E::COLLECTION, %id, "entry added");
        self.notify(Change::Added {
            collection: E::COLLECTION,
            id: id.clone(),
        });
        id
    }

    fn update<E: StoredEntity>(&mut self, id: &str, patch: E::Patch) -> bool {
        let matched = match E::items_mut(&mut self.state).iter_mut().find(|e| e.id() == id) {
            Some(entry) => {
                entry.apply(patch);
                true
            }
            None => false,
        };
        self.revision += 1;
        debug!(collection = %E::COLLECTION, %id, matched, "entry updated");
        self.notify(Change::Updated {
            collection: E::COLLECTION,
            id: id.to_string(),
            matched,
        });
        matched
    }

    fn delete<E: StoredEntity>(&mut self, id: &str) -> bool {
        let items = E::items_mut(&mut self.state);
        let before = items.len();
        items.retain(|e| e.id() != id);
        let removed = items.len() != before;
        self.revision += 1;
        debug!(collection = %E::COLLECTION, %id, removed, "entry deleted");
        self.notify(Change::Deleted {
            collection: E::COLLECTION,
            id: id.to_string(),
            removed,
        });
        removed
    }

    /// UUID v4 as 32 hex characters, re-rolled in the unlikely case it is taken
    fn generate_id<E: Entity>(existing: &[E]) -> String {
        loop {
            let id = Uuid::new_v4().simple().to_string();
            if !existing.iter().any(|e| e.id() == id) {
                return id;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Named operations
    // -----------------------------------------------------------------------

    pub fn jobs(&self) -> &[JobApplication] {
        &self.state.jobs
    }

    pub fn add_job(&mut self, job: JobDraft) -> String {
        self.add::<JobApplication>(job)
    }

    pub fn update_job(&mut self, id: &str, patch: JobPatch) -> bool {
        self.update::<JobApplication>(id, patch)
    }

    pub fn delete_job(&mut self, id: &str) -> bool {
        self.delete::<JobApplication>(id)
    }

    pub fn interviews(&self) -> &[InterviewSession] {
        &self.state.interviews
    }

    pub fn add_interview(&mut self, interview: InterviewDraft) -> String {
        self.add::<InterviewSession>(interview)
    }

    pub fn update_interview(&mut self, id: &str, patch: InterviewPatch) -> bool {
        self.update::<InterviewSession>(id, patch)
    }

    pub fn delete_interview(&mut self, id: &str) -> bool {
        self.delete::<InterviewSession>(id)
    }

    pub fn habits(&self) -> &[HabitEntry] {
        &self.state.habits
    }

    pub fn add_habit(&mut self, habit: HabitDraft) -> String {
        self.add::<HabitEntry>(habit)
    }

    pub fn update_habit(&mut self, id: &str, patch: HabitPatch) -> bool {
        self.update::<HabitEntry>(id, patch)
    }

    pub fn delete_habit(&mut self, id: &str) -> bool {
        self.delete::<HabitEntry>(id)
    }

    pub fn finances(&self) -> &[FinanceEntry] {
        &self.state.finances
    }

    pub fn add_finance(&mut self, finance: FinanceDraft) -> String {
        self.add::<FinanceEntry>(finance)
    }

    pub fn update_finance(&mut self, id: &str, patch: FinancePatch) -> bool {
        self.update::<FinanceEntry>(id, patch)
    }

    pub fn delete_finance(&mut self, id: &str) -> bool {
        self.delete::<FinanceEntry>(id)
    }

    pub fn health(&self) -> &[HealthEntry] {
        &self.state.health
    }

    pub fn add_health(&mut self, health: HealthDraft) -> String {
        self.add::<HealthEntry>(health)
    }

    pub fn update_health(&mut self, id: &str, patch: HealthPatch) -> bool {
        self.update::<HealthEntry>(id, patch)
    }

    pub fn delete_health(&mut self, id: &str) -> bool {
        self.delete::<HealthEntry>(id)
    }

    pub fn learning(&self) -> &[LearningEntry] {
        &self.state.learning
    }

    /// New learning entries always start out as non-favourites
    pub fn add_learning(&mut self, learning: LearningDraft) -> String {
        self.add::<LearningEntry>(learning)
    }

    pub fn update_learning(&mut self, id: &str, patch: LearningPatch) -> bool {
        self.update::<LearningEntry>(id, patch)
    }

    pub fn delete_learning(&mut self, id: &str) -> bool {
        self.delete::<LearningEntry>(id)
    }

    pub fn migraines(&self) -> &[MigraineEntry] {
        &self.state.migraines
    }

    pub fn add_migraine(&mut self, migraine: MigraineDraft) -> String {
        self.add::<MigraineEntry>(migraine)
    }

    pub fn update_migraine(&mut self, id: &str, patch: MigrainePatch) -> bool {
        self.update::<MigraineEntry>(id, patch)
    }

    pub fn delete_migraine(&mut self, id: &str) -> bool {
        self.delete::<MigraineEntry>(id)
    }

    /// Delete by collection name, for consumers that only know the collection at runtime
    pub fn delete_from(&mut self, collection: Collection, id: &str) -> bool {
        match collection {
            Collection::Jobs => self.delete_job(id),
            Collection::Interviews => self.delete_interview(id),
            Collection::Habits => self.delete_habit(id),
            Collection::Finances => self.delete_finance(id),
            Collection::Health => self.delete_health(id),
            Collection::Learning => self.delete_learning(id),
            Collection::Migraines => self.delete_migraine(id),
        }
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Serialize the seven collections to the blob format
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(&self.state)?)
    }

    /// Load the stored blob, replacing the current state. Returns false when
    /// nothing is stored under the key.
    pub fn try_hydrate(&mut self) -> Result<bool, StoreError> {
        let blob = match self.storage.get_item(&self.key)? {
            Some(blob) if !blob.trim().is_empty() => blob,
            _ => return Ok(false),
        };

        let snapshot: Snapshot = serde_json::from_str(&blob)?;
        self.state = snapshot;
        self.persisted_revision = self.revision;
        self.notify(Change::Hydrated);
        Ok(true)
    }

    /// Like [`Store::try_hydrate`], but a failure is only logged and the
    /// current state is kept
    pub fn hydrate(&mut self) {
        match self.try_hydrate() {
            Ok(true) => info!(key = %self.key, "store hydrated"),
            Ok(false) => debug!(key = %self.key, "nothing stored, starting empty"),
            Err(e) => error!(key = %self.key, error = %e, "failed to hydrate store"),
        }
    }

    /// Replace the whole state with a blob supplied by the caller. The store is
    /// left dirty so the next flush writes the imported data.
    pub fn import_json(&mut self, blob: &str) -> Result<(), StoreError> {
        let snapshot: Snapshot = serde_json::from_str(blob)?;
        self.state = snapshot;
        self.revision += 1;
        self.notify(Change::Imported);
        Ok(())
    }

    /// Write the seven collections under the store key, overwriting what was there
    pub fn try_persist(&mut self) -> Result<(), StoreError> {
        let blob = self.to_json()?;
        self.storage.set_item(&self.key, &blob)?;
        self.persisted_revision = self.revision;
        debug!(key = %self.key, bytes = blob.len(), "store persisted");
        Ok(())
    }

    /// Like [`Store::try_persist`], but a failure is only logged. The in-memory
    /// state is untouched and stays dirty.
    pub fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            error!(key = %self.key, error = %e, "failed to persist store");
        }
    }

    /// Persist once if anything changed since the last successful write
    pub fn flush(&mut self) {
        if self.is_dirty() {
            self.persist();
        }
    }
}
