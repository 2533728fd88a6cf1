use std::cell::RefCell;
use std::collections::HashMap;
use tracing::{debug, error};
use crate::error::{Result, StoreError};
use crate::models::VoteRecord;

pub const STORAGE_KEY: &str = "betterCyRideWeekendVotes";

/// A string key-value area such as the browser's `localStorage`.
pub trait StorageSlot {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Persistence for the vote list. Implementations swallow their own
/// failures: a broken slot reads as empty and a failed write is dropped.
pub trait VoteStore {
    fn load(&self) -> Vec<VoteRecord>;
    fn save(&self, votes: &[VoteRecord]);
    fn clear(&self);
}

impl<T: VoteStore + ?Sized> VoteStore for &T {
    fn load(&self) -> Vec<VoteRecord> { (**self).load() }
    fn save(&self, votes: &[VoteRecord]) { (**self).save(votes) }
    fn clear(&self) { (**self).clear() }
}

/// In-process slot. `with_quota` caps the total stored bytes so writes can
/// fail the way a full `localStorage` does.
#[derive(Debug, Default)]
pub struct MemorySlot {
    entries: RefCell<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(limit: usize) -> Self {
        Self { entries: RefCell::default(), quota: Some(limit) }
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn used_without(&self, key: &str) -> usize {
        self.entries.borrow().iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl StorageSlot for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if let Some(limit) = self.quota {
            let needed = self.used_without(key) + key.len() + value.len();
            if needed > limit {
                return Err(StoreError::Quota { needed, limit });
            }
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Keeps the whole vote list as one JSON array under a single key.
#[derive(Debug)]
pub struct JsonVoteStore<S> {
    slot: S,
    key: String,
}

impl<S: StorageSlot> JsonVoteStore<S> {
    pub fn new(slot: S) -> Self {
        Self::with_key(slot, STORAGE_KEY)
    }

    pub fn with_key(slot: S, key: impl Into<String>) -> Self {
        Self { slot, key: key.into() }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn try_load(&self) -> Result<Vec<VoteRecord>> {
        match self.slot.get(&self.key)? {
            Some(raw) if !raw.is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }

    pub fn try_save(&self, votes: &[VoteRecord]) -> Result<()> {
        let raw = serde_json::to_string(votes)?;
        self.slot.set(&self.key, &raw)
    }
}

impl<S: StorageSlot> VoteStore for JsonVoteStore<S> {
    fn load(&self) -> Vec<VoteRecord> {
        self.try_load().unwrap_or_else(|e| {
            error!("Error loading votes from {}: {}", self.key, e);
            Vec::new()
        })
    }

    fn save(&self, votes: &[VoteRecord]) {
        match self.try_save(votes) {
            Ok(()) => debug!("Saved {} votes to {}", votes.len(), self.key),
            Err(e) => error!("Error saving votes to {}: {}", self.key, e),
        }
    }

    fn clear(&self) {
        if let Err(e) = self.slot.remove(&self.key) {
            error!("Error clearing votes from {}: {}", self.key, e);
        }
    }
}
