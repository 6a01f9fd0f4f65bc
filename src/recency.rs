//! Bounded most-recent-first lists: search history and viewed drinks.
//!
//! Both lists live as JSON arrays inside a [`KeyValueStore`]. Reads never
//! fail from the caller's point of view: a missing, unreadable or malformed
//! value is an empty list. Write failures are logged and dropped.

use std::marker::PhantomData;

use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::broadcast;

use crate::models::DrinkListItem;
use crate::store::KeyValueStore;

pub trait RecencyPolicy {
    type Entry: Serialize + DeserializeOwned + Clone + Send + 'static;

    const STORAGE_KEY: &'static str;
    const CAPACITY: usize;
    /// Publish the new list to subscribers after every `add`.
    const NOTIFY_ON_ADD: bool;

    /// Canonical entry to store, or `None` if the entry must be ignored.
    fn prepare(entry: Self::Entry) -> Option<Self::Entry>;

    fn dedup_key(entry: &Self::Entry) -> String;
}

/// Search terms: keyed by lower-cased text, 10 kept.
#[derive(Debug)]
pub struct SearchTerms;

impl RecencyPolicy for SearchTerms {
    type Entry = String;

    const STORAGE_KEY: &'static str = "drink-search-history";
    const CAPACITY: usize = 10;
    const NOTIFY_ON_ADD: bool = false;

    fn prepare(entry: String) -> Option<String> {
        let t = entry.trim();
        (!t.is_empty()).then(|| t.to_string())
    }

    fn dedup_key(entry: &String) -> String {
        entry.trim().to_lowercase()
    }
}

/// Viewed drinks: keyed by drink id, 5 kept.
#[derive(Debug)]
pub struct ViewedDrinkList;

impl RecencyPolicy for ViewedDrinkList {
    type Entry = DrinkListItem;

    const STORAGE_KEY: &'static str = "drink-viewed-history";
    const CAPACITY: usize = 5;
    const NOTIFY_ON_ADD: bool = true;

    fn prepare(entry: DrinkListItem) -> Option<DrinkListItem> {
        (!entry.id.trim().is_empty() && !entry.name.trim().is_empty()).then_some(entry)
    }

    fn dedup_key(entry: &DrinkListItem) -> String {
        entry.id.clone()
    }
}

pub type SearchHistory<S> = RecencyStore<SearchTerms, S>;
pub type ViewedDrinks<S> = RecencyStore<ViewedDrinkList, S>;

pub struct RecencyStore<P: RecencyPolicy, S> {
    store: S,
    updates: broadcast::Sender<Vec<P::Entry>>,
    _policy: PhantomData<P>,
}

impl<P: RecencyPolicy, S: KeyValueStore> RecencyStore<P, S> {
    pub fn new(store: S) -> Self {
        let (updates, _) = broadcast::channel(16);
        Self {
            store,
            updates,
            _policy: PhantomData,
        }
    }

    /// Receive the new list after each update; dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<Vec<P::Entry>> {
        self.updates.subscribe()
    }

    /// Most recent first.
    pub fn list(&self) -> Vec<P::Entry> {
        let raw = match self.store.get(P::STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = P::STORAGE_KEY, error = %e, "reading recency list failed");
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(key = P::STORAGE_KEY, error = %e, "ignoring malformed recency list");
            Vec::new()
        })
    }

    /// Move `entry` to the front, dropping any older entry with the same key
    /// and anything beyond capacity. Invalid entries are ignored.
    pub fn add(&self, entry: P::Entry) {
        let Some(entry) = P::prepare(entry) else {
            tracing::trace!(key = P::STORAGE_KEY, "ignoring empty recency entry");
            return;
        };
        let key = P::dedup_key(&entry);

        let mut entries = self.list();
        entries.retain(|e| P::dedup_key(e) != key);
        entries.insert(0, entry);
        entries.truncate(P::CAPACITY);

        if !self.write(&entries) {
            return;
        }
        tracing::debug!(key = P::STORAGE_KEY, len = entries.len(), "recency list updated");

        if P::NOTIFY_ON_ADD {
            // no live subscribers is fine
            let _ = self.updates.send(entries);
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.store.remove(P::STORAGE_KEY) {
            tracing::warn!(key = P::STORAGE_KEY, error = %e, "clearing recency list failed");
        }
    }

    fn write(&self, entries: &[P::Entry]) -> bool {
        let json = match serde_json::to_string(entries) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(key = P::STORAGE_KEY, error = %e, "serializing recency list failed");
                return false;
            }
        };
        match self.store.set(P::STORAGE_KEY, &json) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key = P::STORAGE_KEY, error = %e, "saving recency list failed");
                false
            }
        }
    }
}
