//! Process-local data store
//!
//! Three ordered collections live behind `parking_lot` locks so handlers on
//! different runtime threads can share one [`MemoryStore`]. Nothing here is
//! persisted and nothing enforces references between collections; callers
//! validate before inserting.

use crate::repositories::UserRecord;
use fittrack_shared::{FoodItem, LogEntry};
use parking_lot::RwLock;

/// An ordered, lock-guarded list of records
#[derive(Debug)]
pub struct Collection<T> {
    items: RwLock<Vec<T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Clone> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record in insertion order
    pub fn all(&self) -> Vec<T> {
        self.items.read().clone()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    pub fn append(&self, item: T) {
        self.items.write().push(item);
    }

    /// Append unless an existing record matches `conflicts`
    ///
    /// The check and the push happen under one write lock. Returns whether
    /// the record was added.
    pub fn append_unless<P>(&self, item: T, conflicts: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        let mut items = self.items.write();
        if items.iter().any(conflicts) {
            return false;
        }
        items.push(item);
        true
    }

    pub fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.items.read().iter().find(|item| predicate(item)).cloned()
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.items
            .read()
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    /// Mutate the first matching record in place and return its new value
    pub fn update<P, F>(&self, predicate: P, apply: F) -> Option<T>
    where
        P: Fn(&T) -> bool,
        F: FnOnce(&mut T),
    {
        let mut items = self.items.write();
        let item = items.iter_mut().find(|item| predicate(item))?;
        apply(item);
        Some(item.clone())
    }

    /// Remove the first matching record, preserving the order of the rest
    pub fn remove<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        let mut items = self.items.write();
        let index = items.iter().position(|item| predicate(item))?;
        Some(items.remove(index))
    }

    /// Swap in a whole new list
    pub fn replace_all(&self, replacement: Vec<T>) {
        *self.items.write() = replacement;
    }

    pub fn clear(&self) {
        self.items.write().clear();
    }
}

/// The three collections backing the API
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) users: Collection<UserRecord>,
    pub(crate) logs: Collection<LogEntry>,
    pub(crate) foods: Collection<FoodItem>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every record from every collection
    pub fn reset(&self) {
        self.users.clear();
        self.logs.clear();
        self.foods.clear();
    }
}
