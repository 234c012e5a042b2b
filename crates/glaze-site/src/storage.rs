//! Storage Integration
//!
//! `localStorage` as the page sees it: a string map scoped to one origin.
//! `StorageManager` keeps one area per origin so a page can be reloaded
//! against the same state.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Key/value store visible to the page
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&mut self, key: &str, value: &str);

    fn remove_item(&mut self, key: &str);

    fn clear(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) {
        (**self).set_item(key, value);
    }

    fn remove_item(&mut self, key: &str) {
        (**self).remove_item(key);
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// One origin's storage area
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocalStorage {
    items: BTreeMap<String, String>,
}

impl LocalStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        tracing::debug!(key, value, "localStorage.setItem");
        self.items.insert(key.to_string(), value.to_string());
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Storage manager for a browsing session
#[derive(Debug, Default)]
pub struct StorageManager {
    /// LocalStorage per origin
    local_storage: HashMap<String, LocalStorage>,
}

impl StorageManager {
    /// Create new storage manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Get localStorage for origin, creating it on first use
    pub fn local_storage(&mut self, origin: &str) -> &mut LocalStorage {
        self.local_storage.entry(origin.to_string()).or_default()
    }

    /// Set localStorage item
    pub fn local_set(&mut self, origin: &str, key: &str, value: &str) {
        self.local_storage(origin).set_item(key, value);
    }

    /// Get localStorage item
    pub fn local_get(&self, origin: &str, key: &str) -> Option<String> {
        self.local_storage.get(origin)?.get_item(key)
    }

    /// Remove localStorage item
    pub fn local_remove(&mut self, origin: &str, key: &str) {
        if let Some(storage) = self.local_storage.get_mut(origin) {
            storage.remove_item(key);
        }
    }

    /// Clear localStorage for origin
    pub fn local_clear(&mut self, origin: &str) {
        if let Some(storage) = self.local_storage.get_mut(origin) {
            storage.clear();
        }
    }

    /// Number of origins with a storage area
    pub fn origin_count(&self) -> usize {
        self.local_storage.len()
    }
}
