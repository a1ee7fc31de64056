use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

use crate::error::{KeyLevel, MenuError, Result};

/// Unsigned key assigned by the caller, unique within its containing map.
pub type Key = u32;

/// Owned mapping from a caller-assigned key to a value.
///
/// Inserting under an existing key replaces the stored value. Lookups of
/// absent keys fail with [`MenuError::KeyNotFound`] tagged with the level this
/// map serves, so a two-level lookup can report which key was missing.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedMap<V> {
    entries: FxHashMap<Key, V>,
    level: KeyLevel,
}

impl<V> KeyedMap<V> {
    pub fn new(level: KeyLevel) -> Self {
        Self {
            entries: FxHashMap::default(),
            level,
        }
    }

    /// Create a map with pre-allocated capacity
    pub fn with_capacity(level: KeyLevel, capacity: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            level,
        }
    }

    /// Insert or overwrite, returning the value previously stored under `key`.
    pub fn set(&mut self, key: Key, value: V) -> Option<V> {
        match self.entries.entry(key) {
            Entry::Occupied(mut entry) => {
                tracing::debug!(key_level = %self.level, key, "overwriting existing entry");
                Some(entry.insert(value))
            }
            Entry::Vacant(entry) => {
                tracing::trace!(key_level = %self.level, key, "inserting entry");
                entry.insert(value);
                None
            }
        }
    }

    pub fn get(&self, key: Key) -> Result<&V> {
        self.entries
            .get(&key)
            .ok_or_else(|| MenuError::key_not_found(self.level, key))
    }

    pub fn get_mut(&mut self, key: Key) -> Result<&mut V> {
        let level = self.level;
        self.entries
            .get_mut(&key)
            .ok_or_else(|| MenuError::key_not_found(level, key))
    }

    pub fn contains_key(&self, key: Key) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> Vec<Key> {
        let mut keys: Vec<Key> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Values in no particular order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.values()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, &V)> + '_ {
        let mut entries: Vec<(Key, &V)> = self.entries.iter().map(|(k, v)| (*k, v)).collect();
        entries.sort_unstable_by_key(|(key, _)| *key);
        entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let mut map = KeyedMap::new(KeyLevel::Item);
        assert!(map.is_empty());

        assert_eq!(map.set(1, "Home"), None);
        assert_eq!(map.get(1), Ok(&"Home"));
        assert_eq!(map.len(), 1);
        assert!(map.contains_key(1));
        assert!(!map.contains_key(2));
    }

    #[test]
    fn test_overwrite_keeps_last_write() {
        let mut map = KeyedMap::new(KeyLevel::Item);
        map.set(3, "first");
        let previous = map.set(3, "second");

        assert_eq!(previous, Some("first"));
        assert_eq!(map.get(3), Ok(&"second"));
        // Overwrite does not grow the map
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_size_counts_distinct_keys() {
        let mut map = KeyedMap::with_capacity(KeyLevel::Item, 8);
        for key in [5, 1, 5, 9, 1, 2] {
            map.set(key, key * 10);
        }
        assert_eq!(map.len(), 4);
        assert_eq!(map.keys(), vec![1, 2, 5, 9]);
    }

    #[test]
    fn test_absent_key_reports_level() {
        let map: KeyedMap<u8> = KeyedMap::new(KeyLevel::Group);
        assert_eq!(
            map.get(42),
            Err(MenuError::KeyNotFound {
                level: KeyLevel::Group,
                key: 42
            })
        );
    }

    #[test]
    fn test_get_mut() {
        let mut map = KeyedMap::new(KeyLevel::Item);
        map.set(1, String::from("Soup"));

        map.get_mut(1).unwrap().push_str(" of the day");
        assert_eq!(map.get(1).unwrap(), "Soup of the day");
        assert!(map.get_mut(2).is_err());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_values_cover_every_entry() {
        let mut map = KeyedMap::new(KeyLevel::Item);
        map.set(2, 20u32);
        map.set(1, 10);
        map.set(2, 25);

        assert_eq!(map.values().count(), 2);
        assert_eq!(map.values().sum::<u32>(), 35);
    }

    #[test]
    fn test_iter_is_key_ordered() {
        let mut map = KeyedMap::new(KeyLevel::Item);
        map.set(30, 'c');
        map.set(10, 'a');
        map.set(20, 'b');

        let collected: Vec<(Key, char)> = map.iter().map(|(k, v)| (k, *v)).collect();
        assert_eq!(collected, vec![(10, 'a'), (20, 'b'), (30, 'c')]);
    }
}
