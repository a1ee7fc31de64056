use pyo3::prelude::*;

use crate::error::{KeyLevel, Result};
use crate::item::Item;
use crate::keyed::{Key, KeyedMap};
use crate::table;

/// ItemMap: Items of one menu addressed by caller-assigned keys.
///
/// Also exported as `ItemCollection`; both names describe the same container.
#[pyclass(eq)]
#[derive(Debug, Clone, PartialEq)]
pub struct ItemMap {
    items: KeyedMap<Item>,
}

/// Same container as [`ItemMap`], kept under the name menu code uses for a flat list.
pub type ItemCollection = ItemMap;

impl Default for ItemMap {
    fn default() -> Self {
        Self::new()
    }
}

#[pymethods]
impl ItemMap {
    #[new]
    pub fn new() -> Self {
        Self {
            items: KeyedMap::new(KeyLevel::Item),
        }
    }

    /// Create an ItemMap with pre-allocated capacity
    #[staticmethod]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: KeyedMap::with_capacity(KeyLevel::Item, capacity),
        }
    }

    /// Store `item` under `key`, replacing any item already there.
    pub fn set_item(&mut self, key: Key, item: Item) {
        self.items.set(key, item);
    }

    /// Get a copy of the item stored under `key`.
    /// Raises KeyError if the key was never set.
    pub fn get_item(&self, key: Key) -> PyResult<Item> {
        Ok(self.item(key)?.clone())
    }

    pub fn contains_key(&self, key: Key) -> bool {
        self.items.contains_key(key)
    }

    pub fn get_map_size(&self) -> usize {
        self.items.len()
    }

    pub fn get_collection_size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Keys in ascending order
    pub fn keys(&self) -> Vec<Key> {
        self.items.keys()
    }

    /// Item names in ascending key order
    pub fn names(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|(_, item)| item.name().to_string())
            .collect()
    }

    /// Render the map as a `Key | Name` text table.
    pub fn to_table(&self) -> String {
        table::render_items(&self.items)
    }

    fn __len__(&self) -> usize {
        self.items.len()
    }

    fn __contains__(&self, key: Key) -> bool {
        self.items.contains_key(key)
    }

    fn __repr__(&self) -> String {
        format!("ItemMap(items={})", self.items.len())
    }

    fn __str__(&self) -> String {
        self.to_table()
    }
}

impl ItemMap {
    /// Borrow the item stored under `key` without copying it.
    pub fn item(&self, key: Key) -> Result<&Item> {
        self.items.get(key)
    }

    pub fn item_mut(&mut self, key: Key) -> Result<&mut Item> {
        self.items.get_mut(key)
    }

    pub(crate) fn entries(&self) -> &KeyedMap<Item> {
        &self.items
    }
}

impl FromIterator<(Key, Item)> for ItemMap {
    fn from_iter<T: IntoIterator<Item = (Key, Item)>>(iter: T) -> Self {
        let mut map = ItemMap::new();
        for (key, item) in iter {
            map.set_item(key, item);
        }
        map
    }
}
