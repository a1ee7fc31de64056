use pyo3::prelude::*;

use crate::error::{KeyLevel, Result};
use crate::item::Item;
use crate::item_map::ItemMap;
use crate::keyed::{Key, KeyedMap};
use crate::table;

/// ItemMapCollection: ItemMaps grouped under a collection key, giving a
/// group key -> item key -> item lookup.
#[pyclass]
#[derive(Debug, Clone)]
pub struct ItemMapCollection {
    maps: KeyedMap<ItemMap>,
}

impl Default for ItemMapCollection {
    fn default() -> Self {
        Self::new()
    }
}

#[pymethods]
impl ItemMapCollection {
    #[new]
    pub fn new() -> Self {
        Self {
            maps: KeyedMap::new(KeyLevel::Group),
        }
    }

    /// Create a collection with pre-allocated capacity for groups
    #[staticmethod]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            maps: KeyedMap::with_capacity(KeyLevel::Group, capacity),
        }
    }

    /// Store `map` under `collection_key`, replacing any map already there.
    pub fn set_map(&mut self, collection_key: Key, map: ItemMap) {
        self.maps.set(collection_key, map);
    }

    /// Get a copy of the ItemMap stored under `collection_key`.
    /// Raises KeyError if the group was never set.
    pub fn get_item_map(&self, collection_key: Key) -> PyResult<ItemMap> {
        Ok(self.item_map(collection_key)?.clone())
    }

    /// Look up an item through both levels at once.
    ///
    /// The KeyError message names whichever level was missing.
    pub fn get_item(&self, collection_key: Key, key: Key) -> PyResult<Item> {
        Ok(self.item(collection_key, key)?.clone())
    }

    /// Store `item` under `key` inside the existing group `collection_key`.
    pub fn set_item(&mut self, collection_key: Key, key: Key, item: Item) -> PyResult<()> {
        self.maps.get_mut(collection_key)?.set_item(key, item);
        Ok(())
    }

    pub fn contains_key(&self, collection_key: Key) -> bool {
        self.maps.contains_key(collection_key)
    }

    pub fn get_collection_size(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Group keys in ascending order
    pub fn keys(&self) -> Vec<Key> {
        self.maps.keys()
    }

    /// Total number of items across all groups
    pub fn total_items(&self) -> usize {
        self.maps.values().map(ItemMap::get_map_size).sum()
    }

    /// Render every group as `Group | Key | Name` rows.
    pub fn to_table(&self) -> String {
        table::render_groups(self.maps.iter().map(|(key, map)| (key, map.entries())))
    }

    fn __len__(&self) -> usize {
        self.maps.len()
    }

    fn __contains__(&self, collection_key: Key) -> bool {
        self.maps.contains_key(collection_key)
    }

    fn __repr__(&self) -> String {
        format!(
            "ItemMapCollection(groups={}, items={})",
            self.maps.len(),
            self.total_items()
        )
    }

    fn __str__(&self) -> String {
        self.to_table()
    }
}

impl ItemMapCollection {
    /// Borrow the ItemMap stored under `collection_key` without copying it.
    pub fn item_map(&self, collection_key: Key) -> Result<&ItemMap> {
        self.maps.get(collection_key)
    }

    pub fn item_map_mut(&mut self, collection_key: Key) -> Result<&mut ItemMap> {
        self.maps.get_mut(collection_key)
    }

    pub fn item(&self, collection_key: Key, key: Key) -> Result<&Item> {
        self.maps.get(collection_key)?.item(key)
    }
}
