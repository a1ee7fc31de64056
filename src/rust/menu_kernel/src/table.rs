//! Plain-text rendering of menu containers.

use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::Table;

use crate::item::Item;
use crate::keyed::{Key, KeyedMap};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_MARKDOWN).set_header(header);
    table
}

/// Render a single level of items as `Key | Name` rows in key order.
pub fn render_items(items: &KeyedMap<Item>) -> String {
    let mut table = new_table(vec!["Key", "Name"]);
    for (key, item) in items.iter() {
        table.add_row(vec![key.to_string(), item.name().to_string()]);
    }
    table.to_string()
}

/// Render grouped items as `Group | Key | Name` rows, ordered by group then key.
pub fn render_groups<'a, I>(groups: I) -> String
where
    I: IntoIterator<Item = (Key, &'a KeyedMap<Item>)>,
{
    let mut table = new_table(vec!["Group", "Key", "Name"]);
    for (group_key, items) in groups {
        for (key, item) in items.iter() {
            table.add_row(vec![
                group_key.to_string(),
                key.to_string(),
                item.name().to_string(),
            ]);
        }
    }
    table.to_string()
}
