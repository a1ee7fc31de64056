use pyo3::prelude::*;

pub mod error;
pub mod item;
pub mod item_map;
pub mod item_map_collection;
pub mod keyed;
pub mod table;

pub use error::{KeyLevel, MenuError, Result};
pub use item::Item;
pub use item_map::{ItemCollection, ItemMap};
pub use item_map_collection::ItemMapCollection;
pub use keyed::{Key, KeyedMap};

/// Menu selection containers exposed to the UI layer.
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Item>()?;
    m.add_class::<ItemMap>()?;
    m.add_class::<ItemMapCollection>()?;
    // Flat collections and item maps share one implementation
    m.add("ItemCollection", m.getattr("ItemMap")?)?;
    Ok(())
}
