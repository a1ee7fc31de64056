use pyo3::prelude::*;
use std::fmt;

/// A single named menu entry.
#[pyclass(eq)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
}

#[pymethods]
impl Item {
    #[new]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Replace the stored name.
    pub fn set_name(&mut self, new_name: &str) {
        self.name = new_name.to_string();
    }

    /// Get the current name
    pub fn get_name(&self) -> String {
        self.name.clone()
    }

    fn __repr__(&self) -> String {
        format!("Item(name={:?})", self.name)
    }

    fn __str__(&self) -> String {
        self.name.clone()
    }
}

impl Item {
    /// Borrow the current name without copying it.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_name() {
        let mut item = Item::new("Home");
        assert_eq!(item.get_name(), "Home");

        item.set_name("Settings");
        assert_eq!(item.get_name(), "Settings");
        assert_eq!(item.name(), "Settings");
    }

    #[test]
    fn test_set_name_accepts_anything() {
        let mut item = Item::new("Home");
        item.set_name("");
        assert_eq!(item.get_name(), "");

        item.set_name("강남⋅서초⋅양재");
        assert_eq!(item.to_string(), "강남⋅서초⋅양재");
    }

    #[test]
    fn test_item_repr() {
        let item = Item::new("Home");
        assert_eq!(item.__repr__(), "Item(name=\"Home\")");
        assert_eq!(item.__str__(), "Home");
    }
}
