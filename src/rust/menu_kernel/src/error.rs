//! Error types raised by menu containers.

use pyo3::exceptions::PyKeyError;
use pyo3::PyErr;
use std::fmt;
use thiserror::Error;

/// Which level of the two-level lookup a key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyLevel {
    Group,
    Item,
}

impl fmt::Display for KeyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyLevel::Group => f.write_str("group"),
            KeyLevel::Item => f.write_str("item"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("{level} key {key} not found")]
    KeyNotFound { level: KeyLevel, key: u32 },
}

impl MenuError {
    pub fn key_not_found(level: KeyLevel, key: u32) -> Self {
        Self::KeyNotFound { level, key }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;

impl From<MenuError> for PyErr {
    fn from(err: MenuError) -> Self {
        PyErr::new::<PyKeyError, _>(err.to_string())
    }
}
