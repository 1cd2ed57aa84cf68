//! Keyed store of uniform-variable descriptions.
//!
//! The table owns every uniform value outright (name, location, data).
//! Generational `UniformKey`s identify entries; program binding lists
//! reference the keys, never the values.

use slotmap::{SlotMap, new_key_type};
use crate::error::Result;
use crate::engine_bail;
use crate::program::UniformDesc;

new_key_type! {
    /// Stable identity of one uniform entry within a spawner.
    pub struct UniformKey;
}

/// Uniform descriptions for all programs of one spawner.
pub struct UniformTable {
    entries: SlotMap<UniformKey, UniformDesc>,
}

impl UniformTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
        }
    }

    /// Store a new uniform description, issuing its key
    pub fn insert(&mut self, desc: UniformDesc) -> UniformKey {
        self.entries.insert(desc)
    }

    /// Overwrite an existing entry (last-write-wins).
    ///
    /// # Errors
    ///
    /// `UnknownIdentifier` if the key is not live; the table is left
    /// unchanged.
    pub fn replace(&mut self, key: UniformKey, desc: UniformDesc) -> Result<()> {
        match self.entries.get_mut(key) {
            Some(entry) => {
                *entry = desc;
                Ok(())
            }
            None => engine_bail!(UnknownIdentifier, "nebula3d::UniformTable",
                "no uniform registered for key {:?}", key),
        }
    }

    /// Description registered under a key
    pub fn get(&self, key: UniformKey) -> Option<&UniformDesc> {
        self.entries.get(key)
    }

    /// Whether a key refers to a live entry
    pub fn contains(&self, key: UniformKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Drop all registrations
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of registered uniforms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no registrations
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for UniformTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "uniform_table_tests.rs"]
mod tests;
