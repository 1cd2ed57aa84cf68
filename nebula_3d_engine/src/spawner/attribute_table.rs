//! Keyed store of shader-attribute descriptions.
//!
//! Maps a buffer identity to the description of how that buffer feeds
//! a vertex-shader input. The table never owns the underlying buffer;
//! it only holds descriptions keyed by `BufferKey`.

use rustc_hash::FxHashMap;
use crate::program::ShaderAttributeDesc;
use super::geometry_buffers::BufferKey;

/// Attribute descriptions for all programs of one spawner.
///
/// Keys are unique per buffer identity; re-registration overwrites the
/// prior description (last-write-wins).
pub struct AttributeTable {
    entries: FxHashMap<BufferKey, ShaderAttributeDesc>,
}

impl AttributeTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Insert or overwrite the description for a buffer.
    ///
    /// Returns the replaced description, if any.
    pub fn register(&mut self, key: BufferKey, desc: ShaderAttributeDesc) -> Option<ShaderAttributeDesc> {
        self.entries.insert(key, desc)
    }

    /// Description registered for a buffer
    pub fn get(&self, key: BufferKey) -> Option<&ShaderAttributeDesc> {
        self.entries.get(&key)
    }

    /// Whether a description is registered for a buffer
    pub fn contains(&self, key: BufferKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Drop all registrations
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of registered descriptions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no registrations
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AttributeTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "attribute_table_tests.rs"]
mod tests;
