//! Per-program binding lists.
//!
//! A `ProgramRegistry` associates each named graphics program with the
//! ordered attribute and uniform keys that must be bound before a draw
//! call using that program. Registration order is preserved: it is the
//! order draw calls execute in.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::engine_bail;
use crate::program::GraphicsProgram;
use super::geometry_buffers::BufferKey;
use super::uniform_table::UniformKey;

// ===== PROGRAM ENTRY =====

/// One named program and its ordered binding lists.
pub struct ProgramEntry {
    program: Arc<GraphicsProgram>,
    attributes: Vec<BufferKey>,
    uniforms: Vec<UniformKey>,
}

impl ProgramEntry {
    fn new(program: Arc<GraphicsProgram>) -> Self {
        Self {
            program,
            attributes: Vec::new(),
            uniforms: Vec::new(),
        }
    }

    /// The referenced graphics program (shared, not copied)
    pub fn program(&self) -> &Arc<GraphicsProgram> {
        &self.program
    }

    /// Attribute keys in binding order
    pub fn attributes(&self) -> &[BufferKey] {
        &self.attributes
    }

    /// Uniform keys in binding order
    pub fn uniforms(&self) -> &[UniformKey] {
        &self.uniforms
    }
}

// ===== PROGRAM REGISTRY =====

/// All programs registered on one spawner, draw order preserved.
pub struct ProgramRegistry {
    programs: FxHashMap<String, ProgramEntry>,
    order: Vec<String>,
}

impl ProgramRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            programs: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Register a new named program, appending a draw call.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the name is already registered; the
    /// first registration is kept.
    pub fn add_program(&mut self, name: impl Into<String>, program: Arc<GraphicsProgram>) -> Result<()> {
        let name = name.into();
        if self.programs.contains_key(&name) {
            engine_bail!(InvalidConfiguration, "nebula3d::ProgramRegistry",
                "program '{}' is already registered", name);
        }

        self.programs.insert(name.clone(), ProgramEntry::new(program));
        self.order.push(name);
        Ok(())
    }

    /// Append an attribute key to a program's binding list.
    ///
    /// # Errors
    ///
    /// `UnknownIdentifier` if no program carries that name; nothing is
    /// mutated.
    pub fn add_attribute(&mut self, program_name: &str, key: BufferKey) -> Result<()> {
        match self.programs.get_mut(program_name) {
            Some(entry) => {
                entry.attributes.push(key);
                Ok(())
            }
            None => engine_bail!(UnknownIdentifier, "nebula3d::ProgramRegistry",
                "no program named '{}'", program_name),
        }
    }

    /// Append a uniform key to a program's binding list.
    ///
    /// # Errors
    ///
    /// `UnknownIdentifier` if no program carries that name; nothing is
    /// mutated.
    pub fn add_uniform(&mut self, program_name: &str, key: UniformKey) -> Result<()> {
        match self.programs.get_mut(program_name) {
            Some(entry) => {
                entry.uniforms.push(key);
                Ok(())
            }
            None => engine_bail!(UnknownIdentifier, "nebula3d::ProgramRegistry",
                "no program named '{}'", program_name),
        }
    }

    /// Put `key` at the front of every program's attribute list that
    /// does not already bind it.
    ///
    /// Used for the position channel: shader layout slot 0 is reserved
    /// for vertex position in every program.
    pub fn ensure_first_attribute(&mut self, key: BufferKey) {
        for entry in self.programs.values_mut() {
            if !entry.attributes.contains(&key) {
                entry.attributes.insert(0, key);
            }
        }
    }

    /// Entry registered under a name
    pub fn entry(&self, name: &str) -> Option<&ProgramEntry> {
        self.programs.get(name)
    }

    /// Whether a program name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.programs.contains_key(name)
    }

    /// Program names in registration (draw) order
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Iterate entries in registration (draw) order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ProgramEntry)> {
        self.order.iter().filter_map(|name| {
            self.programs.get(name).map(|entry| (name.as_str(), entry))
        })
    }

    /// Number of registered programs
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no program is registered
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Drop every program's binding lists, keeping the programs
    pub fn clear_bindings(&mut self) {
        for entry in self.programs.values_mut() {
            entry.attributes.clear();
            entry.uniforms.clear();
        }
    }
}

impl Default for ProgramRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "program_binding_tests.rs"]
mod tests;
