//! Graphics-program handle type.
//!
//! A `GraphicsProgram` is a name-addressable handle to a compiled GPU
//! program owned by a backend. Shader compilation happens elsewhere;
//! this crate only binds data to program inputs.

/// Opaque backend handle for a compiled graphics program.
///
/// Issued by a backend (GL program object, pipeline index, ...).
/// Never dereferenced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u64);

/// A named, backend-compiled graphics program.
///
/// Spawners reference programs through `Arc<GraphicsProgram>`: the
/// program is shared, never copied, and stays alive as long as any
/// spawner or view references it.
#[derive(Debug)]
pub struct GraphicsProgram {
    name: String,
    handle: ProgramHandle,
}

impl GraphicsProgram {
    /// Create a program wrapper around a backend handle.
    pub fn new(name: impl Into<String>, handle: ProgramHandle) -> Self {
        Self {
            name: name.into(),
            handle,
        }
    }

    /// Program name used for draw-call addressing.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Backend handle.
    pub fn handle(&self) -> ProgramHandle {
        self.handle
    }
}

#[cfg(test)]
#[path = "graphics_program_tests.rs"]
mod tests;
