//! Texture handle type.
//!
//! Like `GraphicsProgram`, a `Texture` wraps a backend-owned resource
//! the engine references but never manages. Spawners keep an optional
//! texture for default shading; the reference is weak and never keeps
//! the texture alive.

/// Opaque backend handle for a texture resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// A named, backend-owned texture.
#[derive(Debug)]
pub struct Texture {
    name: String,
    handle: TextureHandle,
}

impl Texture {
    /// Create a texture wrapper around a backend handle.
    pub fn new(name: impl Into<String>, handle: TextureHandle) -> Self {
        Self {
            name: name.into(),
            handle,
        }
    }

    /// Texture name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Backend handle
    pub fn handle(&self) -> TextureHandle {
        self.handle
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
