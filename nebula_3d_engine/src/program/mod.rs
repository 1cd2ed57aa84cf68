/// Graphics-program module - program handles and shader-input description types

// Module declarations
pub mod graphics_program;
pub mod shader_input;
pub mod texture;

// Re-export everything
pub use graphics_program::*;
pub use shader_input::*;
pub use texture::*;
