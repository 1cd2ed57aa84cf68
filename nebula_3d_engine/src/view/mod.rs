/// View module - drawable units produced by spawners

// Module declarations
pub mod renderer;
pub mod view;
pub mod camera;

// Re-export everything
pub use renderer::*;
pub use view::*;
pub use camera::*;
