/// Spawner module - geometry buffers, binding tables, and the view factory

// Module declarations
pub mod geometry_buffers;
pub mod attribute_table;
pub mod uniform_table;
pub mod program_binding;
pub mod variant;
pub mod view_spawner;

// Re-export everything
pub use geometry_buffers::*;
pub use attribute_table::*;
pub use uniform_table::*;
pub use program_binding::*;
pub use variant::*;
pub use view_spawner::*;
