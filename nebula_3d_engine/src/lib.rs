/*!
# Nebula 3D Engine

Scene-view construction and graphics-program binding for the Nebula 3D
engine.

This crate provides the platform-agnostic data-binding layer: a
`ViewSpawner` factory builds drawable `View` instances that all share
the spawner's vertex buffers, and a `DisplayDevice` trait wraps
window/context creation and buffer presentation. Backend
implementations (OpenGL, Vulkan, etc.) live in separate crates and
implement the display trait.

## Architecture

- **ViewSpawner**: Coupled factory producing views that alias its buffers
- **GeometryBuffers**: Spawner-owned per-vertex channels (position, color, normal, texcoord)
- **AttributeTable / UniformTable**: Keyed shader-input descriptions
- **ProgramRegistry**: Ordered per-program binding lists
- **View**: Drawable unit (transform, camera binding, draw description)
- **DisplayDevice**: Window/context/presentation seam for backends
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod color;
pub mod program;
pub mod spawner;
pub mod view;
pub mod display;

// Main nebula3d namespace module
pub mod nebula3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Color value type
    pub use crate::color::Color;

    // Graphics-program sub-module
    pub mod program {
        pub use crate::program::*;
    }

    // Spawner sub-module with the view-construction protocol
    pub mod spawner {
        pub use crate::spawner::*;
    }

    // View sub-module
    pub mod view {
        pub use crate::view::*;
    }

    // Display sub-module
    pub mod display {
        pub use crate::display::*;
    }
}

// Re-export math library at crate root
pub use glam;
