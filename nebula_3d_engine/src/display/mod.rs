/// Display module - window/context creation and buffer presentation seam

// Module declarations
pub mod display_device;
pub mod headless;
pub mod window;

// Re-export everything
pub use display_device::*;
pub use headless::*;
pub use window::*;
