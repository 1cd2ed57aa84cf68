//! Native window creation helper.
//!
//! Thin wrapper over winit used by windowed backends and GPU tests.
//! The event loop is returned alongside the window: the window is only
//! valid while its event loop is alive, keeping both together is the
//! caller's responsibility.

use winit::event_loop::{EventLoop, EventLoopBuilder};
use winit::window::Window;
use crate::error::Result;
use crate::engine_err;

// Platform-specific imports for EventLoop threading
#[cfg(target_os = "windows")]
use winit::platform::windows::EventLoopBuilderExtWindows;

const SOURCE: &str = "nebula3d::display::window";

/// Native window configuration
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Hidden windows are used for tests and off-screen tooling
    pub visible: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Nebula3D".to_string(),
            width: 800,
            height: 600,
            visible: true,
        }
    }
}

/// Create a native window and its event loop.
///
/// On Windows the event loop allows creation outside the main thread
/// (required under `cargo test`).
///
/// # Errors
///
/// `InitializationFailed` if the event loop or window cannot be
/// created (e.g. no display server).
#[allow(deprecated)]
pub fn create_native_window(config: &WindowConfig) -> Result<(Window, EventLoop<()>)> {
    let event_loop = {
        #[cfg(target_os = "windows")]
        {
            EventLoopBuilder::new().with_any_thread(true).build()
        }
        #[cfg(not(target_os = "windows"))]
        {
            EventLoopBuilder::new().build()
        }
    }
    .map_err(|e| engine_err!(InitializationFailed, SOURCE, "event loop creation failed: {}", e))?;

    let attrs = Window::default_attributes()
        .with_title(&config.title)
        .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height))
        .with_visible(config.visible);

    let window = event_loop
        .create_window(attrs)
        .map_err(|e| engine_err!(InitializationFailed, SOURCE, "window creation failed: {}", e))?;

    Ok((window, event_loop))
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
