//! Display device trait and context types.
//!
//! A `DisplayDevice` wraps the OS windowing library and the GPU API:
//! window creation, graphical-context setup, framebuffer clears, and
//! buffer presentation. The engine core treats it as an
//! externally-owned presentation surface addressed through opaque
//! handles.
//!
//! All per-context state (framebuffer dimensions, depth policy) lives
//! in an explicit `DisplayContext` value — there is no process-global
//! device state.

use slotmap::new_key_type;
use crate::error::Result;

new_key_type! {
    /// Handle to a device-owned window.
    pub struct WindowKey;
}

new_key_type! {
    /// Handle to a device-owned graphical context.
    pub struct ContextKey;
}

// ===== MULTI-SAMPLING =====

/// Multisample anti-aliasing level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultiSampling {
    #[default]
    None,
    X2,
    X4,
    X8,
    X16,
}

impl MultiSampling {
    /// Number of times a pixel is sampled (0 = no multisampling)
    pub fn sample_count(&self) -> u8 {
        match self {
            MultiSampling::None => 0,
            MultiSampling::X2 => 2,
            MultiSampling::X4 => 4,
            MultiSampling::X8 => 8,
            MultiSampling::X16 => 16,
        }
    }
}

// ===== CONTEXT SETTINGS =====

/// User-facing graphical-context configuration.
///
/// Non-zero framebuffer dimensions request off-screen rendering: the
/// scene is rendered into an intermediate framebuffer of that size and
/// blitted to the window on presentation.
#[derive(Debug, Clone, Copy)]
pub struct GraphicalContextSettings {
    /// Multisample anti-aliasing level
    pub anti_aliasing: MultiSampling,
    /// Off-screen framebuffer width (0 = render directly to the window)
    pub frame_buffer_width: u32,
    /// Off-screen framebuffer height (0 = render directly to the window)
    pub frame_buffer_height: u32,
    /// Flip the depth comparison and clipping range for better
    /// float precision (near plane maps to 1.0, far plane to 0.0)
    pub enable_reversed_z: bool,
}

impl Default for GraphicalContextSettings {
    fn default() -> Self {
        Self {
            anti_aliasing: MultiSampling::None,
            frame_buffer_width: 0,
            frame_buffer_height: 0,
            enable_reversed_z: false,
        }
    }
}

impl GraphicalContextSettings {
    /// Whether the settings request an intermediate framebuffer
    pub fn wants_off_screen_rendering(&self) -> bool {
        self.frame_buffer_width > 0 && self.frame_buffer_height > 0
    }
}

// ===== DISPLAY CONTEXT =====

/// Effective state of one graphical context.
///
/// Holds what the original settings requested after capability
/// degradation, plus the values presentation calls need (clear depth,
/// framebuffer dimensions).
#[derive(Debug, Clone, Copy)]
pub struct DisplayContext {
    /// Window width in pixels
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,
    /// Render-target width (equals window width when on-screen)
    pub frame_buffer_width: u32,
    /// Render-target height (equals window height when on-screen)
    pub frame_buffer_height: u32,
    /// Effective multisample count after capability degradation
    pub sample_count: u8,
    /// Whether reversed-z is active
    pub reversed_z: bool,
    /// Whether rendering goes through an intermediate framebuffer
    pub off_screen: bool,
}

impl DisplayContext {
    /// Depth value the depth buffer is cleared to.
    ///
    /// 1.0 normally; 0.0 under reversed-z, where the far plane maps
    /// to depth 0.
    pub fn clear_depth(&self) -> f32 {
        if self.reversed_z { 0.0 } else { 1.0 }
    }
}

// ===== DISPLAY DEVICE =====

/// Presentation-surface seam implemented by platform backends.
///
/// Handles are opaque; a destroyed handle simply stops resolving.
/// Fatal creation failures return `InitializationFailed` and leave
/// process-level recovery to the caller.
pub trait DisplayDevice: Send + Sync {
    /// Create a window.
    ///
    /// # Errors
    ///
    /// `InitializationFailed` if the window cannot be created.
    fn create_window(
        &mut self,
        title: &str,
        width: u32,
        height: u32,
        anti_aliasing: MultiSampling,
        full_screen: bool,
    ) -> Result<WindowKey>;

    /// Create a graphical context for a window.
    ///
    /// Unsupported capabilities (multisample level, reversed-z)
    /// degrade to a safe default with a warning; they never abort.
    ///
    /// # Errors
    ///
    /// - `UnknownIdentifier` if the window handle is not live
    /// - `InitializationFailed` if context creation fails
    fn create_graphical_context(
        &mut self,
        window: WindowKey,
        settings: GraphicalContextSettings,
    ) -> Result<ContextKey>;

    /// Effective state of a live context
    fn context(&self, context: ContextKey) -> Option<&DisplayContext>;

    /// Clear the color and depth buffers of a context.
    ///
    /// # Errors
    ///
    /// `UnknownIdentifier` if the context handle is not live.
    fn clear_buffers(&mut self, context: ContextKey) -> Result<()>;

    /// Present the back buffer of a context.
    ///
    /// # Errors
    ///
    /// `UnknownIdentifier` if the context handle is not live.
    fn swap_buffer(&mut self, context: ContextKey) -> Result<()>;

    /// Destroy a context; its handle stops resolving
    fn destroy_context(&mut self, context: ContextKey);

    /// Destroy a window; its handle stops resolving
    fn destroy_window(&mut self, window: WindowKey);
}

#[cfg(test)]
#[path = "display_device_tests.rs"]
mod tests;
