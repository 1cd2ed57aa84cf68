//! Headless display device.
//!
//! A windowless `DisplayDevice` implementation: no OS window, no GPU
//! context, but the full handle lifecycle, capability degradation, and
//! presentation bookkeeping. Used by tests and by demos running
//! without a swapchain backend.

use slotmap::SlotMap;
use crate::error::Result;
use crate::{engine_bail, engine_info, engine_warn};
use super::display_device::{
    ContextKey, DisplayContext, DisplayDevice, GraphicalContextSettings, MultiSampling, WindowKey,
};

const SOURCE: &str = "nebula3d::HeadlessDisplayDevice";

struct HeadlessWindow {
    title: String,
    width: u32,
    height: u32,
}

/// Windowless presentation surface with configurable capabilities.
pub struct HeadlessDisplayDevice {
    windows: SlotMap<WindowKey, HeadlessWindow>,
    contexts: SlotMap<ContextKey, DisplayContext>,
    max_samples: u8,
    supports_reversed_z: bool,
    clears: u64,
    presents: u64,
}

impl HeadlessDisplayDevice {
    /// Device supporting every capability (16x multisampling, reversed-z)
    pub fn new() -> Self {
        Self::with_capabilities(16, true)
    }

    /// Device with explicit capability limits.
    ///
    /// Requests beyond `max_samples`, or reversed-z on a device
    /// without support, degrade with a warning.
    pub fn with_capabilities(max_samples: u8, supports_reversed_z: bool) -> Self {
        Self {
            windows: SlotMap::with_key(),
            contexts: SlotMap::with_key(),
            max_samples,
            supports_reversed_z,
            clears: 0,
            presents: 0,
        }
    }

    /// Number of clear_buffers calls across all contexts
    pub fn clear_count(&self) -> u64 {
        self.clears
    }

    /// Number of swap_buffer calls across all contexts
    pub fn present_count(&self) -> u64 {
        self.presents
    }

    /// Effective sample count for a request, degrading if unsupported
    fn resolve_sample_count(&self, requested: MultiSampling) -> u8 {
        let samples = requested.sample_count();
        if samples > self.max_samples {
            engine_warn!(SOURCE,
                "multisampling x{} is not supported, falling back to non-anti-aliased mode",
                samples);
            return 0;
        }
        samples
    }
}

impl Default for HeadlessDisplayDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayDevice for HeadlessDisplayDevice {
    fn create_window(
        &mut self,
        title: &str,
        width: u32,
        height: u32,
        _anti_aliasing: MultiSampling,
        _full_screen: bool,
    ) -> Result<WindowKey> {
        if width == 0 || height == 0 {
            engine_bail!(InitializationFailed, SOURCE,
                "window '{}' requested with zero dimension {}x{}", title, width, height);
        }

        let key = self.windows.insert(HeadlessWindow {
            title: title.to_string(),
            width,
            height,
        });
        engine_info!(SOURCE, "window '{}' created ({}x{})", title, width, height);
        Ok(key)
    }

    fn create_graphical_context(
        &mut self,
        window: WindowKey,
        settings: GraphicalContextSettings,
    ) -> Result<ContextKey> {
        let (window_width, window_height, title) = match self.windows.get(window) {
            Some(w) => (w.width, w.height, w.title.clone()),
            None => engine_bail!(UnknownIdentifier, SOURCE,
                "context requested for a destroyed or unknown window"),
        };

        let sample_count = self.resolve_sample_count(settings.anti_aliasing);

        let reversed_z = if settings.enable_reversed_z && !self.supports_reversed_z {
            engine_warn!(SOURCE, "reversed-z is not supported, keeping the standard depth range");
            false
        } else {
            settings.enable_reversed_z
        };

        let off_screen = settings.wants_off_screen_rendering();
        let (frame_buffer_width, frame_buffer_height) = if off_screen {
            (settings.frame_buffer_width, settings.frame_buffer_height)
        } else {
            (window_width, window_height)
        };

        let key = self.contexts.insert(DisplayContext {
            window_width,
            window_height,
            frame_buffer_width,
            frame_buffer_height,
            sample_count,
            reversed_z,
            off_screen,
        });
        engine_info!(SOURCE,
            "context created for '{}' ({}x{} framebuffer, {} samples)",
            title, frame_buffer_width, frame_buffer_height, sample_count);
        Ok(key)
    }

    fn context(&self, context: ContextKey) -> Option<&DisplayContext> {
        self.contexts.get(context)
    }

    fn clear_buffers(&mut self, context: ContextKey) -> Result<()> {
        if !self.contexts.contains_key(context) {
            engine_bail!(UnknownIdentifier, SOURCE,
                "clear requested on a destroyed or unknown context");
        }
        self.clears += 1;
        Ok(())
    }

    fn swap_buffer(&mut self, context: ContextKey) -> Result<()> {
        if !self.contexts.contains_key(context) {
            engine_bail!(UnknownIdentifier, SOURCE,
                "present requested on a destroyed or unknown context");
        }
        self.presents += 1;
        Ok(())
    }

    fn destroy_context(&mut self, context: ContextKey) {
        self.contexts.remove(context);
    }

    fn destroy_window(&mut self, window: WindowKey) {
        self.windows.remove(window);
    }
}

#[cfg(test)]
#[path = "headless_tests.rs"]
mod tests;
