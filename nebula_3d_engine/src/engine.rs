/// Nebula3D Engine - Singleton manager for engine subsystems
///
/// This module provides global singleton management for the display
/// device and the logging sink. It uses thread-safe static storage
/// with RwLock for safe concurrent access.

use std::sync::{OnceLock, RwLock, Arc, Mutex};
use std::time::SystemTime;
use crate::display::DisplayDevice;
use crate::error::{Result, Error};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Internal state structure holding all engine singletons
struct EngineState {
    /// Display device singleton (wrapped in Mutex for thread-safe mutable access)
    display_device: RwLock<Option<Arc<Mutex<dyn DisplayDevice>>>>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            display_device: RwLock::new(None),
        }
    }
}

// ===== PUBLIC API =====

/// Main engine singleton manager
///
/// Manages the lifecycle of the display device singleton and routes
/// all engine logging through the registered `Logger`.
///
/// # Example
///
/// ```no_run
/// use nebula_3d_engine::nebula3d::Engine;
/// use nebula_3d_engine::nebula3d::display::HeadlessDisplayDevice;
///
/// Engine::initialize()?;
/// Engine::create_display_device(HeadlessDisplayDevice::new())?;
///
/// let device = Engine::display_device()?;
/// // drive the device...
///
/// Engine::shutdown();
/// # Ok::<(), nebula_3d_engine::nebula3d::Error>(())
/// ```
pub struct Engine;

impl Engine {
    /// Helper to log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::InitializationFailed(msg) => {
                crate::engine_error!("nebula3d::Engine", "Initialization failed: {}", msg);
            }
            _ => {
                crate::engine_error!("nebula3d::Engine", "Engine error: {}", error);
            }
        }
        error
    }

    /// Initialize the engine
    ///
    /// This must be called once at application startup before creating
    /// any subsystems.
    ///
    /// # Errors
    ///
    /// Currently always succeeds, but returns Result for future extensibility.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(EngineState::new);
        Ok(())
    }

    /// Shutdown the entire engine and destroy all singletons
    ///
    /// After calling this, singletons must be re-created before use.
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut device) = state.display_device.write() {
                *device = None;
            }
        }
    }

    // ===== DISPLAY DEVICE API =====

    /// Create and register the display device singleton
    ///
    /// Wraps the device in `Arc<Mutex<_>>` and registers it globally.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - A display device already exists
    pub fn create_display_device<D: DisplayDevice + 'static>(device: D) -> Result<()> {
        let arc_device: Arc<Mutex<dyn DisplayDevice>> = Arc::new(Mutex::new(device));
        Self::register_display_device(arc_device)?;

        crate::engine_info!("nebula3d::Engine", "Display device singleton created successfully");
        Ok(())
    }

    /// Register a display device singleton (internal use)
    pub(crate) fn register_display_device(device: Arc<Mutex<dyn DisplayDevice>>) -> Result<()> {
        let state = ENGINE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
            ))?;

        let mut lock = state.display_device.write()
            .map_err(|_| Self::log_and_return_error(
                Error::InitializationFailed("Display device lock poisoned".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("Display device already exists. Call Engine::destroy_display_device() first.".to_string())
            ));
        }

        *lock = Some(device);
        Ok(())
    }

    /// Get the display device singleton
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - The display device has not been created
    pub fn display_device() -> Result<Arc<Mutex<dyn DisplayDevice>>> {
        let state = ENGINE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
            ))?;

        let lock = state.display_device.read()
            .map_err(|_| Self::log_and_return_error(
                Error::InitializationFailed("Display device lock poisoned".to_string())
            ))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Display device not created. Call Engine::create_display_device() first.".to_string())
            ))
    }

    /// Destroy the display device singleton
    ///
    /// Removes the singleton, allowing a new one to be created.
    /// Existing references remain valid until dropped.
    pub fn destroy_display_device() -> Result<()> {
        let state = ENGINE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Engine not initialized".to_string())
            ))?;

        let mut lock = state.display_device.write()
            .map_err(|_| Self::log_and_return_error(
                Error::InitializationFailed("Display device lock poisoned".to_string())
            ))?;

        *lock = None;

        crate::engine_info!("nebula3d::Engine", "Display device singleton destroyed");
        Ok(())
    }

    /// Reset all singletons for testing (only available in test builds)
    #[cfg(test)]
    pub fn reset_for_testing() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut device) = state.display_device.write() {
                *device = None;
            }
        }
    }

    // ===== LOGGING API =====

    /// Set a custom logger
    ///
    /// Replace the default logger with a custom implementation
    /// (file logger, in-memory capture, etc.)
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by the engine_error! macro to include source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
