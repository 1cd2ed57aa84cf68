//! Error types for the Nebula3D engine
//!
//! This module defines the error types used throughout the engine.
//! All builder failures are local, typed errors — no panics, and no
//! partial mutation is left behind by a failed operation.

use std::fmt;

/// Result type for Nebula3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nebula3D engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Operation invoked before a required predecessor
    /// (e.g., mapping texture coordinates before creating them)
    PreconditionNotMet(String),

    /// Referencing a program name or buffer key that was never registered
    UnknownIdentifier(String),

    /// Configuration the engine refuses (reserved layout slot,
    /// capability that cannot degrade to a safe default)
    InvalidConfiguration(String),

    /// Window/context creation failed (fatal for the subsystem)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PreconditionNotMet(msg) => write!(f, "Precondition not met: {}", msg),
            Error::UnknownIdentifier(msg) => write!(f, "Unknown identifier: {}", msg),
            Error::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build a typed `Error`, logging it through the engine logger.
///
/// The first argument selects the `Error` variant, the second is the
/// log source tag.
///
/// # Example
///
/// ```no_run
/// # use nebula_3d_engine::engine_err;
/// let err = engine_err!(UnknownIdentifier, "nebula3d::ProgramRegistry",
///     "no program named '{}'", "basic");
/// ```
#[macro_export]
macro_rules! engine_err {
    ($variant:ident, $source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::nebula3d::Error::$variant(message)
    }};
}

/// Return early with a typed `Error`, logging it through the engine logger.
///
/// # Example
///
/// ```no_run
/// # use nebula_3d_engine::{engine_bail, nebula3d::Result};
/// # fn check(count: u32) -> Result<()> {
/// if count == 0 {
///     engine_bail!(PreconditionNotMet, "nebula3d::ViewSpawner",
///         "no vertex data created");
/// }
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($variant:ident, $source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($variant, $source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
