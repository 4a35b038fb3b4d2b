//! # Scaffold
//!
//! A small collection of windowed demos built on macroquad, sitting on top of a
//! versioned core library.
//!
//! ## Architecture Overview
//!
//! - **Core**: the [`version`] accessor and the crate-wide error type
//! - **Game**: per-demo state that advances once per frame ([`CubeState`], [`BallState`])
//! - **Input**: keyboard polling and the pure key-to-direction mapping
//! - **Rendering**: camera setup, FPS overlay, frame pacing and geometry upload
//! - **Scenes**: the per-demo frame loops tying the pieces together
//!
//! Everything that does not touch the window is kept free of macroquad's global
//! context so it can be exercised from plain unit tests.

pub mod cli;
pub mod config;
pub mod game;
pub mod input;
pub mod rendering;
pub mod scenes;
pub mod utils;

pub use config::{BallConfig, CubeConfig, DemoSettings, WindowConfig};
pub use game::{BallState, CubeState};
pub use input::{Direction, InputHandler, PlayerInput};
pub use rendering::{FrameLimiter, HudText};
pub use scenes::{BallScene, CubeScene};

/// Core error type for the scaffold demos.
#[derive(thiserror::Error, Debug)]
pub enum ScaffoldError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Logger could not be installed
    #[error("Logging setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Result type used throughout the scaffold codebase.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Version of the core library.
pub const VERSION: &str = "0.0.1";

/// Returns the core library version string.
///
/// # Examples
///
/// ```
/// assert_eq!(scaffold::version(), "0.0.1");
/// ```
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_not_empty() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_version_format() {
        assert_eq!(version(), "0.0.1");
    }

    #[test]
    fn test_version_matches_package() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_error_display() {
        let err = ScaffoldError::InvalidConfig("width must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: width must be positive");
    }
}
