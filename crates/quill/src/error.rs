//! # Window Error Types
//!
//! Everything that can go wrong while bringing a window up. Once the
//! window exists, frames are best effort and never fail.

use quill_input::InputError;
use quill_ui::ConfigError;
use thiserror::Error;

/// Failures reported by a rendering backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The OS window could not be created.
    #[error("window creation failed: {0}")]
    CreateWindow(String),

    /// The graphics context could not be initialized.
    #[error("graphics context setup failed: {0}")]
    Context(String),

    /// The compositing shader failed to compile or link.
    #[error("shader compilation failed: {0}")]
    Shader(String),
}

/// Result type for backend calls.
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors from creating a [`Window`](crate::Window) or loading its configuration.
#[derive(Error, Debug)]
pub enum WindowError {
    /// The backend refused to create the window.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Input delivery could not be started.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The UI configuration is invalid.
    #[error(transparent)]
    Ui(#[from] ConfigError),

    /// The window configuration could not be parsed.
    #[error("invalid window config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A window needs at least one pixel in each direction.
    #[error("invalid window size {width}x{height}")]
    InvalidSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}

/// Result type for window setup.
pub type WindowResult<T> = Result<T, WindowError>;
