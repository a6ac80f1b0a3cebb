//! # Input Error Types

use thiserror::Error;

/// Errors raised while wiring up input delivery.
#[derive(Error, Debug)]
pub enum InputError {
    /// The forwarder thread could not be started.
    #[error("failed to spawn event forwarder: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Result type for input setup.
pub type InputResult<T> = Result<T, InputError>;
