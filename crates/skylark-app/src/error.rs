//! Errors raised at the runtime edge. The simulation core itself is total.

use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Simulation already running")]
    AlreadyRunning,

    #[error("Simulation not started")]
    NotStarted,

    #[error("Game loop channel closed")]
    ChannelClosed,

    #[error("Shared state lock poisoned: {0}")]
    LockPoisoned(String),

    #[error("Failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(error: std::sync::PoisonError<T>) -> Self {
        AppError::LockPoisoned(error.to_string())
    }
}
