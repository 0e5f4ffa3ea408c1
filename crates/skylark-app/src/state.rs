//! Application state shared between the controller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use skylark_core::commands::PlayerCommand;
use skylark_core::state::FrameSnapshot;

/// Commands sent from the controller to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A pilot command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// Everything is behind a `Mutex` so the state is `Send + Sync`
/// (`mpsc::Sender` alone is not `Sync`). `Option`s are `None` until the
/// loop has been started.
pub struct AppState {
    /// Channel into the game loop thread.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous polling. Written by the loop after
    /// each tick.
    pub latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
    /// Handle of the running loop thread.
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
