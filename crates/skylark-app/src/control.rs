//! Controller: the synchronous front door to the game loop thread.
//!
//! Starts and stops the loop, forwards pilot commands, translates key
//! names through [`KeyBindings`], and serves the latest snapshot.

use std::thread;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use skylark_core::commands::PlayerCommand;
use skylark_core::state::FrameSnapshot;
use skylark_sim::engine::SimConfig;

use crate::error::AppError;
use crate::game_loop::{self, TICK_DURATION};
use crate::keymap::KeyBindings;
use crate::script::{FlightScript, KeyEdge};
use crate::sink::SnapshotSink;
use crate::state::{AppState, GameLoopCommand};

pub struct Controller {
    state: AppState,
    config: SimConfig,
    bindings: KeyBindings,
}

impl Controller {
    pub fn new(config: SimConfig, bindings: KeyBindings) -> Self {
        Self {
            state: AppState::new(),
            config,
            bindings,
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn is_running(&self) -> Result<bool, AppError> {
        Ok(self.state.command_tx.lock()?.is_some())
    }

    /// Spawn the game loop thread. Fails if it is already running.
    pub fn start(&self, sink: Box<dyn SnapshotSink + Send>) -> Result<(), AppError> {
        let mut tx_lock = self.state.command_tx.lock()?;
        if tx_lock.is_some() {
            return Err(AppError::AlreadyRunning);
        }

        let (cmd_tx, handle) = game_loop::spawn_game_loop(
            self.config.clone(),
            sink,
            self.state.latest_snapshot.clone(),
        )?;

        *tx_lock = Some(cmd_tx);
        *self.state.loop_handle.lock()? = Some(handle);
        Ok(())
    }

    /// Ask the loop to shut down and wait for it.
    pub fn stop(&self) -> Result<(), AppError> {
        let Some(tx) = self.state.command_tx.lock()?.take() else {
            return Err(AppError::NotStarted);
        };
        // The loop may already be gone; joining below is what matters
        let _ = tx.send(GameLoopCommand::Shutdown);

        if let Some(handle) = self.state.loop_handle.lock()?.take() {
            if handle.join().is_err() {
                warn!("game loop thread panicked");
            }
        }
        info!("simulation stopped");
        Ok(())
    }

    /// Forward a pilot command to the loop.
    pub fn send(&self, command: PlayerCommand) -> Result<(), AppError> {
        let tx_lock = self.state.command_tx.lock()?;
        let Some(tx) = tx_lock.as_ref() else {
            warn!(?command, "command sent before the simulation started");
            return Err(AppError::NotStarted);
        };
        tx.send(GameLoopCommand::Player(command)).map_err(|error| {
            warn!(command = ?error.0, "game loop is gone, command dropped");
            AppError::ChannelClosed
        })
    }

    /// Key down. Returns `false` if the key is unbound.
    pub fn press_key(&self, key: &str) -> Result<bool, AppError> {
        match self.bindings.on_press(key) {
            Some(command) => self.send(command).map(|_| true),
            None => {
                warn!(key, "no binding for key");
                Ok(false)
            }
        }
    }

    /// Key up. Returns `false` if the key produces no release command.
    pub fn release_key(&self, key: &str) -> Result<bool, AppError> {
        match self.bindings.on_release(key) {
            Some(command) => self.send(command).map(|_| true),
            None => Ok(false),
        }
    }

    pub fn latest_snapshot(&self) -> Result<Option<FrameSnapshot>, AppError> {
        Ok(self.state.latest_snapshot.lock()?.clone())
    }

    /// Play `script` against the running loop in wall-clock time for
    /// `ticks` ticks. Script tick `n` is delivered `n` tick durations after
    /// the call, paced against a fixed start so sleeps do not accumulate
    /// drift. The loop thread keeps its own clock, so a step can still land
    /// one loop tick early or late.
    pub fn play(&self, script: &FlightScript, ticks: u64) -> Result<(), AppError> {
        let start = Instant::now();
        for tick in 0..ticks {
            let due = start + script_offset(tick);
            let now = Instant::now();
            if due > now {
                thread::sleep(due - now);
            }
            for step in script.steps_at(tick) {
                match step.edge {
                    KeyEdge::Press => self.press_key(&step.key)?,
                    KeyEdge::Release => self.release_key(&step.key)?,
                };
            }
        }
        Ok(())
    }
}

/// Wall-clock offset of script tick `tick` from the start of playback.
fn script_offset(tick: u64) -> Duration {
    Duration::from_nanos(TICK_DURATION.as_nanos() as u64 * tick)
}

impl Drop for Controller {
    fn drop(&mut self) {
        if matches!(self.is_running(), Ok(true)) {
            let _ = self.stop();
        }
    }
}
