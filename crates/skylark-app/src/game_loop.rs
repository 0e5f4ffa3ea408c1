//! Game loop thread: runs the simulation engine at 60Hz and emits snapshots.
//!
//! The engine is created inside the thread and never leaves it. Commands
//! arrive via `mpsc` channel and are drained at the top of each tick.
//! Snapshots go to a [`SnapshotSink`] and are stored in shared state for
//! synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::info;

use skylark_core::constants::TICK_RATE;
use skylark_core::state::FrameSnapshot;
use skylark_sim::engine::{SimConfig, SimulationEngine};

use crate::error::AppError;
use crate::sink::SnapshotSink;
use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    sink: Box<dyn SnapshotSink + Send>,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skylark-game-loop".into())
        .spawn(move || {
            run_game_loop(config, sink, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    mut sink: Box<dyn SnapshotSink + Send>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();
    info!("game loop started");

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&cmd_rx, &mut engine) {
            info!(tick = engine.time().tick, "game loop shut down");
            return;
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Hand the snapshot to the presentation side
        sink.emit(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind: reset instead of replaying missed ticks
            next_tick_time = now;
        }
    }
}

/// Queue every pending command on the engine. Returns `false` once the loop
/// should stop.
fn drain_commands(cmd_rx: &mpsc::Receiver<GameLoopCommand>, engine: &mut SimulationEngine) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::ChannelSink;
    use skylark_core::commands::PlayerCommand;
    use skylark_core::controls::Control;
    use skylark_core::enums::SimPhase;

    #[test]
    fn test_drain_queues_in_order() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        let mut engine = SimulationEngine::new(SimConfig::default());

        tx.send(GameLoopCommand::Player(PlayerCommand::StartFlight))
            .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::PressControl {
            control: Control::ThrottleUp,
        }))
        .unwrap();
        assert!(drain_commands(&rx, &mut engine));

        let snap = engine.tick();
        assert_eq!(snap.phase, SimPhase::Running);
        assert_eq!(snap.instruments.unwrap().throttle, 2);
    }

    #[test]
    fn test_drain_stops_on_shutdown_or_disconnect() {
        let mut engine = SimulationEngine::new(SimConfig::default());

        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert!(!drain_commands(&rx, &mut engine));

        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        drop(tx);
        assert!(!drain_commands(&rx, &mut engine));
    }

    #[test]
    fn test_loop_emits_and_stores_snapshots() {
        let (sink, frames) = ChannelSink::channel();
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) =
            spawn_game_loop(SimConfig::default(), Box::new(sink), latest.clone()).unwrap();

        tx.send(GameLoopCommand::Player(PlayerCommand::StartFlight))
            .unwrap();
        let first_running = frames
            .iter()
            .find(|snap| snap.phase == SimPhase::Running)
            .unwrap();
        assert!(first_running.aircraft.is_some());

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
        assert!(latest.lock().unwrap().is_some());
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartFlight);
        for _ in 0..50 {
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
