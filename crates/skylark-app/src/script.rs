//! Scripted key input: timed press/release steps.
//!
//! A script is played either headless, ticking an engine directly (fully
//! deterministic), or in real time through the controller.

use tracing::{info, warn};

use skylark_core::commands::PlayerCommand;
use skylark_core::state::FrameSnapshot;
use skylark_sim::engine::{SimConfig, SimulationEngine};

use crate::keymap::KeyBindings;
use crate::sink::SnapshotSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEdge {
    Press,
    Release,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    /// Tick index at which the key event is delivered, before that tick runs.
    pub tick: u64,
    pub key: String,
    pub edge: KeyEdge,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightScript {
    steps: Vec<ScriptStep>,
}

impl FlightScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(self, tick: u64, key: &str) -> Self {
        self.step(tick, key, KeyEdge::Press)
    }

    pub fn release(self, tick: u64, key: &str) -> Self {
        self.step(tick, key, KeyEdge::Release)
    }

    /// Press at `tick`, release `duration` ticks later.
    pub fn hold(self, tick: u64, duration: u64, key: &str) -> Self {
        self.press(tick, key).release(tick + duration, key)
    }

    fn step(mut self, tick: u64, key: &str, edge: KeyEdge) -> Self {
        // Stable insert keeps same-tick steps in the order they were added
        let index = self.steps.partition_point(|step| step.tick <= tick);
        self.steps.insert(
            index,
            ScriptStep {
                tick,
                key: key.to_string(),
                edge,
            },
        );
        self
    }

    /// Start the flight, run up to full throttle with takeoff flaps, rotate,
    /// then raise the gear and switch to the cockpit view.
    pub fn takeoff() -> Self {
        Self::new()
            .press(0, "p")
            .hold(1, 2, "f")
            .hold(1, 50, "w")
            .hold(150, 20, "ArrowUp")
            .press(240, "g")
            .hold(260, 2, "v")
            .press(300, "c")
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    pub fn steps_at(&self, tick: u64) -> impl Iterator<Item = &ScriptStep> {
        self.steps.iter().filter(move |step| step.tick == tick)
    }

    /// Commands the steps at `tick` translate to. Unbound keys are dropped.
    pub fn commands_at(&self, tick: u64, bindings: &KeyBindings) -> Vec<PlayerCommand> {
        self.steps_at(tick)
            .filter_map(|step| {
                let command = match step.edge {
                    KeyEdge::Press => bindings.on_press(&step.key),
                    KeyEdge::Release => bindings.on_release(&step.key),
                };
                if command.is_none() && step.edge == KeyEdge::Press {
                    warn!(key = %step.key, tick, "no binding for scripted key");
                }
                command
            })
            .collect()
    }

    /// Tick a fresh engine `ticks` times, feeding the script in. Returns the
    /// last snapshot.
    pub fn run_headless(
        &self,
        config: SimConfig,
        bindings: &KeyBindings,
        ticks: u64,
        sink: &mut dyn SnapshotSink,
    ) -> Option<FrameSnapshot> {
        let mut engine = SimulationEngine::new(config);
        let mut last = None;
        for tick in 0..ticks {
            engine.queue_commands(self.commands_at(tick, bindings));
            let snapshot = engine.tick();
            sink.emit(&snapshot);
            last = Some(snapshot);
        }
        info!(ticks, sim_tick = engine.time().tick, "headless run finished");
        last
    }
}
