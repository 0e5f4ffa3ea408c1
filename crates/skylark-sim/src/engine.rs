//! Simulation engine: the core of the flight sim.
//!
//! `SimulationEngine` owns the hecs ECS world, processes pilot commands,
//! runs all systems, and produces `FrameSnapshot`s. Completely headless
//! (no rendering or windowing dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use skylark_camera::fsm;
use skylark_core::commands::PlayerCommand;
use skylark_core::components::{FlightState, LandingGear};
use skylark_core::config::{FlightModelConfig, StartConditions};
use skylark_core::controls::ControlInputSet;
use skylark_core::enums::{CameraMode, SimPhase};
use skylark_core::events::SimEvent;
use skylark_core::state::{CameraTransform, FrameSnapshot, WeatherReport};
use skylark_core::types::SimTime;

use crate::input::InputAggregator;
use crate::systems;
use crate::systems::snapshot::FrameContext;
use crate::weather;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Which optional flight effects are active.
    pub flight_model: FlightModelConfig,
    /// Initial aircraft state.
    pub start: StartConditions,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            flight_model: FlightModelConfig::default(),
            start: StartConditions::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: SimPhase,
    flight_model: FlightModelConfig,
    start: StartConditions,
    rng: ChaCha8Rng,
    weather: WeatherReport,
    input: InputAggregator,
    camera_mode: CameraMode,
    camera: Option<CameraTransform>,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: SimPhase::default(),
            flight_model: config.flight_model,
            start: config.start,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            weather: WeatherReport::default(),
            input: InputAggregator::new(),
            camera_mode: CameraMode::default(),
            camera: None,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a pilot command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Queued commands are applied first, in order. While stopped or paused
    /// nothing advances; commands still apply so no release is lost.
    pub fn tick(&mut self) -> FrameSnapshot {
        self.process_commands();

        if self.phase == SimPhase::Running {
            let controls = self.input.snapshot();
            self.run_systems(controls);
            self.time.advance();
        }

        systems::camera::run(&self.world, self.camera_mode, &mut self.camera);

        let events = std::mem::take(&mut self.events);
        let context = FrameContext {
            time: self.time,
            phase: self.phase,
            camera_mode: self.camera_mode,
            camera: self.camera,
            weather: self.weather,
        };
        systems::snapshot::build_snapshot(&self.world, &context, events)
    }

    /// Get the current simulation phase.
    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current camera mode.
    pub fn camera_mode(&self) -> CameraMode {
        self.camera_mode
    }

    /// Controls held as of the last processed command.
    pub fn held_controls(&self) -> ControlInputSet {
        self.input.snapshot()
    }

    /// The active flight-model switches.
    pub fn flight_model(&self) -> &FlightModelConfig {
        &self.flight_model
    }

    /// The aircraft's integrator state, if a flight has started.
    pub fn flight_state(&self) -> Option<FlightState> {
        let entity = world_setup::find_aircraft(&self.world)?;
        self.world.get::<&FlightState>(entity).ok().map(|state| *state)
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single pilot command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::PressControl { control } => self.input.activate(control),
            PlayerCommand::ReleaseControl { control } => self.input.deactivate(control),
            PlayerCommand::ReleaseAllControls => self.input.clear(),
            PlayerCommand::CycleCamera => {
                self.camera_mode = fsm::cycle(self.camera_mode);
                if !fsm::is_program_driven(self.camera_mode) {
                    self.camera = None;
                }
                debug!(mode = self.camera_mode.as_str(), "camera mode changed");
                self.events.push(SimEvent::CameraModeChanged {
                    mode: self.camera_mode,
                });
            }
            PlayerCommand::ToggleLandingGear => self.toggle_landing_gear(),
            PlayerCommand::StartFlight => self.start_flight(),
            PlayerCommand::Pause => {
                if self.phase == SimPhase::Running {
                    info!(tick = self.time.tick, "simulation paused");
                    self.phase = SimPhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == SimPhase::Paused {
                    info!(tick = self.time.tick, "simulation resumed");
                    self.phase = SimPhase::Running;
                }
            }
            PlayerCommand::TogglePause => match self.phase {
                SimPhase::Stopped => self.start_flight(),
                SimPhase::Running => self.handle_command(PlayerCommand::Pause),
                SimPhase::Paused => self.handle_command(PlayerCommand::Resume),
            },
        }
    }

    /// Spawn the aircraft and begin ticking. Ignored once a flight exists.
    fn start_flight(&mut self) {
        if self.phase != SimPhase::Stopped {
            return;
        }
        world_setup::spawn_aircraft(&mut self.world, &self.start);
        self.weather = weather::roll_weather(&mut self.rng);
        self.time = SimTime::default();
        self.phase = SimPhase::Running;
        info!(
            weather = self.weather.condition.as_str(),
            flight_model = ?self.flight_model,
            "flight started"
        );
    }

    fn toggle_landing_gear(&mut self) {
        let Some(entity) = world_setup::find_aircraft(&self.world) else {
            return;
        };
        if let Ok(mut gear) = self.world.get::<&mut LandingGear>(entity) {
            gear.down = !gear.down;
            debug!(down = gear.down, "landing gear toggled");
            self.events.push(SimEvent::LandingGearToggled { down: gear.down });
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, controls: ControlInputSet) {
        // 1. Flight dynamics
        systems::flight::run(
            &mut self.world,
            controls,
            &self.flight_model,
            &mut self.events,
        );
    }
}
