//! End-to-end flight scenarios driven through the public engine API.

use approx::assert_abs_diff_eq;
use std::f64::consts::{FRAC_PI_4, FRAC_PI_6};

use skylark_sim::core::commands::PlayerCommand;
use skylark_sim::core::config::{FlightModelConfig, StartConditions};
use skylark_sim::core::controls::Control;
use skylark_sim::core::enums::{CameraMode, EngineStatus};
use skylark_sim::core::events::SimEvent;
use skylark_sim::core::state::FrameSnapshot;
use skylark_sim::engine::SimConfig;
use skylark_sim::SimulationEngine;

fn launch(config: SimConfig) -> SimulationEngine {
    let mut engine = SimulationEngine::new(config);
    engine.queue_command(PlayerCommand::StartFlight);
    engine
}

fn press(engine: &mut SimulationEngine, control: Control) {
    engine.queue_command(PlayerCommand::PressControl { control });
}

fn release(engine: &mut SimulationEngine, control: Control) {
    engine.queue_command(PlayerCommand::ReleaseControl { control });
}

fn fly(engine: &mut SimulationEngine, ticks: usize) -> Vec<FrameSnapshot> {
    (0..ticks).map(|_| engine.tick()).collect()
}

#[test]
fn throttle_up_from_rest() {
    let mut engine = launch(SimConfig::default());
    press(&mut engine, Control::ThrottleUp);
    let frames = fly(&mut engine, 50);

    let first = &frames[0];
    assert_eq!(first.instruments.unwrap().engine_status, EngineStatus::Running);
    assert!(first.events.contains(&SimEvent::EngineStatusChanged {
        from: EngineStatus::Idle,
        to: EngineStatus::Running,
    }));

    let last = frames.last().unwrap();
    assert_eq!(last.time.tick, 50);
    assert_eq!(last.instruments.unwrap().throttle, 100);

    let mut previous_z = 0.0;
    for frame in &frames {
        let z = frame.aircraft.unwrap().position.z;
        assert!(z > previous_z, "z must increase every tick: {z} <= {previous_z}");
        previous_z = z;
    }
}

#[test]
fn gravity_drops_aircraft_to_the_ground_and_holds_it() {
    let mut engine = launch(SimConfig {
        flight_model: FlightModelConfig {
            gravity: true,
            ..FlightModelConfig::baseline()
        },
        start: StartConditions::airborne(5.0),
        ..Default::default()
    });

    let frames = fly(&mut engine, 300);
    let mut previous_y = 5.0;
    let mut landed_at = None;
    for (i, frame) in frames.iter().enumerate() {
        let aircraft = frame.aircraft.unwrap();
        assert!(aircraft.position.y <= previous_y);
        assert!(aircraft.position.y >= 0.0);
        assert!(frame.instruments.unwrap().altitude >= 0);
        if landed_at.is_none() && aircraft.position.y == 0.0 {
            landed_at = Some(i);
        }
        previous_y = aircraft.position.y;
    }

    let landed_at = landed_at.expect("aircraft never reached the ground");
    for frame in &frames[landed_at..] {
        let aircraft = frame.aircraft.unwrap();
        assert_eq!(aircraft.position.y, 0.0);
        assert_eq!(aircraft.velocity.y, 0.0);
    }
}

#[test]
fn camera_cycle_returns_to_chase() {
    let mut engine = launch(SimConfig::default());
    engine.tick();

    let mut modes = Vec::new();
    for _ in 0..3 {
        engine.queue_command(PlayerCommand::CycleCamera);
        modes.push(engine.tick().camera_mode);
    }
    assert_eq!(
        modes,
        vec![CameraMode::Cockpit, CameraMode::Free, CameraMode::Chase]
    );
}

#[test]
fn running_out_of_fuel() {
    let mut engine = launch(SimConfig {
        start: StartConditions {
            throttle: 100.0,
            fuel: 0.05,
            ..Default::default()
        },
        ..Default::default()
    });
    press(&mut engine, Control::ThrottleUp);

    let mut history = Vec::new();
    for _ in 0..20 {
        let frame = engine.tick();
        let fuel = engine.flight_state().unwrap().resources.fuel;
        history.push((frame, fuel));
    }

    let empty_at = history
        .iter()
        .position(|(_, fuel)| *fuel == 0.0)
        .expect("tank never emptied");
    assert!(empty_at > 0);
    let (before, _) = &history[empty_at - 1];
    assert_eq!(before.instruments.unwrap().engine_status, EngineStatus::Running);
    assert!(history[empty_at].0.events.contains(&SimEvent::FuelExhausted));

    for (frame, fuel) in &history[empty_at..] {
        assert_eq!(*fuel, 0.0);
        assert_eq!(frame.instruments.unwrap().engine_status, EngineStatus::FuelOut);
    }

    let exhausted = history
        .iter()
        .flat_map(|(frame, _)| frame.events.iter())
        .filter(|e| **e == SimEvent::FuelExhausted)
        .count();
    assert_eq!(exhausted, 1);

    // Cutting the throttle to idle does not bring the engine back to IDLE
    release(&mut engine, Control::ThrottleUp);
    press(&mut engine, Control::ThrottleDown);
    for _ in 0..80 {
        let frame = engine.tick();
        let hud = frame.instruments.unwrap();
        assert_eq!(hud.engine_status, EngineStatus::FuelOut);
        assert!(!frame
            .events
            .iter()
            .any(|e| matches!(e, SimEvent::EngineStatusChanged { .. })));
    }
    let state = engine.flight_state().unwrap();
    assert_eq!(state.resources.throttle, 0.0);
    assert_eq!(state.resources.fuel, 0.0);

    release(&mut engine, Control::ThrottleDown);
    press(&mut engine, Control::ThrottleUp);
    for _ in 0..10 {
        let frame = engine.tick();
        assert_eq!(frame.instruments.unwrap().engine_status, EngineStatus::FuelOut);
    }
}

#[test]
fn attitude_and_fuel_stay_in_range() {
    let mut engine = launch(SimConfig::default());
    press(&mut engine, Control::ThrottleUp);
    press(&mut engine, Control::PitchUp);
    press(&mut engine, Control::RollLeft);

    let mut previous_fuel = 100.0;
    for tick in 0..600 {
        if tick == 200 {
            release(&mut engine, Control::PitchUp);
            release(&mut engine, Control::RollLeft);
            press(&mut engine, Control::PitchDown);
            press(&mut engine, Control::RollRight);
        }
        engine.tick();
        let state = engine.flight_state().unwrap();
        let attitude = state.kinematics.attitude;
        assert!((-FRAC_PI_4..=FRAC_PI_4).contains(&attitude.pitch));
        assert!((-FRAC_PI_6..=FRAC_PI_6).contains(&attitude.roll));
        assert!(state.kinematics.position.y >= 0.0);

        let fuel = state.resources.fuel;
        assert!((0.0..=100.0).contains(&fuel));
        assert!(fuel <= previous_fuel);
        previous_fuel = fuel;
    }

    let attitude = engine.flight_state().unwrap().kinematics.attitude;
    assert_abs_diff_eq!(attitude.pitch, FRAC_PI_4, epsilon = 1e-12);
    assert_abs_diff_eq!(attitude.roll, -FRAC_PI_6, epsilon = 1e-12);
}

#[test]
fn pause_discards_time() {
    let mut engine = launch(SimConfig::default());
    press(&mut engine, Control::ThrottleUp);
    fly(&mut engine, 30);
    engine.queue_command(PlayerCommand::TogglePause);
    let paused = engine.tick();
    let during = fly(&mut engine, 1000);
    assert!(during
        .iter()
        .all(|f| f.time == paused.time && f.aircraft == paused.aircraft));

    engine.queue_command(PlayerCommand::TogglePause);
    let resumed = engine.tick();
    assert_eq!(resumed.time.tick, paused.time.tick + 1);
}
