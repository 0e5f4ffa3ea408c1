//! Simulation engine for SKYLARK.
//!
//! Owns the hecs ECS world, aggregates held controls, runs the flight
//! integrator at a fixed tick rate, and produces FrameSnapshots for the
//! presentation layer.

pub mod engine;
pub mod input;
pub mod integrator;
pub mod systems;
pub mod weather;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use skylark_core as core;
