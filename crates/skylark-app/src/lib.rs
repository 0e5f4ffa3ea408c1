//! SKYLARK runtime shell.
//!
//! Wires the simulation engine to the outside world: a settings file, key
//! bindings, the fixed-rate game-loop thread, snapshot sinks and scripted
//! input for the `skylark` binary.

pub mod control;
pub mod error;
pub mod game_loop;
pub mod hud;
pub mod keymap;
pub mod script;
pub mod settings;
pub mod sink;
pub mod state;

pub use skylark_core as core;
