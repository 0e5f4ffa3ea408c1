//! Camera viewpoint state machine for SKYLARK.
//!
//! Cycles between chase, cockpit and free-look viewpoints and places the
//! camera relative to the aircraft for the modes that are program-driven.

pub mod fsm;
pub mod rigs;

pub use skylark_core as core;

#[cfg(test)]
mod tests;
