//! Core types and definitions for the SKYLARK flight simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! controls, commands, components, state snapshots, events, tuning
//! constants and flight-model configuration.
//! It has no dependency on any runtime or rendering framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod controls;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
