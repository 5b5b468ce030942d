//! Falling-block placement simulator (workspace facade crate).
//!
//! The engine lives in dedicated crates under `crates/`; this package re-exports
//! them as `tetris_sim::{types, core, engine}` and carries the command-line
//! front end (configuration, rendering and reporting).

pub mod config;
pub mod render;
pub mod report;

pub use tetris_sim_core as core;
pub use tetris_sim_engine as engine;
pub use tetris_sim_types as types;
