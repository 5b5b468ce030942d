//! Simulation driver built on the core grid engine.
//!
//! [`drop_block`] plays a single turn (resting row, place, clear). [`Simulation`]
//! owns a grid for one session and keeps running totals, and the batch helpers
//! [`simulate`] / [`simulate_encoded`] collapse every failure into
//! [`SIMULATION_FAILED`](crate::types::SIMULATION_FAILED).

pub mod place;
pub mod simulation;

pub use tetris_sim_core as core;
pub use tetris_sim_types as types;

pub use place::{drop_block, Landing};
pub use simulation::{
    simulate, simulate_encoded, try_simulate, try_simulate_encoded, Outcome, Simulation,
    SimulationConfig, UnknownBlockPolicy,
};
