//! Core placement logic - pure, deterministic, and testable
//!
//! This crate holds the block catalog and the grid engine. It has no I/O and no
//! global mutable state: the shape tables are static and every grid is owned
//! by exactly one caller.
//!
//! # Module Structure
//!
//! - [`catalog`]: the seven block shapes and identifier lookup
//! - [`grid`]: collision testing, resting-row search, placement, row clearing
//!   and stack height
//!
//! # Example
//!
//! ```
//! use tetris_sim_core::{Catalog, Grid};
//!
//! let catalog = Catalog::default();
//! let mut grid = Grid::new(10, 20).unwrap();
//!
//! let square = catalog.lookup("Q").unwrap();
//! let y = grid.find_resting_row(square, 0).unwrap();
//! grid.place(square, 0, y).unwrap();
//! assert_eq!(grid.clear_full_rows(), 0);
//! assert_eq!(grid.stack_height(), 2);
//! ```

pub mod catalog;
pub mod grid;

pub use tetris_sim_types as types;

// Re-export commonly used types for convenience
pub use catalog::{get_block, Block, Catalog, Orientation};
pub use grid::Grid;
