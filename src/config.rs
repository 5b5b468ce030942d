//! Command-line configuration.
//!
//! Settings are layered: built-in defaults, then `TETRIS_SIM_*` environment
//! variables, then command-line flags.

use std::env;

use clap::Parser;

use crate::core::Orientation;
use crate::engine::{SimulationConfig, UnknownBlockPolicy};

/// Default grid width for the command line
pub const CLI_DEFAULT_WIDTH: usize = 10;

/// Default grid height for the command line
pub const CLI_DEFAULT_HEIGHT: usize = 15;

/// Simulate block placements on a grid and print the final stack height.
#[derive(Debug, Parser)]
#[command(
    name = "tetris-sim",
    version,
    about = "Drop blocks into a grid, clear full rows and print the final stack height.",
    long_about = "Drop blocks into a grid, clear full rows and print the final stack height.\n\n\
        Each placement is a block identifier followed by the column of its left edge, e.g. Q0 or I4.\n\
        Blocks: Q (square), Z, S, T, J, L, I.\n\n\
        Prints -1 and exits with status 1 if a placement is impossible or a block is unknown.\n\n\
        Environment: TETRIS_SIM_WIDTH, TETRIS_SIM_HEIGHT, TETRIS_SIM_SKIP_UNKNOWN, TETRIS_SIM_FLAT_JL, TETRIS_SIM_VERBOSE."
)]
pub struct Args {
    /// Placements such as Q0 or I4. Read from stdin when none are given.
    #[arg(value_name = "PLACEMENT")]
    pub placements: Vec<String>,

    /// Grid width in columns.
    #[arg(long, value_name = "COLS")]
    pub width: Option<usize>,

    /// Grid height in rows.
    #[arg(long, value_name = "ROWS")]
    pub height: Option<usize>,

    /// Lay J and L flat (2 rows x 3 columns) instead of upright.
    #[arg(long)]
    pub flat_jl: bool,

    /// Skip unknown block identifiers instead of failing.
    #[arg(long)]
    pub skip_unknown: bool,

    /// Print the final grid.
    #[arg(long)]
    pub show: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Trace every turn on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Effective settings after layering env and flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub width: usize,
    pub height: usize,
    pub skip_unknown: bool,
    pub flat_jl: bool,
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            width: CLI_DEFAULT_WIDTH,
            height: CLI_DEFAULT_HEIGHT,
            skip_unknown: false,
            flat_jl: false,
            verbose: false,
        }
    }
}

impl CliConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary variable source. Unset or unparsable values
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let width = lookup("TETRIS_SIM_WIDTH")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.width);
        let height = lookup("TETRIS_SIM_HEIGHT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.height);

        let flag = |key: &str| lookup(key).map(|v| is_truthy(&v)).unwrap_or(false);

        Self {
            width,
            height,
            skip_unknown: flag("TETRIS_SIM_SKIP_UNKNOWN"),
            flat_jl: flag("TETRIS_SIM_FLAT_JL"),
            verbose: flag("TETRIS_SIM_VERBOSE"),
        }
    }

    /// Layer command-line flags on top. Switches can only turn settings on.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(width) = args.width {
            self.width = width;
        }
        if let Some(height) = args.height {
            self.height = height;
        }
        self.skip_unknown |= args.skip_unknown;
        self.flat_jl |= args.flat_jl;
        self.verbose |= args.verbose;
    }

    pub fn simulation_config(&self) -> SimulationConfig {
        let orientation = if self.flat_jl {
            Orientation::Flat
        } else {
            Orientation::Upright
        };
        let unknown_blocks = if self.skip_unknown {
            UnknownBlockPolicy::Skip
        } else {
            UnknownBlockPolicy::Abort
        };
        SimulationConfig::new(self.width, self.height)
            .with_orientation(orientation)
            .with_unknown_blocks(unknown_blocks)
    }
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes")
}
