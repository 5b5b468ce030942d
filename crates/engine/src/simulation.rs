//! Batch simulation over a sequence of placements.

use serde::{Deserialize, Serialize};

use crate::core::{Catalog, Grid, Orientation};
use crate::place::{drop_block, Landing};
use crate::types::{
    BlockKind, EngineError, Placement, DEFAULT_HEIGHT, DEFAULT_WIDTH, SIMULATION_FAILED,
};

/// What to do with an identifier the catalog does not know
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownBlockPolicy {
    /// Stop the simulation with [`EngineError::UnknownBlockType`]
    #[default]
    Abort,
    /// Ignore the placement and record the identifier in [`Outcome::skipped`]
    Skip,
}

/// Construction-time settings for a [`Simulation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    pub orientation: Orientation,
    pub unknown_blocks: UnknownBlockPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            orientation: Orientation::Upright,
            unknown_blocks: UnknownBlockPolicy::Abort,
        }
    }
}

impl SimulationConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_unknown_blocks(mut self, policy: UnknownBlockPolicy) -> Self {
        self.unknown_blocks = policy;
        self
    }
}

/// Summary of a finished (or in-progress) simulation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Outcome {
    pub stack_height: usize,
    pub lines_cleared: usize,
    /// Placements that were actually dropped
    pub turns: usize,
    /// Identifiers ignored under [`UnknownBlockPolicy::Skip`]
    pub skipped: Vec<String>,
}

/// One game session: a grid, a catalog and running totals
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    catalog: Catalog,
    unknown_blocks: UnknownBlockPolicy,
    turns: usize,
    lines_cleared: usize,
    skipped: Vec<String>,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self, EngineError> {
        Ok(Self {
            grid: Grid::new(config.width, config.height)?,
            catalog: Catalog::new(config.orientation),
            unknown_blocks: config.unknown_blocks,
            turns: 0,
            lines_cleared: 0,
            skipped: Vec::new(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn stack_height(&self) -> usize {
        self.grid.stack_height()
    }

    /// Total rows cleared so far
    pub fn lines_cleared(&self) -> usize {
        self.lines_cleared
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Drop a block of a known kind
    pub fn play(&mut self, kind: BlockKind, column: i32) -> Result<Landing, EngineError> {
        let block = self.catalog.block(kind);
        let landing = drop_block(&mut self.grid, block, column)?;
        self.turns += 1;
        self.lines_cleared += landing.lines_cleared;
        Ok(landing)
    }

    /// Drop a block named by a textual identifier.
    ///
    /// Returns `Ok(None)` when the identifier is unknown and the policy is
    /// [`UnknownBlockPolicy::Skip`].
    pub fn play_identifier(
        &mut self,
        identifier: &str,
        column: i32,
    ) -> Result<Option<Landing>, EngineError> {
        let kind = match self.catalog.lookup(identifier) {
            Ok(block) => block.kind(),
            Err(err) => {
                return match self.unknown_blocks {
                    UnknownBlockPolicy::Abort => Err(err),
                    UnknownBlockPolicy::Skip => {
                        self.skipped.push(identifier.to_string());
                        Ok(None)
                    }
                };
            }
        };
        self.play(kind, column).map(Some)
    }

    /// Drop a block from an encoded token such as `"Q0"`
    pub fn play_encoded(&mut self, token: &str) -> Result<Option<Landing>, EngineError> {
        let (identifier, column) = Placement::split(token)?;
        self.play_identifier(identifier, column)
    }

    /// Apply `placements` in order, stopping at the first error
    pub fn run<I>(&mut self, placements: I) -> Result<Outcome, EngineError>
    where
        I: IntoIterator<Item = Placement>,
    {
        for placement in placements {
            self.play(placement.kind, placement.column)?;
        }
        Ok(self.outcome())
    }

    /// Apply encoded placements in order, stopping at the first error
    pub fn run_encoded<'a, I>(&mut self, tokens: I) -> Result<Outcome, EngineError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for token in tokens {
            self.play_encoded(token)?;
        }
        Ok(self.outcome())
    }

    pub fn outcome(&self) -> Outcome {
        Outcome {
            stack_height: self.stack_height(),
            lines_cleared: self.lines_cleared,
            turns: self.turns,
            skipped: self.skipped.clone(),
        }
    }
}

/// Run `placements` on a fresh `width` x `height` grid
pub fn try_simulate(
    placements: &[Placement],
    width: usize,
    height: usize,
) -> Result<Outcome, EngineError> {
    Simulation::new(SimulationConfig::new(width, height))?.run(placements.iter().copied())
}

/// Run encoded placements (`"Q0"`, `"I4"`, ...) on a fresh grid
pub fn try_simulate_encoded(
    tokens: &[&str],
    width: usize,
    height: usize,
) -> Result<Outcome, EngineError> {
    Simulation::new(SimulationConfig::new(width, height))?.run_encoded(tokens.iter().copied())
}

/// Final stack height, or [`SIMULATION_FAILED`] if any placement fails
///
/// ```
/// use tetris_sim_engine::simulate;
/// use tetris_sim_types::{BlockKind, Placement};
///
/// let squares = [Placement::new(BlockKind::Q, 0), Placement::new(BlockKind::Q, 0)];
/// assert_eq!(simulate(&squares, 10, 20), 4);
/// assert_eq!(simulate(&[Placement::new(BlockKind::I, 9)], 10, 20), -1);
/// ```
pub fn simulate(placements: &[Placement], width: usize, height: usize) -> i32 {
    height_or_failure(try_simulate(placements, width, height))
}

/// Encoded variant of [`simulate`]
///
/// ```
/// use tetris_sim_engine::simulate_encoded;
///
/// assert_eq!(simulate_encoded(&["I0", "I4", "Q8"], 10, 20), 1);
/// assert_eq!(simulate_encoded(&["K0"], 10, 20), -1);
/// ```
pub fn simulate_encoded(tokens: &[&str], width: usize, height: usize) -> i32 {
    height_or_failure(try_simulate_encoded(tokens, width, height))
}

fn height_or_failure(result: Result<Outcome, EngineError>) -> i32 {
    match result {
        Ok(outcome) => outcome.stack_height as i32,
        Err(_) => SIMULATION_FAILED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_accumulate_across_turns() {
        let mut sim = Simulation::new(SimulationConfig::new(10, 20)).unwrap();
        sim.play(BlockKind::I, 0).unwrap();
        sim.play(BlockKind::I, 4).unwrap();
        let landing = sim.play(BlockKind::Q, 8).unwrap();

        assert_eq!(landing.lines_cleared, 1);
        assert_eq!(sim.turns(), 3);
        assert_eq!(sim.lines_cleared(), 1);
        assert_eq!(sim.stack_height(), 1);
    }

    #[test]
    fn failed_turn_is_not_counted() {
        let mut sim = Simulation::new(SimulationConfig::new(5, 10)).unwrap();
        assert!(sim.play(BlockKind::I, 4).is_err());
        assert_eq!(sim.turns(), 0);
        assert!(sim.grid().is_empty());
    }

    #[test]
    fn skip_policy_records_unknown_identifiers() {
        let config = SimulationConfig::new(10, 20).with_unknown_blocks(UnknownBlockPolicy::Skip);
        let mut sim = Simulation::new(config).unwrap();
        let outcome = sim.run_encoded(["Q0", "K3", "Q0"]).unwrap();

        assert_eq!(outcome.stack_height, 4);
        assert_eq!(outcome.turns, 2);
        assert_eq!(outcome.skipped, vec!["K".to_string()]);
    }

    #[test]
    fn skip_policy_still_rejects_unplaceable_blocks() {
        let config = SimulationConfig::new(5, 10).with_unknown_blocks(UnknownBlockPolicy::Skip);
        let mut sim = Simulation::new(config).unwrap();
        assert_eq!(
            sim.run_encoded(["I4"]),
            Err(EngineError::NotPlaceable { column: 4 })
        );
    }

    #[test]
    fn abort_policy_is_the_default() {
        let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
        assert_eq!(
            sim.play_identifier("K", 0),
            Err(EngineError::UnknownBlockType("K".to_string()))
        );
        assert!(sim.skipped().is_empty());
    }

    #[test]
    fn malformed_token_is_reported_separately() {
        let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
        assert!(matches!(
            sim.play_encoded("Q?"),
            Err(EngineError::MalformedPlacement(_))
        ));
    }

    #[test]
    fn flat_orientation_changes_j_footprint() {
        let config = SimulationConfig::new(10, 10).with_orientation(Orientation::Flat);
        let mut sim = Simulation::new(config).unwrap();
        sim.play(BlockKind::J, 7).unwrap();
        assert_eq!(sim.stack_height(), 2);
        assert!(sim.play(BlockKind::J, 8).is_err());
    }

    #[test]
    fn invalid_dimensions_fail_the_batch() {
        assert_eq!(simulate(&[], 0, 20), SIMULATION_FAILED);
    }
}
