use serde::Serialize;

use crate::core::{Block, Grid};
use crate::types::{BlockKind, EngineError};

/// Where a dropped block ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Landing {
    pub kind: BlockKind,
    pub column: i32,
    /// Top row of the block after it came to rest (before any clearing)
    pub row: i32,
    /// Rows removed by the clear that followed this drop
    pub lines_cleared: usize,
}

/// Play one turn: let `block` fall in `column`, lock it, then clear full rows.
///
/// On error the grid is unchanged.
pub fn drop_block(grid: &mut Grid, block: &Block, column: i32) -> Result<Landing, EngineError> {
    let row = grid.find_resting_row(block, column)?;
    grid.place(block, column, row)?;
    let lines_cleared = grid.clear_full_rows();

    Ok(Landing {
        kind: block.kind(),
        column,
        row,
        lines_cleared,
    })
}
