//! Catalog module - the fixed set of block shapes
//!
//! Shapes are stored as static occupancy masks, row 0 on top. They are built at
//! compile time and never change, so a [`Catalog`] is just a choice of J/L
//! orientation over the same shared tables.

use crate::types::{BlockKind, EngineError};

/// Occupancy mask rows, top row first
pub type Mask = &'static [&'static [bool]];

/// Immutable shape template
#[derive(Debug, PartialEq, Eq)]
pub struct Block {
    kind: BlockKind,
    width: usize,
    height: usize,
    mask: Mask,
}

impl Block {
    const fn new(kind: BlockKind, width: usize, height: usize, mask: Mask) -> Self {
        Self {
            kind,
            width,
            height,
            mask,
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Number of columns covered by the mask
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows covered by the mask
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Whether the cell at column `dx`, row `dy` of the mask is filled.
    /// Out-of-mask offsets are empty.
    #[inline]
    pub fn is_filled(&self, dx: usize, dy: usize) -> bool {
        self.mask
            .get(dy)
            .and_then(|row| row.get(dx))
            .copied()
            .unwrap_or(false)
    }

    /// Filled offsets as `(dx, dy)`, row by row
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.mask.iter().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, filled)| **filled)
                .map(move |(dx, _)| (dx, dy))
        })
    }
}

const X: bool = true;
const O: bool = false;

static SQUARE: Block = Block::new(BlockKind::Q, 2, 2, &[&[X, X], &[X, X]]);

static Z_BLOCK: Block = Block::new(BlockKind::Z, 3, 2, &[&[X, X, O], &[O, X, X]]);

static S_BLOCK: Block = Block::new(BlockKind::S, 3, 2, &[&[O, X, X], &[X, X, O]]);

/// T pointing down
static T_BLOCK: Block = Block::new(BlockKind::T, 3, 2, &[&[X, X, X], &[O, X, O]]);

static J_UPRIGHT: Block = Block::new(BlockKind::J, 2, 3, &[&[O, X], &[O, X], &[X, X]]);

static L_UPRIGHT: Block = Block::new(BlockKind::L, 2, 3, &[&[X, O], &[X, O], &[X, X]]);

static J_FLAT: Block = Block::new(BlockKind::J, 3, 2, &[&[X, O, O], &[X, X, X]]);

static L_FLAT: Block = Block::new(BlockKind::L, 3, 2, &[&[O, O, X], &[X, X, X]]);

static I_BLOCK: Block = Block::new(BlockKind::I, 4, 1, &[&[X, X, X, X]]);

/// How J and L are laid out.
///
/// Both layouts keep the bottom row of the mask fully filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// 3 rows x 2 columns, the long side vertical
    #[default]
    Upright,
    /// 2 rows x 3 columns, the long side along the floor
    Flat,
}

/// Lookup table from identifiers to shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Catalog {
    orientation: Orientation,
}

impl Catalog {
    pub const fn new(orientation: Orientation) -> Self {
        Self { orientation }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Shape for a known kind
    pub fn block(&self, kind: BlockKind) -> &'static Block {
        match (kind, self.orientation) {
            (BlockKind::Q, _) => &SQUARE,
            (BlockKind::Z, _) => &Z_BLOCK,
            (BlockKind::S, _) => &S_BLOCK,
            (BlockKind::T, _) => &T_BLOCK,
            (BlockKind::J, Orientation::Upright) => &J_UPRIGHT,
            (BlockKind::L, Orientation::Upright) => &L_UPRIGHT,
            (BlockKind::J, Orientation::Flat) => &J_FLAT,
            (BlockKind::L, Orientation::Flat) => &L_FLAT,
            (BlockKind::I, _) => &I_BLOCK,
        }
    }

    /// Shape for a textual identifier such as `"Q"`
    ///
    /// ```
    /// use tetris_sim_core::Catalog;
    /// use tetris_sim_types::EngineError;
    ///
    /// let catalog = Catalog::default();
    /// assert_eq!(catalog.lookup("I").unwrap().width(), 4);
    /// assert_eq!(
    ///     catalog.lookup("K"),
    ///     Err(EngineError::UnknownBlockType("K".to_string()))
    /// );
    /// ```
    pub fn lookup(&self, identifier: &str) -> Result<&'static Block, EngineError> {
        BlockKind::from_str(identifier)
            .map(|kind| self.block(kind))
            .ok_or_else(|| EngineError::UnknownBlockType(identifier.to_string()))
    }

    /// All shapes, in [`BlockKind::ALL`] order
    pub fn blocks(&self) -> impl Iterator<Item = &'static Block> + '_ {
        BlockKind::ALL.into_iter().map(move |kind| self.block(kind))
    }
}

/// Shape for `kind` in the default (upright) catalog
pub fn get_block(kind: BlockKind) -> &'static Block {
    Catalog::default().block(kind)
}
