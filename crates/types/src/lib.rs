//! Shared types - block identifiers, placement requests and engine errors
//!
//! This crate defines the data that flows between the catalog, the grid engine,
//! the simulation driver and the command line. It carries no engine logic, so
//! every other crate in the workspace can depend on it.
//!
//! # Block identifiers
//!
//! | Id | Shape | Size (rows x cols) |
//! |----|-------|--------------------|
//! | `Q` | Square | 2 x 2 |
//! | `Z` | Z | 2 x 3 |
//! | `S` | S | 2 x 3 |
//! | `T` | Downward T | 2 x 3 |
//! | `J` | J (upright) | 3 x 2 |
//! | `L` | L (upright) | 3 x 2 |
//! | `I` | Horizontal bar | 1 x 4 |
//!
//! # Placement encoding
//!
//! A placement is written as the block identifier followed by the column of the
//! block's left edge, e.g. `Q0` or `I12`.
//!
//! # Examples
//!
//! ```
//! use tetris_sim_types::{BlockKind, Placement};
//!
//! assert_eq!(BlockKind::from_str("q"), Some(BlockKind::Q));
//! assert_eq!(BlockKind::from_str("K"), None);
//!
//! let placement: Placement = "I4".parse().unwrap();
//! assert_eq!(placement, Placement::new(BlockKind::I, 4));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default grid width used by the simulation API (10 columns)
pub const DEFAULT_WIDTH: usize = 10;

/// Default grid height used by the simulation API (20 rows)
pub const DEFAULT_HEIGHT: usize = 20;

/// Value returned by the batch API when a simulation fails for any reason
pub const SIMULATION_FAILED: i32 = -1;

/// The seven block kinds known to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    /// 2x2 square
    Q,
    Z,
    S,
    /// T pointing down
    T,
    J,
    L,
    /// Horizontal bar of four
    I,
}

impl BlockKind {
    /// Every kind, in catalog order
    pub const ALL: [BlockKind; 7] = [
        BlockKind::Q,
        BlockKind::Z,
        BlockKind::S,
        BlockKind::T,
        BlockKind::J,
        BlockKind::L,
        BlockKind::I,
    ];

    /// Parse a block identifier (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_sim_types::BlockKind;
    ///
    /// assert_eq!(BlockKind::from_str("i"), Some(BlockKind::I));
    /// assert_eq!(BlockKind::from_str("J"), Some(BlockKind::J));
    /// assert_eq!(BlockKind::from_str("O"), None);
    /// assert_eq!(BlockKind::from_str(""), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "Q" => Some(BlockKind::Q),
            "Z" => Some(BlockKind::Z),
            "S" => Some(BlockKind::S),
            "T" => Some(BlockKind::T),
            "J" => Some(BlockKind::J),
            "L" => Some(BlockKind::L),
            "I" => Some(BlockKind::I),
            _ => None,
        }
    }

    /// Canonical identifier for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Q => "Q",
            BlockKind::Z => "Z",
            BlockKind::S => "S",
            BlockKind::T => "T",
            BlockKind::J => "J",
            BlockKind::L => "L",
            BlockKind::I => "I",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One turn of input: which block to drop and the column of its left edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub kind: BlockKind,
    pub column: i32,
}

impl Placement {
    pub fn new(kind: BlockKind, column: i32) -> Self {
        Self { kind, column }
    }

    /// Split an encoded placement into its raw identifier and column.
    ///
    /// The identifier is not resolved here, so callers can apply their own
    /// policy to unknown blocks.
    ///
    /// ```
    /// use tetris_sim_types::{ParsePlacementError, Placement};
    ///
    /// assert_eq!(Placement::split("K3"), Ok(("K", 3)));
    /// assert_eq!(Placement::split(" I12 "), Ok(("I", 12)));
    /// assert!(matches!(Placement::split("Q"), Err(ParsePlacementError::BadColumn(_))));
    /// ```
    pub fn split(token: &str) -> Result<(&str, i32), ParsePlacementError> {
        let token = token.trim();
        let first = token.chars().next().ok_or(ParsePlacementError::Empty)?;
        let (id, rest) = token.split_at(first.len_utf8());
        let column = rest
            .parse::<i32>()
            .map_err(|_| ParsePlacementError::BadColumn(token.to_string()))?;
        Ok((id, column))
    }
}

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, column) = Placement::split(s)?;
        let kind =
            BlockKind::from_str(id).ok_or_else(|| ParsePlacementError::UnknownBlock(id.to_string()))?;
        Ok(Placement::new(kind, column))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.column)
    }
}

/// Failure to decode a placement token such as `Q0`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePlacementError {
    #[error("empty placement")]
    Empty,
    #[error("unknown block identifier {0:?}")]
    UnknownBlock(String),
    #[error("placement {0:?} has no valid column")]
    BadColumn(String),
}

/// Errors reported by the grid engine and the simulation driver
///
/// The batch API collapses every variant into [`SIMULATION_FAILED`]; library
/// callers can match on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Identifier not present in the block catalog
    #[error("unknown block type {0:?}")]
    UnknownBlockType(String),
    /// Column out of range for the block, or no resting row left in that column
    #[error("block cannot be placed at column {column}")]
    NotPlaceable { column: i32 },
    /// `place` called at a position where the block does not fit
    #[error("block does not fit at x={x}, y={y}")]
    Blocked { x: i32, y: i32 },
    /// Grid constructed with a zero dimension
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Placement token could not be decoded
    #[error(transparent)]
    MalformedPlacement(#[from] ParsePlacementError),
}

impl EngineError {
    /// Stable machine-readable code, used in JSON reports
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::UnknownBlockType(_) => "unknown_block_type",
            EngineError::NotPlaceable { .. } => "not_placeable",
            EngineError::Blocked { .. } => "blocked",
            EngineError::InvalidDimensions { .. } => "invalid_dimensions",
            EngineError::MalformedPlacement(_) => "malformed_placement",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_kind_identifiers_roundtrip() {
        for kind in BlockKind::ALL {
            assert_eq!(BlockKind::from_str(kind.as_str()), Some(kind));
            assert_eq!(
                BlockKind::from_str(&kind.as_str().to_lowercase()),
                Some(kind)
            );
        }
    }

    #[test]
    fn multi_character_identifiers_are_rejected() {
        assert_eq!(BlockKind::from_str("QQ"), None);
        assert_eq!(BlockKind::from_str("square"), None);
    }

    #[test]
    fn placement_parse_accepts_multi_digit_and_negative_columns() {
        assert_eq!("I12".parse::<Placement>(), Ok(Placement::new(BlockKind::I, 12)));
        assert_eq!("t-1".parse::<Placement>(), Ok(Placement::new(BlockKind::T, -1)));
    }

    #[test]
    fn placement_parse_errors() {
        assert_eq!("".parse::<Placement>(), Err(ParsePlacementError::Empty));
        assert_eq!(
            "K3".parse::<Placement>(),
            Err(ParsePlacementError::UnknownBlock("K".to_string()))
        );
        assert_eq!(
            "Qx".parse::<Placement>(),
            Err(ParsePlacementError::BadColumn("Qx".to_string()))
        );
    }

    #[test]
    fn placement_display_matches_encoding() {
        assert_eq!(Placement::new(BlockKind::L, 7).to_string(), "L7");
    }

    #[test]
    fn parse_error_converts_into_engine_error() {
        let err: EngineError = ParsePlacementError::Empty.into();
        assert!(matches!(err, EngineError::MalformedPlacement(_)));
    }
}
