//! Move descriptors and state transitions.
//!
//! A move is either a placement (drop phase) or a relocation of one of the
//! mover's pieces to an adjacent empty cell (move phase). `apply_move` is the
//! pure transition function; `validate_move` is the legality check run on
//! externally supplied moves before they are applied.

use std::fmt;

use super::coord::{is_adjacent, Coord};
use super::state::{Board, Phase, Player};

/// An externally visible move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Drop a new piece on an empty cell.
    Placement { target: Coord },
    /// Slide the piece at `source` to the adjacent empty cell `target`.
    Relocation { target: Coord, source: Coord },
}

impl Move {
    /// Parses move notation: a single square ("B3") for a placement, or a
    /// source square immediately followed by a target square ("B3C2") for
    /// a relocation.
    pub fn from_notation(s: &str) -> Option<Move> {
        if !s.is_ascii() {
            return None;
        }
        match s.len() {
            2 => Some(Move::Placement {
                target: Coord::from_square(s)?,
            }),
            4 => {
                let source = Coord::from_square(&s[..2])?;
                let target = Coord::from_square(&s[2..])?;
                Some(Move::Relocation { target, source })
            }
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Placement { target } => write!(f, "{}", target),
            Move::Relocation { target, source } => write!(f, "{}{}", source, target),
        }
    }
}

/// Reasons an externally supplied move is illegal.
#[derive(Debug, thiserror::Error)]
pub enum MoveError {
    #[error("target square {0} is occupied")]
    TargetOccupied(Coord),

    #[error("no {1:?} piece at source square {0}")]
    SourceNotOwned(Coord, Player),

    // Not named `source`: thiserror reserves that field for error chaining.
    #[error("can only move to an adjacent square, {from} to {target} is not")]
    NotAdjacent { from: Coord, target: Coord },

    #[error("placements are only legal while pieces remain to be dropped")]
    PlacementInMovePhase,

    #[error("relocations are only legal once all pieces are on the board")]
    RelocationInDropPhase,
}

/// Checks an externally supplied move against the current position.
///
/// Bounds are guaranteed by `Coord` construction; this checks phase,
/// occupancy, source ownership, and adjacency.
pub fn validate_move(board: &Board, mv: Move, color: Player) -> Result<(), MoveError> {
    match mv {
        Move::Placement { target } => {
            if board.phase() != Phase::Drop {
                return Err(MoveError::PlacementInMovePhase);
            }
            if board.get(target).is_some() {
                return Err(MoveError::TargetOccupied(target));
            }
        }
        Move::Relocation { target, source } => {
            if board.phase() != Phase::Move {
                return Err(MoveError::RelocationInDropPhase);
            }
            if board.get(source) != Some(color) {
                return Err(MoveError::SourceNotOwned(source, color));
            }
            if !is_adjacent(source, target) {
                return Err(MoveError::NotAdjacent { from: source, target });
            }
            if board.get(target).is_some() {
                return Err(MoveError::TargetOccupied(target));
            }
        }
    }
    Ok(())
}

/// Applies a move, returning the resulting board. Pure: the input board is
/// untouched. The move is assumed to have been validated by the caller.
pub fn apply_move(board: &Board, mv: Move, color: Player) -> Board {
    let mut next = *board;
    match mv {
        Move::Placement { target } => {
            next.set(target, Some(color));
        }
        Move::Relocation { target, source } => {
            next.set(source, None);
            next.set(target, Some(color));
        }
    }
    next
}
