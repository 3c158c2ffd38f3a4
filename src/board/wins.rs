//! Terminal-condition detection.
//!
//! Teeko has five winning shapes, each of 4 same-colored pieces: a
//! horizontal run, a vertical run, a run on either diagonal, and a 2x2 box.
//! Detection scans all anchor positions exhaustively and is symmetric in
//! both colors; on a legal board at most one color can hold a winning shape.

use super::coord::Coord;
use super::state::{Board, Player};

/// The terminal status of a position. A win is permanent once reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Undecided,
}

impl Outcome {
    /// Returns the winning player, if the game is decided.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(p) => Some(p),
            Outcome::Undecided => None,
        }
    }

    pub fn is_decided(self) -> bool {
        matches!(self, Outcome::Win(_))
    }
}

/// Returns the owner of a run of 4 cells starting at (row, col) and stepping
/// by (dr, dc), if all four hold the same color.
fn run_owner(board: &Board, row: u8, col: u8, dr: i8, dc: i8) -> Option<Player> {
    let anchor = Coord::new(row, col)?;
    let first = board.get(anchor)?;
    let mut cell = anchor;
    for _ in 0..3 {
        cell = cell.offset(dr, dc)?;
        if board.get(cell) != Some(first) {
            return None;
        }
    }
    Some(first)
}

/// Returns the owner of the 2x2 box anchored at (row, col), if all four
/// cells hold the same color.
fn box_owner(board: &Board, row: u8, col: u8) -> Option<Player> {
    let first = board.get(Coord::new(row, col)?)?;
    for (dr, dc) in [(0, 1), (1, 0), (1, 1)] {
        let cell = Coord::new(row + dr, col + dc)?;
        if board.get(cell) != Some(first) {
            return None;
        }
    }
    Some(first)
}

/// Checks the board for a winning configuration of either color.
///
/// Pure and turn-independent: callable on any state without mutation.
pub fn outcome(board: &Board) -> Outcome {
    // Horizontal runs: rows 0..4, starting columns 0..1.
    for row in 0..5 {
        for col in 0..2 {
            if let Some(p) = run_owner(board, row, col, 0, 1) {
                return Outcome::Win(p);
            }
        }
    }

    // Vertical runs: starting rows 0..1, columns 0..4.
    for row in 0..2 {
        for col in 0..5 {
            if let Some(p) = run_owner(board, row, col, 1, 0) {
                return Outcome::Win(p);
            }
        }
    }

    // "\" diagonal runs: anchors in the top-left 2x2.
    for row in 0..2 {
        for col in 0..2 {
            if let Some(p) = run_owner(board, row, col, 1, 1) {
                return Outcome::Win(p);
            }
        }
    }

    // "/" diagonal runs: anchors in the top-right 2x2.
    for row in 0..2 {
        for col in 3..5 {
            if let Some(p) = run_owner(board, row, col, 1, -1) {
                return Outcome::Win(p);
            }
        }
    }

    // 2x2 boxes: anchors in rows and columns 0..3.
    for row in 0..4 {
        for col in 0..4 {
            if let Some(p) = box_owner(board, row, col) {
                return Outcome::Win(p);
            }
        }
    }

    Outcome::Undecided
}
