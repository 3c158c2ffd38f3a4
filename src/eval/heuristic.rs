//! Heuristic position evaluation.
//!
//! Scores an undecided position for a maximizing player by measuring local
//! piece clustering in the interior 3x3 of the board: a piece earns weight
//! for each same-colored neighbor, cardinal contacts counting double.
//! Clusters reach toward every one of the five winning shapes, so density
//! is a cheap proxy for progress. Decided positions score exactly +/-1;
//! heuristic scores stay strictly inside that range.

use crate::board::{outcome, Board, Coord, Outcome, Player, NEIGHBOR_OFFSETS, PIECES_PER_PLAYER};

/// Weight of a same-colored neighbor sharing an edge.
pub const CARDINAL_WEIGHT: i32 = 2;

/// Weight of a same-colored neighbor sharing only a corner.
pub const DIAGONAL_WEIGHT: i32 = 1;

/// Maximum raw cluster score of a single cell (4 cardinal + 4 diagonal
/// neighbors, all same-colored); used to normalize per-cell scores to [0,1].
pub const CELL_SCORE_SCALE: f32 = 12.0;

/// Raw clustering score of one cell: weighted count of same-colored neighbors.
fn cell_cluster(board: &Board, coord: Coord, color: Player) -> i32 {
    let mut score = 0;
    for (dr, dc) in NEIGHBOR_OFFSETS {
        if let Some(neighbor) = coord.offset(dr, dc) {
            if board.get(neighbor) == Some(color) {
                score += if dr == 0 || dc == 0 {
                    CARDINAL_WEIGHT
                } else {
                    DIAGONAL_WEIGHT
                };
            }
        }
    }
    score
}

/// Evaluates a position from `maximizer`'s perspective.
///
/// Decided positions return +1 (maximizer won) or -1 (opponent won).
/// Otherwise each occupied cell of the interior 3x3 contributes its
/// normalized cluster score, added for the maximizer and subtracted for
/// the opponent, and the aggregate is averaged over the 4 pieces a side
/// owns. A piece has at most 3 same-colored neighbors, so a cell tops out
/// at half the scale and the average stays within +/-0.5: no non-terminal
/// score can outrank a win.
pub fn evaluate(board: &Board, maximizer: Player) -> f32 {
    if let Outcome::Win(winner) = outcome(board) {
        return if winner == maximizer { 1.0 } else { -1.0 };
    }

    let mut score: f32 = 0.0;
    for row in 1..=3 {
        for col in 1..=3 {
            let coord = Coord::new(row, col).expect("interior coordinate in bounds");
            if let Some(color) = board.get(coord) {
                let normalized = cell_cluster(board, coord, color) as f32 / CELL_SCORE_SCALE;
                if color == maximizer {
                    score += normalized;
                } else {
                    score -= normalized;
                }
            }
        }
    }
    score / PIECES_PER_PLAYER as f32
}
