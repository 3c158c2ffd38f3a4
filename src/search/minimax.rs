//! Depth-bounded minimax search.
//!
//! Explores the game tree to a fixed depth with alternating maximize and
//! minimize turns. Terminal positions short-circuit the recursion before the
//! depth check; the clustering heuristic is consulted only at the depth
//! frontier. The root picks the best reachable successor board one ply out,
//! and `resolve_move` diffs it against the root to recover the move.
//!
//! Ties break leftmost: among equal-valued successors the first in
//! generation order wins. Root successors are evaluated in parallel with
//! rayon, but results are collected positionally so the tie-break stays
//! deterministic.

use rayon::prelude::*;

use crate::board::{outcome, Board, Coord, Move, Outcome, Phase, Player, CELL_COUNT};
use crate::eval::evaluate;
use crate::movegen::successors;

/// Default search depth in plies. Depth 3 keeps the exhaustive tree to a few
/// thousand nodes even in the densest move-phase positions.
pub const DEFAULT_DEPTH: u32 = 3;

/// Internal search faults. Inconsistency errors indicate a mismatch between
/// the search and the board representation and are not recoverable.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("no legal moves from the root position")]
    NoLegalMoves,

    #[error("state diff has {changed} changed cells, expected {expected}")]
    InconsistentDiff { changed: usize, expected: usize },

    #[error("state diff is not a legal {0:?}-phase transition")]
    MalformedDiff(Phase),
}

/// The move chosen by a search, with frontier score and node count.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    pub mv: Move,
    pub score: f32,
    pub nodes: u64,
}

/// Recursive minimax value of a position, plus the subtree node count.
///
/// `maximizer` is the fixed identity the score is expressed for;
/// `maximizing` says whose turn the current node is. Interior nodes only
/// need the value, so no successor is returned: the root keeps track of
/// which child produced the extremum.
fn minimax(
    board: &Board,
    maximizer: Player,
    depth: u32,
    max_depth: u32,
    maximizing: bool,
) -> (f32, u64) {
    if let Outcome::Win(winner) = outcome(board) {
        let value = if winner == maximizer { 1.0 } else { -1.0 };
        return (value, 1);
    }
    if depth >= max_depth {
        return (evaluate(board, maximizer), 1);
    }

    let mover = if maximizing {
        maximizer
    } else {
        maximizer.opponent()
    };
    let succs = successors(board, mover);
    if succs.is_empty() {
        // No legal continuation: score the position as it stands rather
        // than fault on an empty choice.
        return (evaluate(board, maximizer), 1);
    }

    let mut nodes: u64 = 1;
    let mut best = if maximizing {
        f32::NEG_INFINITY
    } else {
        f32::INFINITY
    };
    for succ in &succs {
        let (value, child_nodes) = minimax(succ, maximizer, depth + 1, max_depth, !maximizing);
        nodes += child_nodes;
        if (maximizing && value > best) || (!maximizing && value < best) {
            best = value;
        }
    }
    (best, nodes)
}

/// Picks the best successor board one ply from the root, on behalf of
/// `mover` as the maximizing player.
///
/// Successors are scored in parallel but indexed positionally, so the
/// leftmost of equal-valued candidates is chosen exactly as a sequential
/// scan would.
fn select_state(
    board: &Board,
    mover: Player,
    max_depth: u32,
) -> Result<(Board, f32, u64), SearchError> {
    let succs = successors(board, mover);
    if succs.is_empty() {
        return Err(SearchError::NoLegalMoves);
    }

    let scored: Vec<(f32, u64)> = succs
        .par_iter()
        .map(|succ| minimax(succ, mover, 1, max_depth, false))
        .collect();

    let mut best = 0;
    for (i, (value, _)) in scored.iter().enumerate() {
        if *value > scored[best].0 {
            best = i;
        }
    }
    let nodes: u64 = 1 + scored.iter().map(|(_, n)| n).sum::<u64>();
    Ok((succs[best], scored[best].0, nodes))
}

/// Reconstructs the move that turns `before` into `after` by diffing cells.
///
/// A drop-phase transition changes exactly one cell (empty to a piece);
/// a move-phase transition changes exactly two (one cleared, one gaining the
/// mover's color). Anything else is an internal inconsistency.
pub fn resolve_move(before: &Board, after: &Board) -> Result<Move, SearchError> {
    let mut diffs: Vec<(Coord, Option<Player>, Option<Player>)> = Vec::with_capacity(2);
    for index in 0..CELL_COUNT {
        let coord = Coord::from_index(index).expect("index within CELL_COUNT");
        let (b, a) = (before.get(coord), after.get(coord));
        if b != a {
            diffs.push((coord, b, a));
        }
    }

    let phase = before.phase();
    let expected = match phase {
        Phase::Drop => 1,
        Phase::Move => 2,
    };
    if diffs.len() != expected {
        return Err(SearchError::InconsistentDiff {
            changed: diffs.len(),
            expected,
        });
    }

    match phase {
        Phase::Drop => match diffs[0] {
            (target, None, Some(_)) => Ok(Move::Placement { target }),
            _ => Err(SearchError::MalformedDiff(phase)),
        },
        Phase::Move => {
            let source = diffs.iter().find(|(_, _, a)| a.is_none());
            let target = diffs.iter().find(|(_, b, _)| b.is_none());
            match (source, target) {
                (Some(&(source, Some(moved), None)), Some(&(target, None, Some(placed))))
                    if moved == placed =>
                {
                    Ok(Move::Relocation { target, source })
                }
                _ => Err(SearchError::MalformedDiff(phase)),
            }
        }
    }
}

/// Top-level entry: runs minimax for `mover` and resolves the chosen
/// successor into a move.
pub fn select_move(
    board: &Board,
    mover: Player,
    max_depth: u32,
) -> Result<SearchResult, SearchError> {
    let (chosen, score, nodes) = select_state(board, mover, max_depth)?;
    let mv = resolve_move(board, &chosen)?;
    Ok(SearchResult { mv, score, nodes })
}
