//! Legal move generation.
//!
//! Generates the set of legal moves (and the boards they produce) for a
//! given player in the current position. Enumeration order is deterministic:
//! row-major over the board, and for relocations row-major over the 8
//! neighbor offsets of each piece.
//!
//! Relocation destinations use true 8-neighbor adjacency on the whole board,
//! including column 0. Teeko has no edge restriction on destinations.

use rand::Rng;

use crate::board::{apply_move, Board, Move, Phase, Player, NEIGHBOR_OFFSETS};

/// Returns every legal move for `mover` in deterministic scan order.
///
/// Drop phase: one placement per empty cell. Move phase: one relocation per
/// (own piece, adjacent empty cell) pair. A player with no pieces on a
/// move-phase board has no moves.
pub fn legal_moves(board: &Board, mover: Player) -> Vec<Move> {
    match board.phase() {
        Phase::Drop => board
            .empty_cells()
            .map(|target| Move::Placement { target })
            .collect(),
        Phase::Move => {
            let mut moves = Vec::new();
            for source in board.pieces(mover) {
                for (dr, dc) in NEIGHBOR_OFFSETS {
                    if let Some(target) = source.offset(dr, dc) {
                        if board.get(target).is_none() {
                            moves.push(Move::Relocation { target, source });
                        }
                    }
                }
            }
            moves
        }
    }
}

/// Returns every board reachable by one legal move of `mover`, in the same
/// order as `legal_moves`. Each successor is an independent copy; the input
/// board is never mutated.
pub fn successors(board: &Board, mover: Player) -> Vec<Board> {
    legal_moves(board, mover)
        .into_iter()
        .map(|mv| apply_move(board, mv, mover))
        .collect()
}

/// Picks a uniformly random legal move, or `None` if the player has none.
/// Fallback for when search cannot produce a move.
pub fn random_move(board: &Board, mover: Player, rng: &mut impl Rng) -> Option<Move> {
    let moves = legal_moves(board, mover);
    if moves.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..moves.len());
    Some(moves[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn c(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    fn board_with(black: &[(u8, u8)], red: &[(u8, u8)]) -> Board {
        let mut board = Board::empty();
        for &(r, col) in black {
            board.set(c(r, col), Some(Player::Black));
        }
        for &(r, col) in red {
            board.set(c(r, col), Some(Player::Red));
        }
        board
    }

    /// A move-phase board with black in the top-left corner region.
    fn move_phase_board() -> Board {
        board_with(
            &[(0, 0), (0, 1), (1, 0), (2, 2)],
            &[(4, 4), (4, 1), (2, 4), (3, 3)],
        )
    }

    #[test]
    fn drop_phase_one_successor_per_empty_cell() {
        let board = board_with(&[(2, 2)], &[(1, 1)]);
        let succs = successors(&board, Player::Black);
        assert_eq!(succs.len(), 23);
        for s in &succs {
            assert_eq!(s.piece_count(), board.piece_count() + 1);
            assert_eq!(s.pieces(Player::Red).count(), 1);
        }
    }

    #[test]
    fn empty_board_has_25_placements() {
        let moves = legal_moves(&Board::empty(), Player::Red);
        assert_eq!(moves.len(), 25);
        assert!(moves.iter().all(|m| matches!(m, Move::Placement { .. })));
    }

    #[test]
    fn move_phase_conserves_piece_count() {
        let board = move_phase_board();
        let succs = successors(&board, Player::Black);
        assert!(!succs.is_empty());
        for s in &succs {
            assert_eq!(s.piece_count(), 8);
            assert_eq!(s.pieces(Player::Black).count(), 4);
            assert_eq!(s.pieces(Player::Red).count(), 4);
        }
    }

    #[test]
    fn move_phase_only_relocations_of_own_pieces() {
        let board = move_phase_board();
        for mv in legal_moves(&board, Player::Red) {
            match mv {
                Move::Relocation { target, source } => {
                    assert_eq!(board.get(source), Some(Player::Red));
                    assert_eq!(board.get(target), None);
                }
                Move::Placement { .. } => panic!("placement generated in move phase"),
            }
        }
    }

    #[test]
    fn generation_order_is_deterministic() {
        let board = move_phase_board();
        let a = legal_moves(&board, Player::Black);
        let b = legal_moves(&board, Player::Black);
        assert_eq!(a, b);

        // Row-major: the first mover piece is (0,0), whose first in-bounds
        // empty neighbor in offset order is (1,1).
        assert_eq!(
            a[0],
            Move::Relocation {
                target: c(1, 1),
                source: c(0, 0),
            }
        );
    }

    #[test]
    fn column_zero_is_a_legal_destination() {
        // Black piece at (1,1) surrounded except for (1,0) and (2,0):
        // destinations in column 0 must be generated.
        let board = board_with(
            &[(1, 1), (0, 0), (0, 1), (0, 2)],
            &[(1, 2), (2, 1), (2, 2), (4, 4)],
        );
        assert_eq!(board.phase(), Phase::Move);
        let moves = legal_moves(&board, Player::Black);
        assert!(moves.contains(&Move::Relocation {
            target: c(1, 0),
            source: c(1, 1),
        }));
        assert!(moves.contains(&Move::Relocation {
            target: c(2, 0),
            source: c(1, 1),
        }));
    }

    #[test]
    fn corner_piece_with_one_free_neighbor() {
        // Black at (0,0) with every neighbor occupied except (0,1).
        let board = board_with(
            &[(0, 0), (4, 0), (4, 1), (4, 2)],
            &[(1, 0), (1, 1), (3, 0), (3, 1)],
        );
        assert_eq!(board.phase(), Phase::Move);
        let from_corner: Vec<Move> = legal_moves(&board, Player::Black)
            .into_iter()
            .filter(|m| matches!(m, Move::Relocation { source, .. } if *source == c(0, 0)))
            .collect();
        assert_eq!(
            from_corner,
            vec![Move::Relocation {
                target: c(0, 1),
                source: c(0, 0),
            }]
        );
    }

    #[test]
    fn input_board_is_not_mutated() {
        let board = move_phase_board();
        let snapshot = board;
        let _ = successors(&board, Player::Black);
        let _ = successors(&board, Player::Red);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn no_pieces_means_no_moves_in_move_phase() {
        // 8 pieces all belonging to red: black has no relocations.
        let board = board_with(
            &[],
            &[
                (0, 0),
                (0, 2),
                (0, 4),
                (2, 0),
                (2, 2),
                (2, 4),
                (4, 0),
                (4, 2),
            ],
        );
        assert_eq!(board.phase(), Phase::Move);
        assert!(successors(&board, Player::Black).is_empty());
    }

    #[test]
    fn random_move_is_legal() {
        let board = move_phase_board();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mv = random_move(&board, Player::Red, &mut rng).unwrap();
            assert!(legal_moves(&board, Player::Red).contains(&mv));
        }
    }

    #[test]
    fn random_move_none_without_moves() {
        let board = board_with(
            &[],
            &[
                (0, 0),
                (0, 2),
                (0, 4),
                (2, 0),
                (2, 2),
                (2, 4),
                (4, 0),
                (4, 2),
            ],
        );
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_move(&board, Player::Black, &mut rng).is_none());
    }
}
