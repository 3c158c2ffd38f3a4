//! TFEN (Teeko FEN) encoding and decoding.
//!
//! TFEN is a compact string notation for a Teeko position, inspired by chess
//! FEN: five row sections of five characters each, joined by '/'. 'b' and
//! 'r' are pieces, '.' is an empty cell. Rows run top to bottom, columns
//! left to right. The phase is not encoded because it is derived from the
//! piece count.
//!
//! Example (black pair on row 0, red pair on row 4):
//! `bb.../...../...../...../rr...`

use crate::board::{Board, Coord, Player, BOARD_SIZE, PIECES_PER_PLAYER};

/// Errors that can occur during TFEN parsing.
#[derive(Debug, thiserror::Error)]
pub enum TfenError {
    #[error("expected 5 rows separated by '/', got {0}")]
    WrongRowCount(usize),

    #[error("row {row} has {len} cells, expected 5")]
    WrongRowLength { row: usize, len: usize },

    #[error("invalid cell character: '{0}'")]
    InvalidCell(char),

    #[error("player '{0}' has {1} pieces, at most 4 are legal")]
    TooManyPieces(char, usize),
}

/// Parses a TFEN string into a board.
pub fn parse_tfen(s: &str) -> Result<Board, TfenError> {
    let rows: Vec<&str> = s.split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(TfenError::WrongRowCount(rows.len()));
    }

    let mut board = Board::empty();
    for (row, section) in rows.iter().enumerate() {
        let cells: Vec<char> = section.chars().collect();
        if cells.len() != BOARD_SIZE {
            return Err(TfenError::WrongRowLength {
                row,
                len: cells.len(),
            });
        }
        for (col, &c) in cells.iter().enumerate() {
            let cell = match c {
                '.' => None,
                _ => Some(Player::from_tei_char(c).ok_or(TfenError::InvalidCell(c))?),
            };
            let coord = Coord::new(row as u8, col as u8).expect("row and col within BOARD_SIZE");
            board.set(coord, cell);
        }
    }

    for player in [Player::Black, Player::Red] {
        let count = board.pieces(player).count();
        if count > PIECES_PER_PLAYER {
            return Err(TfenError::TooManyPieces(player.tei_char(), count));
        }
    }

    Ok(board)
}

/// Formats a board as a TFEN string.
pub fn format_tfen(board: &Board) -> String {
    let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));
    for row in 0..BOARD_SIZE as u8 {
        if row > 0 {
            out.push('/');
        }
        for col in 0..BOARD_SIZE as u8 {
            let coord = Coord::new(row, col).expect("row and col within BOARD_SIZE");
            out.push(match board.get(coord) {
                Some(p) => p.tei_char(),
                None => '.',
            });
        }
    }
    out
}
