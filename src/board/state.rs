//! Game state representation.
//!
//! Holds a complete snapshot of a Teeko position: the 5x5 grid of cells.
//! The board is a fixed-size array indexed by `Coord::index()`, so it is
//! trivially copyable and successor generation never aliases a parent state.

use std::fmt;

use super::coord::{Coord, BOARD_SIZE, CELL_COUNT};

/// One of the two players. Teeko is played with black and red pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    Red,
}

impl Player {
    /// Returns the other player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::Black => Player::Red,
            Player::Red => Player::Black,
        }
    }

    /// Returns the single-character TEI abbreviation.
    pub const fn tei_char(self) -> char {
        match self {
            Player::Black => 'b',
            Player::Red => 'r',
        }
    }

    /// Parses a player from its single-character TEI abbreviation.
    pub fn from_tei_char(c: char) -> Option<Player> {
        match c {
            'b' => Some(Player::Black),
            'r' => Some(Player::Red),
            _ => None,
        }
    }
}

/// Stage of the game, derived from the piece count and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fewer than 8 pieces placed; a move drops a new piece on an empty cell.
    Drop,
    /// All 8 pieces placed; a move relocates a piece to an adjacent empty cell.
    Move,
}

/// Number of pieces each player has available.
pub const PIECES_PER_PLAYER: usize = 4;

/// Total pieces on a full board; at this count the drop phase is over.
pub const FULL_PIECE_COUNT: usize = 2 * PIECES_PER_PLAYER;

/// Complete board state.
///
/// Cells are `Option<Player>`: `None` is empty. The array is row-major,
/// rows 0..4 then columns 0..4 within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Player>; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn empty() -> Self {
        Board {
            cells: [None; CELL_COUNT],
        }
    }

    /// Returns the cell contents at a coordinate.
    pub fn get(&self, coord: Coord) -> Option<Player> {
        self.cells[coord.index()]
    }

    /// Sets the cell contents at a coordinate.
    pub fn set(&mut self, coord: Coord, cell: Option<Player>) {
        self.cells[coord.index()] = cell;
    }

    /// Counts all pieces on the board, both colors.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Derives the current phase from the piece count.
    pub fn phase(&self) -> Phase {
        if self.piece_count() < FULL_PIECE_COUNT {
            Phase::Drop
        } else {
            Phase::Move
        }
    }

    /// Iterates the coordinates holding the given player's pieces,
    /// in row-major order.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == Some(player))
            .map(|(i, _)| Coord::from_index(i).expect("index within CELL_COUNT"))
    }

    /// Iterates the coordinates of all empty cells, in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| Coord::from_index(i).expect("index within CELL_COUNT"))
    }
}

impl fmt::Display for Board {
    /// Renders the board as a console diagram:
    ///
    /// ```text
    /// 0: . b . . .
    /// 1: . . . . .
    /// 2: . . . . .
    /// 3: . . . . .
    /// 4: . . r . .
    ///    A B C D E
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            write!(f, "{}:", row)?;
            for col in 0..BOARD_SIZE as u8 {
                let coord = Coord::new(row, col).expect("row and col within BOARD_SIZE");
                let c = match self.get(coord) {
                    Some(p) => p.tei_char(),
                    None => '.',
                };
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   A B C D E")
    }
}
