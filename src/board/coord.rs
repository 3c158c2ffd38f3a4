//! Board coordinates.
//!
//! Coordinates are row/column pairs on the 5x5 grid, constructed only
//! through checked constructors so a `Coord` is always in bounds. Rows are
//! numbered 0..4 top to bottom, columns A..E left to right in the square
//! notation ("B3" is column 1, row 3).

use std::fmt;

/// Side length of the board.
pub const BOARD_SIZE: usize = 5;

/// Total number of cells.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The 8 neighbor offsets in row-major order. Move generation and
/// clustering both iterate this array, so enumeration order is shared.
pub const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// An in-bounds cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Creates a coordinate, or `None` if out of bounds.
    pub fn new(row: u8, col: u8) -> Option<Coord> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    /// Creates a coordinate from a row-major cell index.
    pub fn from_index(index: usize) -> Option<Coord> {
        if index < CELL_COUNT {
            Some(Coord {
                row: (index / BOARD_SIZE) as u8,
                col: (index % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }

    /// Parses square notation: a column letter A..E followed by a row
    /// digit 0..4.
    pub fn from_square(s: &str) -> Option<Coord> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = bytes[0].checked_sub(b'A')?;
        let row = bytes[1].checked_sub(b'0')?;
        Coord::new(row, col)
    }

    /// Row-major cell index.
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Returns the coordinate displaced by (dr, dc), or `None` if that
    /// falls off the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Coord> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Coord::new(row as u8, col as u8)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row)
    }
}

/// True if the two coordinates are distinct and within one step of each
/// other in both row and column. All 8 surrounding cells count, on every
/// part of the board including column 0 and the edges.
pub fn is_adjacent(a: Coord, b: Coord) -> bool {
    let dr = (a.row as i8 - b.row as i8).abs();
    let dc = (a.col as i8 - b.col as i8).abs();
    dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn new_rejects_out_of_bounds() {
        assert!(Coord::new(0, 0).is_some());
        assert!(Coord::new(4, 4).is_some());
        assert!(Coord::new(5, 0).is_none());
        assert!(Coord::new(0, 5).is_none());
        assert!(Coord::new(255, 255).is_none());
    }

    #[test]
    fn index_roundtrip() {
        for index in 0..CELL_COUNT {
            let coord = Coord::from_index(index).unwrap();
            assert_eq!(coord.index(), index);
        }
        assert!(Coord::from_index(CELL_COUNT).is_none());
    }

    #[test]
    fn square_notation_roundtrip() {
        assert_eq!(Coord::from_square("B3"), Coord::new(3, 1));
        assert_eq!(Coord::from_square("A0"), Coord::new(0, 0));
        assert_eq!(Coord::from_square("E4"), Coord::new(4, 4));
        assert_eq!(c(3, 1).to_string(), "B3");
        assert_eq!(c(0, 0).to_string(), "A0");
    }

    #[test]
    fn square_notation_rejects_malformed() {
        assert!(Coord::from_square("").is_none());
        assert!(Coord::from_square("B").is_none());
        assert!(Coord::from_square("B5").is_none());
        assert!(Coord::from_square("F0").is_none());
        assert!(Coord::from_square("3B").is_none());
        assert!(Coord::from_square("B33").is_none());
    }

    #[test]
    fn offset_stays_in_bounds() {
        assert_eq!(c(2, 2).offset(-1, 1), Coord::new(1, 3));
        assert_eq!(c(0, 0).offset(-1, 0), None);
        assert_eq!(c(0, 0).offset(0, -1), None);
        assert_eq!(c(4, 4).offset(1, 0), None);
        assert_eq!(c(4, 4).offset(0, 1), None);
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let neighbors: Vec<Coord> = NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| c(2, 2).offset(dr, dc))
            .collect();
        assert_eq!(neighbors.len(), 8);
        assert!(neighbors.iter().all(|&n| is_adjacent(c(2, 2), n)));
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        let neighbors: Vec<Coord> = NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| c(0, 0).offset(dr, dc))
            .collect();
        assert_eq!(neighbors, vec![c(0, 1), c(1, 0), c(1, 1)]);
    }

    #[test]
    fn column_zero_is_adjacent_to_column_one() {
        assert!(is_adjacent(c(2, 0), c(2, 1)));
        assert!(is_adjacent(c(2, 0), c(1, 1)));
        assert!(is_adjacent(c(2, 0), c(3, 0)));
    }

    #[test]
    fn adjacency_is_symmetric_and_irreflexive() {
        assert!(!is_adjacent(c(2, 2), c(2, 2)));
        assert!(is_adjacent(c(1, 1), c(2, 2)));
        assert!(is_adjacent(c(2, 2), c(1, 1)));
        assert!(!is_adjacent(c(0, 0), c(0, 2)));
        assert!(!is_adjacent(c(0, 0), c(2, 2)));
    }
}
