//! Board representation and game-state types.
//!
//! Contains the core data structures for coordinates, cells, moves,
//! win detection, and the overall game state.

pub mod coord;
pub mod moves;
pub mod state;
pub mod wins;

pub use coord::{is_adjacent, Coord, BOARD_SIZE, CELL_COUNT, NEIGHBOR_OFFSETS};
pub use moves::{apply_move, validate_move, Move, MoveError};
pub use state::{Board, Phase, Player, FULL_PIECE_COUNT, PIECES_PER_PLAYER};
pub use wins::{outcome, Outcome};
