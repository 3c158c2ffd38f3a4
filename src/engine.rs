//! Engine state management.
//!
//! Holds the current board position, the engine's color, and engine options,
//! and runs search for the `go` command. The engine assumes positions it is
//! given are legal; externally supplied moves via `play` are validated and
//! rejected without changing the position.

use std::collections::HashMap;
use std::io::Write;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{apply_move, outcome, validate_move, Board, Move, Outcome, Player};
use crate::movegen::random_move;
use crate::protocol::tfen::parse_tfen;
use crate::search::{select_move, SearchError, DEFAULT_DEPTH};

/// Largest depth accepted from options; beyond this the exhaustive tree
/// becomes impractical without pruning.
const MAX_DEPTH: u32 = 6;

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub position: Option<Board>,
    pub color: Option<Player>,
    pub options: HashMap<String, String>,
    rng: SmallRng,
}

impl Engine {
    /// Creates a new engine with no position or color.
    pub fn new() -> Self {
        Engine {
            position: None,
            color: None,
            options: HashMap::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Resets all engine state for a new game.
    pub fn new_game(&mut self) {
        self.position = None;
        self.color = None;
    }

    /// Sets the current board position from a TFEN string.
    /// Returns an error message on failure.
    pub fn set_position(&mut self, tfen: &str) -> Result<(), String> {
        match parse_tfen(tfen) {
            Ok(board) => {
                self.position = Some(board);
                Ok(())
            }
            Err(e) => Err(format!("failed to parse TFEN: {}", e)),
        }
    }

    /// Sets the color the engine plays.
    pub fn set_color(&mut self, color: Player) {
        self.color = Some(color);
    }

    /// Sets an engine option.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        self.options.insert(name, value.unwrap_or_default());
    }

    /// Returns the configured search depth from options, or the default.
    fn depth(&self) -> u32 {
        self.options
            .get("Depth")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_DEPTH)
            .clamp(1, MAX_DEPTH)
    }

    /// Handles the TEI handshake: writes id, options, protocol_version,
    /// and teiok.
    pub fn handle_tei<W: Write>(&self, out: &mut W) {
        writeln!(out, "id name samaritan").unwrap();
        writeln!(out, "id author samaritan").unwrap();
        writeln!(out, "option name Depth type spin default 3 min 1 max 6").unwrap();
        writeln!(out, "protocol_version 1").unwrap();
        writeln!(out, "teiok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) {
        writeln!(out, "readyok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `play` command: validates the move against the current
    /// position, applying it only if legal. Illegal moves are reported and
    /// leave the position unchanged so the server can re-prompt.
    pub fn handle_play<W: Write>(&mut self, color: Player, mv: Move, out: &mut W) {
        let board = match &self.position {
            Some(b) => *b,
            None => {
                eprintln!("play: no position set");
                return;
            }
        };

        match validate_move(&board, mv, color) {
            Ok(()) => {
                self.position = Some(apply_move(&board, mv, color));
            }
            Err(e) => {
                writeln!(out, "error illegal move: {}", e).unwrap();
                out.flush().unwrap();
            }
        }
    }

    /// Handles the `result` command: reports the terminal status of the
    /// current position (`outcome b`, `outcome r`, or `outcome none`).
    pub fn handle_result<W: Write>(&self, out: &mut W) {
        let board = match &self.position {
            Some(b) => b,
            None => {
                eprintln!("result: no position set");
                return;
            }
        };
        match outcome(board) {
            Outcome::Win(p) => writeln!(out, "outcome {}", p.tei_char()).unwrap(),
            Outcome::Undecided => writeln!(out, "outcome none").unwrap(),
        }
        out.flush().unwrap();
    }

    /// Handles the `show` command: prints the position as a console diagram.
    pub fn handle_show<W: Write>(&self, out: &mut W) {
        match &self.position {
            Some(board) => writeln!(out, "{}", board).unwrap(),
            None => eprintln!("show: no position set"),
        }
        out.flush().unwrap();
    }

    /// Handles the `go` command: searches the current position for the
    /// engine's color and reports `bestmove`. If no color was set, one is
    /// assigned at random, as the original player did at startup.
    pub fn handle_go<W: Write>(&mut self, depth_override: Option<u32>, out: &mut W) {
        let board = match &self.position {
            Some(b) => *b,
            None => {
                eprintln!("go: no position set");
                return;
            }
        };

        let color = match self.color {
            Some(c) => c,
            None => {
                let c = if self.rng.gen_bool(0.5) {
                    Player::Black
                } else {
                    Player::Red
                };
                self.color = Some(c);
                writeln!(out, "info string playing as {}", c.tei_char()).unwrap();
                c
            }
        };

        let depth = depth_override
            .map(|d| d.clamp(1, MAX_DEPTH))
            .unwrap_or_else(|| self.depth());

        let start = Instant::now();
        match select_move(&board, color, depth) {
            Ok(result) => {
                let elapsed_ms = start.elapsed().as_millis() as u64;
                writeln!(
                    out,
                    "info depth {} nodes {} score {:.3} time {}",
                    depth, result.nodes, result.score, elapsed_ms
                )
                .unwrap();
                writeln!(out, "bestmove {}", result.mv).unwrap();
            }
            Err(SearchError::NoLegalMoves) => {
                writeln!(out, "bestmove none").unwrap();
            }
            Err(e) => {
                // Resolver faults must not stall the session; any legal
                // move keeps the game going.
                eprintln!("go: search failed: {}", e);
                match random_move(&board, color, &mut self.rng) {
                    Some(mv) => writeln!(out, "bestmove {}", mv).unwrap(),
                    None => writeln!(out, "bestmove none").unwrap(),
                }
            }
        }
        out.flush().unwrap();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}
