//! TEI command parser.
//!
//! Parses incoming TEI protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

use crate::board::{Move, Player};

/// A parsed server-to-engine TEI command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Initialize the TEI protocol handshake.
    Tei,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Reset engine state for a new game.
    NewGame,

    /// Set the board position from a TFEN string.
    Position { tfen: String },

    /// Set the color the engine plays.
    SetColor { color: Player },

    /// Apply an external move for the given color to the current position.
    Play { color: Player, mv: Move },

    /// Begin calculating the best move, optionally at a given depth.
    Go { depth: Option<u32> },

    /// Report the terminal status of the current position.
    Result,

    /// Print the current position as an ASCII diagram.
    Show,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    match tokens[0] {
        "tei" => Some(Command::Tei),
        "isready" => Some(Command::IsReady),
        "newgame" => Some(Command::NewGame),
        "result" => Some(Command::Result),
        "show" => Some(Command::Show),
        "quit" => Some(Command::Quit),

        "setoption" => parse_setoption(&tokens),
        "position" => parse_position(&tokens),
        "setcolor" => parse_setcolor(&tokens),
        "play" => parse_play(&tokens),
        "go" => parse_go(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        eprintln!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    // Find the "value" keyword to split name from value.
    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                eprintln!("malformed setoption: empty name");
                return None;
            }
            let name = name_parts.join(" ");
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name, value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `position <tfen>`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed position: expected 'position <tfen>'");
        return None;
    }
    // TFEN is a single token (no spaces) following "position".
    Some(Command::Position {
        tfen: tokens[1].to_string(),
    })
}

/// Parses a single-character color token ('b' or 'r').
fn parse_color(token: &str) -> Option<Player> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Player::from_tei_char(c),
        _ => None,
    }
}

/// Parses `setcolor <b|r>`.
fn parse_setcolor(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed setcolor: expected 'setcolor <b|r>'");
        return None;
    }
    match parse_color(tokens[1]) {
        Some(color) => Some(Command::SetColor { color }),
        None => {
            eprintln!("unknown color: '{}'", tokens[1]);
            None
        }
    }
}

/// Parses `play <b|r> <move>` where the move is a placement square ("B3")
/// or a source-target square pair ("B3C2").
fn parse_play(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 {
        eprintln!("malformed play: expected 'play <b|r> <move>'");
        return None;
    }
    let color = match parse_color(tokens[1]) {
        Some(c) => c,
        None => {
            eprintln!("unknown color: '{}'", tokens[1]);
            return None;
        }
    };
    let mv = match Move::from_notation(tokens[2]) {
        Some(m) => m,
        None => {
            eprintln!("malformed move: '{}'", tokens[2]);
            return None;
        }
    };
    Some(Command::Play { color, mv })
}

/// Parses `go [depth <n>]`.
fn parse_go(tokens: &[&str]) -> Option<Command> {
    let mut depth = None;
    let mut i = 1;

    while i < tokens.len() {
        if tokens[i] == "depth" {
            i += 1;
            if i < tokens.len() {
                match tokens[i].parse::<u32>() {
                    Ok(v) => depth = Some(v),
                    Err(_) => {
                        eprintln!("invalid depth value: '{}'", tokens[i]);
                    }
                }
            }
        }
        i += 1;
    }

    Some(Command::Go { depth })
}
