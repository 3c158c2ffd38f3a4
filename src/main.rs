//! Samaritan -- a Teeko engine implementing the TEI protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! following the TEI (Teeko Engine Interface) convention.

use std::io::{self, BufRead};

use samaritan::engine::Engine;
use samaritan::protocol::parser::{parse_command, Command};

/// Runs the main TEI protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Tei => {
                engine.handle_tei(&mut out);
            }
            Command::IsReady => {
                engine.handle_isready(&mut out);
            }
            Command::SetOption { name, value } => {
                engine.set_option(name, value);
            }
            Command::NewGame => {
                engine.new_game();
            }
            Command::Position { tfen } => {
                if let Err(e) = engine.set_position(&tfen) {
                    eprintln!("{}", e);
                }
            }
            Command::SetColor { color } => {
                engine.set_color(color);
            }
            Command::Play { color, mv } => {
                engine.handle_play(color, mv, &mut out);
            }
            Command::Go { depth } => {
                engine.handle_go(depth, &mut out);
            }
            Command::Result => {
                engine.handle_result(&mut out);
            }
            Command::Show => {
                engine.handle_show(&mut out);
            }
            Command::Quit => {
                break;
            }
        }
    }
}
