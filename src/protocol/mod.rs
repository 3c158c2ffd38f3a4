//! TEI (Teeko Engine Interface) protocol.
//!
//! Line-oriented text protocol over stdin/stdout: command parsing and the
//! TFEN position notation.

pub mod parser;
pub mod tfen;

pub use parser::{parse_command, Command};
pub use tfen::{format_tfen, parse_tfen, TfenError};
