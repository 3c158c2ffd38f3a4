//! Search and move selection.
//!
//! Depth-bounded minimax over the Teeko game tree, plus the resolver that
//! turns a chosen successor state back into a move descriptor.

pub mod minimax;

pub use minimax::{resolve_move, select_move, SearchError, SearchResult, DEFAULT_DEPTH};
