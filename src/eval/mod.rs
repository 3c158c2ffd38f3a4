//! Position evaluation.
//!
//! Static scoring used at the search frontier. Terminal detection lives in
//! `board::wins`; this module layers the clustering heuristic on top of it.

pub mod heuristic;

pub use heuristic::evaluate;
