//! # Hi-Q Solver Library
//!
//! This library provides the board model for the cross-shaped Hi-Q
//! (peg solitaire) puzzle and a depth-first backtracking solver that finds
//! the first jump sequence reducing the board to a single peg.
//!
//! It is used by two binaries:
//! - `human_player`: Allows interactive gameplay via the command line.
//! - `ai_solver`: Solves the standard opening (or a board loaded from a
//!   file) and outputs the sequence of jumps.
//!
//! ## Modules
//! - `engine`: Contains the board representation (`Board`), the cell and
//!   direction types, the move log, and the apply/revert mutation
//!   primitives.
//! - `rules`: Pure jump-legality queries over a board.
//! - `solver`: Provides the `solve` driver and its single-step
//!   `make_next_move` building block.
//! - `utils`: Provides utility functions, such as parsing board
//!   configurations from strings.

pub mod engine;
pub mod rules;
pub mod solver;
pub mod utils;
