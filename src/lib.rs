//! Core Sudoku engine: board model, constraint checking, backtracking
//! solving, and puzzle generation.
//!
//! The engine is synchronous and owns nothing across calls — a solve works
//! on its own copy of the board, and any UI layer drives it from whatever
//! worker it likes, observing progress through [`SolveObserver`].

mod board;
mod digits;
mod generator;
pub mod rules;
mod solver;
mod trace;

pub use board::{Board, Position};
pub use digits::{DigitSet, DigitSetIter};
pub use generator::Generator;
pub use rules::{first_unfilled_cell, is_solution, legal_values};
pub use solver::Solver;
pub use trace::{NullObserver, SolveObserver, TraceTag};
