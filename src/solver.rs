//! Backtracking solver.
//!
//! Plain depth-first search: take the first empty cell in row-major order,
//! try its legal digits in ascending order, recurse, and roll the cell back
//! to blank when every digit fails. No candidate caching, no propagation.

use crate::board::Board;
use crate::rules;
use crate::trace::{NullObserver, SolveObserver, TraceTag};

/// Unit struct solver — stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve the board, returning an owned result. The input is never
    /// mutated; the solver works on its own copy.
    ///
    /// Failure is in-band: an unsolvable board comes back with its givens
    /// intact and every speculative cell rolled back to 0, so it simply
    /// fails [`rules::is_solution`]. Callers must check that, not the
    /// return value, to detect failure.
    pub fn solve(&self, board: &Board) -> Board {
        self.solve_traced(board, &mut NullObserver)
    }

    /// Same contract as [`Solver::solve`], reporting each tentative
    /// assignment and each rollback to `observer` on the solve call stack.
    pub fn solve_traced<O: SolveObserver>(&self, board: &Board, observer: &mut O) -> Board {
        let mut working = board.clone();
        solve_cell(&mut working, observer);
        working
    }
}

/// One recursion frame per cell choice. Returns true once the board is a
/// complete valid solution, short-circuiting the unwind.
fn solve_cell<O: SolveObserver>(board: &mut Board, observer: &mut O) -> bool {
    if rules::is_solution(board) {
        return true;
    }
    let Some(pos) = rules::first_unfilled_cell(board) else {
        // Full but inconsistent: nothing left to branch on.
        return false;
    };
    for digit in rules::legal_values(board, pos) {
        board.set(pos, digit);
        observer.on_assign(pos, Some(digit), TraceTag::Trying);
        if solve_cell(board, observer) {
            return true;
        }
    }
    board.set(pos, 0);
    observer.on_assign(pos, None, TraceTag::Rejected);
    false
}
