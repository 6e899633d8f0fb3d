use crate::board::{Board, Position};
use crate::solver::Solver;

/// Sudoku puzzle generator.
///
/// Seeds one random row with a permutation of 1..=9, completes the board
/// with the backtracking solver, then blanks cells row by row: each row
/// draws `k` in 7..=9 and zeroes `k` independently chosen columns. Column
/// picks may repeat, so a row can end up with fewer than `k` cleared cells,
/// and the resulting puzzle is not checked for a unique solution.
pub struct Generator {
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new entropy-seeded generator.
    pub fn new() -> Self {
        Self {
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Generate a puzzle: givens are the non-zero cells, blanks are 0.
    pub fn generate(&mut self) -> Board {
        let mut board = Board::empty();

        // Seed a single random row with all nine digits. One conflict-free
        // row always completes, so the solve below cannot fail.
        let seed_row = self.rng.next_usize(9);
        let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        self.shuffle(&mut digits);
        for (col, &digit) in digits.iter().enumerate() {
            board.set(Position::new(seed_row, col), digit);
        }

        let mut puzzle = Solver::new().solve(&board);

        for row in 0..9 {
            let k = 7 + self.rng.next_usize(3);
            for _ in 0..k {
                let col = self.rng.next_usize(9);
                puzzle.set(Position::new(row, col), 0);
            }
        }

        puzzle
    }

    /// Shuffle a slice using Fisher-Yates.
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.rng.next_usize(i + 1);
            slice.swap(i, j);
        }
    }
}

/// Simple PRNG for no-std compatibility
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        // Use getrandom for WASM-compatible random seeding
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: use a static counter if getrandom fails
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        let seed = u64::from_le_bytes(seed_bytes);
        Self::with_seed(seed)
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        // PCG-like PRNG
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::is_solution;

    #[test]
    fn test_generated_puzzle_is_always_solvable() {
        let solver = Solver::new();
        let mut generator = Generator::with_seed(42);
        for _ in 0..5 {
            let puzzle = generator.generate();
            let solved = solver.solve(&puzzle);
            assert!(is_solution(&solved));
        }
    }

    #[test]
    fn test_generated_puzzle_has_blanks_in_every_row() {
        // At least 7 blankings per row guarantee one cleared cell per row.
        let mut generator = Generator::with_seed(7);
        let puzzle = generator.generate();
        for row in puzzle.rows() {
            assert!(row.contains(&0));
        }
        assert!(!is_solution(&puzzle));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = Generator::with_seed(1234).generate();
        let b = Generator::with_seed(1234).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_givens_come_from_one_valid_solution() {
        let solver = Solver::new();
        let mut generator = Generator::with_seed(99);
        let puzzle = generator.generate();
        let solved = solver.solve(&puzzle);
        // Every given survives into the completion unchanged.
        for row in 0..9 {
            for col in 0..9 {
                let pos = Position::new(row, col);
                if puzzle.get(pos) != 0 {
                    assert_eq!(solved.get(pos), puzzle.get(pos));
                }
            }
        }
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut generator = Generator::with_seed(5);
        let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        generator.shuffle(&mut digits);
        let mut sorted = digits;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }
}
