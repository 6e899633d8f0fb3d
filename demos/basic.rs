//! Basic example of using the Sudoku engine

use sudoku_engine::{is_solution, Board, Generator, Position, Solver, TraceTag};

fn main() {
    // Generate a puzzle
    println!("Generating a puzzle...\n");
    let mut generator = Generator::new();
    let puzzle = generator.generate();

    println!("Generated puzzle:");
    println!("{}", puzzle);

    // Show some stats
    println!("Given cells: {}", puzzle.filled_count());
    println!("Empty cells: {}", puzzle.empty_count());

    // Solve it
    println!("\nSolving...\n");
    let solver = Solver::new();
    let solution = solver.solve(&puzzle);
    if is_solution(&solution) {
        println!("Solution:");
        println!("{}", solution);
    } else {
        println!("No solution found (this shouldn't happen for a generated puzzle!)");
    }

    // Solve a fixed board while counting the solver's trace events
    println!("--- Solving a fixed board with a trace ---\n");
    let board = Board::from_rows([
        [1, 0, 0, 0, 7, 0, 3, 0, 0],
        [0, 8, 0, 0, 2, 0, 7, 0, 0],
        [3, 0, 0, 0, 8, 9, 0, 0, 4],
        [8, 4, 0, 0, 0, 1, 9, 0, 3],
        [0, 0, 3, 7, 0, 8, 5, 0, 0],
        [9, 0, 1, 2, 0, 0, 0, 7, 8],
        [7, 0, 0, 3, 5, 0, 0, 0, 9],
        [0, 0, 9, 0, 4, 0, 0, 5, 0],
        [0, 0, 4, 0, 1, 0, 0, 0, 2],
    ]);

    let mut assignments = 0usize;
    let mut rollbacks = 0usize;
    let mut counter = |_pos: Position, _value: Option<u8>, tag: TraceTag| match tag {
        TraceTag::Trying => assignments += 1,
        TraceTag::Rejected => rollbacks += 1,
    };
    let solution = solver.solve_traced(&board, &mut counter);

    println!("{}", solution);
    println!("Assignments tried: {}", assignments);
    println!("Rollbacks: {}", rollbacks);

    // Parse a puzzle from a string
    println!("\n--- Parsing a puzzle from string ---\n");
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    if let Some(board) = Board::from_string(puzzle_string) {
        println!("Parsed puzzle:");
        println!("{}", board);

        let solution = solver.solve(&board);
        println!("Solved: {}", is_solution(&solution));
        println!("{}", solution);
    }
}
