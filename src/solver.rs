//! This module contains the logic for solving Sudoku puzzles.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [BacktrackingSolver](struct.BacktrackingSolver.html) as its only
//! implementation.

use crate::{GRID_SIZE, SudokuGrid};
use crate::constraint;

/// An enumeration of the ways a solver run can end. There is no partial
/// result: a puzzle is either completed in full or reported as impossible.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the puzzle is not solveable at all.
    Impossible,

    /// Wraps the completed grid. Cells are visited top-to-bottom,
    /// left-to-right and candidate digits are tried in ascending order, so
    /// for a puzzle with multiple solutions this is always the first
    /// solution encountered by that fixed search order.
    Solved(SudokuGrid)
}

/// A trait for structs which have the ability to solve Sudoku puzzles. The
/// given clues are never altered, a solution always contains them
/// unchanged.
pub trait Solver {

    /// Solves, or attempts to solve, the puzzle held by the provided grid.
    /// The grid itself is not modified.
    fn solve(&self, grid: &SudokuGrid) -> Solution;
}

/// A [Solver](trait.Solver.html) which solves puzzles by recursively testing
/// all valid digits for each empty cell. This means two things:
///
/// * Its worst-case runtime is exponential in the number of empty cells,
/// i.e. it may be slow if the puzzle has few clues.
/// * It finds a solution whenever one exists, so `Solution::Impossible` is
/// only reported after the search space has been exhausted.
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    fn solve_rec(grid: &mut SudokuGrid, column: usize, row: usize) -> bool {
        if row == GRID_SIZE {
            return true;
        }

        let next_column = (column + 1) % GRID_SIZE;
        let next_row = if next_column == 0 { row + 1 } else { row };

        if grid.get_cell(column, row).unwrap().is_some() {
            return BacktrackingSolver::solve_rec(grid, next_column, next_row);
        }

        for number in 1..=(GRID_SIZE as u8) {
            if constraint::is_placement_valid(grid, column, row, number)
                    .unwrap() {
                grid.set_cell(column, row, number).unwrap();

                if BacktrackingSolver::solve_rec(grid, next_column,
                        next_row) {
                    return true;
                }

                grid.clear_cell(column, row).unwrap();
            }
        }

        false
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, grid: &SudokuGrid) -> Solution {
        let mut work = grid.clone();

        // Clues that already contradict each other admit no completion, so
        // the search can be skipped entirely.
        if !constraint::is_consistent(&work) {
            return Solution::Impossible;
        }

        if BacktrackingSolver::solve_rec(&mut work, 0, 0) {
            Solution::Solved(work)
        }
        else {
            Solution::Impossible
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const EXAMPLE_PUZZLE: &str =
        "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";

    const EXAMPLE_SOLUTION: &str =
        "135762984946381257728459613694517832812936745357824196473298561581673429269145378";

    // A 26-clue puzzle from the World Puzzle Federation Sudoku Grand Prix,
    // 2020 Round 8 (Puzzle 2).
    const SPARSE_PUZZLE: &str =
        "....81.....2..78...53...17.37.......6.......3.......24.69...23...59..4.....65....";

    const SPARSE_SOLUTION: &str =
        "746281359912537846853496172374125698628749513591368724169874235285913467437652981";

    const DOUBLED_NINE_PUZZLE: &str =
        "9.9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";

    // Consistent clues, but the last cell of the first row has no candidate
    // left: the row forces a 9 and both its column and region already
    // contain one.
    const DEAD_END_PUZZLE: &str =
        "12345678.........9...............................................................";

    fn solve_to_text(puzzle: &str) -> Option<String> {
        let grid = SudokuGrid::parse(puzzle).unwrap();

        match BacktrackingSolver.solve(&grid) {
            Solution::Solved(solution) => Some(solution.to_puzzle_text()),
            Solution::Impossible => None
        }
    }

    #[test]
    fn solves_example_puzzle() {
        assert_eq!(Some(EXAMPLE_SOLUTION.to_string()),
            solve_to_text(EXAMPLE_PUZZLE));
    }

    #[test]
    fn solves_sparse_puzzle() {
        assert_eq!(Some(SPARSE_SOLUTION.to_string()),
            solve_to_text(SPARSE_PUZZLE));
    }

    #[test]
    fn solved_puzzle_passes_through() {
        assert_eq!(Some(EXAMPLE_SOLUTION.to_string()),
            solve_to_text(EXAMPLE_SOLUTION));
    }

    #[test]
    fn solution_is_complete_and_preserves_clues() {
        let puzzle = SudokuGrid::parse(EXAMPLE_PUZZLE).unwrap();

        if let Solution::Solved(solution) = BacktrackingSolver.solve(&puzzle) {
            assert!(solution.is_full());
            assert!(constraint::is_consistent(&solution));
            assert!(puzzle.is_subset(&solution));
        }
        else {
            panic!("Solveable puzzle marked as impossible.");
        }
    }

    #[test]
    fn solve_does_not_mutate_input() {
        let puzzle = SudokuGrid::parse(EXAMPLE_PUZZLE).unwrap();
        BacktrackingSolver.solve(&puzzle);

        assert_eq!(EXAMPLE_PUZZLE, puzzle.to_puzzle_text());
    }

    #[test]
    fn inconsistent_puzzle_is_impossible() {
        assert_eq!(None, solve_to_text(DOUBLED_NINE_PUZZLE));
    }

    #[test]
    fn consistent_dead_end_is_impossible() {
        let grid = SudokuGrid::parse(DEAD_END_PUZZLE).unwrap();

        assert!(constraint::is_consistent(&grid));
        assert_eq!(Solution::Impossible, BacktrackingSolver.solve(&grid));
    }
}
