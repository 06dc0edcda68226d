//! This module contains the two operations exposed to the transport layer,
//! [solve] and [check], together with the response types whose JSON
//! serialization is wire-compatible with the original service.
//!
//! The transport layer accepts POST requests carrying `puzzle`, `coordinate`,
//! and `value` fields, maps an absent field to an empty string, invokes the
//! matching operation, and serializes the returned response with status 200
//! regardless of success. Errors are reported in-band through the `error`
//! field, never through HTTP status codes.
//!
//! Validation short-circuits in a fixed order: missing fields first, then
//! the puzzle text, then the coordinate, then the value. The first failure
//! is returned and later checks are not attempted.

use crate::{Coordinate, SudokuGrid, parse_value};
use crate::constraint::{self, ConflictGroup};
use crate::error::{PuzzleError, PuzzleResult};
use crate::solver::{BacktrackingSolver, Solution, Solver};

use serde::Serialize;

/// The outcome of a successful [check] operation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CheckOutcome {

    /// The candidate digit may be placed at the target cell.
    Valid,

    /// The candidate digit may not be placed at the target cell. Every
    /// violated [ConflictGroup] is listed, in the order row, column,
    /// region.
    Invalid(Vec<ConflictGroup>)
}

/// Solves the given puzzle text, returning the 81-character text of the
/// completed grid.
///
/// # Errors
///
/// * `PuzzleError::MissingField` If `puzzle` is empty.
/// * `PuzzleError::WrongLength` If `puzzle` does not consist of exactly 81
/// characters.
/// * `PuzzleError::InvalidCharacters` If `puzzle` contains a character other
/// than `0` to `9` and the period.
/// * `PuzzleError::Unsolvable` If no assignment of the empty cells satisfies
/// all constraints.
pub fn solve(puzzle: &str) -> PuzzleResult<String> {
    if puzzle.is_empty() {
        return Err(PuzzleError::MissingField);
    }

    let grid = SudokuGrid::parse(puzzle)?;

    match BacktrackingSolver.solve(&grid) {
        Solution::Solved(solution) => Ok(solution.to_puzzle_text()),
        Solution::Impossible => Err(PuzzleError::Unsolvable)
    }
}

/// Checks whether the digit given by `value` may be placed at the cell
/// addressed by the `coordinate` label without violating the row, column,
/// or region constraints. All three groups are evaluated independently, so
/// the outcome lists every simultaneous conflict. A value equal to the
/// digit already occupying the addressed cell is always valid.
///
/// The operation never mutates any state; checking the same arguments twice
/// yields the same outcome.
///
/// # Errors
///
/// * `PuzzleError::MissingFields` If any of the three texts is empty.
/// * `PuzzleError::WrongLength` If `puzzle` does not consist of exactly 81
/// characters.
/// * `PuzzleError::InvalidCharacters` If `puzzle` contains a character other
/// than `0` to `9` and the period.
/// * `PuzzleError::InvalidCoordinate` If `coordinate` is not a row letter
/// `a` to `i` (case-insensitive) followed by a column digit `1` to `9`.
/// * `PuzzleError::InvalidValue` If `value` is not a single digit `1` to
/// `9`.
pub fn check(puzzle: &str, coordinate: &str, value: &str)
        -> PuzzleResult<CheckOutcome> {
    if puzzle.is_empty() || coordinate.is_empty() || value.is_empty() {
        return Err(PuzzleError::MissingFields);
    }

    let grid = SudokuGrid::parse(puzzle)?;
    let coordinate = Coordinate::parse(coordinate)?;
    let value = parse_value(value)?;
    let conflicts = constraint::placement_conflicts(&grid,
        coordinate.column(), coordinate.row(), value).unwrap();

    if conflicts.is_empty() {
        Ok(CheckOutcome::Valid)
    }
    else {
        Ok(CheckOutcome::Invalid(conflicts))
    }
}

/// The wire representation of a [solve] result. Serializes to
/// `{"solution": …}` on success and `{"error": …}` otherwise.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SolveResponse {

    /// The puzzle was solved.
    Solved {
        /// The 81-character text of the completed grid.
        solution: String
    },

    /// The puzzle was rejected or cannot be solved.
    Failed {
        /// The client-visible message of the error.
        error: &'static str
    }
}

impl From<PuzzleResult<String>> for SolveResponse {
    fn from(result: PuzzleResult<String>) -> SolveResponse {
        match result {
            Ok(solution) => SolveResponse::Solved {
                solution
            },
            Err(error) => SolveResponse::Failed {
                error: error.message()
            }
        }
    }
}

/// The wire representation of a [check] result. Serializes to
/// `{"valid": true}`, `{"valid": false, "conflict": […]}`, or
/// `{"error": …}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CheckResponse {

    /// The placement is valid.
    Valid {
        /// Always `true`.
        valid: bool
    },

    /// The placement violates at least one constraint group.
    Conflict {
        /// Always `false`.
        valid: bool,
        /// The violated groups, in the order row, column, region.
        conflict: Vec<ConflictGroup>
    },

    /// The request was rejected.
    Failed {
        /// The client-visible message of the error.
        error: &'static str
    }
}

impl From<PuzzleResult<CheckOutcome>> for CheckResponse {
    fn from(result: PuzzleResult<CheckOutcome>) -> CheckResponse {
        match result {
            Ok(CheckOutcome::Valid) => CheckResponse::Valid {
                valid: true
            },
            Ok(CheckOutcome::Invalid(conflict)) => CheckResponse::Conflict {
                valid: false,
                conflict
            },
            Err(error) => CheckResponse::Failed {
                error: error.message()
            }
        }
    }
}
