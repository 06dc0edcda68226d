//! This module contains the error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};

/// Errors that can occur when accessing cells of a
/// [SudokuGrid](../struct.SudokuGrid.html) with invalid arguments. These
/// indicate a contract violation by the caller and never cross the operation
/// boundary, see [PuzzleError](enum.PuzzleError.html) for the errors reported
/// to clients.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the 9x9 grid. This is the case if either is greater than 8.
    OutOfBounds,

    /// Indicates that some number is invalid for a Sudoku cell. This is the
    /// case if it is less than 1 or greater than 9.
    InvalidNumber
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of all failures the two public operations can report. Each
/// variant corresponds to exactly one client-visible message, which is
/// preserved verbatim from the original service so that existing clients keep
/// working (see [PuzzleError::message]).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PuzzleError {

    /// Indicates that the puzzle text handed to the solve operation was
    /// absent or empty.
    MissingField,

    /// Indicates that at least one of the puzzle, coordinate, and value texts
    /// handed to the check operation was absent or empty.
    MissingFields,

    /// Indicates that the puzzle text does not consist of exactly 81
    /// characters. The length is checked before the character set, so a text
    /// of the wrong length reports this error even if it also contains
    /// invalid characters.
    WrongLength,

    /// Indicates that the puzzle text contains a character other than the
    /// digits `0` to `9` and the period.
    InvalidCharacters,

    /// Indicates that a coordinate label is not a row letter `a` to `i`
    /// (case-insensitive) followed by a column digit `1` to `9`.
    InvalidCoordinate,

    /// Indicates that a candidate value text is not a single digit `1` to
    /// `9`.
    InvalidValue,

    /// Indicates that no assignment of the empty cells satisfies the row,
    /// column, and region constraints. Puzzles whose given digits already
    /// contradict each other report this as well, since they have no legal
    /// completion either.
    Unsolvable
}

impl PuzzleError {

    /// Gets the message under which this error is reported to clients. The
    /// texts are part of the wire format and must not be changed.
    pub fn message(&self) -> &'static str {
        match self {
            PuzzleError::MissingField => "Required field missing",
            PuzzleError::MissingFields => "Required field(s) missing",
            PuzzleError::WrongLength =>
                "Expected puzzle to be 81 characters long",
            PuzzleError::InvalidCharacters => "Invalid characters in puzzle",
            PuzzleError::InvalidCoordinate => "Invalid coordinate",
            PuzzleError::InvalidValue => "Invalid value",
            PuzzleError::Unsolvable => "Puzzle cannot be solved"
        }
    }
}

impl Display for PuzzleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Syntactic sugar for `Result<V, PuzzleError>`.
pub type PuzzleResult<V> = Result<V, PuzzleError>;
