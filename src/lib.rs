// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements the core of a Sudoku checking and solving service.
//! It supports the following key features:
//!
//! * Parsing and printing puzzles encoded as 81-character texts
//! * Checking whether a candidate digit may be placed in a cell, reporting
//! every constraint group (row, column, region) that rejects it
//! * Solving puzzles using a backtracking algorithm
//! * A response layer whose JSON serialization is wire-compatible with the
//! HTTP service the crate was extracted from
//!
//! # Parsing and printing puzzles
//!
//! A puzzle is encoded as a single line of 81 characters, one per cell in
//! left-to-right, top-to-bottom order, where a period denotes an empty cell.
//! See [SudokuGrid::parse] for details.
//!
//! ```
//! use sudoku_checker::SudokuGrid;
//!
//! let grid = SudokuGrid::parse(
//!     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.")
//!     .unwrap();
//! assert_eq!(Some(1), grid.get_cell(0, 0).unwrap());
//! println!("{}", grid);
//! ```
//!
//! # Checking placements
//!
//! The [check](api::check) operation determines whether a digit may be
//! placed at a cell addressed by a two-character label such as `A2`. All
//! three constraint groups are evaluated independently, so a caller learns
//! about every conflict at once.
//!
//! ```
//! use sudoku_checker::api::{self, CheckOutcome};
//! use sudoku_checker::constraint::ConflictGroup;
//!
//! let puzzle =
//!     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
//! assert_eq!(Ok(CheckOutcome::Valid), api::check(puzzle, "A2", "3"));
//! assert_eq!(
//!     Ok(CheckOutcome::Invalid(vec![ConflictGroup::Row])),
//!     api::check(puzzle, "A2", "8"));
//! ```
//!
//! # Solving puzzles
//!
//! The [solve](api::solve) operation completes a puzzle or reports that it
//! cannot be solved. Candidate digits are tried in ascending order while
//! cells are visited top-to-bottom, left-to-right, so the result is
//! deterministic.
//!
//! ```
//! use sudoku_checker::api;
//!
//! let solution = api::solve(
//!     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.")
//!     .unwrap();
//! assert_eq!(
//!     "135762984946381257728459613694517832812936745357824196473298561581673429269145378",
//!     solution);
//! ```
//!
//! # Note regarding performance
//!
//! The solver is a plain exhaustive backtracking search, which is fast for
//! ordinary puzzles but exponential in the worst case. It is strongly
//! recommended to use at least `opt-level = 2`, even in tests that solve
//! sparse puzzles.

pub mod api;
pub mod constraint;
pub mod error;
pub mod solver;
pub mod util;

use error::{PuzzleError, PuzzleResult, SudokuError, SudokuResult};

use std::fmt::{self, Display, Formatter};

/// The number of cells in each row, column, and grid axis.
pub const GRID_SIZE: usize = 9;

/// The number of cells in each axis of one region.
pub const BLOCK_SIZE: usize = 3;

/// The total number of cells in a grid, which is also the required length of
/// a puzzle text.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// The character denoting an empty cell in a puzzle text.
const EMPTY_CELL: char = '.';

/// A Sudoku grid composed of 9x9 cells that are organized into nine 3x3
/// regions. Each cell may or may not be occupied by a digit in the range
/// `[1, 9]`.
///
/// Grids are created by parsing a puzzle text (see [SudokuGrid::parse]) or
/// empty (see [SudokuGrid::new_empty]) and converted back into their textual
/// form with [SudokuGrid::to_puzzle_text]. `SudokuGrid` implements `Display`,
/// which renders the grid with box-drawing characters for debugging and
/// logging purposes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SudokuGrid {
    cells: [Option<u8>; CELL_COUNT]
}

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * GRID_SIZE + column
}

fn to_char(cell: Option<u8>) -> char {
    if let Some(n) = cell {
        (b'0' + n) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..GRID_SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.get_cell(x, y).unwrap()), ' ', '║',
        true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for y in 0..GRID_SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line().as_str())?;
            }
            else {
                f.write_str(thin_separator_line().as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

impl SudokuGrid {

    /// Creates a new grid in which every cell is empty.
    pub fn new_empty() -> SudokuGrid {
        SudokuGrid {
            cells: [None; CELL_COUNT]
        }
    }

    /// Parses a puzzle text into a grid. The text must consist of exactly 81
    /// characters, one per cell in left-to-right, top-to-bottom order, where
    /// each row is completed before the next one is started. A period or a
    /// `0` denotes an empty cell and the digits `1` to `9` denote occupied
    /// cells. Texts produced by [SudokuGrid::to_puzzle_text] always use the
    /// period.
    ///
    /// # Errors
    ///
    /// * `PuzzleError::WrongLength` If the text does not consist of exactly
    /// 81 characters. This is checked first.
    /// * `PuzzleError::InvalidCharacters` If the text contains a character
    /// other than `0` to `9` and the period.
    pub fn parse(text: &str) -> PuzzleResult<SudokuGrid> {
        if text.chars().count() != CELL_COUNT {
            return Err(PuzzleError::WrongLength);
        }

        let mut cells = [None; CELL_COUNT];

        for (i, c) in text.chars().enumerate() {
            cells[i] = match c {
                EMPTY_CELL | '0' => None,
                '1'..='9' => Some(c as u8 - b'0'),
                _ => return Err(PuzzleError::InvalidCharacters)
            };
        }

        Ok(SudokuGrid {
            cells
        })
    }

    /// Converts the grid into its 81-character puzzle text in a way that is
    /// consistent with [SudokuGrid::parse]. Empty cells are rendered as
    /// periods, so a text that is parsed and converted back will not change
    /// as long as it used periods for empty cells.
    ///
    /// ```
    /// use sudoku_checker::SudokuGrid;
    ///
    /// let text =
    ///     ".2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.1.5..2.84..63.12.7";
    /// let grid = SudokuGrid::parse(text).unwrap();
    /// assert_eq!(text, grid.to_puzzle_text());
    /// ```
    pub fn to_puzzle_text(&self) -> String {
        self.cells.iter()
            .map(|&cell| {
                if let Some(digit) = cell {
                    (b'0' + digit) as char
                }
                else {
                    EMPTY_CELL
                }
            })
            .collect()
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<u8>> {
        if column >= GRID_SIZE || row >= GRID_SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Indicates whether the cell at the specified position contains the
    /// given number. This returns `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check for. If it is *not* in the range
    /// `[1, 9]`, `false` will always be returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: u8)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: u8)
            -> SudokuResult<()> {
        if column >= GRID_SIZE || row >= GRID_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > GRID_SIZE as u8 {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= GRID_SIZE || row >= GRID_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c.is_none())
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be
    /// filled in `other` with the same number. A solver never alters given
    /// clues, so every puzzle is a subset of its solutions.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(_) => self_cell == other_cell,
                    None => true
                }
            })
    }
}

/// The coordinate of a single cell, identified on the wire by a
/// two-character label: a row letter `a` to `i` (case-insensitive) followed
/// by a column digit `1` to `9`. `A1` is the top-left cell and `I9` the
/// bottom-right one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Coordinate {
    column: usize,
    row: usize
}

impl Coordinate {

    /// Creates a coordinate from raw indices.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cell. Must be in the
    /// range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cell. Must be in the range
    /// `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn new(column: usize, row: usize) -> SudokuResult<Coordinate> {
        if column >= GRID_SIZE || row >= GRID_SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(Coordinate {
                column,
                row
            })
        }
    }

    /// Parses a two-character coordinate label. The first character is the
    /// row letter `a` to `i` (case-insensitive), the second the column digit
    /// `1` to `9`.
    ///
    /// ```
    /// use sudoku_checker::Coordinate;
    ///
    /// let coordinate = Coordinate::parse("A2").unwrap();
    /// assert_eq!(1, coordinate.column());
    /// assert_eq!(0, coordinate.row());
    /// ```
    ///
    /// # Errors
    ///
    /// `PuzzleError::InvalidCoordinate` if the label does not consist of
    /// exactly two characters or either character is out of range.
    pub fn parse(label: &str) -> PuzzleResult<Coordinate> {
        let mut chars = label.chars();
        let row_char = chars.next();
        let column_char = chars.next();

        if chars.next().is_some() {
            return Err(PuzzleError::InvalidCoordinate);
        }

        let row = match row_char {
            Some(c @ 'a'..='i') => c as usize - 'a' as usize,
            Some(c @ 'A'..='I') => c as usize - 'A' as usize,
            _ => return Err(PuzzleError::InvalidCoordinate)
        };
        let column = match column_char {
            Some(c @ '1'..='9') => c as usize - '1' as usize,
            _ => return Err(PuzzleError::InvalidCoordinate)
        };

        Ok(Coordinate {
            column,
            row
        })
    }

    /// Gets the column (x-coordinate) of the cell, in the range `[0, 9[`.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Gets the row (y-coordinate) of the cell, in the range `[0, 9[`.
    pub fn row(&self) -> usize {
        self.row
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row as u8) as char, self.column + 1)
    }
}

/// Parses a candidate value text. The text must consist of exactly one
/// digit in the range `[1, 9]`; in particular, `0` and multi-character texts
/// are rejected.
///
/// # Errors
///
/// `PuzzleError::InvalidValue` if the text is not a single digit `1` to `9`.
pub fn parse_value(text: &str) -> PuzzleResult<u8> {
    let mut chars = text.chars();

    match (chars.next(), chars.next()) {
        (Some(c @ '1'..='9'), None) => Ok(c as u8 - b'0'),
        _ => Err(PuzzleError::InvalidValue)
    }
}
