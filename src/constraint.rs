//! This module defines the constraints which placements on a
//! [SudokuGrid](../struct.SudokuGrid.html) must fulfill. These are the
//! classic Sudoku rules: no duplicate digits in any row ([RowConstraint]),
//! column ([ColumnConstraint]), or 3x3 region ([RegionConstraint]).
//!
//! The entry points used by the rest of the crate are
//! [placement_conflicts], which evaluates all three constraints
//! independently and reports every violated [ConflictGroup], and
//! [is_placement_valid], the short-circuiting conjunction used by the
//! solver. Both apply the self-match rule: a candidate digit that is already
//! the content of the target cell is accepted without consulting any
//! constraint, so checking a cell against its own current digit never
//! reports a conflict with itself.

use crate::{BLOCK_SIZE, GRID_SIZE, SudokuGrid};
use crate::error::SudokuResult;
use crate::util::DigitSet;

use serde::Serialize;

/// One of the three groups of cells in which a digit may not repeat. When a
/// placement is rejected, the violated groups are reported in the fixed
/// order row, column, region.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictGroup {

    /// The row containing the target cell.
    Row,

    /// The column containing the target cell.
    Column,

    /// The 3x3 region containing the target cell.
    Region
}

impl ConflictGroup {

    /// Gets the name under which this group is reported on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictGroup::Row => "row",
            ConflictGroup::Column => "column",
            ConflictGroup::Region => "region"
        }
    }
}

/// A constraint defines one rule that placements on a grid must fulfill.
/// Implementors only need to provide [Constraint::check_number], which
/// verifies a proposed digit for a specified cell, and the
/// [ConflictGroup] under which rejections are reported. `check_cell` and
/// `check` are implemented by default based on it, however `check` in
/// particular may be inefficient compared to a specialized implementation
/// (it checks every cell using `check_number`).
pub trait Constraint {

    /// Gets the conflict group reported when this constraint rejects a
    /// placement.
    fn group(&self) -> ConflictGroup;

    /// Checks whether the given `number` would fit into the cell specified
    /// by `column` and `row` into the `grid` without violating this
    /// constraint. The current content of the target cell itself is ignored,
    /// only the other cells of the group are considered.
    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
        number: u8) -> bool;

    /// Checks whether the cell at the given position fulfills the
    /// constraint. This is the same as calling `check_number` with the same
    /// coordinates and the number which is actually filled in that cell. If
    /// the cell is empty, this function always returns `true`.
    fn check_cell(&self, grid: &SudokuGrid, column: usize, row: usize)
            -> bool {
        if let Some(number) = grid.get_cell(column, row).unwrap() {
            self.check_number(grid, column, row, number)
        }
        else {
            true
        }
    }

    /// Checks whether the given [SudokuGrid] matches this constraint, that
    /// is, every cell matches this constraint. By default, this runs
    /// `check_cell` on every cell of the grid.
    fn check(&self, grid: &SudokuGrid) -> bool {
        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                if !self.check_cell(grid, column, row) {
                    return false;
                }
            }
        }

        true
    }
}

/// A [Constraint] that there are no duplicate digits in each row.
#[derive(Clone, Copy)]
pub struct RowConstraint;

impl Constraint for RowConstraint {
    fn group(&self) -> ConflictGroup {
        ConflictGroup::Row
    }

    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            number: u8) -> bool {
        for other_column in 0..GRID_SIZE {
            if other_column != column &&
                    grid.has_number(other_column, row, number).unwrap() {
                return false;
            }
        }

        true
    }

    fn check(&self, grid: &SudokuGrid) -> bool {
        let mut set = DigitSet::new();

        for row in 0..GRID_SIZE {
            set.clear();

            for column in 0..GRID_SIZE {
                if let Some(number) = grid.get_cell(column, row).unwrap() {
                    if !set.insert(number) {
                        return false;
                    }
                }
            }
        }

        true
    }
}

/// A [Constraint] that there are no duplicate digits in each column.
#[derive(Clone, Copy)]
pub struct ColumnConstraint;

impl Constraint for ColumnConstraint {
    fn group(&self) -> ConflictGroup {
        ConflictGroup::Column
    }

    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            number: u8) -> bool {
        for other_row in 0..GRID_SIZE {
            if other_row != row &&
                    grid.has_number(column, other_row, number).unwrap() {
                return false;
            }
        }

        true
    }

    fn check(&self, grid: &SudokuGrid) -> bool {
        let mut set = DigitSet::new();

        for column in 0..GRID_SIZE {
            set.clear();

            for row in 0..GRID_SIZE {
                if let Some(number) = grid.get_cell(column, row).unwrap() {
                    if !set.insert(number) {
                        return false;
                    }
                }
            }
        }

        true
    }
}

/// A [Constraint] that there are no duplicate digits in each 3x3 region.
/// The region containing a cell is anchored at
/// `(column / 3 * 3, row / 3 * 3)`.
#[derive(Clone, Copy)]
pub struct RegionConstraint;

impl Constraint for RegionConstraint {
    fn group(&self) -> ConflictGroup {
        ConflictGroup::Region
    }

    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            number: u8) -> bool {
        let region_column = (column / BLOCK_SIZE) * BLOCK_SIZE;
        let region_row = (row / BLOCK_SIZE) * BLOCK_SIZE;

        for other_row in region_row..(region_row + BLOCK_SIZE) {
            for other_column in region_column..(region_column + BLOCK_SIZE) {
                if (other_row != row || other_column != column) &&
                        grid.has_number(other_column, other_row, number)
                            .unwrap() {
                    return false;
                }
            }
        }

        true
    }

    fn check(&self, grid: &SudokuGrid) -> bool {
        let mut set = DigitSet::new();

        for region_row in (0..GRID_SIZE).step_by(BLOCK_SIZE) {
            for region_column in (0..GRID_SIZE).step_by(BLOCK_SIZE) {
                set.clear();

                for row in region_row..(region_row + BLOCK_SIZE) {
                    for column in
                            region_column..(region_column + BLOCK_SIZE) {
                        if let Some(number) =
                                grid.get_cell(column, row).unwrap() {
                            if !set.insert(number) {
                                return false;
                            }
                        }
                    }
                }
            }
        }

        true
    }
}

// The order of this array determines the order in which conflicts are
// reported.
const CONSTRAINTS: [&dyn Constraint; 3] =
    [&RowConstraint, &ColumnConstraint, &RegionConstraint];

/// Determines every [ConflictGroup] that rejects placing `number` into the
/// cell at the given position. All three constraints are evaluated, none is
/// short-circuited, so the result lists every simultaneous conflict in the
/// order row, column, region. An empty vector means the placement is valid.
///
/// If the target cell already contains exactly `number`, the placement is
/// accepted without consulting any constraint and the vector is empty.
///
/// # Arguments
///
/// * `column`: The column (x-coordinate) of the target cell. Must be in the
/// range `[0, 9[`.
/// * `row`: The row (y-coordinate) of the target cell. Must be in the range
/// `[0, 9[`.
/// * `number`: The candidate digit, in the range `[1, 9]`.
///
/// # Errors
///
/// If either `column` or `row` are not in the specified range. In that case,
/// `SudokuError::OutOfBounds` is returned.
pub fn placement_conflicts(grid: &SudokuGrid, column: usize, row: usize,
        number: u8) -> SudokuResult<Vec<ConflictGroup>> {
    if grid.has_number(column, row, number)? {
        return Ok(Vec::new());
    }

    Ok(CONSTRAINTS.iter()
        .filter(|constraint| !constraint.check_number(grid, column, row,
            number))
        .map(|constraint| constraint.group())
        .collect())
}

/// Indicates whether `number` may be placed into the cell at the given
/// position, that is, all three constraints permit it. This is the
/// short-circuiting counterpart of [placement_conflicts] and applies the
/// same self-match rule: if the target cell already contains exactly
/// `number`, the placement is accepted.
///
/// # Arguments
///
/// * `column`: The column (x-coordinate) of the target cell. Must be in the
/// range `[0, 9[`.
/// * `row`: The row (y-coordinate) of the target cell. Must be in the range
/// `[0, 9[`.
/// * `number`: The candidate digit, in the range `[1, 9]`.
///
/// # Errors
///
/// If either `column` or `row` are not in the specified range. In that case,
/// `SudokuError::OutOfBounds` is returned.
pub fn is_placement_valid(grid: &SudokuGrid, column: usize, row: usize,
        number: u8) -> SudokuResult<bool> {
    if grid.has_number(column, row, number)? {
        return Ok(true);
    }

    Ok(CONSTRAINTS.iter()
        .all(|constraint| constraint.check_number(grid, column, row, number)))
}

/// Indicates whether the filled cells of the given grid are mutually
/// consistent, that is, no row, column, or region contains a duplicate
/// digit. Empty cells are ignored. A grid that is not consistent has no
/// legal completion.
pub fn is_consistent(grid: &SudokuGrid) -> bool {
    CONSTRAINTS.iter().all(|constraint| constraint.check(grid))
}

#[cfg(test)]
mod tests {

    use super::*;

    const EXAMPLE_PUZZLE: &str =
        "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";

    const DOUBLED_NINE_PUZZLE: &str =
        "9.9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";

    fn example_grid() -> SudokuGrid {
        SudokuGrid::parse(EXAMPLE_PUZZLE).unwrap()
    }

    #[test]
    fn row_permits_absent_digit() {
        assert!(RowConstraint.check_number(&example_grid(), 1, 0, 3));
    }

    #[test]
    fn row_rejects_present_digit() {
        assert!(!RowConstraint.check_number(&example_grid(), 1, 0, 1));
    }

    #[test]
    fn column_permits_absent_digit() {
        assert!(ColumnConstraint.check_number(&example_grid(), 1, 0, 8));
    }

    #[test]
    fn column_rejects_present_digit() {
        assert!(!ColumnConstraint.check_number(&example_grid(), 1, 0, 2));
    }

    #[test]
    fn region_permits_absent_digit() {
        assert!(RegionConstraint.check_number(&example_grid(), 1, 0, 3));
    }

    #[test]
    fn region_rejects_present_digit() {
        assert!(!RegionConstraint.check_number(&example_grid(), 1, 0, 5));
    }

    #[test]
    fn check_number_ignores_target_cell() {
        // A1 contains 1, which must not count as its own duplicate.
        assert!(RowConstraint.check_number(&example_grid(), 0, 0, 1));
        assert!(ColumnConstraint.check_number(&example_grid(), 0, 0, 1));
        assert!(RegionConstraint.check_number(&example_grid(), 0, 0, 1));
    }

    #[test]
    fn single_conflict() {
        assert_eq!(vec![ConflictGroup::Row],
            placement_conflicts(&example_grid(), 1, 0, 8).unwrap());
    }

    #[test]
    fn two_conflicts_in_fixed_order() {
        assert_eq!(vec![ConflictGroup::Row, ConflictGroup::Region],
            placement_conflicts(&example_grid(), 1, 0, 5).unwrap());
    }

    #[test]
    fn all_three_conflicts() {
        assert_eq!(
            vec![ConflictGroup::Row, ConflictGroup::Column,
                ConflictGroup::Region],
            placement_conflicts(&example_grid(), 1, 0, 2).unwrap());
    }

    #[test]
    fn no_conflicts_for_valid_placement() {
        assert!(placement_conflicts(&example_grid(), 1, 0, 3).unwrap()
            .is_empty());
        assert!(is_placement_valid(&example_grid(), 1, 0, 3).unwrap());
    }

    #[test]
    fn own_digit_is_accepted() {
        // A1 already contains 1.
        assert!(placement_conflicts(&example_grid(), 0, 0, 1).unwrap()
            .is_empty());
        assert!(is_placement_valid(&example_grid(), 0, 0, 1).unwrap());
    }

    #[test]
    fn own_digit_rule_only_applies_to_exact_match() {
        // A1 contains 1, so 8 is still checked against the other cells and
        // conflicts with A8 and E1.
        assert_eq!(vec![ConflictGroup::Row, ConflictGroup::Column],
            placement_conflicts(&example_grid(), 0, 0, 8).unwrap());
    }

    #[test]
    fn invalid_placement_is_rejected() {
        assert!(!is_placement_valid(&example_grid(), 1, 0, 2).unwrap());
    }

    #[test]
    fn conflict_check_does_not_mutate_grid() {
        let grid = example_grid();
        let first = placement_conflicts(&grid, 1, 0, 5).unwrap();
        let second = placement_conflicts(&grid, 1, 0, 5).unwrap();

        assert_eq!(first, second);
        assert_eq!(example_grid(), grid);
    }

    #[test]
    fn consistent_grid_is_accepted() {
        assert!(is_consistent(&example_grid()));
        assert!(is_consistent(&SudokuGrid::new_empty()));
    }

    #[test]
    fn duplicate_in_row_is_inconsistent() {
        assert!(!is_consistent(
            &SudokuGrid::parse(DOUBLED_NINE_PUZZLE).unwrap()));
    }

    #[test]
    fn duplicate_in_column_is_inconsistent() {
        let mut grid = SudokuGrid::new_empty();
        grid.set_cell(4, 0, 7).unwrap();
        grid.set_cell(4, 8, 7).unwrap();

        assert!(!is_consistent(&grid));
        assert!(RowConstraint.check(&grid));
        assert!(!ColumnConstraint.check(&grid));
    }

    #[test]
    fn duplicate_in_region_is_inconsistent() {
        let mut grid = SudokuGrid::new_empty();
        grid.set_cell(0, 0, 7).unwrap();
        grid.set_cell(2, 2, 7).unwrap();

        assert!(!is_consistent(&grid));
        assert!(RowConstraint.check(&grid));
        assert!(ColumnConstraint.check(&grid));
        assert!(!RegionConstraint.check(&grid));
    }

    #[test]
    fn conflict_group_names() {
        assert_eq!("row", ConflictGroup::Row.as_str());
        assert_eq!("column", ConflictGroup::Column.as_str());
        assert_eq!("region", ConflictGroup::Region.as_str());
    }
}
