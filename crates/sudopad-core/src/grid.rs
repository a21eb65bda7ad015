//! The 9×9 puzzle grid.

use std::ops::{Index, IndexMut};

use crate::{Cell, SelectedCell};

/// Number of rows and columns in a grid.
pub const GRID_SIZE: usize = 9;

/// Rows of columns of [`Cell`], always 9×9.
///
/// The shape is checked whenever a grid is built from caller-supplied rows, so
/// indexing with a [`SelectedCell`] never goes out of bounds.
///
/// # Examples
///
/// ```
/// use sudopad_core::{Cell, Grid, GridError};
///
/// let grid = Grid::new();
/// assert_eq!(grid.rows().len(), 9);
///
/// let short = vec![vec![Cell::new(); 9]; 8];
/// assert_eq!(
///     Grid::try_from_rows(short),
///     Err(GridError::InvalidRowCount { rows: 8 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

/// Errors that can occur when building a [`Grid`] from rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The grid does not have exactly 9 rows.
    #[display("grid must have 9 rows, got {rows}")]
    InvalidRowCount {
        /// Number of rows supplied.
        rows: usize,
    },
    /// A row does not have exactly 9 cells.
    #[display("row {row} must have 9 cells, got {columns}")]
    InvalidColumnCount {
        /// Index of the offending row.
        row: usize,
        /// Number of cells in that row.
        columns: usize,
    },
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates a grid of 81 empty cells.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: vec![vec![Cell::new(); GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Builds a grid from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidRowCount`] if there are not exactly 9 rows, or
    /// [`GridError::InvalidColumnCount`] for the first row without exactly 9 cells.
    pub fn try_from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        if rows.len() != GRID_SIZE {
            return Err(GridError::InvalidRowCount { rows: rows.len() });
        }
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != GRID_SIZE)
        {
            return Err(GridError::InvalidColumnCount {
                row,
                columns: cells.len(),
            });
        }
        Ok(Self { rows })
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: SelectedCell) -> &Cell {
        &self.rows[usize::from(pos.row())][usize::from(pos.col())]
    }

    /// Returns the cell at `pos` mutably.
    pub fn cell_mut(&mut self, pos: SelectedCell) -> &mut Cell {
        &mut self.rows[usize::from(pos.row())][usize::from(pos.col())]
    }

    /// Returns the rows of the grid.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Consumes the grid and returns its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<Cell>> {
        self.rows
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (SelectedCell, &Cell)> {
        SelectedCell::ALL.into_iter().zip(self.rows.iter().flatten())
    }

    /// Iterates mutably over all cells in row-major order.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = (SelectedCell, &mut Cell)> {
        SelectedCell::ALL
            .into_iter()
            .zip(self.rows.iter_mut().flatten())
    }

    /// Positions of all selected cells in row-major order.
    #[must_use]
    pub fn selection(&self) -> Vec<SelectedCell> {
        self.cells()
            .filter(|(_, cell)| cell.selected)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Deselects every cell.
    pub fn clear_selection(&mut self) {
        for (_, cell) in self.cells_mut() {
            cell.selected = false;
        }
    }

    /// Removes the crosshair flag from every cell.
    pub fn clear_crosshair(&mut self) {
        for (_, cell) in self.cells_mut() {
            cell.crosshair = false;
        }
    }

    /// Flags every cell sharing a row, column, or box with `pos`, including `pos` itself.
    ///
    /// Existing crosshair flags are kept, so calling this for several positions
    /// accumulates their houses.
    pub fn mark_crosshair(&mut self, pos: SelectedCell) {
        for (other, cell) in self.cells_mut() {
            if pos.shares_house(other) {
                cell.crosshair = true;
            }
        }
    }
}

impl Index<SelectedCell> for Grid {
    type Output = Cell;

    fn index(&self, pos: SelectedCell) -> &Self::Output {
        self.cell(pos)
    }
}

impl IndexMut<SelectedCell> for Grid {
    fn index_mut(&mut self, pos: SelectedCell) -> &mut Self::Output {
        self.cell_mut(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Digit;

    #[test]
    fn new_grid_is_nine_by_nine_of_blank_cells() {
        let grid = Grid::new();
        assert_eq!(grid.rows().len(), 9);
        assert!(grid.rows().iter().all(|row| row.len() == 9));
        assert_eq!(grid.cells().count(), 81);
        for (_, cell) in grid.cells() {
            assert!(!cell.selected);
            assert!(!cell.error);
            assert!(!cell.locked);
            assert!(cell.is_empty());
        }
    }

    #[test]
    fn try_from_rows_checks_shape() {
        assert_eq!(
            Grid::try_from_rows(vec![vec![Cell::new(); 9]; 10]),
            Err(GridError::InvalidRowCount { rows: 10 })
        );

        let mut rows = vec![vec![Cell::new(); 9]; 9];
        rows[4].pop();
        assert_eq!(
            Grid::try_from_rows(rows),
            Err(GridError::InvalidColumnCount { row: 4, columns: 8 })
        );

        let mut rows = vec![vec![Cell::new(); 9]; 9];
        rows[2][3] = Cell::clue(Digit::D4);
        let grid = Grid::try_from_rows(rows).unwrap();
        assert_eq!(grid[SelectedCell::new(2, 3)].value, Some(Digit::D4));
    }

    #[test]
    fn cells_iterate_row_major() {
        let mut grid = Grid::new();
        grid[SelectedCell::new(1, 0)].value = Some(Digit::D1);
        let (pos, cell) = grid.cells().nth(9).unwrap();
        assert_eq!(pos, SelectedCell::new(1, 0));
        assert_eq!(cell.value, Some(Digit::D1));
    }

    #[test]
    fn selection_lists_selected_positions() {
        let mut grid = Grid::new();
        grid[SelectedCell::new(5, 5)].selected = true;
        grid[SelectedCell::new(0, 8)].selected = true;
        assert_eq!(
            grid.selection(),
            [SelectedCell::new(0, 8), SelectedCell::new(5, 5)]
        );

        grid.clear_selection();
        assert!(grid.selection().is_empty());
    }

    #[test]
    fn crosshair_covers_row_column_and_box() {
        let mut grid = Grid::new();
        grid.mark_crosshair(SelectedCell::new(4, 4));

        let marked = grid.cells().filter(|(_, cell)| cell.crosshair).count();
        assert_eq!(marked, 21);
        assert!(grid[SelectedCell::new(3, 5)].crosshair);
        assert!(!grid[SelectedCell::new(0, 0)].crosshair);

        grid.clear_crosshair();
        assert!(grid.cells().all(|(_, cell)| !cell.crosshair));
    }
}
