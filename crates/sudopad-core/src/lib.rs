//! Core data model for the Sudopad grid editor.
//!
//! This crate defines the shapes the UI layer edits: single cells, the 9×9 grid,
//! and the interaction modes a controller switches between. It does not create,
//! mutate, or discard grids on its own; that is left to the UI layer.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe Sudoku digits 1-9
//! - [`colour`]: Palette indices used to highlight cells
//! - [`position`]: The [`SelectedCell`] coordinate pair
//! - [`cell`]: The state of one grid square
//! - [`grid`]: The 9×9 grid, shape-checked at construction
//! - [`mode`]: [`Mode`] and [`SelectMode`] interaction modes
//!
//! # Examples
//!
//! ```
//! use sudopad_core::{Cell, Digit, Grid, SelectedCell};
//!
//! let mut grid = Grid::new();
//! let pos = SelectedCell::new(4, 4);
//!
//! grid[pos] = Cell::clue(Digit::D5);
//! assert!(grid[pos].locked);
//! assert_eq!(grid[pos].value, Some(Digit::D5));
//!
//! grid.mark_crosshair(pos);
//! assert!(grid[SelectedCell::new(4, 0)].crosshair);
//! assert!(!grid[SelectedCell::new(0, 0)].crosshair);
//! ```

pub mod cell;
pub mod colour;
pub mod digit;
pub mod grid;
pub mod mode;
pub mod position;

pub use self::{
    cell::{Cell, DisplayHandle},
    colour::{Colour, ColourError},
    digit::{Digit, DigitError},
    grid::{Grid, GridError},
    mode::{Mode, SelectMode},
    position::{PositionError, SelectedCell},
};
