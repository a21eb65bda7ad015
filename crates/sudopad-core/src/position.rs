//! Grid coordinates.

/// A coordinate pair identifying one grid square.
///
/// Both `row` and `col` are in the range 0-8. Rows grow downwards, columns grow
/// to the right.
///
/// # Examples
///
/// ```
/// use sudopad_core::SelectedCell;
///
/// let pos = SelectedCell::new(4, 7);
/// assert_eq!(pos.box_index(), 5);
/// assert_eq!(pos.up(), Some(SelectedCell::new(3, 7)));
/// assert_eq!(SelectedCell::new(0, 0).left(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SelectedCell {
    row: u8,
    col: u8,
}

/// Error returned when a coordinate lies outside the 9×9 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PositionError {
    /// Row or column is 9 or greater.
    #[display("position ({row}, {col}) is outside the 9x9 grid")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl SelectedCell {
    /// All 81 positions in row-major order.
    #[expect(clippy::cast_possible_truncation)]
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "position out of range");
        Self { row, col }
    }

    /// Creates a position from unchecked indices.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::OutOfRange`] if either index is 9 or greater.
    pub fn try_new(row: usize, col: usize) -> Result<Self, PositionError> {
        match (u8::try_from(row), u8::try_from(col)) {
            (Ok(r), Ok(c)) if r < 9 && c < 9 => Ok(Self { row: r, col: c }),
            _ => Err(PositionError::OutOfRange { row, col }),
        }
    }

    /// Row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Index of the 3×3 box containing this position (0-8, left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns `true` if `other` lies in the same row, column, or box.
    #[must_use]
    pub const fn shares_house(self, other: Self) -> bool {
        self.row == other.row || self.col == other.col || self.box_index() == other.box_index()
    }

    /// The position one row up, or `None` at the top edge.
    #[must_use]
    pub const fn up(self) -> Option<Self> {
        if self.row > 0 {
            Some(Self::new(self.row - 1, self.col))
        } else {
            None
        }
    }

    /// The position one row down, or `None` at the bottom edge.
    #[must_use]
    pub const fn down(self) -> Option<Self> {
        if self.row < 8 {
            Some(Self::new(self.row + 1, self.col))
        } else {
            None
        }
    }

    /// The position one column left, or `None` at the left edge.
    #[must_use]
    pub const fn left(self) -> Option<Self> {
        if self.col > 0 {
            Some(Self::new(self.row, self.col - 1))
        } else {
            None
        }
    }

    /// The position one column right, or `None` at the right edge.
    #[must_use]
    pub const fn right(self) -> Option<Self> {
        if self.col < 8 {
            Some(Self::new(self.row, self.col + 1))
        } else {
            None
        }
    }
}
