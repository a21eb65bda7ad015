use sudopad_core::Grid;

/// Cell counts shown in the status line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GridSummary {
    pub clues: usize,
    pub filled: usize,
    pub pencilled: usize,
}

impl GridSummary {
    #[must_use]
    pub fn of(grid: &Grid) -> Self {
        let mut summary = Self::default();
        for (_, cell) in grid.cells() {
            if cell.value.is_some() {
                if cell.locked {
                    summary.clues += 1;
                } else {
                    summary.filled += 1;
                }
            } else if !cell.options.is_empty() {
                summary.pencilled += 1;
            }
        }
        summary
    }

    #[must_use]
    pub fn empty(self) -> usize {
        81 - self.clues - self.filled
    }
}
