use sudopad_core::{Grid, Mode, SelectMode, SelectedCell};

use crate::{state::Settings, store::GridStore};

/// Editing state shared by all widgets.
///
/// The grid lives in a [`GridStore`] so that views can observe it. Everything
/// here is in-memory only and is dropped with the app.
#[derive(Debug)]
pub struct AppState {
    pub grid: GridStore,
    /// The most recently selected cell; arrow keys move from here.
    pub cursor: Option<SelectedCell>,
    pub mode: Mode,
    pub select_mode: SelectMode,
    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Grid::new())
    }
}

impl AppState {
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            grid: GridStore::new(grid),
            cursor: None,
            mode: Mode::default(),
            select_mode: SelectMode::default(),
            settings: Settings::default(),
        }
    }

    /// Recomputes crosshair flags from the current selection and settings.
    pub fn refresh_crosshair(&mut self) {
        let enabled = self.settings.crosshair;
        let grid = self.grid.get();
        let selection = if enabled { grid.selection() } else { vec![] };
        let stale = grid
            .cells()
            .any(|(pos, cell)| cell.crosshair != selection.iter().any(|s| s.shares_house(pos)));
        if !stale {
            return;
        }
        self.grid.update(|grid| {
            grid.clear_crosshair();
            for pos in selection {
                grid.mark_crosshair(pos);
            }
        });
    }
}
