use sudopad_core::{Colour, Digit, Grid, Mode, SelectMode, SelectedCell};

use crate::{
    action::{Action, ActionRequestQueue},
    state::{AppState, UiState},
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: &'a mut AppState,
    ui_state: &'a mut UiState,
}

pub fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    const DEFAULT_POSITION: SelectedCell = SelectedCell::new(0, 0);

    let mut ctx = ActionContext {
        app_state,
        ui_state,
    };

    match action {
        Action::SelectCell(pos) => ctx.select_cell(pos),
        Action::ClearSelection => {
            ctx.app_state.grid.update(Grid::clear_selection);
            ctx.app_state.cursor = None;
        }
        Action::MoveSelection(direction) => {
            let from = ctx.app_state.cursor.unwrap_or(DEFAULT_POSITION);
            let to = direction.step(from).unwrap_or(from);
            ctx.select_only(to);
        }
        Action::SetMode(mode) => {
            if ctx.app_state.mode != mode {
                log::debug!("mode changed: {:?} -> {mode:?}", ctx.app_state.mode);
                ctx.app_state.mode = mode;
            }
        }
        Action::SetSelectMode(select_mode) => {
            if ctx.app_state.select_mode != select_mode {
                log::debug!(
                    "select mode changed: {:?} -> {select_mode:?}",
                    ctx.app_state.select_mode
                );
                ctx.app_state.select_mode = select_mode;
            }
        }
        Action::RequestDigit(digit) => ctx.request_digit(digit),
        Action::ClearCells => ctx.clear_cells(),
        Action::ToggleColour(colour) => ctx.toggle_colour(colour),
        Action::NewGrid => {
            log::info!("starting a new grid");
            ctx.app_state.grid.set(Grid::new());
            ctx.app_state.cursor = None;
            ctx.app_state.mode = Mode::Initialise;
        }
        Action::ToggleCrosshair => {
            let settings = &mut ctx.app_state.settings;
            settings.crosshair = !settings.crosshair;
        }
        Action::ToggleShortcutHelp => {
            ctx.ui_state.show_shortcut_help = !ctx.ui_state.show_shortcut_help;
        }
        Action::UpdateSettings(settings) => ctx.app_state.settings = settings,
        Action::BindDisplay { pos, handle } => {
            ctx.app_state
                .grid
                .update(|grid| grid[pos].display = Some(handle));
        }
    }

    ctx.app_state.refresh_crosshair();
}

impl ActionContext<'_> {
    fn select_cell(&mut self, pos: SelectedCell) {
        match self.app_state.select_mode {
            SelectMode::Single => self.select_only(pos),
            SelectMode::Multiple => {
                let selected = self.app_state.grid.update(|grid| {
                    let cell = &mut grid[pos];
                    cell.selected = !cell.selected;
                    cell.selected
                });
                if selected {
                    self.app_state.cursor = Some(pos);
                } else {
                    self.drop_cursor_at(pos);
                }
            }
            SelectMode::Clear => {
                self.app_state
                    .grid
                    .update(|grid| grid[pos].selected = false);
                self.drop_cursor_at(pos);
            }
        }
    }

    fn select_only(&mut self, pos: SelectedCell) {
        self.app_state.grid.update(|grid| {
            grid.clear_selection();
            grid[pos].selected = true;
        });
        self.app_state.cursor = Some(pos);
    }

    fn drop_cursor_at(&mut self, pos: SelectedCell) {
        if self.app_state.cursor == Some(pos) {
            self.app_state.cursor = None;
        }
    }

    fn request_digit(&mut self, digit: Digit) {
        let mode = self.app_state.mode;
        self.app_state.grid.update(|grid| {
            for pos in grid.selection() {
                let cell = &mut grid[pos];
                match mode {
                    Mode::Initialise => {
                        cell.value = Some(digit);
                        cell.options.clear();
                        cell.initialised = true;
                        cell.locked = true;
                    }
                    Mode::EnterValue if cell.is_editable() => {
                        cell.value = Some(digit);
                        cell.options.clear();
                    }
                    Mode::PencilIn if cell.is_editable() && cell.is_empty() => {
                        cell.toggle_option(digit);
                    }
                    Mode::EnterValue | Mode::PencilIn => {}
                }
            }
        });
    }

    fn clear_cells(&mut self) {
        let include_clues = self.app_state.mode.is_initialise();
        self.app_state.grid.update(|grid| {
            for pos in grid.selection() {
                let cell = &mut grid[pos];
                if include_clues {
                    cell.clear_entries();
                    cell.locked = false;
                    cell.initialised = false;
                } else if cell.is_editable() {
                    cell.clear_entries();
                }
            }
        });
    }

    fn toggle_colour(&mut self, colour: Colour) {
        self.app_state.grid.update(|grid| {
            let selection = grid.selection();
            let all_have = selection
                .iter()
                .all(|pos| grid[*pos].colours.contains(&colour));
            for pos in selection {
                let cell = &mut grid[pos];
                if all_have || !cell.colours.contains(&colour) {
                    cell.toggle_colour(colour);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use sudopad_core::{
        Cell, Colour, Digit, DisplayHandle, Grid, Mode, SelectMode, SelectedCell,
    };

    use super::handle;
    use crate::{
        action::{Action, MoveDirection},
        state::{AppState, UiState},
    };

    fn states() -> (AppState, UiState) {
        let mut grid = Grid::new();
        grid[SelectedCell::new(0, 1)] = Cell::clue(Digit::D1);
        let mut app_state = AppState::new(grid);
        let ui_state = UiState::new(&mut app_state);
        (app_state, ui_state)
    }

    fn run(
        app_state: &mut AppState,
        ui_state: &mut UiState,
        actions: impl IntoIterator<Item = Action>,
    ) {
        for action in actions {
            handle(app_state, ui_state, action);
        }
    }

    fn cell(app_state: &AppState, row: u8, col: u8) -> &Cell {
        &app_state.grid.get()[SelectedCell::new(row, col)]
    }

    #[test]
    fn single_select_replaces_selection() {
        let (mut app_state, mut ui_state) = states();
        run(
            &mut app_state,
            &mut ui_state,
            [
                Action::SelectCell(SelectedCell::new(0, 0)),
                Action::SelectCell(SelectedCell::new(5, 5)),
            ],
        );

        assert_eq!(app_state.grid.get().selection(), [SelectedCell::new(5, 5)]);
        assert_eq!(app_state.cursor, Some(SelectedCell::new(5, 5)));
    }

    #[test]
    fn multiple_select_toggles_and_clear_mode_deselects() {
        let (mut app_state, mut ui_state) = states();
        let a = SelectedCell::new(1, 1);
        let b = SelectedCell::new(2, 2);
        run(
            &mut app_state,
            &mut ui_state,
            [
                Action::SetSelectMode(SelectMode::Multiple),
                Action::SelectCell(a),
                Action::SelectCell(b),
            ],
        );
        assert_eq!(app_state.grid.get().selection(), [a, b]);

        handle(&mut app_state, &mut ui_state, Action::SelectCell(b));
        assert_eq!(app_state.grid.get().selection(), [a]);
        assert_eq!(app_state.cursor, None);

        run(
            &mut app_state,
            &mut ui_state,
            [
                Action::SetSelectMode(SelectMode::Clear),
                Action::SelectCell(a),
            ],
        );
        assert!(app_state.grid.get().selection().is_empty());
    }

    #[test]
    fn move_selection_starts_at_origin_and_stops_at_edge() {
        let (mut app_state, mut ui_state) = states();
        run(
            &mut app_state,
            &mut ui_state,
            [
                Action::MoveSelection(MoveDirection::Down),
                Action::MoveSelection(MoveDirection::Left),
            ],
        );
        assert_eq!(app_state.cursor, Some(SelectedCell::new(1, 0)));
        assert_eq!(app_state.grid.get().selection(), [SelectedCell::new(1, 0)]);

        handle(&mut app_state, &mut ui_state, Action::ClearSelection);
        assert_eq!(app_state.cursor, None);
        assert!(app_state.grid.get().selection().is_empty());
    }

    #[test]
    fn clue_cells_ignore_value_and_pencil_input() {
        let (mut app_state, mut ui_state) = states();
        run(
            &mut app_state,
            &mut ui_state,
            [
                Action::SetSelectMode(SelectMode::Multiple),
                Action::SelectCell(SelectedCell::new(0, 0)),
                Action::SelectCell(SelectedCell::new(0, 1)),
                Action::RequestDigit(Digit::D7),
            ],
        );
        assert_eq!(cell(&app_state, 0, 0).value, Some(Digit::D7));
        assert_eq!(cell(&app_state, 0, 1).value, Some(Digit::D1));

        run(
            &mut app_state,
            &mut ui_state,
            [
                Action::SetMode(Mode::PencilIn),
                Action::RequestDigit(Digit::D3),
            ],
        );
        // Filled and clue cells take no pencil marks.
        assert!(cell(&app_state, 0, 0).options.is_empty());
        assert!(cell(&app_state, 0, 1).options.is_empty());
    }

    #[test]
    fn pencil_marks_keep_insertion_order_and_values_clear_them() {
        let (mut app_state, mut ui_state) = states();
        run(
            &mut app_state,
            &mut ui_state,
            [
                Action::SelectCell(SelectedCell::new(4, 4)),
                Action::SetMode(Mode::PencilIn),
                Action::RequestDigit(Digit::D9),
                Action::RequestDigit(Digit::D2),
                Action::RequestDigit(Digit::D5),
                Action::RequestDigit(Digit::D2),
            ],
        );
        assert_eq!(cell(&app_state, 4, 4).options, [Digit::D9, Digit::D5]);

        run(
            &mut app_state,
            &mut ui_state,
            [
                Action::SetMode(Mode::EnterValue),
                Action::RequestDigit(Digit::D6),
            ],
        );
        assert_eq!(cell(&app_state, 4, 4).value, Some(Digit::D6));
        assert!(cell(&app_state, 4, 4).options.is_empty());
    }

    #[test]
    fn initialise_mode_sets_and_clears_clues() {
        let (mut app_state, mut ui_state) = states();
        run(
            &mut app_state,
            &mut ui_state,
            [
                Action::SetMode(Mode::Initialise),
                Action::SelectCell(SelectedCell::new(8, 8)),
                Action::RequestDigit(Digit::D4),
            ],
        );
        let clue = cell(&app_state, 8, 8);
        assert!(clue.locked && clue.initialised);
        assert_eq!(clue.value, Some(Digit::D4));

        handle(&mut app_state, &mut ui_state, Action::ClearCells);
        let cleared = cell(&app_state, 8, 8);
        assert!(cleared.is_empty());
        assert!(!cleared.locked && !cleared.initialised);
    }

    #[test]
    fn clear_cells_outside_initialise_spares_clues() {
        let (mut app_state, mut ui_state) = states();
        run(
            &mut app_state,
            &mut ui_state,
            [
                Action::SelectCell(SelectedCell::new(0, 1)),
                Action::ClearCells,
            ],
        );
        assert_eq!(cell(&app_state, 0, 1).value, Some(Digit::D1));
        assert!(cell(&app_state, 0, 1).locked);
    }

    #[test]
    fn colour_toggles_across_selection() {
        let (mut app_state, mut ui_state) = states();
        let red = Colour::new(0).unwrap();
        run(
            &mut app_state,
            &mut ui_state,
            [
                Action::SetSelectMode(SelectMode::Multiple),
                Action::SelectCell(SelectedCell::new(3, 0)),
                Action::ToggleColour(red),
                Action::SelectCell(SelectedCell::new(3, 1)),
                Action::ToggleColour(red),
            ],
        );
        // Mixed selection: the colour is added where missing.
        assert_eq!(cell(&app_state, 3, 0).colours, [red]);
        assert_eq!(cell(&app_state, 3, 1).colours, [red]);

        handle(&mut app_state, &mut ui_state, Action::ToggleColour(red));
        assert!(cell(&app_state, 3, 0).colours.is_empty());
        assert!(cell(&app_state, 3, 1).colours.is_empty());
    }

    #[test]
    fn crosshair_follows_selection_and_toggle() {
        let (mut app_state, mut ui_state) = states();
        handle(
            &mut app_state,
            &mut ui_state,
            Action::SelectCell(SelectedCell::new(0, 0)),
        );
        assert!(cell(&app_state, 0, 8).crosshair);
        assert!(cell(&app_state, 2, 2).crosshair);
        assert!(!cell(&app_state, 3, 3).crosshair);

        handle(&mut app_state, &mut ui_state, Action::ToggleCrosshair);
        assert!(!app_state.settings.crosshair);
        assert!(!cell(&app_state, 0, 8).crosshair);
    }

    #[test]
    fn new_grid_replaces_store_content() {
        let (mut app_state, mut ui_state) = states();
        run(
            &mut app_state,
            &mut ui_state,
            [
                Action::SelectCell(SelectedCell::new(7, 7)),
                Action::RequestDigit(Digit::D2),
                Action::NewGrid,
            ],
        );
        assert_eq!(*app_state.grid.get(), Grid::new());
        assert_eq!(app_state.cursor, None);
        assert_eq!(app_state.mode, Mode::Initialise);
        assert_eq!(ui_state.summary().empty(), 81);
    }

    #[test]
    fn bind_display_records_handle() {
        let (mut app_state, mut ui_state) = states();
        let pos = SelectedCell::new(6, 2);
        handle(
            &mut app_state,
            &mut ui_state,
            Action::BindDisplay {
                pos,
                handle: DisplayHandle(42),
            },
        );
        assert_eq!(cell(&app_state, 6, 2).display, Some(DisplayHandle(42)));
    }

    #[test]
    fn shortcut_help_toggles() {
        let (mut app_state, mut ui_state) = states();
        handle(&mut app_state, &mut ui_state, Action::ToggleShortcutHelp);
        assert!(ui_state.show_shortcut_help);
    }
}
