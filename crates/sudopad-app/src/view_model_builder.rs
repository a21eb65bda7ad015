use crate::{
    state::{AppState, UiState},
    ui::{
        game_screen::GameScreenViewModel,
        grid::{GridCell, GridViewModel, GridVisualState},
        keypad::KeypadViewModel,
        sidebar::SidebarViewModel,
    },
    version,
};

fn build_grid(app_state: &AppState) -> Vec<GridCell> {
    let grid = app_state.grid.get();
    let cursor_digit = app_state.cursor.and_then(|pos| grid[pos].value);

    grid.cells()
        .map(|(_, cell)| {
            let mut visual_state = GridVisualState::empty();
            visual_state.set(GridVisualState::SELECTED, cell.selected);
            visual_state.set(GridVisualState::CROSSHAIR, cell.crosshair);
            visual_state.set(GridVisualState::ERROR, cell.error);
            visual_state.set(
                GridVisualState::SAME_DIGIT,
                cursor_digit.is_some() && cell.value == cursor_digit,
            );
            GridCell {
                value: cell.value,
                locked: cell.locked,
                options: cell.options.clone(),
                colours: cell.colours.clone(),
                visual_state,
                display: cell.display,
            }
        })
        .collect()
}

#[must_use]
pub(crate) fn build_game_screen_view_model(app_state: &AppState) -> GameScreenViewModel {
    let grid_vm = GridViewModel::new(build_grid(app_state), &app_state.settings);
    let has_selection = app_state.grid.get().cells().any(|(_, cell)| cell.selected);
    let keypad_vm = KeypadViewModel::new(app_state.mode, has_selection);
    GameScreenViewModel::new(grid_vm, keypad_vm)
}

#[must_use]
pub(crate) fn build_sidebar_view_model(
    app_state: &AppState,
    ui_state: &UiState,
) -> SidebarViewModel {
    SidebarViewModel {
        mode: app_state.mode,
        select_mode: app_state.select_mode,
        settings: app_state.settings.clone(),
        summary: ui_state.summary(),
        show_shortcut_help: ui_state.show_shortcut_help,
        version: version::build_version(),
    }
}

#[cfg(test)]
mod tests {
    use sudopad_core::{Digit, SelectedCell};

    use super::*;

    #[test]
    fn same_digit_follows_cursor_value() {
        let mut app_state = AppState::default();
        let cursor = SelectedCell::new(0, 0);
        app_state.grid.update(|grid| {
            grid[cursor].value = Some(Digit::D5);
            grid[cursor].selected = true;
            grid[SelectedCell::new(8, 8)].value = Some(Digit::D5);
            grid[SelectedCell::new(4, 4)].value = Some(Digit::D6);
        });
        app_state.cursor = Some(cursor);

        let cells = build_grid(&app_state);
        let same: Vec<_> = cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.visual_state.contains(GridVisualState::SAME_DIGIT))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(same, [0, 80]);
        assert!(cells[0].visual_state.contains(GridVisualState::SELECTED));
        assert!(!cells[40].visual_state.contains(GridVisualState::SELECTED));
    }

    #[test]
    fn no_same_digit_without_cursor_value() {
        let mut app_state = AppState::default();
        app_state.cursor = Some(SelectedCell::new(1, 1));
        let cells = build_grid(&app_state);
        assert!(
            cells
                .iter()
                .all(|c| !c.visual_state.contains(GridVisualState::SAME_DIGIT))
        );
    }

    #[test]
    fn sidebar_reflects_state() {
        let mut app_state = AppState::default();
        let ui_state = UiState::new(&mut app_state);
        app_state
            .grid
            .update(|grid| grid[SelectedCell::new(0, 1)].options.push(Digit::D2));

        let vm = build_sidebar_view_model(&app_state, &ui_state);
        assert_eq!(vm.mode, app_state.mode);
        assert_eq!(vm.summary.pencilled, 1);
        assert!(!vm.show_shortcut_help);
    }
}
