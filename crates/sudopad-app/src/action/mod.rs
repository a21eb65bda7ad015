use std::mem;

use sudopad_core::{Colour, Digit, DisplayHandle, Mode, SelectMode, SelectedCell};

use crate::state::Settings;

pub mod handler;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectCell(SelectedCell),
    ClearSelection,
    MoveSelection(MoveDirection),
    SetMode(Mode),
    SetSelectMode(SelectMode),
    RequestDigit(Digit),
    ClearCells,
    ToggleColour(Colour),
    NewGrid,
    ToggleCrosshair,
    ToggleShortcutHelp,
    UpdateSettings(Settings),
    BindDisplay {
        pos: SelectedCell,
        handle: DisplayHandle,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDirection {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    #[must_use]
    pub fn step(self, pos: SelectedCell) -> Option<SelectedCell> {
        match self {
            Self::Up => pos.up(),
            Self::Down => pos.down(),
            Self::Left => pos.left(),
            Self::Right => pos.right(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue, MoveDirection};
    use sudopad_core::SelectedCell;

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::ToggleCrosshair);
        queue.request(Action::ClearCells);

        let drained = queue.take_all();
        assert_eq!(drained, [Action::ToggleCrosshair, Action::ClearCells]);
        assert!(queue.take_all().is_empty());
    }

    #[test]
    fn step_stays_inside_grid() {
        let origin = SelectedCell::new(0, 0);
        assert_eq!(MoveDirection::Up.step(origin), None);
        assert_eq!(
            MoveDirection::Right.step(origin),
            Some(SelectedCell::new(0, 1))
        );
    }
}
