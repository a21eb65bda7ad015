use std::{cell::Cell, rc::Rc};

use sudopad_shortcut::ShortcutRegistry;

use crate::{
    command,
    state::{AppState, GridSummary},
    store::SubscriptionId,
};

// UiState holds ephemeral UI-only state. It is not persisted.
#[derive(Debug)]
pub struct UiState {
    pub shortcuts: ShortcutRegistry,
    pub show_shortcut_help: bool,
    summary: Rc<Cell<GridSummary>>,
    summary_subscription: SubscriptionId,
}

impl UiState {
    /// Creates UI state and subscribes to the grid store of `app_state`.
    #[must_use]
    pub fn new(app_state: &mut AppState) -> Self {
        let summary = Rc::new(Cell::new(GridSummary::default()));
        let sink = Rc::clone(&summary);
        let summary_subscription = app_state
            .grid
            .subscribe(move |grid| sink.set(GridSummary::of(grid)));
        Self {
            shortcuts: command::default_registry(),
            show_shortcut_help: false,
            summary,
            summary_subscription,
        }
    }

    /// Counts for the status line, kept current by the grid store subscription.
    #[must_use]
    pub fn summary(&self) -> GridSummary {
        self.summary.get()
    }

    /// Cancels the grid store subscription.
    pub fn detach(&self, app_state: &mut AppState) {
        app_state.grid.unsubscribe(self.summary_subscription);
    }
}
