//! Sudopad desktop application UI.
//!
//! # Design Notes
//! - A 9x9 grid editor with clues, values, pencil marks, and colour highlights.
//! - Every command is reachable from the keyboard through its underlined
//!   mnemonic letter; labels register their shortcut as they are drawn.
//! - The grid lives in an observable store; the status line subscribes to it.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, SidePanel},
};

use crate::{
    action::{self, ActionRequestQueue},
    state::{AppState, UiState},
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct SudopadApp {
    app_state: AppState,
    ui_state: UiState,
}

impl SudopadApp {
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        let mut app_state = AppState::default();
        let ui_state = UiState::new(&mut app_state);
        log::debug!("{} shortcuts bound at startup", ui_state.shortcuts.len());
        Self {
            app_state,
            ui_state,
        }
    }
}

impl App for SudopadApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        if ctx.memory(|m| m.focused().is_none()) {
            ctx.input(|i| {
                ui::input::handle_input(i, &self.ui_state.shortcuts, &mut action_queue);
            });
            action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);
        }

        let sidebar_vm =
            view_model_builder::build_sidebar_view_model(&self.app_state, &self.ui_state);
        let game_screen_vm = view_model_builder::build_game_screen_view_model(&self.app_state);

        SidePanel::right("sidebar")
            .resizable(false)
            .show(ctx, |ui| {
                ui::sidebar::show(
                    ui,
                    &sidebar_vm,
                    &mut self.ui_state.shortcuts,
                    &mut action_queue,
                );
            });

        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(ui, &game_screen_vm, &mut action_queue);
        });

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);
    }
}
