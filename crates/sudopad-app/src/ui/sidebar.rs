use eframe::egui::{self, CollapsingHeader, RichText, ScrollArea, Ui, widgets};
use sudopad_core::{Mode, SelectMode};
use sudopad_shortcut::ShortcutRegistry;

use crate::{
    action::{Action, ActionRequestQueue},
    command::Command,
    state::{GridSummary, Settings},
    ui::mnemonic,
};

#[derive(Debug, Clone)]
pub struct SidebarViewModel {
    pub mode: Mode,
    pub select_mode: SelectMode,
    pub settings: Settings,
    pub summary: GridSummary,
    pub show_shortcut_help: bool,
    pub version: String,
}

pub fn show(
    ui: &mut Ui,
    vm: &SidebarViewModel,
    registry: &mut ShortcutRegistry,
    action_queue: &mut ActionRequestQueue,
) {
    let underline = vm.settings.show_shortcut_hints;

    ui.vertical(|ui| {
        ui.group(|ui| {
            let GridSummary {
                clues,
                filled,
                pencilled,
            } = vm.summary;
            ui.label(RichText::new(format!("{} cells empty", vm.summary.empty())).size(18.0));
            ui.label(format!("{clues} clues, {filled} filled, {pencilled} pencilled"));
        });

        ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Mode");
            for mode in Mode::ALL {
                mnemonic::command_button(
                    ui,
                    registry,
                    Command::SetMode(mode),
                    vm.mode == mode,
                    underline,
                    action_queue,
                );
            }

            ui.heading("Select");
            ui.horizontal(|ui| {
                for select_mode in SelectMode::ALL {
                    mnemonic::command_button(
                        ui,
                        registry,
                        Command::SetSelectMode(select_mode),
                        vm.select_mode == select_mode,
                        underline,
                        action_queue,
                    );
                }
            });

            ui.separator();
            for command in [Command::ClearCells, Command::NewGrid] {
                mnemonic::command_button(ui, registry, command, false, underline, action_queue);
            }

            ui.separator();
            CollapsingHeader::new("Settings")
                .default_open(true)
                .show(ui, |ui| {
                    show_settings(ui, &vm.settings, registry, action_queue);
                    widgets::global_theme_preference_buttons(ui);
                });

            mnemonic::command_button(
                ui,
                registry,
                Command::ToggleShortcutHelp,
                vm.show_shortcut_help,
                underline,
                action_queue,
            );
            if vm.show_shortcut_help {
                show_shortcut_help(ui, registry);
            }

            ui.separator();
            ui.weak(format!("Sudopad {}", vm.version));
        });
    });
}

fn show_settings(
    ui: &mut Ui,
    settings: &Settings,
    registry: &mut ShortcutRegistry,
    action_queue: &mut ActionRequestQueue,
) {
    let mut changed = false;
    let mut settings = settings.clone();
    let Settings {
        crosshair,
        highlight_same_digit,
        show_shortcut_hints,
    } = &mut settings;

    if let Some(label) = Command::ToggleCrosshair.register(registry) {
        let job = mnemonic::layout_job(&label, *show_shortcut_hints, ui.style());
        changed |= ui.checkbox(crosshair, job).changed();
    }
    changed |= ui
        .checkbox(highlight_same_digit, "Highlight same digit")
        .changed();
    changed |= ui
        .checkbox(show_shortcut_hints, "Underline shortcut keys")
        .changed();

    if changed {
        action_queue.request(Action::UpdateSettings(settings));
    }
}

fn show_shortcut_help(ui: &mut Ui, registry: &ShortcutRegistry) {
    egui::Grid::new("shortcut_help")
        .striped(true)
        .num_columns(2)
        .show(ui, |ui| {
            for (key, id) in registry.iter() {
                let description =
                    Command::from_id(id).map_or_else(|| id.to_owned(), Command::description);
                ui.monospace(key);
                ui.label(description);
                ui.end_row();
            }
        });
}
