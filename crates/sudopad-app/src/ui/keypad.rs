use eframe::egui::{Button, Grid, RichText, Ui, Vec2};
use sudopad_core::{Colour, Digit, Mode};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::grid_theme::highlight_colour,
};

#[derive(Debug, Clone)]
pub struct KeypadViewModel {
    mode: Mode,
    has_selection: bool,
}

impl KeypadViewModel {
    #[must_use]
    pub fn new(mode: Mode, has_selection: bool) -> Self {
        Self {
            mode,
            has_selection,
        }
    }

    fn digit_hover_text(&self) -> &'static str {
        match self.mode {
            Mode::Initialise => "Set clue",
            Mode::EnterValue => "Set digit",
            Mode::PencilIn => "Toggle candidate",
        }
    }
}

enum ButtonType {
    Digit(Digit),
    Clear,
}

pub fn show(ui: &mut Ui, vm: &KeypadViewModel, action_queue: &mut ActionRequestQueue) {
    #[allow(clippy::enum_glob_use)]
    use Digit::*;
    fn d(d: Digit) -> ButtonType {
        ButtonType::Digit(d)
    }

    let layout = [
        [d(D1), d(D2), d(D3), d(D4), d(D5)],
        [d(D6), d(D7), d(D8), d(D9), ButtonType::Clear],
    ];

    let x_padding = 5.0;
    let y_padding = 5.0;
    let avail = ui.available_size();
    // Two digit rows plus a half-height colour row.
    let button_size = f32::min(
        (avail.x - 4.0 * x_padding) / 5.0,
        (avail.y - 2.0 * y_padding) / 2.5,
    );
    let swatch_size = button_size * 0.5;

    Grid::new(ui.id().with("keypad_grid"))
        .spacing((x_padding, y_padding))
        .show(ui, |ui| {
            for row in &layout {
                for button_type in row {
                    let (text, action, hover) = match button_type {
                        ButtonType::Digit(digit) => (
                            digit.as_str(),
                            Action::RequestDigit(*digit),
                            vm.digit_hover_text(),
                        ),
                        ButtonType::Clear => ("X", Action::ClearCells, "Clear cells"),
                    };
                    let button = Button::new(RichText::new(text).size(button_size * 0.8))
                        .min_size(Vec2::splat(button_size));
                    if ui
                        .add_enabled(vm.has_selection, button)
                        .on_hover_text(hover)
                        .clicked()
                    {
                        action_queue.request(action);
                    }
                }
                ui.end_row();
            }
        });

    ui.horizontal(|ui| {
        for colour in Colour::all() {
            let button = Button::new("")
                .fill(highlight_colour(colour))
                .min_size(Vec2::splat(swatch_size));
            if ui
                .add_enabled(vm.has_selection, button)
                .on_hover_text("Toggle colour")
                .clicked()
            {
                action_queue.request(Action::ToggleColour(colour));
            }
        }
    });
}
