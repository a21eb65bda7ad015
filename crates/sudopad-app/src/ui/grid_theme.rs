use eframe::egui::{Color32, Visuals};
use sudopad_core::Colour;

/// Colours a player can paint cells with, indexed by [`Colour::index`].
pub const HIGHLIGHT_COLOURS: [Color32; Colour::COUNT as usize] = [
    Color32::from_rgb(0xe6, 0x4a, 0x4a),
    Color32::from_rgb(0xf2, 0x99, 0x3a),
    Color32::from_rgb(0xf2, 0xd0, 0x3a),
    Color32::from_rgb(0x6c, 0xc0, 0x4a),
    Color32::from_rgb(0x3a, 0xb8, 0xb0),
    Color32::from_rgb(0x4a, 0x8a, 0xe6),
    Color32::from_rgb(0x8f, 0x5c, 0xd6),
    Color32::from_rgb(0xd6, 0x5c, 0xb0),
    Color32::from_rgb(0x8c, 0x8c, 0x8c),
];

#[must_use]
pub fn highlight_colour(colour: Colour) -> Color32 {
    HIGHLIGHT_COLOURS[usize::from(colour.index())]
}

/// Color palette for grid rendering.
///
/// Kept separate from `egui::Visuals` so grid-specific states (selection,
/// crosshair, errors) can be tuned without touching the global theme.
#[derive(Debug, Clone)]
pub struct GridPalette {
    pub cell_bg_default: Color32,
    pub cell_bg_selected: Color32,
    pub cell_bg_same_digit: Color32,
    pub cell_bg_crosshair: Color32,

    pub border_inactive: Color32,
    pub border_selected: Color32,
    pub border_error: Color32,

    pub text_normal: Color32,
    pub text_clue: Color32,
    pub text_error: Color32,
    pub text_option: Color32,
}

impl GridPalette {
    #[must_use]
    pub fn from_visuals(visuals: &Visuals) -> Self {
        let cell_bg_selected = visuals.selection.bg_fill;

        Self {
            cell_bg_default: visuals.text_edit_bg_color(),
            cell_bg_selected,
            cell_bg_same_digit: cell_bg_selected.gamma_multiply(0.6),
            cell_bg_crosshair: visuals.widgets.hovered.bg_fill,

            border_inactive: visuals.widgets.inactive.fg_stroke.color,
            border_selected: visuals.selection.stroke.color,
            border_error: visuals.error_fg_color,

            text_normal: visuals.text_color(),
            text_clue: visuals.strong_text_color(),
            text_error: visuals.error_fg_color,
            text_option: visuals.weak_text_color(),
        }
    }
}
