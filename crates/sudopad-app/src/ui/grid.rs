use std::sync::Arc;

use eframe::egui::{
    Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2,
};
use sudopad_core::{Colour, Digit, DisplayHandle, SelectedCell};

use crate::{
    action::{Action, ActionRequestQueue},
    state::Settings,
    ui::grid_theme::{GridPalette, highlight_colour},
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GridVisualState: u8 {
        const SELECTED = 0b0000_0001;
        const SAME_DIGIT = 0b0000_0010;
        const CROSSHAIR = 0b0000_0100;
        const ERROR = 0b0000_1000;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub value: Option<Digit>,
    pub locked: bool,
    pub options: Vec<Digit>,
    pub colours: Vec<Colour>,
    pub visual_state: GridVisualState,
    pub display: Option<DisplayHandle>,
}

#[derive(Debug, Clone)]
pub struct GridViewModel {
    cells: Vec<GridCell>,
    enabled_highlights: GridVisualState,
}

impl GridViewModel {
    /// Creates a view model from 81 cells in row-major order.
    #[must_use]
    pub fn new(cells: Vec<GridCell>, settings: &Settings) -> Self {
        assert_eq!(cells.len(), 81);
        let mut enabled_highlights = GridVisualState::SELECTED | GridVisualState::ERROR;
        if settings.crosshair {
            enabled_highlights |= GridVisualState::CROSSHAIR;
        }
        if settings.highlight_same_digit {
            enabled_highlights |= GridVisualState::SAME_DIGIT;
        }
        Self {
            cells,
            enabled_highlights,
        }
    }

    #[must_use]
    pub fn cell(&self, pos: SelectedCell) -> &GridCell {
        &self.cells[usize::from(pos.row()) * 9 + usize::from(pos.col())]
    }

    fn effective_visual_state(&self, state: GridVisualState) -> EffectiveGridVisualState {
        EffectiveGridVisualState(self.enabled_highlights & state)
    }
}

pub const GRID_CELLS: f32 = 9.0;

/// Side length of the grid, in cells, including the thick box borders.
pub const GRID_UNITS: f32 =
    GRID_CELLS + CELL_BORDER_WIDTH_BASE_RATIO * THICK_BORDER_WIDTH_RATIO * 4.0;

const CELL_BORDER_WIDTH_BASE_RATIO: f32 = 0.03;
const THICK_BORDER_WIDTH_RATIO: f32 = 3.0;
const THIN_BORDER_WIDTH_RATIO: f32 = 1.0;
const SELECTED_BORDER_WIDTH_RATIO: f32 = 3.0;
const COLOUR_BAND_HEIGHT_RATIO: f32 = 0.18;

fn base_border_width(cell_size: f32) -> f32 {
    f32::max(cell_size * CELL_BORDER_WIDTH_BASE_RATIO, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EffectiveGridVisualState(GridVisualState);

impl EffectiveGridVisualState {
    fn text_color(self, locked: bool, palette: &GridPalette) -> Color32 {
        if self.0.intersects(GridVisualState::ERROR) {
            return palette.text_error;
        }
        if locked {
            palette.text_clue
        } else {
            palette.text_normal
        }
    }

    fn cell_fill_color(self, palette: &GridPalette) -> Color32 {
        if self.0.intersects(GridVisualState::SELECTED) {
            return palette.cell_bg_selected;
        }
        if self.0.intersects(GridVisualState::SAME_DIGIT) {
            return palette.cell_bg_same_digit;
        }
        if self.0.intersects(GridVisualState::CROSSHAIR) {
            return palette.cell_bg_crosshair;
        }
        palette.cell_bg_default
    }

    fn cell_border(self, palette: &GridPalette, cell_size: f32) -> Stroke {
        let (ratio, color) = if self.0.intersects(GridVisualState::ERROR) {
            (SELECTED_BORDER_WIDTH_RATIO, palette.border_error)
        } else if self.0.intersects(GridVisualState::SELECTED) {
            (SELECTED_BORDER_WIDTH_RATIO, palette.border_selected)
        } else {
            (THIN_BORDER_WIDTH_RATIO, palette.border_inactive)
        };
        Stroke::new(base_border_width(cell_size) * ratio, color)
    }
}

pub fn show(ui: &mut Ui, vm: &GridViewModel, action_queue: &mut ActionRequestQueue) {
    let style = Arc::clone(ui.style());
    let palette = GridPalette::from_visuals(&style.visuals);

    let grid_side = ui.available_size().min_elem();
    let cell_size = grid_side / GRID_UNITS;
    let thick_border = Stroke::new(
        base_border_width(cell_size) * THICK_BORDER_WIDTH_RATIO,
        palette.border_inactive,
    );

    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(grid_side), Sense::hover());
    let inner_rect = rect.shrink(thick_border.width);

    let painter = ui.painter();
    draw_outer_border(painter, rect, thick_border);

    for pos in SelectedCell::ALL {
        let cell = vm.cell(pos);
        let vs = vm.effective_visual_state(cell.visual_state);

        let xf = f32::from(pos.col());
        let yf = f32::from(pos.row());
        let cell_min = inner_rect.min
            + Vec2::new(
                cell_size * xf + (xf / 3.0).floor() * thick_border.width,
                cell_size * yf + (yf / 3.0).floor() * thick_border.width,
            );
        let cell_rect = Rect::from_min_size(cell_min, Vec2::splat(cell_size));

        painter.rect_filled(cell_rect, 0.0, vs.cell_fill_color(&palette));
        draw_colour_bands(painter, cell_rect, &cell.colours);

        if let Some(digit) = cell.value {
            painter.text(
                cell_rect.center(),
                Align2::CENTER_CENTER,
                digit.as_str(),
                FontId::proportional(cell_size * 0.8),
                vs.text_color(cell.locked, &palette),
            );
        } else if !cell.options.is_empty() {
            let options_rect = cell_rect.shrink(base_border_width(cell_size));
            draw_options(painter, options_rect, &cell.options, palette.text_option);
        }

        painter.rect_stroke(
            cell_rect,
            0.0,
            vs.cell_border(&palette, cell_size),
            StrokeKind::Inside,
        );

        let id = ui.id().with(("cell", pos.row(), pos.col()));
        let handle = DisplayHandle(id.value());
        if cell.display != Some(handle) {
            action_queue.request(Action::BindDisplay { pos, handle });
        }
        if ui.interact(cell_rect, id, Sense::click()).clicked() {
            action_queue.request(Action::SelectCell(pos));
        }
    }

    draw_box_borders(painter, inner_rect, cell_size, thick_border);
}

fn draw_outer_border(painter: &Painter, rect: Rect, stroke: Stroke) {
    let thickness = stroke.width.max(1.0);
    let sides = [
        Rect::from_min_max(rect.left_top(), Pos2::new(rect.left() + thickness, rect.bottom())),
        Rect::from_min_max(Pos2::new(rect.right() - thickness, rect.top()), rect.right_bottom()),
        Rect::from_min_max(rect.left_top(), Pos2::new(rect.right(), rect.top() + thickness)),
        Rect::from_min_max(Pos2::new(rect.left(), rect.bottom() - thickness), rect.right_bottom()),
    ];
    for side in sides {
        painter.rect_filled(side, 0.0, stroke.color);
    }
}

fn draw_box_borders(painter: &Painter, inner_rect: Rect, cell_size: f32, stroke: Stroke) {
    let start = inner_rect.min;
    let end = inner_rect.max;
    let thickness = stroke.width.max(1.0);
    let half = thickness * 0.5;

    for i in [1.0, 2.0] {
        let offset = cell_size * 3.0 * i + thickness * (i - 0.5);
        let x = start.x + offset;
        let v_rect = Rect::from_min_max(Pos2::new(x - half, start.y), Pos2::new(x + half, end.y));
        painter.rect_filled(v_rect, 0.0, stroke.color);

        let y = start.y + offset;
        let h_rect = Rect::from_min_max(Pos2::new(start.x, y - half), Pos2::new(end.x, y + half));
        painter.rect_filled(h_rect, 0.0, stroke.color);
    }
}

/// Paints one band per colour along the bottom edge, in application order.
fn draw_colour_bands(painter: &Painter, cell_rect: Rect, colours: &[Colour]) {
    if colours.is_empty() {
        return;
    }
    #[expect(clippy::cast_precision_loss)]
    let band_width = cell_rect.width() / colours.len() as f32;
    let band_height = cell_rect.height() * COLOUR_BAND_HEIGHT_RATIO;
    for (i, colour) in colours.iter().enumerate() {
        #[expect(clippy::cast_precision_loss)]
        let left = cell_rect.left() + band_width * i as f32;
        let band = Rect::from_min_size(
            Pos2::new(left, cell_rect.bottom() - band_height),
            Vec2::new(band_width, band_height),
        );
        painter.rect_filled(band, 0.0, highlight_colour(*colour));
    }
}

/// Lays candidates out on a 3×3 raster in the order they were pencilled in.
fn draw_options(painter: &Painter, rect: Rect, options: &[Digit], color: Color32) {
    let font = FontId::proportional(rect.height() / 3.0);
    let slot_w = rect.width() / 3.0;
    let slot_h = rect.height() / 3.0;

    for (slot, digit) in (0u8..9).zip(options) {
        let y = f32::from(slot / 3);
        let x = f32::from(slot % 3);
        let center = rect.min + Vec2::new((x + 0.5) * slot_w, (y + 0.5) * slot_h);
        painter.text(
            center,
            Align2::CENTER_CENTER,
            digit.as_str(),
            font.clone(),
            color,
        );
    }
}
