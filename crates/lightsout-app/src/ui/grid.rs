use eframe::egui::{Color32, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};
use lightsout_core::{Array25, Position};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::grid_theme::{GridPalette, GridTheme},
};

bitflags::bitflags! {
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct GridVisualState: u8 {
        const LIT = 0b0000_0001;
        const HINT = 0b0000_0010;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GridViewModel {
    grid: Array25<GridVisualState>,
}

impl GridViewModel {
    #[must_use]
    pub(crate) fn new(grid: Array25<GridVisualState>) -> Self {
        Self { grid }
    }

    #[cfg(test)]
    pub(crate) fn cell(&self, pos: Position) -> GridVisualState {
        self.grid[pos]
    }
}

pub(crate) const GRID_CELLS: f32 = 5.0;

const CELL_GAP_RATIO: f32 = 0.08;
const BORDER_WIDTH_RATIO: f32 = 0.03;
const HINT_BORDER_WIDTH_RATIO: f32 = 0.1;
const CORNER_RADIUS_RATIO: f32 = 0.08;

impl GridVisualState {
    fn fill_color(self, palette: &GridPalette) -> Color32 {
        if self.contains(Self::LIT) {
            palette.tile_on
        } else {
            palette.tile_off
        }
    }

    fn border(self, palette: &GridPalette, cell_size: f32) -> Stroke {
        if self.contains(Self::HINT) {
            Stroke::new(cell_size * HINT_BORDER_WIDTH_RATIO, palette.border_hint)
        } else {
            let width = f32::max(cell_size * BORDER_WIDTH_RATIO, 1.0);
            Stroke::new(width, palette.border_normal)
        }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &GridViewModel, action_queue: &mut ActionRequestQueue) {
    let grid_side = ui.available_size().min_elem();
    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(grid_side), Sense::hover());

    let theme = GridTheme::default();
    let palette = theme.palette_for(ui.visuals());
    let pitch = grid_side / GRID_CELLS;
    let gap = pitch * CELL_GAP_RATIO;
    let cell_size = pitch - gap;

    for (pos, &vs) in vm.grid.iter() {
        let offset = Vec2::new(f32::from(pos.col()), f32::from(pos.row())) * pitch;
        let cell_rect =
            Rect::from_min_size(rect.min + offset + Vec2::splat(gap * 0.5), Vec2::splat(cell_size));
        let radius = cell_size * CORNER_RADIUS_RATIO;

        let painter = ui.painter();
        painter.rect_filled(cell_rect, radius, vs.fill_color(palette));
        painter.rect_stroke(
            cell_rect,
            radius,
            vs.border(palette, cell_size),
            StrokeKind::Inside,
        );

        let response = ui.interact(cell_rect, ui.id().with(pos), Sense::click());
        if response.clicked() {
            action_queue.request(Action::ToggleTile(pos));
        }
    }
}
