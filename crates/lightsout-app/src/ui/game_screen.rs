use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use super::{controls, grid, status_line};
use crate::{
    action::ActionRequestQueue,
    ui::{grid::GridViewModel, status_line::StatusLineViewModel},
};

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel {
    pub(crate) grid_vm: GridViewModel,
    pub(crate) status_line_vm: StatusLineViewModel,
}

impl GameScreenViewModel {
    pub(crate) fn new(grid_vm: GridViewModel, status_line_vm: StatusLineViewModel) -> Self {
        Self {
            grid_vm,
            status_line_vm,
        }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &GameScreenViewModel, action_queue: &mut ActionRequestQueue) {
    // controls + grid + status line, with the bars each half a cell tall
    let bar_rows = 0.5;
    let total_rows = grid::GRID_CELLS + bar_rows * 2.0;

    let spacing = ui.spacing().item_spacing;
    let available = ui.available_size() - spacing * 4.0;
    let cell_size = f32::min(available.x / grid::GRID_CELLS, available.y / total_rows);
    let grid_size = cell_size * grid::GRID_CELLS;
    let bar_size = cell_size * bar_rows;
    let text_size = bar_size * 0.6;

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(grid_size))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(bar_size))
                    .size(Size::exact(grid_size))
                    .size(Size::exact(bar_size))
                    .size(Size::remainder())
                    .vertical(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| {
                            controls::show(ui, text_size, action_queue);
                        });
                        strip.cell(|ui| {
                            grid::show(ui, &vm.grid_vm, action_queue);
                        });
                        strip.cell(|ui| {
                            status_line::show(ui, &vm.status_line_vm, text_size);
                        });
                        strip.empty();
                    });
            });
            strip.empty();
        });
}
