use lightsout_core::Array25;

use crate::{
    state::{StatusMessage, UiState},
    ui::{
        game_screen::GameScreenViewModel,
        grid::{GridViewModel, GridVisualState},
        status_line::StatusLineViewModel,
    },
};

#[must_use]
pub(crate) fn build_game_screen_view_model(ui_state: &UiState) -> GameScreenViewModel {
    GameScreenViewModel::new(
        build_grid_view_model(ui_state),
        build_status_line_view_model(ui_state),
    )
}

fn build_grid_view_model(ui_state: &UiState) -> GridViewModel {
    let grid = Array25::from_fn(|pos| {
        let mut vs = GridVisualState::empty();
        if ui_state.tiles[pos] {
            vs |= GridVisualState::LIT;
        }
        if ui_state.hint == Some(pos) {
            vs |= GridVisualState::HINT;
        }
        vs
    });
    GridViewModel::new(grid)
}

fn build_status_line_view_model(ui_state: &UiState) -> StatusLineViewModel {
    let highlighted = matches!(
        ui_state.status,
        StatusMessage::Won | StatusMessage::Hint(_)
    );
    StatusLineViewModel::new(ui_state.status_text(), highlighted)
}
