use lightsout_core::Position;
use lightsout_game::{LightsOutModel, ModelError};

use crate::{
    action::{Action, ActionRequestQueue},
    file_picker::FilePicker,
    state::{StatusMessage, UiState},
};

#[derive(Debug)]
struct ActionContext<'a, P: ?Sized> {
    model: &'a mut LightsOutModel,
    ui_state: &'a mut UiState,
    picker: &'a mut P,
}

pub(crate) fn handle_all<P>(
    model: &mut LightsOutModel,
    ui_state: &mut UiState,
    picker: &mut P,
    action_queue: &mut ActionRequestQueue,
) where
    P: FilePicker + ?Sized,
{
    for action in action_queue.take_all() {
        handle(model, ui_state, picker, action);
    }
}

pub(crate) fn handle<P>(
    model: &mut LightsOutModel,
    ui_state: &mut UiState,
    picker: &mut P,
    action: Action,
) where
    P: FilePicker + ?Sized,
{
    log::debug!("handling action: {action:?}");

    let mut ctx = ActionContext {
        model,
        ui_state,
        picker,
    };

    match action {
        Action::ToggleTile(pos) => ctx.toggle_tile(pos),
        Action::NewGame => ctx.model.generate_random_board(),
        Action::LoadGame => ctx.load_game(),
        Action::SaveGame => ctx.save_game(),
        Action::Hint => ctx.hint(),
    }
}

impl<P> ActionContext<'_, P>
where
    P: FilePicker + ?Sized,
{
    fn toggle_tile(&mut self, pos: Position) {
        if let Err(e) = self.model.toggle_tile(pos) {
            self.show_error(e);
        }
    }

    fn load_game(&mut self) {
        match self.picker.pick_board_to_load() {
            Some(path) => self.model.load_board_from_file(&path),
            None => self.ui_state.status = StatusMessage::SelectGameToLoad,
        }
    }

    fn save_game(&mut self) {
        if !self.model.has_active_game() {
            self.show_error(ModelError::NoActiveGame);
            return;
        }
        let Some(path) = self.picker.pick_board_to_save() else {
            self.ui_state.status = StatusMessage::SelectSaveLocation;
            return;
        };
        if let Err(e) = self.model.save_board_to_file(&path) {
            self.show_error(e);
        }
    }

    fn hint(&mut self) {
        if let Err(e) = self.model.hint() {
            self.show_error(e);
        }
    }

    fn show_error(&mut self, error: ModelError) {
        log::debug!("command rejected: {error}");
        self.ui_state.status = match error {
            ModelError::NoActiveGame => StatusMessage::StartNewGame,
            ModelError::AlreadySolved => StatusMessage::AlreadySolved,
            ModelError::Unsolvable => StatusMessage::Unsolvable,
        };
    }
}
