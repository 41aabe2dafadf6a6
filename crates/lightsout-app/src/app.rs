//! Lights Out desktop application UI.
//!
//! # Design Notes
//! - The model is the single source of truth; the UI state is a rendering
//!   rebuilt from the model's events.
//! - Each frame collects actions from keyboard shortcuts and widgets, hands them
//!   to the model, then drains the resulting events before drawing.
//! - The current game is stored through eframe persistence and resumed on the
//!   next launch.

use std::{sync::mpsc::Receiver, time::Duration};

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context},
};
use lightsout_game::{LightsOutModel, ModelEvent};

use crate::{
    action::ActionRequestQueue, action_handler, file_picker::RfdFilePicker, persistence,
    state::UiState, ui, view_model_builder,
};

#[derive(Debug)]
pub struct LightsOutApp {
    model: LightsOutModel,
    events: Receiver<ModelEvent>,
    ui_state: UiState,
    file_picker: RfdFilePicker,
    dirty: bool,
}

impl LightsOutApp {
    #[must_use]
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let mut model = cc
            .storage
            .and_then(persistence::load_game)
            .map_or_else(LightsOutModel::new, LightsOutModel::with_game);
        let events = model.subscribe();
        let ui_state = UiState::new(&model);
        Self {
            model,
            events,
            ui_state,
            file_picker: RfdFilePicker,
            dirty: false,
        }
    }

    fn handle_actions(&mut self, action_queue: &mut ActionRequestQueue) {
        action_handler::handle_all(
            &mut self.model,
            &mut self.ui_state,
            &mut self.file_picker,
            action_queue,
        );
        self.dirty |= self.ui_state.sync(&self.model, &self.events);
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.dirty
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.dirty = false;
        }
    }
}

impl App for LightsOutApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        persistence::save_game(storage, self.model.game());
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        ctx.input(|i| ui::input::handle_input(i, &mut action_queue));
        self.handle_actions(&mut action_queue);

        let game_screen_vm = view_model_builder::build_game_screen_view_model(&self.ui_state);
        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(ui, &game_screen_vm, &mut action_queue);
        });

        self.handle_actions(&mut action_queue);
        if self.dirty {
            ctx.request_repaint();
        }
        self.apply_persistence(frame);
    }
}
