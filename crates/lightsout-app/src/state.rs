use std::sync::mpsc::Receiver;

use lightsout_core::{Array25, Position};
use lightsout_game::{LightsOutModel, ModelEvent};

/// The message half of the status line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub(crate) enum StatusMessage {
    #[display("Start a game first.")]
    StartGameFirst,
    #[display("Start a new game.")]
    StartNewGame,
    #[display("Select a game to load.")]
    SelectGameToLoad,
    #[display("Select a location to save the game.")]
    SelectSaveLocation,
    #[display("New game started")]
    NewGameStarted,
    #[display("Game resumed")]
    GameResumed,
    #[display("Game Loaded")]
    GameLoaded,
    #[display("Error Loading Game")]
    ErrorLoadingGame,
    #[display("Game Saved")]
    GameSaved,
    #[display("Error Saving Game")]
    ErrorSavingGame,
    #[display("Move: {_0}")]
    Move(String),
    #[display("You win. Good for you.")]
    Won,
    #[display("Hint: {_0}")]
    Hint(Position),
    #[display("Puzzle already solved.")]
    AlreadySolved,
    #[display("This board cannot be solved.")]
    Unsolvable,
}

// UiState is the rendering derived from the model. It is rebuilt from model
// events and never written back to the model.
#[derive(Debug)]
pub(crate) struct UiState {
    pub(crate) status: StatusMessage,
    pub(crate) moves: u32,
    pub(crate) tiles: Array25<bool>,
    pub(crate) hint: Option<Position>,
}

impl UiState {
    #[must_use]
    pub(crate) fn new(model: &LightsOutModel) -> Self {
        let status = if model.has_active_game() {
            StatusMessage::GameResumed
        } else {
            StatusMessage::StartGameFirst
        };
        let mut this = Self {
            status,
            moves: model.moves(),
            tiles: Array25::default(),
            hint: None,
        };
        this.rebuild_board(model);
        this
    }

    #[must_use]
    pub(crate) fn status_text(&self) -> String {
        format!("Moves: {} Message: {}", self.moves, self.status)
    }

    /// Applies every pending event. Returns `true` if any event was received.
    pub(crate) fn sync(&mut self, model: &LightsOutModel, events: &Receiver<ModelEvent>) -> bool {
        let mut received = false;
        for event in events.try_iter() {
            self.apply_event(model, &event);
            received = true;
        }
        received
    }

    pub(crate) fn apply_event(&mut self, model: &LightsOutModel, event: &ModelEvent) {
        self.moves = model.moves();
        match event {
            ModelEvent::NewGame { .. } => {
                self.rebuild_board(model);
                self.status = StatusMessage::NewGameStarted;
            }
            ModelEvent::Loaded { .. } => {
                self.rebuild_board(model);
                self.status = StatusMessage::GameLoaded;
            }
            ModelEvent::LoadFailed { .. } => self.status = StatusMessage::ErrorLoadingGame,
            ModelEvent::Saved { .. } => self.status = StatusMessage::GameSaved,
            ModelEvent::SaveFailed { .. } => self.status = StatusMessage::ErrorSavingGame,
            ModelEvent::Move { description, .. } => {
                self.rebuild_board(model);
                self.status = StatusMessage::Move(description.clone());
            }
            ModelEvent::Won { .. } => {
                self.rebuild_board(model);
                self.status = StatusMessage::Won;
            }
            ModelEvent::Hint { position } => {
                self.hint = Some(*position);
                self.status = StatusMessage::Hint(*position);
            }
        }
    }

    fn rebuild_board(&mut self, model: &LightsOutModel) {
        self.tiles = Array25::from_fn(|pos| model.tile(pos));
        self.hint = None;
    }
}
