//! Session persistence through eframe storage.

use eframe::Storage;
use lightsout_core::Board;
use lightsout_game::Game;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "lightsout/game";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct PersistedGame {
    board: String,
    moves: u32,
}

impl PersistedGame {
    fn from_game(game: &Game) -> Self {
        Self {
            board: game.board().to_string(),
            moves: game.moves(),
        }
    }

    fn into_game(self) -> Option<Game> {
        match self.board.parse::<Board>() {
            Ok(board) => Some(Game::from_parts(board, self.moves)),
            Err(e) => {
                log::warn!("discarding stored game: {e}");
                None
            }
        }
    }
}

/// Restores the game saved by a previous session, if any.
#[must_use]
pub(crate) fn load_game(storage: &dyn Storage) -> Option<Game> {
    eframe::get_value::<Option<PersistedGame>>(storage, STORAGE_KEY)
        .flatten()
        .and_then(PersistedGame::into_game)
}

pub(crate) fn save_game(storage: &mut dyn Storage, game: Option<&Game>) {
    let persisted = game.map(PersistedGame::from_game);
    eframe::set_value(storage, STORAGE_KEY, &persisted);
}
