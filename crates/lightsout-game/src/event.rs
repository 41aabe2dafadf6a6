use std::path::PathBuf;

use lightsout_core::Position;
use lightsout_generator::PuzzleSeed;

/// A notification sent by [`LightsOutModel`](crate::LightsOutModel) to every
/// subscriber after a command changes, or reports on, the model.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum ModelEvent {
    /// A new random board replaced the current game.
    NewGame {
        /// Seed the board was generated from.
        seed: PuzzleSeed,
    },
    /// A board file was loaded and replaced the current game.
    Loaded {
        /// The file that was loaded.
        path: PathBuf,
    },
    /// A board file could not be loaded; the current game is unchanged.
    LoadFailed {
        /// The file that was requested.
        path: PathBuf,
        /// Why loading failed.
        reason: String,
    },
    /// The current board was written to a file.
    Saved {
        /// The file that was written.
        path: PathBuf,
    },
    /// The current board could not be written.
    SaveFailed {
        /// The file that was requested.
        path: PathBuf,
        /// Why saving failed.
        reason: String,
    },
    /// A tile was toggled and the puzzle is not solved yet.
    Move {
        /// The tile that was toggled.
        position: Position,
        /// Human-readable description of the move.
        description: String,
    },
    /// A tile was toggled and every tile is now off.
    Won {
        /// The tile that completed the puzzle.
        position: Position,
    },
    /// A hint was computed for the current board.
    Hint {
        /// The tile to press next.
        position: Position,
    },
}
