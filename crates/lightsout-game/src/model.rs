use std::{
    path::Path,
    sync::mpsc::{self, Receiver, Sender},
};

use lightsout_core::{Board, Position};
use lightsout_generator::{PuzzleGenerator, PuzzleSeed};
use lightsout_solver::{Solution, Solver, SolverError};

use crate::{Game, ModelError, ModelEvent, board_file};

/// The Lights Out model observed by the front-end.
///
/// The model owns the current [`Game`] (if any), generates and loads boards,
/// computes hints, and announces every outcome as a [`ModelEvent`] to all
/// subscribers. Subscribers receive events over channels in the order they were
/// emitted; a subscriber whose receiver is dropped is forgotten on the next event.
///
/// # Example
///
/// ```
/// use lightsout_core::{Board, Position};
/// use lightsout_game::{Game, LightsOutModel, ModelEvent};
///
/// let board = Board::ALL_OFF.pressed(Position::new(4, 4));
/// let mut model = LightsOutModel::with_game(Game::new(board));
/// let events = model.subscribe();
///
/// model.hint().unwrap();
/// assert_eq!(
///     events.try_recv().unwrap(),
///     ModelEvent::Hint { position: Position::new(4, 4) }
/// );
///
/// model.toggle_tile(Position::new(4, 4)).unwrap();
/// assert!(model.is_game_over());
/// assert!(events.try_recv().unwrap().is_won());
/// ```
#[derive(Debug)]
pub struct LightsOutModel {
    game: Option<Game>,
    solver: Solver,
    observers: Vec<Sender<ModelEvent>>,
}

impl Default for LightsOutModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LightsOutModel {
    /// Creates a model with no active game.
    #[must_use]
    pub fn new() -> Self {
        Self {
            game: None,
            solver: Solver::new(),
            observers: Vec::new(),
        }
    }

    /// Creates a model that continues `game`, e.g. one restored from storage.
    #[must_use]
    pub fn with_game(game: Game) -> Self {
        Self {
            game: Some(game),
            ..Self::new()
        }
    }

    /// Registers a new observer and returns the receiving end of its event channel.
    pub fn subscribe(&mut self) -> Receiver<ModelEvent> {
        let (tx, rx) = mpsc::channel();
        self.observers.push(tx);
        rx
    }

    fn notify(&mut self, event: &ModelEvent) {
        log::debug!("model event: {event:?}");
        self.observers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Returns the active game, if any.
    #[must_use]
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Returns `true` if a game has been started or loaded.
    #[must_use]
    pub fn has_active_game(&self) -> bool {
        self.game.is_some()
    }

    /// Returns `true` if the tile at `pos` is on. Every tile reads as off when there
    /// is no active game.
    #[must_use]
    pub fn tile(&self, pos: Position) -> bool {
        self.game.as_ref().is_some_and(|game| game.tile(pos))
    }

    /// Returns the number of moves in the active game, or 0 if there is none.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.game.as_ref().map_or(0, Game::moves)
    }

    /// Returns `true` if the active game is solved.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game.as_ref().is_some_and(Game::is_solved)
    }

    /// Presses the tile at `pos` in the active game.
    ///
    /// Notifies [`ModelEvent::Won`] if this move solves the puzzle and
    /// [`ModelEvent::Move`] otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NoActiveGame`] if no game is active; nothing is notified.
    pub fn toggle_tile(&mut self, pos: Position) -> Result<(), ModelError> {
        let game = self.game.as_mut().ok_or(ModelError::NoActiveGame)?;
        game.toggle(pos);
        let event = if game.is_solved() {
            log::info!("puzzle solved in {} moves", game.moves());
            ModelEvent::Won { position: pos }
        } else {
            ModelEvent::Move {
                position: pos,
                description: format!("Toggled {pos}"),
            }
        };
        self.notify(&event);
        Ok(())
    }

    /// Starts a new game on a random solvable board.
    ///
    /// Notifies [`ModelEvent::NewGame`].
    pub fn generate_random_board(&mut self) {
        self.generate_board_with_seed(PuzzleSeed::random());
    }

    /// Starts a new game on the board generated from `seed`.
    ///
    /// Notifies [`ModelEvent::NewGame`].
    pub fn generate_board_with_seed(&mut self, seed: PuzzleSeed) {
        let puzzle = PuzzleGenerator::new(&self.solver).generate_with_seed(seed);
        log::info!(
            "new game from seed {} ({} presses to solve)",
            puzzle.seed,
            puzzle.solution.len()
        );
        self.game = Some(Game::new(puzzle.board));
        self.notify(&ModelEvent::NewGame { seed: puzzle.seed });
    }

    /// Starts a new game on the board stored in `path`.
    ///
    /// Notifies [`ModelEvent::Loaded`] on success. On failure the current game, if
    /// any, is kept unchanged and [`ModelEvent::LoadFailed`] is notified instead.
    pub fn load_board_from_file(&mut self, path: &Path) {
        match board_file::read_board(path) {
            Ok(board) => {
                log::info!("loaded board from {}", path.display());
                self.game = Some(Game::new(board));
                self.notify(&ModelEvent::Loaded {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => {
                log::warn!("failed to load board from {}: {e}", path.display());
                self.notify(&ModelEvent::LoadFailed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }
    }

    /// Writes the current board of the active game to `path`.
    ///
    /// Notifies [`ModelEvent::Saved`] or [`ModelEvent::SaveFailed`].
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NoActiveGame`] if no game is active; nothing is notified.
    pub fn save_board_to_file(&mut self, path: &Path) -> Result<(), ModelError> {
        let board = self.current_board()?;
        let event = match board_file::write_board(path, board) {
            Ok(()) => {
                log::info!("saved board to {}", path.display());
                ModelEvent::Saved {
                    path: path.to_path_buf(),
                }
            }
            Err(e) => {
                log::warn!("failed to save board to {}: {e}", path.display());
                ModelEvent::SaveFailed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        };
        self.notify(&event);
        Ok(())
    }

    /// Returns a minimal set of presses that solves the active game.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NoActiveGame`] if no game is active, or
    /// [`ModelError::Unsolvable`] if the board has no solution.
    pub fn solution(&self) -> Result<Solution, ModelError> {
        let board = self.current_board()?;
        self.solver.solve(board).map_err(|e| match e {
            SolverError::Unsolvable => ModelError::Unsolvable,
        })
    }

    /// Computes the next press towards a minimal solution of the active game.
    ///
    /// Notifies [`ModelEvent::Hint`] with the tile to press.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NoActiveGame`] if no game is active,
    /// [`ModelError::AlreadySolved`] if every tile is off, or
    /// [`ModelError::Unsolvable`] if the board has no solution. Nothing is notified
    /// on error.
    pub fn hint(&mut self) -> Result<(), ModelError> {
        let solution = self.solution()?;
        let position = solution
            .presses()
            .first()
            .copied()
            .ok_or(ModelError::AlreadySolved)?;
        self.notify(&ModelEvent::Hint { position });
        Ok(())
    }

    fn current_board(&self) -> Result<Board, ModelError> {
        self.game
            .as_ref()
            .map(Game::board)
            .ok_or(ModelError::NoActiveGame)
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, sync::mpsc::TryRecvError};

    use tempfile::TempDir;

    use super::*;

    const SEED: &str = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";

    fn model_with(board: Board) -> (LightsOutModel, Receiver<ModelEvent>) {
        let mut model = LightsOutModel::with_game(Game::new(board));
        let events = model.subscribe();
        (model, events)
    }

    #[test]
    fn test_new_model_has_no_game() {
        let model = LightsOutModel::new();
        assert!(!model.has_active_game());
        assert_eq!(model.moves(), 0);
        assert!(!model.is_game_over());
        assert!(Position::ALL.iter().all(|&pos| !model.tile(pos)));
    }

    #[test]
    fn test_commands_without_game_fail_silently() {
        let mut model = LightsOutModel::new();
        let events = model.subscribe();
        assert_eq!(
            model.toggle_tile(Position::new(0, 0)),
            Err(ModelError::NoActiveGame)
        );
        assert_eq!(model.hint(), Err(ModelError::NoActiveGame));
        assert_eq!(
            model.save_board_to_file(Path::new("unused.lob")),
            Err(ModelError::NoActiveGame)
        );
        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_every_toggle_emits_one_event_and_counts_one_move() {
        for pos in Position::ALL {
            let (mut model, events) = model_with(Board::ALL_ON);
            model.toggle_tile(pos).unwrap();
            assert_eq!(model.moves(), 1);
            assert_eq!(
                events.try_recv().unwrap(),
                ModelEvent::Move {
                    position: pos,
                    description: format!("Toggled {pos}"),
                }
            );
            assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
        }
    }

    #[test]
    fn test_winning_toggle_emits_won() {
        let pos = Position::new(1, 3);
        let (mut model, events) = model_with(Board::ALL_OFF.pressed(pos));
        model.toggle_tile(pos).unwrap();
        assert!(model.is_game_over());
        assert_eq!(model.moves(), 1);
        assert_eq!(
            events.try_recv().unwrap(),
            ModelEvent::Won { position: pos }
        );
    }

    #[test]
    fn test_new_game_then_toggle_center() {
        let mut model = LightsOutModel::new();
        let events = model.subscribe();
        let seed: PuzzleSeed = SEED.parse().unwrap();
        model.generate_board_with_seed(seed);
        assert_eq!(events.try_recv().unwrap(), ModelEvent::NewGame { seed });
        assert_eq!(model.moves(), 0);

        let before = model.game().unwrap().board();
        model.toggle_tile(Position::new(2, 2)).unwrap();
        assert_eq!(model.moves(), 1);
        assert_eq!(
            model.game().unwrap().board(),
            before.pressed(Position::new(2, 2))
        );
    }

    #[test]
    fn test_new_game_resets_moves() {
        let (mut model, _events) = model_with(Board::ALL_ON);
        model.toggle_tile(Position::new(0, 0)).unwrap();
        model.generate_random_board();
        assert_eq!(model.moves(), 0);
        assert!(!model.is_game_over());
    }

    #[test]
    fn test_load_success_replaces_game() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("cross.lob");
        fs::write(&path, "00000\n00100\n01110\n00100\n00000\n").unwrap();

        let (mut model, events) = model_with(Board::ALL_ON);
        model.toggle_tile(Position::new(0, 0)).unwrap();
        let _ = events.try_recv();

        model.load_board_from_file(&path);
        assert_eq!(events.try_recv().unwrap(), ModelEvent::Loaded { path });
        assert_eq!(model.moves(), 0);
        assert_eq!(
            model.game().unwrap().board(),
            Board::ALL_OFF.pressed(Position::new(2, 2))
        );
    }

    #[test]
    fn test_load_failure_preserves_game() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.lob");
        fs::write(&path, "not a board").unwrap();

        let (mut model, events) = model_with(Board::ALL_ON);
        model.toggle_tile(Position::new(0, 0)).unwrap();
        let _ = events.try_recv();
        let before = model.game().cloned();

        model.load_board_from_file(&path);
        assert!(matches!(
            events.try_recv().unwrap(),
            ModelEvent::LoadFailed { path: p, .. } if p == path
        ));
        assert_eq!(model.game().cloned(), before);
        assert_eq!(model.moves(), 1);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("saved.lob");
        let board = Board::ALL_OFF.pressed(Position::new(3, 1));

        let (mut model, events) = model_with(board);
        model.save_board_to_file(&path).unwrap();
        assert_eq!(
            events.try_recv().unwrap(),
            ModelEvent::Saved { path: path.clone() }
        );

        let mut other = LightsOutModel::new();
        other.load_board_from_file(&path);
        assert_eq!(other.game().unwrap().board(), board);
    }

    #[test]
    fn test_save_failure_is_notified() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing-dir").join("saved.lob");
        let (mut model, events) = model_with(Board::ALL_ON);
        model.save_board_to_file(&path).unwrap();
        assert!(events.try_recv().unwrap().is_save_failed());
    }

    #[test]
    fn test_hint_errors() {
        let (mut model, events) = model_with(Board::ALL_OFF);
        assert_eq!(model.hint(), Err(ModelError::AlreadySolved));

        let mut lone = Board::ALL_OFF;
        lone.set(Position::new(0, 0), true);
        let mut unsolvable = LightsOutModel::with_game(Game::new(lone));
        assert_eq!(unsolvable.hint(), Err(ModelError::Unsolvable));
        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_following_hints_solves_board() {
        let board: Board = "11111\n10001\n10001\n10001\n11111".parse().unwrap();
        let (mut model, events) = model_with(board);
        let expected = model.solution().unwrap().len();
        while !model.is_game_over() {
            model.hint().unwrap();
            let Ok(ModelEvent::Hint { position }) = events.try_recv() else {
                panic!("expected hint event");
            };
            model.toggle_tile(position).unwrap();
            let _ = events.try_recv();
        }
        assert_eq!(model.moves() as usize, expected);
    }

    #[test]
    fn test_events_reach_every_subscriber() {
        let (mut model, first) = model_with(Board::ALL_ON);
        let second = model.subscribe();
        model.toggle_tile(Position::new(2, 2)).unwrap();
        assert!(first.try_recv().unwrap().is_move());
        assert!(second.try_recv().unwrap().is_move());
    }

    #[test]
    fn test_dropped_subscriber_is_forgotten() {
        let (mut model, first) = model_with(Board::ALL_ON);
        drop(model.subscribe());
        model.toggle_tile(Position::new(2, 2)).unwrap();
        assert_eq!(model.observers.len(), 1);
        assert!(first.try_recv().unwrap().is_move());
    }
}
