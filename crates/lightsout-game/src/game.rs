use lightsout_core::{Board, Position};

/// A Lights Out play session.
///
/// Tracks the current board and the number of toggles made since the board was
/// generated or loaded.
///
/// # Example
///
/// ```
/// use lightsout_core::{Board, Position};
/// use lightsout_game::Game;
///
/// let mut game = Game::new(Board::ALL_OFF.pressed(Position::new(0, 4)));
/// assert!(!game.is_solved());
///
/// game.toggle(Position::new(0, 4));
/// assert!(game.is_solved());
/// assert_eq!(game.moves(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    moves: u32,
}

impl Game {
    /// Starts a session on `board` with no moves made.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self { board, moves: 0 }
    }

    /// Resumes a session with a board and move count restored from storage.
    #[must_use]
    pub fn from_parts(board: Board, moves: u32) -> Self {
        Self { board, moves }
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Returns `true` if the tile at `pos` is on.
    #[must_use]
    pub fn tile(&self, pos: Position) -> bool {
        self.board.is_on(pos)
    }

    /// Returns the number of toggles made in this session.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Returns `true` if every tile is off.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_all_off()
    }

    /// Presses the tile at `pos` and counts the move.
    ///
    /// Toggling is still allowed after the puzzle is solved.
    pub fn toggle(&mut self, pos: Position) {
        self.board.press(pos);
        self.moves = self.moves.saturating_add(1);
    }
}
