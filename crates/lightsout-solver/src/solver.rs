use lightsout_core::{Board, Position, TILE_COUNT};
use tinyvec::ArrayVec;

use crate::{SolverError, press_system::PressSystem};

/// A set of presses that turns every tile off.
///
/// Presses are kept in row-major order; the order they are applied in does not
/// matter.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Solution {
    presses: ArrayVec<[Position; TILE_COUNT]>,
}

impl Solution {
    fn from_mask(mask: u32) -> Self {
        let presses = Position::ALL
            .into_iter()
            .filter(|pos| mask & (1 << pos.index()) != 0)
            .collect();
        Self { presses }
    }

    /// Returns the presses in row-major order.
    #[must_use]
    pub fn presses(&self) -> &[Position] {
        &self.presses
    }

    /// Returns the number of presses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presses.len()
    }

    /// Returns `true` if the board is already solved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }

    /// Returns `true` if `pos` is one of the presses.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.presses.contains(&pos)
    }

    /// Returns the board after applying every press to `board`.
    #[must_use]
    pub fn apply_to(&self, mut board: Board) -> Board {
        for &pos in &self.presses {
            board.press(pos);
        }
        board
    }
}

/// Solves Lights Out boards by linear algebra over GF(2).
///
/// Construction reduces the press matrix once; every query afterwards is cheap, so
/// a single solver is typically shared for the lifetime of a game model.
///
/// # Examples
///
/// ```
/// use lightsout_core::{Board, Position};
/// use lightsout_solver::{Solver, SolverError};
///
/// let solver = Solver::new();
///
/// // A single lit corner cannot be cleared.
/// let mut board = Board::ALL_OFF;
/// board.set(Position::new(0, 0), true);
/// assert!(!solver.is_solvable(board));
/// assert_eq!(solver.solve(board), Err(SolverError::Unsolvable));
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    system: PressSystem,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Creates a solver for the 5×5 board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            system: PressSystem::new(),
        }
    }

    /// Returns the rank of the press matrix (23 on the 5×5 board).
    #[must_use]
    pub fn rank(&self) -> usize {
        self.system.rank()
    }

    /// Returns the number of independent press patterns that change nothing.
    #[must_use]
    pub fn nullity(&self) -> usize {
        self.system.null_basis().len()
    }

    /// Returns `true` if some set of presses turns every tile of `board` off.
    #[must_use]
    pub fn is_solvable(&self, board: Board) -> bool {
        self.system.is_consistent(board.bits())
    }

    /// Returns every distinct solution of `board`.
    ///
    /// The first entry is the solution with all free presses left out; the order of
    /// the rest follows the null-space basis.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Unsolvable`] if the board has no solution.
    pub fn solutions(&self, board: Board) -> Result<Vec<Solution>, SolverError> {
        Ok(self
            .solution_masks(board)?
            .map(Solution::from_mask)
            .collect())
    }

    /// Returns a solution of `board` with the fewest presses.
    ///
    /// Ties are broken in favour of the first solution in [`Solver::solutions`] order.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Unsolvable`] if the board has no solution.
    pub fn solve(&self, board: Board) -> Result<Solution, SolverError> {
        let best = self
            .solution_masks(board)?
            .min_by_key(|mask| mask.count_ones())
            .unwrap_or_default();
        Ok(Solution::from_mask(best))
    }

    /// Returns the next press towards a minimal solution.
    ///
    /// The press is the first tile, in row-major order, of the solution returned by
    /// [`Solver::solve`]. Returns `Ok(None)` if the board is already solved.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Unsolvable`] if the board has no solution.
    pub fn hint(&self, board: Board) -> Result<Option<Position>, SolverError> {
        Ok(self.solve(board)?.presses().first().copied())
    }

    fn solution_masks(&self, board: Board) -> Result<impl Iterator<Item = u32>, SolverError> {
        let particular = self
            .system
            .particular_solution(board.bits())
            .ok_or(SolverError::Unsolvable)?;
        let basis = self.system.null_basis();
        Ok((0..1_u32 << basis.len()).map(move |combination| {
            basis
                .iter()
                .enumerate()
                .filter(|(i, _)| combination & (1 << i) != 0)
                .fold(particular, |acc, (_, vector)| acc ^ vector)
        }))
    }
}
