use lightsout_core::{Board, Position};
use lightsout_solver::{Solution, Solver};
use rand::{
    SeedableRng as _,
    distr::{Distribution as _, StandardUniform},
};
use rand_pcg::Pcg64;

use crate::PuzzleSeed;

/// A generated board together with its minimal solution and seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The board to present to the player.
    pub board: Board,
    /// A minimal set of presses that solves `board`.
    pub solution: Solution,
    /// The seed `board` was generated from.
    pub seed: PuzzleSeed,
}

/// Generates solvable Lights Out boards.
///
/// The generator borrows a [`Solver`] to compute each puzzle's minimal solution,
/// which is also used to reject boards that are too easy.
#[derive(Debug, Clone)]
pub struct PuzzleGenerator<'a> {
    solver: &'a Solver,
    min_presses: usize,
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator that accepts any board that is not already solved.
    #[must_use]
    pub fn new(solver: &'a Solver) -> Self {
        Self {
            solver,
            min_presses: 1,
        }
    }

    /// Requires at least `min_presses` presses in the minimal solution.
    ///
    /// Values are clamped to the range 1-15; no 5×5 board needs more than 15 presses.
    #[must_use]
    pub fn with_min_presses(mut self, min_presses: usize) -> Self {
        self.min_presses = min_presses.clamp(1, 15);
        self
    }

    /// Returns the minimum number of presses a generated board needs.
    #[must_use]
    pub fn min_presses(&self) -> usize {
        self.min_presses
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle identified by `seed`.
    ///
    /// The same seed and minimum press count always yield the same puzzle.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut attempt = 0;
        loop {
            let mut rng = Pcg64::from_seed(seed.derive(attempt));
            let presses: u32 = StandardUniform.sample(&mut rng);
            let board = Board::from_presses(
                Position::ALL
                    .into_iter()
                    .filter(|pos| presses & (1 << pos.index()) != 0),
            );

            if let Ok(solution) = self.solver.solve(board)
                && solution.len() >= self.min_presses
            {
                log::debug!(
                    "generated board after {} attempt(s), {} presses to solve",
                    attempt + 1,
                    solution.len()
                );
                return GeneratedPuzzle {
                    board,
                    solution,
                    seed,
                };
            }
            log::trace!("rejected attempt {attempt} for seed {seed}");
            attempt = attempt.wrapping_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SEEDS: [&str; 3] = [
        "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
        "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
        "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
    ];

    #[test]
    fn test_generate_with_seed_is_reproducible() {
        let solver = Solver::new();
        let generator = PuzzleGenerator::new(&solver);
        for seed in SEEDS {
            let seed: PuzzleSeed = seed.parse().unwrap();
            let first = generator.generate_with_seed(seed);
            let second = generator.generate_with_seed(seed);
            assert_eq!(first, second);
            assert_eq!(first.seed, seed);
        }
    }

    #[test]
    fn test_generated_board_is_solvable_and_unsolved() {
        let solver = Solver::new();
        let generator = PuzzleGenerator::new(&solver);
        for _ in 0..20 {
            let puzzle = generator.generate();
            assert!(!puzzle.board.is_all_off());
            assert!(solver.is_solvable(puzzle.board));
            assert!(puzzle.solution.apply_to(puzzle.board).is_all_off());
            assert_eq!(solver.solve(puzzle.board).unwrap(), puzzle.solution);
        }
    }

    #[test]
    fn test_min_presses_is_respected() {
        let solver = Solver::new();
        let generator = PuzzleGenerator::new(&solver).with_min_presses(8);
        for seed in SEEDS {
            let puzzle = generator.generate_with_seed(seed.parse().unwrap());
            assert!(puzzle.solution.len() >= 8);
        }
    }

    #[test]
    fn test_min_presses_is_clamped() {
        let solver = Solver::new();
        assert_eq!(PuzzleGenerator::new(&solver).with_min_presses(0).min_presses(), 1);
        assert_eq!(PuzzleGenerator::new(&solver).with_min_presses(40).min_presses(), 15);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]
        #[test]
        fn prop_any_seed_gives_unsolved_solvable_board(bytes in any::<[u8; 32]>()) {
            let solver = Solver::new();
            let generator = PuzzleGenerator::new(&solver);
            let puzzle = generator.generate_with_seed(PuzzleSeed::from_bytes(bytes));
            prop_assert!(!puzzle.board.is_all_off());
            prop_assert!(puzzle.solution.apply_to(puzzle.board).is_all_off());
        }
    }
}
