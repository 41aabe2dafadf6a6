//! Random board generation for Lights Out.
//!
//! Only one board in four can be solved, so boards are not drawn uniformly.
//! Instead the generator draws a random set of presses and applies it to the
//! all-off board; undoing those presses solves the result, so every generated
//! board is solvable by construction.
//!
//! Generation is reproducible: every puzzle carries the [`PuzzleSeed`] it was
//! derived from, and [`PuzzleGenerator::generate_with_seed`] rebuilds the same
//! board from it.
//!
//! # Examples
//!
//! ```
//! use lightsout_generator::PuzzleGenerator;
//! use lightsout_solver::Solver;
//!
//! let solver = Solver::new();
//! let generator = PuzzleGenerator::new(&solver);
//!
//! let puzzle = generator.generate();
//! assert!(!puzzle.board.is_all_off());
//! assert!(puzzle.solution.apply_to(puzzle.board).is_all_off());
//!
//! let again = generator.generate_with_seed(puzzle.seed);
//! assert_eq!(again.board, puzzle.board);
//! ```

pub use self::{generator::*, seed::*};

mod generator;
mod seed;
