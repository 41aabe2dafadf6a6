//! Lights Out solver over GF(2).
//!
//! Pressing a tile twice is the same as not pressing it, and presses commute, so a
//! solution is a set of tiles to press. Writing the board as a vector `b` and the
//! press rule as a 25×25 matrix `A` over GF(2), the solutions are exactly the
//! vectors `x` with `A·x = b`.
//!
//! [`Solver`] reduces `A` once, then answers solvability, minimal-solution and hint
//! queries for any board with a handful of bit operations. On the 5×5 board `A`
//! has rank 23, so only one board in four is solvable and every solvable board has
//! four solutions; [`Solver::solve`] returns one with the fewest presses.
//!
//! # Examples
//!
//! ```
//! use lightsout_core::{Board, Position};
//! use lightsout_solver::Solver;
//!
//! let solver = Solver::new();
//! let board = Board::from_presses([Position::new(0, 0), Position::new(3, 2)]);
//!
//! let solution = solver.solve(board)?;
//! assert_eq!(solution.len(), 2);
//! assert!(solution.apply_to(board).is_all_off());
//!
//! assert_eq!(solver.hint(board)?, Some(Position::new(0, 0)));
//! # Ok::<(), lightsout_solver::SolverError>(())
//! ```

pub use self::{error::*, solver::*};

mod error;
mod press_system;
mod solver;
