//! Core data structures for Lights Out applications.
//!
//! This crate provides the fundamental types shared by the solver, generator,
//! game, and application crates.
//!
//! # Overview
//!
//! - [`position`]: A tile coordinate on the 5×5 board, validated at construction.
//! - [`board`]: The on/off state of all 25 tiles, stored as a 25-bit set, together
//!   with the press rule (a tile and its orthogonal neighbours flip together).
//! - [`containers`]: [`Array25`], a fixed container indexed directly by [`Position`].
//!
//! # Examples
//!
//! ```
//! use lightsout_core::{Board, Position};
//!
//! let mut board = Board::ALL_OFF;
//! board.press(Position::new(2, 2));
//!
//! assert!(board.is_on(Position::new(2, 2)));
//! assert!(board.is_on(Position::new(1, 2)));
//! assert!(!board.is_on(Position::new(1, 1)));
//! assert_eq!(board.lit_count(), 5);
//! ```

pub mod board;
pub mod containers;
pub mod position;

// Re-export commonly used types
pub use self::{
    board::{Board, BoardParseError},
    containers::Array25,
    position::{BOARD_SIZE, Position, TILE_COUNT},
};
