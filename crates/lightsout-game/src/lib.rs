//! Lights Out game model.
//!
//! This crate owns everything the front-end observes:
//!
//! - [`Game`]: one play session (board and move counter).
//! - [`LightsOutModel`]: the commands the front-end issues (toggle, new game,
//!   load/save, hint) and the typed [`ModelEvent`] notifications it receives in
//!   return.
//! - [`board_file`]: reading and writing `.lob` board files.
//!
//! Commands never report their outcome through return values alone; every state
//! change is announced to all subscribers, so a view that re-renders on each event
//! stays consistent with the model.
//!
//! # Examples
//!
//! ```
//! use lightsout_core::Position;
//! use lightsout_game::{LightsOutModel, ModelError, ModelEvent};
//!
//! let mut model = LightsOutModel::new();
//! let events = model.subscribe();
//!
//! // Nothing to hint at before a game starts.
//! assert_eq!(model.hint(), Err(ModelError::NoActiveGame));
//!
//! model.generate_random_board();
//! assert!(matches!(events.try_recv(), Ok(ModelEvent::NewGame { .. })));
//!
//! model.toggle_tile(Position::new(2, 2))?;
//! assert_eq!(model.moves(), 1);
//! assert!(matches!(
//!     events.try_recv(),
//!     Ok(ModelEvent::Move { .. } | ModelEvent::Won { .. })
//! ));
//! # Ok::<(), ModelError>(())
//! ```

pub use self::{error::*, event::*, game::*, model::*};

pub mod board_file;
mod error;
mod event;
mod game;
mod model;
