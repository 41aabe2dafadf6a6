//! Shared library module for the Lights Out app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::app::LightsOutApp;

pub mod action;
pub mod action_handler;
pub mod app;
pub mod file_picker;
pub mod persistence;
pub mod state;
pub mod ui;
pub mod view_model_builder;
