//! Reading and writing `.lob` board files.
//!
//! A board file holds five rows of five tiles, `1` for on and `0` for off.
//! Spaces and tabs between tiles are ignored, as are blank lines and lines
//! starting with `#`:
//!
//! ```text
//! # cross
//! 0 0 0 0 0
//! 0 0 1 0 0
//! 0 1 1 1 0
//! 0 0 1 0 0
//! 0 0 0 0 0
//! ```

use std::{fs, io, path::Path};

use lightsout_core::{Board, BoardParseError};

/// File extension of board files, without the leading dot.
pub const BOARD_FILE_EXTENSION: &str = "lob";

/// Directory, relative to the working directory, where board files are kept.
pub const DEFAULT_BOARD_DIR: &str = "boards";

/// Errors returned when reading or writing a board file.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum BoardFileError {
    /// The file could not be read or written.
    #[display("{_0}")]
    Io(#[error(source)] io::Error),
    /// The file contents are not a valid board.
    #[display("{_0}")]
    Parse(#[error(source)] BoardParseError),
}

/// Reads a board from `path`.
///
/// # Errors
///
/// Returns [`BoardFileError::Io`] if the file cannot be read, or
/// [`BoardFileError::Parse`] if its contents are not a valid board.
pub fn read_board(path: &Path) -> Result<Board, BoardFileError> {
    let text = fs::read_to_string(path)?;
    let board = text.parse()?;
    Ok(board)
}

/// Writes `board` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`BoardFileError::Io`] if the file cannot be written.
pub fn write_board(path: &Path, board: Board) -> Result<(), BoardFileError> {
    fs::write(path, format!("{board}\n"))?;
    Ok(())
}
