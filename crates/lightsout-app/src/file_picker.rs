use std::path::PathBuf;

use lightsout_game::board_file::{BOARD_FILE_EXTENSION, DEFAULT_BOARD_DIR};

/// Asks the user for a board file. `None` means the user cancelled.
pub(crate) trait FilePicker {
    fn pick_board_to_load(&mut self) -> Option<PathBuf>;
    fn pick_board_to_save(&mut self) -> Option<PathBuf>;
}

/// Native file dialog opened in the `boards/` directory and filtered to `.lob` files.
#[derive(Debug, Default)]
pub(crate) struct RfdFilePicker;

impl RfdFilePicker {
    fn dialog(title: &str) -> rfd::FileDialog {
        let dialog = rfd::FileDialog::new()
            .set_title(title)
            .add_filter("Lights Out board", &[BOARD_FILE_EXTENSION]);
        match std::env::current_dir() {
            Ok(cwd) => dialog.set_directory(cwd.join(DEFAULT_BOARD_DIR)),
            Err(e) => {
                log::warn!("failed to resolve working directory: {e}");
                dialog
            }
        }
    }
}

impl FilePicker for RfdFilePicker {
    fn pick_board_to_load(&mut self) -> Option<PathBuf> {
        Self::dialog("Load Game").pick_file()
    }

    fn pick_board_to_save(&mut self) -> Option<PathBuf> {
        Self::dialog("Save Game")
            .set_file_name(format!("board.{BOARD_FILE_EXTENSION}"))
            .save_file()
    }
}
