pub(crate) mod controls;
pub(crate) mod game_screen;
pub(crate) mod grid;
pub(crate) mod grid_theme;
pub(crate) mod input;
pub(crate) mod status_line;
