pub mod game_screen;
pub mod grid;
pub mod grid_theme;
pub mod input;
pub mod keypad;
pub mod mnemonic;
pub mod sidebar;
