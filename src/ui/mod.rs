pub mod menu;
pub mod render;
pub mod terminal;

pub use menu::{MainChoice, MenuLoop, MenuOptions, MenuState, run_menu};
pub use terminal::run_interactive_menu;
