//! Console setup for the interactive menu.
//!
//! The menu reads whole lines, so the terminal stays in cooked mode; only the
//! window title is changed.

use crate::constants::TERMINAL_TITLE;
use crate::error::AppError;
use crate::teams::TeamRegistry;
use crate::ui::menu::{MenuOptions, run_menu};
use crossterm::{execute, terminal::SetTitle};
use std::io::{stdin, stdout};

/// Runs the menu on the process's stdin and stdout.
pub fn run_interactive_menu(registry: &TeamRegistry, options: MenuOptions) -> Result<(), AppError> {
    let mut out = stdout();
    execute!(out, SetTitle(TERMINAL_TITLE))
        .map_err(|e| AppError::terminal_error(format!("Failed to set terminal title: {e}")))?;

    tracing::info!(
        "Starting menu with {} teams (clear screen: {})",
        registry.len(),
        options.clear_screen
    );
    run_menu(registry, stdin().lock(), out.lock(), options)
}
