use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use crate::roster::{RosterFile, load_roster_or_default, normalize_players};
use crate::teams::{TeamRegistry, balance_teams};
use crate::ui::{self, MenuOptions};
use std::path::PathBuf;

/// Roster path to load: `--roster` first, then the configured one.
pub fn resolve_roster_path(args: &Args, config: &Config) -> Option<PathBuf> {
    args.roster
        .clone()
        .or_else(|| config.roster_path.as_ref().map(PathBuf::from))
}

/// Normalizes a roster document and balances it into teams.
pub fn build_registry(roster: &RosterFile) -> Result<TeamRegistry, AppError> {
    let players = normalize_players(&roster.players)?;
    balance_teams(&roster.teams, &players)
}

/// Loads the roster chosen by the arguments and config and builds the teams.
pub fn load_registry(args: &Args, config: &Config) -> Result<TeamRegistry, AppError> {
    let roster_path = resolve_roster_path(args, config);
    let roster = load_roster_or_default(roster_path.as_deref())?;
    build_registry(&roster)
}

/// Menu options derived from the arguments and config.
pub fn menu_options(args: &Args, config: &Config) -> MenuOptions {
    MenuOptions {
        clear_screen: config.clear_screen && !args.no_clear && !args.debug,
    }
}

/// Run the interactive application flow.
pub fn run_interactive(args: &Args, config: &Config, registry: &TeamRegistry) -> Result<(), AppError> {
    ui::run_interactive_menu(registry, menu_options(args, config))
}
