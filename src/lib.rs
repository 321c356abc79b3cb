//! Basketball Team Stats Tool Library
//!
//! Normalizes a roster of players, deals experienced and inexperienced players
//! evenly across teams and reports per-team statistics.
//!
//! # Examples
//!
//! ```rust
//! use team_stats::roster::{default_roster, normalize_players};
//! use team_stats::teams::balance_teams;
//! use team_stats::stats::TeamStats;
//! use team_stats::error::AppError;
//!
//! fn main() -> Result<(), AppError> {
//!     let roster = default_roster()?;
//!     let players = normalize_players(&roster.players)?;
//!     let registry = balance_teams(&roster.teams, &players)?;
//!
//!     for team in &registry {
//!         let stats = TeamStats::from_team(team);
//!         println!("{}: {} players", stats.team_name, stats.total_players);
//!     }
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod roster;
pub mod stats;
pub mod teams;
pub mod testing_utils;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use roster::{Player, RawPlayer, RosterFile, normalize_players};
pub use stats::TeamStats;
pub use teams::{Team, TeamRegistry, balance_teams};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
