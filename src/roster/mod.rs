//! Roster documents: loading team names and raw player records from disk,
//! plus the built-in default roster.

use crate::error::AppError;
use std::fs;
use std::path::Path;

pub mod models;
pub mod normalizer;

pub use models::{Player, RawPlayer, RosterFile};
pub use normalizer::normalize_players;

const DEFAULT_ROSTER: &str = include_str!("../../data/default_roster.json");

/// Supported roster document formats, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Json,
    Toml,
}

impl RosterFormat {
    /// Determines the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(RosterFormat::Json),
            Some("toml") => Ok(RosterFormat::Toml),
            _ => Err(AppError::roster_error(format!(
                "Unsupported roster file '{}': expected a .json or .toml extension",
                path.display()
            ))),
        }
    }
}

/// Parses roster document text in the given format.
pub fn parse_roster(content: &str, format: RosterFormat) -> Result<RosterFile, AppError> {
    let roster = match format {
        RosterFormat::Json => serde_json::from_str(content)?,
        RosterFormat::Toml => toml::from_str(content)?,
    };
    Ok(roster)
}

/// Loads a roster document from disk.
///
/// # Returns
/// * `Ok(RosterFile)` - Team names and raw player records
/// * `Err(AppError)` - The file is missing, has an unsupported extension or does not parse
pub fn load_roster(path: &Path) -> Result<RosterFile, AppError> {
    let format = RosterFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::roster_error(format!("Failed to read '{}': {e}", path.display()))
    })?;
    let roster = parse_roster(&content, format)?;

    tracing::info!(
        "Loaded roster from {}: {} teams, {} players",
        path.display(),
        roster.teams.len(),
        roster.players.len()
    );
    Ok(roster)
}

/// The roster bundled with the binary.
pub fn default_roster() -> Result<RosterFile, AppError> {
    parse_roster(DEFAULT_ROSTER, RosterFormat::Json)
}

/// Loads the roster at `path`, or the built-in one when no path is given.
pub fn load_roster_or_default(path: Option<&Path>) -> Result<RosterFile, AppError> {
    match path {
        Some(path) => load_roster(path),
        None => {
            tracing::info!("No roster file given, using the built-in roster");
            default_roster()
        }
    }
}
