//! Per-team aggregates and the text report shown on the team detail screen.

use crate::roster::Player;
use crate::teams::Team;
use std::fmt::Write;

/// Aggregated numbers and listings for one team.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamStats {
    pub team_name: String,
    pub total_players: usize,
    pub experienced: usize,
    pub inexperienced: usize,
    pub average_height: f64,
    pub player_names: String,
    pub guardians: String,
}

impl TeamStats {
    pub fn from_team(team: &Team) -> Self {
        let experienced = team.players.iter().filter(|p| p.experience).count();

        Self {
            team_name: team.name.clone(),
            total_players: team.len(),
            experienced,
            inexperienced: team.len() - experienced,
            average_height: average_height(&team.players),
            player_names: player_names(&team.players),
            guardians: guardian_names(&team.players),
        }
    }
}

/// Mean height rounded to two decimals; an empty roster averages to 0.
pub fn average_height(players: &[Player]) -> f64 {
    if players.is_empty() {
        return 0.0;
    }
    let total: u64 = players.iter().map(|p| u64::from(p.height)).sum();
    let mean = total as f64 / players.len() as f64;
    (mean * 100.0).round() / 100.0
}

pub fn player_names(players: &[Player]) -> String {
    players
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Every player's guardians flattened into one comma-separated list.
pub fn guardian_names(players: &[Player]) -> String {
    players
        .iter()
        .flat_map(|p| p.guardians.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats the report block for a team.
pub fn render(stats: &TeamStats) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "Team: {} Stats", stats.team_name);
    let _ = writeln!(out, "--------------------");
    let _ = writeln!(out, "Total players: {}", stats.total_players);
    let _ = writeln!(out, "Total experienced: {}", stats.experienced);
    let _ = writeln!(out, "Total inexperienced: {}", stats.inexperienced);
    // Debug keeps the decimal point on whole numbers (44.0)
    let _ = writeln!(out, "Average height: {:?}", stats.average_height);
    let _ = writeln!(out);
    let _ = writeln!(out, "Players on Team:");
    let _ = writeln!(out, " {}", stats.player_names);
    let _ = writeln!(out);
    let _ = writeln!(out, "Guardians:");
    let _ = writeln!(out, " {}", stats.guardians);
    out
}

/// Convenience wrapper: aggregate and format in one step.
pub fn team_report(team: &Team) -> String {
    render(&TeamStats::from_team(team))
}
