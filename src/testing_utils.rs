use crate::roster::{Player, RawPlayer, RosterFile};

/// Test utilities for creating roster fixtures
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Team names used with the eight-player fixture
    pub fn fixture_team_names() -> Vec<String> {
        ["C", "D", "A", "B"].iter().map(|s| s.to_string()).collect()
    }

    /// Eight raw records: four experienced, four inexperienced, heights summing to 342
    pub fn fixture_raw_players() -> Vec<RawPlayer> {
        vec![
            Self::raw_player("Karl Saygan", "Heather Bledsoe", "YES", "42 inches"),
            Self::raw_player("Matt Gill", "Charles Gill and Sylvia Gill", "NO", "40 inches"),
            Self::raw_player("Sammy Adams", "Jeff Adams and Gary Adams", "NO", "45 inches"),
            Self::raw_player("Chloe Alaska", "David Alaska and Jamie Alaska", "NO", "47 inches"),
            Self::raw_player("Bill Bon", "Sara Bon and Jenny Bon", "YES", "43 inches"),
            Self::raw_player("Joe Kavalier", "Sam Kavalier and Elaine Kavalier", "YES", "39 inches"),
            Self::raw_player("Phillip Helm", "Thomas Helm and Eva Jones", "YES", "44 inches"),
            Self::raw_player("Kimmy Stein", "Bill Stein and Hillary Stein", "NO", "42 inches"),
        ]
    }

    /// The fixture as a roster document
    pub fn fixture_roster() -> RosterFile {
        RosterFile {
            teams: Self::fixture_team_names(),
            players: Self::fixture_raw_players(),
        }
    }

    /// The fixture already normalized
    pub fn fixture_players() -> Vec<Player> {
        Self::fixture_raw_players()
            .into_iter()
            .map(|raw| Player {
                guardians: raw.guardians.split(" and ").map(str::to_string).collect(),
                height: raw
                    .height
                    .split(' ')
                    .next()
                    .and_then(|h| h.parse().ok())
                    .unwrap_or_default(),
                experience: raw.experience == "YES",
                name: raw.name,
            })
            .collect()
    }

    /// Creates a raw record
    pub fn raw_player(name: &str, guardians: &str, experience: &str, height: &str) -> RawPlayer {
        RawPlayer {
            name: name.to_string(),
            guardians: guardians.to_string(),
            experience: experience.to_string(),
            height: height.to_string(),
        }
    }

    /// Creates a normalized player with a single guardian
    pub fn player(name: &str, experience: bool, height: u32) -> Player {
        Player {
            name: name.to_string(),
            guardians: vec![format!("Guardian of {name}")],
            height,
            experience,
        }
    }

    /// Creates an inexperienced 40-inch player with the given guardians
    pub fn player_with_guardians(name: &str, guardians: &[&str]) -> Player {
        Player {
            name: name.to_string(),
            guardians: guardians.iter().map(|g| g.to_string()).collect(),
            height: 40,
            experience: false,
        }
    }
}
