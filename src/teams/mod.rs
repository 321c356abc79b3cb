//! Teams and the registry the balancer builds.

use crate::roster::Player;

pub mod balancer;

pub use balancer::balance_teams;

/// A named team and its roster, in the order players were dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// All teams in input order.
///
/// Duplicate team names are kept as separate slots, so the number of teams always
/// matches the number of names the registry was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamRegistry {
    teams: Vec<Team>,
}

impl TeamRegistry {
    /// Creates a registry with one empty team per name.
    pub fn with_team_names<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            teams: names.iter().map(|n| Team::new(n.as_ref())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Team at the given position (menu letter A = 0).
    pub fn get(&self, index: usize) -> Option<&Team> {
        self.teams.get(index)
    }

    /// First team with the given name.
    pub fn find(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.teams.iter().map(|t| t.name.as_str()).collect()
    }

    pub(crate) fn team_mut(&mut self, index: usize) -> Option<&mut Team> {
        self.teams.get_mut(index)
    }
}

impl<'a> IntoIterator for &'a TeamRegistry {
    type Item = &'a Team;
    type IntoIter = std::slice::Iter<'a, Team>;

    fn into_iter(self) -> Self::IntoIter {
        self.teams.iter()
    }
}
