use serde::{Deserialize, Serialize};

/// A player record as it appears in a roster document.
///
/// Every field is free text: guardians are joined with `" and "`, experience is
/// `"YES"` or `"NO"` and height reads like `"42 inches"`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RawPlayer {
    pub name: String,
    pub guardians: String,
    pub experience: String,
    pub height: String,
}

/// A normalized player, derived once from a [`RawPlayer`].
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub guardians: Vec<String>,
    /// Height in inches
    pub height: u32,
    pub experience: bool,
}

impl Player {
    pub fn is_experienced(&self) -> bool {
        self.experience
    }
}

/// Team names plus raw player records, the shape of a roster document.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct RosterFile {
    pub teams: Vec<String>,
    pub players: Vec<RawPlayer>,
}
