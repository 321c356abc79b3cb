//! Converts raw roster records into normalized [`Player`] values.

use crate::constants::{EXPERIENCED_FLAG, GUARDIAN_SEPARATOR};
use crate::error::AppError;
use crate::roster::models::{Player, RawPlayer};

/// Splits a guardian string like `"Sara Bon and Jenny Bon"` into names.
pub fn parse_guardians(guardians: &str) -> Vec<String> {
    guardians
        .split(GUARDIAN_SEPARATOR)
        .map(str::to_string)
        .collect()
}

/// Parses the leading integer token of a height string like `"42 inches"`.
///
/// # Arguments
/// * `player` - Player name, used only for the error message
/// * `height` - Raw height text
///
/// # Returns
/// * `Ok(u32)` - Height in inches
/// * `Err(AppError::HeightParse)` - The leading token is not an integer
pub fn parse_height(player: &str, height: &str) -> Result<u32, AppError> {
    let token = height.split(' ').next().unwrap_or_default();
    token
        .parse::<u32>()
        .map_err(|_| AppError::height_parse(player, height))
}

/// Anything other than the exact experienced flag counts as inexperienced.
pub fn parse_experience(experience: &str) -> bool {
    experience == EXPERIENCED_FLAG
}

/// Normalizes a single raw record.
pub fn normalize_player(raw: &RawPlayer) -> Result<Player, AppError> {
    Ok(Player {
        name: raw.name.clone(),
        guardians: parse_guardians(&raw.guardians),
        height: parse_height(&raw.name, &raw.height)?,
        experience: parse_experience(&raw.experience),
    })
}

/// Normalizes every raw record, keeping input order.
///
/// Stops at the first malformed record; there is no partial result.
pub fn normalize_players(raw_players: &[RawPlayer]) -> Result<Vec<Player>, AppError> {
    let players = raw_players
        .iter()
        .map(normalize_player)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!("Normalized {} players", players.len());
    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, guardians: &str, experience: &str, height: &str) -> RawPlayer {
        RawPlayer {
            name: name.to_string(),
            guardians: guardians.to_string(),
            experience: experience.to_string(),
            height: height.to_string(),
        }
    }

    #[test]
    fn test_parse_height() {
        assert_eq!(parse_height("A", "42 inches").unwrap(), 42);
        assert_eq!(parse_height("A", "36 inches").unwrap(), 36);
        assert_eq!(parse_height("A", "40").unwrap(), 40);
    }

    #[test]
    fn test_parse_height_malformed() {
        let error = parse_height("Karl Saygan", "forty inches").unwrap_err();
        assert!(matches!(error, AppError::HeightParse { .. }));
        assert!(parse_height("A", "").is_err());
        // Leading space leaves an empty first token
        assert!(parse_height("A", " 42 inches").is_err());
        assert!(parse_height("A", "-4 inches").is_err());
    }

    #[test]
    fn test_parse_experience() {
        assert!(parse_experience("YES"));
        assert!(!parse_experience("NO"));
        assert!(!parse_experience("yes"));
        assert!(!parse_experience(""));
    }

    #[test]
    fn test_parse_guardians() {
        assert_eq!(parse_guardians("A and B"), vec!["A", "B"]);
        assert_eq!(parse_guardians("Heather Bledsoe"), vec!["Heather Bledsoe"]);
        // "and" inside a name is not a separator
        assert_eq!(parse_guardians("Sandy Anderson"), vec!["Sandy Anderson"]);
    }

    #[test]
    fn test_normalize_player() {
        let player =
            normalize_player(&raw("Bill Bon", "Sara Bon and Jenny Bon", "YES", "43 inches"))
                .unwrap();

        assert_eq!(player.name, "Bill Bon");
        assert_eq!(player.guardians, vec!["Sara Bon", "Jenny Bon"]);
        assert_eq!(player.height, 43);
        assert!(player.experience);
    }

    #[test]
    fn test_normalize_players_keeps_order() {
        let raws = vec![
            raw("First", "G1", "NO", "40 inches"),
            raw("Second", "G2", "YES", "41 inches"),
            raw("Third", "G3", "NO", "42 inches"),
        ];

        let players = normalize_players(&raws).unwrap();
        let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_normalize_players_fails_on_malformed_height() {
        let raws = vec![
            raw("Good", "G1", "NO", "40 inches"),
            raw("Bad", "G2", "YES", "tall"),
        ];

        match normalize_players(&raws) {
            Err(AppError::HeightParse { player, height }) => {
                assert_eq!(player, "Bad");
                assert_eq!(height, "tall");
            }
            other => panic!("expected HeightParse error, got {other:?}"),
        }
    }
}
