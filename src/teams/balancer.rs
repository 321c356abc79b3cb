//! Deals experienced and inexperienced players across teams.
//!
//! Players are split into two pools, each keeping roster order. Teams are then
//! visited in name order and each takes one player from the end of the
//! experienced pool followed by one from the end of the inexperienced pool, until
//! both pools are empty. Popping from the end (stack order) means the last-listed
//! players of each pool land on the first-listed teams.

use crate::error::AppError;
use crate::roster::Player;
use crate::teams::TeamRegistry;

/// Splits players into `(experienced, inexperienced)`, preserving relative order.
pub fn partition_by_experience(players: &[Player]) -> (Vec<Player>, Vec<Player>) {
    players.iter().cloned().partition(Player::is_experienced)
}

/// Distributes players across the named teams.
///
/// # Arguments
/// * `team_names` - Team names in display order; duplicates become separate teams
/// * `players` - Normalized players in roster order
///
/// # Returns
/// * `Ok(TeamRegistry)` - One team per name with its dealt players
/// * `Err(AppError::UnbalancedRoster)` - The experienced and inexperienced counts differ
///
/// # Notes
/// - When the pools run out part-way through a round, the remaining teams of
///   that round get no further players.
/// - With no team names nothing is dealt and the registry is empty.
pub fn balance_teams<S: AsRef<str>>(
    team_names: &[S],
    players: &[Player],
) -> Result<TeamRegistry, AppError> {
    let mut registry = TeamRegistry::with_team_names(team_names);
    let (mut trained, mut untrained) = partition_by_experience(players);

    if trained.len() != untrained.len() {
        tracing::warn!(
            "Roster is unbalanced: {} experienced vs {} inexperienced",
            trained.len(),
            untrained.len()
        );
        return Err(AppError::unbalanced_roster(trained.len(), untrained.len()));
    }

    if registry.is_empty() {
        if !players.is_empty() {
            tracing::warn!("No teams given, {} players left undealt", players.len());
        }
        return Ok(registry);
    }

    'dealing: while !trained.is_empty() && !untrained.is_empty() {
        for index in 0..registry.len() {
            let (Some(experienced), Some(inexperienced)) = (trained.pop(), untrained.pop())
            else {
                break 'dealing;
            };
            if let Some(team) = registry.team_mut(index) {
                team.players.push(experienced);
                team.players.push(inexperienced);
            }
        }
    }

    for team in &registry {
        tracing::debug!("Team {} received {} players", team.name, team.len());
    }
    tracing::info!(
        "Balanced {} players across {} teams",
        players.len(),
        registry.len()
    );

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    fn names(registry: &TeamRegistry, team: &str) -> Vec<String> {
        registry
            .find(team)
            .unwrap()
            .players
            .iter()
            .map(|p| p.name.clone())
            .collect()
    }

    #[test]
    fn test_partition_preserves_order() {
        let players = TestDataBuilder::fixture_players();
        let (trained, untrained) = partition_by_experience(&players);

        let trained: Vec<&str> = trained.iter().map(|p| p.name.as_str()).collect();
        let untrained: Vec<&str> = untrained.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            trained,
            vec!["Karl Saygan", "Bill Bon", "Joe Kavalier", "Phillip Helm"]
        );
        assert_eq!(
            untrained,
            vec!["Matt Gill", "Sammy Adams", "Chloe Alaska", "Kimmy Stein"]
        );
    }

    #[test]
    fn test_tail_pop_order() {
        let players = TestDataBuilder::fixture_players();
        let registry = balance_teams(&["C", "D", "A", "B"], &players).unwrap();

        assert_eq!(names(&registry, "A"), vec!["Bill Bon", "Sammy Adams"]);
        assert_eq!(names(&registry, "D"), vec!["Joe Kavalier", "Chloe Alaska"]);
        assert_eq!(names(&registry, "C"), vec!["Phillip Helm", "Kimmy Stein"]);
        assert_eq!(names(&registry, "B"), vec!["Karl Saygan", "Matt Gill"]);
    }

    #[test]
    fn test_multiple_rounds() {
        let players = TestDataBuilder::fixture_players();
        let registry = balance_teams(&["Owls", "Hawks"], &players).unwrap();

        assert_eq!(
            names(&registry, "Owls"),
            vec!["Phillip Helm", "Kimmy Stein", "Bill Bon", "Sammy Adams"]
        );
        assert_eq!(
            names(&registry, "Hawks"),
            vec!["Joe Kavalier", "Chloe Alaska", "Karl Saygan", "Matt Gill"]
        );
    }

    #[test]
    fn test_each_team_gets_balanced_pairs() {
        let players = TestDataBuilder::fixture_players();
        let registry = balance_teams(&["C", "D", "A", "B"], &players).unwrap();

        assert_eq!(registry.len(), 4);
        for team in &registry {
            assert_eq!(team.len(), 2);
            let experienced = team.players.iter().filter(|p| p.experience).count();
            assert_eq!(experienced, 1);
        }
    }

    #[test]
    fn test_unbalanced_roster_is_rejected() {
        let players = vec![
            TestDataBuilder::player("T1", true, 40),
            TestDataBuilder::player("T2", true, 40),
            TestDataBuilder::player("T3", true, 40),
            TestDataBuilder::player("U1", false, 40),
            TestDataBuilder::player("U2", false, 40),
        ];

        match balance_teams(&["A", "B"], &players) {
            Err(AppError::UnbalancedRoster { trained, untrained }) => {
                assert_eq!(trained, 3);
                assert_eq!(untrained, 2);
            }
            other => panic!("expected UnbalancedRoster, got {other:?}"),
        }
    }

    #[test]
    fn test_pools_running_out_mid_round() {
        // Six players across two teams: the second team of the second round gets nothing
        let players = vec![
            TestDataBuilder::player("T1", true, 40),
            TestDataBuilder::player("T2", true, 40),
            TestDataBuilder::player("T3", true, 40),
            TestDataBuilder::player("U1", false, 40),
            TestDataBuilder::player("U2", false, 40),
            TestDataBuilder::player("U3", false, 40),
        ];

        let registry = balance_teams(&["A", "B"], &players).unwrap();
        assert_eq!(names(&registry, "A"), vec!["T3", "U3", "T1", "U1"]);
        assert_eq!(names(&registry, "B"), vec!["T2", "U2"]);
    }

    #[test]
    fn test_duplicate_team_names_are_separate_slots() {
        let players = TestDataBuilder::fixture_players();
        let registry = balance_teams(&["Owls", "Owls"], &players).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(0).unwrap().len(), 4);
        assert_eq!(registry.get(1).unwrap().len(), 4);
    }

    #[test]
    fn test_no_teams_deals_nothing() {
        let players = TestDataBuilder::fixture_players();
        let no_teams: [&str; 0] = [];
        let registry = balance_teams(&no_teams, &players).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_empty_roster_gives_empty_teams() {
        let registry = balance_teams(&["A", "B"], &[]).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.iter().all(|t| t.is_empty()));
    }

    #[test]
    fn test_balancing_is_deterministic() {
        let players = TestDataBuilder::fixture_players();
        let first = balance_teams(&["C", "D", "A", "B"], &players).unwrap();
        let second = balance_teams(&["C", "D", "A", "B"], &players).unwrap();
        assert_eq!(first, second);
    }
}
