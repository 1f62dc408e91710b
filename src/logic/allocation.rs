//! Player allocation: deal shuffled players across teams.

use crate::models::{Assignment, PlayerName, TeamName, TeamSquad};

/// Deal players to teams like cards: player `i` goes to team `i % teams.len()`.
///
/// Team sizes differ by at most one and each team keeps the draw order. The caller guarantees
/// `teams` is non-empty and there are at least as many players as teams; with no teams every
/// player is dropped and the assignment is empty.
pub fn allocate(shuffled_players: &[PlayerName], teams: &[TeamName]) -> Assignment {
    let mut squads: Vec<TeamSquad> = teams
        .iter()
        .map(|team| TeamSquad {
            team: team.clone(),
            players: Vec::with_capacity(shuffled_players.len() / teams.len().max(1) + 1),
        })
        .collect();

    if squads.is_empty() {
        return Assignment::default();
    }

    let team_count = squads.len();
    for (i, player) in shuffled_players.iter().enumerate() {
        squads[i % team_count].players.push(player.clone());
    }

    Assignment { squads }
}
