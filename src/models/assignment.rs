//! Assignment: which players were drawn into which team.

use crate::models::roster::{PlayerName, TeamName};
use serde::{Deserialize, Serialize};

/// Players drawn into one team, in draw order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamSquad {
    pub team: TeamName,
    pub players: Vec<PlayerName>,
}

/// Team-to-players partition from one generation, in the team list's order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub squads: Vec<TeamSquad>,
}

impl Assignment {
    /// Team names in assignment order (the order schedules are generated from).
    pub fn team_names(&self) -> Vec<TeamName> {
        self.squads.iter().map(|s| s.team.clone()).collect()
    }

    /// Players drawn into `team`, if the team is part of this assignment.
    pub fn players_of(&self, team: &str) -> Option<&[PlayerName]> {
        self.squads
            .iter()
            .find(|s| s.team == team)
            .map(|s| s.players.as_slice())
    }

    /// Team a player was drawn into.
    pub fn team_of(&self, player: &str) -> Option<&str> {
        self.squads
            .iter()
            .find(|s| s.players.iter().any(|p| p == player))
            .map(|s| s.team.as_str())
    }

    /// Total number of assigned players.
    pub fn player_count(&self) -> usize {
        self.squads.iter().map(|s| s.players.len()).sum()
    }
}
