//! Match (game), Bye and Group records produced by schedule generation.

use crate::models::roster::TeamName;
use serde::{Deserialize, Serialize};

/// Identifier for a match: its position in the generated list, starting at 0.
pub type MatchId = usize;

/// One side of a match: a real team, or the winner of an earlier knockout match.
///
/// A placeholder never compares equal to a team, whatever the team is called.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Team(TeamName),
    WinnerOf {
        match_id: MatchId,
        /// Display text, e.g. "Winner of (A vs B)".
        label: String,
    },
}

impl Slot {
    /// Placeholder for whoever wins `m`.
    pub fn winner_of(m: &GameMatch) -> Self {
        Slot::WinnerOf {
            match_id: m.id,
            label: format!("Winner of ({})", m.fixture()),
        }
    }

    /// Text to show for this slot.
    pub fn as_str(&self) -> &str {
        match self {
            Slot::Team(name) => name,
            Slot::WinnerOf { label, .. } => label,
        }
    }

    /// The team name, if this slot is a real team.
    pub fn team(&self) -> Option<&str> {
        match self {
            Slot::Team(name) => Some(name),
            Slot::WinnerOf { .. } => None,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Slot {
    fn from(name: &str) -> Self {
        Slot::Team(name.to_string())
    }
}

impl From<String> for Slot {
    fn from(name: String) -> Self {
        Slot::Team(name)
    }
}

/// A single scheduled match between two slots.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub home: Slot,
    pub away: Slot,
    pub home_score: u32,
    pub away_score: u32,
    /// False until a result has been recorded.
    pub played: bool,
    /// Knockout round, starting at 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<u32>,
    /// Group stage label ("A", "B", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl GameMatch {
    pub fn new(id: MatchId, home: impl Into<Slot>, away: impl Into<Slot>) -> Self {
        Self {
            id,
            home: home.into(),
            away: away.into(),
            home_score: 0,
            away_score: 0,
            played: false,
            round: None,
            group: None,
        }
    }

    /// Tag this match with a knockout round.
    pub fn in_round(mut self, round: u32) -> Self {
        self.round = Some(round);
        self
    }

    /// Tag this match with a group label.
    pub fn in_group(mut self, label: impl Into<String>) -> Self {
        self.group = Some(label.into());
        self
    }

    /// Short "Home vs Away" description.
    pub fn fixture(&self) -> String {
        format!("{} vs {}", self.home, self.away)
    }
}

/// A team (or placeholder) that advanced without playing in a knockout round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bye {
    pub round: u32,
    pub team: Slot,
}

/// One pool of the group stage.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub label: String,
    pub teams: Vec<TeamName>,
}
