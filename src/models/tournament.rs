//! TournamentState aggregate, format/duration settings and errors.

use crate::models::assignment::Assignment;
use crate::models::game::{Bye, Group};
use crate::models::match_store::MatchStore;
use crate::models::roster::Roster;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// A player or team with this exact name already exists.
    DuplicateName(String),
    /// The name was empty after trimming whitespace.
    EmptyName,
    /// Generation needs at least one player.
    NoPlayers,
    /// Generation needs at least one team.
    NoTeams,
    /// Every team needs at least one player.
    InsufficientPlayers { players: usize, teams: usize },
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::DuplicateName(name) => write!(f, "\"{}\" has already been added", name),
            TournamentError::EmptyName => write!(f, "Name must not be empty"),
            TournamentError::NoPlayers => write!(f, "Please add at least one player"),
            TournamentError::NoTeams => write!(f, "Please add at least one team"),
            TournamentError::InsufficientPlayers { players, teams } => write!(
                f,
                "The number of players ({}) must be at least the number of teams ({})",
                players, teams
            ),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament (regenerated on reset).
pub type TournamentId = Uuid;

/// How the schedule is built from the team list.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TournamentFormat {
    /// Everyone plays everyone once.
    #[default]
    RoundRobin,
    /// Single elimination bracket with byes.
    Knockout,
    /// Pools of up to four teams, round robin inside each pool.
    Groups,
}

impl TournamentFormat {
    /// Human-readable name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            TournamentFormat::RoundRobin => "Round robin (everyone plays everyone)",
            TournamentFormat::Knockout => "Knockout (single elimination)",
            TournamentFormat::Groups => "Group stage + knockout",
        }
    }

    /// Identifier used in forms and the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentFormat::RoundRobin => "round-robin",
            TournamentFormat::Knockout => "knockout",
            TournamentFormat::Groups => "groups",
        }
    }
}

impl std::fmt::Display for TournamentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised tournament format identifier.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownFormat(pub String);

impl std::fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown tournament format: {}", self.0)
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for TournamentFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "round-robin" => Ok(TournamentFormat::RoundRobin),
            "knockout" => Ok(TournamentFormat::Knockout),
            "groups" => Ok(TournamentFormat::Groups),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

/// Planned length of each match; display metadata only.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchDuration {
    Minutes(u32),
    Custom,
}

impl Default for MatchDuration {
    fn default() -> Self {
        MatchDuration::Minutes(30)
    }
}

impl std::fmt::Display for MatchDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchDuration::Minutes(m) => write!(f, "{} minutes", m),
            MatchDuration::Custom => f.write_str("Custom"),
        }
    }
}

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// No players, no teams, nothing generated.
    Empty,
    /// Players and/or teams entered; nothing generated yet.
    Configured,
    /// An assignment and schedule exist (possibly stale after later roster edits).
    Generated,
}

/// Full tournament state: roster, teams, settings and the last generation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentState {
    pub id: TournamentId,
    pub players: Roster,
    pub teams: Roster,
    pub format: TournamentFormat,
    #[serde(default)]
    pub match_duration: MatchDuration,
    /// Free-text rules shown next to the schedule; never interpreted.
    #[serde(default)]
    pub rules: String,
    /// None until the first successful generation.
    pub assignment: Option<Assignment>,
    pub matches: MatchStore,
    /// Knockout only: teams that advanced without a match.
    #[serde(default)]
    pub byes: Vec<Bye>,
    /// Groups only: composition of each pool.
    #[serde(default)]
    pub groups: Vec<Group>,
    pub generated_at: Option<DateTime<Utc>>,
}

impl Default for TournamentState {
    fn default() -> Self {
        Self::new()
    }
}

impl TournamentState {
    /// Create an empty tournament.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            players: Roster::new(),
            teams: Roster::new(),
            format: TournamentFormat::default(),
            match_duration: MatchDuration::default(),
            rules: String::new(),
            assignment: None,
            matches: MatchStore::new(),
            byes: Vec::new(),
            groups: Vec::new(),
            generated_at: None,
        }
    }

    /// Phase derived from the current contents.
    pub fn phase(&self) -> SessionPhase {
        if self.assignment.is_some() {
            SessionPhase::Generated
        } else if self.players.is_empty() && self.teams.is_empty() {
            SessionPhase::Empty
        } else {
            SessionPhase::Configured
        }
    }
}
