//! TournamentSession: owns the tournament state and runs the draw.

use crate::logic::{allocate, build_schedule, shuffled};
use crate::models::{
    MatchDuration, MatchId, SessionPhase, TournamentError, TournamentFormat, TournamentState,
};
use chrono::Utc;
use rand::Rng;

/// Single owner of a `TournamentState`. Callers only ever see borrows or clones of it.
#[derive(Clone, Debug, Default)]
pub struct TournamentSession {
    state: TournamentState,
}

impl TournamentSession {
    /// Start an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a previously saved state.
    pub fn from_state(state: TournamentState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &TournamentState {
        &self.state
    }

    /// Owned copy for rendering or persistence.
    pub fn snapshot(&self) -> TournamentState {
        self.state.clone()
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    /// Add a player to the roster. Names are unique (case-sensitive).
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<(), TournamentError> {
        self.state.players.add(name)?;
        log::debug!("player added ({} total)", self.state.players.len());
        Ok(())
    }

    /// Remove the player at `index`; out of range is ignored.
    ///
    /// An existing assignment and schedule are kept as they are until the next `generate`.
    pub fn remove_player(&mut self, index: usize) -> Option<String> {
        let removed = self.state.players.remove(index);
        if removed.is_none() {
            log::debug!("remove_player: index {} out of range", index);
        }
        removed
    }

    /// Add a team. Names are unique (case-sensitive).
    pub fn add_team(&mut self, name: impl Into<String>) -> Result<(), TournamentError> {
        self.state.teams.add(name)?;
        log::debug!("team added ({} total)", self.state.teams.len());
        Ok(())
    }

    /// Remove the team at `index`; out of range is ignored.
    pub fn remove_team(&mut self, index: usize) -> Option<String> {
        let removed = self.state.teams.remove(index);
        if removed.is_none() {
            log::debug!("remove_team: index {} out of range", index);
        }
        removed
    }

    /// Choose the format used by the next `generate`.
    pub fn set_format(&mut self, format: TournamentFormat) {
        self.state.format = format;
    }

    pub fn set_match_duration(&mut self, duration: MatchDuration) {
        self.state.match_duration = duration;
    }

    /// Free-text rules carried along for display.
    pub fn set_rules(&mut self, rules: impl Into<String>) {
        self.state.rules = rules.into().trim().to_string();
    }

    /// Draw teams and build the schedule using the thread-local RNG.
    pub fn generate(&mut self) -> Result<(), TournamentError> {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Draw teams and build the schedule.
    ///
    /// Validation (no players, then no teams, then fewer players than teams) runs before
    /// anything is touched, so a failed call leaves the previous generation in place.
    pub fn generate_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), TournamentError> {
        let players = self.state.players.len();
        let teams = self.state.teams.len();
        if players == 0 {
            return Err(TournamentError::NoPlayers);
        }
        if teams == 0 {
            return Err(TournamentError::NoTeams);
        }
        if players < teams {
            return Err(TournamentError::InsufficientPlayers { players, teams });
        }

        let drawn = shuffled(self.state.players.as_slice(), rng);
        let assignment = allocate(&drawn, self.state.teams.as_slice());
        let schedule = build_schedule(self.state.format, &assignment.team_names(), rng);

        log::info!(
            "generated {} tournament: {} players, {} teams, {} matches",
            self.state.format,
            players,
            teams,
            schedule.matches.len()
        );

        self.state.assignment = Some(assignment);
        self.state.matches.replace(schedule.matches);
        self.state.byes = schedule.byes;
        self.state.groups = schedule.groups;
        self.state.generated_at = Some(Utc::now());
        Ok(())
    }

    /// Record the score of one match. Unknown ids (including before any generation) are ignored.
    ///
    /// Returns whether a match was updated.
    pub fn record_result(&mut self, match_id: MatchId, home_score: i64, away_score: i64) -> bool {
        let updated = self
            .state
            .matches
            .record_result(match_id, home_score, away_score);
        if !updated {
            log::debug!("record_result: no match with id {}", match_id);
        }
        updated
    }

    /// Forget everything and return to the empty phase.
    pub fn reset(&mut self) {
        self.state = TournamentState::new();
        log::debug!("session reset");
    }
}
