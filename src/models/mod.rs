//! Data structures for the organizer: rosters, assignment, matches, tournament state.

mod assignment;
mod game;
mod match_store;
mod roster;
mod tournament;

pub use assignment::{Assignment, TeamSquad};
pub use game::{Bye, GameMatch, Group, MatchId, Slot};
pub use match_store::{coerce_score, InvalidMatchList, MatchStore};
pub use roster::{PlayerName, Roster, TeamName};
pub use tournament::{
    MatchDuration, SessionPhase, TournamentError, TournamentFormat, TournamentId, TournamentState,
    UnknownFormat,
};
