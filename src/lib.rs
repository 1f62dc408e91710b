//! Team draw web app: library with models, scheduling logic and session orchestration.

pub mod config;
pub mod export;
pub mod logic;
pub mod models;
pub mod persistence;
pub mod session;

pub use config::ServerConfig;
pub use export::schedule_to_csv;
pub use logic::{
    allocate, build_schedule, generate_schedule, groups_from_seeding, knockout_from_seeding,
    round_robin, shuffled, Bracket, Schedule,
};
pub use models::{
    coerce_score, Assignment, Bye, GameMatch, Group, MatchDuration, MatchId, MatchStore,
    PlayerName, Roster, SessionPhase, Slot, TeamName, TeamSquad, TournamentError, TournamentFormat,
    TournamentId, TournamentState,
};
pub use persistence::{KeyValueStore, MemoryStore, STATE_KEY};
pub use session::TournamentSession;
