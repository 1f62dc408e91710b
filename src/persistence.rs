//! Saving and restoring a session through a string key-value store.

use crate::models::TournamentState;
use crate::session::TournamentSession;
use std::collections::HashMap;

/// Key under which the serialized tournament state is stored.
pub const STATE_KEY: &str = "tournament_state";

/// Minimal string key-value storage (browser local storage, a server-side map, ...).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Write the session's state as JSON under `STATE_KEY`.
pub fn save<S: KeyValueStore + ?Sized>(
    session: &TournamentSession,
    store: &mut S,
) -> Result<(), serde_json::Error> {
    let json = serde_json::to_string(session.state())?;
    store.set(STATE_KEY, json);
    Ok(())
}

/// Restore a session from `store`.
///
/// Missing or unreadable data (bad JSON, duplicate names, inconsistent matches) yields an empty session.
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> TournamentSession {
    let Some(raw) = store.get(STATE_KEY) else {
        return TournamentSession::new();
    };
    match serde_json::from_str::<TournamentState>(&raw) {
        Ok(state) => TournamentSession::from_state(state),
        Err(e) => {
            log::warn!("Ignoring stored tournament state: {}", e);
            TournamentSession::new()
        }
    }
}
