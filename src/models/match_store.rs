//! MatchStore: the current generation's matches and score recording.

use crate::models::game::{GameMatch, MatchId, Slot};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Matches of one generation, indexed by `MatchId`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<GameMatch>", into = "Vec<GameMatch>")]
pub struct MatchStore {
    matches: Vec<GameMatch>,
}

impl MatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the previous list and take `matches` wholesale.
    pub fn replace(&mut self, matches: Vec<GameMatch>) {
        self.matches = matches;
    }

    /// Set both scores and mark the match as played.
    ///
    /// Negative scores are stored as 0. Returns `false` (and changes nothing) when `match_id`
    /// is out of range.
    pub fn record_result(&mut self, match_id: MatchId, home_score: i64, away_score: i64) -> bool {
        match self.matches.get_mut(match_id) {
            Some(m) => {
                m.home_score = clamp_score(home_score);
                m.away_score = clamp_score(away_score);
                m.played = true;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, match_id: MatchId) -> Option<&GameMatch> {
        self.matches.get(match_id)
    }

    pub fn as_slice(&self) -> &[GameMatch] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of matches with a recorded result.
    pub fn played_count(&self) -> usize {
        self.matches.iter().filter(|m| m.played).count()
    }

    pub fn clear(&mut self) {
        self.matches.clear();
    }
}

fn clamp_score(score: i64) -> u32 {
    u32::try_from(score.max(0)).unwrap_or(u32::MAX)
}

/// Coerce loosely typed score input (e.g. a form field sent as JSON) to an integer.
///
/// Integers and numeric strings pass through, floats are truncated, anything else is 0.
/// Negative values are left for `MatchStore::record_result` to clamp.
pub fn coerce_score(raw: &Value) -> i64 {
    match raw {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if n.as_u64().is_some() {
                i64::MAX
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
                    .unwrap_or(0)
            }
        }
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f.trunc() as i64)
                })
                .unwrap_or(0)
        }
        _ => 0,
    }
}

/// Error raised when a stored match list violates the match invariants.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InvalidMatchList {
    /// Ids must be 0, 1, 2, ... in list order.
    UnexpectedId { position: usize, id: MatchId },
    /// A match pairs a team against itself.
    SelfMatch(MatchId),
    /// A placeholder refers to a match that is not scheduled before it.
    UnknownWinnerOf { id: MatchId, winner_of: MatchId },
}

impl std::fmt::Display for InvalidMatchList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMatchList::UnexpectedId { position, id } => {
                write!(f, "match at position {} has id {}", position, id)
            }
            InvalidMatchList::SelfMatch(id) => write!(f, "match {} pairs a team with itself", id),
            InvalidMatchList::UnknownWinnerOf { id, winner_of } => write!(
                f,
                "match {} waits on the winner of match {}, which is not scheduled before it",
                id, winner_of
            ),
        }
    }
}

impl std::error::Error for InvalidMatchList {}

impl TryFrom<Vec<GameMatch>> for MatchStore {
    type Error = InvalidMatchList;

    fn try_from(matches: Vec<GameMatch>) -> Result<Self, Self::Error> {
        for (position, m) in matches.iter().enumerate() {
            if m.id != position {
                return Err(InvalidMatchList::UnexpectedId { position, id: m.id });
            }
            if m.home == m.away {
                return Err(InvalidMatchList::SelfMatch(m.id));
            }
            for slot in [&m.home, &m.away] {
                if let Slot::WinnerOf { match_id, .. } = slot {
                    if *match_id >= m.id {
                        return Err(InvalidMatchList::UnknownWinnerOf {
                            id: m.id,
                            winner_of: *match_id,
                        });
                    }
                }
            }
        }
        Ok(Self { matches })
    }
}

impl From<MatchStore> for Vec<GameMatch> {
    fn from(store: MatchStore) -> Self {
        store.matches
    }
}
