//! Roster: an ordered list of unique display names (used for both players and teams).

use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};

/// Display name of a player.
pub type PlayerName = String;

/// Display name of a team.
pub type TeamName = String;

/// Ordered list of names, unique by case-sensitive exact match.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a name. The name is trimmed first; empty or already present names are rejected.
    pub fn add(&mut self, name: impl Into<String>) -> Result<(), TournamentError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        if self.contains(trimmed) {
            return Err(TournamentError::DuplicateName(trimmed.to_string()));
        }
        self.names.push(trimmed.to_string());
        Ok(())
    }

    /// Remove the name at `index`. Out of range is a no-op and returns `None`.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.names.len() {
            Some(self.names.remove(index))
        } else {
            None
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }
}

impl TryFrom<Vec<String>> for Roster {
    type Error = TournamentError;

    /// Rebuild from stored names, rejecting duplicates so a tampered snapshot cannot break uniqueness.
    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        let mut roster = Roster::new();
        for name in names {
            roster.add(name)?;
        }
        Ok(roster)
    }
}

impl From<Roster> for Vec<String> {
    fn from(roster: Roster) -> Self {
        roster.names
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}
