//! Schedule generation: round robin, knockout bracket preview, group stage.

use crate::logic::shuffle::shuffled;
use crate::models::{Bye, GameMatch, Group, Slot, TeamName, TournamentFormat};
use rand::Rng;

/// Largest pool in the group stage.
pub const MAX_GROUP_SIZE: usize = 4;

/// Everything one generation produces for the chosen format.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Schedule {
    pub matches: Vec<GameMatch>,
    /// Knockout only.
    pub byes: Vec<Bye>,
    /// Groups only.
    pub groups: Vec<Group>,
}

/// Knockout bracket built from a fixed seeding.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Bracket {
    pub matches: Vec<GameMatch>,
    pub byes: Vec<Bye>,
    /// Last team or placeholder standing (the final's winner slot).
    pub survivor: Option<Slot>,
    /// Number of rounds played to reach the survivor.
    pub rounds: u32,
}

/// Build the schedule for `format`. Fewer than two teams produces an empty schedule.
///
/// Knockout and Groups reseed the teams with their own shuffle.
pub fn build_schedule<R: Rng + ?Sized>(
    format: TournamentFormat,
    teams: &[TeamName],
    rng: &mut R,
) -> Schedule {
    if teams.len() < 2 {
        return Schedule::default();
    }
    match format {
        TournamentFormat::RoundRobin => Schedule {
            matches: round_robin(teams),
            ..Schedule::default()
        },
        TournamentFormat::Knockout => {
            let bracket = knockout_from_seeding(&shuffled(teams, rng));
            Schedule {
                matches: bracket.matches,
                byes: bracket.byes,
                groups: Vec::new(),
            }
        }
        TournamentFormat::Groups => {
            let (groups, matches) = groups_from_seeding(&shuffled(teams, rng));
            Schedule {
                matches,
                byes: Vec::new(),
                groups,
            }
        }
    }
}

/// Matches only, for callers that do not render byes or pools.
pub fn generate_schedule<R: Rng + ?Sized>(
    format: TournamentFormat,
    teams: &[TeamName],
    rng: &mut R,
) -> Vec<GameMatch> {
    build_schedule(format, teams, rng).matches
}

/// Every unordered pair once: (0,1), (0,2), ..., (0,n-1), (1,2), ...
pub fn round_robin(teams: &[TeamName]) -> Vec<GameMatch> {
    let mut matches = Vec::with_capacity(teams.len() * teams.len().saturating_sub(1) / 2);
    push_round_robin(teams, None, &mut matches);
    matches
}

fn push_round_robin(teams: &[TeamName], group: Option<&str>, matches: &mut Vec<GameMatch>) {
    for (i, home) in teams.iter().enumerate() {
        for away in &teams[i + 1..] {
            let mut m = GameMatch::new(matches.len(), home.as_str(), away.as_str());
            if let Some(label) = group {
                m = m.in_group(label);
            }
            matches.push(m);
        }
    }
}

/// Single elimination preview from a fixed seeding.
///
/// Each round pairs neighbours (0 with 1, 2 with 3, ...). An odd team out gets a bye. Winners are
/// not resolved from scores; a `Slot::WinnerOf` placeholder moves on instead, so even a team
/// literally named "Winner of (A vs B)" is never paired with itself.
pub fn knockout_from_seeding(seeded: &[TeamName]) -> Bracket {
    let mut bracket = Bracket::default();
    let mut current: Vec<Slot> = seeded.iter().cloned().map(Slot::Team).collect();
    let mut round = 1;

    while current.len() > 1 {
        let mut next = Vec::with_capacity(current.len().div_ceil(2));
        for pair in current.chunks(2) {
            match pair {
                [home, away] => {
                    let m = GameMatch::new(bracket.matches.len(), home.clone(), away.clone())
                        .in_round(round);
                    next.push(Slot::winner_of(&m));
                    bracket.matches.push(m);
                }
                [lone] => {
                    bracket.byes.push(Bye {
                        round,
                        team: lone.clone(),
                    });
                    next.push(lone.clone());
                }
                _ => {}
            }
        }
        log::trace!("knockout round {}: {} advance", round, next.len());
        current = next;
        bracket.rounds = round;
        round += 1;
    }

    bracket.survivor = current.pop();
    bracket
}

/// Teams per pool: `min(4, ceil(n / 2))`.
pub fn group_size(team_count: usize) -> usize {
    MAX_GROUP_SIZE.min(team_count.div_ceil(2))
}

/// Number of pools: `ceil(n / group_size)`.
pub fn group_count(team_count: usize) -> usize {
    match group_size(team_count) {
        0 => 0,
        size => team_count.div_ceil(size),
    }
}

/// Split a fixed seeding into labelled pools and schedule a round robin inside each.
///
/// Pools are contiguous slices of the seeding, balanced so sizes differ by at most one
/// (the first `n % count` pools take the extra team). Match ids run across all pools in label order.
/// This intentionally differs from fixed-size chunking for n >= 9: 9 teams give 3/3/3, not 4/4/1.
pub fn groups_from_seeding(seeded: &[TeamName]) -> (Vec<Group>, Vec<GameMatch>) {
    let count = group_count(seeded.len());
    let mut groups = Vec::with_capacity(count);
    let mut matches = Vec::new();
    if count == 0 {
        return (groups, matches);
    }

    let base = seeded.len() / count;
    let extra = seeded.len() % count;
    let mut start = 0;
    for g in 0..count {
        let len = base + usize::from(g < extra);
        let teams = &seeded[start..start + len];
        start += len;

        let label = group_label(g);
        push_round_robin(teams, Some(label.as_str()), &mut matches);
        groups.push(Group {
            label,
            teams: teams.to_vec(),
        });
    }
    (groups, matches)
}

/// "A".."Z", then "AA", "AB", ...
fn group_label(index: usize) -> String {
    let mut chars = Vec::new();
    let mut n = index;
    loop {
        chars.push(char::from(b'A' + (n % 26) as u8));
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    chars.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_labels_follow_spreadsheet_columns() {
        assert_eq!(group_label(0), "A");
        assert_eq!(group_label(2), "C");
        assert_eq!(group_label(25), "Z");
        assert_eq!(group_label(26), "AA");
        assert_eq!(group_label(27), "AB");
        assert_eq!(group_label(52), "BA");
    }

    #[test]
    fn group_size_is_capped_at_four() {
        assert_eq!(group_size(2), 1);
        assert_eq!(group_size(3), 2);
        assert_eq!(group_size(6), 3);
        assert_eq!(group_size(8), 4);
        assert_eq!(group_size(20), 4);
        assert_eq!(group_count(9), 3);
        assert_eq!(group_count(20), 5);
    }
}
