//! CSV export of the match schedule.

use crate::models::GameMatch;
use csv::Writer;
use serde::Serialize;
use std::io;

#[derive(Serialize)]
struct ScheduleRow<'a> {
    id: usize,
    round: Option<u32>,
    group: Option<&'a str>,
    home: &'a str,
    away: &'a str,
    home_score: u32,
    away_score: u32,
    played: bool,
}

/// One header row, then one row per match in id order.
pub fn schedule_to_csv(matches: &[GameMatch]) -> Result<String, csv::Error> {
    let mut wtr = Writer::from_writer(Vec::new());
    for m in matches {
        wtr.serialize(ScheduleRow {
            id: m.id,
            round: m.round,
            group: m.group.as_deref(),
            home: m.home.as_str(),
            away: m.away.as_str(),
            home_score: m.home_score,
            away_score: m.away_score,
            played: m.played,
        })?;
    }
    if matches.is_empty() {
        wtr.write_record([
            "id", "round", "group", "home", "away", "home_score", "away_score", "played",
        ])?;
    }
    let bytes = wtr.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| csv::Error::from(io::Error::new(io::ErrorKind::InvalidData, e)))
}
