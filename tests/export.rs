//! Integration tests for CSV schedule export.

use team_draw_web::{groups_from_seeding, knockout_from_seeding, schedule_to_csv, MatchStore};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn empty_schedule_has_header_only() {
    let csv = schedule_to_csv(&[]).unwrap();
    assert_eq!(csv, "id,round,group,home,away,home_score,away_score,played\n");
}

#[test]
fn knockout_rows_carry_round_and_scores() {
    let bracket = knockout_from_seeding(&names(&["X", "Y", "Z"]));
    let mut store = MatchStore::new();
    store.replace(bracket.matches);
    store.record_result(0, 3, 2);

    let csv = schedule_to_csv(store.as_slice()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "id,round,group,home,away,home_score,away_score,played");
    assert_eq!(lines[1], "0,1,,X,Y,3,2,true");
    assert_eq!(lines[2], "1,2,,Winner of (X vs Y),Z,0,0,false");
    assert_eq!(lines.len(), 3);
}

#[test]
fn group_rows_carry_label() {
    let (_, matches) = groups_from_seeding(&names(&["A", "B", "C"]));
    let csv = schedule_to_csv(&matches).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[1], "0,,A,A,B,0,0,false");
    assert_eq!(lines.len(), 2);
}
