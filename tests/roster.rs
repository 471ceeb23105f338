//! Integration tests for roster loading and name display formatting.

use campaign_scoreboard_web::{display_name, load_roster};
use std::io::Write;

#[test]
fn loads_entries_from_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.csv");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "player,army,kp").unwrap();
    writeln!(f, "anna,Empire of Dust,3").unwrap();
    writeln!(f, "bert,Northern Alliance,0").unwrap();
    drop(f);

    let roster = load_roster(&path);
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].player, "anna");
    assert_eq!(roster[0].army, "Empire of Dust");
    assert_eq!(roster[0].kp, 3);
}

#[test]
fn missing_file_is_an_empty_roster() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_roster(dir.path().join("nope.csv")).is_empty());
}

#[test]
fn bad_rows_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.csv");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "player,army,kp").unwrap();
    writeln!(f, "anna,Empire,not-a-number").unwrap();
    writeln!(f, "bert,Orcs,2").unwrap();
    drop(f);

    let roster = load_roster(&path);
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].player, "bert");
}

#[test]
fn display_name_capitalizes_each_word() {
    assert_eq!(display_name("anna nowak"), "Anna Nowak");
    assert_eq!(display_name("  bert  "), "Bert");
    assert_eq!(display_name(""), "");
}
