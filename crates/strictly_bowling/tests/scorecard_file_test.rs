//! Tests for loading scorecards and sheet styles from TOML files.

use std::fs;
use tempfile::TempDir;

use strictly_bowling::{Frame, Scorecard, ScoringErrorKind, SheetStyle};

/// Writes `content` to `filename` inside the temp dir and returns its path.
fn write_toml(dir: &TempDir, filename: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(filename);
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

const MORGAN: &str = r#"
[bowler]
first_name = "Joe"
last_name = "Morgan"

[[frames]]
first_ball = 8
second_ball = 1

[[frames]]
first_ball = 8
second_ball = 2
split = true

[[frames]]
first_ball = 10
"#;

#[test]
fn test_load_scorecard() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_toml(&dir, "morgan.toml", MORGAN);

    let card = Scorecard::from_file(&path).expect("Load failed");
    assert_eq!(card.bowler().display_name(), "Joe Morgan");
    assert_eq!(card.frames().len(), 3);
    assert_eq!(card.frames()[1], Frame::new(8, 2).with_split(true));
    assert_eq!(card.frames()[2], Frame::strike());
}

#[test]
fn test_scorecard_into_engine() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_toml(&dir, "morgan.toml", MORGAN);

    let engine = Scorecard::from_file(&path)
        .expect("Load failed")
        .into_engine()
        .expect("Valid frames");

    assert_eq!(engine.game().score(), 39);
    assert_eq!(engine.frame_count(), 3);
    assert_eq!(engine.bowler().display_name(), "Joe Morgan");
}

#[test]
fn test_scorecard_without_frames() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_toml(&dir, "empty.toml", "[bowler]\nlast_name = \"Estep\"\n");

    let card = Scorecard::from_file(&path).expect("Load failed");
    assert!(card.frames().is_empty());

    let engine = card.into_engine().expect("Nothing to reject");
    assert_eq!(engine.game().score(), 0);
    assert_eq!(engine.bowler().display_name(), "Estep");
}

#[test]
fn test_scorecard_with_illegal_frame() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_toml(
        &dir,
        "bad_ball.toml",
        r#"
[[frames]]
first_ball = 8
second_ball = 1

[[frames]]
first_ball = 12
"#,
    );

    let card = Scorecard::from_file(&path).expect("Load succeeds; balls are checked by the engine");
    let err = card.into_engine().unwrap_err();
    assert_eq!(err.kind, ScoringErrorKind::InvalidFirstBall(12));
}

#[test]
fn test_scorecard_with_out_of_range_score_field() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_toml(
        &dir,
        "bad_score.toml",
        r#"
[[frames]]
first_ball = 3
second_ball = 4
score = 450
"#,
    );

    let err = Scorecard::from_file(&path)
        .expect("Load failed")
        .into_engine()
        .unwrap_err();
    assert_eq!(err.kind, ScoringErrorKind::InvalidScore(450));
}

#[test]
fn test_scorecard_invalid_toml_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_toml(&dir, "bad.toml", "this is not valid toml !!!@@@");

    let err = Scorecard::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse scorecard"));
}

#[test]
fn test_scorecard_negative_ball_fails_to_parse() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_toml(&dir, "negative.toml", "[[frames]]\nfirst_ball = -1\n");

    assert!(Scorecard::from_file(&path).is_err());
}

#[test]
fn test_scorecard_nonexistent_file_fails() {
    let err = Scorecard::from_file("/this/path/does/not/exist.toml").unwrap_err();
    assert!(err.message.contains("Failed to read scorecard file"));
    assert!(err.file.ends_with("config.rs"), "{}", err.file);
    assert!(err.line > 0);
    assert!(err.to_string().starts_with("Config error: Failed to read scorecard file"));
}

#[test]
fn test_style_defaults_when_keys_missing() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_toml(&dir, "style.toml", "name_width = 30\n");

    let style = SheetStyle::from_file(&path).expect("Load failed");
    assert_eq!(style.name_width(), 30);
    assert_eq!(style.strike_mark(), 'X');
    assert_eq!(style.spare_mark(), '/');
    assert_eq!(style.gutter_mark(), '-');
    assert_eq!(style.split_mark(), 'S');
    assert_eq!(style, SheetStyle::default().with_name_width(30));
}

#[test]
fn test_style_nonexistent_file_fails() {
    assert!(SheetStyle::from_file("/this/path/does/not/exist.toml").is_err());
}
