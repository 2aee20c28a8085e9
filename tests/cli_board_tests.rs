//! End-to-end tests for `batchflow board` and `batchflow column` commands.

mod fixtures;
use fixtures::*;

#[test]
fn test_board_shows_default_titles_on_first_run() {
    let env = TestEnv::new();

    let board = env.run_json(&["board", "--json"]);
    let columns = board["columns"].as_array().unwrap();
    assert_eq!(columns.len(), 4);

    let titles: Vec<&str> = columns
        .iter()
        .map(|c| c["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Rotation", "On Deck", "Fermenting", "Finishing"]);
    assert!(columns.iter().all(|c| c["collapsed"] == false));
}

#[test]
fn test_board_resolves_card_fields_and_source() {
    let env = TestEnv::new();
    env.write_local_catalog(
        r#"[{"id": "b1", "name": "Alt", "bjcp": "7B", "abv": 4.8, "ibu": "35"}]"#,
    );
    env.run_ok(&["batch", "add", "Alt", "--to", "rotation"]);

    let board = env.run_json(&["board", "--json"]);
    let card = &board["columns"][0]["cards"][0];
    assert_eq!(card["name"], "Alt");
    assert_eq!(card["style"], "7B");
    assert_eq!(card["abv"], "4.8");
    assert_eq!(card["ibu"], "35");
    assert_eq!(card["source"], "local");
    assert_eq!(card["known"], true);
}

#[test]
fn test_board_human_output_marks_empty_columns() {
    let env = TestEnv::new();

    let stdout = env.run_ok(&["board"]);
    assert!(stdout.contains("Rotation (rotation)"));
    assert!(stdout.contains("(empty)"));
}

#[test]
fn test_column_rename_persists_and_truncates() {
    let env = TestEnv::new();

    env.run_ok(&["column", "rename", "deck", "Next Up"]);
    let board = env.run_json(&["board", "--json"]);
    assert_eq!(board["columns"][1]["title"], "Next Up");

    // Over-long titles are cut to 24 characters.
    env.run_ok(&[
        "column",
        "rename",
        "deck",
        "An Extremely Long Column Title",
    ]);
    let board = env.run_json(&["board", "--json"]);
    let title = board["columns"][1]["title"].as_str().unwrap();
    assert_eq!(title.chars().count(), 24);
}

#[test]
fn test_column_rename_rejects_empty_title() {
    let env = TestEnv::new();
    let output = env.run(&["column", "rename", "deck", "   "]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_column_collapse_and_expand_round_trip() {
    let env = TestEnv::new();

    env.run_ok(&["column", "collapse", "fermenting"]);
    let board = env.run_json(&["board", "--json"]);
    assert_eq!(board["columns"][2]["collapsed"], true);

    env.run_ok(&["column", "expand", "fermenting"]);
    let board = env.run_json(&["board", "--json"]);
    assert_eq!(board["columns"][2]["collapsed"], false);
}

#[test]
fn test_malformed_settings_file_yields_defaults() {
    let env = TestEnv::new();
    std::fs::write(env.settings_file(), "{{{{ not json").unwrap();

    let board = env.run_json(&["board", "--json"]);
    assert_eq!(board["columns"][0]["title"], "Rotation");
    assert!(board["columns"][0]["cards"].as_array().unwrap().is_empty());
}
