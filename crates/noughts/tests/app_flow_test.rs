//! End-to-end tests for game actions and the event log.

use noughts::{App, AppConfig, SaveFile};
use noughts_board::{GameStatus, Player, Position};
use noughts_log::{Category, EventLog, LogEntry};
use tempfile::TempDir;

fn app_in(dir: &TempDir) -> App {
    let mut app = App::with_log(
        EventLog::default(),
        SaveFile::new(dir.path().join("save.txt")),
    );
    app.start_up();
    app
}

fn count(app: &App, category: Category) -> usize {
    app.log()
        .entries()
        .filter(|e| *e.category() == category)
        .count()
}

fn last(app: &App) -> &LogEntry {
    app.log().entries().last().expect("log has entries")
}

#[test]
fn test_save_then_load_restores_board_and_turn() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(&dir);
    app.play(Position::TopLeft);
    app.play(Position::Center);
    app.play(Position::BottomRight);
    app.save();
    let saved = app.game().clone();
    assert_eq!(
        std::fs::read_to_string(dir.path().join("save.txt")).unwrap(),
        "1000200012"
    );

    app.reset();
    assert_eq!(app.game().board().occupied(), 0);

    app.load();
    assert_eq!(app.game().board(), saved.board());
    assert_eq!(app.game().current_player(), Player::Two);
    assert_eq!(*last(&app).category(), Category::Info);
    assert!(last(&app).message().ends_with("1000200012"));
}

#[test]
fn test_wrong_length_load_is_rejected_with_one_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("save.txt"), "10002").unwrap();
    let mut app = app_in(&dir);
    app.play(Position::Center);
    let before = app.game().clone();
    let entries = app.log().len();

    app.load();

    assert_eq!(app.game(), &before);
    assert_eq!(app.game().current_player(), Player::Two);
    assert_eq!(app.log().len(), entries + 1);
    assert_eq!(count(&app, Category::Error), 1);
    assert_eq!(*last(&app).category(), Category::Error);
}

#[test]
fn test_missing_save_file_records_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(&dir);
    app.load();
    assert_eq!(count(&app, Category::Error), 1);
    assert_eq!(last(&app).message(), "Save file not found.");
}

#[test]
fn test_unwritable_save_file_records_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::with_log(
        EventLog::default(),
        SaveFile::new(dir.path().join("no_such_dir").join("save.txt")),
    );
    app.start_up();
    app.save();
    assert_eq!(count(&app, Category::Error), 1);
    assert!(last(&app).message().starts_with("Could not save game state: "));
}

#[test]
fn test_win_is_announced_and_freezes_actions() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(&dir);
    for pos in [
        Position::TopLeft,
        Position::TopCenter,
        Position::Center,
        Position::MiddleLeft,
        Position::BottomRight,
    ] {
        assert!(app.play(pos));
    }

    assert_eq!(app.game().status(), GameStatus::Won(Player::One));
    assert_eq!(last(&app).message(), "Player 1 wins!");
    assert_eq!(*last(&app).category(), Category::GameEvent);

    // Moves, save, load and reset are unavailable until a new game starts.
    let entries = app.log().len();
    assert!(!app.play(Position::BottomLeft));
    app.save();
    app.load();
    app.reset();
    assert_eq!(app.log().len(), entries);
    assert!(!dir.path().join("save.txt").exists());

    app.new_game();
    assert_eq!(app.game().status(), GameStatus::InProgress);
    assert_eq!(app.game().current_player(), Player::One);
    assert_eq!(last(&app).message(), "New game started.");
}

#[test]
fn test_draw_is_announced() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(&dir);
    for idx in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        assert!(app.play(Position::from_index(idx).unwrap()));
    }
    assert_eq!(app.game().status(), GameStatus::Draw);
    assert_eq!(last(&app).message(), "Game ended in a draw.");
}

#[test]
fn test_events_reach_the_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let config: AppConfig = toml::from_str(&format!(
        "log_file = {:?}\nsave_file = {:?}\n",
        dir.path().join("log.txt"),
        dir.path().join("save.txt"),
    ))
    .unwrap();

    {
        let mut app = App::new(&config);
        app.start_up();
        app.play(Position::Center);
        app.clear_log();
        assert!(app.log().is_empty());
    }

    let text = std::fs::read_to_string(dir.path().join("log.txt")).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[info]: Game started."));
    assert!(lines[1].ends_with("[game event]: Player 1 (X) played Center"));
}
