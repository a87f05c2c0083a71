use gol_board::Board;
use gol_desktop::{Config, SaveDir, SaveError};
use std::fs;

fn sample_board() -> Board {
    let mut board = Board::new(6, 4).unwrap();
    for (row, col) in [(1, 1), (2, 3), (4, 6)] {
        board.toggle(row, col).unwrap();
    }
    board
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let saves = SaveDir::open(dir.path().join("saves")).unwrap();
    let board = sample_board();

    let path = saves.save(&board, "first_try", false).unwrap();
    assert_eq!(path, dir.path().join("saves").join("first_try.txt"));
    assert!(saves.exists("first_try"));
    assert_eq!(saves.load("first_try").unwrap(), board);
}

#[test]
fn test_refuses_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let saves = SaveDir::open(dir.path()).unwrap();
    let board = sample_board();
    saves.save(&board, "board", false).unwrap();

    let empty = Board::new(6, 4).unwrap();
    assert!(matches!(
        saves.save(&empty, "board", false),
        Err(SaveError::AlreadyExists(name)) if name == "board"
    ));
    assert_eq!(saves.load("board").unwrap(), board);

    saves.save(&empty, "board", true).unwrap();
    assert_eq!(saves.load("board").unwrap(), empty);
}

#[test]
fn test_rejects_bad_names() {
    let dir = tempfile::tempdir().unwrap();
    let saves = SaveDir::open(dir.path()).unwrap();
    let board = sample_board();
    for name in ["", "../escape", "with space", "dot.txt", "sub/dir"] {
        assert!(
            matches!(
                saves.save(&board, name, false),
                Err(SaveError::InvalidName(_))
            ),
            "{:?} accepted",
            name
        );
    }
    assert!(!saves.exists("../escape"));
}

#[test]
fn test_list_is_sorted_and_filtered() {
    let dir = tempfile::tempdir().unwrap();
    let saves = SaveDir::open(dir.path()).unwrap();
    let board = sample_board();
    for name in ["zeta", "alpha", "mid-1"] {
        saves.save(&board, name, false).unwrap();
    }
    fs::write(dir.path().join("notes.md"), "not a save").unwrap();
    fs::create_dir(dir.path().join("nested.txt")).unwrap();

    assert_eq!(saves.list().unwrap(), vec!["alpha", "mid-1", "zeta"]);
}

#[test]
fn test_load_reports_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let saves = SaveDir::open(dir.path()).unwrap();
    fs::write(dir.path().join("broken.txt"), "1.0\n3 3\n0 0 0\n0 0 0\n0 0 0\n").unwrap();
    assert!(matches!(
        saves.load("broken"),
        Err(SaveError::Snapshot(_))
    ));
    assert!(matches!(saves.load("missing"), Err(SaveError::Snapshot(_))));
}

fn write_blank_snapshot(path: &std::path::Path, width: usize, height: usize) {
    let row = vec!["0"; width + 2].join(" ");
    let mut data = format!("0.1\n{} {}\n", width + 2, height + 2);
    for _ in 0..height + 2 {
        data.push_str(&row);
        data.push('\n');
    }
    fs::write(path, data).unwrap();
}

#[test]
fn test_load_rejects_oversized_board() {
    let dir = tempfile::tempdir().unwrap();
    let saves = SaveDir::open(dir.path()).unwrap();
    let max = Config::MAX_BOARD_SIDE;

    write_blank_snapshot(&dir.path().join("wide.txt"), max + 1, 1);
    assert!(matches!(
        saves.load("wide"),
        Err(SaveError::TooLarge { width, height: 1, .. }) if width == max + 1
    ));

    let tall = dir.path().join("tall.txt");
    write_blank_snapshot(&tall, 1, max + 1);
    assert!(matches!(
        SaveDir::load_file(&tall),
        Err(SaveError::TooLarge { width: 1, height, .. }) if height == max + 1
    ));

    write_blank_snapshot(&dir.path().join("limit.txt"), max, 1);
    let board = saves.load("limit").unwrap();
    assert_eq!((board.width(), board.height()), (max, 1));
}
