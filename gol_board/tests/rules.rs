use gol_board::{count_neighbors, Board, Coord};

const SEED: u64 = 42;

/// Next generation computed straight from the rule, without the engine.
fn reference_step(board: &Board) -> Board {
    let mut next = Board::new(board.width(), board.height()).unwrap();
    for (row, col) in board.interior() {
        let mut neibs = 0;
        for r in row - 1..=row + 1 {
            for c in col - 1..=col + 1 {
                if (r, c) != (row, col) && board.get(r, c).unwrap() {
                    neibs += 1;
                }
            }
        }
        let alive = board.get(row, col).unwrap();
        let state = if alive {
            (2..=3).contains(&neibs)
        } else {
            neibs == 3
        };
        next.set(row, col, state).unwrap();
    }
    next
}

fn assert_border_dead(board: &Board) {
    let (w, h) = (board.padded_width(), board.padded_height());
    for col in 0..w {
        assert!(!board.get(0, col).unwrap(), "top border at {}", col);
        assert!(!board.get(h - 1, col).unwrap(), "bottom border at {}", col);
    }
    for row in 0..h {
        assert!(!board.get(row, 0).unwrap(), "left border at {}", row);
        assert!(!board.get(row, w - 1).unwrap(), "right border at {}", row);
    }
}

#[test]
fn test_matches_reference_rule() {
    for (width, height, fill_rate) in [(1, 1, 0.5), (5, 3, 0.5), (17, 31, 0.3), (64, 48, 0.6)] {
        let mut board = Board::random(width, height, Some(SEED), fill_rate).unwrap();
        for generation in 0..20 {
            let expected = reference_step(&board);
            board.advance().unwrap();
            assert_eq!(
                board, expected,
                "{}x{} board diverged at generation {}",
                width, height, generation
            );
        }
    }
}

#[test]
fn test_change_list_is_exact() {
    let mut board = Board::random(40, 25, Some(SEED), 0.35).unwrap();
    for _ in 0..30 {
        let before = board.clone();
        let changes = board.advance().unwrap();

        let mut flipped: Vec<Coord> = board
            .interior()
            .filter(|&(row, col)| before.get(row, col) != board.get(row, col))
            .collect();
        flipped.sort_unstable();
        let mut reported = changes.clone().into_vec();
        reported.sort_unstable();
        reported.dedup();

        assert_eq!(reported.len(), changes.len(), "duplicate coordinates");
        assert_eq!(reported, flipped);
        for &(row, col) in &changes {
            assert!(board.is_interior(row, col));
        }
    }
}

#[test]
fn test_border_stays_dead() {
    let mut board = Board::random(12, 9, Some(SEED), 1.0).unwrap();
    assert_border_dead(&board);
    for _ in 0..10 {
        board.advance().unwrap();
        assert_border_dead(&board);
    }
    let (w, h) = (board.padded_width(), board.padded_height());
    for col in 0..w {
        assert!(board.toggle(0, col).is_err());
        assert!(board.toggle(h - 1, col).is_err());
    }
    assert_border_dead(&board);
}

#[test]
fn test_birth_survival_death() {
    let mut board = Board::random(30, 30, Some(SEED + 1), 0.4).unwrap();
    let before = board.clone();
    board.advance().unwrap();
    for (row, col) in before.interior() {
        let neibs = count_neighbors(&before, row, col).unwrap();
        let was_alive = before.get(row, col).unwrap();
        let is_alive = board.get(row, col).unwrap();
        match (was_alive, neibs) {
            (false, 3) => assert!(is_alive, "birth at ({}, {})", row, col),
            (false, _) => assert!(!is_alive, "spurious birth at ({}, {})", row, col),
            (true, 2 | 3) => assert!(is_alive, "survival at ({}, {})", row, col),
            (true, _) => assert!(!is_alive, "death at ({}, {})", row, col),
        }
    }
}

#[test]
fn test_stable_board_reports_nothing() {
    // beehive
    let mut board = Board::new(6, 5).unwrap();
    for (row, col) in [(2, 3), (2, 4), (3, 2), (3, 5), (4, 3), (4, 4)] {
        board.toggle(row, col).unwrap();
    }
    let before = board.clone();
    for _ in 0..3 {
        assert!(board.advance().unwrap().is_empty());
    }
    assert_eq!(board, before);
}

#[test]
fn test_glider_translates() {
    let glider = [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)];
    let mut board = Board::new(10, 10).unwrap();
    for (row, col) in glider {
        board.toggle(row, col).unwrap();
    }
    for _ in 0..4 {
        assert!(!board.advance().unwrap().is_empty());
    }
    let alive: Vec<Coord> = board
        .interior()
        .filter(|&(row, col)| board.get(row, col).unwrap())
        .collect();
    let shifted: Vec<Coord> = glider.iter().map(|&(row, col)| (row + 1, col + 1)).collect();
    let mut expected = shifted;
    expected.sort_unstable();
    assert_eq!(alive, expected);
    assert_border_dead(&board);
}
