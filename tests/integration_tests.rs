//! Integration tests - whole games driven through the public tick API

use blockfall::core::{self, ActivePiece, Board, GameState, TickReport};
use blockfall::types::{InputSnapshot, KeyState, PieceKind, BOARD_WIDTH};

const SEED: u32 = 0xB10C_FA11;

fn soft_drop(state: KeyState) -> InputSnapshot {
    InputSnapshot {
        soft_drop: state,
        ..InputSnapshot::IDLE
    }
}

fn left(state: KeyState) -> InputSnapshot {
    InputSnapshot {
        left: state,
        ..InputSnapshot::IDLE
    }
}

/// Tap soft drop every other tick until a deposit; returns that tick's report
fn drop_until_deposit(game: &mut GameState) -> TickReport {
    for tick in 0..400 {
        let input = if tick % 2 == 0 {
            soft_drop(KeyState::Pressed)
        } else {
            InputSnapshot::IDLE
        };
        let report = game.advance(&input);
        if report.deposited.is_some() || report.game_over {
            return report;
        }
    }
    panic!("piece never locked");
}

/// Two bottom rows with a 2-wide hole under the O spawn columns
fn o_hole_board() -> Board {
    Board::from_rows(&["JJJJ..LLLL", "ZZZZ..SSSS"])
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameState::new(3, SEED);
    let mut b = GameState::new(3, SEED);

    for tick in 0..600u32 {
        let input = match tick % 7 {
            0 => left(KeyState::Pressed),
            3 => soft_drop(KeyState::Pressed),
            5 => InputSnapshot {
                rotate: KeyState::Pressed,
                ..InputSnapshot::IDLE
            },
            _ => InputSnapshot::IDLE,
        };
        assert_eq!(a.advance(&input), b.advance(&input), "tick {tick}");
        assert_eq!(a.describe(), b.describe(), "tick {tick}");
    }
}

#[test]
fn test_idle_game_runs_until_game_over() {
    let mut game = GameState::new(0, SEED);
    let mut ticks = 0u32;
    while !core::advance(&mut game, &InputSnapshot::IDLE) {
        ticks += 1;
        assert!(ticks < 100_000, "game never ended");
    }

    let snapshot = game.describe();
    assert!(snapshot.game_over);
    assert!(!snapshot.playable());
    assert!(snapshot.pieces_spawned > 1);
}

#[test]
fn test_prefilled_spawn_area_ends_game() {
    let mut game = GameState::new(0, SEED);
    // Fill the top four rows except column 0 so nothing clears.
    for y in 0..4 {
        for x in 1..BOARD_WIDTH as i8 {
            game.board_mut().set(x, y, Some(PieceKind::I));
        }
    }

    let report = game.advance(&InputSnapshot::IDLE);
    assert!(report.game_over);
    assert!(game.is_game_over());

    // Further ticks are inert.
    let frozen = game.describe();
    let report = game.advance(&soft_drop(KeyState::Pressed));
    assert!(report.game_over);
    assert_eq!(game.describe(), frozen);
}

#[test]
fn test_occupancy_tracks_deposits_and_clears() {
    let mut game = GameState::from_board(o_hole_board(), 0, SEED);
    game.set_active(ActivePiece::spawn(PieceKind::O));
    let before = game.board().occupied_count();
    assert_eq!(before, 16);

    let report = drop_until_deposit(&mut game);
    assert_eq!(report.deposited, Some(PieceKind::O));
    assert_eq!(report.rows_cleared, 2);
    assert_eq!(report.points, 100);

    let after = game.board().occupied_count();
    assert_eq!(after, before + 4 - 2 * BOARD_WIDTH as usize);
    assert_eq!(after, 0);
    assert_eq!(game.score(), 100);
    assert_eq!(game.progress().total_lines, 2);
}

#[test]
fn test_deposits_without_clears_add_four_cells() {
    let mut game = GameState::new(0, SEED);
    // Four pieces stack at most sixteen rows, so every block lands on the grid.
    for _ in 0..4 {
        let before = game.board().occupied_count();
        let report = drop_until_deposit(&mut game);
        assert!(report.deposited.is_some());
        let expected = before + 4 - usize::from(report.rows_cleared) * BOARD_WIDTH as usize;
        assert_eq!(game.board().occupied_count(), expected);
    }
    assert_eq!(game.pieces_spawned(), 5);
}

#[test]
fn test_level_progression_from_zero() {
    let mut game = GameState::new(0, SEED);
    assert_eq!(game.progress().threshold, 10);

    // Five double clears: 10 lines at level 0.
    for round in 0..5 {
        assert_eq!(game.board().occupied_count(), 0);
        *game.board_mut() = o_hole_board();
        game.set_active(ActivePiece::spawn(PieceKind::O));

        let report = drop_until_deposit(&mut game);
        assert_eq!(report.rows_cleared, 2, "round {round}");
        assert_eq!(report.points, 100, "round {round}");
        assert_eq!(report.leveled_up, round == 4, "round {round}");
    }

    assert_eq!(game.level(), 1);
    assert_eq!(game.score(), 500);
    assert_eq!(game.progress().lines_at_level, 0);
    assert_eq!(game.progress().threshold, 10);
    assert_eq!(game.progress().total_lines, 10);
    assert_eq!(game.descent_interval(), 48);
}

#[test]
fn test_higher_start_level_needs_more_lines() {
    let mut game = GameState::new(2, SEED);
    assert_eq!(game.progress().threshold, 30);
    assert_eq!(game.descent_interval(), 45);

    *game.board_mut() = o_hole_board();
    game.set_active(ActivePiece::spawn(PieceKind::O));
    let report = drop_until_deposit(&mut game);

    // Points scale with the level in force.
    assert_eq!(report.points, 300);
    assert!(!report.leveled_up);
    assert_eq!(game.level(), 2);
}

#[test]
fn test_held_left_auto_repeats() {
    let mut game = GameState::new(0, SEED);
    game.set_active(ActivePiece::spawn(PieceKind::O));

    // Fresh press moves once.
    assert!(game.advance(&left(KeyState::Pressed)).moved);
    assert_eq!(game.active().x(), 3);

    // Nothing more until the twentieth held frame.
    for _ in 0..19 {
        assert!(!game.advance(&left(KeyState::Held)).moved);
    }
    assert_eq!(game.active().x(), 3);
    assert!(game.advance(&left(KeyState::Held)).moved);
    assert_eq!(game.active().x(), 2);

    // Then every third frame.
    let mut xs = Vec::new();
    for _ in 0..9 {
        game.advance(&left(KeyState::Held));
        xs.push(game.active().x());
    }
    assert_eq!(xs, vec![2, 2, 1, 1, 1, 0, 0, 0, 0]);
}

#[test]
fn test_releasing_resets_auto_repeat() {
    let mut game = GameState::new(0, SEED);
    game.set_active(ActivePiece::spawn(PieceKind::O));

    game.advance(&left(KeyState::Pressed));
    for _ in 0..15 {
        game.advance(&left(KeyState::Held));
    }
    game.advance(&InputSnapshot::IDLE);
    assert_eq!(game.describe().das.left.frames_held, 0);

    game.advance(&left(KeyState::Pressed));
    for _ in 0..15 {
        game.advance(&left(KeyState::Held));
    }
    // Two presses, no repeat.
    assert_eq!(game.active().x(), 2);
}

#[test]
fn test_restart_keeps_settings_and_is_reproducible() {
    let mut game = GameState::new(5, SEED);
    for _ in 0..50 {
        game.advance(&soft_drop(KeyState::Pressed));
    }

    let a = game.restart();
    let b = game.restart();
    assert_eq!(a.start_level(), 5);
    assert_eq!(a.frame(), 1);
    assert_eq!(a.score(), 0);
    assert_eq!(a.seed(), b.seed());
    assert_eq!(a.describe(), b.describe());
}

#[test]
fn test_snapshot_cell_matches_board() {
    let game = GameState::from_board(Board::from_rows(&["T........S"]), 0, SEED);
    let snapshot = core::describe(&game);
    assert_eq!(snapshot.cell(0, 19), Some(PieceKind::T));
    assert_eq!(snapshot.cell(9, 19), Some(PieceKind::S));
    assert_eq!(snapshot.cell(5, 19), None);
    assert_eq!(snapshot.cell(-1, 19), None);
    assert_eq!(snapshot.cell(0, 20), None);
}
