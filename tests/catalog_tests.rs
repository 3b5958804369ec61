//! Piece catalog tests - shapes, per-phase offsets and rotation at spawn

use blockfall::core::{offsets_for_phase, shape_of, try_rotate, ActivePiece, Board, Offsets};
use blockfall::types::PieceKind;

/// Offsets after 0, 1, 2 and 3 rotations from spawn, per kind
fn expected_phases(kind: PieceKind) -> [Offsets; 4] {
    match kind {
        PieceKind::L => [
            [(0, 0), (1, 0), (1, 1), (1, 2)],
            [(0, 1), (0, 0), (1, 0), (2, 0)],
            [(1, 2), (0, 2), (0, 1), (0, 0)],
            [(2, 0), (2, 1), (1, 1), (0, 1)],
        ],
        PieceKind::J => [
            [(0, 0), (1, 0), (0, 1), (0, 2)],
            [(0, 1), (0, 0), (1, 1), (2, 1)],
            [(1, 2), (0, 2), (1, 1), (1, 0)],
            [(2, 0), (2, 1), (1, 0), (0, 0)],
        ],
        PieceKind::T => [
            [(0, 1), (1, 1), (2, 1), (1, 2)],
            [(1, 2), (1, 1), (1, 0), (2, 1)],
            [(2, 1), (1, 1), (0, 1), (1, 0)],
            [(1, 0), (1, 1), (1, 2), (0, 1)],
        ],
        PieceKind::O => [
            [(0, 0), (1, 0), (0, 1), (1, 1)],
            [(0, 1), (0, 0), (1, 1), (1, 0)],
            [(1, 1), (0, 1), (1, 0), (0, 0)],
            [(1, 0), (1, 1), (0, 0), (0, 1)],
        ],
        PieceKind::I => [
            [(1, 0), (1, 1), (1, 2), (1, 3)],
            [(-1, 1), (0, 1), (1, 1), (2, 1)],
            [(1, 3), (1, 2), (1, 1), (1, 0)],
            [(2, 1), (1, 1), (0, 1), (-1, 1)],
        ],
        PieceKind::Z => [
            [(1, 0), (0, 1), (1, 1), (0, 2)],
            [(0, 0), (1, 1), (1, 0), (2, 1)],
            [(0, 2), (1, 1), (0, 1), (1, 0)],
            [(2, 1), (1, 0), (1, 1), (0, 0)],
        ],
        PieceKind::S => [
            [(0, 0), (0, 1), (1, 1), (1, 2)],
            [(0, 1), (1, 1), (1, 0), (2, 0)],
            [(1, 2), (1, 1), (0, 1), (0, 0)],
            [(2, 0), (1, 0), (1, 1), (0, 1)],
        ],
    }
}

fn sorted(mut offsets: Offsets) -> Offsets {
    offsets.sort();
    offsets
}

#[test]
fn test_every_shape_has_four_distinct_blocks() {
    for kind in PieceKind::ALL {
        let offsets = sorted(shape_of(kind));
        for pair in offsets.windows(2) {
            assert_ne!(pair[0], pair[1], "{kind:?} repeats a block");
        }
    }
}

#[test]
fn test_offsets_for_each_phase() {
    for kind in PieceKind::ALL {
        let expected = expected_phases(kind);
        for phase in 0..4u8 {
            assert_eq!(
                offsets_for_phase(kind, phase),
                expected[phase as usize],
                "{kind:?} phase {phase}"
            );
        }
    }
}

#[test]
fn test_phase_wraps_after_four_turns() {
    for kind in PieceKind::ALL {
        assert_eq!(offsets_for_phase(kind, 4), shape_of(kind));
        assert_eq!(offsets_for_phase(kind, 5), offsets_for_phase(kind, 1));
    }
}

#[test]
fn test_rotating_at_spawn_walks_the_phases() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let expected = expected_phases(kind);
        let mut piece = ActivePiece::spawn(kind);

        for step in 1..=4usize {
            assert!(try_rotate(&mut piece, &board), "{kind:?} rotation {step}");
            assert_eq!(piece.phase() as usize, step % 4);
            assert_eq!(*piece.offsets(), expected[step % 4], "{kind:?} rotation {step}");
            // Rotation never moves the anchor.
            assert_eq!((piece.x(), piece.y()), (4, ActivePiece::spawn(kind).y()));
        }
    }
}

#[test]
fn test_o_rotation_keeps_its_cells() {
    let board = Board::new();
    let mut piece = ActivePiece::spawn(PieceKind::O);
    let before = sorted(piece.cells());

    assert!(try_rotate(&mut piece, &board));
    assert_eq!(piece.phase(), 1);
    assert_eq!(sorted(piece.cells()), before);
}

#[test]
fn test_rotation_blocked_by_wall_is_noop() {
    let board = Board::new();
    let mut piece = ActivePiece::spawn(PieceKind::I);
    // Phase 0 of I occupies column x + 1; push it to the left wall.
    while blockfall::core::try_move(&mut piece, &board, blockfall::types::MoveDirection::Left) {}
    assert_eq!(piece.x(), -1);

    // Phase 1 reaches x - 1 = -2, outside the wall.
    let before = piece;
    assert!(!try_rotate(&mut piece, &board));
    assert_eq!(piece, before);
}
