//! Movement and rotation engine
//!
//! A transform is computed on a copy, checked against the collision oracle,
//! and either committed in full or dropped. A dropped transform is a no-op:
//! the piece keeps its anchor, phase and offsets, and nothing is reported
//! beyond the returned `false`. There is no wall-kick search.

use crate::board::Board;
use crate::collision::collides;
use crate::piece::ActivePiece;
use crate::types::MoveDirection;

/// Translate the piece one cell; returns whether it moved
pub fn try_move(piece: &mut ActivePiece, board: &Board, direction: MoveDirection) -> bool {
    let (dx, dy) = direction.delta();
    let candidate = piece.translated(dx, dy);
    commit_if_free(piece, board, candidate)
}

/// Rotate the piece one quarter-turn in place; returns whether it rotated
pub fn try_rotate(piece: &mut ActivePiece, board: &Board) -> bool {
    let candidate = piece.rotated();
    commit_if_free(piece, board, candidate)
}

fn commit_if_free(piece: &mut ActivePiece, board: &Board, candidate: ActivePiece) -> bool {
    if collides(board, &candidate.cells()) {
        return false;
    }
    *piece = candidate;
    true
}
