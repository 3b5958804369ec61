//! Collision and landing oracle
//!
//! Pure predicates over a board and a set of absolute block positions. Every
//! move, rotation, lock decision and game-over test goes through these.

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// True if any block is outside the side walls, at or below the floor, or on
/// an occupied cell. Rows above the top edge are open space.
pub fn collides(board: &Board, cells: &[(i8, i8)]) -> bool {
    cells.iter().any(|&(x, y)| {
        x < 0
            || x >= BOARD_WIDTH as i8
            || y >= BOARD_HEIGHT as i8
            || board.is_occupied(x, y)
    })
}

/// True if the piece cannot fall any further
pub fn has_landed(board: &Board, piece: &ActivePiece) -> bool {
    if piece.y() + 1 >= BOARD_HEIGHT as i8 {
        return true;
    }
    collides(board, &piece.translated(0, 1).cells())
}
