//! Piece catalog - shape templates, rotation box sizes and pivot corrections
//!
//! Every kind is described by a 4x4 template with exactly four marked cells.
//! Rotation is a plain quarter-turn inside the kind's bounding box followed by
//! a hand-tuned translation (the "pivot adjustment") that keeps the piece
//! visually centered. The corrections are tabulated per kind, never derived.

use crate::types::{PieceKind, BLOCKS_PER_PIECE};

/// Offset of a single block relative to the piece anchor
pub type BlockOffset = (i8, i8);

/// The four block offsets of a piece
pub type Offsets = [BlockOffset; BLOCKS_PER_PIECE];

/// Edge length of a template
const TEMPLATE_EDGE: usize = 4;

/// Quarter-turns in a full rotation; phases wrap at this value
pub const PHASES_PER_TURN: u8 = 4;

/// Templates in catalog order (L, J, T, O, I, Z, S), rows top to bottom
const TEMPLATES: [[&str; TEMPLATE_EDGE]; 7] = [
    ["XX  ", " X  ", " X  ", "    "],
    ["XX  ", "X   ", "X   ", "    "],
    ["    ", "XXX ", " X  ", "    "],
    ["XX  ", "XX  ", "    ", "    "],
    [" X  ", " X  ", " X  ", " X  "],
    [" X  ", "XX  ", "X   ", "    "],
    ["X   ", "XX  ", " X  ", "    "],
];

/// Bounding-box edge used by the raw rotation, per kind
const ROTATION_SIZES: [u8; 7] = [3, 3, 3, 2, 4, 3, 3];

/// Phase-0 block offsets for a kind, in row-major template order
pub fn shape_of(kind: PieceKind) -> Offsets {
    let template = &TEMPLATES[kind.index()];
    let mut offsets = [(0, 0); BLOCKS_PER_PIECE];
    let mut n = 0;

    for (y, row) in template.iter().enumerate() {
        for (x, ch) in row.bytes().enumerate() {
            if ch == b'X' && n < BLOCKS_PER_PIECE {
                offsets[n] = (x as i8, y as i8);
                n += 1;
            }
        }
    }

    debug_assert_eq!(n, BLOCKS_PER_PIECE, "template for {kind:?} must mark 4 cells");
    offsets
}

/// Size of the box the kind rotates in (3 for L/J/T/Z/S, 2 for O, 4 for I)
pub fn rotation_period(kind: PieceKind) -> u8 {
    ROTATION_SIZES[kind.index()]
}

/// Quarter-turn every offset inside a `size`-wide box: `(x, y) -> (y, size - 1 - x)`
pub fn rotate_raw(size: u8, offsets: &Offsets) -> Offsets {
    let edge = size as i8 - 1;
    offsets.map(|(x, y)| (y, edge - x))
}

/// Apply the per-kind correction that follows a raw rotation
///
/// `phase_before` is the phase the piece was in before this rotation.
pub fn pivot_adjust(kind: PieceKind, phase_before: u8, offsets: &Offsets) -> Offsets {
    let even = phase_before % 2 == 0;
    let (dx, dy) = match kind {
        PieceKind::L | PieceKind::J | PieceKind::Z | PieceKind::S => {
            if even {
                (0, -1)
            } else {
                (0, 0)
            }
        }
        PieceKind::I => {
            if even {
                (-1, -1)
            } else {
                (0, -1)
            }
        }
        PieceKind::T | PieceKind::O => (0, 0),
    };
    offsets.map(|(x, y)| (x + dx, y + dy))
}

/// One full rotation step: raw quarter-turn then pivot correction
pub fn rotated_offsets(kind: PieceKind, phase_before: u8, offsets: &Offsets) -> Offsets {
    let raw = rotate_raw(rotation_period(kind), offsets);
    pivot_adjust(kind, phase_before, &raw)
}

/// Offsets of `kind` after `phase` rotations from spawn
pub fn offsets_for_phase(kind: PieceKind, phase: u8) -> Offsets {
    let mut offsets = shape_of(kind);
    for p in 0..phase % PHASES_PER_TURN {
        offsets = rotated_offsets(kind, p, &offsets);
    }
    offsets
}
