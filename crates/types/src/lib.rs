//! Shared types - plain data used by the engine, input sampler and renderers
//!
//! Everything here is pure data with no game logic, so it can be shared by the
//! core engine, the terminal input layer and the renderers without cycles.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn column**: `BOARD_WIDTH / 2 - 1` = 4
//!
//! # Frame Timing
//!
//! The engine counts frames, not milliseconds. The front end is expected to
//! call the engine `TICKS_PER_SECOND` times per second.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICKS_PER_SECOND` | 60 | Canonical simulation rate |
//! | `DEFAULT_DAS_DELAY_FRAMES` | 20 | Frames a direction is held before repeating |
//! | `DEFAULT_DAS_INTERVAL_FRAMES` | 3 | Frames between repeats once repeating |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, KeyState, InputSnapshot, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.letter(), 'T');
//!
//! let input = InputSnapshot {
//!     left: KeyState::Pressed,
//!     ..InputSnapshot::default()
//! };
//! assert!(input.left.is_down());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Canonical simulation rate (one tick per rendered frame)
pub const TICKS_PER_SECOND: u32 = 60;

/// Frames a direction must stay held before auto-repeat kicks in
pub const DEFAULT_DAS_DELAY_FRAMES: u32 = 20;

/// Frames between two auto-repeated moves once repeating
pub const DEFAULT_DAS_INTERVAL_FRAMES: u32 = 3;

/// Lines needed for every level-up after the first one
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table, indexed by rows cleared at once
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Number of blocks in every piece
pub const BLOCKS_PER_PIECE: usize = 4;

/// The seven piece kinds
///
/// Declaration order matches the catalog table and the random draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    L,
    J,
    T,
    O,
    I,
    Z,
    S,
}

impl PieceKind {
    /// All kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::L,
        PieceKind::J,
        PieceKind::T,
        PieceKind::O,
        PieceKind::I,
        PieceKind::Z,
        PieceKind::S,
    ];

    /// Index into catalog tables
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`PieceKind::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "t" => Some(PieceKind::T),
            "o" => Some(PieceKind::O),
            "i" => Some(PieceKind::I),
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::T => "t",
            PieceKind::O => "o",
            PieceKind::I => "i",
            PieceKind::Z => "z",
            PieceKind::S => "s",
        }
    }

    /// Single uppercase letter, used by the HUD and the debug dump
    pub fn letter(&self) -> char {
        match self {
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::T => 'T',
            PieceKind::O => 'O',
            PieceKind::I => 'I',
            PieceKind::Z => 'Z',
            PieceKind::S => 'S',
        }
    }
}

/// Cell on the board (None = empty, Some = filled with the kind that locked there)
///
/// The kind only selects a render color once locked.
pub type Cell = Option<PieceKind>;

/// Encode a cell as a compact byte (0 = empty, 1..=7 = kind index + 1)
pub fn cell_to_u8(cell: Cell) -> u8 {
    match cell {
        None => 0,
        Some(kind) => kind.index() as u8 + 1,
    }
}

/// Decode a byte produced by [`cell_to_u8`]
pub fn cell_from_u8(v: u8) -> Cell {
    match v {
        0 => None,
        n => PieceKind::from_index(n as usize - 1),
    }
}

/// Directions a piece can be translated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveDirection {
    Left,
    Right,
    Down,
}

impl MoveDirection {
    /// Anchor delta for one step in this direction
    pub fn delta(self) -> (i8, i8) {
        match self {
            MoveDirection::Left => (-1, 0),
            MoveDirection::Right => (1, 0),
            MoveDirection::Down => (0, 1),
        }
    }
}

/// State of one button during a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KeyState {
    /// Not down
    #[default]
    Released,
    /// Went down this tick
    Pressed,
    /// Down since an earlier tick
    Held,
}

impl KeyState {
    pub fn is_down(self) -> bool {
        !matches!(self, KeyState::Released)
    }

    pub fn is_pressed(self) -> bool {
        matches!(self, KeyState::Pressed)
    }

    pub fn is_held(self) -> bool {
        matches!(self, KeyState::Held)
    }
}

/// Abstract per-tick input, independent of any keyboard API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub rotate: KeyState,
    pub left: KeyState,
    pub right: KeyState,
    pub soft_drop: KeyState,
}

impl InputSnapshot {
    /// Snapshot with nothing down
    pub const IDLE: InputSnapshot = InputSnapshot {
        rotate: KeyState::Released,
        left: KeyState::Released,
        right: KeyState::Released,
        soft_drop: KeyState::Released,
    };

    /// Key state for a movement direction
    pub fn direction(&self, direction: MoveDirection) -> KeyState {
        match direction {
            MoveDirection::Left => self.left,
            MoveDirection::Right => self.right,
            MoveDirection::Down => self.soft_drop,
        }
    }
}
