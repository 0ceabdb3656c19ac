//! Shared data types and constants for the Stackfall rules engine.
//!
//! Everything here is plain data with no dependencies, so the same types can be
//! used by the core engine, the input adapter, and the terminal renderer.
//!
//! # Playfield Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 visible rows (indexed 0-19, row grows downward)
//! - **Buffer**: 2 rows above the visible field (rows -2 and -1) used for spawning
//!
//! # Timing
//!
//! The engine is driven by a fixed tick. The default runner ticks every
//! [`TICK_MS`] milliseconds and gravity forces a one-row descent once the tick
//! counter exceeds [`GRAVITY_INTERVAL_TICKS`].
//!
//! # Examples
//!
//! ```
//! use stackfall_types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.letter(), 'T');
//! assert_eq!(Rotation::from_index(5), Rotation::East);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Playfield width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Visible playfield height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Rows above the visible field that hold freshly spawned pieces
pub const BUFFER_ROWS: u8 = 2;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Ticks that must elapse before gravity forces a one-row descent.
///
/// Gravity fires on the tick where the counter *exceeds* this value.
pub const GRAVITY_INTERVAL_TICKS: u32 = 60;

/// Number of upcoming pieces exposed by the next-piece preview
pub const PREVIEW_LEN: usize = 5;

/// Line clear scoring table, indexed by rows cleared in one lock.
///
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];


/// The seven piece kinds
///
/// The kind doubles as the shape-lookup key and the color key:
/// - **I**: Cyan, horizontal bar
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, S-shaped
/// - **T**: Purple, T-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Uppercase letter used by renderers.
    pub fn letter(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
        }
    }
}

/// Color tag associated with each piece kind.
///
/// Renderers map the tag to concrete colors; the engine never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

impl PieceColor {
    /// Suggested 24-bit color for terminal or pixel renderers.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            PieceColor::Cyan => (0, 220, 220),
            PieceColor::Blue => (60, 100, 230),
            PieceColor::Orange => (255, 165, 0),
            PieceColor::Yellow => (240, 220, 60),
            PieceColor::Green => (80, 210, 100),
            PieceColor::Purple => (170, 90, 210),
            PieceColor::Red => (220, 60, 60),
        }
    }
}

/// Clockwise rotation states of a piece.
///
/// The cycle is North → East → South → West → North. North is the spawn
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Number of clockwise quarter turns from North.
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Inverse of [`Rotation::index`], wrapping modulo 4.
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }
}

/// Player intents that can be applied to a session.
///
/// Input adapters translate device events into these; the engine maps each to
/// exactly one of its mutating operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift piece one column left
    MoveLeft,
    /// Shift piece one column right
    MoveRight,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// Descend one row, locking if the piece cannot descend
    SoftDrop,
    /// Descend to the lowest legal row and lock
    HardDrop,
    /// Set the active piece aside (once per placement)
    Hold,
    /// Start a fresh session
    Restart,
}

/// Session lifecycle.
///
/// `GameOver` is terminal: only a session reset leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}

/// Event recorded each time a piece locks.
///
/// Consumers (high-score persistence, statistics) pull it with
/// `GameState::take_last_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
    /// Session score after this lock.
    pub score: u32,
    /// The session ended with this lock (top-out, or the next spawn was blocked).
    pub game_over: bool,
}

/// A cell on the playfield
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell occupied by a locked piece of that kind
///
/// Cells never record orientation, only the occupying kind.
pub type Cell = Option<PieceKind>;
