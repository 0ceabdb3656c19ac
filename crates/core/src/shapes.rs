//! Shapes module - piece orientation matrices and color tags
//!
//! Each kind has a square occupancy matrix (2x2 for O, 4x4 for I, 3x3 for the
//! rest). The clockwise rotation cycle is derived from the spawn matrix by
//! rotating it a quarter turn at a time, so every cycle closes after four
//! turns. O has a single distinct state.
//!
//! Matrix coordinates are `(row, col)` inside the piece's local frame, with
//! row growing downward like the playfield.

use arrayvec::ArrayVec;

use crate::types::{PieceColor, PieceKind, Rotation};

/// Largest matrix side of any piece (the I piece)
pub const MAX_ORIENTATION_SIZE: usize = 4;

/// Occupied cell offset `(row, col)` inside an orientation matrix
pub type CellOffset = (i16, i16);

/// One rotational state: a square occupancy matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation {
    size: u8,
    cells: [[bool; MAX_ORIENTATION_SIZE]; MAX_ORIENTATION_SIZE],
}

impl Orientation {
    /// Build an orientation from the top-left `size` x `size` block of `rows`.
    pub const fn from_rows(size: u8, rows: [[u8; MAX_ORIENTATION_SIZE]; MAX_ORIENTATION_SIZE]) -> Self {
        assert!(size as usize <= MAX_ORIENTATION_SIZE);
        let n = size as usize;
        let mut cells = [[false; MAX_ORIENTATION_SIZE]; MAX_ORIENTATION_SIZE];
        let mut r = 0;
        while r < n {
            let mut c = 0;
            while c < n {
                cells[r][c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self { size, cells }
    }

    /// Matrix side length. This is also the width used to center spawns.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether local cell `(row, col)` is occupied. Outside the matrix is empty.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        row < self.size as usize && col < self.size as usize && self.cells[row][col]
    }

    /// Occupied offsets in row-major order.
    pub fn cells(&self) -> ArrayVec<CellOffset, 16> {
        let n = self.size as usize;
        let mut out = ArrayVec::new();
        for r in 0..n {
            for c in 0..n {
                if self.cells[r][c] {
                    out.push((r as i16, c as i16));
                }
            }
        }
        out
    }

    /// The matrix turned a quarter turn clockwise.
    ///
    /// Local cell `(r, c)` moves to `(c, n - 1 - r)`.
    pub const fn rotated_cw(&self) -> Self {
        let n = self.size as usize;
        let mut cells = [[false; MAX_ORIENTATION_SIZE]; MAX_ORIENTATION_SIZE];
        let mut r = 0;
        while r < n {
            let mut c = 0;
            while c < n {
                cells[c][n - 1 - r] = self.cells[r][c];
                c += 1;
            }
            r += 1;
        }
        Self {
            size: self.size,
            cells,
        }
    }
}

const I_SPAWN: Orientation = Orientation::from_rows(
    4,
    [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const J_SPAWN: Orientation = Orientation::from_rows(
    3,
    [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const L_SPAWN: Orientation = Orientation::from_rows(
    3,
    [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const O_SPAWN: Orientation = Orientation::from_rows(
    2,
    [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const S_SPAWN: Orientation = Orientation::from_rows(
    3,
    [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const T_SPAWN: Orientation = Orientation::from_rows(
    3,
    [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const Z_SPAWN: Orientation = Orientation::from_rows(
    3,
    [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const fn cycle(spawn: Orientation) -> [Orientation; 4] {
    let east = spawn.rotated_cw();
    let south = east.rotated_cw();
    let west = south.rotated_cw();
    [spawn, east, south, west]
}

static I_CYCLE: [Orientation; 4] = cycle(I_SPAWN);
static J_CYCLE: [Orientation; 4] = cycle(J_SPAWN);
static L_CYCLE: [Orientation; 4] = cycle(L_SPAWN);
static O_CYCLE: [Orientation; 1] = [O_SPAWN];
static S_CYCLE: [Orientation; 4] = cycle(S_SPAWN);
static T_CYCLE: [Orientation; 4] = cycle(T_SPAWN);
static Z_CYCLE: [Orientation; 4] = cycle(Z_SPAWN);

/// Rotation states of `kind` in clockwise order, starting at the spawn state.
///
/// The sequence is cyclic: the state after the last one is the first.
pub fn orientations_of(kind: PieceKind) -> &'static [Orientation] {
    match kind {
        PieceKind::I => &I_CYCLE,
        PieceKind::J => &J_CYCLE,
        PieceKind::L => &L_CYCLE,
        PieceKind::O => &O_CYCLE,
        PieceKind::S => &S_CYCLE,
        PieceKind::T => &T_CYCLE,
        PieceKind::Z => &Z_CYCLE,
    }
}

/// Orientation of `kind` at `rotation`, wrapping for kinds with fewer states.
pub fn orientation_of(kind: PieceKind, rotation: Rotation) -> Orientation {
    let states = orientations_of(kind);
    states[rotation.index() % states.len()]
}

/// Spawn orientation for a new piece
pub fn spawn_orientation(kind: PieceKind) -> Orientation {
    orientations_of(kind)[0]
}

/// The rotation state that follows `rotation` in the kind's clockwise cycle.
pub fn next_rotation(kind: PieceKind, rotation: Rotation) -> Rotation {
    let len = orientations_of(kind).len();
    Rotation::from_index((rotation.index() % len + 1) % len)
}

/// Render color tag for a kind
pub fn color_of(kind: PieceKind) -> PieceColor {
    match kind {
        PieceKind::I => PieceColor::Cyan,
        PieceKind::J => PieceColor::Blue,
        PieceKind::L => PieceColor::Orange,
        PieceKind::O => PieceColor::Yellow,
        PieceKind::S => PieceColor::Green,
        PieceKind::T => PieceColor::Purple,
        PieceKind::Z => PieceColor::Red,
    }
}
