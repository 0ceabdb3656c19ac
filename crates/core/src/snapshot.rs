//! Read-only session views for renderers and observers.

use crate::game_state::Tetromino;
use crate::types::{Cell, GamePhase, PieceKind, Rotation, PREVIEW_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub row: i16,
    pub col: i16,
    /// Occupied grid cells `(row, col)`
    pub cells: [(i16, i16); 4],
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        let mut cells = [(0, 0); 4];
        for (slot, cell) in cells.iter_mut().zip(value.cells()) {
            *slot = cell;
        }
        Self {
            kind: value.kind,
            rotation: value.rotation,
            row: value.row,
            col: value.col,
            cells,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Visible cells, row-major from row 0
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    /// Row the active piece would land at
    pub ghost_row: Option<i16>,
    pub hold: Option<PieceKind>,
    pub next_queue: [PieceKind; PREVIEW_LEN],
    pub can_hold: bool,
    pub phase: GamePhase,
    pub score: u32,
    pub lines: u32,
}

impl GameSnapshot {
    /// Visible cell at `(row, col)`; empty when out of range.
    pub fn cell(&self, row: u8, col: u8) -> Cell {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.board
            .get(row as usize * self.width as usize + col as usize)
            .copied()
            .flatten()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Active piece cells shifted down to the ghost row.
    pub fn ghost_cells(&self) -> Option<[(i16, i16); 4]> {
        let active = self.active?;
        let drop = self.ghost_row? - active.row;
        Some(active.cells.map(|(r, c)| (r + drop, c)))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            board: Vec::new(),
            active: None,
            ghost_row: None,
            hold: None,
            next_queue: [PieceKind::I; PREVIEW_LEN],
            can_hold: true,
            phase: GamePhase::Playing,
            score: 0,
            lines: 0,
        }
    }
}
