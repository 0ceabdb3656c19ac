//! Board module - the playfield cell matrix
//!
//! Cells are addressed as `(row, col)` with row growing downward. Rows
//! `0..height` are visible; rows `-buffer_rows..0` sit above the visible field
//! and hold pieces while they spawn. Storage is a flat row-major `Vec` whose
//! first `buffer_rows` rows are the buffer.

use crate::collision::is_legal;
use crate::shapes::Orientation;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, BUFFER_ROWS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    buffer_rows: u8,
    /// Flat array of cells, row-major, buffer rows first
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Panics on a zero width or height.
    pub fn new(width: u8, height: u8, buffer_rows: u8) -> Self {
        assert!(width > 0 && height > 0, "board needs a non-zero size");
        let len = width as usize * (height as usize + buffer_rows as usize);
        Self {
            width,
            height,
            buffer_rows,
            cells: vec![None; len],
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    /// Visible height (buffer rows excluded)
    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn buffer_rows(&self) -> u8 {
        self.buffer_rows
    }

    /// Flat index for `(row, col)`, or None outside the buffer/visible area.
    #[inline(always)]
    fn index(&self, row: i16, col: i16) -> Option<usize> {
        if !self.in_bounds(row, col) {
            return None;
        }
        let storage_row = (row + self.buffer_rows as i16) as usize;
        Some(storage_row * self.width as usize + col as usize)
    }

    /// Whether `(row, col)` addresses a stored cell (buffer rows included).
    pub fn in_bounds(&self, row: i16, col: i16) -> bool {
        col >= 0
            && col < self.width as i16
            && row >= -(self.buffer_rows as i16)
            && row < self.height as i16
    }

    /// Cell at `(row, col)`; None when out of bounds
    pub fn get(&self, row: i16, col: i16) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at `(row, col)`; returns false when out of bounds
    pub fn set(&mut self, row: i16, col: i16, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and filled
    pub fn is_occupied(&self, row: i16, col: i16) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Every cell of the row is occupied. Out-of-range rows are never full.
    pub fn is_row_full(&self, row: i16) -> bool {
        match self.row_slice(row) {
            Some(cells) => cells.iter().all(|cell| cell.is_some()),
            None => false,
        }
    }

    /// Cells of one row, left to right
    pub fn row_slice(&self, row: i16) -> Option<&[Cell]> {
        let start = self.index(row, 0)?;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Visible cells only, row-major from row 0.
    pub fn visible_cells(&self) -> &[Cell] {
        let start = self.buffer_rows as usize * self.width as usize;
        &self.cells[start..]
    }

    /// Number of occupied cells, buffer included
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Write `kind` into every occupied cell of `orientation` placed at `(row, col)`.
    ///
    /// Returns true when any written cell is above the visible field (row < 0),
    /// which the caller treats as game over.
    ///
    /// Panics if the placement is not legal; callers validate first.
    pub fn stamp(&mut self, orientation: &Orientation, row: i16, col: i16, kind: PieceKind) -> bool {
        assert!(
            is_legal(orientation, row, col, self),
            "stamp of illegal placement {:?} at ({}, {})",
            kind,
            row,
            col
        );

        let mut above_field = false;
        for (dr, dc) in orientation.cells() {
            let r = row + dr;
            self.set(r, col + dc, Some(kind));
            above_field |= r < 0;
        }
        above_field
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Rows above each removed row shift down; empty rows enter at the top of
    /// the buffer, so the total row count never changes. Cascading clears are
    /// handled in one pass: surviving rows are compacted bottom-up with a
    /// read and a write cursor.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let total_rows = self.height as usize + self.buffer_rows as usize;
        let mut write_row = total_rows;
        let mut cleared = 0;

        for read_row in (0..total_rows).rev() {
            let start = read_row * width;
            let full = self.cells[start..start + width].iter().all(|c| c.is_some());
            if full {
                cleared += 1;
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                self.cells
                    .copy_within(start..start + width, write_row * width);
            }
        }

        self.cells[..write_row * width].fill(None);
        cleared
    }

    /// Empty every cell, buffer included
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT, BUFFER_ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::spawn_orientation;

    fn fill_row(board: &mut Board, row: i16) {
        for col in 0..board.width() as i16 {
            board.set(row, col, Some(PieceKind::I));
        }
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(-2, 0), Some(0));
        assert_eq!(board.index(0, 0), Some(20));
        assert_eq!(board.index(19, 9), Some(219));
        assert_eq!(board.index(-3, 0), None);
        assert_eq!(board.index(20, 0), None);
        assert_eq!(board.index(0, 10), None);
        assert_eq!(board.index(0, -1), None);
    }

    #[test]
    fn test_buffer_rows_are_addressable() {
        let mut board = Board::default();
        assert!(board.set(-1, 4, Some(PieceKind::T)));
        assert!(board.is_occupied(-1, 4));
        assert!(board.visible_cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_stamp_reports_rows_above_field() {
        let mut board = Board::default();
        let o = spawn_orientation(PieceKind::O);
        assert!(!board.stamp(&o, 18, 4, PieceKind::O));
        assert!(board.stamp(&o, -1, 0, PieceKind::O));
        assert_eq!(board.occupied_count(), 8);
    }

    #[test]
    #[should_panic]
    fn test_stamp_rejects_overlap() {
        let mut board = Board::default();
        board.set(19, 4, Some(PieceKind::I));
        board.stamp(&spawn_orientation(PieceKind::O), 18, 4, PieceKind::O);
    }

    #[test]
    fn test_clear_three_rows_keeps_partial_row() {
        let mut board = Board::default();
        for row in 17..20 {
            fill_row(&mut board, row);
        }
        board.set(16, 0, Some(PieceKind::T));
        board.set(16, 7, Some(PieceKind::S));

        assert_eq!(board.clear_full_rows(), 3);
        assert_eq!(board.get(19, 0), Some(Some(PieceKind::T)));
        assert_eq!(board.get(19, 7), Some(Some(PieceKind::S)));
        assert_eq!(board.occupied_count(), 2);
        for row in -2..3 {
            assert!(board.row_slice(row).unwrap().iter().all(|c| c.is_none()));
        }
    }

    #[test]
    fn test_clear_non_adjacent_rows() {
        let mut board = Board::default();
        fill_row(&mut board, 19);
        board.set(18, 3, Some(PieceKind::J));
        fill_row(&mut board, 17);
        board.set(16, 5, Some(PieceKind::L));

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.get(19, 3), Some(Some(PieceKind::J)));
        assert_eq!(board.get(18, 5), Some(Some(PieceKind::L)));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::default();
        fill_row(&mut board, 5);
        board.set(-2, 0, Some(PieceKind::Z));
        board.reset();
        assert_eq!(board.occupied_count(), 0);
    }
}
