//! Game state module - one play session
//!
//! `GameState` owns the board, the active piece, the 7-bag queue, and the
//! session counters. Every mutation goes through the operations here, and
//! every position or orientation change is checked with
//! [`is_legal`](crate::collision::is_legal) before it is applied.
//!
//! Once the session reaches [`GamePhase::GameOver`] all mutating operations
//! are no-ops until [`GameState::reset_session`].

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::collision::is_legal;
use crate::config::{ConfigError, EngineConfig};
use crate::rng::PieceQueue;
use crate::rotation::attempt_rotate;
use crate::scoring::calculate_score;
use crate::shapes::{orientation_of, spawn_orientation, Orientation};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Active falling piece
///
/// `(row, col)` is the grid position of the orientation matrix's top-left
/// corner; row may be negative while the piece is in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub row: i16,
    pub col: i16,
}

impl Tetromino {
    /// Piece at its spawn coordinates on a field `width` columns wide.
    ///
    /// The matrix is centered horizontally. I spawns at row -1 and the rest
    /// at row -2 so their occupied rows line up just above the field.
    pub fn spawn(kind: PieceKind, width: u8) -> Self {
        let size = spawn_orientation(kind).size() as i16;
        let col = width as i16 / 2 - (size + 1) / 2;
        let row = if kind == PieceKind::I { -1 } else { -2 };
        Self {
            kind,
            rotation: Rotation::North,
            row,
            col,
        }
    }

    pub fn orientation(&self) -> Orientation {
        orientation_of(self.kind, self.rotation)
    }

    /// Occupied cells in grid coordinates `(row, col)`
    pub fn cells(&self) -> ArrayVec<(i16, i16), 4> {
        self.orientation()
            .cells()
            .iter()
            .map(|&(dr, dc)| (self.row + dr, self.col + dc))
            .collect()
    }

    pub fn is_legal(&self, board: &Board) -> bool {
        is_legal(&self.orientation(), self.row, self.col, board)
    }

    fn offset(self, drow: i16, dcol: i16) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
            ..self
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    config: EngineConfig,
    board: Board,
    /// None only after the session has ended.
    active: Option<Tetromino>,
    hold: Option<PieceKind>,
    next_queue: [PieceKind; PREVIEW_LEN],
    piece_queue: PieceQueue,
    phase: GamePhase,
    score: u32,
    lines: u32,
    can_hold: bool,
    /// Ticks since gravity last forced a descent.
    gravity_counter: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Start a session on the standard 10x20 field with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::build(EngineConfig::default(), seed)
    }

    /// Start a session with explicit dimensions and gravity.
    pub fn with_config(config: EngineConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: EngineConfig, seed: u32) -> Self {
        let piece_queue = PieceQueue::new(seed);
        let next_queue = piece_queue.preview();

        let mut state = Self {
            config,
            board: Board::new(config.width, config.height, config.buffer_rows),
            active: None,
            hold: None,
            next_queue,
            piece_queue,
            phase: GamePhase::Playing,
            score: 0,
            lines: 0,
            can_hold: true,
            gravity_counter: 0,
            last_event: None,
        };
        state.reset_session();
        state
    }

    /// Begin a new session in place: empty board, empty bag, zeroed counters,
    /// and a freshly spawned piece. Works from any phase.
    pub fn reset_session(&mut self) {
        self.board.reset();
        self.piece_queue.clear();
        self.active = None;
        self.hold = None;
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.lines = 0;
        self.can_hold = true;
        self.gravity_counter = 0;
        self.last_event = None;
        self.spawn_piece();
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    /// Upcoming kinds in spawn order
    pub fn next_queue(&self) -> &[PieceKind; PREVIEW_LEN] {
        &self.next_queue
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn gravity_counter(&self) -> u32 {
        self.gravity_counter
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Read-only view for renderers.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Fill an existing snapshot, reusing its cell buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.visible_cells());
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_row = self.ghost_row();
        out.hold = self.hold;
        out.next_queue = self.next_queue;
        out.can_hold = self.can_hold;
        out.phase = self.phase;
        out.score = self.score;
        out.lines = self.lines;
    }

    /// Draw the next kind and install it at its spawn position.
    fn spawn_piece(&mut self) -> bool {
        let kind = self.piece_queue.draw();
        self.next_queue = self.piece_queue.preview();
        self.install(kind)
    }

    /// Make `kind` the active piece at its spawn coordinates.
    ///
    /// A spawn that collides ends the session without touching the board.
    fn install(&mut self, kind: PieceKind) -> bool {
        let piece = Tetromino::spawn(kind, self.board.width());
        if !piece.is_legal(&self.board) {
            self.active = None;
            self.phase = GamePhase::GameOver;
            return false;
        }
        self.active = Some(piece);
        true
    }

    fn playing_piece(&self) -> Option<Tetromino> {
        match self.phase {
            GamePhase::Playing => self.active,
            GamePhase::GameOver => None,
        }
    }

    /// Move the active piece by `(drow, dcol)` if the target is legal
    fn try_move(&mut self, drow: i16, dcol: i16) -> bool {
        let Some(active) = self.playing_piece() else {
            return false;
        };

        let moved = active.offset(drow, dcol);
        if moved.is_legal(&self.board) {
            self.active = Some(moved);
            return true;
        }
        false
    }

    pub fn shift_left(&mut self) -> bool {
        self.try_move(0, -1)
    }

    pub fn shift_right(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Rotate clockwise in place; returns false when the rotation was rejected.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.playing_piece() else {
            return false;
        };

        let rotation = attempt_rotate(
            active.kind,
            active.rotation,
            active.row,
            active.col,
            &self.board,
        );
        if rotation == active.rotation {
            return false;
        }

        self.active = Some(Tetromino { rotation, ..active });
        true
    }

    /// Descend one row, or lock in place when the row below is blocked.
    ///
    /// Returns true if the piece moved down.
    pub fn soft_drop_tick(&mut self) -> bool {
        if self.playing_piece().is_none() {
            return false;
        }
        if self.try_move(1, 0) {
            return true;
        }
        self.lock_piece();
        false
    }

    /// Drop to the lowest legal row and lock. Returns the rows descended.
    pub fn hard_drop(&mut self) -> u16 {
        let Some(active) = self.playing_piece() else {
            return 0;
        };

        let distance = self.drop_distance(&active);
        self.active = Some(active.offset(distance, 0));
        self.lock_piece();
        distance as u16
    }

    /// Set the active piece aside.
    ///
    /// With an empty hold slot the piece is stored and the next kind spawns;
    /// otherwise the held kind swaps in at its spawn coordinates. Allowed once
    /// per placement.
    pub fn hold(&mut self) -> bool {
        if !self.can_hold {
            return false;
        }
        let Some(active) = self.playing_piece() else {
            return false;
        };

        let held = self.hold.replace(active.kind);
        match held {
            Some(kind) => {
                self.install(kind);
            }
            None => {
                self.spawn_piece();
            }
        }

        self.can_hold = false;
        true
    }

    /// Advance the gravity clock by one tick.
    ///
    /// Returns true when gravity fired on this tick.
    pub fn tick(&mut self) -> bool {
        if self.phase == GamePhase::GameOver {
            return false;
        }

        self.gravity_counter += 1;
        if self.gravity_counter > self.config.gravity_interval {
            self.gravity_counter = 0;
            self.soft_drop_tick();
            return true;
        }
        false
    }

    /// Apply a player action. Returns whether the session changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.shift_left(),
            GameAction::MoveRight => self.shift_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => {
                if self.playing_piece().is_none() {
                    return false;
                }
                self.soft_drop_tick();
                true
            }
            GameAction::HardDrop => {
                if self.playing_piece().is_none() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::Hold => self.hold(),
            GameAction::Restart => {
                self.reset_session();
                true
            }
        }
    }

    /// Row the active piece would lock at if hard-dropped
    pub fn ghost_row(&self) -> Option<i16> {
        let active = self.active?;
        Some(active.row + self.drop_distance(&active))
    }

    fn drop_distance(&self, piece: &Tetromino) -> i16 {
        let orientation = piece.orientation();
        let mut distance = 0;
        while is_legal(&orientation, piece.row + distance + 1, piece.col, &self.board) {
            distance += 1;
        }
        distance
    }

    /// Stamp the active piece, then either end the session (cells above the
    /// field) or clear rows, score, and spawn the next piece.
    fn lock_piece(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        let Some(active) = self.active.take() else {
            return;
        };

        let above_field =
            self.board
                .stamp(&active.orientation(), active.row, active.col, active.kind);

        if above_field {
            self.phase = GamePhase::GameOver;
            self.last_event = Some(LockEvent {
                lines_cleared: 0,
                score_delta: 0,
                score: self.score,
                game_over: true,
            });
            return;
        }

        let cleared = self.board.clear_full_rows();
        let delta = calculate_score(cleared);
        self.score = self.score.saturating_add(delta);
        self.lines += cleared as u32;
        self.can_hold = true;

        self.spawn_piece();

        self.last_event = Some(LockEvent {
            lines_cleared: cleared as u32,
            score_delta: delta,
            score: self.score,
            game_over: self.is_game_over(),
        });
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
