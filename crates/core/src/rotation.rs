//! Rotation - clockwise quarter turns without wall kicks
//!
//! The candidate state is the next one in the kind's clockwise cycle, tested
//! at the piece's current position only. If it collides, the rotation is
//! rejected and the current state is kept. No kick offsets are searched.

use crate::board::Board;
use crate::collision::is_legal;
use crate::shapes::{next_rotation, orientation_of};
use crate::types::{PieceKind, Rotation};

/// Resolve a clockwise rotation request.
///
/// Returns the accepted rotation state, which equals `rotation` when the
/// rotated orientation would collide at `(row, col)`.
pub fn attempt_rotate(
    kind: PieceKind,
    rotation: Rotation,
    row: i16,
    col: i16,
    board: &Board,
) -> Rotation {
    let candidate = next_rotation(kind, rotation);
    if candidate == rotation {
        return rotation;
    }

    if is_legal(&orientation_of(kind, candidate), row, col, board) {
        candidate
    } else {
        rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotates_in_open_space() {
        let board = Board::default();
        assert_eq!(
            attempt_rotate(PieceKind::T, Rotation::North, 5, 4, &board),
            Rotation::East
        );
        assert_eq!(
            attempt_rotate(PieceKind::T, Rotation::West, 5, 4, &board),
            Rotation::North
        );
    }

    #[test]
    fn o_never_changes_state() {
        let board = Board::default();
        assert_eq!(
            attempt_rotate(PieceKind::O, Rotation::North, 5, 4, &board),
            Rotation::North
        );
    }

    #[test]
    fn blocked_rotation_is_rejected_without_kick() {
        let board = Board::default();
        // Vertical I hugging the left wall: local column 2 at grid column 0.
        // The next horizontal state spans columns -2..1 and there is no kick.
        assert_eq!(
            attempt_rotate(PieceKind::I, Rotation::East, 5, -2, &board),
            Rotation::East
        );
    }

    #[test]
    fn blocked_by_stack() {
        let mut board = Board::default();
        // T pointing up at rows 17-18; East adds a cell at local (2,1) = (19, 5).
        board.set(19, 5, Some(PieceKind::L));
        assert_eq!(
            attempt_rotate(PieceKind::T, Rotation::North, 17, 4, &board),
            Rotation::North
        );
    }
}
