//! Collision rules - the single legality predicate
//!
//! A placement is legal when every occupied cell of the orientation lands on
//! an in-bounds, empty cell. Pieces may reach into the buffer rows above the
//! visible field but never past the side walls or the floor.

use crate::board::Board;
use crate::shapes::Orientation;

/// Is `orientation` with its top-left corner at `(row, col)` legal on `board`?
pub fn is_legal(orientation: &Orientation, row: i16, col: i16, board: &Board) -> bool {
    orientation.cells().iter().all(|&(dr, dc)| {
        let (Some(r), Some(c)) = (row.checked_add(dr), col.checked_add(dc)) else {
            return false;
        };
        // Out-of-bounds reads as None, occupied as Some(Some(_)).
        matches!(board.get(r, c), Some(None))
    })
}
