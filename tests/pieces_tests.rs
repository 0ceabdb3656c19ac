//! Piece tests - orientation catalog, rotation, and the 7-bag

use stackfall::core::shapes::{next_rotation, orientations_of};
use stackfall::core::{attempt_rotate, color_of, orientation_of, spawn_orientation, Board, PieceQueue};
use stackfall::types::{PieceColor, PieceKind, Rotation};

// ============== Shape Tests ==============

#[test]
fn test_spawn_shapes() {
    let cases: [(PieceKind, &[(i16, i16)]); 7] = [
        (PieceKind::I, &[(1, 0), (1, 1), (1, 2), (1, 3)]),
        (PieceKind::J, &[(0, 0), (1, 0), (1, 1), (1, 2)]),
        (PieceKind::L, &[(0, 2), (1, 0), (1, 1), (1, 2)]),
        (PieceKind::O, &[(0, 0), (0, 1), (1, 0), (1, 1)]),
        (PieceKind::S, &[(0, 1), (0, 2), (1, 0), (1, 1)]),
        (PieceKind::T, &[(0, 1), (1, 0), (1, 1), (1, 2)]),
        (PieceKind::Z, &[(0, 0), (0, 1), (1, 1), (1, 2)]),
    ];
    for (kind, cells) in cases {
        assert_eq!(spawn_orientation(kind).cells().as_slice(), cells, "{:?}", kind);
    }
}

#[test]
fn test_rotation_cycle_lengths() {
    assert_eq!(orientations_of(PieceKind::O).len(), 1);
    for kind in [PieceKind::I, PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
        assert_eq!(orientations_of(kind).len(), 4);
    }
}

#[test]
fn test_i_south_is_third_row() {
    let south = orientation_of(PieceKind::I, Rotation::South);
    assert_eq!(south.cells().as_slice(), &[(2, 0), (2, 1), (2, 2), (2, 3)]);
}

#[test]
fn test_next_rotation_wraps() {
    assert_eq!(next_rotation(PieceKind::T, Rotation::West), Rotation::North);
    assert_eq!(next_rotation(PieceKind::T, Rotation::North), Rotation::East);
}

#[test]
fn test_colors() {
    assert_eq!(color_of(PieceKind::I), PieceColor::Cyan);
    assert_eq!(color_of(PieceKind::T), PieceColor::Purple);
    assert_eq!(color_of(PieceKind::O), PieceColor::Yellow);
}

// ============== Rotation Tests ==============

#[test]
fn test_rotate_in_open_space() {
    let board = Board::default();
    assert_eq!(attempt_rotate(PieceKind::T, Rotation::North, 5, 4, &board), Rotation::East);
    assert_eq!(attempt_rotate(PieceKind::T, Rotation::West, 5, 4, &board), Rotation::North);
}

#[test]
fn test_blocked_rotation_keeps_state() {
    let mut board = Board::default();
    // T east needs local (2, 1).
    board.set(7, 5, Some(PieceKind::Z));
    assert_eq!(attempt_rotate(PieceKind::T, Rotation::North, 5, 4, &board), Rotation::North);
}

#[test]
fn test_no_wall_kick() {
    let board = Board::default();
    // Vertical I flush against the left wall cannot turn horizontal.
    assert_eq!(attempt_rotate(PieceKind::I, Rotation::East, 5, -2, &board), Rotation::East);
}

#[test]
fn test_o_never_changes() {
    let board = Board::default();
    assert_eq!(attempt_rotate(PieceKind::O, Rotation::North, 0, 0, &board), Rotation::North);
}

// ============== Bag Tests ==============

#[test]
fn test_bag_windows_are_permutations() {
    let mut queue = PieceQueue::new(8080);
    let draws: Vec<_> = (0..70).map(|_| queue.draw()).collect();
    for bag in draws.chunks(7) {
        let mut sorted = bag.to_vec();
        sorted.sort_by_key(|k| k.letter());
        let mut all = PieceKind::ALL.to_vec();
        all.sort_by_key(|k| k.letter());
        assert_eq!(sorted, all);
    }
}

#[test]
fn test_no_kind_more_than_twice_in_any_seven() {
    let mut queue = PieceQueue::new(17);
    let draws: Vec<_> = (0..140).map(|_| queue.draw()).collect();
    for window in draws.windows(7) {
        for kind in PieceKind::ALL {
            assert!(window.iter().filter(|&&k| k == kind).count() <= 2);
        }
    }
}

#[test]
fn test_different_seeds_differ() {
    let mut a = PieceQueue::new(1);
    let mut b = PieceQueue::new(2);
    let sa: Vec<_> = (0..14).map(|_| a.draw()).collect();
    let sb: Vec<_> = (0..14).map(|_| b.draw()).collect();
    assert_ne!(sa, sb);
}
